use anchor_lang::error::Error;
use anchor_lang::prelude::*;

use crate::{
    constants::FIRST_REQUEST_ID,
    error::ErrorCode,
    state::{WithdrawalManager, WithdrawalPeriod, WithdrawalRequest},
};

pub fn assert_error<T: std::fmt::Debug>(result: Result<T>, expected: ErrorCode) {
    match result {
        Err(Error::AnchorError(err)) => assert_eq!(
            err.error_code_number,
            u32::from(expected),
            "expected {expected}, got {}",
            err.error_name
        ),
        other => panic!("expected {expected}, got {other:?}"),
    }
}

pub fn sample_request(id: u64, user: Pubkey, assets: u64) -> WithdrawalRequest {
    WithdrawalRequest {
        id,
        user,
        assets,
        shares: assets,
        created_at: 500,
        ..Default::default()
    }
}

pub fn sample_manager() -> WithdrawalManager {
    WithdrawalManager {
        admin: Pubkey::new_unique(),
        share_mint: Pubkey::new_unique(),
        asset_mint: Pubkey::new_unique(),
        treasury_vault: Pubkey::new_unique(),
        treasury_auth_bump: 255,
        operators: Vec::new(),
        next_request_id: FIRST_REQUEST_ID,
        period_count: 0,
        current_period: WithdrawalPeriod::default(),
        bump: 255,
    }
}
