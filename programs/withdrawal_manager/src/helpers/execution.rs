use anchor_lang::prelude::*;

use crate::{
    constants::MAX_PROOF_DEPTH,
    error::ErrorCode,
    merkle::{self, Hash},
    state::{WithdrawalPeriod, WithdrawalRequest},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Settlement {
    pub period_id: u64,
    pub assets: u64,
    pub shares: u64,
    pub period_drained: bool,
}

fn authorize(
    period: &WithdrawalPeriod,
    request: &WithdrawalRequest,
    proof: &[Hash],
    now: i64,
) -> Result<()> {
    require!(request.exists(), ErrorCode::WithdrawalRequestNotFound);
    require!(!request.executed, ErrorCode::WithdrawalAlreadyExecuted);
    require!(period.is_open(now), ErrorCode::WithdrawalPeriodInactive);
    require!(proof.len() <= MAX_PROOF_DEPTH, ErrorCode::ProofTooLong);
    require!(
        merkle::verify(proof, &period.merkle_root, &request.leaf()),
        ErrorCode::InvalidMerkleProof
    );

    let withdrawn = period
        .withdrawn_assets
        .checked_add(request.assets)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
    require!(
        withdrawn <= period.total_assets,
        ErrorCode::ExceedsPeriodAssets
    );
    Ok(())
}

/// Runs every execution check, then marks the request executed and charges
/// the period. Nothing is mutated unless all checks pass.
///
/// Ledger checks come first. The treasury balance is only consulted for a
/// claim that is otherwise executable.
pub fn settle_withdrawal(
    period: &mut WithdrawalPeriod,
    request: &mut WithdrawalRequest,
    proof: &[Hash],
    now: i64,
    treasury_balance: u64,
) -> Result<Settlement> {
    authorize(period, request, proof, now)?;
    require!(
        request.assets <= treasury_balance,
        ErrorCode::InsufficientTreasury
    );

    let period_drained = period.record_withdrawal(request.assets, now)?;
    request.executed = true;

    Ok(Settlement {
        period_id: period.id,
        assets: request.assets,
        shares: request.shares,
        period_drained,
    })
}

pub fn check_withdrawal(
    period: &WithdrawalPeriod,
    request: &WithdrawalRequest,
    proof: &[Hash],
    now: i64,
) -> bool {
    authorize(period, request, proof, now).is_ok()
}
