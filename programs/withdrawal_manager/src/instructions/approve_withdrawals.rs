use anchor_lang::prelude::*;

use crate::{
    error::ErrorCode,
    events::WithdrawalsApproved,
    helpers::{load_program_account, require_period_authority, store_program_account},
    state::{WithdrawalManager, WithdrawalRequest},
};

/// Request accounts are passed as remaining accounts, in `request_ids` order.
/// Ids without an initialized account, and executed requests, are skipped.
pub fn handler(ctx: Context<ApproveWithdrawals>, request_ids: Vec<u64>) -> Result<()> {
    require_period_authority(&ctx.accounts.authority, &ctx.accounts.manager)?;

    let now = Clock::get()?.unix_timestamp;
    require!(
        !ctx.accounts.manager.current_period.is_open(now),
        ErrorCode::WithdrawalPeriodAlreadyActive
    );
    require!(
        request_ids.len() == ctx.remaining_accounts.len(),
        ErrorCode::ApprovalAccountsMismatch
    );

    let manager_key = ctx.accounts.manager.key();
    let mut approved: u32 = 0;
    let mut skipped: u32 = 0;
    for (request_id, info) in request_ids.iter().zip(ctx.remaining_accounts.iter()) {
        let Some(mut request) = load_program_account::<WithdrawalRequest>(info) else {
            skipped += 1;
            continue;
        };
        require_keys_eq!(
            request.manager,
            manager_key,
            ErrorCode::InvalidWithdrawalRequest
        );
        require!(
            request.id == *request_id,
            ErrorCode::InvalidWithdrawalRequest
        );

        if request.approve() {
            store_program_account(info, &request)?;
            approved += 1;
        } else {
            skipped += 1;
        }
    }

    emit!(WithdrawalsApproved {
        manager: manager_key,
        approved,
        skipped,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct ApproveWithdrawals<'info> {
    pub authority: Signer<'info>,
    #[account(
        seeds = [b"manager", manager.share_mint.as_ref()],
        bump = manager.bump,
    )]
    pub manager: Account<'info, WithdrawalManager>,
}
