use anchor_lang::prelude::*;

use crate::{
    helpers::{check_withdrawal, load_program_account},
    state::{WithdrawalManager, WithdrawalRequest},
};

/// True when `execute_withdrawal` would pass every ledger check right now.
/// Token balances and signatures are not part of this answer.
pub fn handler(
    ctx: Context<CheckWithdrawalProof>,
    _request_id: u64,
    proof: Vec<[u8; 32]>,
) -> Result<bool> {
    let now = Clock::get()?.unix_timestamp;
    let request_info = &ctx.accounts.withdrawal_request;
    let Some(request) = load_program_account::<WithdrawalRequest>(request_info) else {
        return Ok(false);
    };

    Ok(check_withdrawal(
        &ctx.accounts.manager.current_period,
        &request,
        &proof,
        now,
    ))
}

#[derive(Accounts)]
#[instruction(request_id: u64)]
pub struct CheckWithdrawalProof<'info> {
    #[account(
        seeds = [b"manager", manager.share_mint.as_ref()],
        bump = manager.bump,
    )]
    pub manager: Account<'info, WithdrawalManager>,
    /// CHECK: may be uninitialized; only read when owned by this program.
    #[account(
        seeds = [b"withdrawal-request", manager.key().as_ref(), &request_id.to_le_bytes()],
        bump,
    )]
    pub withdrawal_request: UncheckedAccount<'info>,
}
