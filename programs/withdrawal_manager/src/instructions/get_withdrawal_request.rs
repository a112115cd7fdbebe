use anchor_lang::prelude::*;

use crate::{
    helpers::load_program_account,
    state::{WithdrawalManager, WithdrawalRequest},
};

/// Returns a zeroed record (`id == 0`) when the request does not exist.
pub fn handler(ctx: Context<GetWithdrawalRequest>, _request_id: u64) -> Result<WithdrawalRequest> {
    Ok(
        load_program_account::<WithdrawalRequest>(&ctx.accounts.withdrawal_request)
            .unwrap_or_default(),
    )
}

#[derive(Accounts)]
#[instruction(request_id: u64)]
pub struct GetWithdrawalRequest<'info> {
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
