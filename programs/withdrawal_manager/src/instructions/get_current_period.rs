use anchor_lang::prelude::*;

use crate::state::{WithdrawalManager, WithdrawalPeriod};

pub fn handler(ctx: Context<GetCurrentPeriod>) -> Result<WithdrawalPeriod> {
    let now = Clock::get()?.unix_timestamp;
    Ok(ctx.accounts.manager.current_period.observed_at(now))
}

#[derive(Accounts)]
pub struct GetCurrentPeriod<'info> {
    #[account(
        seeds = [b"manager", manager.share_mint.as_ref()],
        bump = manager.bump,
    )]
    pub manager: Account<'info, WithdrawalManager>,
}
