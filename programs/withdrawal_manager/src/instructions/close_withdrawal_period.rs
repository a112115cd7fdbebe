use anchor_lang::prelude::*;

use crate::{events::WithdrawalPeriodClosed, state::WithdrawalManager};

/// Period authorities may close at any time; anyone may close once expired.
pub fn handler(ctx: Context<CloseWithdrawalPeriod>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let manager_key = ctx.accounts.manager.key();
    let by_authority = ctx
        .accounts
        .manager
        .is_period_authority(&ctx.accounts.caller.key());

    let manager = &mut ctx.accounts.manager;
    let reason = manager.close_period(now, by_authority)?;

    let period = manager.current_period;
    msg!("Withdrawal period {} closed", period.id);
    emit!(WithdrawalPeriodClosed {
        manager: manager_key,
        period_id: period.id,
        end_time: period.end_time,
        withdrawn_assets: period.withdrawn_assets,
        reason,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct CloseWithdrawalPeriod<'info> {
    pub caller: Signer<'info>,
    #[account(
        mut,
        seeds = [b"manager", manager.share_mint.as_ref()],
        bump = manager.bump,
    )]
    pub manager: Account<'info, WithdrawalManager>,
}
