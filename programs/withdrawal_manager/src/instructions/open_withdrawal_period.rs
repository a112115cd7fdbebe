use anchor_lang::prelude::*;

use crate::{
    events::{PeriodCloseReason, WithdrawalPeriodClosed, WithdrawalPeriodOpened},
    helpers::require_period_authority,
    state::WithdrawalManager,
};

pub fn handler(
    ctx: Context<OpenWithdrawalPeriod>,
    duration: i64,
    merkle_root: [u8; 32],
    total_assets: u64,
) -> Result<()> {
    require_period_authority(&ctx.accounts.authority, &ctx.accounts.manager)?;

    let now = Clock::get()?.unix_timestamp;
    let manager_key = ctx.accounts.manager.key();
    let manager = &mut ctx.accounts.manager;

    // The root and total are trusted: the tree is never rebuilt on-chain.
    if let Some(expired) = manager.open_period(now, duration, merkle_root, total_assets)? {
        emit!(WithdrawalPeriodClosed {
            manager: manager_key,
            period_id: expired.id,
            end_time: expired.end_time,
            withdrawn_assets: expired.withdrawn_assets,
            reason: PeriodCloseReason::Expired,
        });
    }

    let period = manager.current_period;
    msg!(
        "Withdrawal period {} opened until {} for {} assets",
        period.id,
        period.end_time,
        period.total_assets
    );
    emit!(WithdrawalPeriodOpened {
        manager: manager_key,
        period_id: period.id,
        start_time: period.start_time,
        end_time: period.end_time,
        merkle_root: period.merkle_root,
        total_assets: period.total_assets,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct OpenWithdrawalPeriod<'info> {
    pub authority: Signer<'info>,
    #[account(
        mut,
        seeds = [b"manager", manager.share_mint.as_ref()],
        bump = manager.bump,
    )]
    pub manager: Account<'info, WithdrawalManager>,
}
