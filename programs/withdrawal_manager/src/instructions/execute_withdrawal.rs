use anchor_lang::prelude::*;
use anchor_spl::token::{self, Burn, Mint, Token, TokenAccount, Transfer};

use crate::{
    error::ErrorCode,
    events::{PeriodCloseReason, WithdrawalExecuted, WithdrawalPeriodClosed},
    helpers::settle_withdrawal,
    state::{UserWithdrawals, WithdrawalManager, WithdrawalRequest},
};

pub fn handler(
    ctx: Context<ExecuteWithdrawal>,
    request_id: u64,
    proof: Vec<[u8; 32]>,
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;

    let treasury_balance = ctx.accounts.treasury_vault.amount;
    let manager_key = ctx.accounts.manager.key();
    let settlement = settle_withdrawal(
        &mut ctx.accounts.manager.current_period,
        &mut ctx.accounts.withdrawal_request,
        &proof,
        now,
        treasury_balance,
    )?;
    ctx.accounts.user_withdrawals.remove_pending(request_id)?;

    token::burn(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Burn {
                mint: ctx.accounts.share_mint.to_account_info(),
                from: ctx.accounts.user_share_account.to_account_info(),
                authority: ctx.accounts.user.to_account_info(),
            },
        ),
        settlement.shares,
    )?;

    let treasury_auth_bump = ctx.accounts.manager.treasury_auth_bump;
    let signer_seed_group: &[&[u8]] = &[
        b"treasury-auth",
        manager_key.as_ref(),
        &[treasury_auth_bump],
    ];
    let signer_seeds = &[signer_seed_group];
    let cpi_accounts = Transfer {
        from: ctx.accounts.treasury_vault.to_account_info(),
        to: ctx.accounts.user_asset_account.to_account_info(),
        authority: ctx.accounts.treasury_auth.to_account_info(),
    };
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            cpi_accounts,
            signer_seeds,
        ),
        settlement.assets,
    )?;

    let user = ctx.accounts.user.key();
    emit!(WithdrawalExecuted {
        manager: manager_key,
        request_id,
        period_id: settlement.period_id,
        user,
        assets: settlement.assets,
        shares: settlement.shares,
    });

    if settlement.period_drained {
        let period = &ctx.accounts.manager.current_period;
        msg!("Withdrawal period {} drained", period.id);
        emit!(WithdrawalPeriodClosed {
            manager: manager_key,
            period_id: period.id,
            end_time: period.end_time,
            withdrawn_assets: period.withdrawn_assets,
            reason: PeriodCloseReason::Drained,
        });
    }

    Ok(())
}

#[derive(Accounts)]
#[instruction(request_id: u64)]
pub struct ExecuteWithdrawal<'info> {
    #[account(mut)]
    pub user: Signer<'info>,
    #[account(
        mut,
        seeds = [b"manager", manager.share_mint.as_ref()],
        bump = manager.bump,
    )]
    pub manager: Account<'info, WithdrawalManager>,
    #[account(
        mut,
        seeds = [b"withdrawal-request", manager.key().as_ref(), &request_id.to_le_bytes()],
        bump = withdrawal_request.bump,
        constraint = withdrawal_request.user == user.key() @ ErrorCode::Unauthorized,
    )]
    pub withdrawal_request: Account<'info, WithdrawalRequest>,
    #[account(
        mut,
        seeds = [b"user-withdrawals", manager.key().as_ref(), user.key().as_ref()],
        bump = user_withdrawals.bump,
    )]
    pub user_withdrawals: Account<'info, UserWithdrawals>,
    #[account(mut, address = manager.share_mint)]
    pub share_mint: Account<'info, Mint>,
    #[account(
        mut,
        constraint = user_share_account.mint == manager.share_mint @ ErrorCode::InvalidTokenAccount,
        constraint = user_share_account.owner == user.key() @ ErrorCode::Unauthorized,
    )]
    pub user_share_account: Account<'info, TokenAccount>,
    /// CHECK: treasury authority PDA.
    #[account(seeds = [b"treasury-auth", manager.key().as_ref()], bump = manager.treasury_auth_bump)]
    pub treasury_auth: UncheckedAccount<'info>,
    #[account(mut, address = manager.treasury_vault)]
    pub treasury_vault: Account<'info, TokenAccount>,
    #[account(
        mut,
        constraint = user_asset_account.mint == manager.asset_mint @ ErrorCode::InvalidTokenAccount,
        constraint = user_asset_account.owner == user.key() @ ErrorCode::Unauthorized,
    )]
    pub user_asset_account: Account<'info, TokenAccount>,
    pub token_program: Program<'info, Token>,
}
