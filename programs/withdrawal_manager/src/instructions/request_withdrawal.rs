use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, TokenAccount};

use crate::{
    error::ErrorCode,
    events::WithdrawalRequested,
    helpers::preview_withdraw,
    state::{UserWithdrawals, WithdrawalManager, WithdrawalRequest},
};

pub fn handler(
    ctx: Context<RequestWithdrawal>,
    user: Pubkey,
    assets: u64,
    shares: u64,
) -> Result<u64> {
    require_keys_neq!(user, Pubkey::default(), ErrorCode::InvalidUser);
    require!(assets > 0, ErrorCode::InvalidAmount);

    let owner = ctx.accounts.owner.key();
    require!(
        owner == user || ctx.accounts.manager.is_period_authority(&owner),
        ErrorCode::Unauthorized
    );

    let shares = if shares == 0 {
        preview_withdraw(
            assets,
            ctx.accounts.treasury_vault.amount,
            ctx.accounts.share_mint.supply,
        )?
    } else {
        shares
    };
    require!(shares > 0, ErrorCode::InvalidAmount);

    let now = Clock::get()?.unix_timestamp;
    let manager_key = ctx.accounts.manager.key();
    let request_id = ctx.accounts.manager.allocate_request_id()?;
    ctx.accounts.user_withdrawals.push_pending(request_id)?;

    let req = &mut ctx.accounts.withdrawal_request;
    req.manager = manager_key;
    req.id = request_id;
    req.user = user;
    req.assets = assets;
    req.shares = shares;
    req.created_at = now;
    req.approved = false;
    req.executed = false;
    req.bump = ctx.bumps.withdrawal_request;

    emit!(WithdrawalRequested {
        manager: manager_key,
        request_id,
        user,
        assets,
        shares,
    });

    Ok(request_id)
}

#[derive(Accounts)]
#[instruction(user: Pubkey)]
pub struct RequestWithdrawal<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,
    #[account(
        mut,
        seeds = [b"manager", manager.share_mint.as_ref()],
        bump = manager.bump,
    )]
    pub manager: Account<'info, WithdrawalManager>,
    #[account(
        mut,
        seeds = [b"user-withdrawals", manager.key().as_ref(), user.as_ref()],
        bump = user_withdrawals.bump,
    )]
    pub user_withdrawals: Account<'info, UserWithdrawals>,
    #[account(
        init,
        payer = owner,
        seeds = [b"withdrawal-request", manager.key().as_ref(), &manager.next_request_id.to_le_bytes()],
        bump,
        space = 8 + WithdrawalRequest::INIT_SPACE,
    )]
    pub withdrawal_request: Account<'info, WithdrawalRequest>,
    #[account(address = manager.share_mint)]
    pub share_mint: Account<'info, Mint>,
    #[account(address = manager.treasury_vault)]
    pub treasury_vault: Account<'info, TokenAccount>,
    pub system_program: Program<'info, System>,
}
