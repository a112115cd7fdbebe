use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::{
    constants::FIRST_REQUEST_ID,
    error::ErrorCode,
    state::{WithdrawalManager, WithdrawalPeriod},
};

pub fn handler(ctx: Context<InitializeManager>) -> Result<()> {
    require_keys_neq!(
        ctx.accounts.share_mint.key(),
        ctx.accounts.asset_mint.key(),
        ErrorCode::InvalidTokenAccount
    );

    let manager = &mut ctx.accounts.manager;
    manager.admin = ctx.accounts.admin.key();
    manager.share_mint = ctx.accounts.share_mint.key();
    manager.asset_mint = ctx.accounts.asset_mint.key();
    manager.treasury_vault = ctx.accounts.treasury_vault.key();
    manager.treasury_auth_bump = ctx.bumps.treasury_auth;
    manager.operators = Vec::new();
    manager.next_request_id = FIRST_REQUEST_ID;
    manager.period_count = 0;
    manager.current_period = WithdrawalPeriod::default();
    manager.bump = ctx.bumps.manager;

    msg!("Withdrawal manager initialized. Admin: {}", manager.admin);
    Ok(())
}

#[derive(Accounts)]
pub struct InitializeManager<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,
    pub share_mint: Account<'info, Mint>,
    pub asset_mint: Account<'info, Mint>,
    #[account(
        init,
        payer = admin,
        seeds = [b"manager", share_mint.key().as_ref()],
        bump,
        space = 8 + WithdrawalManager::INIT_SPACE,
    )]
    pub manager: Account<'info, WithdrawalManager>,
    /// CHECK: PDA authority for treasury vault transfer signing.
    #[account(seeds = [b"treasury-auth", manager.key().as_ref()], bump)]
    pub treasury_auth: UncheckedAccount<'info>,
    #[account(
        init,
        payer = admin,
        seeds = [b"treasury-vault", manager.key().as_ref()],
        bump,
        token::mint = asset_mint,
        token::authority = treasury_auth,
    )]
    pub treasury_vault: Account<'info, TokenAccount>,
    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}
