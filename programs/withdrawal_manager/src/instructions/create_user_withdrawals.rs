use anchor_lang::prelude::*;

use crate::{
    error::ErrorCode,
    state::{UserWithdrawals, WithdrawalManager},
};

pub fn handler(ctx: Context<CreateUserWithdrawals>, user: Pubkey) -> Result<()> {
    require_keys_neq!(user, Pubkey::default(), ErrorCode::InvalidUser);

    let index = &mut ctx.accounts.user_withdrawals;
    index.manager = ctx.accounts.manager.key();
    index.user = user;
    index.pending = Vec::new();
    index.request_count = 0;
    index.bump = ctx.bumps.user_withdrawals;
    Ok(())
}

#[derive(Accounts)]
#[instruction(user: Pubkey)]
pub struct CreateUserWithdrawals<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,
    #[account(
        seeds = [b"manager", manager.share_mint.as_ref()],
        bump = manager.bump,
    )]
    pub manager: Account<'info, WithdrawalManager>,
    #[account(
        init,
        payer = payer,
        seeds = [b"user-withdrawals", manager.key().as_ref(), user.as_ref()],
        bump,
        space = 8 + UserWithdrawals::INIT_SPACE,
    )]
    pub user_withdrawals: Account<'info, UserWithdrawals>,
    pub system_program: Program<'info, System>,
}
