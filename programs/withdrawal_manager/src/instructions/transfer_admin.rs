use anchor_lang::prelude::*;

use crate::{error::ErrorCode, helpers::require_admin, state::WithdrawalManager};

pub fn handler(ctx: Context<TransferAdmin>, new_admin: Pubkey) -> Result<()> {
    require_admin(&ctx.accounts.admin, &ctx.accounts.manager)?;
    require_keys_neq!(new_admin, Pubkey::default(), ErrorCode::InvalidAdmin);

    ctx.accounts.manager.admin = new_admin;
    msg!("Admin rotated to {}", new_admin);
    Ok(())
}

#[derive(Accounts)]
pub struct TransferAdmin<'info> {
    pub admin: Signer<'info>,
    #[account(
        mut,
        seeds = [b"manager", manager.share_mint.as_ref()],
        bump = manager.bump,
    )]
    pub manager: Account<'info, WithdrawalManager>,
}
