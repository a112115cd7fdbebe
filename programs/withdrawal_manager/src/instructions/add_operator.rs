use anchor_lang::prelude::*;

use crate::{events::OperatorUpdated, helpers::require_admin, state::WithdrawalManager};

pub fn handler(ctx: Context<AddOperator>, operator: Pubkey) -> Result<()> {
    require_admin(&ctx.accounts.admin, &ctx.accounts.manager)?;

    let manager_key = ctx.accounts.manager.key();
    ctx.accounts.manager.add_operator(operator)?;

    emit!(OperatorUpdated {
        manager: manager_key,
        operator,
        added: true,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct AddOperator<'info> {
    pub admin: Signer<'info>,
    #[account(
        mut,
        seeds = [b"manager", manager.share_mint.as_ref()],
        bump = manager.bump,
    )]
    pub manager: Account<'info, WithdrawalManager>,
}
