use anchor_lang::prelude::*;

use crate::{
    helpers::load_program_account,
    state::{UserWithdrawals, WithdrawalManager},
};

pub fn handler(ctx: Context<GetPendingWithdrawals>, _user: Pubkey) -> Result<Vec<u64>> {
    Ok(
        load_program_account::<UserWithdrawals>(&ctx.accounts.user_withdrawals)
            .map(|index| index.pending)
            .unwrap_or_default(),
    )
}

#[derive(Accounts)]
#[instruction(user: Pubkey)]
pub struct GetPendingWithdrawals<'info> {
    #[account(
        seeds = [b"manager", manager.share_mint.as_ref()],
        bump = manager.bump,
    )]
    pub manager: Account<'info, WithdrawalManager>,
    /// CHECK: may be uninitialized; only read when owned by this program.
    #[account(
        seeds = [b"user-withdrawals", manager.key().as_ref(), user.as_ref()],
        bump,
    )]
    pub user_withdrawals: UncheckedAccount<'info>,
}
