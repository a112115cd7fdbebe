use anchor_lang::prelude::*;

use crate::{error::ErrorCode, state::WithdrawalManager};

pub fn require_admin(admin: &Signer<'_>, manager: &Account<WithdrawalManager>) -> Result<()> {
    require_keys_eq!(admin.key(), manager.admin, ErrorCode::Unauthorized);
    Ok(())
}

/// Admin or any registered operator may administer withdrawal periods.
pub fn require_period_authority(
    authority: &Signer<'_>,
    manager: &Account<WithdrawalManager>,
) -> Result<()> {
    require!(
        manager.is_period_authority(&authority.key()),
        ErrorCode::Unauthorized
    );
    Ok(())
}
