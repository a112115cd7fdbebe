use anchor_lang::prelude::*;

use crate::error::ErrorCode;

/// Shares that must be burned to withdraw `assets`, rounded up in favour of
/// the treasury. An empty pool converts one to one.
pub fn preview_withdraw(assets: u64, total_assets: u64, share_supply: u64) -> Result<u64> {
    if share_supply == 0 || total_assets == 0 {
        return Ok(assets);
    }

    let numerator = (assets as u128)
        .checked_mul(share_supply as u128)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
    let shares = numerator
        .checked_add(total_assets as u128 - 1)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?
        .checked_div(total_assets as u128)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;

    u64::try_from(shares).map_err(|_| error!(ErrorCode::MathOverflow))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_error;

    #[test]
    fn test_preview_withdraw() {
        assert_eq!(preview_withdraw(10, 100, 200).unwrap(), 20);
        assert_eq!(preview_withdraw(10, 200, 100).unwrap(), 5);
        // 1 * 3 / 2 rounds up.
        assert_eq!(preview_withdraw(1, 2, 3).unwrap(), 2);
    }

    #[test]
    fn test_preview_withdraw_empty_pool() {
        assert_eq!(preview_withdraw(42, 0, 1_000).unwrap(), 42);
        assert_eq!(preview_withdraw(42, 1_000, 0).unwrap(), 42);
    }

    #[test]
    fn test_preview_withdraw_overflow() {
        assert_error(
            preview_withdraw(u64::MAX, 1, u64::MAX),
            ErrorCode::MathOverflow,
        );
    }
}
