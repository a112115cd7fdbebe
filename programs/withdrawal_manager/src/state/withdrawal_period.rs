use anchor_lang::prelude::*;

use crate::error::ErrorCode;

/// One committed batch. Lives in the manager's single period slot; a zeroed
/// value (`id == 0`) means no period was ever opened.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Default, InitSpace, PartialEq, Eq, Debug)]
pub struct WithdrawalPeriod {
    pub id: u64,
    pub start_time: i64,
    pub end_time: i64,
    pub merkle_root: [u8; 32],
    pub total_assets: u64,
    pub withdrawn_assets: u64,
    pub active: bool,
}

impl WithdrawalPeriod {
    pub fn open(
        id: u64,
        now: i64,
        duration: i64,
        merkle_root: [u8; 32],
        total_assets: u64,
    ) -> Result<Self> {
        require!(duration > 0, ErrorCode::InvalidDuration);
        require!(total_assets > 0, ErrorCode::InvalidAmount);

        let end_time = now
            .checked_add(duration)
            .ok_or_else(|| error!(ErrorCode::MathOverflow))?;

        Ok(Self {
            id,
            start_time: now,
            end_time,
            merkle_root,
            total_assets,
            withdrawn_assets: 0,
            active: true,
        })
    }

    pub fn is_expired(&self, now: i64) -> bool {
        now > self.end_time
    }

    pub fn is_open(&self, now: i64) -> bool {
        self.active && !self.is_expired(now)
    }

    pub fn remaining_assets(&self) -> u64 {
        self.total_assets.saturating_sub(self.withdrawn_assets)
    }

    pub fn close(&mut self, now: i64) {
        self.active = false;
        self.end_time = now;
    }

    /// Returns true when this withdrawal drained the period and closed it.
    pub fn record_withdrawal(&mut self, assets: u64, now: i64) -> Result<bool> {
        require!(self.is_open(now), ErrorCode::WithdrawalPeriodInactive);

        let withdrawn = self
            .withdrawn_assets
            .checked_add(assets)
            .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
        require!(
            withdrawn <= self.total_assets,
            ErrorCode::ExceedsPeriodAssets
        );

        self.withdrawn_assets = withdrawn;
        if withdrawn == self.total_assets {
            self.close(now);
            return Ok(true);
        }
        Ok(false)
    }

    /// Expiry is applied lazily: a stored period past its end reads as closed.
    pub fn observed_at(&self, now: i64) -> Self {
        let mut period = *self;
        if period.active && period.is_expired(now) {
            period.active = false;
        }
        period
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_error;

    const ROOT: [u8; 32] = [9u8; 32];

    #[test]
    fn test_open_sets_window() {
        let period = WithdrawalPeriod::open(1, 1_000, 600, ROOT, 25).unwrap();
        assert_eq!(period.start_time, 1_000);
        assert_eq!(period.end_time, 1_600);
        assert_eq!(period.withdrawn_assets, 0);
        assert!(period.active);
    }

    #[test]
    fn test_open_rejects_invalid_input() {
        assert_error(
            WithdrawalPeriod::open(1, 0, 0, ROOT, 25),
            ErrorCode::InvalidDuration,
        );
        assert_error(
            WithdrawalPeriod::open(1, 0, -5, ROOT, 25),
            ErrorCode::InvalidDuration,
        );
        assert_error(
            WithdrawalPeriod::open(1, 0, 60, ROOT, 0),
            ErrorCode::InvalidAmount,
        );
        assert_error(
            WithdrawalPeriod::open(1, i64::MAX, 1, ROOT, 25),
            ErrorCode::MathOverflow,
        );
    }

    #[test]
    fn test_expiry_boundary() {
        let period = WithdrawalPeriod::open(1, 100, 50, ROOT, 25).unwrap();
        assert!(period.is_open(150));
        assert!(!period.is_open(151));
        assert!(period.observed_at(150).active);
        assert!(!period.observed_at(151).active);
        assert!(period.active);
    }

    #[test]
    fn test_record_withdrawal_auto_closes_when_drained() {
        let mut period = WithdrawalPeriod::open(1, 100, 50, ROOT, 25).unwrap();
        assert!(!period.record_withdrawal(10, 110).unwrap());
        assert_eq!(period.remaining_assets(), 15);
        assert!(period.record_withdrawal(15, 120).unwrap());
        assert!(!period.active);
        assert_eq!(period.end_time, 120);
        assert_eq!(period.withdrawn_assets, 25);
    }

    #[test]
    fn test_record_withdrawal_is_bounded() {
        let mut period = WithdrawalPeriod::open(1, 100, 50, ROOT, 10).unwrap();
        assert_error(
            period.record_withdrawal(15, 110),
            ErrorCode::ExceedsPeriodAssets,
        );
        assert_eq!(period.withdrawn_assets, 0);
        assert!(period.active);

        assert_error(
            period.record_withdrawal(1, 151),
            ErrorCode::WithdrawalPeriodInactive,
        );
        assert_eq!(period.withdrawn_assets, 0);
    }
}
