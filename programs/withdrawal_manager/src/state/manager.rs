use anchor_lang::prelude::*;

use crate::{
    constants::{FIRST_REQUEST_ID, MAX_OPERATORS},
    error::ErrorCode,
    events::PeriodCloseReason,
    state::WithdrawalPeriod,
};

#[account]
#[derive(InitSpace)]
pub struct WithdrawalManager {
    pub admin: Pubkey,
    pub share_mint: Pubkey,
    pub asset_mint: Pubkey,
    pub treasury_vault: Pubkey,
    pub treasury_auth_bump: u8,
    #[max_len(MAX_OPERATORS)]
    pub operators: Vec<Pubkey>,
    pub next_request_id: u64,
    pub period_count: u64,
    pub current_period: WithdrawalPeriod,
    pub bump: u8,
}

impl WithdrawalManager {
    pub fn is_period_authority(&self, key: &Pubkey) -> bool {
        *key == self.admin || self.operators.contains(key)
    }

    pub fn allocate_request_id(&mut self) -> Result<u64> {
        let id = self.next_request_id.max(FIRST_REQUEST_ID);
        self.next_request_id = id
            .checked_add(1)
            .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
        Ok(id)
    }

    /// Replaces the period slot with a fresh period. A stored period that
    /// already expired is closed first and handed back so the caller can
    /// report it.
    pub fn open_period(
        &mut self,
        now: i64,
        duration: i64,
        merkle_root: [u8; 32],
        total_assets: u64,
    ) -> Result<Option<WithdrawalPeriod>> {
        require!(
            !self.current_period.is_open(now),
            ErrorCode::WithdrawalPeriodAlreadyActive
        );

        let period_id = self
            .period_count
            .checked_add(1)
            .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
        let period = WithdrawalPeriod::open(period_id, now, duration, merkle_root, total_assets)?;

        let expired = if self.current_period.active {
            self.current_period.close(now);
            Some(self.current_period)
        } else {
            None
        };

        self.period_count = period_id;
        self.current_period = period;
        Ok(expired)
    }

    pub fn close_period(&mut self, now: i64, by_authority: bool) -> Result<PeriodCloseReason> {
        require!(
            self.current_period.active,
            ErrorCode::WithdrawalPeriodInactive
        );

        let expired = self.current_period.is_expired(now);
        require!(
            by_authority || expired,
            ErrorCode::WithdrawalPeriodNotExpired
        );

        self.current_period.close(now);
        Ok(if expired {
            PeriodCloseReason::Expired
        } else {
            PeriodCloseReason::Manual
        })
    }

    pub fn add_operator(&mut self, operator: Pubkey) -> Result<()> {
        require_keys_neq!(operator, Pubkey::default(), ErrorCode::InvalidOperator);
        require!(
            self.operators.len() < MAX_OPERATORS,
            ErrorCode::OperatorSetFull
        );
        require!(
            !self.operators.contains(&operator),
            ErrorCode::OperatorAlreadyExists
        );

        self.operators.push(operator);
        Ok(())
    }

    pub fn remove_operator(&mut self, operator: Pubkey) -> Result<()> {
        let idx = self
            .operators
            .iter()
            .position(|k| *k == operator)
            .ok_or_else(|| error!(ErrorCode::OperatorNotFound))?;

        self.operators.swap_remove(idx);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_error, sample_manager};

    const ROOT: [u8; 32] = [3u8; 32];

    #[test]
    fn test_request_ids_start_at_one() {
        let mut manager = sample_manager();
        manager.next_request_id = 0;
        assert_eq!(manager.allocate_request_id().unwrap(), 1);
        assert_eq!(manager.allocate_request_id().unwrap(), 2);
        assert_eq!(manager.next_request_id, 3);
    }

    #[test]
    fn test_only_one_period_open_at_a_time() {
        let mut manager = sample_manager();
        assert!(manager.open_period(100, 60, ROOT, 25).unwrap().is_none());
        assert_eq!(manager.current_period.id, 1);

        assert_error(
            manager.open_period(120, 60, [4u8; 32], 50),
            ErrorCode::WithdrawalPeriodAlreadyActive,
        );
        assert_eq!(manager.current_period.merkle_root, ROOT);
        assert_eq!(manager.period_count, 1);
    }

    #[test]
    fn test_open_failure_keeps_slot() {
        let mut manager = sample_manager();
        manager.open_period(100, 60, ROOT, 25).unwrap();
        manager.close_period(110, true).unwrap();
        let closed = manager.current_period;

        assert_error(
            manager.open_period(120, 0, ROOT, 25),
            ErrorCode::InvalidDuration,
        );
        assert_eq!(manager.current_period, closed);
        assert_eq!(manager.period_count, 1);
    }

    #[test]
    fn test_open_replaces_expired_period() {
        let mut manager = sample_manager();
        manager.open_period(100, 60, ROOT, 25).unwrap();

        let expired = manager.open_period(200, 60, [4u8; 32], 50).unwrap().unwrap();
        assert_eq!(expired.id, 1);
        assert!(!expired.active);
        assert_eq!(manager.current_period.id, 2);
        assert_eq!(manager.current_period.start_time, 200);
        assert!(manager.current_period.active);
    }

    #[test]
    fn test_close_rules() {
        let mut manager = sample_manager();
        assert_error(
            manager.close_period(100, true),
            ErrorCode::WithdrawalPeriodInactive,
        );

        manager.open_period(100, 60, ROOT, 25).unwrap();
        assert_error(
            manager.close_period(150, false),
            ErrorCode::WithdrawalPeriodNotExpired,
        );
        assert_eq!(
            manager.close_period(150, true).unwrap(),
            PeriodCloseReason::Manual
        );
        assert_eq!(manager.current_period.end_time, 150);
        assert_error(
            manager.close_period(151, true),
            ErrorCode::WithdrawalPeriodInactive,
        );

        manager.open_period(200, 60, ROOT, 25).unwrap();
        assert_eq!(
            manager.close_period(261, false).unwrap(),
            PeriodCloseReason::Expired
        );
        assert!(!manager.current_period.active);
    }

    #[test]
    fn test_operator_set() {
        let mut manager = sample_manager();
        let operator = Pubkey::new_unique();
        assert!(!manager.is_period_authority(&operator));

        manager.add_operator(operator).unwrap();
        assert!(manager.is_period_authority(&operator));
        assert_error(
            manager.add_operator(operator),
            ErrorCode::OperatorAlreadyExists,
        );
        assert_error(
            manager.add_operator(Pubkey::default()),
            ErrorCode::InvalidOperator,
        );

        manager.remove_operator(operator).unwrap();
        assert!(!manager.is_period_authority(&operator));
        assert_error(
            manager.remove_operator(operator),
            ErrorCode::OperatorNotFound,
        );

        for _ in 0..MAX_OPERATORS {
            manager.add_operator(Pubkey::new_unique()).unwrap();
        }
        assert_error(
            manager.add_operator(Pubkey::new_unique()),
            ErrorCode::OperatorSetFull,
        );
    }
}
