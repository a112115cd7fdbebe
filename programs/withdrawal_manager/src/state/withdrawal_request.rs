use anchor_lang::prelude::*;

use crate::merkle::{self, Hash};

#[account]
#[derive(Default, Debug, InitSpace)]
pub struct WithdrawalRequest {
    pub manager: Pubkey,
    pub id: u64,
    pub user: Pubkey,
    pub assets: u64,
    pub shares: u64,
    pub created_at: i64,
    pub approved: bool,
    pub executed: bool,
    pub bump: u8,
}

impl WithdrawalRequest {
    pub fn exists(&self) -> bool {
        self.id != 0
    }

    pub fn leaf(&self) -> Hash {
        merkle::leaf(self.id, &self.user, self.assets)
    }

    /// Marks the request as approved for the next batch. Returns true only on
    /// the transition; missing, executed or already approved requests are
    /// left untouched.
    pub fn approve(&mut self) -> bool {
        if !self.exists() || self.executed || self.approved {
            return false;
        }
        self.approved = true;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::sample_request;

    #[test]
    fn test_approve_counts_each_request_once() {
        let mut request = sample_request(1, Pubkey::new_unique(), 10);
        assert!(request.approve());
        assert!(request.approved);
        assert!(!request.approve());
        assert!(request.approved);
    }

    #[test]
    fn test_approve_skips_missing_and_executed() {
        let mut missing = WithdrawalRequest::default();
        assert!(!missing.approve());
        assert!(!missing.approved);

        let mut executed = sample_request(2, Pubkey::new_unique(), 10);
        executed.executed = true;
        assert!(!executed.approve());
        assert!(!executed.approved);
    }
}
