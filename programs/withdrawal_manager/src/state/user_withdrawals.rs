use anchor_lang::prelude::*;

use crate::{constants::MAX_PENDING_WITHDRAWALS, error::ErrorCode};

/// Per-user index of request ids that have not been executed yet.
#[account]
#[derive(Default, InitSpace)]
pub struct UserWithdrawals {
    pub manager: Pubkey,
    pub user: Pubkey,
    #[max_len(MAX_PENDING_WITHDRAWALS)]
    pub pending: Vec<u64>,
    pub request_count: u64,
    pub bump: u8,
}

impl UserWithdrawals {
    pub fn push_pending(&mut self, request_id: u64) -> Result<()> {
        require!(
            self.pending.len() < MAX_PENDING_WITHDRAWALS,
            ErrorCode::PendingWithdrawalsFull
        );

        self.pending.push(request_id);
        self.request_count = self
            .request_count
            .checked_add(1)
            .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
        Ok(())
    }

    /// Drops an executed id. An id missing from the index means the index and
    /// the request accounts disagree.
    pub fn remove_pending(&mut self, request_id: u64) -> Result<()> {
        let idx = self
            .pending
            .iter()
            .position(|id| *id == request_id)
            .ok_or_else(|| error!(ErrorCode::InvalidWithdrawalRequest))?;
        self.pending.remove(idx);
        Ok(())
    }
}
