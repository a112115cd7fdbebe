use anchor_lang::prelude::*;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum PeriodCloseReason {
    Manual,
    Drained,
    Expired,
}

#[event]
pub struct WithdrawalRequested {
    pub manager: Pubkey,
    pub request_id: u64,
    pub user: Pubkey,
    pub assets: u64,
    pub shares: u64,
}

#[event]
pub struct WithdrawalExecuted {
    pub manager: Pubkey,
    pub request_id: u64,
    pub period_id: u64,
    pub user: Pubkey,
    pub assets: u64,
    pub shares: u64,
}

#[event]
pub struct WithdrawalPeriodOpened {
    pub manager: Pubkey,
    pub period_id: u64,
    pub start_time: i64,
    pub end_time: i64,
    pub merkle_root: [u8; 32],
    pub total_assets: u64,
}

#[event]
pub struct WithdrawalPeriodClosed {
    pub manager: Pubkey,
    pub period_id: u64,
    pub end_time: i64,
    pub withdrawn_assets: u64,
    pub reason: PeriodCloseReason,
}

/// Advisory bookkeeping only; execution never reads the approved flag.
#[event]
pub struct WithdrawalsApproved {
    pub manager: Pubkey,
    pub approved: u32,
    pub skipped: u32,
}

#[event]
pub struct OperatorUpdated {
    pub manager: Pubkey,
    pub operator: Pubkey,
    pub added: bool,
}
