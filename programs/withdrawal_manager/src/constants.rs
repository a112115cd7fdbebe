pub const MAX_OPERATORS: usize = 16;
pub const MAX_PENDING_WITHDRAWALS: usize = 32;
pub const MAX_PROOF_DEPTH: usize = 32;
pub const FIRST_REQUEST_ID: u64 = 1;
