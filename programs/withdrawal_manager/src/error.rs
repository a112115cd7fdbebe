use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Unauthorized")]
    Unauthorized,
    #[msg("Invalid admin")]
    InvalidAdmin,
    #[msg("Invalid user")]
    InvalidUser,
    #[msg("Invalid amount")]
    InvalidAmount,
    #[msg("Invalid period duration")]
    InvalidDuration,
    #[msg("Invalid token account")]
    InvalidTokenAccount,
    #[msg("Math overflow")]
    MathOverflow,
    #[msg("Withdrawal request not found")]
    WithdrawalRequestNotFound,
    #[msg("Invalid withdrawal request")]
    InvalidWithdrawalRequest,
    #[msg("Withdrawal already executed")]
    WithdrawalAlreadyExecuted,
    #[msg("A withdrawal period is already active")]
    WithdrawalPeriodAlreadyActive,
    #[msg("Withdrawal period is not active")]
    WithdrawalPeriodInactive,
    #[msg("Withdrawal period has not expired")]
    WithdrawalPeriodNotExpired,
    #[msg("Invalid merkle proof")]
    InvalidMerkleProof,
    #[msg("Merkle proof is too long")]
    ProofTooLong,
    #[msg("Merkle tree has no leaves")]
    EmptyMerkleTree,
    #[msg("Leaf index out of range")]
    LeafIndexOutOfRange,
    #[msg("Withdrawal exceeds period assets")]
    ExceedsPeriodAssets,
    #[msg("Insufficient treasury balance")]
    InsufficientTreasury,
    #[msg("Too many pending withdrawals")]
    PendingWithdrawalsFull,
    #[msg("Operator set is full")]
    OperatorSetFull,
    #[msg("Operator already exists")]
    OperatorAlreadyExists,
    #[msg("Operator not found")]
    OperatorNotFound,
    #[msg("Invalid operator")]
    InvalidOperator,
    #[msg("Request ids and accounts length mismatch")]
    ApprovalAccountsMismatch,
}
