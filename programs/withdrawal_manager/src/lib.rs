//! Batch withdrawal ledger.
//!
//! Users queue withdrawal requests. A period authority commits a batch of them
//! off-chain as a Merkle root and opens a time-boxed, capacity-bounded
//! withdrawal period. Each requester then proves inclusion of
//! `leaf(request_id, user, assets)` and is paid out from the treasury while
//! their shares are burned. See [`merkle`] for the leaf and tree conventions.

use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod events;
pub mod helpers;
pub mod instructions;
pub mod merkle;
pub mod state;

#[cfg(test)]
mod test_utils;

pub use constants::*;
pub use error::*;
pub use events::*;
pub use instructions::*;
pub use state::*;

declare_id!("64rYNs2VbF59zgBSwiZGtx8KM8uYibv4G531jGqrDTae");

#[program]
pub mod withdrawal_manager {
    use super::*;

    pub fn initialize_manager(ctx: Context<InitializeManager>) -> Result<()> {
        instructions::initialize_manager::handler(ctx)
    }

    pub fn create_user_withdrawals(ctx: Context<CreateUserWithdrawals>, user: Pubkey) -> Result<()> {
        instructions::create_user_withdrawals::handler(ctx, user)
    }

    pub fn request_withdrawal(
        ctx: Context<RequestWithdrawal>,
        user: Pubkey,
        assets: u64,
        shares: u64,
    ) -> Result<u64> {
        instructions::request_withdrawal::handler(ctx, user, assets, shares)
    }

    pub fn execute_withdrawal(
        ctx: Context<ExecuteWithdrawal>,
        request_id: u64,
        proof: Vec<[u8; 32]>,
    ) -> Result<()> {
        instructions::execute_withdrawal::handler(ctx, request_id, proof)
    }

    pub fn open_withdrawal_period(
        ctx: Context<OpenWithdrawalPeriod>,
        duration: i64,
        merkle_root: [u8; 32],
        total_assets: u64,
    ) -> Result<()> {
        instructions::open_withdrawal_period::handler(ctx, duration, merkle_root, total_assets)
    }

    pub fn close_withdrawal_period(ctx: Context<CloseWithdrawalPeriod>) -> Result<()> {
        instructions::close_withdrawal_period::handler(ctx)
    }

    pub fn approve_withdrawals(
        ctx: Context<ApproveWithdrawals>,
        request_ids: Vec<u64>,
    ) -> Result<()> {
        instructions::approve_withdrawals::handler(ctx, request_ids)
    }

    pub fn add_operator(ctx: Context<AddOperator>, operator: Pubkey) -> Result<()> {
        instructions::add_operator::handler(ctx, operator)
    }

    pub fn remove_operator(ctx: Context<RemoveOperator>, operator: Pubkey) -> Result<()> {
        instructions::remove_operator::handler(ctx, operator)
    }

    pub fn transfer_admin(ctx: Context<TransferAdmin>, new_admin: Pubkey) -> Result<()> {
        instructions::transfer_admin::handler(ctx, new_admin)
    }

    pub fn get_withdrawal_request(
        ctx: Context<GetWithdrawalRequest>,
        request_id: u64,
    ) -> Result<WithdrawalRequest> {
        instructions::get_withdrawal_request::handler(ctx, request_id)
    }

    pub fn get_current_period(ctx: Context<GetCurrentPeriod>) -> Result<WithdrawalPeriod> {
        instructions::get_current_period::handler(ctx)
    }

    pub fn get_pending_withdrawals(
        ctx: Context<GetPendingWithdrawals>,
        user: Pubkey,
    ) -> Result<Vec<u64>> {
        instructions::get_pending_withdrawals::handler(ctx, user)
    }

    pub fn check_withdrawal_proof(
        ctx: Context<CheckWithdrawalProof>,
        request_id: u64,
        proof: Vec<[u8; 32]>,
    ) -> Result<bool> {
        instructions::check_withdrawal_proof::handler(ctx, request_id, proof)
    }
}
