pub mod add_operator;
pub mod approve_withdrawals;
pub mod check_withdrawal_proof;
pub mod close_withdrawal_period;
pub mod create_user_withdrawals;
pub mod execute_withdrawal;
pub mod get_current_period;
pub mod get_pending_withdrawals;
pub mod get_withdrawal_request;
pub mod initialize_manager;
pub mod open_withdrawal_period;
pub mod remove_operator;
pub mod request_withdrawal;
pub mod transfer_admin;

pub use add_operator::*;
pub use approve_withdrawals::*;
pub use check_withdrawal_proof::*;
pub use close_withdrawal_period::*;
pub use create_user_withdrawals::*;
pub use execute_withdrawal::*;
pub use get_current_period::*;
pub use get_pending_withdrawals::*;
pub use get_withdrawal_request::*;
pub use initialize_manager::*;
pub use open_withdrawal_period::*;
pub use remove_operator::*;
pub use request_withdrawal::*;
pub use transfer_admin::*;
