pub mod manager;
pub mod user_withdrawals;
pub mod withdrawal_period;
pub mod withdrawal_request;

pub use manager::*;
pub use user_withdrawals::*;
pub use withdrawal_period::*;
pub use withdrawal_request::*;
