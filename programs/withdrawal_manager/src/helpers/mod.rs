pub mod access;
pub mod accounts;
pub mod execution;
pub mod math;

pub use access::*;
pub use accounts::*;
pub use execution::*;
pub use math::*;
