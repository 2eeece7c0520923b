pub mod abi;
pub mod payout;

pub use abi::*;
pub use payout::*;
