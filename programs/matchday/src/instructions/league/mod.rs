pub mod create_league;
pub mod cancel_league;
pub mod settle_league;

pub use create_league::*;
pub use cancel_league::*;
pub use settle_league::*;
