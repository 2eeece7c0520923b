pub mod config;
pub mod league_index;
pub mod exposure;
pub mod league;
pub mod entry;

pub use config::*;
pub use league_index::*;
pub use exposure::*;
pub use league::*;
pub use entry::*;
