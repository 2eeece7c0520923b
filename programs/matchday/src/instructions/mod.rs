pub mod admin;
pub mod league;
pub mod entry;
pub mod claim;
pub mod read;

pub use admin::*;
pub use league::*;
pub use entry::*;
pub use claim::*;
pub use read::*;
