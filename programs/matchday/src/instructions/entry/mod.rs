pub mod enter_league;
pub mod adjust_entry;
pub mod make_entry_decryptable;

pub use enter_league::*;
pub use adjust_entry::*;
pub use make_entry_decryptable::*;
