//! On-chain reads. Each returns its view through Anchor return data, so only
//! bounded views are exposed here; the full match list and the league index
//! are read client-side through [`crate::views`].

pub mod get_league_meta;
pub mod get_match;
pub mod get_entry;

pub use get_league_meta::*;
pub use get_match::*;
pub use get_entry::*;

use anchor_lang::prelude::*;

/// Deserializes a program account, or `None` when it is absent or foreign.
pub fn load_account<T: AccountDeserialize + Owner>(info: &AccountInfo) -> Option<T> {
    if info.owner != &T::owner() || info.data_is_empty() {
        return None;
    }
    let data = info.try_borrow_data().ok()?;
    T::try_deserialize(&mut &data[..]).ok()
}
