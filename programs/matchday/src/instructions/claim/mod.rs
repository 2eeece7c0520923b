pub mod score_entry;
pub mod claim_prize;
pub mod claim_refund;

pub use score_entry::*;
pub use claim_prize::*;
pub use claim_refund::*;
