use anchor_lang::prelude::*;
use crate::fhe::{FheOp, Handle};
use crate::state::LeagueBounds;

#[event]
pub struct ConfigInitialized {
    pub admin: Pubkey,
    pub collateral_mint: Pubkey,
    pub bounds: LeagueBounds,
}

#[event]
pub struct ConfigUpdated {
    pub admin: Pubkey,
    pub bounds: LeagueBounds,
    pub input_threshold: u8,
    pub kms_threshold: u8,
}

#[event]
pub struct PauseToggled {
    pub paused: bool,
}

#[event]
pub struct AdminTransferred {
    pub previous: Pubkey,
    pub new_admin: Pubkey,
}

#[event]
pub struct CollateralMintUpdated {
    pub collateral_mint: Pubkey,
}

#[event]
pub struct LeagueCreated {
    pub league_id: String,
    pub creator: Pubkey,
    pub entry_fee: u64,
    pub lock_time: i64,
    pub match_count: u8,
}

#[event]
pub struct LeagueCancelled {
    pub league_id: String,
    pub cancelled_by: Pubkey,
    pub prize_pool: u64,
    pub timestamp: i64,
}

#[event]
pub struct EntryPlaced {
    pub league_id: String,
    pub participant: Pubkey,
    pub paid: u64,
    pub prize_pool: u64,
    pub timestamp: i64,
}

#[event]
pub struct EntryAdjusted {
    pub league_id: String,
    pub participant: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct EntryDecryptable {
    pub league_id: String,
    pub participant: Pubkey,
}

#[event]
pub struct LeagueSettled {
    pub league_id: String,
    pub settled_by: Pubkey,
    pub total_score: Handle,
    pub timestamp: i64,
}

#[event]
pub struct EntryScored {
    pub league_id: String,
    pub participant: Pubkey,
    pub score: Handle,
}

#[event]
pub struct PrizeClaimed {
    pub league_id: String,
    pub participant: Pubkey,
    pub amount: u64,
    pub score: u64,
    pub total_score: u64,
}

#[event]
pub struct RefundClaimed {
    pub league_id: String,
    pub participant: Pubkey,
    pub amount: u64,
}

#[event]
pub struct FheOperation {
    pub op: FheOp,
    pub operands: Vec<Handle>,
    pub result: Handle,
}

#[event]
pub struct FheInputAccepted {
    pub handle: Handle,
    pub owner: Pubkey,
}

#[event]
pub struct FheAccessGranted {
    pub handle: Handle,
    pub account: Pubkey,
}

#[event]
pub struct FhePublicDecryptAllowed {
    pub handle: Handle,
}
