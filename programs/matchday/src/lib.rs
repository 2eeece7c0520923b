use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod fhe;
pub mod instructions;
pub mod state;
pub mod utils;
pub mod views;

#[cfg(test)]
mod test_utils;

use instructions::*;
use state::{ConfigParams, MarketCodes, MatchRound};
use views::{EntryView, LeagueMeta};

declare_id!("7GKK9D5ydPDki6TrLkXqfD8j3qrs6aEz9dWTyCTcykiV");

#[program]
pub mod matchday {
    use super::*;

    // --- ADMIN & CONFIG ---

    pub fn init_config(ctx: Context<InitConfig>, params: ConfigParams) -> Result<()> {
        instructions::admin::init_config::process_init_config(ctx, params)
    }

    pub fn update_config(ctx: Context<ConfigAdmin>, params: ConfigParams) -> Result<()> {
        instructions::admin::update_config::process_update_config(ctx, params)
    }

    pub fn set_paused(ctx: Context<ConfigAdmin>, paused: bool) -> Result<()> {
        instructions::admin::pause::process_set_paused(ctx, paused)
    }

    pub fn transfer_admin(ctx: Context<ConfigAdmin>, new_admin: Pubkey) -> Result<()> {
        instructions::admin::transfer_admin::process_transfer_admin(ctx, new_admin)
    }

    pub fn update_collateral_mint(ctx: Context<UpdateCollateralMint>) -> Result<()> {
        instructions::admin::update_collateral_mint::process_update_collateral_mint(ctx)
    }

    // --- LEAGUES ---

    pub fn create_league(ctx: Context<CreateLeague>, params: CreateLeagueParams) -> Result<()> {
        instructions::league::create_league::process_create_league(ctx, params)
    }

    pub fn cancel_league(ctx: Context<LeagueAdmin>, league_id: String) -> Result<()> {
        instructions::league::cancel_league::process_cancel_league(ctx, league_id)
    }

    pub fn settle_league(ctx: Context<LeagueAdmin>, league_id: String, results: MarketCodes) -> Result<()> {
        instructions::league::settle_league::process_settle_league(ctx, league_id, results)
    }

    // --- ENTRIES ---

    pub fn enter_league(
        ctx: Context<EnterLeague>,
        league_id: String,
        params: EntryParams,
        paid_amount: u64,
    ) -> Result<()> {
        instructions::entry::enter_league::process_enter_league(ctx, league_id, params, paid_amount)
    }

    pub fn adjust_entry(ctx: Context<AdjustEntry>, league_id: String, params: EntryParams) -> Result<()> {
        instructions::entry::adjust_entry::process_adjust_entry(ctx, league_id, params)
    }

    pub fn make_entry_decryptable(ctx: Context<ParticipantEntry>, league_id: String) -> Result<()> {
        instructions::entry::make_entry_decryptable::process_make_entry_decryptable(ctx, league_id)
    }

    // --- SCORING & CLAIMS ---

    pub fn score_entry(ctx: Context<ParticipantEntry>, league_id: String) -> Result<()> {
        instructions::claim::score_entry::process_score_entry(ctx, league_id)
    }

    pub fn claim_prize(
        ctx: Context<ClaimFromVault>,
        league_id: String,
        clear_values: Vec<u8>,
        decryption_signatures: Vec<u8>,
    ) -> Result<()> {
        instructions::claim::claim_prize::process_claim_prize(ctx, league_id, clear_values, decryption_signatures)
    }

    pub fn claim_refund(ctx: Context<ClaimFromVault>, league_id: String) -> Result<()> {
        instructions::claim::claim_refund::process_claim_refund(ctx, league_id)
    }

    // --- READS ---

    pub fn get_league_meta(ctx: Context<ReadLeague>, league_id: String) -> Result<LeagueMeta> {
        instructions::read::get_league_meta::process_get_league_meta(ctx, league_id)
    }

    pub fn get_match(ctx: Context<ReadLeague>, league_id: String, index: u64) -> Result<MatchRound> {
        instructions::read::get_match::process_get_match(ctx, league_id, index)
    }

    pub fn get_entry(ctx: Context<ReadEntry>, league_id: String, participant: Pubkey) -> Result<EntryView> {
        instructions::read::get_entry::process_get_entry(ctx, league_id, participant)
    }
}
