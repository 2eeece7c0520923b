use anchor_lang::prelude::*;
use crate::constants::{SEED_ENTRY, SEED_LEAGUE};
use crate::state::{Entry, League};
use crate::views::{entry_view, EntryView};
use super::load_account;

#[derive(Accounts)]
#[instruction(league_id: String, participant: Pubkey)]
pub struct ReadEntry<'info> {
    /// CHECK: address derived from the league id; may not exist yet
    #[account(seeds = [SEED_LEAGUE, League::seed_for(&league_id).as_ref()], bump)]
    pub league: UncheckedAccount<'info>,

    /// CHECK: address derived from league and participant; may not exist yet
    #[account(seeds = [SEED_ENTRY, league.key().as_ref(), participant.as_ref()], bump)]
    pub entry: UncheckedAccount<'info>,
}

pub fn process_get_entry(
    ctx: Context<ReadEntry>,
    _league_id: String,
    _participant: Pubkey,
) -> Result<EntryView> {
    let entry = load_account::<Entry>(&ctx.accounts.entry);
    Ok(entry_view(entry.as_ref()))
}
