use anchor_lang::prelude::*;
use crate::constants::SEED_LEAGUE;
use crate::state::League;
use crate::views::{league_meta, LeagueMeta};
use super::load_account;

#[derive(Accounts)]
#[instruction(league_id: String)]
pub struct ReadLeague<'info> {
    /// CHECK: address derived from the league id; may not exist yet
    #[account(seeds = [SEED_LEAGUE, League::seed_for(&league_id).as_ref()], bump)]
    pub league: UncheckedAccount<'info>,
}

pub fn process_get_league_meta(ctx: Context<ReadLeague>, _league_id: String) -> Result<LeagueMeta> {
    let league = load_account::<League>(&ctx.accounts.league);
    Ok(league_meta(league.as_ref()))
}
