use anchor_lang::prelude::*;
use crate::state::{League, MatchRound};
use crate::views::match_at;
use super::{load_account, ReadLeague};

pub fn process_get_match(ctx: Context<ReadLeague>, _league_id: String, index: u64) -> Result<MatchRound> {
    let league = load_account::<League>(&ctx.accounts.league);
    Ok(match_at(league.as_ref(), index))
}
