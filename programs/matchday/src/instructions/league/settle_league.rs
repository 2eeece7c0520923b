use anchor_lang::prelude::*;
use crate::errors::LeagueError;
use crate::events::LeagueSettled;
use crate::fhe::{EncryptedValueService, Handle, SymbolicExecutor};
use crate::state::{League, MarketCodes};
use super::LeagueAdmin;

pub fn apply_settle_league<F: EncryptedValueService>(
    fhe: &mut F,
    league: &mut League,
    program_admin: &Pubkey,
    signer: &Pubkey,
    results: &MarketCodes,
    now: i64,
) -> Result<Handle> {
    require!(
        league.is_administered_by(signer, program_admin),
        LeagueError::Unauthorized
    );
    league.settle(fhe, results, now)
}

pub fn process_settle_league(
    ctx: Context<LeagueAdmin>,
    _league_id: String,
    results: MarketCodes,
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let mut fhe = SymbolicExecutor::new(ctx.program_id, &ctx.accounts.program_config);
    let admin = ctx.accounts.program_config.admin;
    let signer = ctx.accounts.authority.key();
    let league = &mut ctx.accounts.league;

    let total_score = apply_settle_league(&mut fhe, league, &admin, &signer, &results, now)?;

    emit!(LeagueSettled {
        league_id: league.id.clone(),
        settled_by: signer,
        total_score,
        timestamp: now,
    });
    msg!("League {} settled with {} entries", league.id, league.entry_count);

    Ok(())
}
