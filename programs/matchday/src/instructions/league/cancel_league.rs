use anchor_lang::prelude::*;
use crate::constants::{SEED_LEAGUE, SEED_PROGRAM_CONFIG};
use crate::errors::LeagueError;
use crate::events::LeagueCancelled;
use crate::state::{League, ProgramConfig};

/// Accounts for the league administrator: its creator or the program admin.
#[derive(Accounts)]
#[instruction(league_id: String)]
pub struct LeagueAdmin<'info> {
    #[account(
        seeds = [SEED_PROGRAM_CONFIG],
        bump = program_config.bump,
    )]
    pub program_config: Box<Account<'info, ProgramConfig>>,

    #[account(
        mut,
        seeds = [SEED_LEAGUE, League::seed_for(&league_id).as_ref()],
        bump = league.bump,
    )]
    pub league: Box<Account<'info, League>>,

    pub authority: Signer<'info>,
}

pub fn apply_cancel_league(
    league: &mut League,
    program_admin: &Pubkey,
    signer: &Pubkey,
    now: i64,
) -> Result<()> {
    require!(
        league.is_administered_by(signer, program_admin),
        LeagueError::Unauthorized
    );
    league.cancel(now)
}

pub fn process_cancel_league(ctx: Context<LeagueAdmin>, _league_id: String) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let admin = ctx.accounts.program_config.admin;
    let signer = ctx.accounts.authority.key();
    let league = &mut ctx.accounts.league;
    apply_cancel_league(league, &admin, &signer, now)?;

    emit!(LeagueCancelled {
        league_id: league.id.clone(),
        cancelled_by: signer,
        prize_pool: league.prize_pool,
        timestamp: now,
    });
    msg!("League {} cancelled, {} entries may refund", league.id, league.entry_count);

    Ok(())
}
