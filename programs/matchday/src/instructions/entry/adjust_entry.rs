use anchor_lang::prelude::*;
use crate::constants::{MAX_WEIGHT, SEED_ENTRY, SEED_LEAGUE, SEED_PROGRAM_CONFIG};
use crate::errors::LeagueError;
use crate::events::EntryAdjusted;
use crate::fhe::{EncryptedValueService, SymbolicExecutor};
use crate::state::{Entry, League, ProgramConfig};
use super::EntryParams;

#[derive(Accounts)]
#[instruction(league_id: String)]
pub struct AdjustEntry<'info> {
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

    // a missing entry reaches the handler and fails with NoExistingEntry
    #[account(
        init_if_needed,
        seeds = [SEED_ENTRY, league.key().as_ref(), participant.key().as_ref()],
        bump,
        payer = participant,
        space = Entry::space(league.matches.len())
    )]
    pub entry: Box<Account<'info, Entry>>,

    #[account(mut)]
    pub participant: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/// Reverses the entry's previous contribution to every market, then applies
/// the new picks and weight. Weights above `MAX_WEIGHT` count as zero.
pub fn apply_adjust_entry<F: EncryptedValueService>(
    fhe: &mut F,
    config: &ProgramConfig,
    league: &mut League,
    entry: &mut Entry,
    participant: Pubkey,
    params: EntryParams,
    now: i64,
) -> Result<()> {
    config.ensure_not_paused()?;
    league.ensure_accepting_entries(now)?;
    entry.ensure_exists()?;
    params
        .picks
        .validate(league.matches.len(), LeagueError::InvalidPick)?;
    let submitted = fhe.verify_input(params.encrypted_weight, &params.input_proof, &participant)?;
    let weight = fhe.zero_above(submitted, MAX_WEIGHT);

    league.withdraw_picks(fhe, &entry.picks, entry.weight)?;
    league.commit_picks(fhe, &params.picks, weight)?;
    fhe.grant_access(weight, &participant);
    fhe.grant_access(weight, &entry.league);

    entry.picks = params.picks;
    entry.weight = weight;
    entry.decryptable = true;
    entry.updated_at = now;

    Ok(())
}

pub fn process_adjust_entry(
    mut ctx: Context<AdjustEntry>,
    _league_id: String,
    params: EntryParams,
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let mut fhe = SymbolicExecutor::new(ctx.program_id, &ctx.accounts.program_config);
    let participant = ctx.accounts.participant.key();

    let accounts = &mut ctx.accounts;
    apply_adjust_entry(
        &mut fhe,
        &accounts.program_config,
        &mut accounts.league,
        &mut accounts.entry,
        participant,
        params,
        now,
    )?;

    emit!(EntryAdjusted {
        league_id: accounts.league.id.clone(),
        participant,
        timestamp: now,
    });

    Ok(())
}
