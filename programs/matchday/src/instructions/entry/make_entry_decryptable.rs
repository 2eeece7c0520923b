use anchor_lang::prelude::*;
use crate::constants::{SEED_ENTRY, SEED_LEAGUE, SEED_PROGRAM_CONFIG};
use crate::events::EntryDecryptable;
use crate::fhe::{EncryptedValueService, SymbolicExecutor};
use crate::state::{Entry, League, ProgramConfig};

/// Accounts for a participant acting on their own entry once it exists.
#[derive(Accounts)]
#[instruction(league_id: String)]
pub struct ParticipantEntry<'info> {
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

/// Re-grants the participant access to their weight and, once scored, their score.
pub fn apply_make_entry_decryptable<F: EncryptedValueService>(
    fhe: &mut F,
    entry: &mut Entry,
) -> Result<()> {
    entry.ensure_exists()?;
    fhe.grant_access(entry.weight, &entry.participant);
    if let Some(score) = entry.score {
        fhe.grant_access(score, &entry.participant);
    }
    entry.decryptable = true;
    Ok(())
}

pub fn process_make_entry_decryptable(
    ctx: Context<ParticipantEntry>,
    _league_id: String,
) -> Result<()> {
    let mut fhe = SymbolicExecutor::new(ctx.program_id, &ctx.accounts.program_config);
    apply_make_entry_decryptable(&mut fhe, &mut ctx.accounts.entry)?;

    emit!(EntryDecryptable {
        league_id: ctx.accounts.league.id.clone(),
        participant: ctx.accounts.participant.key(),
    });
    Ok(())
}
