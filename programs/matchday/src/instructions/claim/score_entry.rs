use anchor_lang::prelude::*;
use crate::events::EntryScored;
use crate::fhe::{EncryptedValueService, Handle, SymbolicExecutor};
use crate::instructions::entry::ParticipantEntry;
use crate::state::{Entry, League};

/// Scores an entry against the settled results. The score is readable by the
/// participant and opened for public decryption so a prize claim can prove it.
/// A scored entry keeps its first score handle.
pub fn apply_score_entry<F: EncryptedValueService>(
    fhe: &mut F,
    league: &League,
    entry: &mut Entry,
) -> Result<Handle> {
    league.ensure_settled()?;
    entry.ensure_exists()?;
    entry.ensure_unclaimed()?;
    if let Some(score) = entry.score {
        return Ok(score);
    }

    let score = entry.score_against(fhe, league);
    fhe.grant_access(score, &entry.participant);
    fhe.allow_public_decrypt(score);
    entry.score = Some(score);
    Ok(score)
}

pub fn process_score_entry(mut ctx: Context<ParticipantEntry>, _league_id: String) -> Result<()> {
    let mut fhe = SymbolicExecutor::new(ctx.program_id, &ctx.accounts.program_config);
    let accounts = &mut ctx.accounts;
    let score = apply_score_entry(&mut fhe, &accounts.league, &mut accounts.entry)?;

    emit!(EntryScored {
        league_id: accounts.league.id.clone(),
        participant: accounts.participant.key(),
        score,
    });
    Ok(())
}
