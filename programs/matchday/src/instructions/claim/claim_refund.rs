use anchor_lang::prelude::*;
use crate::errors::LeagueError;
use crate::events::RefundClaimed;
use crate::state::{Entry, League};
use super::ClaimFromVault;

/// Returns exactly what the entry paid once its league is cancelled.
pub fn apply_claim_refund(league: &mut League, entry: &mut Entry) -> Result<u64> {
    league.ensure_cancelled()?;
    entry.ensure_exists()?;
    entry.ensure_unclaimed()?;

    let amount = entry.paid;
    entry.claimed = true;
    entry.payout = amount;
    league.prize_pool = league
        .prize_pool
        .checked_sub(amount)
        .ok_or(LeagueError::MathOverflow)?;
    Ok(amount)
}

pub fn process_claim_refund(mut ctx: Context<ClaimFromVault>, _league_id: String) -> Result<()> {
    let accounts = &mut ctx.accounts;
    let amount = apply_claim_refund(&mut accounts.league, &mut accounts.entry)?;

    accounts.pay_out(amount)?;

    emit!(RefundClaimed {
        league_id: accounts.league.id.clone(),
        participant: accounts.participant.key(),
        amount,
    });
    msg!("Refund of {} paid from {}", amount, accounts.league.id);

    Ok(())
}
