//! Read-only projections of league and entry accounts.
//!
//! Reads take accounts as fetched (`None` or a missing slot when absent)
//! and return a sentinel instead of failing, so clients can look up ids and
//! participants freely.

use anchor_lang::prelude::*;

use crate::fhe::Handle;
use crate::state::{Entry, League, LeagueIndex, LeagueStatus, MatchRound};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct LeagueMeta {
    pub exists: bool,
    pub entry_fee: u64,
    pub lock_time: i64,
    pub prize_pool: u64,
    pub cancelled: bool,
    pub settled: bool,
    pub goals_threshold: u8,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct EntryView {
    pub exists: bool,
    pub claimed: bool,
    pub decryptable: bool,
    pub winner_picks: Vec<u8>,
    pub goals_picks: Vec<u8>,
    pub penalty_picks: Vec<u8>,
    pub weight: Handle,
}

/// League ids in creation order from fetched index slots. Clients page
/// through `LeagueIndex::address(0..league_count)`; missing slots are skipped.
pub fn list_leagues(slots: &[LeagueIndex]) -> Vec<String> {
    let mut ordered: Vec<&LeagueIndex> = slots.iter().collect();
    ordered.sort_by_key(|slot| slot.position);
    ordered.into_iter().map(|slot| slot.league_id.clone()).collect()
}

pub fn league_meta(league: Option<&League>) -> LeagueMeta {
    match league {
        Some(league) => LeagueMeta {
            exists: true,
            entry_fee: league.entry_fee,
            lock_time: league.lock_time,
            prize_pool: league.prize_pool,
            cancelled: league.status == LeagueStatus::Cancelled,
            settled: league.status == LeagueStatus::Settled,
            goals_threshold: league.goals_threshold,
        },
        None => LeagueMeta::default(),
    }
}

pub fn matches(league: Option<&League>) -> Vec<MatchRound> {
    league.map(|l| l.matches.clone()).unwrap_or_default()
}

/// Match at `index`, or a default (empty) match when absent.
pub fn match_at(league: Option<&League>, index: u64) -> MatchRound {
    league
        .and_then(|l| usize::try_from(index).ok().and_then(|i| l.matches.get(i)))
        .cloned()
        .unwrap_or_default()
}

pub fn entry_view(entry: Option<&Entry>) -> EntryView {
    match entry {
        Some(entry) if entry.exists => EntryView {
            exists: true,
            claimed: entry.claimed,
            decryptable: entry.decryptable,
            winner_picks: entry.picks.winner.clone(),
            goals_picks: entry.picks.goals.clone(),
            penalty_picks: entry.picks.penalty.clone(),
            weight: entry.weight,
        },
        _ => EntryView::default(),
    }
}
