use anchor_lang::prelude::*;

use crate::constants::MAX_LABEL_LEN;
use crate::errors::LeagueError;
use crate::fhe::{EncryptedValueService, Handle};

/// Code for the first option of a market (home win, under the goals line, no penalty).
pub const OPTION_A: u8 = 0;
/// Code for the second option (away win, over the goals line, penalty).
pub const OPTION_B: u8 = 1;

pub fn is_valid_code(code: u8) -> bool {
    code == OPTION_A || code == OPTION_B
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Market {
    Winner,
    Goals,
    Penalty,
}

impl Market {
    pub const ALL: [Market; 3] = [Market::Winner, Market::Goals, Market::Penalty];
}

/// Encrypted stake and plaintext pick count on each side of one market.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MarketExposure {
    pub option_a: Handle,
    pub option_b: Handle,
    pub picks_a: u32,
    pub picks_b: u32,
}

impl MarketExposure {
    pub const LEN: usize = Handle::LEN * 2 + 4 + 4;

    pub fn new(zero: Handle) -> Self {
        Self {
            option_a: zero,
            option_b: zero,
            picks_a: 0,
            picks_b: 0,
        }
    }

    /// Adds `weight` to the side named by `pick`.
    pub fn commit<F: EncryptedValueService>(
        &mut self,
        fhe: &mut F,
        pick: u8,
        weight: Handle,
    ) -> Result<()> {
        if pick == OPTION_A {
            self.picks_a = self.picks_a.checked_add(1).ok_or(LeagueError::MathOverflow)?;
            self.option_a = fhe.add(self.option_a, weight);
        } else {
            self.picks_b = self.picks_b.checked_add(1).ok_or(LeagueError::MathOverflow)?;
            self.option_b = fhe.add(self.option_b, weight);
        }
        Ok(())
    }

    /// Exact inverse of [`MarketExposure::commit`].
    pub fn withdraw<F: EncryptedValueService>(
        &mut self,
        fhe: &mut F,
        pick: u8,
        weight: Handle,
    ) -> Result<()> {
        if pick == OPTION_A {
            self.picks_a = self.picks_a.checked_sub(1).ok_or(LeagueError::MathOverflow)?;
            self.option_a = fhe.sub(self.option_a, weight);
        } else {
            self.picks_b = self.picks_b.checked_sub(1).ok_or(LeagueError::MathOverflow)?;
            self.option_b = fhe.sub(self.option_b, weight);
        }
        Ok(())
    }

    pub fn winning_side(&self, result: u8) -> Handle {
        if result == OPTION_A {
            self.option_a
        } else {
            self.option_b
        }
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct MatchRound {
    pub label: String,
    pub home_team: String,
    pub away_team: String,
    pub winner: MarketExposure,
    pub goals: MarketExposure,
    pub penalty: MarketExposure,
    pub final_winner: u8,
    pub final_goals: u8,
    pub final_penalty: u8,
}

impl MatchRound {
    pub const LEN: usize = 3 * (4 + MAX_LABEL_LEN) + 3 * MarketExposure::LEN + 3;

    pub fn new(label: String, home_team: String, away_team: String, zero: Handle) -> Self {
        Self {
            label,
            home_team,
            away_team,
            winner: MarketExposure::new(zero),
            goals: MarketExposure::new(zero),
            penalty: MarketExposure::new(zero),
            ..Self::default()
        }
    }

    pub fn exposure(&self, market: Market) -> &MarketExposure {
        match market {
            Market::Winner => &self.winner,
            Market::Goals => &self.goals,
            Market::Penalty => &self.penalty,
        }
    }

    pub fn exposure_mut(&mut self, market: Market) -> &mut MarketExposure {
        match market {
            Market::Winner => &mut self.winner,
            Market::Goals => &mut self.goals,
            Market::Penalty => &mut self.penalty,
        }
    }

    pub fn final_result(&self, market: Market) -> u8 {
        match market {
            Market::Winner => self.final_winner,
            Market::Goals => self.final_goals,
            Market::Penalty => self.final_penalty,
        }
    }

    pub fn set_final_result(&mut self, market: Market, code: u8) {
        match market {
            Market::Winner => self.final_winner = code,
            Market::Goals => self.final_goals = code,
            Market::Penalty => self.final_penalty = code,
        }
    }
}

/// One code per match for each market: an entry's picks or a league's results.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct MarketCodes {
    pub winner: Vec<u8>,
    pub goals: Vec<u8>,
    pub penalty: Vec<u8>,
}

impl MarketCodes {
    pub fn space(match_count: usize) -> usize {
        3 * (4 + match_count)
    }

    /// Checks arity against `match_count` first, then every code, so a short
    /// array is reported as `ArityMismatch` even when it also holds a bad code.
    pub fn validate(&self, match_count: usize, code_err: LeagueError) -> Result<()> {
        require!(
            self.winner.len() == match_count
                && self.goals.len() == match_count
                && self.penalty.len() == match_count,
            LeagueError::ArityMismatch
        );
        let all_valid = self
            .winner
            .iter()
            .chain(&self.goals)
            .chain(&self.penalty)
            .all(|code| is_valid_code(*code));
        if !all_valid {
            return Err(code_err.into());
        }
        Ok(())
    }

    pub fn get(&self, market: Market, index: usize) -> u8 {
        let codes = match market {
            Market::Winner => &self.winner,
            Market::Goals => &self.goals,
            Market::Penalty => &self.penalty,
        };
        codes.get(index).copied().unwrap_or(OPTION_A)
    }
}
