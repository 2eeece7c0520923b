use anchor_lang::prelude::*;

use crate::constants::DISCRIMINATOR_SIZE;
use crate::errors::LeagueError;
use crate::fhe::{EncryptedValueService, Handle};
use crate::state::{League, Market, MarketCodes, OPTION_A, OPTION_B};

#[account]
#[derive(Default, Debug)]
pub struct Entry {
    pub league: Pubkey,       // 32
    pub participant: Pubkey,  // 32
    pub exists: bool,         // 1
    pub claimed: bool,        // 1
    pub decryptable: bool,    // 1
    pub picks: MarketCodes,   // 3 * (4 + n)
    pub weight: Handle,       // 32
    pub paid: u64,            // 8, refunded on cancellation
    pub score: Option<Handle>, // 1 + 32
    pub payout: u64,          // 8
    pub entered_at: i64,      // 8
    pub updated_at: i64,      // 8
    pub bump: u8,             // 1
}

impl Entry {
    pub fn space(match_count: usize) -> usize {
        DISCRIMINATOR_SIZE
            + 32 * 2
            + 3
            + MarketCodes::space(match_count)
            + Handle::LEN
            + 8
            + (1 + Handle::LEN)
            + 8 * 3
            + 1
    }

    pub fn ensure_exists(&self) -> Result<()> {
        require!(self.exists, LeagueError::NoExistingEntry);
        Ok(())
    }

    pub fn ensure_unclaimed(&self) -> Result<()> {
        require!(!self.claimed, LeagueError::AlreadyClaimed);
        Ok(())
    }

    /// Encrypted score against the league's final results: the weight counts
    /// once for every market the entry picked correctly.
    pub fn score_against<F: EncryptedValueService>(&self, fhe: &mut F, league: &League) -> Handle {
        let code_a = fhe.trivial(u64::from(OPTION_A));
        let code_b = fhe.trivial(u64::from(OPTION_B));
        let encode = |code: u8| if code == OPTION_A { code_a } else { code_b };
        let zero = fhe.zero();

        let mut score = zero;
        for (index, round) in league.matches.iter().enumerate() {
            for market in Market::ALL {
                let pick = encode(self.picks.get(market, index));
                let result = encode(round.final_result(market));
                let hit = fhe.compare_equal(pick, result);
                let earned = fhe.select(hit, self.weight, zero);
                score = fhe.add(score, earned);
            }
        }
        score
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fhe::mock::PlaintextFhe;
    use crate::state::MatchRound;
    use crate::test_utils::assert_league_err;

    #[test]
    fn score_counts_weight_per_hit() {
        let mut fhe = PlaintextFhe::new();
        let zero = fhe.zero();
        let mut league = League::default();
        for _ in 0..2 {
            league
                .matches
                .push(MatchRound::new("M".into(), "H".into(), "A".into(), zero));
        }
        league.matches[0].final_winner = OPTION_B;
        league.matches[1].final_goals = OPTION_B;

        let participant = Pubkey::new_unique();
        let (weight, _) = fhe.encrypt(70, &participant);
        let entry = Entry {
            participant,
            exists: true,
            picks: MarketCodes {
                winner: vec![1, 1],
                goals: vec![0, 0],
                penalty: vec![0, 1],
            },
            weight,
            ..Entry::default()
        };

        // hits: winner[0], goals[0], penalty[0]
        let score = entry.score_against(&mut fhe, &league);
        assert_eq!(fhe.decrypt(score), 3 * 70);
    }

    #[test]
    fn guards_report_missing_and_claimed() {
        let mut entry = Entry::default();
        assert_league_err(entry.ensure_exists(), LeagueError::NoExistingEntry);
        entry.exists = true;
        assert!(entry.ensure_exists().is_ok());
        assert!(entry.ensure_unclaimed().is_ok());
        entry.claimed = true;
        assert_league_err(entry.ensure_unclaimed(), LeagueError::AlreadyClaimed);
    }
}
