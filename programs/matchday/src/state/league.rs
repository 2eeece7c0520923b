use anchor_lang::prelude::*;
use solana_sha256_hasher::hashv;

use crate::constants::{DISCRIMINATOR_SIZE, MAX_LEAGUE_ID_LEN, MAX_MATCHES};
use crate::errors::LeagueError;
use crate::fhe::{EncryptedValueService, Handle};
use crate::state::{Market, MarketCodes, MatchRound};

#[account]
#[derive(Default, Debug)]
pub struct League {
    pub id: String,              // 4 + 64
    pub creator: Pubkey,         // 32
    pub collateral_mint: Pubkey, // 32
    pub vault: Pubkey,           // 32
    pub entry_fee: u64,          // 8
    pub created_at: i64,         // 8
    pub lock_time: i64,          // 8, no entries or adjustments from here on
    pub prize_pool: u64,         // 8
    pub paid_out: u64,           // 8
    pub entry_count: u64,        // 8
    pub goals_threshold: u8,     // 1
    pub status: LeagueStatus,    // 1
    pub settled_at: Option<i64>,   // 1 + 8
    pub cancelled_at: Option<i64>, // 1 + 8
    pub total_score: Option<Handle>, // 1 + 32
    pub matches: Vec<MatchRound>,  // 4 + n * MatchRound::LEN
    pub bump: u8,                // 1
    pub vault_bump: u8,          // 1
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LeagueStatus {
    Open,
    Settled,
    Cancelled,
}

impl Default for LeagueStatus {
    fn default() -> Self {
        LeagueStatus::Open
    }
}

impl League {
    /// Every league is allocated for the largest schedule, so re-deriving an
    /// existing league always matches its stored size.
    pub const LEN: usize = League::space(MAX_MATCHES);

    pub const fn space(match_count: usize) -> usize {
        DISCRIMINATOR_SIZE
            + (4 + MAX_LEAGUE_ID_LEN)
            + 32 * 3
            + 8 * 6
            + 1
            + 1
            + 9 * 2
            + (1 + Handle::LEN)
            + 4
            + match_count * MatchRound::LEN
            + 1
            + 1
    }

    /// PDA seed for a league id; hashing keeps long ids under the seed limit.
    pub fn seed_for(id: &str) -> [u8; 32] {
        hashv(&[id.as_bytes()]).to_bytes()
    }

    /// A freshly allocated account has no id until `create_league` fills it.
    pub fn is_created(&self) -> bool {
        !self.id.is_empty()
    }

    pub fn is_open(&self) -> bool {
        self.status == LeagueStatus::Open
    }

    pub fn ensure_accepting_entries(&self, now: i64) -> Result<()> {
        require!(
            self.is_open() && now < self.lock_time,
            LeagueError::EntryClosed
        );
        Ok(())
    }

    pub fn is_administered_by(&self, signer: &Pubkey, program_admin: &Pubkey) -> bool {
        *signer == self.creator || *signer == *program_admin
    }

    fn ensure_not_finalized(&self) -> Result<()> {
        match self.status {
            LeagueStatus::Open => Ok(()),
            LeagueStatus::Settled => err!(LeagueError::AlreadySettled),
            LeagueStatus::Cancelled => err!(LeagueError::AlreadyCancelled),
        }
    }

    pub fn ensure_settled(&self) -> Result<()> {
        require!(
            self.status == LeagueStatus::Settled,
            LeagueError::NotSettled
        );
        Ok(())
    }

    pub fn ensure_cancelled(&self) -> Result<()> {
        require!(
            self.status == LeagueStatus::Cancelled,
            LeagueError::NotCancelled
        );
        Ok(())
    }

    pub fn commit_picks<F: EncryptedValueService>(
        &mut self,
        fhe: &mut F,
        picks: &MarketCodes,
        weight: Handle,
    ) -> Result<()> {
        for (index, round) in self.matches.iter_mut().enumerate() {
            for market in Market::ALL {
                round
                    .exposure_mut(market)
                    .commit(fhe, picks.get(market, index), weight)?;
            }
        }
        Ok(())
    }

    pub fn withdraw_picks<F: EncryptedValueService>(
        &mut self,
        fhe: &mut F,
        picks: &MarketCodes,
        weight: Handle,
    ) -> Result<()> {
        for (index, round) in self.matches.iter_mut().enumerate() {
            for market in Market::ALL {
                round
                    .exposure_mut(market)
                    .withdraw(fhe, picks.get(market, index), weight)?;
            }
        }
        Ok(())
    }

    pub fn cancel(&mut self, now: i64) -> Result<()> {
        self.ensure_not_finalized()?;
        self.status = LeagueStatus::Cancelled;
        self.cancelled_at = Some(now);
        Ok(())
    }

    /// Records final results and derives the encrypted league total: the sum
    /// of every market's winning-side stake. Nothing is written unless every
    /// check passes.
    pub fn settle<F: EncryptedValueService>(
        &mut self,
        fhe: &mut F,
        results: &MarketCodes,
        now: i64,
    ) -> Result<Handle> {
        self.ensure_not_finalized()?;
        require!(now >= self.lock_time, LeagueError::TooEarly);
        results.validate(self.matches.len(), LeagueError::InvalidResult)?;

        let mut total = fhe.zero();
        for (index, round) in self.matches.iter_mut().enumerate() {
            for market in Market::ALL {
                let result = results.get(market, index);
                round.set_final_result(market, result);
                total = fhe.add(total, round.exposure(market).winning_side(result));
            }
        }
        fhe.allow_public_decrypt(total);

        self.total_score = Some(total);
        self.status = LeagueStatus::Settled;
        self.settled_at = Some(now);
        Ok(total)
    }
}
