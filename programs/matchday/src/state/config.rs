use anchor_lang::prelude::*;

use crate::constants::{MAX_MATCHES, MAX_SIGNERS};
use crate::errors::LeagueError;

#[account]
#[derive(Default, Debug)]
pub struct ProgramConfig {
    pub admin: Pubkey,           // 32
    pub collateral_mint: Pubkey, // 32 (wSOL or other SPL mint)
    pub paused: bool,            // 1
    pub bounds: LeagueBounds,    // 33
    pub input_signers: SignerSet,
    pub kms_signers: SignerSet,
    pub league_count: u64, // 8
    pub bump: u8,          // 1
}

impl ProgramConfig {
    pub const LEN: usize = 8 + 32 + 32 + 1 + LeagueBounds::LEN + 2 * SignerSet::LEN + 8 + 1;

    pub fn apply_params(&mut self, params: ConfigParams) -> Result<()> {
        params.validate()?;
        self.bounds = params.bounds;
        self.input_signers = params.input_signers;
        self.kms_signers = params.kms_signers;
        Ok(())
    }

    pub fn ensure_not_paused(&self) -> Result<()> {
        require!(!self.paused, LeagueError::ProgramPaused);
        Ok(())
    }
}

/// Limits every new league must respect. Existing leagues keep the values
/// they were created with.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LeagueBounds {
    pub min_entry_fee: u64,
    pub max_entry_fee: u64,
    pub min_duration: i64,
    pub max_duration: i64,
    pub max_matches: u8,
}

impl LeagueBounds {
    pub const LEN: usize = 8 + 8 + 8 + 8 + 1;

    pub fn validate(&self) -> Result<()> {
        require!(
            self.min_entry_fee <= self.max_entry_fee,
            LeagueError::InvalidParameters
        );
        require!(
            self.min_duration > 0 && self.min_duration <= self.max_duration,
            LeagueError::InvalidParameters
        );
        require!(
            self.max_matches >= 1 && usize::from(self.max_matches) <= MAX_MATCHES,
            LeagueError::InvalidParameters
        );
        Ok(())
    }

    pub fn check(&self, entry_fee: u64, duration: i64, match_count: usize) -> Result<()> {
        require!(
            (self.min_entry_fee..=self.max_entry_fee).contains(&entry_fee),
            LeagueError::InvalidParameters
        );
        require!(
            (self.min_duration..=self.max_duration).contains(&duration),
            LeagueError::InvalidParameters
        );
        require!(
            match_count >= 1 && match_count <= usize::from(self.max_matches),
            LeagueError::InvalidParameters
        );
        Ok(())
    }
}

/// Threshold set of secp256k1 signers, each stored as the sha256 of its
/// uncompressed public key.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct SignerSet {
    pub signers: Vec<[u8; 32]>,
    pub threshold: u8,
}

impl SignerSet {
    pub const LEN: usize = 4 + 32 * MAX_SIGNERS + 1;

    pub fn validate(&self) -> Result<()> {
        let count = self.signers.len();
        require!(
            count <= MAX_SIGNERS
                && self.threshold >= 1
                && usize::from(self.threshold) <= count,
            LeagueError::InvalidParameters
        );
        for (i, signer) in self.signers.iter().enumerate() {
            require!(
                !self.signers[i + 1..].contains(signer),
                LeagueError::InvalidParameters
            );
        }
        Ok(())
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct ConfigParams {
    pub bounds: LeagueBounds,
    pub input_signers: SignerSet,
    pub kms_signers: SignerSet,
}

impl ConfigParams {
    pub fn validate(&self) -> Result<()> {
        self.bounds.validate()?;
        self.input_signers.validate()?;
        self.kms_signers.validate()
    }
}
