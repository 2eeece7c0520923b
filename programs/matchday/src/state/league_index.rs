use anchor_lang::prelude::*;

use crate::constants::{DISCRIMINATOR_SIZE, MAX_LEAGUE_ID_LEN, SEED_LEAGUE_INDEX};

/// One slot of the league directory, at `["league_index", position]`.
/// Positions are handed out from `ProgramConfig::league_count`, so slots
/// `0..league_count` list every league in creation order.
#[account]
#[derive(Default, Debug)]
pub struct LeagueIndex {
    pub position: u64,      // 8
    pub league_id: String,  // 4 + 64
    pub league: Pubkey,     // 32
    pub bump: u8,           // 1
}

impl LeagueIndex {
    pub const LEN: usize = DISCRIMINATOR_SIZE + 8 + (4 + MAX_LEAGUE_ID_LEN) + 32 + 1;

    pub fn address(position: u64) -> Pubkey {
        Pubkey::find_program_address(&[SEED_LEAGUE_INDEX, &position.to_le_bytes()], &crate::ID).0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn longest_id_fits_the_slot() {
        let slot = LeagueIndex {
            position: u64::MAX,
            league_id: "x".repeat(MAX_LEAGUE_ID_LEN),
            league: Pubkey::new_unique(),
            bump: 255,
        };
        let mut data = Vec::new();
        slot.serialize(&mut data).unwrap();
        assert_eq!(DISCRIMINATOR_SIZE + data.len(), LeagueIndex::LEN);
    }

    #[test]
    fn each_position_has_its_own_address() {
        assert_eq!(LeagueIndex::address(0), LeagueIndex::address(0));
        assert_ne!(LeagueIndex::address(0), LeagueIndex::address(1));
    }
}
