pub const SEED_PROGRAM_CONFIG: &[u8] = b"program_config";
pub const SEED_LEAGUE_INDEX: &[u8] = b"league_index";
pub const SEED_LEAGUE: &[u8] = b"league";
pub const SEED_VAULT: &[u8] = b"vault";
pub const SEED_ENTRY: &[u8] = b"entry";

pub const DISCRIMINATOR_SIZE: usize = 8;

/// Upper bound on matches per league; keeps a `League` account below the 10 KiB CPI allocation limit.
pub const MAX_MATCHES: usize = 16;
/// League PDAs are seeded with the sha256 of the id, so ids are not bound by the seed limit.
pub const MAX_LEAGUE_ID_LEN: usize = 64;
pub const MAX_LABEL_LEN: usize = 32;

/// Largest stake weight an entry may carry; heavier weights count as zero.
pub const MAX_WEIGHT: u64 = 100;

/// Upper bound on configured input / KMS signers per set.
pub const MAX_SIGNERS: usize = 8;
/// secp256k1 signature layout: r (32) || s (32) || v (1).
pub const SIGNATURE_LEN: usize = 65;

/// Domain tag mixed into every digest derived by the program.
pub const FHE_DOMAIN: &[u8] = b"matchday-fhe-v1";
