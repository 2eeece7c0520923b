use anchor_lang::prelude::*;

#[error_code]
pub enum LeagueError {
    #[msg("Program is paused")]
    ProgramPaused,
    #[msg("Unauthorized")]
    Unauthorized,
    #[msg("League already exists")]
    AlreadyExists,
    #[msg("Mismatched array lengths")]
    ArityMismatch,
    #[msg("League parameters outside configured bounds")]
    InvalidParameters,
    #[msg("Pick code must be 0 or 1")]
    InvalidPick,
    #[msg("Result code must be 0 or 1")]
    InvalidResult,
    #[msg("Incorrect entry fee")]
    WrongFee,
    #[msg("Already entered")]
    DuplicateEntry,
    #[msg("No existing entry")]
    NoExistingEntry,
    #[msg("Entry period closed")]
    EntryClosed,
    #[msg("Cannot settle before lock time")]
    TooEarly,
    #[msg("Already settled")]
    AlreadySettled,
    #[msg("Already cancelled")]
    AlreadyCancelled,
    #[msg("League not settled")]
    NotSettled,
    #[msg("League not cancelled")]
    NotCancelled,
    #[msg("Already claimed")]
    AlreadyClaimed,
    #[msg("Entry has not been scored")]
    NotScored,
    #[msg("Encrypted input or decryption proof rejected")]
    InvalidProof,
    #[msg("Arithmetic overflow")]
    MathOverflow,
}
