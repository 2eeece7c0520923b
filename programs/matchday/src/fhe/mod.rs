//! Encrypted-value capability.
//!
//! Ciphertexts never live in program accounts; the program only stores
//! 32-byte handles and asks an [`EncryptedValueService`] to combine them.
//! On chain that service is the [`SymbolicExecutor`], which derives result
//! handles deterministically and logs every operation for the off-chain
//! coprocessor. Proofs coming back from the coprocessor (input attestations)
//! and from the decryption network (threshold decryptions) are checked by
//! [`proof`].

use anchor_lang::prelude::*;

pub mod proof;
pub mod symbolic;

#[cfg(test)]
pub mod mock;

pub use symbolic::SymbolicExecutor;

/// Opaque reference to a ciphertext held by the coprocessor.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Handle(pub [u8; 32]);

impl Handle {
    pub const LEN: usize = 32;
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum FheOp {
    Trivial,
    Add,
    Sub,
    Equal,
    LessOrEqual,
    Select,
}

impl FheOp {
    pub fn tag(&self) -> &'static [u8] {
        match self {
            FheOp::Trivial => b"trivial",
            FheOp::Add => b"add",
            FheOp::Sub => b"sub",
            FheOp::Equal => b"eq",
            FheOp::LessOrEqual => b"le",
            FheOp::Select => b"select",
        }
    }
}

/// Operations the league engine needs from the encryption layer.
///
/// There is no `multiply`: a score is a sum of `select(hit, weight, 0)`
/// terms, which needs no product of two ciphertexts.
///
/// Arithmetic is infallible from the caller's side: the result is a new
/// handle whose ciphertext is produced later by the coprocessor. Only the
/// proof checks can fail, and they fail with `LeagueError::InvalidProof`.
pub trait EncryptedValueService {
    /// Accepts a client-encrypted input bound to `owner`, returning the handle
    /// the program may compute on.
    fn verify_input(&mut self, handle: Handle, proof: &[u8], owner: &Pubkey) -> Result<Handle>;

    /// Encrypts a public constant.
    fn trivial(&mut self, value: u64) -> Handle;

    fn zero(&mut self) -> Handle {
        self.trivial(0)
    }

    fn add(&mut self, lhs: Handle, rhs: Handle) -> Handle;

    fn sub(&mut self, lhs: Handle, rhs: Handle) -> Handle;

    /// Encrypted boolean `lhs == rhs`.
    fn compare_equal(&mut self, lhs: Handle, rhs: Handle) -> Handle;

    /// Encrypted boolean `lhs <= rhs`.
    fn less_or_equal(&mut self, lhs: Handle, rhs: Handle) -> Handle;

    /// Encrypted `condition ? if_true : if_false`.
    fn select(&mut self, condition: Handle, if_true: Handle, if_false: Handle) -> Handle;

    /// `value` when it is at most `max`, encrypted zero otherwise. Bounds
    /// client-supplied values before they enter wrapping sums.
    fn zero_above(&mut self, value: Handle, max: u64) -> Handle {
        let limit = self.trivial(max);
        let within = self.less_or_equal(value, limit);
        let zero = self.zero();
        self.select(within, value, zero)
    }

    /// Lets `account` request a private decryption of `handle`.
    fn grant_access(&mut self, handle: Handle, account: &Pubkey);

    /// Lets anyone request a threshold decryption of `handle`.
    fn allow_public_decrypt(&mut self, handle: Handle);

    /// Checks that `cleartexts` is the threshold decryption of `handles`.
    fn verify_decryption_proof(
        &mut self,
        handles: &[Handle],
        cleartexts: &[u8],
        signatures: &[u8],
    ) -> Result<()>;
}
