use std::collections::{HashMap, HashSet};

use anchor_lang::prelude::*;

use crate::errors::LeagueError;
use crate::fhe::{EncryptedValueService, Handle};
use crate::utils::abi::encode_words;

const INPUT_TAG: &[u8] = b"mock-input";
const KMS_TAG: &[u8] = b"mock-kms";

/// Plaintext stand-in for the coprocessor and decryption network.
///
/// Every handle maps to a cleartext `u64`, so tests can assert on the values
/// behind encrypted state. Proofs are tags the mock itself hands out.
#[derive(Default)]
pub struct PlaintextFhe {
    values: HashMap<Handle, u64>,
    next: u64,
    access: HashSet<(Handle, Pubkey)>,
    public: HashSet<Handle>,
}

impl PlaintextFhe {
    pub fn new() -> Self {
        Self::default()
    }

    fn fresh(&mut self, value: u64) -> Handle {
        self.next += 1;
        let mut bytes = [0u8; 32];
        bytes[..8].copy_from_slice(&self.next.to_le_bytes());
        bytes[31] = 0xfe;
        let handle = Handle(bytes);
        self.values.insert(handle, value);
        handle
    }

    fn get(&self, handle: Handle) -> u64 {
        *self
            .values
            .get(&handle)
            .unwrap_or_else(|| panic!("unknown handle {:?}", handle))
    }

    /// Client-side encryption of `value` for `owner`: a handle and its input proof.
    pub fn encrypt(&mut self, value: u64, owner: &Pubkey) -> (Handle, Vec<u8>) {
        let handle = self.fresh(value);
        (handle, input_proof(owner))
    }

    pub fn decrypt(&self, handle: Handle) -> u64 {
        self.get(handle)
    }

    pub fn can_access(&self, handle: Handle, account: &Pubkey) -> bool {
        self.access.contains(&(handle, *account))
    }

    pub fn is_public(&self, handle: Handle) -> bool {
        self.public.contains(&handle)
    }

    /// What the decryption network would return for a public decryption of
    /// `handles`: ABI-encoded cleartexts and the signature blob.
    pub fn public_decrypt(&self, handles: &[Handle]) -> (Vec<u8>, Vec<u8>) {
        let values: Vec<u64> = handles.iter().map(|h| self.get(*h)).collect();
        (encode_words(&values), KMS_TAG.to_vec())
    }
}

pub fn input_proof(owner: &Pubkey) -> Vec<u8> {
    [INPUT_TAG, owner.as_ref()].concat()
}

impl EncryptedValueService for PlaintextFhe {
    fn verify_input(&mut self, handle: Handle, proof: &[u8], owner: &Pubkey) -> Result<Handle> {
        require!(
            self.values.contains_key(&handle) && proof == input_proof(owner).as_slice(),
            LeagueError::InvalidProof
        );
        Ok(handle)
    }

    fn trivial(&mut self, value: u64) -> Handle {
        self.fresh(value)
    }

    fn add(&mut self, lhs: Handle, rhs: Handle) -> Handle {
        let value = self.get(lhs).wrapping_add(self.get(rhs));
        self.fresh(value)
    }

    fn sub(&mut self, lhs: Handle, rhs: Handle) -> Handle {
        let value = self.get(lhs).wrapping_sub(self.get(rhs));
        self.fresh(value)
    }

    fn compare_equal(&mut self, lhs: Handle, rhs: Handle) -> Handle {
        let value = u64::from(self.get(lhs) == self.get(rhs));
        self.fresh(value)
    }

    fn less_or_equal(&mut self, lhs: Handle, rhs: Handle) -> Handle {
        let value = u64::from(self.get(lhs) <= self.get(rhs));
        self.fresh(value)
    }

    fn select(&mut self, condition: Handle, if_true: Handle, if_false: Handle) -> Handle {
        let value = if self.get(condition) != 0 {
            self.get(if_true)
        } else {
            self.get(if_false)
        };
        self.fresh(value)
    }

    fn grant_access(&mut self, handle: Handle, account: &Pubkey) {
        self.access.insert((handle, *account));
    }

    fn allow_public_decrypt(&mut self, handle: Handle) {
        self.public.insert(handle);
    }

    fn verify_decryption_proof(
        &mut self,
        handles: &[Handle],
        cleartexts: &[u8],
        signatures: &[u8],
    ) -> Result<()> {
        require!(signatures == KMS_TAG, LeagueError::InvalidProof);
        require!(
            handles
                .iter()
                .all(|h| self.public.contains(h) && self.values.contains_key(h)),
            LeagueError::InvalidProof
        );
        let values: Vec<u64> = handles.iter().map(|h| self.get(*h)).collect();
        require!(
            cleartexts == encode_words(&values).as_slice(),
            LeagueError::InvalidProof
        );
        Ok(())
    }
}
