use anchor_lang::prelude::*;
use solana_sha256_hasher::hashv;

use crate::constants::FHE_DOMAIN;
use crate::events::{FheAccessGranted, FheInputAccepted, FheOperation, FhePublicDecryptAllowed};
use crate::fhe::{proof, EncryptedValueService, FheOp, Handle};
use crate::state::{ProgramConfig, SignerSet};

/// On-chain [`EncryptedValueService`].
///
/// Result handles are a hash of the operation and its operands, so the same
/// computation always names the same ciphertext. Each operation is logged as
/// an event; the coprocessor replays the log to materialise ciphertexts and
/// the decryption network reads the access events as its ACL.
pub struct SymbolicExecutor {
    program_id: Pubkey,
    input_signers: SignerSet,
    kms_signers: SignerSet,
}

impl SymbolicExecutor {
    pub fn new(program_id: &Pubkey, config: &ProgramConfig) -> Self {
        Self {
            program_id: *program_id,
            input_signers: config.input_signers.clone(),
            kms_signers: config.kms_signers.clone(),
        }
    }

    fn derive(&self, op: FheOp, operands: &[&[u8]]) -> Handle {
        let mut parts: Vec<&[u8]> = Vec::with_capacity(operands.len() + 2);
        parts.push(FHE_DOMAIN);
        parts.push(op.tag());
        parts.extend_from_slice(operands);
        Handle(hashv(&parts).to_bytes())
    }

    fn record(&self, op: FheOp, operands: Vec<Handle>, result: Handle) -> Handle {
        emit!(FheOperation {
            op,
            operands,
            result,
        });
        result
    }
}

impl EncryptedValueService for SymbolicExecutor {
    fn verify_input(&mut self, handle: Handle, proof: &[u8], owner: &Pubkey) -> Result<Handle> {
        let digest = proof::input_digest(&handle, owner, &self.program_id);
        proof::verify_threshold(&digest, proof, &self.input_signers)?;
        emit!(FheInputAccepted {
            handle,
            owner: *owner,
        });
        Ok(handle)
    }

    fn trivial(&mut self, value: u64) -> Handle {
        let result = self.derive(FheOp::Trivial, &[value.to_le_bytes().as_ref()]);
        self.record(FheOp::Trivial, Vec::new(), result)
    }

    fn add(&mut self, lhs: Handle, rhs: Handle) -> Handle {
        let result = self.derive(FheOp::Add, &[lhs.0.as_ref(), rhs.0.as_ref()]);
        self.record(FheOp::Add, vec![lhs, rhs], result)
    }

    fn sub(&mut self, lhs: Handle, rhs: Handle) -> Handle {
        let result = self.derive(FheOp::Sub, &[lhs.0.as_ref(), rhs.0.as_ref()]);
        self.record(FheOp::Sub, vec![lhs, rhs], result)
    }

    fn compare_equal(&mut self, lhs: Handle, rhs: Handle) -> Handle {
        let result = self.derive(FheOp::Equal, &[lhs.0.as_ref(), rhs.0.as_ref()]);
        self.record(FheOp::Equal, vec![lhs, rhs], result)
    }

    fn less_or_equal(&mut self, lhs: Handle, rhs: Handle) -> Handle {
        let result = self.derive(FheOp::LessOrEqual, &[lhs.0.as_ref(), rhs.0.as_ref()]);
        self.record(FheOp::LessOrEqual, vec![lhs, rhs], result)
    }

    fn select(&mut self, condition: Handle, if_true: Handle, if_false: Handle) -> Handle {
        let result = self.derive(
            FheOp::Select,
            &[condition.0.as_ref(), if_true.0.as_ref(), if_false.0.as_ref()],
        );
        self.record(FheOp::Select, vec![condition, if_true, if_false], result)
    }

    fn grant_access(&mut self, handle: Handle, account: &Pubkey) {
        emit!(FheAccessGranted {
            handle,
            account: *account,
        });
    }

    fn allow_public_decrypt(&mut self, handle: Handle) {
        emit!(FhePublicDecryptAllowed { handle });
    }

    fn verify_decryption_proof(
        &mut self,
        handles: &[Handle],
        cleartexts: &[u8],
        signatures: &[u8],
    ) -> Result<()> {
        let digest = proof::decryption_digest(handles, cleartexts, &self.program_id);
        proof::verify_threshold(&digest, signatures, &self.kms_signers)
    }
}
