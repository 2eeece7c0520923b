use anchor_lang::prelude::*;
use solana_secp256k1_recover::secp256k1_recover;
use solana_sha256_hasher::hashv;

use crate::constants::{FHE_DOMAIN, SIGNATURE_LEN};
use crate::errors::LeagueError;
use crate::fhe::Handle;
use crate::state::SignerSet;

/// Identifier stored in a [`SignerSet`]: sha256 of the uncompressed
/// 64-byte secp256k1 public key (without the 0x04 prefix).
pub fn signer_id(public_key: &[u8; 64]) -> [u8; 32] {
    hashv(&[public_key]).to_bytes()
}

/// Message the coprocessor signs when it attests a client-encrypted input.
pub fn input_digest(handle: &Handle, owner: &Pubkey, program_id: &Pubkey) -> [u8; 32] {
    hashv(&[
        FHE_DOMAIN,
        b"input",
        handle.0.as_ref(),
        owner.as_ref(),
        program_id.as_ref(),
    ])
    .to_bytes()
}

/// Message the decryption network signs when it reveals `handles`.
pub fn decryption_digest(handles: &[Handle], cleartexts: &[u8], program_id: &Pubkey) -> [u8; 32] {
    let mut parts: Vec<&[u8]> = Vec::with_capacity(handles.len() + 4);
    parts.push(FHE_DOMAIN);
    parts.push(b"decrypt");
    parts.push(program_id.as_ref());
    for handle in handles {
        parts.push(handle.0.as_ref());
    }
    parts.push(cleartexts);
    hashv(&parts).to_bytes()
}

/// Requires at least `set.threshold` distinct members of `set` to have signed
/// `digest`. `signatures` is a concatenation of 65-byte `r || s || v` records;
/// `v` may be 0/1 or 27/28. Signatures from unknown keys are ignored, a
/// malformed record rejects the whole proof.
pub fn verify_threshold(digest: &[u8; 32], signatures: &[u8], set: &SignerSet) -> Result<()> {
    require!(
        !signatures.is_empty() && signatures.len() % SIGNATURE_LEN == 0,
        LeagueError::InvalidProof
    );

    let mut seen: Vec<[u8; 32]> = Vec::with_capacity(set.signers.len());
    for record in signatures.chunks_exact(SIGNATURE_LEN) {
        let recovery_id = match record[64] {
            v @ 0..=1 => v,
            v @ 27..=28 => v - 27,
            _ => return err!(LeagueError::InvalidProof),
        };
        let public_key = secp256k1_recover(digest, recovery_id, &record[..64])
            .map_err(|_| error!(LeagueError::InvalidProof))?;
        let id = signer_id(&public_key.to_bytes());
        if set.signers.contains(&id) && !seen.contains(&id) {
            seen.push(id);
        }
    }

    require!(
        seen.len() >= usize::from(set.threshold),
        LeagueError::InvalidProof
    );
    Ok(())
}

#[cfg(test)]
pub(crate) mod test_keys {
    use super::*;
    use libsecp256k1::{sign, Message, PublicKey, SecretKey};

    pub fn secret(seed: u8) -> SecretKey {
        SecretKey::parse(&[seed; 32]).expect("valid test scalar")
    }

    pub fn id_of(seed: u8) -> [u8; 32] {
        let public = PublicKey::from_secret_key(&secret(seed)).serialize();
        let mut raw = [0u8; 64];
        raw.copy_from_slice(&public[1..]);
        signer_id(&raw)
    }

    pub fn sign_digest(seed: u8, digest: &[u8; 32]) -> Vec<u8> {
        let (signature, recovery) = sign(&Message::parse(digest), &secret(seed));
        let mut record = signature.serialize().to_vec();
        record.push(recovery.serialize() + 27);
        record
    }

    pub fn set_of(seeds: &[u8], threshold: u8) -> SignerSet {
        SignerSet {
            signers: seeds.iter().map(|seed| id_of(*seed)).collect(),
            threshold,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_keys::*;
    use super::*;
    use crate::test_utils::assert_league_err;

    fn digest() -> [u8; 32] {
        decryption_digest(&[Handle([7; 32])], &[1u8; 32], &crate::ID)
    }

    #[test]
    fn accepts_threshold_of_known_signers() {
        let set = set_of(&[1, 2, 3], 2);
        let mut signatures = sign_digest(1, &digest());
        signatures.extend(sign_digest(3, &digest()));
        assert!(verify_threshold(&digest(), &signatures, &set).is_ok());
    }

    #[test]
    fn rejects_below_threshold() {
        let set = set_of(&[1, 2, 3], 2);
        let signatures = sign_digest(2, &digest());
        assert_league_err(
            verify_threshold(&digest(), &signatures, &set),
            LeagueError::InvalidProof,
        );
    }

    #[test]
    fn repeated_signer_counts_once() {
        let set = set_of(&[1, 2], 2);
        let mut signatures = sign_digest(1, &digest());
        signatures.extend(sign_digest(1, &digest()));
        assert!(verify_threshold(&digest(), &signatures, &set).is_err());
    }

    #[test]
    fn unknown_signer_is_ignored() {
        let set = set_of(&[1, 2], 1);
        let mut signatures = sign_digest(9, &digest());
        assert!(verify_threshold(&digest(), &signatures, &set).is_err());
        signatures.extend(sign_digest(2, &digest()));
        assert!(verify_threshold(&digest(), &signatures, &set).is_ok());
    }

    #[test]
    fn signature_over_other_message_fails() {
        let set = set_of(&[1], 1);
        let other = decryption_digest(&[Handle([7; 32])], &[2u8; 32], &crate::ID);
        let signatures = sign_digest(1, &other);
        assert!(verify_threshold(&digest(), &signatures, &set).is_err());
    }

    #[test]
    fn malformed_blobs_are_rejected() {
        let set = set_of(&[1], 1);
        assert!(verify_threshold(&digest(), &[], &set).is_err());
        assert!(verify_threshold(&digest(), &[0u8; 64], &set).is_err());

        let mut bad_v = sign_digest(1, &digest());
        bad_v[64] = 5;
        assert!(verify_threshold(&digest(), &bad_v, &set).is_err());
    }
}
