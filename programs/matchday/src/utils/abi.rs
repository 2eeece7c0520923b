use anchor_lang::prelude::*;

use crate::errors::LeagueError;

pub const WORD_LEN: usize = 32;

/// Encodes each value as a 32-byte big-endian word, the layout the
/// decryption network uses for cleartexts.
pub fn encode_words(values: &[u64]) -> Vec<u8> {
    let mut out = Vec::with_capacity(values.len() * WORD_LEN);
    for value in values {
        out.extend_from_slice(&[0u8; WORD_LEN - 8]);
        out.extend_from_slice(&value.to_be_bytes());
    }
    out
}

/// Decodes exactly `N` words. Any other length, or a word that does not fit
/// in a `u64`, is rejected as an invalid proof.
pub fn decode_words<const N: usize>(data: &[u8]) -> Result<[u64; N]> {
    require!(data.len() == N * WORD_LEN, LeagueError::InvalidProof);

    let mut values = [0u64; N];
    for (value, word) in values.iter_mut().zip(data.chunks_exact(WORD_LEN)) {
        let (high, low) = word.split_at(WORD_LEN - 8);
        require!(high.iter().all(|b| *b == 0), LeagueError::InvalidProof);
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(low);
        *value = u64::from_be_bytes(bytes);
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_league_err;

    #[test]
    fn words_are_big_endian_and_padded() {
        let data = encode_words(&[1, 0x0102]);
        assert_eq!(data.len(), 64);
        assert_eq!(data[31], 1);
        assert_eq!(&data[62..], &[1, 2]);
        assert!(data[..31].iter().all(|b| *b == 0));
        assert_eq!(decode_words::<2>(&data).unwrap(), [1, 0x0102]);
    }

    #[test]
    fn wrong_length_is_rejected() {
        let data = encode_words(&[7, 8, 9]);
        assert_league_err(decode_words::<2>(&data), LeagueError::InvalidProof);
        assert_league_err(decode_words::<2>(&data[..63]), LeagueError::InvalidProof);
        assert_league_err(decode_words::<2>(&[]), LeagueError::InvalidProof);
    }

    #[test]
    fn oversized_word_is_rejected() {
        let mut data = encode_words(&[5, 6]);
        data[40] = 1;
        assert_league_err(decode_words::<2>(&data), LeagueError::InvalidProof);
    }
}
