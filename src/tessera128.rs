//! TESSERA-128: block cipher
//!
//! Key-dependent substitution–permutation network on 128-bit blocks with
//! 128-bit keys and 3 rounds. Every round runs the linear diffusion layer,
//! the bootstrap-derived byte permutation and substitution, and a
//! round-key XOR; decryption replays the exact inverse composition.
//!
//! - Block size: 128 bits (16 bytes)
//! - Key size: 128 bits (16 bytes)
//! - Rounds: 3

use crate::cipher::BlockCipher;
use crate::engine::Schedule;
use crate::error::TesseraError;

/// Block size in bytes (128 bits)
pub const BLOCK_BYTES: usize = 16;

/// Key size in bytes (128 bits)
pub const KEY_BYTES: usize = 16;

/// Number of rounds
pub const ROUNDS: usize = 3;

/// TESSERA-128 cipher
pub struct Tessera128 {
    schedule: Schedule<BLOCK_BYTES, ROUNDS>,
}

impl Tessera128 {
    /// Create a new TESSERA-128 instance, deriving the substitution and
    /// permutation tables and the round keys from the given key.
    pub fn new(key: [u8; KEY_BYTES]) -> Self {
        Self {
            schedule: Schedule::derive(&key),
        }
    }

    /// Create an instance with a fixed position permutation instead of the
    /// key-derived one. The substitution table stays key-dependent.
    ///
    /// # Errors
    /// Returns [`TesseraError::InvalidPermutation`] unless `table` is a
    /// bijection over `0..16`.
    pub fn with_permutation(
        key: [u8; KEY_BYTES],
        table: [usize; BLOCK_BYTES],
    ) -> Result<Self, TesseraError> {
        Ok(Self {
            schedule: Schedule::with_table(&key, table)?,
        })
    }

    /// Create an instance whose permutation rotates byte positions left by
    /// `offset` lanes.
    pub fn with_rotation(key: [u8; KEY_BYTES], offset: usize) -> Self {
        Self {
            schedule: Schedule::with_rotation(&key, offset),
        }
    }

    /// Encrypt a 16-byte block in place
    pub fn encrypt_block(&self, block: &mut [u8; BLOCK_BYTES]) {
        self.schedule.encrypt(block);
    }

    /// Decrypt a 16-byte block in place
    pub fn decrypt_block(&self, block: &mut [u8; BLOCK_BYTES]) {
        self.schedule.decrypt(block);
    }
}

impl BlockCipher for Tessera128 {
    const BLOCK_BYTES: usize = BLOCK_BYTES;
    const KEY_BYTES: usize = KEY_BYTES;
    const ROUNDS: usize = ROUNDS;

    type Block = [u8; BLOCK_BYTES];

    fn with_key(key: &Self::Block) -> Self {
        Tessera128::new(*key)
    }

    fn encrypt_block(&self, block: &mut Self::Block) {
        self.schedule.encrypt(block);
    }

    fn decrypt_block(&self, block: &mut Self::Block) {
        self.schedule.decrypt(block);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::internal::SplitMix64;

    const TEST_KEY: [u8; 16] = [
        0xA2, 0x91, 0xA7, 0x28, 0x72, 0x7A, 0xC6, 0x47, 0xA5, 0x31, 0x93, 0xBE, 0x95, 0x83, 0xC5,
        0x04,
    ];

    #[test]
    fn test_roundtrip_deterministic_samples() {
        let mut prng = SplitMix64::new(0xDEAD_BEEF_CAFE_BABE);
        let mut key = [0u8; 16];
        prng.fill_bytes(&mut key);

        let cipher = Tessera128::new(key);

        for _ in 0..200 {
            let mut block = [0u8; 16];
            prng.fill_bytes(&mut block);

            let original = block;
            cipher.encrypt_block(&mut block);
            cipher.decrypt_block(&mut block);

            assert_eq!(block, original, "roundtrip failed");
        }
    }

    #[test]
    fn test_roundtrip_various_keys() {
        let test_keys = [[0u8; 16], [0xFFu8; 16], [0xAAu8; 16], [0x55u8; 16]];

        for key in test_keys {
            let cipher = Tessera128::new(key);

            let test_blocks = [[0u8; 16], [0xFFu8; 16], [0xAAu8; 16], [0x55u8; 16]];
            for mut block in test_blocks {
                let original = block;
                cipher.encrypt_block(&mut block);
                cipher.decrypt_block(&mut block);
                assert_eq!(block, original, "roundtrip failed for key/block pattern");
            }
        }
    }

    #[test]
    fn test_zero_block_does_not_encrypt_to_itself() {
        let cipher = Tessera128::new(TEST_KEY);
        let mut block = [0u8; 16];
        cipher.encrypt_block(&mut block);
        assert!(block.iter().any(|&b| b != 0));
    }

    #[test]
    fn test_same_key_same_ciphertext() {
        let a = Tessera128::new(TEST_KEY);
        let b = Tessera128::new(TEST_KEY);

        let mut block_a: [u8; 16] = core::array::from_fn(|i| i as u8);
        let mut block_b = block_a;
        a.encrypt_block(&mut block_a);
        b.encrypt_block(&mut block_b);
        assert_eq!(block_a, block_b);
    }

    #[test]
    fn test_different_keys_different_ciphertext() {
        let mut other_key = TEST_KEY;
        other_key[15] ^= 0x01;

        let a = Tessera128::new(TEST_KEY);
        let b = Tessera128::new(other_key);

        let mut block_a = [0x42u8; 16];
        let mut block_b = [0x42u8; 16];
        a.encrypt_block(&mut block_a);
        b.encrypt_block(&mut block_b);
        assert_ne!(block_a, block_b);
    }

    #[test]
    fn test_fixed_permutation_roundtrip() {
        let table: [usize; 16] = [3, 7, 13, 0, 11, 1, 15, 2, 4, 12, 5, 9, 6, 8, 14, 10];
        let cipher = Tessera128::with_permutation(TEST_KEY, table).unwrap();

        let mut block: [u8; 16] = core::array::from_fn(|i| (i * 13) as u8);
        let original = block;
        cipher.encrypt_block(&mut block);
        assert_ne!(block, original);
        cipher.decrypt_block(&mut block);
        assert_eq!(block, original);
    }

    #[test]
    fn test_fixed_permutation_rejects_bad_table() {
        let table = [0usize; 16];
        assert!(matches!(
            Tessera128::with_permutation(TEST_KEY, table),
            Err(TesseraError::InvalidPermutation)
        ));
    }

    #[test]
    fn test_rotation_roundtrip() {
        let cipher = Tessera128::with_rotation(TEST_KEY, 5);

        let mut block = [0x99u8; 16];
        let original = block;
        cipher.encrypt_block(&mut block);
        cipher.decrypt_block(&mut block);
        assert_eq!(block, original);
    }

    #[test]
    fn test_permutation_strategies_disagree() {
        // Derived, fixed-table and rotation schedules are distinct ciphers
        // under the same key.
        let derived = Tessera128::new(TEST_KEY);
        let rotated = Tessera128::with_rotation(TEST_KEY, 5);

        let mut block_a = [0x10u8; 16];
        let mut block_b = [0x10u8; 16];
        derived.encrypt_block(&mut block_a);
        rotated.encrypt_block(&mut block_b);
        assert_ne!(block_a, block_b);
    }

    #[test]
    fn test_hex_interface_roundtrip() {
        let cipher = Tessera128::with_key_hex("a291a728727ac647a53193be9583c504").unwrap();
        let plaintext = "00112233445566778899aabbccddeeff";

        let ciphertext = cipher.encrypt_hex(plaintext).unwrap();
        assert_eq!(ciphertext.len(), 32);
        assert_ne!(ciphertext, plaintext);

        let recovered = cipher.decrypt_hex(&ciphertext).unwrap();
        assert_eq!(recovered, plaintext);
    }

    #[test]
    fn test_hex_interface_rejects_wrong_width() {
        let cipher = Tessera128::new(TEST_KEY);
        assert_eq!(
            cipher.encrypt_hex("a291a728").unwrap_err(),
            TesseraError::WidthMismatch {
                expected: 16,
                actual: 4
            }
        );
    }
}
