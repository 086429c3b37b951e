//! TESSERA-256: block cipher
//!
//! Key-dependent substitution–permutation network on 256-bit blocks with
//! 256-bit keys and 4 rounds. Same round structure as TESSERA-128 over
//! four 64-bit words, with a wider cross-word coupling in the diffusion
//! layer.
//!
//! - Block size: 256 bits (32 bytes)
//! - Key size: 256 bits (32 bytes)
//! - Rounds: 4

use crate::cipher::BlockCipher;
use crate::engine::Schedule;
use crate::error::TesseraError;

/// Block size in bytes (256 bits)
pub const BLOCK_BYTES: usize = 32;

/// Key size in bytes (256 bits)
pub const KEY_BYTES: usize = 32;

/// Number of rounds
pub const ROUNDS: usize = 4;

/// TESSERA-256 cipher
pub struct Tessera256 {
    schedule: Schedule<BLOCK_BYTES, ROUNDS>,
}

impl Tessera256 {
    /// Create a new TESSERA-256 instance, deriving the substitution and
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
    /// bijection over `0..32`.
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

    /// Encrypt a 32-byte block in place
    pub fn encrypt_block(&self, block: &mut [u8; BLOCK_BYTES]) {
        self.schedule.encrypt(block);
    }

    /// Decrypt a 32-byte block in place
    pub fn decrypt_block(&self, block: &mut [u8; BLOCK_BYTES]) {
        self.schedule.decrypt(block);
    }
}

impl BlockCipher for Tessera256 {
    const BLOCK_BYTES: usize = BLOCK_BYTES;
    const KEY_BYTES: usize = KEY_BYTES;
    const ROUNDS: usize = ROUNDS;

    type Block = [u8; BLOCK_BYTES];

    fn with_key(key: &Self::Block) -> Self {
        Tessera256::new(*key)
    }

    fn encrypt_block(&self, block: &mut Self::Block) {
        self.schedule.encrypt(block);
    }

    fn decrypt_block(&self, block: &mut Self::Block) {
        self.schedule.decrypt(block);
    }
}
