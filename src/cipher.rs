//! Common interface implemented by every TESSERA width.

use crate::encoding::{decode_into, encode_block};
use crate::error::TesseraError;

/// A fixed-width block cipher keyed once, then shared freely.
///
/// Both widths of the family implement this, so callers (the CLI, stress
/// tests) can drive either engine generically. The hex helpers carry the
/// boundary validation; the block-level methods are total functions.
pub trait BlockCipher: Sized {
    /// Block width in bytes.
    const BLOCK_BYTES: usize;
    /// Key width in bytes; equal to the block width in this family.
    const KEY_BYTES: usize;
    /// Number of rounds.
    const ROUNDS: usize;

    /// Fixed-size block/key array type.
    type Block: Copy + Default + AsRef<[u8]> + AsMut<[u8]>;

    /// Bootstrap all key-dependent material from a master key.
    fn with_key(key: &Self::Block) -> Self;

    /// Encrypt one block in place.
    fn encrypt_block(&self, block: &mut Self::Block);

    /// Decrypt one block in place.
    fn decrypt_block(&self, block: &mut Self::Block);

    /// Bootstrap from a hex-encoded master key.
    fn with_key_hex(key: &str) -> Result<Self, TesseraError> {
        let mut k = Self::Block::default();
        decode_into(key, k.as_mut())?;
        Ok(Self::with_key(&k))
    }

    /// Encrypt a hex-encoded block, returning lowercase hex ciphertext.
    fn encrypt_hex(&self, plaintext: &str) -> Result<String, TesseraError> {
        let mut block = Self::Block::default();
        decode_into(plaintext, block.as_mut())?;
        self.encrypt_block(&mut block);
        Ok(encode_block(block.as_ref()))
    }

    /// Decrypt a hex-encoded block, returning lowercase hex plaintext.
    fn decrypt_hex(&self, ciphertext: &str) -> Result<String, TesseraError> {
        let mut block = Self::Block::default();
        decode_into(ciphertext, block.as_mut())?;
        self.decrypt_block(&mut block);
        Ok(encode_block(block.as_ref()))
    }
}
