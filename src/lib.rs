//! TESSERA: key-dependent block cipher library
//!
//! An experimental substitution–permutation network whose primitives are
//! generated deterministically from the key: bootstrap derives a byte
//! substitution table, a byte position permutation, their inverses, and a
//! short round-key schedule, then a small fixed number of rounds mixes each
//! block through a linear diffusion layer, the permutation, the
//! substitution, and a round-key XOR. Decryption is the exact structural
//! inverse, so `decrypt(encrypt(x)) == x` for every block under a fixed key.
//!
//! TESSERA is an engineering study of invertible round structure, not a
//! vetted cipher; do not use it to protect real data.
//!
//! ## Modules
//!
//! - `tessera128`: TESSERA-128 block cipher (128-bit blocks, 128-bit keys, 3 rounds)
//! - `tessera256`: TESSERA-256 block cipher (256-bit blocks, 256-bit keys, 4 rounds)
//! - `cipher`: the `BlockCipher` trait both widths implement
//! - `encoding`: strict lowercase-hex boundary for keys and blocks
//! - `error`: boundary error types
//!
//! # Examples
//!
//! Encrypt and decrypt a 128-bit block:
//!
//! ```
//! use tessera::Tessera128;
//!
//! let key = [0x42u8; 16];
//! let cipher = Tessera128::new(key);
//!
//! let original = [0x07u8; 16];
//! let mut block = original;
//!
//! cipher.encrypt_block(&mut block);
//! assert_ne!(block, original);
//!
//! cipher.decrypt_block(&mut block);
//! assert_eq!(block, original);
//! ```
//!
//! Drive either width through the common interface:
//!
//! ```
//! use tessera::{BlockCipher, Tessera256};
//!
//! let key_hex = "a291a728727ac647a53193be9583c504\
//!                a291a728727ac647a53193be9583c504";
//! let cipher = Tessera256::with_key_hex(key_hex).unwrap();
//! let ciphertext = cipher
//!     .encrypt_hex("00112233445566778899aabbccddeeff00112233445566778899aabbccddeeff")
//!     .unwrap();
//! assert_eq!(ciphertext.len(), 64);
//! ```

pub mod cipher;
pub mod encoding;
pub mod error;
pub mod internal;
pub mod tessera128;
pub mod tessera256;

mod engine;

// Re-export main types
pub use cipher::BlockCipher;
pub use error::TesseraError;
pub use tessera128::{
    Tessera128, BLOCK_BYTES as BLOCK_BYTES_128, KEY_BYTES as KEY_BYTES_128, ROUNDS as ROUNDS_128,
};
pub use tessera256::{
    Tessera256, BLOCK_BYTES as BLOCK_BYTES_256, KEY_BYTES as KEY_BYTES_256, ROUNDS as ROUNDS_256,
};
