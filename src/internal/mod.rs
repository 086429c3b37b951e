//! Internal shared utilities for TESSERA ciphers

pub mod diffusion;
pub mod prng;

pub use diffusion::{diffuse_block, diffuse_word};
pub use prng::SplitMix64;
