//! Generalized round engine shared by every TESSERA width.
//!
//! One key-dependent schedule drives a fixed number of
//! diffuse → permute → substitute → round-key rounds; decryption runs the
//! mirrored composition with the inverse tables. The engine is
//! const-generic over block width and round count, so each public cipher
//! is a thin facade over the same code.

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::TesseraError;
use crate::internal::diffusion::diffuse_block;
use crate::internal::prng::SplitMix64;

/// Number of pairwise swaps applied to each table during bootstrap.
const TABLE_SHUFFLE_SWAPS: usize = 65_000;

/// Complete per-key material: round keys, byte permutation, byte
/// substitution, and their exact inverses.
///
/// Immutable after construction; encrypt/decrypt take `&self`, so one
/// schedule can serve any number of threads. All key-derived tables are
/// wiped on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub(crate) struct Schedule<const BYTES: usize, const ROUNDS: usize> {
    round_keys: [[u8; BYTES]; ROUNDS],
    p: [usize; BYTES],
    inv_p: [usize; BYTES],
    s: [u8; 256],
    inv_s: [u8; 256],
}

impl<const BYTES: usize, const ROUNDS: usize> Schedule<BYTES, ROUNDS> {
    /// Derive the full schedule from a master key, shuffling both the
    /// substitution and the permutation table with key-seeded swaps.
    pub(crate) fn derive(key: &[u8; BYTES]) -> Self {
        let mut rng = SplitMix64::new(fold_key_words(key));

        let mut p = identity_permutation::<BYTES>();
        let mut s = identity_sbox();

        // Each swap preserves bijectivity, so the tables stay permutations
        // no matter how many iterations run.
        for _ in 0..TABLE_SHUFFLE_SWAPS {
            let a = rng.next_below(BYTES);
            let b = rng.next_below(BYTES);
            p.swap(a, b);

            let c = rng.next_below(256);
            let d = rng.next_below(256);
            s.swap(c, d);
        }

        Self::assemble(key, p, s)
    }

    /// Build a schedule around a caller-supplied position permutation.
    ///
    /// The substitution table is still key-derived; only the byte layout is
    /// pinned. Returns `InvalidPermutation` unless `table` is a bijection
    /// over `0..BYTES`.
    pub(crate) fn with_table(
        key: &[u8; BYTES],
        table: [usize; BYTES],
    ) -> Result<Self, TesseraError> {
        validate_permutation(&table)?;
        let mut rng = SplitMix64::new(fold_key_words(key));
        let s = derive_sbox(&mut rng);
        Ok(Self::assemble(key, table, s))
    }

    /// Build a schedule whose permutation rotates byte positions left by
    /// `offset` lanes.
    pub(crate) fn with_rotation(key: &[u8; BYTES], offset: usize) -> Self {
        let mut table = [0usize; BYTES];
        for (i, slot) in table.iter_mut().enumerate() {
            *slot = (i + offset) % BYTES;
        }
        let mut rng = SplitMix64::new(fold_key_words(key));
        let s = derive_sbox(&mut rng);
        Self::assemble(key, table, s)
    }

    /// Compute the inverse tables and round keys for finished `p`/`s`.
    fn assemble(key: &[u8; BYTES], p: [usize; BYTES], s: [u8; 256]) -> Self {
        let mut inv_p = [0usize; BYTES];
        for (i, &target) in p.iter().enumerate() {
            inv_p[target] = i;
        }

        let mut inv_s = [0u8; 256];
        for (i, &target) in s.iter().enumerate() {
            inv_s[target as usize] = i as u8;
        }

        let round_keys = expand_round_keys(key, &p, &s);

        Schedule {
            round_keys,
            p,
            inv_p,
            s,
            inv_s,
        }
    }

    /// Apply all forward rounds to a block in place.
    pub(crate) fn encrypt(&self, block: &mut [u8; BYTES]) {
        for round_key in self.round_keys.iter() {
            diffuse_block(block);
            permute(block, &self.p);
            substitute(block, &self.s);
            xor_into(block, round_key);
        }
    }

    /// Apply all backward rounds to a block in place, undoing `encrypt`
    /// step by step in reverse order.
    pub(crate) fn decrypt(&self, block: &mut [u8; BYTES]) {
        for round_key in self.round_keys.iter().rev() {
            xor_into(block, round_key);
            substitute(block, &self.inv_s);
            permute(block, &self.inv_p);
            diffuse_block(block);
        }
    }
}

/// Fold a key into a 64-bit seed by XOR-ing its little-endian words.
fn fold_key_words<const BYTES: usize>(key: &[u8; BYTES]) -> u64 {
    let mut seed = 0u64;
    for chunk in key.chunks_exact(8) {
        let mut raw = [0u8; 8];
        raw.copy_from_slice(chunk);
        seed ^= u64::from_le_bytes(raw);
    }
    seed
}

fn identity_permutation<const BYTES: usize>() -> [usize; BYTES] {
    let mut table = [0usize; BYTES];
    for (i, slot) in table.iter_mut().enumerate() {
        *slot = i;
    }
    table
}

fn identity_sbox() -> [u8; 256] {
    let mut table = [0u8; 256];
    for (i, slot) in table.iter_mut().enumerate() {
        *slot = i as u8;
    }
    table
}

/// Shuffle a substitution table with key-seeded swaps, leaving the byte
/// permutation to the caller.
fn derive_sbox(rng: &mut SplitMix64) -> [u8; 256] {
    let mut s = identity_sbox();
    for _ in 0..TABLE_SHUFFLE_SWAPS {
        let c = rng.next_below(256);
        let d = rng.next_below(256);
        s.swap(c, d);
    }
    s
}

fn validate_permutation<const BYTES: usize>(table: &[usize; BYTES]) -> Result<(), TesseraError> {
    let mut seen = [false; BYTES];
    for &target in table.iter() {
        if target >= BYTES || seen[target] {
            return Err(TesseraError::InvalidPermutation);
        }
        seen[target] = true;
    }
    Ok(())
}

/// Round keys: the master key with each 64-bit word shifted left by the
/// 1-based round index, then permuted and substituted with the bootstrap
/// tables. Round keys need not be bijective images of the key, only
/// deterministic.
fn expand_round_keys<const BYTES: usize, const ROUNDS: usize>(
    key: &[u8; BYTES],
    p: &[usize; BYTES],
    s: &[u8; 256],
) -> [[u8; BYTES]; ROUNDS] {
    let mut keys = [[0u8; BYTES]; ROUNDS];
    for (r, slot) in keys.iter_mut().enumerate() {
        let mut k = *key;
        shift_words_left(&mut k, (r + 1) as u32);
        permute(&mut k, p);
        substitute(&mut k, s);
        *slot = k;
    }
    keys
}

/// Shift every little-endian 64-bit word of the block left by `amount`.
fn shift_words_left<const BYTES: usize>(block: &mut [u8; BYTES], amount: u32) {
    for chunk in block.chunks_exact_mut(8) {
        let mut raw = [0u8; 8];
        raw.copy_from_slice(chunk);
        let shifted = u64::from_le_bytes(raw) << amount;
        chunk.copy_from_slice(&shifted.to_le_bytes());
    }
}

/// Gather convention: `out[i] = in[p[i]]`. Feeding `inv_p` undoes a prior
/// `permute` with `p` exactly.
fn permute<const BYTES: usize>(block: &mut [u8; BYTES], p: &[usize; BYTES]) {
    let src = *block;
    for (slot, &from) in block.iter_mut().zip(p.iter()) {
        *slot = src[from];
    }
}

fn substitute<const BYTES: usize>(block: &mut [u8; BYTES], s: &[u8; 256]) {
    for byte in block.iter_mut() {
        *byte = s[*byte as usize];
    }
}

fn xor_into<const BYTES: usize>(block: &mut [u8; BYTES], other: &[u8; BYTES]) {
    for (byte, &mask) in block.iter_mut().zip(other.iter()) {
        *byte ^= mask;
    }
}
