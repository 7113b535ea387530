// src/crypto.rs
//! Secure random primitives shared by the generator.
//!
//! Production callers pass `OsRng`; every helper is generic so a seeded
//! CSPRNG can drive the same code paths in tests.
use rand::{seq::SliceRandom, CryptoRng, Rng};

pub use rand::rngs::OsRng;

/// Uniform index in `[0, n)`.
///
/// `gen_range` rejects out-of-zone samples, so there is no modulo bias.
/// Panics if `n == 0`; callers only pass non-empty alphabets.
pub fn secure_index<R>(rng: &mut R, n: usize) -> usize
where
    R: Rng + CryptoRng + ?Sized,
{
    rng.gen_range(0..n)
}

/// Pick one character uniformly from `alphabet`.
pub fn secure_choice<R>(rng: &mut R, alphabet: &[char]) -> char
where
    R: Rng + CryptoRng + ?Sized,
{
    alphabet[secure_index(rng, alphabet.len())]
}

/// In-place Fisher-Yates permutation.
pub fn secure_shuffle<R>(rng: &mut R, chars: &mut [char])
where
    R: Rng + CryptoRng + ?Sized,
{
    chars.shuffle(rng);
}
