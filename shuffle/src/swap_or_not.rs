use num_bigint::BigUint;
use vshuffle_symmetric::CryptographicHasher;
use vshuffle_util::u64_from_be_prefix;

use crate::shuffle::check_domain;
use crate::{IndexShuffle, Seed, ShuffleError, ShuffleResult};

/// The round number is hashed as a single byte.
pub const MAX_SWAP_OR_NOT_ROUNDS: u32 = 1 << 8;

/// `position / 256` is hashed as four bytes, which caps the domain at `2^40`.
pub const MAX_SWAP_OR_NOT_MODULUS: u64 = 1 << 40;

/// Returns `ceil(6 * log2(modulus))`, clamped to `[1, MAX_SWAP_OR_NOT_ROUNDS]`.
///
/// Computed exactly as the bit length of `modulus^6 - 1`.
#[must_use]
pub fn swap_or_not_recommended_rounds(modulus: u64) -> u32 {
    if modulus <= 1 {
        return 1;
    }
    let bits = (BigUint::from(modulus).pow(6) - 1u32).bits();
    bits.clamp(1, u64::from(MAX_SWAP_OR_NOT_ROUNDS)) as u32
}

/// The swap-or-not shuffle of Hoang, Morris and Rogaway, in the generalized-domain form used by
/// beacon-chain committee shuffling.
///
/// Each round derives a pivot from `H(seed || round)`, pairs `position` with its reflection
/// `flip = (pivot - position) % modulus`, and swaps the two when a bit of
/// `H(seed || round || max(position, flip) / 256)` is set. Both members of a pair read the same
/// bit, so every round is an involution and the composition is a permutation.
#[derive(Copy, Clone, Debug, Default)]
pub struct SwapOrNotShuffle<H> {
    hasher: H,
}

impl<H> SwapOrNotShuffle<H> {
    pub const fn new(hasher: H) -> Self {
        Self { hasher }
    }
}

impl<H> SwapOrNotShuffle<H>
where
    H: CryptographicHasher<u8, [u8; 32]>,
{
    fn digest(&self, parts: &[&[u8]]) -> [u8; 32] {
        self.hasher.hash_iter_slices(parts.iter().copied())
    }

    fn pivot(&self, seed: &Seed, round: u8, modulus: u64) -> u64 {
        let digest = self.digest(&[seed.as_bytes(), &[round]]);
        u64_from_be_prefix(&digest) % modulus
    }

    fn swap_bit(&self, seed: &Seed, round: u8, probe: u64) -> bool {
        // probe < 2^40, so the bucket fits in four bytes.
        let bucket = ((probe / 256) as u32).to_be_bytes();
        let source = self.digest(&[seed.as_bytes(), &[round], &bucket]);
        let byte = source[((probe % 256) / 8) as usize];
        (byte >> (probe % 8)) & 1 == 1
    }
}

impl<H> IndexShuffle for SwapOrNotShuffle<H>
where
    H: CryptographicHasher<u8, [u8; 32]>,
{
    fn name(&self) -> &'static str {
        "swap-or-not"
    }

    fn permute(&self, index: u64, modulus: u64, seed: &Seed, rounds: u32) -> ShuffleResult<u64> {
        check_domain(index, modulus)?;
        if modulus > MAX_SWAP_OR_NOT_MODULUS {
            return Err(ShuffleError::ModulusTooLarge {
                modulus,
                max: MAX_SWAP_OR_NOT_MODULUS,
            });
        }
        if rounds > MAX_SWAP_OR_NOT_ROUNDS {
            return Err(ShuffleError::TooManyRounds {
                rounds,
                max: MAX_SWAP_OR_NOT_ROUNDS,
            });
        }

        let mut position = index;
        for round in 0..rounds {
            let round = round as u8;
            let pivot = self.pivot(seed, round, modulus);
            let flip = (pivot + modulus - position) % modulus;
            if self.swap_bit(seed, round, position.max(flip)) {
                position = flip;
            }
        }
        Ok(position)
    }

    fn recommended_rounds(&self, modulus: u64) -> u32 {
        swap_or_not_recommended_rounds(modulus)
    }
}
