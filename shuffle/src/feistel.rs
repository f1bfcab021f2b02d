use num_bigint::BigUint;
use tracing::trace;
use vshuffle_symmetric::CryptographicHasher;
use vshuffle_util::{grid_side, u64_to_be_bytes32};

use crate::shuffle::check_domain;
use crate::{IndexShuffle, Seed, ShuffleResult};

/// Round count from which the Feistel shuffle is expected to behave like a random permutation.
pub const FEISTEL_RECOMMENDED_ROUNDS: u32 = 4;

/// Digests are read as 256-bit integers. A divisor wider than this zeroes the round value.
const DIGEST_BITS: u64 = 256;

/// A shuffle built from a keyed Feistel network over a square grid.
///
/// `[0, modulus)` is embedded in `[0, h * h)` with `h = ceil(sqrt(modulus))`. Each point is
/// split into grid coordinates `(x / h, x % h)` and mixed for `rounds` rounds with
///
/// ```text
/// F(R, i) = (H(R as 32-byte BE || seed) / modulus^i) % modulus
/// (L, R)  = (R, (L + F(R, i)) % h)
/// ```
///
/// The network is a bijection on the whole grid. Images that land outside `[0, modulus)` are
/// fed back in until one lands inside (cycle walking). This always terminates for
/// `modulus >= 1`, but has no fixed bound on the number of walks.
#[derive(Copy, Clone, Debug, Default)]
pub struct FeistelShuffle<H> {
    hasher: H,
}

impl<H> FeistelShuffle<H> {
    pub const fn new(hasher: H) -> Self {
        Self { hasher }
    }
}

impl<H> FeistelShuffle<H>
where
    H: CryptographicHasher<u8, [u8; 32]>,
{
    /// One digest serves every round; round `i` reads the base-`modulus` digit `i` of it.
    fn round_value(&self, right: u64, seed: &Seed, divisor: &BigUint, modulus: &BigUint) -> u64 {
        if divisor.bits() > DIGEST_BITS {
            return 0;
        }
        let right = u64_to_be_bytes32(right);
        let digest = self
            .hasher
            .hash_iter_slices([&right[..], &seed.as_bytes()[..]]);
        let value = BigUint::from_bytes_be(&digest) / divisor % modulus;
        value.iter_u64_digits().next().unwrap_or(0)
    }

    /// A single pass of the network over the `side * side` grid.
    fn network(&self, x: u128, side: u128, modulus: &BigUint, seed: &Seed, rounds: u32) -> u128 {
        let (mut left, mut right) = (x / side, x % side);
        let mut divisor = BigUint::from(1u32);
        for _ in 0..rounds {
            let f = self.round_value(right as u64, seed, &divisor, modulus);
            let new_right = (left + u128::from(f)) % side;
            left = right;
            right = new_right;
            if divisor.bits() <= DIGEST_BITS {
                divisor *= modulus;
            }
        }
        left * side + right
    }
}

impl<H> IndexShuffle for FeistelShuffle<H>
where
    H: CryptographicHasher<u8, [u8; 32]>,
{
    fn name(&self) -> &'static str {
        "feistel"
    }

    fn permute(&self, index: u64, modulus: u64, seed: &Seed, rounds: u32) -> ShuffleResult<u64> {
        check_domain(index, modulus)?;

        let side = u128::from(grid_side(modulus));
        let big_modulus = BigUint::from(modulus);
        let mut x = u128::from(index);
        let mut walks = 0u64;
        loop {
            x = self.network(x, side, &big_modulus, seed, rounds);
            if x < u128::from(modulus) {
                return Ok(x as u64);
            }
            walks += 1;
            trace!(index, walks, x = %x, "feistel image outside domain, walking the cycle");
        }
    }

    fn recommended_rounds(&self, _modulus: u64) -> u32 {
        FEISTEL_RECOMMENDED_ROUNDS
    }
}
