use alloc::vec::Vec;

use crate::{Seed, ShuffleError, ShuffleResult, shuffle_all};

/// A family of permutations of `[0, modulus)`, indexed by seed and round count.
///
/// For fixed `(modulus, seed, rounds)`, `permute` is a bijection on `[0, modulus)`. With
/// `rounds == 0` it is the identity. That is a defined (if useless) permutation, not an error.
pub trait IndexShuffle {
    /// A short, stable name for logs.
    fn name(&self) -> &'static str;

    /// Returns the image of `index` under the permutation selected by `seed` and `rounds`.
    fn permute(&self, index: u64, modulus: u64, seed: &Seed, rounds: u32) -> ShuffleResult<u64>;

    /// The round count below which the output is not expected to look like a random
    /// permutation. Fewer rounds still give a bijection.
    fn recommended_rounds(&self, modulus: u64) -> u32;

    /// Materializes the whole permutation, `out[i] == self.permute(i, ..)`.
    fn shuffle_all(&self, modulus: u64, seed: &Seed, rounds: u32) -> ShuffleResult<Vec<u64>>
    where
        Self: Sync + Sized,
    {
        shuffle_all(self, modulus, seed, rounds)
    }
}

/// Rejects empty domains and out-of-range indices.
pub(crate) fn check_domain(index: u64, modulus: u64) -> ShuffleResult<()> {
    if modulus == 0 {
        return Err(ShuffleError::InvalidModulus);
    }
    if index >= modulus {
        return Err(ShuffleError::InvalidIndex { index, modulus });
    }
    Ok(())
}
