use alloc::vec::Vec;

use tracing::{debug, instrument};
use vshuffle_maybe_rayon::prelude::*;

use crate::{IndexShuffle, Seed, ShuffleError, ShuffleResult};

/// Applies `shuffle` to every index of `[0, modulus)` and collects the images in index order.
///
/// Indices are independent, so with the `parallel` feature they are spread over the rayon pool.
/// The output is identical either way.
#[instrument(
    level = "debug",
    skip_all,
    fields(shuffle = shuffle.name(), modulus = modulus, rounds = rounds)
)]
pub fn shuffle_all<S>(
    shuffle: &S,
    modulus: u64,
    seed: &Seed,
    rounds: u32,
) -> ShuffleResult<Vec<u64>>
where
    S: IndexShuffle + Sync + ?Sized,
{
    if modulus == 0 {
        return Err(ShuffleError::InvalidModulus);
    }
    let len = usize::try_from(modulus).map_err(|_| ShuffleError::ModulusTooLarge {
        modulus,
        max: usize::MAX as u64,
    })?;
    debug!(threads = current_num_threads(), "materializing permutation");

    (0..len)
        .into_par_iter()
        .map(|i| shuffle.permute(i as u64, modulus, seed, rounds))
        .collect()
}
