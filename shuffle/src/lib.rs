//! Seed-deterministic pseudorandom permutations of `[0, modulus)`.
//!
//! Two interchangeable constructions are provided, both generic over the hash oracle:
//! - [`FeistelShuffle`] embeds the domain in a square grid, runs a keyed Feistel network over it
//!   and walks cycles until the image lands back in range.
//! - [`SwapOrNotShuffle`] is the Hoang–Morris swap-or-not shuffle, as used for committee
//!   selection in beacon-chain consensus.
//!
//! Every function here is pure. A permutation is fully determined by `(seed, modulus, rounds)`
//! and the hasher, and is recomputed on every call.

#![no_std]

extern crate alloc;

mod error;
mod feistel;
mod full;
mod seed;
mod shuffle;
mod shuffler;
mod swap_or_not;

#[cfg(test)]
mod testing;

pub use error::*;
pub use feistel::*;
pub use full::*;
pub use seed::*;
pub use shuffle::*;
pub use shuffler::*;
pub use swap_or_not::*;
