//! The Keccak-256 hash oracle.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;

use tiny_keccak::{Hasher, Keccak};
use vshuffle_symmetric::CryptographicHasher;

/// The `Keccak` hash function with 256-bit output, as defined in the
/// [Keccak SHA3 submission](https://keccak.team/files/Keccak-submission-3.pdf).
///
/// This is the original Keccak padding, not FIPS-202 SHA3-256. Reference shuffles are defined
/// over this function, so any other choice yields a different permutation.
#[derive(Copy, Clone, Debug, Default)]
pub struct Keccak256Hash;

impl CryptographicHasher<u8, [u8; 32]> for Keccak256Hash {
    fn hash_iter<I>(&self, input: I) -> [u8; 32]
    where
        I: IntoIterator<Item = u8>,
    {
        let input = input.into_iter().collect::<Vec<_>>();
        self.hash_iter_slices([input.as_slice()])
    }

    fn hash_iter_slices<'a, I>(&self, input: I) -> [u8; 32]
    where
        I: IntoIterator<Item = &'a [u8]>,
    {
        let mut hasher = Keccak::v256();
        for chunk in input {
            hasher.update(chunk);
        }

        let mut output = [0u8; 32];
        hasher.finalize(&mut output);
        output
    }
}
