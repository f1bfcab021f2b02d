//! The SHA2-256 hash oracle.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;

use sha2::Digest;
use vshuffle_symmetric::CryptographicHasher;

/// The SHA2-256 hash function.
///
/// Shuffles keyed with this oracle are valid permutations, but they do not match the
/// Keccak-256 reference vectors.
#[derive(Copy, Clone, Debug, Default)]
pub struct Sha256;

impl CryptographicHasher<u8, [u8; 32]> for Sha256 {
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
        let mut hasher = sha2::Sha256::new();
        for chunk in input {
            hasher.update(chunk);
        }
        hasher.finalize().into()
    }
}
