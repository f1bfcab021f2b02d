use alloc::vec::Vec;

use crate::CryptographicHasher;

/// Adapts a plain `Fn(&[u8]) -> [u8; 32]` into a [`CryptographicHasher`].
///
/// Useful for wiring in an externally provided digest, or a stub in tests.
#[derive(Copy, Clone, Debug)]
pub struct FnHasher<F> {
    digest: F,
}

impl<F> FnHasher<F>
where
    F: Fn(&[u8]) -> [u8; 32] + Clone,
{
    pub const fn new(digest: F) -> Self {
        Self { digest }
    }
}

impl<F> CryptographicHasher<u8, [u8; 32]> for FnHasher<F>
where
    F: Fn(&[u8]) -> [u8; 32] + Clone,
{
    fn hash_iter<I>(&self, input: I) -> [u8; 32]
    where
        I: IntoIterator<Item = u8>,
    {
        let input = input.into_iter().collect::<Vec<_>>();
        (self.digest)(&input)
    }

    fn hash_iter_slices<'a, I>(&self, input: I) -> [u8; 32]
    where
        I: IntoIterator<Item = &'a [u8]>,
    {
        let mut buf = Vec::new();
        for chunk in input {
            buf.extend_from_slice(chunk);
        }
        (self.digest)(&buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn length_digest(input: &[u8]) -> [u8; 32] {
        let mut out = [0u8; 32];
        out[0] = input.len() as u8;
        out[1..1 + input.len().min(31)].copy_from_slice(&input[..input.len().min(31)]);
        out
    }

    #[test]
    fn test_slices_are_concatenated() {
        let hasher = FnHasher::new(length_digest);
        let joined = hasher.hash_slice(&[1, 2, 3, 4, 5]);
        let split = hasher.hash_iter_slices([&[1u8, 2][..], &[3][..], &[][..], &[4, 5][..]]);
        assert_eq!(joined, split);
        assert_eq!(joined[0], 5);
        assert_eq!(&joined[1..6], &[1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_iter_matches_slice() {
        let hasher = FnHasher::new(length_digest);
        let from_iter = hasher.hash_iter((0u8..10).rev());
        let from_slice = hasher.hash_slice(&[9, 8, 7, 6, 5, 4, 3, 2, 1, 0]);
        assert_eq!(from_iter, from_slice);
    }

    #[test]
    fn test_hash_item() {
        let hasher = FnHasher::new(length_digest);
        assert_eq!(hasher.hash_item(7), hasher.hash_slice(&[7]));
    }
}
