//! Helpers shared by the unit tests.

use alloc::vec;

use vshuffle_symmetric::FnHasher;

/// A fast, non-cryptographic stand-in for a real digest.
///
/// It mixes every input byte into four FNV/splitmix lanes, which is enough to drive the
/// shuffles through all their code paths.
pub(crate) fn toy_digest(input: &[u8]) -> [u8; 32] {
    let mut state = 0xcbf2_9ce4_8422_2325u64 ^ input.len() as u64;
    for &byte in input {
        state ^= u64::from(byte);
        state = state.wrapping_mul(0x0000_0100_0000_01b3);
    }
    let mut out = [0u8; 32];
    for chunk in out.chunks_exact_mut(8) {
        state = state.wrapping_add(0x9e37_79b9_7f4a_7c15);
        let mut z = state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        chunk.copy_from_slice(&(z ^ (z >> 31)).to_be_bytes());
    }
    out
}

pub(crate) type ToyHasher = FnHasher<fn(&[u8]) -> [u8; 32]>;

pub(crate) fn toy_hasher() -> ToyHasher {
    FnHasher::new(toy_digest as fn(&[u8]) -> [u8; 32])
}

/// Returns whether `values` contains every integer in `[0, values.len())` exactly once.
pub(crate) fn is_permutation(values: &[u64]) -> bool {
    let mut seen = vec![false; values.len()];
    for &v in values {
        let Ok(v) = usize::try_from(v) else {
            return false;
        };
        match seen.get_mut(v) {
            Some(slot) if !*slot => *slot = true,
            _ => return false,
        }
    }
    true
}

mod tests {
    use alloc::vec::Vec;

    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use rand::seq::SliceRandom;

    use super::*;

    #[test]
    fn test_is_permutation() {
        assert!(is_permutation(&[]));
        assert!(is_permutation(&[0]));
        assert!(is_permutation(&[2, 0, 1]));
        assert!(!is_permutation(&[1]));
        assert!(!is_permutation(&[0, 0]));
        assert!(!is_permutation(&[0, 3, 1]));
        assert!(!is_permutation(&[u64::MAX]));

        let mut rng = SmallRng::seed_from_u64(1);
        let mut values: Vec<u64> = (0..500).collect();
        values.shuffle(&mut rng);
        assert!(is_permutation(&values));
        values[17] = values[18];
        assert!(!is_permutation(&values));
    }

    #[test]
    fn test_toy_digest_separates_inputs() {
        assert_ne!(toy_digest(&[]), toy_digest(&[0]));
        assert_ne!(toy_digest(&[1, 2]), toy_digest(&[2, 1]));
        assert_eq!(toy_digest(b"seed"), toy_digest(b"seed"));
    }
}
