use vshuffle_keccak::Keccak256Hash;
use vshuffle_sha256::Sha256;
use vshuffle_shuffle::{
    FeistelShuffle, IndexShuffle, Seed, ShuffleError, Shuffler, SwapOrNotShuffle,
};
use vshuffle_symmetric::{CryptographicHasher, FnHasher};

fn keccak_digest(input: &[u8]) -> [u8; 32] {
    Keccak256Hash.hash_slice(input)
}

#[test]
fn keccak_reference_vectors() {
    // modulus = 4, seed = 1 as a 32-byte big-endian integer, rounds = 4.
    let seed: Seed = "1".parse().unwrap();
    let feistel = FeistelShuffle::new(Keccak256Hash);
    let swap_or_not = SwapOrNotShuffle::new(Keccak256Hash);

    let feistel_images: Vec<u64> = (0..4)
        .map(|i| feistel.permute(i, 4, &seed, 4).unwrap())
        .collect();
    let swap_or_not_images: Vec<u64> = (0..4)
        .map(|i| swap_or_not.permute(i, 4, &seed, 4).unwrap())
        .collect();

    assert_eq!(feistel_images, [3, 2, 1, 0]);
    assert_eq!(swap_or_not_images, [3, 1, 2, 0]);
}

#[test]
fn sha256_vectors_differ_from_keccak() {
    let seed = Seed::from(1u64);
    let feistel = Shuffler::feistel(Sha256);
    let swap_or_not = Shuffler::swap_or_not(Sha256);

    assert_eq!(feistel.shuffle_all(4, &seed, 4).unwrap(), [2, 1, 0, 3]);
    assert_eq!(swap_or_not.shuffle_all(4, &seed, 4).unwrap(), [2, 3, 0, 1]);

    let first_ten: Vec<u64> = (0..10)
        .map(|i| swap_or_not.permute(i, 1000, &seed, 90).unwrap())
        .collect();
    assert_eq!(
        first_ten,
        [312, 121, 575, 680, 928, 155, 395, 119, 307, 646]
    );
}

#[test]
fn function_oracle_matches_native_oracle() {
    let seed: Seed = "0xdeadbeef".parse().unwrap();
    let native = Shuffler::swap_or_not(Keccak256Hash);
    let plugged = Shuffler::swap_or_not(FnHasher::new(keccak_digest));

    assert_eq!(
        native.shuffle_all(257, &seed, 20).unwrap(),
        plugged.shuffle_all(257, &seed, 20).unwrap()
    );

    let native = Shuffler::feistel(Keccak256Hash);
    let plugged = Shuffler::feistel(FnHasher::new(keccak_digest));
    assert_eq!(native.permute(12345, 96_722, &seed, 4), Ok(81347));
    assert_eq!(plugged.permute(12345, 96_722, &seed, 4), Ok(81347));
}

#[test]
fn wrong_width_seed_is_rejected_before_shuffling() {
    let bytes = [1u8; 31];
    assert_eq!(
        Seed::try_from(&bytes[..]),
        Err(ShuffleError::InvalidSeedLength {
            expected: 32,
            actual: 31
        })
    );
}
