use core::fmt;

use clap::Parser;
use tracing::{debug, warn};
use vshuffle_keccak::Keccak256Hash;
use vshuffle_sha256::Sha256;
use vshuffle_shuffle::{IndexShuffle, Seed, ShuffleResult, Shuffler};
use vshuffle_symmetric::CryptographicHasher;

use crate::parsers::{HashOptions, ShuffleOptions};

#[derive(Parser, Debug)]
#[command(name = "vshuffle", version, about, long_about = None)]
pub struct Args {
    /// Size of the domain [0, modulus) to permute.
    pub modulus: u64,

    /// Seed as a decimal integer, or hex with a 0x prefix. Encoded as 32 bytes big-endian.
    pub seed: Seed,

    /// Number of mixing rounds. Zero gives the identity permutation.
    pub rounds: u32,

    /// Index to permute. Without it the whole shuffled sequence is printed.
    pub index: Option<u64>,

    /// The shuffle construction.
    #[arg(short, long, ignore_case = true, value_enum, default_value_t = ShuffleOptions::Feistel)]
    pub algorithm: ShuffleOptions,

    /// The hash oracle keying the shuffle. Only keccak reproduces the reference permutations.
    #[arg(long = "hash", ignore_case = true, value_enum, default_value_t = HashOptions::Keccak)]
    pub hash: HashOptions,
}

/// What a run prints on stdout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Emitted {
    Single(u64),
    Sequence(Vec<u64>),
}

impl fmt::Display for Emitted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(image) => write!(f, "{image}"),
            Self::Sequence(images) => write!(f, "{images:?}"),
        }
    }
}

pub fn execute(args: &Args) -> ShuffleResult<Emitted> {
    match args.hash {
        HashOptions::Keccak => execute_with(args, Keccak256Hash),
        HashOptions::Sha256 => execute_with(args, Sha256),
    }
}

fn execute_with<H>(args: &Args, hasher: H) -> ShuffleResult<Emitted>
where
    H: CryptographicHasher<u8, [u8; 32]> + Sync,
{
    let shuffler = match args.algorithm {
        ShuffleOptions::Feistel => Shuffler::feistel(hasher),
        ShuffleOptions::SwapOrNot => Shuffler::swap_or_not(hasher),
    };

    let recommended = shuffler.recommended_rounds(args.modulus);
    if args.rounds < recommended {
        warn!(
            shuffle = shuffler.name(),
            rounds = args.rounds,
            recommended,
            "round count below the recommended minimum, output may be far from random"
        );
    }
    debug!(
        shuffle = shuffler.name(),
        hash = ?args.hash,
        modulus = args.modulus,
        seed = %args.seed,
        rounds = args.rounds,
        "shuffling"
    );

    match args.index {
        Some(index) => shuffler
            .permute(index, args.modulus, &args.seed, args.rounds)
            .map(Emitted::Single),
        None => shuffler
            .shuffle_all(args.modulus, &args.seed, args.rounds)
            .map(Emitted::Sequence),
    }
}
