//! Error types for index shuffling.

use alloc::string::String;

use thiserror::Error;

/// Every way a shuffle query can be rejected.
///
/// All of these are detected before any hashing happens. None is transient: retrying the same
/// call yields the same error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShuffleError {
    /// The domain `[0, modulus)` is empty.
    #[error("modulus must be > 0")]
    InvalidModulus,

    /// The queried index lies outside `[0, modulus)`.
    #[error("index {index} is out of range for modulus {modulus}")]
    InvalidIndex { index: u64, modulus: u64 },

    /// A seed was given as a byte string of the wrong width.
    #[error("seed must be exactly {expected} bytes, got {actual}")]
    InvalidSeedLength { expected: usize, actual: usize },

    /// A seed integer does not fit in the fixed seed width.
    #[error("seed does not fit in {max_bytes} bytes")]
    SeedTooLarge { max_bytes: usize },

    /// A seed string is neither a decimal nor a `0x`-prefixed hex integer.
    #[error("seed {0:?} is not a decimal or 0x-prefixed hex integer")]
    MalformedSeed(String),

    /// The modulus is beyond what the construction (or the host) can represent.
    #[error("modulus {modulus} exceeds the supported maximum of {max}")]
    ModulusTooLarge { modulus: u64, max: u64 },

    /// The round number no longer fits in its one-byte encoding.
    #[error("{rounds} rounds requested, at most {max} are supported")]
    TooManyRounds { rounds: u32, max: u32 },
}

/// Result type alias for shuffle operations.
pub type ShuffleResult<T> = core::result::Result<T, ShuffleError>;
