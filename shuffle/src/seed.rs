use alloc::borrow::ToOwned;
use core::fmt;
use core::str::FromStr;

use num_bigint::BigUint;

use crate::{ShuffleError, ShuffleResult};

/// Width of a shuffle seed in bytes.
pub const SEED_LEN: usize = 32;

/// Public entropy selecting one permutation out of the family for a given modulus and round
/// count.
///
/// The width is part of the hash framing, so a seed is always exactly [`SEED_LEN`] bytes.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Seed([u8; SEED_LEN]);

impl Seed {
    pub const fn new(bytes: [u8; SEED_LEN]) -> Self {
        Self(bytes)
    }

    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; SEED_LEN] {
        &self.0
    }

    /// Encodes `value` as a big-endian integer, left padded to [`SEED_LEN`] bytes.
    ///
    /// Values of `2^256` or more are rejected rather than truncated.
    pub fn from_biguint(value: &BigUint) -> ShuffleResult<Self> {
        let bytes = value.to_bytes_be();
        if bytes.len() > SEED_LEN {
            return Err(ShuffleError::SeedTooLarge {
                max_bytes: SEED_LEN,
            });
        }
        let mut out = [0u8; SEED_LEN];
        out[SEED_LEN - bytes.len()..].copy_from_slice(&bytes);
        Ok(Self(out))
    }

    #[must_use]
    pub fn to_biguint(&self) -> BigUint {
        BigUint::from_bytes_be(&self.0)
    }
}

impl From<[u8; SEED_LEN]> for Seed {
    fn from(bytes: [u8; SEED_LEN]) -> Self {
        Self(bytes)
    }
}

impl From<u64> for Seed {
    fn from(value: u64) -> Self {
        let mut out = [0u8; SEED_LEN];
        out[SEED_LEN - 8..].copy_from_slice(&value.to_be_bytes());
        Self(out)
    }
}

impl TryFrom<&[u8]> for Seed {
    type Error = ShuffleError;

    fn try_from(bytes: &[u8]) -> ShuffleResult<Self> {
        let bytes: [u8; SEED_LEN] =
            bytes
                .try_into()
                .map_err(|_| ShuffleError::InvalidSeedLength {
                    expected: SEED_LEN,
                    actual: bytes.len(),
                })?;
        Ok(Self(bytes))
    }
}

impl AsRef<[u8]> for Seed {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Parses a decimal integer, or a hex integer with a `0x` prefix.
impl FromStr for Seed {
    type Err = ShuffleError;

    fn from_str(s: &str) -> ShuffleResult<Self> {
        let trimmed = s.trim();
        let parsed = match trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
        {
            Some(hex) => BigUint::parse_bytes(hex.as_bytes(), 16),
            None => BigUint::parse_bytes(trimmed.as_bytes(), 10),
        };
        let value = parsed.ok_or_else(|| ShuffleError::MalformedSeed(s.to_owned()))?;
        Self::from_biguint(&value)
    }
}

impl fmt::LowerHex for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str("0x")?;
        }
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:#x}")
    }
}
