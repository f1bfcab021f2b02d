//! Various simple utilities.

#![no_std]

/// Computes `ceil(sqrt(n))`, the side of the smallest square grid holding `n` points.
///
/// Equivalently, the integer square root of the smallest perfect square `>= n`.
#[must_use]
#[inline]
pub const fn grid_side(n: u64) -> u64 {
    let root = n.isqrt();
    if root * root == n { root } else { root + 1 }
}

/// Encodes `x` as a 32-byte big-endian integer, left padded with zeros.
#[must_use]
#[inline]
pub fn u64_to_be_bytes32(x: u64) -> [u8; 32] {
    let mut out = [0u8; 32];
    out[24..].copy_from_slice(&x.to_be_bytes());
    out
}

/// Reads the first eight bytes of `bytes` as a big-endian `u64`.
///
/// # Panics
/// Panics if `bytes` is shorter than eight bytes.
#[must_use]
#[inline]
pub fn u64_from_be_prefix(bytes: &[u8]) -> u64 {
    let mut prefix = [0u8; 8];
    prefix.copy_from_slice(&bytes[..8]);
    u64::from_be_bytes(prefix)
}
