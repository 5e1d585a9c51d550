//! SHA-1 hashing in the form the range API indexes its corpus by.

use sha1::{Digest, Sha1};

/// Length of a SHA-1 digest rendered as hex.
pub const HASH_HEX_LEN: usize = 40;

/// Number of leading hex characters sent to the range endpoint.
pub const PREFIX_LEN: usize = 5;

/// Number of hex characters matched locally against range responses.
pub const SUFFIX_LEN: usize = HASH_HEX_LEN - PREFIX_LEN;

/// Hex lookup table for digest rendering.
pub const HEX_CHARS: &[u8; 16] = b"0123456789ABCDEF";

/// Returns the SHA-1 digest of `input` as 40 uppercase hex characters.
pub fn sha1_hex(input: &str) -> String {
    let hash: [u8; 20] = Sha1::digest(input.as_bytes()).into();

    let mut out = String::with_capacity(HASH_HEX_LEN);
    for byte in hash {
        out.push(HEX_CHARS[(byte >> 4) as usize] as char);
        out.push(HEX_CHARS[(byte & 0x0f) as usize] as char);
    }
    out
}

/// Splits a hex digest into the range prefix and the locally matched suffix.
///
/// Panics if `hex` is shorter than [`PREFIX_LEN`].
#[inline]
pub fn split_hash(hex: &str) -> (&str, &str) {
    hex.split_at(PREFIX_LEN)
}
