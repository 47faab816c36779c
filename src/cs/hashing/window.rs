//! # Window Hashes
//!
//! Computes the polynomial hash of every window of a fixed length in a text, in `O(n)`.
//!
//! Only the last window is hashed directly. Every other window is derived from its right
//! neighbour: with `H(i)` the hash of `text[i..i+m]` and `c` the character codes,
//!
//! ```text
//!   H(i) = ( x * H(i+1) + c[i] - c[i+m] * x^m ) mod p
//! ```
//!
//! Multiplying by `x` shifts every term of the neighbour up one power, `c[i]` enters at
//! power 0 and `c[i+m]`, now at power `m`, drops out. Each value depends on its successor,
//! so the table is filled from the end.
//!
//! ```rust
//! use rksearch::hashing::{poly_hash, window_hashes, HashParams};
//!
//! let params = HashParams::new(4241, 42).unwrap();
//! let hashes = window_hashes("andrew", 3, &params).unwrap();
//! assert_eq!(hashes.len(), 4);
//! assert_eq!(hashes[3], poly_hash("rew", &params));
//! ```

use log::debug;

use super::params::HashParams;
use super::polynomial_rolling::{add_mod, hash_codes, mul_mod, poly_hash, pow_mod, sub_mod};
use crate::error::{Error, Result};

/// Hashes every window of `window_len` characters in `text`.
///
/// # Returns
/// * `Ok(hashes)` - `len(text) - window_len + 1` values, `hashes[i]` being the hash of the
///   window starting at character `i`
/// * `Err(Error::EmptyWindow)` - if `window_len` is 0
/// * `Err(Error::WindowTooLong)` - if `window_len` exceeds the number of characters in `text`
///
/// # Complexity
/// * Time: O(n + log m)
/// * Space: O(n)
pub fn window_hashes(text: &str, window_len: usize, params: &HashParams) -> Result<Vec<u64>> {
    let text_len = text.chars().count();
    if window_len == 0 {
        return Err(Error::EmptyWindow {
            window_len,
            text_len,
        });
    }
    if window_len > text_len {
        return Err(Error::WindowTooLong {
            window_len,
            text_len,
        });
    }
    if window_len == text_len {
        return Ok(vec![poly_hash(text, params)]);
    }

    let codes: Vec<u64> = text.chars().map(|c| c as u64).collect();
    Ok(rolling_hashes(&codes, window_len, params))
}

/// Window hashes over precomputed character codes.
///
/// Requires `1 <= window_len <= codes.len()`.
pub(crate) fn rolling_hashes(codes: &[u64], window_len: usize, params: &HashParams) -> Vec<u64> {
    let p = params.modulus();
    let x = params.base();
    let count = codes.len() - window_len + 1;
    debug!(
        "hashing {} windows of length {} (modulus {})",
        count, window_len, p
    );

    let x_pow = pow_mod(x, window_len as u64, p);
    let mut hashes = vec![0u64; count];
    hashes[count - 1] = hash_codes(codes[count - 1..].iter().copied(), params);

    for i in (0..count - 1).rev() {
        let shifted = mul_mod(x, hashes[i + 1], p);
        let entering = codes[i] % p;
        let leaving = mul_mod(codes[i + window_len], x_pow, p);
        hashes[i] = sub_mod(add_mod(shifted, entering, p), leaving, p);
    }

    hashes
}
