//! # Polynomial Hash
//!
//! The hash of a string with character codes `c_0 .. c_{L-1}` is
//!
//! ```text
//!   H(s) = ( c_0 + c_1 * x + c_2 * x^2 + ... + c_{L-1} * x^{L-1} ) mod p
//! ```
//!
//! where the codes are Unicode scalar values. Powers of `x` are carried as a running
//! product reduced mod `p`, and products go through 128-bit intermediates, so hashing
//! is linear in the string length and never grows an integer past `u128`.
//!
//! **Note**: This is **not** cryptographically secure. It is meant for substring search
//! and fingerprinting.
//!
//! ```rust
//! use rksearch::hashing::{poly_hash, HashParams, PolyHasher};
//!
//! let params = HashParams::new(4241, 42).unwrap();
//! assert_eq!(poly_hash("abc", &params), 727);
//!
//! let mut hasher = PolyHasher::new(params);
//! hasher.hash_str("ab");
//! hasher.hash_str("c");
//! assert_eq!(hasher.current_hash(), 727);
//! ```

use super::params::HashParams;

/// Hashes a whole string in one shot.
pub fn poly_hash(s: &str, params: &HashParams) -> u64 {
    hash_codes(s.chars().map(|c| c as u64), params)
}

/// Hashes a sequence of character codes.
pub(crate) fn hash_codes<I>(codes: I, params: &HashParams) -> u64
where
    I: IntoIterator<Item = u64>,
{
    let mut hasher = PolyHasher::new(*params);
    for code in codes {
        hasher.update(code);
    }
    hasher.current_hash()
}

/// A streaming polynomial hasher. Each new code is weighted by the next power of the base,
/// so appending never rescales what was already hashed.
#[derive(Debug, Clone)]
pub struct PolyHasher {
    params: HashParams,
    /// The current hash value, always in `[0, modulus)`.
    current_hash: u64,
    /// The number of codes hashed so far.
    current_len: usize,
    /// `base^current_len mod modulus`: the weight of the next code.
    current_power: u64,
}

impl PolyHasher {
    /// Creates an empty hasher. The hash of nothing is 0.
    pub fn new(params: HashParams) -> Self {
        Self {
            params,
            current_hash: 0,
            current_len: 0,
            current_power: 1,
        }
    }

    /// Resets the hasher state to empty.
    pub fn clear(&mut self) {
        self.current_hash = 0;
        self.current_len = 0;
        self.current_power = 1;
    }

    /// Returns the current hash value mod `modulus`.
    pub fn current_hash(&self) -> u64 {
        self.current_hash
    }

    /// Number of codes hashed so far.
    pub fn len(&self) -> usize {
        self.current_len
    }

    pub fn is_empty(&self) -> bool {
        self.current_len == 0
    }

    /// Feeds every character of `s`.
    pub fn hash_str(&mut self, s: &str) {
        for c in s.chars() {
            self.update(c as u64);
        }
    }

    /// Appends a single code at the next exponent.
    pub fn update(&mut self, code: u64) {
        let m = self.params.modulus();
        let term = mul_mod(code, self.current_power, m);
        self.current_hash = add_mod(self.current_hash, term, m);
        self.current_len += 1;
        self.current_power = mul_mod(self.current_power, self.params.base(), m);
    }
}

// internal ops; residues are < m <= 2^63

#[inline]
pub(crate) fn add_mod(a: u64, b: u64, m: u64) -> u64 {
    let s = a + b;
    if s >= m {
        s - m
    } else {
        s
    }
}

#[inline]
pub(crate) fn sub_mod(a: u64, b: u64, m: u64) -> u64 {
    if a >= b {
        a - b
    } else {
        (a + m) - b
    }
}

#[inline]
pub(crate) fn mul_mod(a: u64, b: u64, m: u64) -> u64 {
    ((a as u128 * b as u128) % m as u128) as u64
}

/// `base^exp mod m` by square-and-multiply.
pub(crate) fn pow_mod(base: u64, mut exp: u64, m: u64) -> u64 {
    let mut result = 1 % m;
    let mut square = base % m;
    while exp > 0 {
        if exp & 1 == 1 {
            result = mul_mod(result, square, m);
        }
        square = mul_mod(square, square, m);
        exp >>= 1;
    }
    result
}
