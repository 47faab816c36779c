//! # Hash Parameters
//!
//! A polynomial hash is fully determined by a modulus `p` and a base `x`. This module
//! provides [`HashParams`], a validated `(p, x)` pair, and [`HashParamsBuilder`] for
//! building one with a randomly drawn base.
//!
//! Collision probability is governed by both values: `p` should be a large prime and
//! `x` a random element of `[0, p-1]`. A composite modulus is accepted but logged.
//!
//! ```rust
//! use rksearch::hashing::{HashParams, HashParamsBuilder};
//!
//! let fixed = HashParams::new(4241, 41).unwrap();
//! assert_eq!(fixed.base(), 41);
//!
//! let random = HashParamsBuilder::new().modulus(1_000_000_007).seed(7).build().unwrap();
//! assert!(random.base() < 1_000_000_007);
//! ```

use log::warn;
use num_prime::nt_funcs::is_prime64;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::error::{Error, Result};

/// Default modulus: the Mersenne prime `2^61 - 1`.
pub const DEFAULT_MODULUS: u64 = 0x1FFFFFFFFFFFFFFF;

/// Largest accepted modulus. Two residues below it always sum without overflowing `u64`.
const MAX_MODULUS: u64 = 1 << 63;

/// A validated modulus/base pair for polynomial hashing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashParams {
    modulus: u64,
    base: u64,
}

impl HashParams {
    /// Creates a parameter pair.
    ///
    /// # Errors
    /// * `Error::InvalidModulus` if `modulus` is outside `[2, 2^63]`
    /// * `Error::InvalidBase` if `base >= modulus`
    pub fn new(modulus: u64, base: u64) -> Result<Self> {
        check_modulus(modulus)?;
        if base >= modulus {
            return Err(Error::InvalidBase { base, modulus });
        }
        if !is_prime64(modulus) {
            warn!("modulus {} is not prime; collisions will be more frequent", modulus);
        }
        Ok(Self { modulus, base })
    }

    /// The modulus `p`.
    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    /// The base `x`.
    pub fn base(&self) -> u64 {
        self.base
    }
}

fn check_modulus(modulus: u64) -> Result<()> {
    if (2..=MAX_MODULUS).contains(&modulus) {
        Ok(())
    } else {
        Err(Error::InvalidModulus { modulus })
    }
}

/// A builder for [`HashParams`].
///
/// If no base is given, one is drawn uniformly from `[0, p-1]`, from a seeded RNG when
/// [`seed`](Self::seed) was called and from OS entropy otherwise.
#[derive(Debug, Clone)]
pub struct HashParamsBuilder {
    modulus: u64,
    base: Option<u64>,
    seed: Option<u64>,
}

impl Default for HashParamsBuilder {
    fn default() -> Self {
        Self {
            modulus: DEFAULT_MODULUS,
            base: None,
            seed: None,
        }
    }
}

impl HashParamsBuilder {
    /// Creates a builder using [`DEFAULT_MODULUS`] and a random base.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the modulus `p`.
    pub fn modulus(mut self, modulus: u64) -> Self {
        self.modulus = modulus;
        self
    }

    /// Sets an explicit base `x`, bypassing random generation.
    pub fn base(mut self, base: u64) -> Self {
        self.base = Some(base);
        self
    }

    /// Sets the seed used to draw the base.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration and builds the parameters.
    pub fn build(self) -> Result<HashParams> {
        let base = match self.base {
            Some(base) => base,
            None => {
                // range must be non-empty before sampling
                check_modulus(self.modulus)?;
                let mut rng = match self.seed {
                    Some(s) => StdRng::seed_from_u64(s),
                    None => StdRng::from_entropy(),
                };
                rng.gen_range(0..self.modulus)
            }
        };
        HashParams::new(self.modulus, base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accepts_valid_pair() {
        let params = HashParams::new(4241, 41).unwrap();
        assert_eq!(params.modulus(), 4241);
        assert_eq!(params.base(), 41);
    }

    #[test]
    fn test_new_accepts_zero_base() {
        assert!(HashParams::new(4241, 0).is_ok());
    }

    #[test]
    fn test_new_rejects_small_modulus() {
        assert_eq!(
            HashParams::new(1, 0),
            Err(Error::InvalidModulus { modulus: 1 })
        );
        assert_eq!(
            HashParams::new(0, 0),
            Err(Error::InvalidModulus { modulus: 0 })
        );
    }

    #[test]
    fn test_new_rejects_oversized_modulus() {
        let modulus = (1u64 << 63) + 1;
        assert_eq!(
            HashParams::new(modulus, 3),
            Err(Error::InvalidModulus { modulus })
        );
        // the bound itself is allowed, even though it is composite
        assert!(HashParams::new(1 << 63, 3).is_ok());
    }

    #[test]
    fn test_new_rejects_unreduced_base() {
        assert_eq!(
            HashParams::new(4241, 4241),
            Err(Error::InvalidBase {
                base: 4241,
                modulus: 4241
            })
        );
    }

    #[test]
    fn test_builder_defaults() {
        let params = HashParamsBuilder::new().seed(1).build().unwrap();
        assert_eq!(params.modulus(), DEFAULT_MODULUS);
        assert!(params.base() < DEFAULT_MODULUS);
    }

    #[test]
    fn test_builder_seed_is_deterministic() {
        let a = HashParamsBuilder::new()
            .modulus(1_000_000_007)
            .seed(42)
            .build()
            .unwrap();
        let b = HashParamsBuilder::new()
            .modulus(1_000_000_007)
            .seed(42)
            .build()
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_builder_explicit_base() {
        let params = HashParamsBuilder::new()
            .modulus(4241)
            .base(42)
            .seed(99)
            .build()
            .unwrap();
        assert_eq!(params, HashParams::new(4241, 42).unwrap());
    }

    #[test]
    fn test_builder_propagates_errors() {
        assert!(matches!(
            HashParamsBuilder::new().modulus(1).build(),
            Err(Error::InvalidModulus { .. })
        ));
        assert!(matches!(
            HashParamsBuilder::new().modulus(7).base(7).build(),
            Err(Error::InvalidBase { .. })
        ));
    }
}
