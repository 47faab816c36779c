//! Polynomial hashing primitives used by the substring search.
//!
//! - [`params`]: validated `(modulus, base)` pairs and their builder
//! - [`polynomial_rolling`]: the base polynomial hash, one-shot and streaming
//! - [`window`]: hashes of every fixed-length window of a text in linear time

pub mod params;
pub mod polynomial_rolling;
pub mod window;

pub use params::{HashParams, HashParamsBuilder, DEFAULT_MODULUS};
pub use polynomial_rolling::{poly_hash, PolyHasher};
pub use window::window_hashes;
