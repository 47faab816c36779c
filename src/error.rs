use thiserror::Error;

/// Errors raised while validating hash parameters or window lengths.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The modulus is outside `[2, 2^63]`.
    #[error("modulus must lie in [2, 2^63], got {modulus}")]
    InvalidModulus { modulus: u64 },

    /// The base is not reduced modulo the modulus.
    #[error("base {base} must lie in [0, {modulus})")]
    InvalidBase { base: u64, modulus: u64 },

    /// A window of zero characters was requested.
    #[error("window length must be positive, got {window_len} (text length {text_len})")]
    EmptyWindow { window_len: usize, text_len: usize },

    /// The window does not fit in the text.
    #[error("window length {window_len} exceeds text length {text_len}")]
    WindowTooLong { window_len: usize, text_len: usize },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
