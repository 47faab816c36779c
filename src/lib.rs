pub mod cs;
pub mod error;

pub use cs::{hashing, search};
pub use error::{Error, Result};
