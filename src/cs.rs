pub mod hashing;
pub mod search;

// Re-export all modules
pub use hashing::*;
pub use search::*;
