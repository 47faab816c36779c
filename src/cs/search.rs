pub mod rabin_karp;

pub use rabin_karp::{search, search_with_report, Collision, SearchReport};
