//! # Rabin-Karp Substring Search
//!
//! Finds every starting offset of a pattern in a text by comparing the pattern's polynomial
//! hash against the precomputed hash of every window of the same length. A hash match is
//! only a candidate: it is confirmed by comparing the characters, so a collision can cost
//! time but never produce a wrong answer.
//!
//! Offsets are counted in characters (Unicode scalar values), not bytes.
//!
//! ```rust
//! use rksearch::hashing::HashParams;
//! use rksearch::search::search;
//!
//! let params = HashParams::new(4241, 41).unwrap();
//! assert_eq!(search("abcabcabc", "abc", &params), vec![0, 3, 6]);
//! assert!(search("andrew is awesome", "not", &params).is_empty());
//! ```
//!
//! Collisions are reported through `log` and, when the caller wants them, as data:
//!
//! ```rust
//! use rksearch::hashing::HashParams;
//! use rksearch::search::search_with_report;
//!
//! let params = HashParams::new(2, 1).unwrap();
//! let report = search_with_report("abcb", "ab", &params);
//! assert_eq!(report.matches, vec![0]);
//! assert!(report.has_collisions());
//! ```

use log::{debug, warn};

use crate::hashing::params::HashParams;
use crate::hashing::polynomial_rolling::hash_codes;
use crate::hashing::window::rolling_hashes;

/// A window whose hash equalled the pattern's but whose characters did not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Collision {
    /// Starting offset of the colliding window.
    pub offset: usize,
    /// Modulus in use when the collision happened.
    pub modulus: u64,
}

/// Matches found by a search, plus any collisions met along the way.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchReport {
    /// Starting offsets of every occurrence, ascending.
    pub matches: Vec<usize>,
    /// Hash matches rejected by verification, ascending by offset.
    pub collisions: Vec<Collision>,
}

impl SearchReport {
    pub fn has_collisions(&self) -> bool {
        !self.collisions.is_empty()
    }
}

/// Returns the starting offset of every occurrence of `pattern` in `text`.
///
/// Occurrences may overlap. An empty pattern or one longer than the text yields nothing.
///
/// # Complexity
/// * Time: O(n + m) expected, plus O(m) per collision
/// * Space: O(n + m)
pub fn search(text: &str, pattern: &str, params: &HashParams) -> Vec<usize> {
    search_with_report(text, pattern, params).matches
}

/// Like [`search`], but also returns the hash collisions that verification rejected.
pub fn search_with_report(text: &str, pattern: &str, params: &HashParams) -> SearchReport {
    let text_codes: Vec<u64> = text.chars().map(|c| c as u64).collect();
    let pattern_codes: Vec<u64> = pattern.chars().map(|c| c as u64).collect();
    let n = text_codes.len();
    let m = pattern_codes.len();

    if m == 0 || m > n {
        debug!("pattern length {} cannot occur in text length {}", m, n);
        return SearchReport::default();
    }
    if m == 1 {
        let target = pattern_codes[0];
        return SearchReport {
            matches: (0..n).filter(|&i| text_codes[i] == target).collect(),
            collisions: Vec::new(),
        };
    }
    if m == n {
        let matches = if text_codes == pattern_codes {
            vec![0]
        } else {
            Vec::new()
        };
        return SearchReport {
            matches,
            collisions: Vec::new(),
        };
    }

    let pattern_hash = hash_codes(pattern_codes.iter().copied(), params);
    let hashes = rolling_hashes(&text_codes, m, params);

    let mut report = SearchReport::default();
    for (i, &h) in hashes.iter().enumerate() {
        if h != pattern_hash {
            continue;
        }
        if text_codes[i..i + m] == pattern_codes[..] {
            report.matches.push(i);
        } else {
            warn!(
                "hash collision at offset {}; use a larger modulus than {}",
                i,
                params.modulus()
            );
            report.collisions.push(Collision {
                offset: i,
                modulus: params.modulus(),
            });
        }
    }

    report
}
