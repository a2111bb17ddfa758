//! # searchlab - Classic Search Engines With Traces
//!
//! Four independent in-memory search engines. Each one records what it did
//! so a caller can replay or visualize it:
//!
//! 1. **SortedSequence** - ascending integers, binary search with one
//!    [`SearchStep`](engines::SearchStep) per probe
//! 2. **ExactMatchStore** - string key/value lookup with an operation log
//! 3. **PrefixTree** - case-insensitive trie with prefix-bounded autocomplete
//! 4. **PatternMatcher** - naive and Knuth-Morris-Pratt substring search over
//!    a list of texts, reporting matches and comparison counts
//!
//! ## Architecture
//!
//! - [`engines`] - the four engines and their result/trace types
//! - [`output`] - colored terminal rendering of results and traces
//! - [`utils`] - config file handling and sample seed data
//!
//! ## Quick Start
//!
//! ```
//! use searchlab::engines::{PatternMatcher, PrefixTree, SortedSequence};
//!
//! let mut seq = SortedSequence::from_values([1, 3, 5, 7, 9]);
//! let result = seq.search(9);
//! assert_eq!(result.index, Some(4));
//! assert_eq!(result.steps.len(), 3);
//!
//! let mut trie = PrefixTree::new();
//! trie.insert("app");
//! trie.insert("apple");
//! assert_eq!(trie.autocomplete("ap", 10), vec!["app", "apple"]);
//!
//! let mut matcher = PatternMatcher::with_texts(["aaaa"]);
//! assert_eq!(matcher.kmp_search("aa").positions(), vec![0, 1, 2]);
//! ```
//!
//! Engines are plain owned values with no interior locking. Hold one per
//! session and wrap it in a mutex if it must be shared.

pub mod engines;
pub mod output;
pub mod utils;

pub use engines::{ExactMatchStore, PatternMatcher, PrefixTree, SortedSequence};
pub use utils::AppConfig;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
