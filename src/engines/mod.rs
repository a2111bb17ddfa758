//! The four search engines.
//!
//! Each engine is an explicitly owned, single-threaded in-memory value.
//! Callers that share one across threads must serialize access themselves
//! (e.g. behind a `Mutex`).
//!
//! - [`sorted`] - sorted integer sequence with traced binary search
//! - [`exact`] - exact-match key/value store
//! - [`trie`] - case-insensitive prefix tree with autocomplete
//! - [`substring`] - naive and KMP substring search over a text list

pub mod exact;
pub mod oplog;
pub mod sorted;
pub mod substring;
pub mod trie;

pub use exact::{ExactMatchStore, LookupResult};
pub use oplog::OperationLog;
pub use sorted::{BinarySearchResult, SearchStep, SortedSequence};
pub use substring::{
    build_lps, lps_table, Algorithm, PatternMatcher, SearchMatch, SubstringSearchResult,
};
pub use trie::{
    PrefixTree, TrieSearchResult, DEFAULT_AUTOCOMPLETE_LIMIT, DEFAULT_INVENTORY_LIMIT,
};
