//! Exact-match key/value store.
//!
//! Lookups delegate to an `AHashMap`; the engine models the average O(1)
//! case and reports a constant single step per search. No bucket or
//! collision behavior is simulated.

use super::oplog::OperationLog;
use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// Outcome of [`ExactMatchStore::search`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupResult {
    pub found: bool,
    pub value: Option<String>,
    /// Always 1
    pub steps: usize,
}

/// String-keyed store with a log of every insert and search.
#[derive(Debug, Clone, Default)]
pub struct ExactMatchStore {
    table: AHashMap<String, String>,
    operations: OperationLog,
}

impl ExactMatchStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite `key`
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        self.operations
            .push(format!("INSERT: {} -> {}", key, value));
        let replaced = self.table.insert(key, value).is_some();
        log::debug!(
            "store: insert (replaced: {}), {} keys",
            replaced,
            self.table.len()
        );
    }

    /// Look up `key`, logging the search and its verdict
    pub fn search(&mut self, key: &str) -> LookupResult {
        self.operations
            .push(format!("SEARCH: Looking for \"{}\"", key));

        let value = self.table.get(key).cloned();
        match &value {
            Some(v) => self
                .operations
                .push(format!("FOUND: \"{}\" -> {}", key, v)),
            None => self.operations.push(format!("NOT FOUND: \"{}\"", key)),
        }
        log::debug!("store: search {:?} found={}", key, value.is_some());

        LookupResult {
            found: value.is_some(),
            value,
            steps: 1,
        }
    }

    /// Read without touching the log
    pub fn get(&self, key: &str) -> Option<&str> {
        self.table.get(key).map(String::as_str)
    }

    /// All pairs sorted by key
    pub fn entries(&self) -> Vec<(&str, &str)> {
        let mut entries: Vec<(&str, &str)> = self
            .table
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries
    }

    pub fn operations(&self) -> &OperationLog {
        &self.operations
    }

    /// Number of distinct keys
    pub fn size(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Drop every entry and the log
    pub fn clear(&mut self) {
        self.table.clear();
        self.operations.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_search() {
        let mut store = ExactMatchStore::new();
        store.insert("apple", "red");

        let result = store.search("apple");
        assert!(result.found);
        assert_eq!(result.value.as_deref(), Some("red"));
        assert_eq!(result.steps, 1);
    }

    #[test]
    fn test_missing_key_is_not_an_error() {
        let mut store = ExactMatchStore::new();
        let result = store.search("ghost");

        assert!(!result.found);
        assert_eq!(result.value, None);
        assert_eq!(result.steps, 1);
    }

    #[test]
    fn test_overwrite_keeps_size() {
        let mut store = ExactMatchStore::new();
        store.insert("k", "v1");
        store.insert("k", "v2");

        assert_eq!(store.size(), 1);
        assert_eq!(store.search("k").value.as_deref(), Some("v2"));
    }

    #[test]
    fn test_log_entries() {
        let mut store = ExactMatchStore::new();
        store.insert("apple", "red");
        store.search("apple");
        store.search("pear");

        assert_eq!(
            store.operations().entries(),
            &[
                "INSERT: apple -> red".to_string(),
                "SEARCH: Looking for \"apple\"".to_string(),
                "FOUND: \"apple\" -> red".to_string(),
                "SEARCH: Looking for \"pear\"".to_string(),
                "NOT FOUND: \"pear\"".to_string(),
            ]
        );
    }

    #[test]
    fn test_get_does_not_log() {
        let mut store = ExactMatchStore::new();
        store.insert("a", "1");
        assert_eq!(store.get("a"), Some("1"));
        assert_eq!(store.operations().len(), 1);
    }

    #[test]
    fn test_entries_sorted() {
        let mut store = ExactMatchStore::new();
        store.insert("b", "2");
        store.insert("a", "1");
        assert_eq!(store.entries(), vec![("a", "1"), ("b", "2")]);
    }

    #[test]
    fn test_clear() {
        let mut store = ExactMatchStore::new();
        store.insert("a", "1");
        store.clear();

        assert_eq!(store.size(), 0);
        assert!(store.operations().is_empty());
        assert!(!store.search("a").found);
    }
}
