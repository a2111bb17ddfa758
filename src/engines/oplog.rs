//! Chronological operation trace shared by the engines.
//!
//! Entries are plain human-readable lines meant for replay and display.
//! They never drive control flow.

use serde::{Deserialize, Serialize};

/// Append-only list of trace lines, cleared only on request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OperationLog {
    entries: Vec<String>,
}

impl OperationLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one entry
    #[inline]
    pub fn push(&mut self, entry: impl Into<String>) {
        let entry = entry.into();
        log::trace!("{}", entry);
        self.entries.push(entry);
    }

    /// All entries, oldest first
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Copy of the entries for callers that keep them past the next mutation
    pub fn snapshot(&self) -> Vec<String> {
        self.entries.clone()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&str> {
        self.entries.last().map(String::as_str)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<'a> IntoIterator for &'a OperationLog {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
