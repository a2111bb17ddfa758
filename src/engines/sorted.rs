//! Sorted integer sequence with a traced binary search.
//!
//! Every probe of [`SortedSequence::search`] is recorded as a [`SearchStep`]
//! holding the interval *before* the move, so callers can replay how the
//! window narrowed.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// One probe of a binary search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStep {
    /// Left bound of the interval (inclusive)
    pub left: usize,
    /// Right bound of the interval (inclusive)
    pub right: usize,
    /// Probed index, `floor((left + right) / 2)`
    pub mid: usize,
    /// Human-readable comparison, e.g. `array[2] = 5 vs target 9 -> 5 < 9, search right half`
    pub comparison: String,
    /// Set on the terminal probe of a successful search
    #[serde(default)]
    pub found: bool,
}

/// Outcome of [`SortedSequence::search`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BinarySearchResult {
    pub found: bool,
    /// Index of the matching element
    pub index: Option<usize>,
    /// Every probe, in order
    pub steps: Vec<SearchStep>,
}

/// Integer sequence kept in non-decreasing order after every mutation.
#[derive(Debug, Clone, Default)]
pub struct SortedSequence {
    values: Vec<i64>,
    /// Trace of the most recent search
    steps: Vec<SearchStep>,
}

impl SortedSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from arbitrary values; they are sorted on construction
    pub fn from_values(values: impl IntoIterator<Item = i64>) -> Self {
        let mut values: Vec<i64> = values.into_iter().collect();
        values.sort_unstable();
        Self {
            values,
            steps: Vec::new(),
        }
    }

    /// Insert a value at its upper-bound position. Duplicates are kept.
    pub fn insert(&mut self, value: i64) {
        let pos = self.values.partition_point(|&v| v <= value);
        self.values.insert(pos, value);
        log::debug!("sorted: inserted {} at index {}", value, pos);
    }

    /// Iterative binary search over `[0, len - 1]`.
    ///
    /// The step list is reset at the start of every call.
    pub fn search(&mut self, target: i64) -> BinarySearchResult {
        self.steps.clear();

        let mut left = 0usize;
        // One past the inclusive right bound, so an empty interval needs no sign
        let mut end = self.values.len();
        let mut index = None;

        while left < end {
            let right = end - 1;
            let mid = left + (right - left) / 2;
            let mid_value = self.values[mid];

            let mut step = SearchStep {
                left,
                right,
                mid,
                comparison: format!("array[{}] = {} vs target {}", mid, mid_value, target),
                found: false,
            };

            match mid_value.cmp(&target) {
                Ordering::Equal => {
                    step.found = true;
                    self.steps.push(step);
                    index = Some(mid);
                    break;
                }
                Ordering::Less => {
                    step.comparison += &format!(
                        " -> {} < {}, search right half",
                        mid_value, target
                    );
                    left = mid + 1;
                }
                Ordering::Greater => {
                    step.comparison += &format!(
                        " -> {} > {}, search left half",
                        mid_value, target
                    );
                    end = mid;
                }
            }

            self.steps.push(step);
        }

        log::debug!(
            "sorted: search {} -> {:?} in {} steps over {} values",
            target,
            index,
            self.steps.len(),
            self.values.len()
        );

        BinarySearchResult {
            found: index.is_some(),
            index,
            steps: self.steps.clone(),
        }
    }

    /// Trace of the most recent search (empty after `clear`)
    pub fn last_steps(&self) -> &[SearchStep] {
        &self.steps
    }

    /// The sequence in ascending order
    pub fn values(&self) -> &[i64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Empty the sequence and discard the trace
    pub fn clear(&mut self) {
        self.values.clear();
        self.steps.clear();
    }
}
