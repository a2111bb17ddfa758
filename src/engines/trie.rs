//! Case-insensitive prefix tree with autocomplete.
//!
//! Nodes live in an arena (`Vec<TrieNode>`) and refer to children by index.
//! The parent owns its children outright; there are no back-references
//! because every walk starts at the root. Child edges are kept twice:
//! an ordered list per node (first-insertion order, which fixes the
//! autocomplete order) and an `FxHashMap` keyed by `(parent, char)` for
//! constant-time edge lookup.

use super::oplog::OperationLog;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Index of a node in the arena
pub type NodeId = usize;

/// Root is always the first arena slot
const ROOT: NodeId = 0;

/// Default `max_results` for autocomplete
pub const DEFAULT_AUTOCOMPLETE_LIMIT: usize = 10;

/// Default cap for [`PrefixTree::all_words`]
pub const DEFAULT_INVENTORY_LIMIT: usize = 1000;

#[derive(Debug, Clone, Default)]
struct TrieNode {
    /// `(char, child)` in first-insertion order
    children: Vec<(char, NodeId)>,
    end_of_word: bool,
    /// Original-case word, set only on terminal nodes
    word: Option<String>,
}

/// Outcome of [`PrefixTree::search`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrieSearchResult {
    pub found: bool,
    /// Characters examined, including the one whose edge was missing
    pub steps: usize,
}

#[derive(Debug, Clone)]
pub struct PrefixTree {
    nodes: Vec<TrieNode>,
    edges: FxHashMap<(NodeId, char), NodeId>,
    word_count: usize,
    inventory_limit: usize,
    operations: OperationLog,
}

impl Default for PrefixTree {
    fn default() -> Self {
        Self::new()
    }
}

impl PrefixTree {
    pub fn new() -> Self {
        Self::with_inventory_limit(DEFAULT_INVENTORY_LIMIT)
    }

    /// Create a tree whose [`all_words`](Self::all_words) stops after `limit` words
    pub fn with_inventory_limit(limit: usize) -> Self {
        Self {
            nodes: vec![TrieNode::default()],
            edges: FxHashMap::default(),
            word_count: 0,
            inventory_limit: limit,
            operations: OperationLog::new(),
        }
    }

    /// Insert `word`, creating nodes lazily along its lower-cased path.
    ///
    /// Re-inserting a word only refreshes the stored original-case form.
    pub fn insert(&mut self, word: &str) {
        self.operations.push(format!("INSERT: \"{}\"", word));

        if word.is_empty() {
            self.operations.push("  Ignored empty word");
            return;
        }

        let mut current = ROOT;
        for ch in word.to_lowercase().chars() {
            let existing = self.edges.get(&(current, ch)).copied();
            current = match existing {
                Some(child) => {
                    self.operations
                        .push(format!("  Found existing node for '{}'", ch));
                    child
                }
                None => {
                    let child = self.alloc_child(current, ch);
                    self.operations
                        .push(format!("  Created node for '{}'", ch));
                    child
                }
            };
        }

        let node = &mut self.nodes[current];
        if !node.end_of_word {
            node.end_of_word = true;
            self.word_count += 1;
        }
        node.word = Some(word.to_string());
        self.operations
            .push(format!("  Marked end of word: \"{}\"", word));

        log::debug!(
            "trie: inserted {:?} ({} words, {} nodes)",
            word,
            self.word_count,
            self.nodes.len()
        );
    }

    /// Exact-word lookup. A stored prefix without a terminal mark is not found.
    pub fn search(&mut self, word: &str) -> TrieSearchResult {
        self.operations.push(format!("SEARCH: \"{}\"", word));

        if word.is_empty() {
            self.operations.push("  Empty word is never stored");
            return TrieSearchResult {
                found: false,
                steps: 0,
            };
        }

        let mut current = ROOT;
        let mut steps = 0;

        for ch in word.to_lowercase().chars() {
            steps += 1;
            match self.edges.get(&(current, ch)) {
                Some(&child) => {
                    self.operations
                        .push(format!("  Found '{}' at step {}", ch, steps));
                    current = child;
                }
                None => {
                    self.operations
                        .push(format!("  '{}' not found at step {}", ch, steps));
                    log::debug!("trie: search {:?} missed at step {}", word, steps);
                    return TrieSearchResult {
                        found: false,
                        steps,
                    };
                }
            }
        }

        let found = self.nodes[current].end_of_word;
        self.operations.push(if found {
            "  Complete word found"
        } else {
            "  Prefix found but not complete word"
        });
        log::debug!("trie: search {:?} found={} in {} steps", word, found, steps);

        TrieSearchResult { found, steps }
    }

    /// Up to `max_results` stored words starting with `prefix`, in pre-order
    /// over first-insertion child order.
    pub fn autocomplete(&mut self, prefix: &str, max_results: usize) -> Vec<String> {
        self.operations.push(format!("AUTOCOMPLETE: \"{}\"", prefix));

        let Some(start) = self.find_node(prefix) else {
            self.operations
                .push(format!("  Prefix \"{}\" not found", prefix));
            return Vec::new();
        };

        let results = self.collect_words(start, max_results);
        self.operations
            .push(format!("  Found {} suggestions", results.len()));
        log::debug!(
            "trie: autocomplete {:?} -> {} of max {}",
            prefix,
            results.len(),
            max_results
        );
        results
    }

    /// Every stored word, capped at the inventory limit. Not logged.
    pub fn all_words(&self) -> Vec<String> {
        self.collect_words(ROOT, self.inventory_limit)
    }

    /// Whether some stored word starts with `prefix` (without logging)
    pub fn contains_prefix(&self, prefix: &str) -> bool {
        self.find_node(prefix).is_some()
    }

    /// Number of distinct stored words
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// Number of nodes, root included
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn operations(&self) -> &OperationLog {
        &self.operations
    }

    /// Discard the whole tree and the log
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.nodes.push(TrieNode::default());
        self.edges.clear();
        self.word_count = 0;
        self.operations.clear();
    }

    fn alloc_child(&mut self, parent: NodeId, ch: char) -> NodeId {
        let child = self.nodes.len();
        self.nodes.push(TrieNode::default());
        self.nodes[parent].children.push((ch, child));
        self.edges.insert((parent, ch), child);
        child
    }

    fn find_node(&self, prefix: &str) -> Option<NodeId> {
        prefix
            .to_lowercase()
            .chars()
            .try_fold(ROOT, |node, ch| self.edges.get(&(node, ch)).copied())
    }

    /// Depth-first pre-order collection, stopping once `max` words are held.
    fn collect_words(&self, start: NodeId, max: usize) -> Vec<String> {
        let mut results = Vec::new();
        let mut stack = vec![start];

        while let Some(id) = stack.pop() {
            if results.len() >= max {
                break;
            }
            let node = &self.nodes[id];
            if node.end_of_word {
                if let Some(word) = &node.word {
                    results.push(word.clone());
                }
            }
            // Reversed so the first-inserted child is visited first
            stack.extend(node.children.iter().rev().map(|&(_, child)| child));
        }

        results
    }
}
