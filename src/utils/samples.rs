//! Seed data used to pre-populate each engine.

use crate::engines::{ExactMatchStore, PatternMatcher, PrefixTree, SortedSequence};

pub const SAMPLE_VALUES: [i64; 17] = [
    1, 3, 5, 7, 9, 11, 13, 15, 17, 19, 23, 29, 31, 37, 41, 43, 47,
];

pub const SAMPLE_ENTRIES: [(&str, &str); 5] = [
    ("apple", "사과"),
    ("banana", "바나나"),
    ("cherry", "체리"),
    ("date", "대추야자"),
    ("elderberry", "엘더베리"),
];

pub const SAMPLE_WORDS: [&str; 26] = [
    "apple",
    "application",
    "apply",
    "appreciate",
    "approach",
    "banana",
    "band",
    "bank",
    "banner",
    "base",
    "cat",
    "car",
    "card",
    "care",
    "career",
    "careful",
    "dog",
    "door",
    "down",
    "download",
    "development",
    "elephant",
    "email",
    "example",
    "excellent",
    "experience",
];

pub const SAMPLE_TEXTS: [&str; 5] = [
    "Hello world, this is a wonderful world!",
    "JavaScript programming is fun and rewarding",
    "Data structures and algorithms are important",
    "The quick brown fox jumps over the lazy dog",
    "Machine learning and artificial intelligence",
];

pub fn sample_sequence() -> SortedSequence {
    SortedSequence::from_values(SAMPLE_VALUES)
}

pub fn sample_store() -> ExactMatchStore {
    let mut store = ExactMatchStore::new();
    for (key, value) in SAMPLE_ENTRIES {
        store.insert(key, value);
    }
    store
}

/// Sample words inserted into `trie` (which keeps its inventory limit)
pub fn seed_trie(trie: &mut PrefixTree) {
    for word in SAMPLE_WORDS {
        trie.insert(word);
    }
}

pub fn sample_matcher() -> PatternMatcher {
    PatternMatcher::with_texts(SAMPLE_TEXTS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_values_are_sorted() {
        assert!(SAMPLE_VALUES.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(sample_sequence().len(), SAMPLE_VALUES.len());
    }

    #[test]
    fn test_sample_store() {
        let mut store = sample_store();
        assert_eq!(store.size(), 5);
        assert_eq!(store.search("cherry").value.as_deref(), Some("체리"));
    }

    #[test]
    fn test_seed_trie() {
        let mut trie = PrefixTree::new();
        seed_trie(&mut trie);

        assert_eq!(trie.word_count(), 26);
        assert_eq!(
            trie.autocomplete("car", 10),
            vec!["car", "card", "care", "career", "careful"]
        );
    }

    #[test]
    fn test_sample_matcher() {
        let mut matcher = sample_matcher();
        let result = matcher.kmp_search("world");
        assert_eq!(result.positions(), vec![6, 33]);
    }
}
