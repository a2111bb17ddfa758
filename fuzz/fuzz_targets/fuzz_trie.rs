#![no_main]

use libfuzzer_sys::fuzz_target;
use searchlab::engines::PrefixTree;

fuzz_target!(|words: Vec<String>| {
    // Every inserted non-empty word must be found again, whatever its case mapping
    let mut trie = PrefixTree::new();
    for w in &words {
        trie.insert(w);
    }
    for w in words.iter().filter(|w| !w.is_empty()) {
        assert!(trie.search(w).found);
        let _ = trie.autocomplete(w, 5);
    }
});
