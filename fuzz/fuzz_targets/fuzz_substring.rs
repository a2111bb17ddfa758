#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use searchlab::engines::PatternMatcher;

#[derive(Arbitrary, Debug)]
struct Input<'a> {
    texts: Vec<&'a str>,
    pattern: &'a str,
}

fuzz_target!(|input: Input<'_>| {
    // Both matchers must report identical matches for any input
    let mut matcher = PatternMatcher::with_texts(input.texts);
    let naive = matcher.naive_search(input.pattern);
    let kmp = matcher.kmp_search(input.pattern);
    assert_eq!(naive.matches, kmp.matches);
});
