//! Substring search over a list of texts: naive scanning and Knuth-Morris-Pratt.
//!
//! Both algorithms work on Unicode scalar values, so match indices and
//! lengths are char offsets. For any text/pattern pair they report the
//! same matches, overlapping ones included; only the comparison count and
//! the trace differ.
//!
//! Edge cases shared by both:
//! - an empty pattern matches at every position `0..=len(text)` with zero comparisons
//! - a text shorter than the pattern is skipped without comparisons

use super::oplog::OperationLog;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which matcher to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Naive,
    Kmp,
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Naive => write!(f, "naive"),
            Algorithm::Kmp => write!(f, "kmp"),
        }
    }
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "naive" => Ok(Algorithm::Naive),
            "kmp" => Ok(Algorithm::Kmp),
            other => Err(format!("unknown algorithm '{}', expected naive or kmp", other)),
        }
    }
}

/// One occurrence of a pattern in one text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchMatch {
    pub text: String,
    /// Char offset of the first matched character
    pub index: usize,
    pub pattern: String,
    pub match_length: usize,
}

/// Outcome of a search; `lps` is only present for KMP
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubstringSearchResult {
    pub algorithm: Algorithm,
    pub matches: Vec<SearchMatch>,
    pub total_comparisons: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lps: Option<Vec<usize>>,
}

impl SubstringSearchResult {
    /// Match offsets in report order
    pub fn positions(&self) -> Vec<usize> {
        self.matches.iter().map(|m| m.index).collect()
    }
}

/// Failure function for KMP.
///
/// `lps[i]` is the length of the longest proper prefix of `pattern[..=i]`
/// that is also a suffix of it.
pub fn build_lps<T: PartialEq>(pattern: &[T]) -> Vec<usize> {
    let mut lps = vec![0; pattern.len()];
    let mut len = 0;
    let mut i = 1;

    while i < pattern.len() {
        if pattern[i] == pattern[len] {
            len += 1;
            lps[i] = len;
            i += 1;
        } else if len != 0 {
            // Fall back without advancing i
            len = lps[len - 1];
        } else {
            lps[i] = 0;
            i += 1;
        }
    }

    lps
}

/// [`build_lps`] over the chars of `pattern`
pub fn lps_table(pattern: &str) -> Vec<usize> {
    let chars: Vec<char> = pattern.chars().collect();
    build_lps(&chars)
}

/// Ordered collection of immutable texts searched in insertion order.
#[derive(Debug, Clone, Default)]
pub struct PatternMatcher {
    texts: Vec<String>,
    operations: OperationLog,
}

impl PatternMatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_texts<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            texts: texts.into_iter().map(Into::into).collect(),
            operations: OperationLog::new(),
        }
    }

    /// Append a text; duplicates are kept
    pub fn add_text(&mut self, text: impl Into<String>) {
        self.texts.push(text.into());
        log::debug!("substring: {} texts", self.texts.len());
    }

    pub fn texts(&self) -> &[String] {
        &self.texts
    }

    /// Trace of the most recent search
    pub fn operations(&self) -> &OperationLog {
        &self.operations
    }

    /// Drop all texts and the log
    pub fn clear(&mut self) {
        self.texts.clear();
        self.operations.clear();
    }

    pub fn search(&mut self, algorithm: Algorithm, pattern: &str) -> SubstringSearchResult {
        match algorithm {
            Algorithm::Naive => self.naive_search(pattern),
            Algorithm::Kmp => self.kmp_search(pattern),
        }
    }

    /// Check every offset, comparing until the first mismatch.
    ///
    /// Each character comparison counts, the mismatching one included.
    pub fn naive_search(&mut self, pattern: &str) -> SubstringSearchResult {
        self.operations.clear();
        self.operations
            .push(format!("NAIVE SEARCH: Looking for \"{}\"", pattern));

        let pat: Vec<char> = pattern.chars().collect();
        let m = pat.len();
        let mut matches = Vec::new();
        let mut comparisons = 0;

        for (text_idx, text) in self.texts.iter().enumerate() {
            self.operations
                .push(format!("Searching in text {}: \"{}\"", text_idx + 1, text));

            let chars: Vec<char> = text.chars().collect();
            let n = chars.len();
            if n < m {
                self.operations.push("  Skipped: text shorter than pattern");
                continue;
            }

            for i in 0..=n - m {
                let mut j = 0;
                while j < m {
                    comparisons += 1;
                    if chars[i + j] != pat[j] {
                        break;
                    }
                    j += 1;
                }

                if j == m {
                    let found: String = chars[i..i + m].iter().collect();
                    self.operations
                        .push(format!("  FOUND at position {}: \"{}\"", i, found));
                    matches.push(SearchMatch {
                        text: text.clone(),
                        index: i,
                        pattern: pattern.to_string(),
                        match_length: m,
                    });
                }
            }
        }

        self.finish(Algorithm::Naive, pattern, matches, comparisons, None)
    }

    /// KMP scan reusing the failure function on mismatch and after each match,
    /// so overlapping occurrences are reported.
    pub fn kmp_search(&mut self, pattern: &str) -> SubstringSearchResult {
        self.operations.clear();

        let pat: Vec<char> = pattern.chars().collect();
        let m = pat.len();
        let lps = build_lps(&pat);

        self.operations
            .push(format!("KMP SEARCH: Pattern \"{}\"", pattern));
        self.operations.push(format!("LPS Array: {:?}", lps));

        let mut matches = Vec::new();
        let mut comparisons = 0;

        for (text_idx, text) in self.texts.iter().enumerate() {
            self.operations
                .push(format!("Searching in text {}: \"{}\"", text_idx + 1, text));

            let chars: Vec<char> = text.chars().collect();
            let n = chars.len();
            if n < m {
                self.operations.push("  Skipped: text shorter than pattern");
                continue;
            }

            if m == 0 {
                for i in 0..=n {
                    self.operations.push(format!("  FOUND at position {}", i));
                    matches.push(SearchMatch {
                        text: text.clone(),
                        index: i,
                        pattern: String::new(),
                        match_length: 0,
                    });
                }
                continue;
            }

            let (mut i, mut j) = (0, 0);
            while i < n {
                comparisons += 1;

                if chars[i] == pat[j] {
                    self.operations.push(format!(
                        "  Match: text[{}]='{}' = pattern[{}]='{}'",
                        i, chars[i], j, pat[j]
                    ));
                    i += 1;
                    j += 1;

                    if j == m {
                        self.operations
                            .push(format!("  FOUND at position {}", i - j));
                        matches.push(SearchMatch {
                            text: text.clone(),
                            index: i - j,
                            pattern: pattern.to_string(),
                            match_length: m,
                        });
                        j = lps[j - 1];
                    }
                } else {
                    self.operations.push(format!(
                        "  Mismatch: text[{}]='{}' != pattern[{}]='{}'",
                        i, chars[i], j, pat[j]
                    ));
                    if j > 0 {
                        j = lps[j - 1];
                        self.operations
                            .push(format!("  Using LPS: jump to pattern[{}]", j));
                    } else {
                        i += 1;
                    }
                }
            }
        }

        self.finish(Algorithm::Kmp, pattern, matches, comparisons, Some(lps))
    }

    fn finish(
        &mut self,
        algorithm: Algorithm,
        pattern: &str,
        matches: Vec<SearchMatch>,
        total_comparisons: usize,
        lps: Option<Vec<usize>>,
    ) -> SubstringSearchResult {
        self.operations.push(format!(
            "Total matches: {}, Total comparisons: {}",
            matches.len(),
            total_comparisons
        ));
        log::debug!(
            "substring: {} {:?} over {} texts -> {} matches, {} comparisons",
            algorithm,
            pattern,
            self.texts.len(),
            matches.len(),
            total_comparisons
        );

        SubstringSearchResult {
            algorithm,
            matches,
            total_comparisons,
            lps,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lps_known_patterns() {
        assert_eq!(lps_table("aabaab"), vec![0, 1, 0, 1, 2, 3]);
        assert_eq!(lps_table("aaaa"), vec![0, 1, 2, 3]);
        assert_eq!(lps_table("abcd"), vec![0, 0, 0, 0]);
        assert_eq!(lps_table("aabaaab"), vec![0, 1, 0, 1, 2, 2, 3]);
        assert!(lps_table("").is_empty());
    }

    #[test]
    fn test_naive_repeated_pattern() {
        let mut matcher = PatternMatcher::with_texts(["abcabcabc"]);
        let result = matcher.naive_search("abc");

        assert_eq!(result.positions(), vec![0, 3, 6]);
        // 3 full matches of 3 + 4 first-char mismatches
        assert_eq!(result.total_comparisons, 13);
        assert!(result.lps.is_none());
    }

    #[test]
    fn test_kmp_repeated_pattern() {
        let mut matcher = PatternMatcher::with_texts(["abcabcabc"]);
        let result = matcher.kmp_search("abc");

        assert_eq!(result.positions(), vec![0, 3, 6]);
        assert_eq!(result.total_comparisons, 9);
        assert_eq!(result.lps, Some(vec![0, 0, 0]));
    }

    #[test]
    fn test_overlapping_matches() {
        let mut matcher = PatternMatcher::with_texts(["aaaa"]);

        assert_eq!(matcher.naive_search("aa").positions(), vec![0, 1, 2]);
        assert_eq!(matcher.kmp_search("aa").positions(), vec![0, 1, 2]);
    }

    #[test]
    fn test_match_fields() {
        let mut matcher = PatternMatcher::with_texts(["hello world"]);
        let result = matcher.kmp_search("world");

        assert_eq!(
            result.matches,
            vec![SearchMatch {
                text: "hello world".to_string(),
                index: 6,
                pattern: "world".to_string(),
                match_length: 5,
            }]
        );
    }

    #[test]
    fn test_empty_pattern_matches_everywhere() {
        let mut matcher = PatternMatcher::with_texts(["abc"]);

        let naive = matcher.naive_search("");
        let kmp = matcher.kmp_search("");

        assert_eq!(naive.positions(), vec![0, 1, 2, 3]);
        assert_eq!(kmp.positions(), vec![0, 1, 2, 3]);
        assert_eq!(naive.total_comparisons, 0);
        assert_eq!(kmp.total_comparisons, 0);
        assert_eq!(kmp.lps, Some(vec![]));
    }

    #[test]
    fn test_pattern_longer_than_text() {
        let mut matcher = PatternMatcher::with_texts(["ab", "abcd"]);

        let naive = matcher.naive_search("abc");
        assert_eq!(naive.positions(), vec![0]);
        assert_eq!(naive.total_comparisons, 4);

        let kmp = matcher.kmp_search("abc");
        assert_eq!(kmp.positions(), vec![0]);
        assert!(matcher
            .operations()
            .entries()
            .contains(&"  Skipped: text shorter than pattern".to_string()));
    }

    #[test]
    fn test_pattern_equals_text() {
        let mut matcher = PatternMatcher::with_texts(["same"]);
        assert_eq!(matcher.naive_search("same").positions(), vec![0]);
        assert_eq!(matcher.kmp_search("same").positions(), vec![0]);
    }

    #[test]
    fn test_char_offsets() {
        let mut matcher = PatternMatcher::with_texts(["héllo héllo"]);
        assert_eq!(matcher.kmp_search("llo").positions(), vec![2, 8]);
        assert_eq!(matcher.naive_search("llo").positions(), vec![2, 8]);
    }

    #[test]
    fn test_log_resets_per_search() {
        let mut matcher = PatternMatcher::with_texts(["ab"]);
        matcher.naive_search("a");
        matcher.kmp_search("b");

        let entries = matcher.operations().entries();
        assert_eq!(entries[0], "KMP SEARCH: Pattern \"b\"");
        assert_eq!(entries[1], "LPS Array: [0]");
        assert_eq!(
            entries.last().map(String::as_str),
            Some("Total matches: 1, Total comparisons: 2")
        );
    }

    #[test]
    fn test_kmp_trace_uses_lps() {
        let mut matcher = PatternMatcher::with_texts(["aab"]);
        matcher.kmp_search("ab");

        assert!(matcher
            .operations()
            .entries()
            .contains(&"  Using LPS: jump to pattern[0]".to_string()));
    }

    #[test]
    fn test_texts_in_order() {
        let mut matcher = PatternMatcher::new();
        matcher.add_text("one");
        matcher.add_text("two");
        matcher.add_text("one");

        assert_eq!(matcher.texts(), &["one", "two", "one"]);

        let result = matcher.search(Algorithm::Naive, "o");
        let texts: Vec<&str> = result.matches.iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, vec!["one", "two", "one"]);
    }

    #[test]
    fn test_clear() {
        let mut matcher = PatternMatcher::with_texts(["abc"]);
        matcher.naive_search("a");
        matcher.clear();

        assert!(matcher.texts().is_empty());
        assert!(matcher.operations().is_empty());
    }

    #[test]
    fn test_algorithm_parse() {
        assert_eq!("KMP".parse::<Algorithm>(), Ok(Algorithm::Kmp));
        assert_eq!("naive".parse::<Algorithm>(), Ok(Algorithm::Naive));
        assert!("boyer-moore".parse::<Algorithm>().is_err());
        assert_eq!(Algorithm::Kmp.to_string(), "kmp");
    }
}
