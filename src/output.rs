//! Terminal rendering of engine results and traces

use crate::engines::{
    BinarySearchResult, LookupResult, OperationLog, SubstringSearchResult, TrieSearchResult,
};
use crate::utils::color::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};
use std::io::{self, Write};

/// Stdout writer honoring the color setting
pub fn stdout(color: bool) -> StandardStream {
    let choice = if color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    StandardStream::stdout(choice)
}

/// Print a section heading
pub fn print_heading<W: WriteColor>(out: &mut W, title: &str) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)).set_bold(true))?;
    writeln!(out, "{}", title)?;
    out.reset()
}

fn print_verdict<W: WriteColor>(out: &mut W, found: bool, detail: &str) -> io::Result<()> {
    let (color, label) = if found {
        (Color::Green, "FOUND")
    } else {
        (Color::Red, "NOT FOUND")
    };
    out.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true))?;
    write!(out, "{}", label)?;
    out.reset()?;
    writeln!(out, " {}", detail)
}

/// Print the probes of a binary search followed by the array with the hit marked
pub fn print_binary_search<W: WriteColor>(
    out: &mut W,
    values: &[i64],
    target: i64,
    result: &BinarySearchResult,
) -> io::Result<()> {
    print_heading(out, &format!("Binary search for {}", target))?;

    for (n, step) in result.steps.iter().enumerate() {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
        write!(out, "{:>3}", n + 1)?;
        out.reset()?;
        write!(out, "  [{}..{}] mid={}  ", step.left, step.right, step.mid)?;
        if step.found {
            out.set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true))?;
            writeln!(out, "{}", step.comparison)?;
            out.reset()?;
        } else {
            writeln!(out, "{}", step.comparison)?;
        }
    }

    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            write!(out, " ")?;
        }
        if result.index == Some(i) {
            out.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
            write!(out, "[{}]", value)?;
            out.reset()?;
        } else {
            write!(out, "{}", value)?;
        }
    }
    writeln!(out)?;

    let detail = match result.index {
        Some(index) => format!("at index {} in {} steps", index, result.steps.len()),
        None => format!("after {} steps", result.steps.len()),
    };
    print_verdict(out, result.found, &detail)
}

/// Print an exact-match lookup
pub fn print_lookup<W: WriteColor>(out: &mut W, key: &str, result: &LookupResult) -> io::Result<()> {
    print_heading(out, &format!("Lookup \"{}\"", key))?;
    let detail = match &result.value {
        Some(value) => format!("{} -> {} ({} step)", key, value, result.steps),
        None => format!("{} ({} step)", key, result.steps),
    };
    print_verdict(out, result.found, &detail)
}

/// Print key/value pairs, one per line
pub fn print_entries<W: WriteColor>(out: &mut W, entries: &[(&str, &str)]) -> io::Result<()> {
    print_heading(out, &format!("Entries ({})", entries.len()))?;
    for (key, value) in entries {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)))?;
        write!(out, "  {}", key)?;
        out.reset()?;
        writeln!(out, " -> {}", value)?;
    }
    Ok(())
}

/// Print a trie word lookup
pub fn print_trie_search<W: WriteColor>(
    out: &mut W,
    word: &str,
    result: &TrieSearchResult,
) -> io::Result<()> {
    print_heading(out, &format!("Trie search \"{}\"", word))?;
    print_verdict(out, result.found, &format!("{} in {} steps", word, result.steps))
}

/// Print a word list (suggestions or inventory)
pub fn print_words<W: WriteColor>(out: &mut W, title: &str, words: &[String]) -> io::Result<()> {
    print_heading(out, &format!("{} ({})", title, words.len()))?;
    for word in words {
        writeln!(out, "  {}", word)?;
    }
    Ok(())
}

/// Print substring matches with the matched span highlighted
pub fn print_substring_result<W: WriteColor>(
    out: &mut W,
    pattern: &str,
    result: &SubstringSearchResult,
) -> io::Result<()> {
    print_heading(
        out,
        &format!("{} search for \"{}\"", result.algorithm, pattern),
    )?;

    if let Some(lps) = &result.lps {
        writeln!(out, "LPS: {:?}", lps)?;
    }

    for m in &result.matches {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
        write!(out, "{:>4}", m.index)?;
        out.reset()?;
        write!(out, ":")?;
        print_highlighted(out, &m.text, m.index, m.index + m.match_length)?;
    }

    writeln!(
        out,
        "{} matches, {} comparisons",
        result.matches.len(),
        result.total_comparisons
    )
}

/// Print `text` with chars `start..end` highlighted
fn print_highlighted<W: WriteColor>(
    out: &mut W,
    text: &str,
    start: usize,
    end: usize,
) -> io::Result<()> {
    // Char offsets to byte offsets, clamped to the text
    let byte_at = |pos: usize| {
        text.char_indices()
            .nth(pos)
            .map(|(b, _)| b)
            .unwrap_or(text.len())
    };
    let safe_start = byte_at(start);
    let safe_end = byte_at(end).max(safe_start);

    write!(out, "{}", &text[..safe_start])?;

    if safe_end > safe_start {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
        write!(out, "{}", &text[safe_start..safe_end])?;
        out.reset()?;
    }

    writeln!(out, "{}", &text[safe_end..])
}

/// Print an operation trace
pub fn print_operations<W: WriteColor>(out: &mut W, log: &OperationLog) -> io::Result<()> {
    if log.is_empty() {
        return Ok(());
    }

    print_heading(out, "Operations")?;
    for entry in log {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)))?;
        write!(out, "  |")?;
        out.reset()?;
        writeln!(out, " {}", entry)?;
    }
    Ok(())
}

/// Write `value` as pretty JSON
pub fn print_json<W: Write, T: serde::Serialize>(out: &mut W, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::{PatternMatcher, SortedSequence};
    use crate::utils::color::NoColor;

    fn render(f: impl FnOnce(&mut NoColor<Vec<u8>>) -> io::Result<()>) -> String {
        let mut out = NoColor::new(Vec::new());
        f(&mut out).unwrap();
        String::from_utf8(out.into_inner()).unwrap()
    }

    #[test]
    fn test_binary_search_rendering() {
        let mut seq = SortedSequence::from_values([1, 3, 5, 7, 9]);
        let result = seq.search(9);

        let text = render(|out| print_binary_search(out, seq.values(), 9, &result));
        assert!(text.contains("  1  [0..4] mid=2  array[2] = 5 vs target 9"));
        assert!(text.contains("1 3 5 7 [9]"));
        assert!(text.ends_with("FOUND at index 4 in 3 steps\n"));
    }

    #[test]
    fn test_substring_rendering_highlights_char_span() {
        let mut matcher = PatternMatcher::with_texts(["héllo"]);
        let result = matcher.kmp_search("llo");

        let text = render(|out| print_substring_result(out, "llo", &result));
        assert!(text.starts_with("kmp search for \"llo\"\n"));
        assert!(text.contains("LPS: [0, 1, 0]"));
        assert!(text.contains("   2:héllo\n"));
        assert!(text.ends_with("1 matches, 5 comparisons\n"));
    }

    #[test]
    fn test_operations_rendering() {
        let mut log = OperationLog::new();
        log.push("INSERT: a -> b");

        let text = render(|out| print_operations(out, &log));
        assert_eq!(text, "Operations\n  | INSERT: a -> b\n");
    }

    #[test]
    fn test_empty_operations_print_nothing() {
        let text = render(|out| print_operations(out, &OperationLog::new()));
        assert!(text.is_empty());
    }

    #[test]
    fn test_json() {
        let mut out = Vec::new();
        print_json(&mut out, &vec![1, 2]).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "[\n  1,\n  2\n]\n");
    }
}
