//! Targeted edits on solution text.
//!
//! Each helper works line by line and keeps the trailing newline of every
//! line it leaves in place.

/// Replaces the first occurrence of `from` with `to`.
///
/// # Panics
///
/// Panics if `from` does not occur, so a fixture change cannot silently
/// turn a negative test into a positive one.
pub fn replace_first(text: &str, from: &str, to: &str) -> String {
    assert!(text.contains(from), "fixture does not contain {from:?}");
    text.replacen(from, to, 1)
}

/// Removes the line at `index` (0-based).
pub fn drop_line(text: &str, index: usize) -> String {
    text.lines()
        .enumerate()
        .filter(|(i, _)| *i != index)
        .map(|(_, line)| format!("{line}\n"))
        .collect()
}

/// Repeats the line at `index` (0-based) directly after itself.
pub fn duplicate_line(text: &str, index: usize) -> String {
    let mut out = String::new();
    for (i, line) in text.lines().enumerate() {
        out.push_str(line);
        out.push('\n');
        if i == index {
            out.push_str(line);
            out.push('\n');
        }
    }
    out
}

/// Inserts `line` before the line at `index` (0-based).
pub fn insert_line(text: &str, index: usize, line: &str) -> String {
    let mut lines: Vec<&str> = text.lines().collect();
    lines.insert(index.min(lines.len()), line);
    lines.iter().map(|l| format!("{l}\n")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEXT: &str = "a\nb\nc\n";

    #[test]
    fn test_drop_and_duplicate() {
        assert_eq!(drop_line(TEXT, 1), "a\nc\n");
        assert_eq!(duplicate_line(TEXT, 0), "a\na\nb\nc\n");
        assert_eq!(insert_line(TEXT, 3, "z"), "a\nb\nc\nz\n");
    }

    #[test]
    #[should_panic(expected = "fixture does not contain")]
    fn test_replace_first_requires_match() {
        replace_first(TEXT, "q", "r");
    }
}
