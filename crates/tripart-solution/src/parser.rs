//! Reads solution text back into groups.
//!
//! Parsing is lenient: any line that does not look like a group line is
//! skipped and counted, never reported as an error. Judging the content is
//! the validator's job.

use std::sync::LazyLock;

use regex::Regex;
use tripart_core::{Pair, Triple};

static GROUP_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^Group\s+(\d+)\s+\(omitted pair: \((\d+),\s*(\d+)\)\):\s*(.*)$")
        .expect("group line pattern is valid")
});

static TRIPLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\((\d+),\s*(\d+),\s*(\d+)\)").expect("triple pattern is valid")
});

/// One recognised group line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedGroup {
    /// The number after `Group`, as written.
    pub number: usize,
    pub omitted: Pair,
    /// Triples in file order, duplicates kept.
    pub triples: Vec<Triple>,
    /// Triple-shaped entries whose numbers do not fit an element.
    pub unreadable_triples: usize,
}

impl ParsedGroup {
    /// Number of triple entries on the line, readable or not.
    pub fn entry_count(&self) -> usize {
        self.triples.len() + self.unreadable_triples
    }
}

/// Everything recognised in a solution file.
///
/// Groups stay in file order and a pair may appear more than once, so the
/// validator can report duplicates instead of silently keeping the last one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedSolution {
    pub groups: Vec<ParsedGroup>,
    pub skipped_lines: usize,
}

impl ParsedSolution {
    /// Total triple entries across all groups, unreadable ones included.
    pub fn triple_count(&self) -> usize {
        self.groups.iter().map(ParsedGroup::entry_count).sum()
    }

    /// Triple entries that could not be read as elements.
    pub fn unreadable_triples(&self) -> usize {
        self.groups.iter().map(|g| g.unreadable_triples).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Parses solution text.
///
/// # Examples
///
/// ```
/// use tripart_core::{Pair, Triple};
/// use tripart_solution::parse_solution;
///
/// let parsed = parse_solution("Group 1\t(omitted pair: (0, 1)): \t[(2, 3, 4)]\nnoise\n");
/// assert_eq!(parsed.groups.len(), 1);
/// assert_eq!(parsed.groups[0].omitted, Pair::new(0, 1));
/// assert_eq!(parsed.groups[0].triples, vec![Triple::new(2, 3, 4)]);
/// assert_eq!(parsed.skipped_lines, 1);
/// ```
pub fn parse_solution(text: &str) -> ParsedSolution {
    let mut parsed = ParsedSolution::default();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match parse_group_line(line) {
            Some(group) => parsed.groups.push(group),
            None => parsed.skipped_lines += 1,
        }
    }
    parsed
}

fn parse_group_line(line: &str) -> Option<ParsedGroup> {
    let caps = GROUP_LINE.captures(line)?;
    let number = caps[1].parse().ok()?;
    let omitted = Pair::new(caps[2].parse().ok()?, caps[3].parse().ok()?);

    let mut unreadable_triples = 0;
    let triples: Vec<Triple> = TRIPLE
        .captures_iter(&caps[4])
        .filter_map(|t| {
            let triple = parse_triple(&t[1], &t[2], &t[3]);
            if triple.is_none() {
                unreadable_triples += 1;
            }
            triple
        })
        .collect();

    Some(ParsedGroup {
        number,
        omitted,
        triples,
        unreadable_triples,
    })
}

fn parse_triple(a: &str, b: &str, c: &str) -> Option<Triple> {
    Some(Triple::new(a.parse().ok()?, b.parse().ok()?, c.parse().ok()?))
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
