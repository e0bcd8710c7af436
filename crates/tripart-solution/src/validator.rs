//! Independent validation of a solution file.
//!
//! The validator only knows `g`. It recomputes the universe of pairs and
//! triples itself instead of going through [`CombinatorialIndex`], so a bug
//! in the indexing used to build the model cannot hide in the check.
//!
//! [`CombinatorialIndex`]: tripart_core::CombinatorialIndex

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::io;
use std::path::Path;

use tracing::info;
use tripart_core::{Dimensions, Pair, Triple};

use crate::error::SolutionError;
use crate::parser::{parse_solution, ParsedSolution};

/// A single finding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    /// A group contains a triple that uses one of its omitted elements.
    OmittedElementInTriple { omitted: Pair, triple: Triple },
    /// A group does not hold exactly `g` triples.
    WrongGroupSize {
        omitted: Pair,
        actual: usize,
        expected: usize,
    },
    /// Pairs of the universe with no group line.
    MissingGroups(usize),
    /// Group lines beyond the first for the same pair.
    DuplicateGroups(usize),
    /// Group lines whose omitted pair is not a pair of the universe.
    UnknownGroups(usize),
    /// Triples of the universe that appear in no group.
    MissingTriples(usize),
    /// Distinct triples that are not triples of the universe.
    ExtraTriples(usize),
    /// Occurrences of universe triples beyond their first.
    DuplicateTriples(usize),
}

/// Coarse classification of an [`Issue`], used for summaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum IssueCategory {
    OmittedElementInTriple,
    WrongGroupSize,
    MissingGroups,
    DuplicateGroups,
    UnknownGroups,
    MissingTriples,
    ExtraTriples,
    DuplicateTriples,
}

impl Issue {
    pub fn category(&self) -> IssueCategory {
        match self {
            Issue::OmittedElementInTriple { .. } => IssueCategory::OmittedElementInTriple,
            Issue::WrongGroupSize { .. } => IssueCategory::WrongGroupSize,
            Issue::MissingGroups(_) => IssueCategory::MissingGroups,
            Issue::DuplicateGroups(_) => IssueCategory::DuplicateGroups,
            Issue::UnknownGroups(_) => IssueCategory::UnknownGroups,
            Issue::MissingTriples(_) => IssueCategory::MissingTriples,
            Issue::ExtraTriples(_) => IssueCategory::ExtraTriples,
            Issue::DuplicateTriples(_) => IssueCategory::DuplicateTriples,
        }
    }

    /// How many defects this issue stands for.
    pub fn weight(&self) -> usize {
        match self {
            Issue::OmittedElementInTriple { .. } | Issue::WrongGroupSize { .. } => 1,
            Issue::MissingGroups(n)
            | Issue::DuplicateGroups(n)
            | Issue::UnknownGroups(n)
            | Issue::MissingTriples(n)
            | Issue::ExtraTriples(n)
            | Issue::DuplicateTriples(n) => *n,
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Issue::OmittedElementInTriple { omitted, triple } => write!(
                f,
                "Group {} contains omitted element in triple {}.",
                omitted, triple
            ),
            Issue::WrongGroupSize {
                omitted,
                actual,
                expected,
            } => write!(
                f,
                "Group {} has {} triples, expected {}.",
                omitted, actual, expected
            ),
            Issue::MissingGroups(n) => write!(f, "Missing groups: {}", n),
            Issue::DuplicateGroups(n) => write!(f, "Duplicate groups: {}", n),
            Issue::UnknownGroups(n) => write!(f, "Groups with invalid omitted pair: {}", n),
            Issue::MissingTriples(n) => write!(f, "Missing triples: {}", n),
            Issue::ExtraTriples(n) => write!(f, "Extra triples: {}", n),
            Issue::DuplicateTriples(n) => write!(f, "Duplicate triples: {}", n),
        }
    }
}

impl fmt::Display for IssueCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            IssueCategory::OmittedElementInTriple => "omitted element in triple",
            IssueCategory::WrongGroupSize => "wrong group size",
            IssueCategory::MissingGroups => "missing groups",
            IssueCategory::DuplicateGroups => "duplicate groups",
            IssueCategory::UnknownGroups => "invalid omitted pair",
            IssueCategory::MissingTriples => "missing triples",
            IssueCategory::ExtraTriples => "extra triples",
            IssueCategory::DuplicateTriples => "duplicate triples",
        };
        f.write_str(name)
    }
}

/// Outcome of validating one solution.
///
/// Displays as the pass message, or as `Invalid solution:` followed by one
/// `- ` line per issue and a per-category summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    dims: Dimensions,
    group_lines: usize,
    triple_occurrences: usize,
    skipped_lines: usize,
    issues: Vec<Issue>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn dims(&self) -> Dimensions {
        self.dims
    }

    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    pub fn group_lines(&self) -> usize {
        self.group_lines
    }

    pub fn triple_occurrences(&self) -> usize {
        self.triple_occurrences
    }

    pub fn skipped_lines(&self) -> usize {
        self.skipped_lines
    }

    /// Defect counts per category, in category order.
    pub fn summary(&self) -> BTreeMap<IssueCategory, usize> {
        let mut summary = BTreeMap::new();
        for issue in &self.issues {
            *summary.entry(issue.category()).or_insert(0) += issue.weight();
        }
        summary
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            return write!(
                f,
                "Valid partition for g={}, y={}: covers all triples exactly once and respects omitted pairs.",
                self.dims.group_size(),
                self.dims.element_count()
            );
        }

        writeln!(f, "Invalid solution:")?;
        for issue in &self.issues {
            writeln!(f, "- {}", issue)?;
        }
        let parts: Vec<String> = self
            .summary()
            .iter()
            .map(|(category, count)| format!("{}: {}", category, count))
            .collect();
        write!(
            f,
            "Summary: {} issues ({})",
            self.issues.len(),
            parts.join(", ")
        )
    }
}

/// Checks a parsed solution against the universe for `group_size`.
///
/// Per-group issues come first in file order, followed by group-level and
/// triple-level counts.
///
/// # Examples
///
/// ```
/// use tripart_solution::{parse_solution, validate};
///
/// let report = validate(1, &parse_solution("")).unwrap();
/// assert!(!report.is_valid());
/// assert!(report.to_string().contains("- Missing triples: 10"));
/// ```
pub fn validate(group_size: usize, parsed: &ParsedSolution) -> Result<ValidationReport, SolutionError> {
    let dims = Dimensions::for_group_size(group_size)?;
    let y = dims.element_count();

    let mut universe_pairs = BTreeSet::new();
    let mut universe_triples = BTreeSet::new();
    for a in 0..y {
        for b in (a + 1)..y {
            universe_pairs.insert(Pair::new(a, b));
            for c in (b + 1)..y {
                universe_triples.insert(Triple::new(a, b, c));
            }
        }
    }

    let mut issues = Vec::new();
    let mut pair_lines: BTreeMap<Pair, usize> = BTreeMap::new();
    let mut triple_counts: BTreeMap<Triple, usize> = BTreeMap::new();

    for group in &parsed.groups {
        *pair_lines.entry(group.omitted).or_insert(0) += 1;

        for triple in &group.triples {
            *triple_counts.entry(*triple).or_insert(0) += 1;
            if !group.omitted.is_disjoint(triple) {
                issues.push(Issue::OmittedElementInTriple {
                    omitted: group.omitted,
                    triple: *triple,
                });
            }
        }

        if group.entry_count() != group_size {
            issues.push(Issue::WrongGroupSize {
                omitted: group.omitted,
                actual: group.entry_count(),
                expected: group_size,
            });
        }
    }

    let missing_groups = universe_pairs
        .iter()
        .filter(|p| !pair_lines.contains_key(*p))
        .count();
    let duplicate_groups: usize = pair_lines
        .iter()
        .filter(|(p, _)| universe_pairs.contains(*p))
        .map(|(_, n)| n - 1)
        .sum();
    let unknown_groups: usize = pair_lines
        .iter()
        .filter(|(p, _)| !universe_pairs.contains(*p))
        .map(|(_, n)| n)
        .sum();

    let missing_triples = universe_triples
        .iter()
        .filter(|t| !triple_counts.contains_key(*t))
        .count();
    // Unreadable entries cannot name a triple of the universe.
    let extra_triples = triple_counts
        .keys()
        .filter(|t| !universe_triples.contains(*t))
        .count()
        + parsed.unreadable_triples();
    let duplicate_triples: usize = triple_counts
        .iter()
        .filter(|(t, _)| universe_triples.contains(*t))
        .map(|(_, n)| n - 1)
        .sum();

    for (count, issue) in [
        (missing_groups, Issue::MissingGroups as fn(usize) -> Issue),
        (duplicate_groups, Issue::DuplicateGroups),
        (unknown_groups, Issue::UnknownGroups),
        (missing_triples, Issue::MissingTriples),
        (extra_triples, Issue::ExtraTriples),
        (duplicate_triples, Issue::DuplicateTriples),
    ] {
        if count > 0 {
            issues.push(issue(count));
        }
    }

    let report = ValidationReport {
        dims,
        group_lines: parsed.groups.len(),
        triple_occurrences: parsed.triple_count(),
        skipped_lines: parsed.skipped_lines,
        issues,
    };
    info!(
        event = "validation_end",
        group_size,
        valid = report.is_valid(),
        issue_count = report.issues.len(),
        skipped_lines = report.skipped_lines,
    );
    Ok(report)
}

/// Reads and validates a solution file.
///
/// A missing file is [`SolutionError::NotFound`]; anything readable is
/// parsed and validated, however malformed.
pub fn validate_file(group_size: usize, path: &Path) -> Result<ValidationReport, SolutionError> {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(SolutionError::NotFound(path.to_path_buf()))
        }
        Err(e) => return Err(e.into()),
    };
    validate(group_size, &parse_solution(&text))
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
