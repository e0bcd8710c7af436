//! Renders solutions into the group-line text format.

use std::fmt::Write as _;
use std::io::Write as _;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::info;
use tripart_core::{Group, Solution};

use crate::error::SolutionError;

/// Returns the deterministic file name for a group size, `g{g}_solution.txt`.
pub fn solution_file_name(group_size: usize) -> String {
    format!("g{}_solution.txt", group_size)
}

fn write_group_line(out: &mut String, number: usize, group: &Group) {
    let _ = write!(
        out,
        "Group {}\t(omitted pair: ({}, {})): \t[",
        number,
        group.omitted.first(),
        group.omitted.second()
    );
    for (i, triple) in group.triples.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        let _ = write!(out, "{}", triple);
    }
    out.push_str("]\n");
}

/// Renders every group, in pair index order, one newline-terminated line each.
///
/// Output is byte-identical for identical solutions.
///
/// # Examples
///
/// ```
/// use tripart_core::{Dimensions, Group, Pair, Solution, Triple};
/// use tripart_solution::render_solution;
///
/// let dims = Dimensions::for_group_size(1).unwrap();
/// let mut groups = Vec::new();
/// for a in 0..5 {
///     for b in (a + 1)..5 {
///         let rest: Vec<_> = (0..5).filter(|e| *e != a && *e != b).collect();
///         groups.push(Group::new(Pair::new(a, b), vec![Triple::new(rest[0], rest[1], rest[2])]));
///     }
/// }
/// let text = render_solution(&Solution::new(dims, groups).unwrap());
/// assert!(text.starts_with("Group 1\t(omitted pair: (0, 1)): \t[(2, 3, 4)]\n"));
/// assert_eq!(text.lines().count(), 10);
/// ```
pub fn render_solution(solution: &Solution) -> String {
    let mut out = String::new();
    for (i, group) in solution.groups().iter().enumerate() {
        write_group_line(&mut out, i + 1, group);
    }
    out
}

/// Writes `g{g}_solution.txt` into `dir` and returns its path.
///
/// The content goes to a temporary file in the same directory first and is
/// renamed into place, so a failed run never leaves a partial file.
pub fn write_solution(solution: &Solution, dir: &Path) -> Result<PathBuf, SolutionError> {
    let path = dir.join(solution_file_name(solution.dims().group_size()));
    let text = render_solution(solution);

    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(text.as_bytes())?;
    file.flush()?;
    file.persist(&path)?;

    info!(
        event = "solution_written",
        path = %path.display(),
        group_count = solution.groups().len(),
    );
    Ok(path)
}

#[cfg(test)]
#[path = "writer_tests.rs"]
mod tests;
