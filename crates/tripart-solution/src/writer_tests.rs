//! Tests for rendering and writing solution files.

use super::*;
use crate::parser::parse_solution;
use crate::validator::validate;
use tripart_test::{g1_solution, G1_SOLUTION};

#[test]
fn test_render_matches_fixture() {
    assert_eq!(render_solution(&g1_solution()), G1_SOLUTION);
}

#[test]
fn test_render_is_deterministic() {
    let solution = g1_solution();
    assert_eq!(render_solution(&solution), render_solution(&solution));
}

#[test]
fn test_rendered_text_parses_back_to_groups() {
    let solution = g1_solution();
    let parsed = parse_solution(&render_solution(&solution));

    assert_eq!(parsed.skipped_lines, 0);
    assert_eq!(parsed.groups.len(), solution.groups().len());
    for (i, (read, group)) in parsed.groups.iter().zip(solution.groups()).enumerate() {
        assert_eq!(read.number, i + 1);
        assert_eq!(read.omitted, group.omitted);
        assert_eq!(read.triples, group.triples);
    }
}

#[test]
fn test_file_name() {
    assert_eq!(solution_file_name(3), "g3_solution.txt");
}

#[test]
fn test_write_then_validate() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_solution(&g1_solution(), dir.path()).unwrap();
    assert_eq!(path, dir.path().join("g1_solution.txt"));

    let text = std::fs::read_to_string(&path).unwrap();
    assert_eq!(text, G1_SOLUTION);
    assert!(validate(1, &parse_solution(&text)).unwrap().is_valid());
}

#[test]
fn test_write_replaces_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("g1_solution.txt");
    std::fs::write(&path, "stale").unwrap();

    write_solution(&g1_solution(), dir.path()).unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), G1_SOLUTION);
    // No temporary files left behind.
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
}
