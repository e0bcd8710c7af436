//! Runs the `tripart` binary end to end.

use std::path::Path;
use std::process::{Command, Output};

use tripart_test::corrupt::drop_line;
use tripart_test::G1_SOLUTION;

fn tripart(args: &[&str], dir: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_tripart"))
        .args(args)
        .arg("--quiet")
        .current_dir(dir)
        .output()
        .expect("failed to run tripart")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_solve_then_validate() {
    let dir = tempfile::tempdir().unwrap();

    let solved = tripart(&["solve", "1", "--workers", "1"], dir.path());
    assert!(solved.status.success(), "{}", stderr(&solved));
    assert!(stdout(&solved).contains("OPTIMAL"));
    assert!(stdout(&solved).contains("Total runtime: 0h 0m "));

    let written = std::fs::read_to_string(dir.path().join("g1_solution.txt")).unwrap();
    assert_eq!(written, G1_SOLUTION);

    let checked = tripart(&["validate", "1"], dir.path());
    assert!(checked.status.success());
    assert!(stdout(&checked).contains("Valid partition for g=1, y=5"));
}

#[test]
fn test_solve_with_inline_validation() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out");
    std::fs::create_dir(&out).unwrap();

    let output = tripart(
        &["solve", "2", "--output-dir", "out", "--validate", "--print-solution"],
        dir.path(),
    );

    assert!(output.status.success(), "{}", stderr(&output));
    let text = stdout(&output);
    assert!(text.contains("Group 1\t(omitted pair: (0, 1)): \t[(2, 3, 4),(5, 6, 7)]"));
    assert!(text.contains("Valid partition for g=2, y=8"));
    assert!(out.join("g2_solution.txt").exists());
}

#[test]
fn test_validate_missing_file() {
    let dir = tempfile::tempdir().unwrap();

    let output = tripart(&["validate", "3"], dir.path());

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Error: File 'g3_solution.txt' not found."));
}

#[test]
fn test_validate_reports_issues() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("broken.txt"), drop_line(G1_SOLUTION, 0)).unwrap();

    let output = tripart(&["validate", "1", "--file", "broken.txt"], dir.path());

    assert_eq!(output.status.code(), Some(1));
    let text = stdout(&output);
    assert!(text.starts_with("Invalid solution:"));
    assert!(text.contains("Missing triples: 1"));
}

#[test]
fn test_solve_rejects_zero_group_size() {
    let dir = tempfile::tempdir().unwrap();

    let output = tripart(&["solve", "0"], dir.path());

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Error: "));
    assert!(!dir.path().join("g0_solution.txt").exists());
}

#[test]
fn test_huge_group_size_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("g1_solution.txt"), G1_SOLUTION).unwrap();
    let huge = (usize::MAX / 2).to_string();

    let validated = tripart(&["validate", &huge, "--file", "g1_solution.txt"], dir.path());
    assert_eq!(validated.status.code(), Some(1));
    assert!(stderr(&validated).contains("too large"));

    let solved = tripart(&["solve", &huge], dir.path());
    assert_eq!(solved.status.code(), Some(1));
    assert!(stderr(&solved).contains("too large"));
}
