//! Tests for the end-to-end pipeline.

use tripart_config::WorkerCount;
use tripart_model::Model;
use tripart_solution::{parse_solution, render_solution, validate_file, SolutionError};
use tripart_test::G1_SOLUTION;

use super::*;
use crate::backend::{ExactCoverBackend, SolveResult};
use crate::event::CountingProgressListener;

fn config_in(dir: &std::path::Path) -> SolverConfig {
    SolverConfig::default()
        .with_worker_count(2)
        .with_output_dir(dir)
}

#[test]
fn test_g1_writes_unique_solution() {
    let dir = tempfile::tempdir().unwrap();
    let outcome = run_solver(1, &config_in(dir.path()), &ExactCoverBackend::new()).unwrap();

    assert_eq!(outcome.status, SolveStatus::Optimal);
    let path = outcome.path.unwrap();
    assert_eq!(path, dir.path().join("g1_solution.txt"));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), G1_SOLUTION);
}

#[test]
fn test_g2_written_file_parses_back_to_solution() {
    let dir = tempfile::tempdir().unwrap();
    let outcome = run_solver(2, &config_in(dir.path()), &ExactCoverBackend::new()).unwrap();
    let solution = outcome.solution.unwrap();

    let rendered = render_solution(&solution);
    assert_eq!(std::fs::read_to_string(outcome.path.unwrap()).unwrap(), rendered);

    let parsed = parse_solution(&rendered);
    assert_eq!(parsed.skipped_lines, 0);
    assert_eq!(parsed.groups.len(), solution.groups().len());
    for (i, (read, group)) in parsed.groups.iter().zip(solution.groups()).enumerate() {
        assert_eq!(read.number, i + 1);
        assert_eq!(read.omitted, group.omitted);
        assert_eq!(read.triples, group.triples);
    }
}

#[test]
fn test_g2_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let outcome = run_solver(2, &config_in(dir.path()), &ExactCoverBackend::new()).unwrap();

    let solution = outcome.solution.unwrap();
    assert_eq!(solution.groups().len(), 28);
    assert!(solution.groups().iter().all(|group| group.len() == 2));
    assert_eq!(solution.triple_count(), 56);

    let report = validate_file(2, &outcome.path.unwrap()).unwrap();
    assert!(report.is_valid(), "{}", report);
}

#[test]
fn test_validation_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let outcome = run_solver(2, &config_in(dir.path()), &ExactCoverBackend::new()).unwrap();
    let path = outcome.path.unwrap();
    assert_eq!(
        validate_file(2, &path).unwrap(),
        validate_file(2, &path).unwrap()
    );
}

#[test]
fn test_zero_group_size_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = run_solver(0, &config_in(dir.path()), &ExactCoverBackend::new()).unwrap_err();
    assert!(matches!(err, SolveError::Core(TripartError::InvalidGroupSize(0))));
}

#[test]
fn test_invalid_config_is_an_error() {
    let config = SolverConfig {
        worker_count: WorkerCount::Count(0),
        ..SolverConfig::default()
    };
    let err = run_solver(1, &config, &ExactCoverBackend::new()).unwrap_err();
    assert!(matches!(err, SolveError::Config(_)));
}

#[test]
fn test_missing_output_dir_is_a_write_error() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(&dir.path().join("missing"));
    let err = run_solver(1, &config, &ExactCoverBackend::new()).unwrap_err();
    assert!(matches!(err, SolveError::Write(SolutionError::Io(_))));
}

#[test]
fn test_extra_listener_is_notified() {
    let dir = tempfile::tempdir().unwrap();
    let listener = Arc::new(CountingProgressListener::new());
    run_solver_with_listener(
        2,
        &config_in(dir.path()),
        &ExactCoverBackend::new(),
        Some(listener.clone()),
    )
    .unwrap();
    assert_eq!(listener.solution_count(), 1);
    assert_eq!(listener.ended_count(), 1);
}

#[derive(Debug)]
struct FixedStatus(SolveStatus);

impl SolverBackend for FixedStatus {
    fn name(&self) -> &str {
        "fixed-status"
    }

    fn solve(
        &self,
        _model: &Model,
        _config: &SolverConfig,
        _listener: &dyn ProgressListener,
    ) -> Result<SolveResult, SolveError> {
        Ok(SolveResult {
            status: self.0,
            assignment: None,
            statistics: SolverStatistics::default(),
        })
    }
}

#[test]
fn test_no_file_without_solution() {
    for status in [SolveStatus::Infeasible, SolveStatus::TimeLimitNoSolution] {
        let dir = tempfile::tempdir().unwrap();
        let outcome = run_solver(2, &config_in(dir.path()), &FixedStatus(status)).unwrap();
        assert_eq!(outcome.status, status);
        assert!(outcome.solution.is_none());
        assert!(outcome.path.is_none());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}

#[test]
fn test_solution_status_without_assignment_is_internal_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = run_solver(1, &config_in(dir.path()), &FixedStatus(SolveStatus::Feasible)).unwrap_err();
    assert!(matches!(err, SolveError::Core(TripartError::Internal(_))));
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_format_runtime() {
    assert_eq!(format_runtime(Duration::ZERO), "0h 0m 0.00s");
    assert_eq!(format_runtime(Duration::from_millis(61_250)), "0h 1m 1.25s");
    assert_eq!(format_runtime(Duration::from_secs(7200 + 61)), "2h 1m 1.00s");
}
