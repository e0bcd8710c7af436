//! Solver entry point that hides all internal wiring.

use tripart_config::SolverConfig;
use tripart_solver::{run_solver, ExactCoverBackend, RunOutcome, SolveError};

/// Configuration file picked up by [`solve`] from the working directory.
pub const CONFIG_FILE: &str = "tripart.toml";

/// Solves group size `g` with the built-in backend.
///
/// Reads [`CONFIG_FILE`] when present and falls back to the defaults when it
/// is missing or unreadable.
pub fn solve(g: usize) -> Result<RunOutcome, SolveError> {
    let config = SolverConfig::load(CONFIG_FILE).unwrap_or_default();
    solve_with_config(g, &config)
}

/// Solves group size `g` with the built-in backend and an explicit config.
///
/// With the `console` feature the colored console output is installed first.
pub fn solve_with_config(g: usize, config: &SolverConfig) -> Result<RunOutcome, SolveError> {
    #[cfg(feature = "console")]
    tripart_console::init();

    run_solver(g, config, &ExactCoverBackend::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tripart_solver::SolveStatus;

    #[test]
    fn test_solve_with_config_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = SolverConfig::default()
            .with_worker_count(2)
            .with_output_dir(dir.path());

        let outcome = solve_with_config(2, &config).unwrap();

        assert_eq!(outcome.status, SolveStatus::Optimal);
        assert_eq!(outcome.path, Some(dir.path().join("g2_solution.txt")));
        assert_eq!(outcome.solution.unwrap().groups().len(), 28);
    }

    #[test]
    fn test_solve_rejects_zero() {
        assert!(solve_with_config(0, &SolverConfig::default()).is_err());
    }
}
