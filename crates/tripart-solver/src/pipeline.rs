//! End-to-end solve: index, model, search, write.
//!
//! Logging levels:
//! - **INFO**: index and model sizes, search start/end, solutions, file written
//! - **WARN**: stall warnings
//! - **DEBUG**: per-worker results when `log_search_progress` is set

use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::info;
use tripart_config::SolverConfig;
use tripart_core::{CombinatorialIndex, Dimensions, Incidence, Solution, TripartError};
use tripart_model::ModelBuilder;
use tripart_solution::write_solution;

use crate::backend::{SolveStatus, SolverBackend};
use crate::error::SolveError;
use crate::event::{LoggingProgressListener, ProgressEventSupport, ProgressListener};
use crate::statistics::SolverStatistics;
use crate::termination::StallMonitor;

/// Result of [`run_solver`].
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub status: SolveStatus,
    /// The decoded partition, when the status has one.
    pub solution: Option<Solution>,
    /// Where the partition was written.
    pub path: Option<PathBuf>,
    pub statistics: SolverStatistics,
    /// Wall-clock time of the whole run, model building included.
    pub elapsed: Duration,
}

/// Solves the partition for group size `g` and writes `g{g}_solution.txt`
/// into the configured output directory.
///
/// Nothing is written unless the backend returns a solution.
///
/// # Examples
///
/// ```
/// use tripart_config::SolverConfig;
/// use tripart_solver::{run_solver, ExactCoverBackend, SolveStatus};
///
/// let dir = std::env::temp_dir().join("tripart-doc-run");
/// std::fs::create_dir_all(&dir).unwrap();
/// let config = SolverConfig::default().with_worker_count(1).with_output_dir(&dir);
///
/// let outcome = run_solver(1, &config, &ExactCoverBackend::new()).unwrap();
/// assert_eq!(outcome.status, SolveStatus::Optimal);
/// assert_eq!(outcome.path, Some(dir.join("g1_solution.txt")));
/// ```
pub fn run_solver(
    g: usize,
    config: &SolverConfig,
    backend: &dyn SolverBackend,
) -> Result<RunOutcome, SolveError> {
    run_solver_with_listener(g, config, backend, None)
}

/// Like [`run_solver`], with an extra progress listener.
pub fn run_solver_with_listener(
    g: usize,
    config: &SolverConfig,
    backend: &dyn SolverBackend,
    listener: Option<Arc<dyn ProgressListener>>,
) -> Result<RunOutcome, SolveError> {
    let start = Instant::now();
    config.validate()?;

    let dims = Dimensions::for_group_size(g)?;
    let index = CombinatorialIndex::new(dims);
    info!(
        event = "index_built",
        group_size = dims.group_size(),
        element_count = dims.element_count(),
        pair_count = index.pair_count(),
        triple_count = index.triple_count(),
    );

    let incidence = Incidence::build(&index);
    info!(
        event = "incidence_built",
        admissible_count = incidence.admissible_count(),
        coverage_key_count = incidence.coverage_key_count(),
    );

    let model = ModelBuilder::new(&index, &incidence)
        .symmetry_breaking(config.symmetry_breaking)
        .build()?;

    let stall = Arc::new(StallMonitor::new(config.stall_threshold()));
    let mut support = ProgressEventSupport::new();
    support.add_listener(Arc::new(LoggingProgressListener::verbose(
        config.log_search_progress,
    )));
    support.add_listener(stall);
    if let Some(listener) = listener {
        support.add_listener(listener);
    }

    let result = backend.solve(&model, config, &support)?;

    let (solution, path) = if result.status.has_solution() {
        let assignment = result.assignment.as_ref().ok_or_else(|| {
            TripartError::Internal(format!(
                "backend '{}' reported {} without an assignment",
                backend.name(),
                result.status
            ))
        })?;
        let solution = model.decode(&index, assignment)?;
        let path = write_solution(&solution, config.output_dir())?;
        (Some(solution), Some(path))
    } else {
        (None, None)
    };

    Ok(RunOutcome {
        status: result.status,
        solution,
        path,
        statistics: result.statistics,
        elapsed: start.elapsed(),
    })
}

/// Formats a duration as `Hh Mm S.SSs`.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use tripart_solver::format_runtime;
///
/// assert_eq!(format_runtime(Duration::from_millis(3_723_450)), "1h 2m 3.45s");
/// ```
pub fn format_runtime(elapsed: Duration) -> String {
    let total = elapsed.as_secs();
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = (total % 60) as f64 + f64::from(elapsed.subsec_nanos()) / 1e9;
    format!("{}h {}m {:.2}s", hours, minutes, seconds)
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;
