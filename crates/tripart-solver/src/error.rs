//! Error types for solving.

use thiserror::Error;
use tripart_config::ConfigError;
use tripart_core::TripartError;
use tripart_model::ModelError;
use tripart_solution::SolutionError;

/// Failures of a solve run.
///
/// Infeasibility and running out of time are statuses, not errors; see
/// [`SolveStatus`](crate::SolveStatus).
#[derive(Debug, Error)]
pub enum SolveError {
    #[error(transparent)]
    Core(#[from] TripartError),

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to start search workers: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error(transparent)]
    Write(#[from] SolutionError),
}
