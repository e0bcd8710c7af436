use thiserror::Error;
use tripart::{ConfigError, SolutionError, SolveError};

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Solve(#[from] SolveError),

    #[error(transparent)]
    Solution(#[from] SolutionError),
}
