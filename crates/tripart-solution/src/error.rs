//! Error types for solution persistence and validation

use std::path::PathBuf;

use thiserror::Error;
use tripart_core::TripartError;

/// Errors raised while reading or writing solution files.
///
/// Validation findings are not errors; they are reported through
/// [`ValidationReport`](crate::ValidationReport).
#[derive(Debug, Error)]
pub enum SolutionError {
    #[error("Error: File '{}' not found.", .0.display())]
    NotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to persist solution file: {0}")]
    Persist(#[from] tempfile::PersistError),

    #[error(transparent)]
    Core(#[from] TripartError),
}
