//! Error types for tripart

use thiserror::Error;

/// Main error type for tripart core operations
#[derive(Debug, Error)]
pub enum TripartError {
    /// The group size `g` must be at least one
    #[error("Invalid group size: g = {0}, expected g >= 1")]
    InvalidGroupSize(usize),

    /// `3g + 2` elements or their triple count overflow `usize`
    #[error("Group size g = {0} is too large")]
    GroupSizeTooLarge(usize),

    /// The universe is too small to contain a single pair
    #[error("Invalid element count: y = {0}, expected y >= 2")]
    InvalidElementCount(usize),

    /// A solution was assembled with the wrong number of groups
    #[error("Solution has {actual} groups, expected {expected}")]
    GroupCountMismatch { expected: usize, actual: usize },

    /// Internal error (should not occur in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for tripart core operations
pub type Result<T> = std::result::Result<T, TripartError>;
