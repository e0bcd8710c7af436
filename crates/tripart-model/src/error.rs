//! Error types for model construction and decoding

use thiserror::Error;
use tripart_core::TripartError;

use crate::model::VarId;

/// Errors raised when querying or decoding a model
#[derive(Debug, Error)]
pub enum ModelError {
    /// A constraint or lookup referenced a variable the model does not own
    #[error("Unknown variable: {0}")]
    UnknownVariable(VarId),

    /// An assignment does not cover exactly the model's variables
    #[error("Assignment has {actual} values, model has {expected} variables")]
    AssignmentSize { expected: usize, actual: usize },

    /// A variable refers to a pair or triple outside the index
    #[error("Variable {var} references pair {pair} / triple {triple} outside the index")]
    OutOfIndex {
        var: VarId,
        pair: usize,
        triple: usize,
    },

    #[error(transparent)]
    Core(#[from] TripartError),
}

/// Result type alias for model operations
pub type Result<T> = std::result::Result<T, ModelError>;
