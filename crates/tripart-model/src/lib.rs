//! tripart Model - the boolean assignment problem handed to a solver
//!
//! One boolean variable exists per admissible (pair, triple) combination,
//! meaning "the triple belongs to the group omitting the pair". The
//! [`ModelBuilder`] derives every constraint from the incidence relations:
//!
//! - group size: each pair receives exactly `g` triples
//! - element coverage: within each group, every free element is hit once
//! - triple cover: every triple lands in exactly one group
//! - symmetry breaking (optional): the group of pair (0, 1) is pinned
//!
//! The first is implied by the second for standard dimensions, and both
//! overlap with the third; all three are kept because they prune the search.

pub mod builder;
pub mod error;
pub mod model;

pub use builder::{canonical_group, ModelBuilder};
pub use error::{ModelError, Result};
pub use model::{
    Assignment, BoolVar, Constraint, ConstraintKind, Model, ModelSummary, Occurrences, VarId,
};
