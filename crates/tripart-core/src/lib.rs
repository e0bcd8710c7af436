//! tripart Core - combinatorial building blocks for the triple partition
//!
//! This crate provides the fundamental, solver-independent pieces:
//! - Problem dimensions (`g`, `y = 3g + 2`, pair and triple counts)
//! - Pair and triple types with a stable dense enumeration
//! - The incidence relations between pairs and admissible triples
//! - The solution type shared by the solver and the file format

pub mod dimensions;
pub mod error;
pub mod incidence;
pub mod index;
pub mod solution;

pub use dimensions::{binomial, checked_binomial, Dimensions};
pub use error::{Result, TripartError};
pub use incidence::Incidence;
pub use index::{CombinatorialIndex, Element, Pair, PairIndex, Triple, TripleIndex};
pub use solution::{Group, Solution};
