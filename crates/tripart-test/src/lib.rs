//! Shared test fixtures for tripart crates.
//!
//! This crate provides known solutions and small text-editing helpers for
//! building corrupted variants of them. It only depends on `tripart-core`
//! so every other crate can take it as a dev-dependency.
//!
//! - [`solutions`] - verified partitions for `g = 1` and `g = 2`
//! - [`corrupt`] - helpers that break a solution file in a targeted way
//!
//! # Usage
//!
//! ```toml
//! [dev-dependencies]
//! tripart-test = { workspace = true }
//! ```

pub mod corrupt;
pub mod solutions;

pub use solutions::{g1_solution, G1_SOLUTION, G2_SOLUTION};
