//! tripart Solver
//!
//! This crate turns a [`Model`](tripart_model::Model) into a status and, when
//! one exists, an assignment:
//! - [`SolverBackend`] - the seam for plugging in a search engine
//! - [`ExactCoverBackend`] - the built-in parallel exact-cover search
//! - Termination by wall-clock deadline, advisory stall detection
//! - Event system for monitoring ([`ProgressListener`])
//! - [`run_solver`] - index, model, solve, write in one call

pub mod backend;
pub mod error;
pub mod event;
pub mod pipeline;
pub mod statistics;
pub mod termination;

pub use backend::{ExactCoverBackend, SolveResult, SolveStatus, SolverBackend};
pub use error::SolveError;
pub use event::{
    CountingProgressListener, LoggingProgressListener, NoopProgressListener, ProgressEventSupport,
    ProgressListener,
};
pub use pipeline::{format_runtime, run_solver, run_solver_with_listener, RunOutcome};
pub use statistics::{SolverStatistics, StatisticsCollector};
pub use termination::{Deadline, StallMonitor};
