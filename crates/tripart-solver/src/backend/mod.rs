//! Search backends.
//!
//! A backend takes a finished [`Model`] and blocks until it reaches a
//! status. Progress flows out through a [`ProgressListener`] and never back
//! in.

mod exact_cover;
mod search;

use std::fmt;

use tripart_config::SolverConfig;
use tripart_model::{Assignment, Model};

use crate::error::SolveError;
use crate::event::ProgressListener;
use crate::statistics::SolverStatistics;

pub use exact_cover::ExactCoverBackend;

/// Terminal status of a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolveStatus {
    /// A solution was found and nothing better exists.
    Optimal,
    /// A solution was found but the search stopped before proving optimality.
    Feasible,
    /// The search space was exhausted without a solution.
    Infeasible,
    /// The time limit ran out before any solution was found.
    TimeLimitNoSolution,
}

impl SolveStatus {
    /// True for the statuses that come with an assignment.
    pub fn has_solution(&self) -> bool {
        matches!(self, SolveStatus::Optimal | SolveStatus::Feasible)
    }
}

impl fmt::Display for SolveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SolveStatus::Optimal => "OPTIMAL",
            SolveStatus::Feasible => "FEASIBLE",
            SolveStatus::Infeasible => "INFEASIBLE",
            SolveStatus::TimeLimitNoSolution => "TIME_LIMIT_NO_SOLUTION",
        };
        f.write_str(s)
    }
}

/// What a backend returns.
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub status: SolveStatus,
    /// One value per model variable; present iff the status has a solution.
    pub assignment: Option<Assignment>,
    pub statistics: SolverStatistics,
}

/// A search engine for boolean models.
pub trait SolverBackend: Send + Sync + fmt::Debug {
    /// Short name for logs.
    fn name(&self) -> &str;

    /// Solves `model` within the limits of `config`.
    ///
    /// Errors are reserved for failures of the backend itself; infeasibility
    /// and timeouts are reported through [`SolveResult::status`].
    fn solve(
        &self,
        model: &Model,
        config: &SolverConfig,
        listener: &dyn ProgressListener,
    ) -> Result<SolveResult, SolveError>;
}
