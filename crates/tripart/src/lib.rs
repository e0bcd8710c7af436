//! tripart - partition the 3-subsets of `{0, .., 3g+1}`
//!
//! Every pair `{a, b}` owns one group of `g` pairwise disjoint triples that
//! avoid `a` and `b`, and every triple lands in exactly one group.
//!
//! # Example
//!
//! ```rust
//! use tripart::prelude::*;
//!
//! let dir = std::env::temp_dir().join("tripart-facade-doc");
//! std::fs::create_dir_all(&dir).unwrap();
//! let config = SolverConfig::default().with_worker_count(1).with_output_dir(&dir);
//!
//! let outcome = tripart::solve_with_config(1, &config).unwrap();
//! assert_eq!(outcome.status, SolveStatus::Optimal);
//!
//! let report = validate_file(1, &outcome.path.unwrap()).unwrap();
//! assert!(report.is_valid());
//! ```

pub use tripart_core::{
    binomial, CombinatorialIndex, Dimensions, Element, Group, Incidence, Pair, PairIndex,
    Solution, Triple, TripleIndex, TripartError,
};

pub use tripart_config::{ConfigError, SearchStrategy, SolverConfig, TerminationConfig, WorkerCount};

pub use tripart_model::{Assignment, Constraint, Model, ModelBuilder, ModelError};

pub use tripart_solver::{
    format_runtime, run_solver, run_solver_with_listener, ExactCoverBackend, ProgressListener,
    RunOutcome, SolveError, SolveResult, SolveStatus, SolverBackend, SolverStatistics,
};

pub use tripart_solution::{
    parse_solution, render_solution, solution_file_name, validate, validate_file, write_solution,
    Issue, IssueCategory, ParsedSolution, SolutionError, ValidationReport,
};

#[cfg(feature = "console")]
pub use tripart_console as console;

mod solve;
pub use solve::{solve, solve_with_config, CONFIG_FILE};

pub mod prelude {
    pub use super::{
        run_solver, validate, validate_file, Dimensions, ExactCoverBackend, Pair, RunOutcome,
        Solution, SolveStatus, SolverConfig, Triple, ValidationReport,
    };
}
