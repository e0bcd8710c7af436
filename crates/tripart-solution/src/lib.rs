//! tripart Solution - the persisted partition and its independent check
//!
//! - [`writer`] renders a [`Solution`](tripart_core::Solution) into the
//!   line-per-group text format and persists it atomically
//! - [`parser`] reads that format back, skipping lines it does not recognise
//! - [`validator`] rechecks a parsed file from scratch, knowing only `g`
//!
//! The file layout, one line per group:
//!
//! ```text
//! Group 1	(omitted pair: (0, 1)): 	[(2, 3, 4),(5, 6, 7)]
//! ```

pub mod error;
pub mod parser;
pub mod validator;
pub mod writer;

pub use error::SolutionError;
pub use parser::{parse_solution, ParsedGroup, ParsedSolution};
pub use validator::{validate, validate_file, Issue, IssueCategory, ValidationReport};
pub use writer::{render_solution, solution_file_name, write_solution};
