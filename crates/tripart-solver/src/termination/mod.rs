//! When the search stops, and when it merely looks stuck.
//!
//! - [`Deadline`] - wall-clock limit that stops every worker
//! - [`StallMonitor`] - advisory warning when no solution arrives in time

mod stall;
mod time;

pub use stall::StallMonitor;
pub use time::Deadline;

#[cfg(test)]
mod tests;
