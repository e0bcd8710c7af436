//! Time-based termination.

use std::time::{Duration, Instant};

/// A wall-clock limit measured from a fixed start.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use tripart_solver::Deadline;
///
/// let deadline = Deadline::after(Some(Duration::from_secs(30)));
/// assert!(!deadline.is_reached());
///
/// let unbounded = Deadline::after(None);
/// assert_eq!(unbounded.remaining(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deadline {
    start: Instant,
    limit: Option<Duration>,
}

impl Deadline {
    pub fn new(start: Instant, limit: Option<Duration>) -> Self {
        Self { start, limit }
    }

    /// A deadline starting now.
    pub fn after(limit: Option<Duration>) -> Self {
        Self::new(Instant::now(), limit)
    }

    pub fn seconds(secs: u64) -> Self {
        Self::after(Some(Duration::from_secs(secs)))
    }

    pub fn limit(&self) -> Option<Duration> {
        self.limit
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    pub fn is_reached(&self) -> bool {
        self.limit.is_some_and(|limit| self.start.elapsed() >= limit)
    }

    /// Time left, or `None` when unbounded.
    pub fn remaining(&self) -> Option<Duration> {
        self.limit
            .map(|limit| limit.saturating_sub(self.start.elapsed()))
    }
}
