//! Stall detection.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::{Duration, Instant};

use tracing::warn;

use crate::event::ProgressListener;

/// Watches the time since the last solution.
///
/// Register it as a [`ProgressListener`]: found solutions reset the clock and
/// worker polls check it. Once the threshold passes, a single `stall` warning
/// is logged until the next solution arrives. The monitor never stops the
/// search.
#[derive(Debug)]
pub struct StallMonitor {
    start: Instant,
    threshold: Duration,
    /// Nanoseconds after `start` of the last improvement.
    last_improvement: AtomicU64,
    warned: AtomicBool,
    warnings: AtomicU64,
}

impl StallMonitor {
    pub fn new(threshold: Duration) -> Self {
        Self {
            start: Instant::now(),
            threshold,
            last_improvement: AtomicU64::new(0),
            warned: AtomicBool::new(false),
            warnings: AtomicU64::new(0),
        }
    }

    pub fn threshold(&self) -> Duration {
        self.threshold
    }

    fn now_nanos(&self) -> u64 {
        u64::try_from(self.start.elapsed().as_nanos()).unwrap_or(u64::MAX)
    }

    /// Resets the clock and re-arms the warning.
    pub fn record_improvement(&self) {
        self.last_improvement
            .store(self.now_nanos(), Ordering::SeqCst);
        self.warned.store(false, Ordering::SeqCst);
    }

    pub fn time_since_last_improvement(&self) -> Duration {
        let last = self.last_improvement.load(Ordering::SeqCst);
        Duration::from_nanos(self.now_nanos().saturating_sub(last))
    }

    pub fn is_stalled(&self) -> bool {
        self.time_since_last_improvement() >= self.threshold
    }

    /// Returns whether the search is stalled, logging a warning the first
    /// time a stall window is observed.
    pub fn check_stalling(&self) -> bool {
        let since = self.time_since_last_improvement();
        if since < self.threshold {
            return false;
        }
        if !self.warned.swap(true, Ordering::SeqCst) {
            self.warnings.fetch_add(1, Ordering::SeqCst);
            warn!(
                event = "stall",
                stall_secs = since.as_secs(),
                threshold_secs = self.threshold.as_secs(),
            );
        }
        true
    }

    /// Number of stall windows warned about so far.
    pub fn warning_count(&self) -> u64 {
        self.warnings.load(Ordering::SeqCst)
    }
}

impl ProgressListener for StallMonitor {
    fn on_solution_found(&self, _solution_count: u64, _worker: usize, _elapsed: Duration) {
        self.record_improvement();
    }

    fn on_search_started(&self, _worker_count: usize) {
        self.record_improvement();
    }

    fn on_poll(&self, _elapsed: Duration) {
        self.check_stalling();
    }
}
