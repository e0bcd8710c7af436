//! Event system for search monitoring.
//!
//! Listeners receive notifications about the search lifecycle. They are
//! called from worker threads, so every listener is `Send + Sync`, and they
//! only observe: nothing a listener does changes the course of the search.
//!
//! # Usage
//!
//! ```
//! use std::sync::Arc;
//! use std::time::Duration;
//! use tripart_solver::event::{CountingProgressListener, ProgressEventSupport, ProgressListener};
//!
//! let counter = Arc::new(CountingProgressListener::new());
//! let mut support = ProgressEventSupport::new();
//! support.add_listener(counter.clone());
//!
//! support.on_solution_found(1, 0, Duration::from_millis(5));
//! assert_eq!(counter.solution_count(), 1);
//! ```

use std::fmt::Debug;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info};

use crate::backend::SolveStatus;

/// Listener for search progress.
pub trait ProgressListener: Send + Sync + Debug {
    /// Called when a solution is found.
    ///
    /// # Arguments
    ///
    /// * `solution_count` - Solutions found so far, including this one
    /// * `worker` - Index of the worker that found it
    /// * `elapsed` - Time since the search started
    fn on_solution_found(&self, solution_count: u64, worker: usize, elapsed: Duration);

    /// Called once before workers start.
    fn on_search_started(&self, _worker_count: usize) {}

    /// Called periodically by running workers.
    fn on_poll(&self, _elapsed: Duration) {}

    /// Called once after all workers have stopped.
    fn on_search_ended(&self, _status: SolveStatus, _elapsed: Duration) {}
}

/// A listener that ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopProgressListener;

impl ProgressListener for NoopProgressListener {
    fn on_solution_found(&self, _solution_count: u64, _worker: usize, _elapsed: Duration) {}
}

/// Broadcasts events to registered listeners, in registration order.
#[derive(Default)]
pub struct ProgressEventSupport {
    listeners: Vec<Arc<dyn ProgressListener>>,
}

impl ProgressEventSupport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_listener(&mut self, listener: Arc<dyn ProgressListener>) {
        self.listeners.push(listener);
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn has_listeners(&self) -> bool {
        !self.listeners.is_empty()
    }

    pub fn clear_listeners(&mut self) {
        self.listeners.clear();
    }
}

impl Debug for ProgressEventSupport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProgressEventSupport")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl ProgressListener for ProgressEventSupport {
    fn on_solution_found(&self, solution_count: u64, worker: usize, elapsed: Duration) {
        for listener in &self.listeners {
            listener.on_solution_found(solution_count, worker, elapsed);
        }
    }

    fn on_search_started(&self, worker_count: usize) {
        for listener in &self.listeners {
            listener.on_search_started(worker_count);
        }
    }

    fn on_poll(&self, elapsed: Duration) {
        for listener in &self.listeners {
            listener.on_poll(elapsed);
        }
    }

    fn on_search_ended(&self, status: SolveStatus, elapsed: Duration) {
        for listener in &self.listeners {
            listener.on_search_ended(status, elapsed);
        }
    }
}

/// Emits `solution_found` through `tracing`.
///
/// With `verbose` set, search start and end are logged at debug level too.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingProgressListener {
    verbose: bool,
}

impl LoggingProgressListener {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn verbose(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl ProgressListener for LoggingProgressListener {
    fn on_solution_found(&self, solution_count: u64, worker: usize, elapsed: Duration) {
        info!(
            event = "solution_found",
            solution_count,
            worker,
            elapsed_ms = elapsed.as_millis() as u64,
        );
    }

    fn on_search_started(&self, worker_count: usize) {
        if self.verbose {
            debug!(event = "search_started", worker_count);
        }
    }

    fn on_search_ended(&self, status: SolveStatus, elapsed: Duration) {
        if self.verbose {
            debug!(
                event = "search_ended",
                status = %status,
                elapsed_ms = elapsed.as_millis() as u64,
            );
        }
    }
}

/// Counts events. Useful in tests.
#[derive(Debug, Default)]
pub struct CountingProgressListener {
    solutions: AtomicUsize,
    started: AtomicUsize,
    polls: AtomicUsize,
    ended: AtomicUsize,
}

impl CountingProgressListener {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn solution_count(&self) -> usize {
        self.solutions.load(Ordering::SeqCst)
    }

    pub fn started_count(&self) -> usize {
        self.started.load(Ordering::SeqCst)
    }

    pub fn poll_count(&self) -> usize {
        self.polls.load(Ordering::SeqCst)
    }

    pub fn ended_count(&self) -> usize {
        self.ended.load(Ordering::SeqCst)
    }
}

impl ProgressListener for CountingProgressListener {
    fn on_solution_found(&self, _solution_count: u64, _worker: usize, _elapsed: Duration) {
        self.solutions.fetch_add(1, Ordering::SeqCst);
    }

    fn on_search_started(&self, _worker_count: usize) {
        self.started.fetch_add(1, Ordering::SeqCst);
    }

    fn on_poll(&self, _elapsed: Duration) {
        self.polls.fetch_add(1, Ordering::SeqCst);
    }

    fn on_search_ended(&self, _status: SolveStatus, _elapsed: Duration) {
        self.ended.fetch_add(1, Ordering::SeqCst);
    }
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
