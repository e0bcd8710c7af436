//! Search statistics collection and reporting.
//!
//! Workers accumulate counters locally and flush them into the shared
//! collector, so the hot loop never touches an atomic.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Complete statistics for a search run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SolverStatistics {
    /// Total time spent searching.
    pub total_duration: Duration,
    /// Search nodes visited across all workers.
    pub node_count: u64,
    /// Branches undone across all workers.
    pub backtrack_count: u64,
    /// Solutions reported.
    pub solution_count: u64,
    /// Nodes visited by each worker, indexed by worker.
    pub worker_nodes: Vec<u64>,
}

impl SolverStatistics {
    pub fn worker_count(&self) -> usize {
        self.worker_nodes.len()
    }

    /// Nodes per second over the whole run.
    pub fn nodes_per_second(&self) -> f64 {
        let secs = self.total_duration.as_secs_f64();
        if secs == 0.0 {
            0.0
        } else {
            self.node_count as f64 / secs
        }
    }
}

/// Thread-safe collector for search statistics.
///
/// The start time is taken on construction. Call [`into_statistics`] after
/// all workers have finished.
///
/// [`into_statistics`]: StatisticsCollector::into_statistics
#[derive(Debug)]
pub struct StatisticsCollector {
    start_time: Instant,
    nodes: AtomicU64,
    backtracks: AtomicU64,
    solutions: AtomicU64,
    worker_nodes: Mutex<Vec<u64>>,
}

impl StatisticsCollector {
    pub fn new(worker_count: usize) -> Self {
        Self {
            start_time: Instant::now(),
            nodes: AtomicU64::new(0),
            backtracks: AtomicU64::new(0),
            solutions: AtomicU64::new(0),
            worker_nodes: Mutex::new(vec![0; worker_count]),
        }
    }

    /// Adds a worker's locally counted nodes and backtracks.
    pub fn record_work(&self, worker: usize, nodes: u64, backtracks: u64) {
        self.nodes.fetch_add(nodes, Ordering::Relaxed);
        self.backtracks.fetch_add(backtracks, Ordering::Relaxed);
        if let Ok(mut per_worker) = self.worker_nodes.lock() {
            if let Some(slot) = per_worker.get_mut(worker) {
                *slot += nodes;
            }
        }
    }

    /// Records a solution and returns the solution count including it.
    pub fn record_solution(&self) -> u64 {
        self.solutions.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn start_time(&self) -> Instant {
        self.start_time
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    pub fn current_node_count(&self) -> u64 {
        self.nodes.load(Ordering::Relaxed)
    }

    pub fn current_solution_count(&self) -> u64 {
        self.solutions.load(Ordering::SeqCst)
    }

    /// Takes a snapshot without consuming the collector.
    pub fn snapshot(&self) -> SolverStatistics {
        SolverStatistics {
            total_duration: self.start_time.elapsed(),
            node_count: self.nodes.load(Ordering::Relaxed),
            backtrack_count: self.backtracks.load(Ordering::Relaxed),
            solution_count: self.solutions.load(Ordering::SeqCst),
            worker_nodes: self
                .worker_nodes
                .lock()
                .map(|w| w.clone())
                .unwrap_or_default(),
        }
    }

    pub fn into_statistics(self) -> SolverStatistics {
        SolverStatistics {
            total_duration: self.start_time.elapsed(),
            node_count: self.nodes.into_inner(),
            backtrack_count: self.backtracks.into_inner(),
            solution_count: self.solutions.into_inner(),
            worker_nodes: self.worker_nodes.into_inner().unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collector_basic() {
        let collector = StatisticsCollector::new(2);
        collector.record_work(0, 100, 10);
        collector.record_work(1, 50, 5);
        collector.record_work(0, 1, 0);
        assert_eq!(collector.record_solution(), 1);

        let stats = collector.into_statistics();
        assert_eq!(stats.node_count, 151);
        assert_eq!(stats.backtrack_count, 15);
        assert_eq!(stats.solution_count, 1);
        assert_eq!(stats.worker_nodes, vec![101, 50]);
        assert_eq!(stats.worker_count(), 2);
    }

    #[test]
    fn test_unknown_worker_is_counted_in_totals() {
        let collector = StatisticsCollector::new(1);
        collector.record_work(5, 7, 0);
        let stats = collector.snapshot();
        assert_eq!(stats.node_count, 7);
        assert_eq!(stats.worker_nodes, vec![0]);
    }

    #[test]
    fn test_snapshot_does_not_consume() {
        let collector = StatisticsCollector::new(1);
        collector.record_work(0, 3, 1);
        assert_eq!(collector.snapshot().node_count, 3);
        collector.record_work(0, 2, 0);
        assert_eq!(collector.current_node_count(), 5);
    }

    #[test]
    fn test_concurrent_solutions() {
        let collector = StatisticsCollector::new(4);
        rayon::scope(|s| {
            for _ in 0..4 {
                s.spawn(|_| {
                    for _ in 0..25 {
                        collector.record_solution();
                    }
                });
            }
        });
        assert_eq!(collector.current_solution_count(), 100);
    }

    #[test]
    fn test_nodes_per_second_with_zero_duration() {
        let stats = SolverStatistics::default();
        assert_eq!(stats.nodes_per_second(), 0.0);
    }
}
