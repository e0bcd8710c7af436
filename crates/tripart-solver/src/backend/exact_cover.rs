//! Built-in parallel exact-cover backend.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use tracing::{debug, info};
use tripart_config::SolverConfig;
use tripart_model::{Assignment, Model};

use super::search::{CompiledModel, Outcome, SearchControl, Worker};
use super::{SolveResult, SolveStatus, SolverBackend};
use crate::error::SolveError;
use crate::event::ProgressListener;
use crate::statistics::StatisticsCollector;
use crate::termination::Deadline;

/// Seed used when the configuration does not set one.
const DEFAULT_SEED: u64 = 0x7269_7061_7274;

/// Search recurses once per decision.
const WORKER_STACK_SIZE: usize = 64 * 1024 * 1024;

/// Portfolio search over exactly-one constraints.
///
/// Runs `worker_count` complete searches on a dedicated rayon pool. Worker
/// 0 tries candidates in model order; every other worker shuffles them with
/// its own ChaCha RNG seeded from `random_seed + worker`. The first solution
/// stops all workers, as does any worker exhausting its tree, since each one
/// explores the full space.
///
/// A found assignment is reported as [`SolveStatus::Optimal`]: the model has
/// no objective, so any solution is as good as another.
///
/// # Examples
///
/// ```
/// use tripart_config::SolverConfig;
/// use tripart_core::{CombinatorialIndex, Dimensions, Incidence};
/// use tripart_model::ModelBuilder;
/// use tripart_solver::event::NoopProgressListener;
/// use tripart_solver::{ExactCoverBackend, SolveStatus, SolverBackend};
///
/// let index = CombinatorialIndex::new(Dimensions::for_group_size(1).unwrap());
/// let incidence = Incidence::build(&index);
/// let model = ModelBuilder::new(&index, &incidence).build().unwrap();
///
/// let config = SolverConfig::default().with_worker_count(1);
/// let result = ExactCoverBackend::new()
///     .solve(&model, &config, &NoopProgressListener)
///     .unwrap();
/// assert_eq!(result.status, SolveStatus::Optimal);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactCoverBackend;

impl ExactCoverBackend {
    pub fn new() -> Self {
        Self
    }
}

impl SolverBackend for ExactCoverBackend {
    fn name(&self) -> &str {
        "exact-cover"
    }

    fn solve(
        &self,
        model: &Model,
        config: &SolverConfig,
        listener: &dyn ProgressListener,
    ) -> Result<SolveResult, SolveError> {
        let worker_count = config.worker_count.resolve();
        let time_limit = config.time_limit();
        let seed = config.random_seed.unwrap_or(DEFAULT_SEED);

        info!(
            event = "solve_start",
            backend = self.name(),
            worker_count,
            variable_count = model.variable_count(),
            constraint_count = model.constraint_count(),
            time_limit_secs = time_limit.map(|d| d.as_secs_f64()),
        );

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(worker_count)
            .stack_size(WORKER_STACK_SIZE)
            .thread_name(|i| format!("tripart-worker-{}", i))
            .build()?;

        let compiled = CompiledModel::new(model);
        let statistics = StatisticsCollector::new(worker_count);
        let control = SearchControl::new(
            Deadline::new(statistics.start_time(), time_limit),
            listener,
            &statistics,
        );

        listener.on_search_started(worker_count);
        let outcomes: Vec<Outcome> = pool.install(|| {
            (0..worker_count)
                .into_par_iter()
                .with_max_len(1)
                .map(|id| {
                    let rng = (id > 0).then(|| ChaCha8Rng::seed_from_u64(seed.wrapping_add(id as u64)));
                    let report =
                        Worker::new(id, &compiled, &control, config.search_strategy, rng).run();
                    statistics.record_work(id, report.nodes, report.backtracks);
                    if config.log_search_progress {
                        debug!(
                            event = "worker_end",
                            worker = id,
                            outcome = ?report.outcome,
                            node_count = report.nodes,
                            backtrack_count = report.backtracks,
                        );
                    }
                    report.outcome
                })
                .collect()
        });

        let timed_out = control.timed_out();
        let solution = control.into_solution();
        let status = match &solution {
            Some(_) => SolveStatus::Optimal,
            None if outcomes.contains(&Outcome::Exhausted) => SolveStatus::Infeasible,
            None => SolveStatus::TimeLimitNoSolution,
        };
        listener.on_search_ended(status, statistics.elapsed());

        let statistics = statistics.into_statistics();
        info!(
            event = "solve_end",
            status = %status,
            duration_ms = statistics.total_duration.as_millis() as u64,
            node_count = statistics.node_count,
            backtrack_count = statistics.backtrack_count,
            winning_worker = solution.as_ref().map(|(worker, _)| *worker),
            timed_out,
        );

        Ok(SolveResult {
            status,
            assignment: solution.map(|(_, values)| Assignment::new(values)),
            statistics,
        })
    }
}
