//! Depth-first exact-cover search with trail-based undo.
//!
//! Every constraint keeps two counters, the number of its variables set true
//! and the number still open. Assigning a variable updates the counters of
//! the constraints it occurs in and queues them for propagation:
//!
//! - exactly-one: fails above one true or with nothing left to make true;
//!   one true closes the rest, a single open candidate is forced true
//! - `sum == k`: fails unless `true <= k <= true + open`; reaching either
//!   bound forces the open variables
//! - fixed: forces its variable
//!
//! Branching happens on open exactly-one constraints. Undo pops the trail
//! back to a mark and restores the counters.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};

use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use tripart_config::SearchStrategy;
use tripart_model::{Constraint, Model, Occurrences, VarId};

use crate::event::ProgressListener;
use crate::statistics::StatisticsCollector;
use crate::termination::Deadline;

const UNASSIGNED: i8 = -1;

/// Nodes between deadline checks and listener polls.
const POLL_INTERVAL: u64 = 1024;

#[derive(Debug, Clone, Copy)]
enum Rule {
    ExactlyOne,
    Sum(usize),
    Fixed(bool),
}

/// Read-only view of a model shared by all workers.
#[derive(Debug)]
pub(crate) struct CompiledModel<'m> {
    vars: Vec<&'m [VarId]>,
    rules: Vec<Rule>,
    occurrences: Vec<Occurrences>,
    exactly_one: Vec<usize>,
}

impl<'m> CompiledModel<'m> {
    pub(crate) fn new(model: &'m Model) -> Self {
        let mut vars = Vec::with_capacity(model.constraint_count());
        let mut rules = Vec::with_capacity(model.constraint_count());
        let mut exactly_one = Vec::new();
        for (ci, constraint) in model.constraints().iter().enumerate() {
            let rule = match constraint {
                Constraint::LinearEq { rhs, .. } => Rule::Sum(*rhs),
                Constraint::ExactlyOne { .. } => {
                    exactly_one.push(ci);
                    Rule::ExactlyOne
                }
                Constraint::Fixed { value, .. } => Rule::Fixed(*value),
            };
            vars.push(constraint.vars());
            rules.push(rule);
        }
        Self {
            vars,
            rules,
            occurrences: model.occurrences(),
            exactly_one,
        }
    }

    fn var_count(&self) -> usize {
        self.occurrences.len()
    }

    fn constraint_count(&self) -> usize {
        self.rules.len()
    }
}

/// State shared by the workers of one solve.
pub(crate) struct SearchControl<'a> {
    stop: AtomicBool,
    timed_out: AtomicBool,
    deadline: Deadline,
    listener: &'a dyn ProgressListener,
    statistics: &'a StatisticsCollector,
    solution: Mutex<Option<(usize, Vec<bool>)>>,
}

impl<'a> SearchControl<'a> {
    pub(crate) fn new(
        deadline: Deadline,
        listener: &'a dyn ProgressListener,
        statistics: &'a StatisticsCollector,
    ) -> Self {
        Self {
            stop: AtomicBool::new(false),
            timed_out: AtomicBool::new(false),
            deadline,
            listener,
            statistics,
            solution: Mutex::new(None),
        }
    }

    fn should_stop(&self) -> bool {
        self.stop.load(Ordering::Relaxed)
    }

    pub(crate) fn request_stop(&self) {
        self.stop.store(true, Ordering::SeqCst);
    }

    /// Checks the deadline and lets listeners poll. Returns true if the
    /// worker must stop.
    fn poll(&self) -> bool {
        if self.deadline.is_reached() {
            self.timed_out.store(true, Ordering::SeqCst);
            self.request_stop();
        }
        self.listener.on_poll(self.deadline.elapsed());
        self.should_stop()
    }

    /// Keeps the first submitted solution and stops everyone.
    fn submit(&self, worker: usize, values: Vec<bool>) {
        let accepted = {
            let mut slot = self
                .solution
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            if slot.is_none() {
                *slot = Some((worker, values));
                true
            } else {
                false
            }
        };
        self.request_stop();
        if accepted {
            let count = self.statistics.record_solution();
            self.listener
                .on_solution_found(count, worker, self.deadline.elapsed());
        }
    }

    pub(crate) fn timed_out(&self) -> bool {
        self.timed_out.load(Ordering::SeqCst)
    }

    /// The winning worker and its values, if any.
    pub(crate) fn into_solution(self) -> Option<(usize, Vec<bool>)> {
        self.solution
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

/// How a worker's search ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Outcome {
    Found,
    /// The whole tree was explored without a solution.
    Exhausted,
    Stopped,
}

enum Branch {
    Candidates(Vec<VarId>),
    Variable(VarId),
}

/// One search over the whole tree.
pub(crate) struct Worker<'a> {
    id: usize,
    model: &'a CompiledModel<'a>,
    control: &'a SearchControl<'a>,
    strategy: SearchStrategy,
    rng: Option<ChaCha8Rng>,
    values: Vec<i8>,
    true_count: Vec<usize>,
    open_count: Vec<usize>,
    trail: Vec<VarId>,
    queue: Vec<usize>,
    nodes: u64,
    backtracks: u64,
}

/// What a finished worker reports.
#[derive(Debug, Clone, Copy)]
pub(crate) struct WorkerReport {
    pub outcome: Outcome,
    pub nodes: u64,
    pub backtracks: u64,
}

impl<'a> Worker<'a> {
    /// Creates a worker. Without `rng` candidates are tried in model order.
    pub(crate) fn new(
        id: usize,
        model: &'a CompiledModel<'a>,
        control: &'a SearchControl<'a>,
        strategy: SearchStrategy,
        rng: Option<ChaCha8Rng>,
    ) -> Self {
        Self {
            id,
            model,
            control,
            strategy,
            rng,
            values: vec![UNASSIGNED; model.var_count()],
            true_count: vec![0; model.constraint_count()],
            open_count: model.vars.iter().map(|v| v.len()).collect(),
            trail: Vec::with_capacity(model.var_count()),
            queue: Vec::new(),
            nodes: 0,
            backtracks: 0,
        }
    }

    pub(crate) fn run(mut self) -> WorkerReport {
        self.queue.extend((0..self.model.constraint_count()).rev());
        let outcome = if self.propagate() {
            self.search()
        } else {
            Outcome::Exhausted
        };

        match outcome {
            Outcome::Found => {
                let values = self.values.iter().map(|&v| v == 1).collect();
                self.control.submit(self.id, values);
            }
            // A complete search proves infeasibility for everyone.
            Outcome::Exhausted => self.control.request_stop(),
            Outcome::Stopped => {}
        }

        WorkerReport {
            outcome,
            nodes: self.nodes,
            backtracks: self.backtracks,
        }
    }

    fn search(&mut self) -> Outcome {
        if self.control.should_stop() {
            return Outcome::Stopped;
        }
        self.nodes += 1;
        if (self.nodes == 1 || self.nodes % POLL_INTERVAL == 0) && self.control.poll() {
            return Outcome::Stopped;
        }

        match self.choose_branch() {
            None => Outcome::Found,
            Some(Branch::Candidates(candidates)) => self.branch_on_candidates(&candidates),
            Some(Branch::Variable(var)) => self.branch_on_variable(var),
        }
    }

    /// Tries each candidate as the true member of its constraint. A failed
    /// candidate is set false before the next one is tried.
    fn branch_on_candidates(&mut self, candidates: &[VarId]) -> Outcome {
        let mark = self.trail.len();
        for &var in candidates {
            let inner = self.trail.len();
            if self.assign(var, true) && self.propagate() {
                match self.search() {
                    Outcome::Exhausted => {}
                    done => return done,
                }
            }
            self.undo(inner);
            self.backtracks += 1;
            if !(self.assign(var, false) && self.propagate()) {
                break;
            }
        }
        self.undo(mark);
        Outcome::Exhausted
    }

    fn branch_on_variable(&mut self, var: VarId) -> Outcome {
        for value in [true, false] {
            let mark = self.trail.len();
            if self.assign(var, value) && self.propagate() {
                match self.search() {
                    Outcome::Exhausted => {}
                    done => return done,
                }
            }
            self.undo(mark);
            self.backtracks += 1;
        }
        Outcome::Exhausted
    }

    fn choose_branch(&mut self) -> Option<Branch> {
        let model = self.model;
        let mut best: Option<(usize, usize)> = None;
        for &ci in &model.exactly_one {
            if self.true_count[ci] > 0 {
                continue;
            }
            let open = self.open_count[ci];
            match self.strategy {
                SearchStrategy::FixedOrder => {
                    best = Some((ci, open));
                    break;
                }
                SearchStrategy::Automatic => {
                    if best.map_or(true, |(_, fewest)| open < fewest) {
                        best = Some((ci, open));
                        // Propagation leaves at least two open candidates.
                        if open <= 2 {
                            break;
                        }
                    }
                }
            }
        }

        if let Some((ci, _)) = best {
            let mut candidates: Vec<VarId> = model.vars[ci]
                .iter()
                .copied()
                .filter(|&v| self.values[v] == UNASSIGNED)
                .collect();
            if let Some(rng) = self.rng.as_mut() {
                candidates.shuffle(rng);
            }
            return Some(Branch::Candidates(candidates));
        }

        // Variables outside every exactly-one constraint.
        self.values
            .iter()
            .position(|&v| v == UNASSIGNED)
            .map(Branch::Variable)
    }

    /// Sets `var`. Returns false if it already holds the other value.
    fn assign(&mut self, var: VarId, value: bool) -> bool {
        let current = self.values[var];
        if current != UNASSIGNED {
            return (current == 1) == value;
        }
        self.values[var] = i8::from(value);
        self.trail.push(var);

        let model = self.model;
        for &ci in &model.occurrences[var] {
            self.open_count[ci] -= 1;
            if value {
                self.true_count[ci] += 1;
            }
            self.queue.push(ci);
        }
        true
    }

    fn undo(&mut self, mark: usize) {
        let model = self.model;
        while self.trail.len() > mark {
            let Some(var) = self.trail.pop() else { break };
            let was_true = self.values[var] == 1;
            for &ci in &model.occurrences[var] {
                self.open_count[ci] += 1;
                if was_true {
                    self.true_count[ci] -= 1;
                }
            }
            self.values[var] = UNASSIGNED;
        }
    }

    fn propagate(&mut self) -> bool {
        let model = self.model;
        while let Some(ci) = self.queue.pop() {
            let t = self.true_count[ci];
            let open = self.open_count[ci];
            let forced = match model.rules[ci] {
                Rule::ExactlyOne => {
                    if t > 1 || t + open == 0 {
                        return self.fail();
                    }
                    match (t, open) {
                        (1, o) if o > 0 => Some(false),
                        (0, 1) => Some(true),
                        _ => None,
                    }
                }
                Rule::Sum(k) => {
                    if t > k || t + open < k {
                        return self.fail();
                    }
                    if open == 0 {
                        None
                    } else if t == k {
                        Some(false)
                    } else if t + open == k {
                        Some(true)
                    } else {
                        None
                    }
                }
                Rule::Fixed(value) => {
                    for &var in model.vars[ci] {
                        if !self.assign(var, value) {
                            return self.fail();
                        }
                    }
                    None
                }
            };

            if let Some(value) = forced {
                for &var in model.vars[ci] {
                    if self.values[var] == UNASSIGNED {
                        self.assign(var, value);
                    }
                }
            }
        }
        true
    }

    fn fail(&mut self) -> bool {
        self.queue.clear();
        false
    }
}
