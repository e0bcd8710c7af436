//! Boolean variables, constraints and assignments.

use std::collections::HashMap;
use std::fmt;

use smallvec::SmallVec;
use tripart_core::{CombinatorialIndex, Element, Group, PairIndex, Solution, TripleIndex};

use crate::error::{ModelError, Result};

/// Dense identifier of a model variable.
pub type VarId = usize;

/// Constraint indices a single variable takes part in.
///
/// A standard model places each variable in one group-size, three
/// element-coverage and one triple-cover constraint, plus at most one fix.
pub type Occurrences = SmallVec<[usize; 6]>;

/// A boolean decision: does `triple` belong to the group omitting `pair`?
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoolVar {
    pub pair: PairIndex,
    pub triple: TripleIndex,
}

impl fmt::Display for BoolVar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x_{}_{}", self.pair, self.triple)
    }
}

/// Why a constraint exists. Used for statistics and diagnostics only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstraintKind {
    GroupSize { pair: PairIndex },
    ElementCoverage { pair: PairIndex, element: Element },
    TripleCover { triple: TripleIndex },
    SymmetryBreaking,
    Custom,
}

/// A constraint over boolean variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Constraint {
    /// `sum(vars) == rhs`
    LinearEq {
        vars: Vec<VarId>,
        rhs: usize,
        kind: ConstraintKind,
    },
    /// Exactly one of `vars` is true.
    ExactlyOne {
        vars: Vec<VarId>,
        kind: ConstraintKind,
    },
    /// `var == value`
    Fixed {
        var: VarId,
        value: bool,
        kind: ConstraintKind,
    },
}

impl Constraint {
    pub fn kind(&self) -> ConstraintKind {
        match self {
            Constraint::LinearEq { kind, .. }
            | Constraint::ExactlyOne { kind, .. }
            | Constraint::Fixed { kind, .. } => *kind,
        }
    }

    /// Variables the constraint ranges over.
    pub fn vars(&self) -> &[VarId] {
        match self {
            Constraint::LinearEq { vars, .. } | Constraint::ExactlyOne { vars, .. } => vars,
            Constraint::Fixed { var, .. } => std::slice::from_ref(var),
        }
    }

    /// Checks the constraint against a complete assignment.
    pub fn is_satisfied_by(&self, assignment: &Assignment) -> bool {
        let true_count = || self.vars().iter().filter(|&&v| assignment.value(v)).count();
        match self {
            Constraint::LinearEq { rhs, .. } => true_count() == *rhs,
            Constraint::ExactlyOne { .. } => true_count() == 1,
            Constraint::Fixed { var, value, .. } => assignment.value(*var) == *value,
        }
    }
}

/// Constraint counts by kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModelSummary {
    pub variables: usize,
    pub group_size: usize,
    pub element_coverage: usize,
    pub triple_cover: usize,
    pub symmetry_breaking: usize,
    pub custom: usize,
}

impl ModelSummary {
    pub fn constraint_count(&self) -> usize {
        self.group_size
            + self.element_coverage
            + self.triple_cover
            + self.symmetry_breaking
            + self.custom
    }
}

/// A boolean assignment problem.
///
/// Variables are keyed by (pair index, triple index). The model is built
/// once and is immutable from the solver's point of view.
#[derive(Debug, Clone, Default)]
pub struct Model {
    vars: Vec<BoolVar>,
    lookup: HashMap<(PairIndex, TripleIndex), VarId>,
    constraints: Vec<Constraint>,
}

impl Model {
    /// Creates an empty model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the variable for `(pair, triple)`, returning the existing id if
    /// it was already added.
    pub fn add_var(&mut self, pair: PairIndex, triple: TripleIndex) -> VarId {
        if let Some(&id) = self.lookup.get(&(pair, triple)) {
            return id;
        }
        let id = self.vars.len();
        self.vars.push(BoolVar { pair, triple });
        self.lookup.insert((pair, triple), id);
        id
    }

    /// Adds `sum(vars) == rhs`.
    pub fn add_linear_eq(
        &mut self,
        vars: Vec<VarId>,
        rhs: usize,
        kind: ConstraintKind,
    ) -> Result<usize> {
        self.check_vars(&vars)?;
        Ok(self.push(Constraint::LinearEq { vars, rhs, kind }))
    }

    /// Adds an exactly-one constraint over `vars`.
    pub fn add_exactly_one(&mut self, vars: Vec<VarId>, kind: ConstraintKind) -> Result<usize> {
        self.check_vars(&vars)?;
        Ok(self.push(Constraint::ExactlyOne { vars, kind }))
    }

    /// Fixes `var` to `value`.
    pub fn add_fixed(&mut self, var: VarId, value: bool, kind: ConstraintKind) -> Result<usize> {
        self.check_vars(std::slice::from_ref(&var))?;
        Ok(self.push(Constraint::Fixed { var, value, kind }))
    }

    fn check_vars(&self, vars: &[VarId]) -> Result<()> {
        match vars.iter().find(|&&v| v >= self.vars.len()) {
            Some(&v) => Err(ModelError::UnknownVariable(v)),
            None => Ok(()),
        }
    }

    fn push(&mut self, constraint: Constraint) -> usize {
        self.constraints.push(constraint);
        self.constraints.len() - 1
    }

    pub fn variable_count(&self) -> usize {
        self.vars.len()
    }

    pub fn constraint_count(&self) -> usize {
        self.constraints.len()
    }

    pub fn var(&self, id: VarId) -> Option<&BoolVar> {
        self.vars.get(id)
    }

    pub fn vars(&self) -> &[BoolVar] {
        &self.vars
    }

    pub fn var_id(&self, pair: PairIndex, triple: TripleIndex) -> Option<VarId> {
        self.lookup.get(&(pair, triple)).copied()
    }

    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    /// For each variable, the indices of the constraints it appears in.
    pub fn occurrences(&self) -> Vec<Occurrences> {
        let mut occurrences = vec![Occurrences::new(); self.vars.len()];
        for (ci, constraint) in self.constraints.iter().enumerate() {
            for &v in constraint.vars() {
                occurrences[v].push(ci);
            }
        }
        occurrences
    }

    /// Counts variables and constraints by kind.
    pub fn summary(&self) -> ModelSummary {
        let mut summary = ModelSummary {
            variables: self.vars.len(),
            ..ModelSummary::default()
        };
        for constraint in &self.constraints {
            match constraint.kind() {
                ConstraintKind::GroupSize { .. } => summary.group_size += 1,
                ConstraintKind::ElementCoverage { .. } => summary.element_coverage += 1,
                ConstraintKind::TripleCover { .. } => summary.triple_cover += 1,
                ConstraintKind::SymmetryBreaking => summary.symmetry_breaking += 1,
                ConstraintKind::Custom => summary.custom += 1,
            }
        }
        summary
    }

    /// Returns the indices of constraints the assignment violates.
    pub fn violated_constraints(&self, assignment: &Assignment) -> Result<Vec<usize>> {
        self.check_assignment(assignment)?;
        Ok(self
            .constraints
            .iter()
            .enumerate()
            .filter(|(_, c)| !c.is_satisfied_by(assignment))
            .map(|(i, _)| i)
            .collect())
    }

    fn check_assignment(&self, assignment: &Assignment) -> Result<()> {
        if assignment.len() != self.vars.len() {
            return Err(ModelError::AssignmentSize {
                expected: self.vars.len(),
                actual: assignment.len(),
            });
        }
        Ok(())
    }

    /// Turns an assignment into a pair-to-group solution.
    ///
    /// Groups come out in pair index order with triples ascending by triple
    /// index, so rendering the result is deterministic.
    pub fn decode(&self, index: &CombinatorialIndex, assignment: &Assignment) -> Result<Solution> {
        self.check_assignment(assignment)?;

        let mut members: Vec<Vec<TripleIndex>> = vec![Vec::new(); index.pair_count()];
        for (id, var) in self.vars.iter().enumerate() {
            if !assignment.value(id) {
                continue;
            }
            if var.pair >= index.pair_count() || var.triple >= index.triple_count() {
                return Err(ModelError::OutOfIndex {
                    var: id,
                    pair: var.pair,
                    triple: var.triple,
                });
            }
            members[var.pair].push(var.triple);
        }

        let groups = members
            .into_iter()
            .enumerate()
            .map(|(pi, mut triples)| {
                triples.sort_unstable();
                Group::new(
                    index.pair(pi),
                    triples.into_iter().map(|ti| index.triple(ti)).collect(),
                )
            })
            .collect();

        Ok(Solution::new(index.dims(), groups)?)
    }
}

/// One boolean value per model variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    values: Vec<bool>,
}

impl Assignment {
    pub fn new(values: Vec<bool>) -> Self {
        Self { values }
    }

    /// # Panics
    ///
    /// Panics if `var` is out of range.
    pub fn value(&self, var: VarId) -> bool {
        self.values[var]
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Ids of the variables set to true.
    pub fn true_vars(&self) -> impl Iterator<Item = VarId> + '_ {
        self.values
            .iter()
            .enumerate()
            .filter(|(_, &v)| v)
            .map(|(i, _)| i)
    }

    pub fn values(&self) -> &[bool] {
        &self.values
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
