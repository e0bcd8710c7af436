//! Derives the constraint model from the incidence relations.

use tracing::{debug, info};
use tripart_core::{CombinatorialIndex, Dimensions, Incidence, Pair, Triple};

use crate::error::Result;
use crate::model::{ConstraintKind, Model};

/// The canonical group pinned to pair (0, 1) by symmetry breaking:
/// consecutive blocks `(2, 3, 4), (5, 6, 7), ...`, at most `g` of them and
/// only those that fit inside the universe.
///
/// # Examples
///
/// ```
/// use tripart_core::{Dimensions, Triple};
/// use tripart_model::canonical_group;
///
/// let dims = Dimensions::for_group_size(2).unwrap();
/// assert_eq!(
///     canonical_group(dims),
///     vec![Triple::new(2, 3, 4), Triple::new(5, 6, 7)]
/// );
/// ```
pub fn canonical_group(dims: Dimensions) -> Vec<Triple> {
    (0..dims.group_size())
        .map(|i| 2 + 3 * i)
        .take_while(|&start| start + 2 < dims.element_count())
        .map(|start| Triple::new(start, start + 1, start + 2))
        .collect()
}

/// Builds a [`Model`] for one universe.
///
/// # Examples
///
/// ```
/// use tripart_core::{CombinatorialIndex, Dimensions, Incidence};
/// use tripart_model::ModelBuilder;
///
/// let index = CombinatorialIndex::new(Dimensions::for_group_size(1).unwrap());
/// let incidence = Incidence::build(&index);
/// let model = ModelBuilder::new(&index, &incidence).build().unwrap();
///
/// assert_eq!(model.variable_count(), 10);
/// assert_eq!(model.summary().symmetry_breaking, 1);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ModelBuilder<'a> {
    index: &'a CombinatorialIndex,
    incidence: &'a Incidence,
    symmetry_breaking: bool,
}

impl<'a> ModelBuilder<'a> {
    /// Creates a builder with symmetry breaking enabled.
    pub fn new(index: &'a CombinatorialIndex, incidence: &'a Incidence) -> Self {
        Self {
            index,
            incidence,
            symmetry_breaking: true,
        }
    }

    /// Enables or disables the symmetry-breaking constraint.
    pub fn symmetry_breaking(mut self, enabled: bool) -> Self {
        self.symmetry_breaking = enabled;
        self
    }

    /// Creates variables and all constraints.
    ///
    /// Never fails on an infeasible universe: a pair with too few admissible
    /// triples yields an unsatisfiable group-size constraint, which the
    /// solver reports as infeasibility.
    pub fn build(&self) -> Result<Model> {
        let index = self.index;
        let incidence = self.incidence;
        let g = index.dims().group_size();
        let mut model = Model::new();

        // Variables in pair-major, triple-minor order.
        let mut pair_vars = Vec::with_capacity(index.pair_count());
        for pi in 0..index.pair_count() {
            let vars: Vec<_> = incidence
                .triples_for_pair(pi)
                .iter()
                .map(|&ti| model.add_var(pi, ti))
                .collect();
            pair_vars.push(vars);
        }
        debug!(
            event = "variables_created",
            variable_count = model.variable_count()
        );

        for (pi, vars) in pair_vars.into_iter().enumerate() {
            model.add_linear_eq(vars, g, ConstraintKind::GroupSize { pair: pi })?;
        }

        for (pi, element, triples) in incidence.coverage_entries() {
            let vars = triples.iter().map(|&ti| model.add_var(pi, ti)).collect();
            model.add_exactly_one(vars, ConstraintKind::ElementCoverage { pair: pi, element })?;
        }

        for ti in 0..index.triple_count() {
            let pairs = incidence.pairs_for_triple(ti);
            if pairs.is_empty() {
                continue;
            }
            let vars = pairs.iter().map(|&pi| model.add_var(pi, ti)).collect();
            model.add_exactly_one(vars, ConstraintKind::TripleCover { triple: ti })?;
        }

        if self.symmetry_breaking {
            self.add_symmetry_breaking(&mut model)?;
        }

        let summary = model.summary();
        info!(
            event = "model_built",
            variable_count = summary.variables,
            constraint_count = summary.constraint_count(),
            fixed_count = summary.symmetry_breaking,
        );
        Ok(model)
    }

    fn add_symmetry_breaking(&self, model: &mut Model) -> Result<()> {
        let Some(pi) = self.index.pair_index(&Pair::new(0, 1)) else {
            return Ok(());
        };
        for triple in canonical_group(self.index.dims()) {
            let Some(ti) = self.index.triple_index(&triple) else {
                continue;
            };
            if let Some(var) = model.var_id(pi, ti) {
                model.add_fixed(var, true, ConstraintKind::SymmetryBreaking)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "builder_tests.rs"]
mod tests;
