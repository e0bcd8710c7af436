//! Incidence relations between pairs and admissible triples.
//!
//! A triple is admissible for a pair when the two share no element. All three
//! derived relations are built in one pass over every (pair, triple)
//! combination:
//!
//! - `triples_for_pair[pi]`: admissible triples of pair `pi`
//! - `pairs_for_triple[ti]`: pairs for which triple `ti` is admissible
//! - `coverage[(pi, e)]`: admissible triples of `pi` that contain element `e`
//!
//! The pass costs `O(P * T)` constant-time checks and dominates model
//! construction time.

use crate::index::{CombinatorialIndex, Element, PairIndex, TripleIndex};

/// Precomputed admissibility relations for one universe.
#[derive(Debug, Clone)]
pub struct Incidence {
    element_count: usize,
    triples_for_pair: Vec<Vec<TripleIndex>>,
    pairs_for_triple: Vec<Vec<PairIndex>>,
    // Flattened (pair, element) table, slot `pi * y + e`.
    coverage: Vec<Vec<TripleIndex>>,
    admissible_count: usize,
}

impl Incidence {
    /// Builds all relations from a combinatorial index.
    pub fn build(index: &CombinatorialIndex) -> Self {
        let y = index.element_count();
        let pair_count = index.pair_count();
        let triple_count = index.triple_count();

        let mut triples_for_pair = vec![Vec::new(); pair_count];
        let mut pairs_for_triple = vec![Vec::new(); triple_count];
        let mut coverage = vec![Vec::new(); pair_count * y];
        let mut admissible_count = 0;

        for (pi, pair) in index.pairs().iter().enumerate() {
            for (ti, triple) in index.triples().iter().enumerate() {
                if !pair.is_disjoint(triple) {
                    continue;
                }
                admissible_count += 1;
                triples_for_pair[pi].push(ti);
                pairs_for_triple[ti].push(pi);
                for e in triple.elements() {
                    coverage[pi * y + e].push(ti);
                }
            }
        }

        Self {
            element_count: y,
            triples_for_pair,
            pairs_for_triple,
            coverage,
            admissible_count,
        }
    }

    /// Admissible triples of a pair, ascending by triple index.
    pub fn triples_for_pair(&self, pair: PairIndex) -> &[TripleIndex] {
        &self.triples_for_pair[pair]
    }

    /// Pairs for which a triple is admissible, ascending by pair index.
    pub fn pairs_for_triple(&self, triple: TripleIndex) -> &[PairIndex] {
        &self.pairs_for_triple[triple]
    }

    /// Admissible triples of `pair` that contain `element`.
    ///
    /// Empty when `element` belongs to the pair itself.
    pub fn coverage(&self, pair: PairIndex, element: Element) -> &[TripleIndex] {
        &self.coverage[pair * self.element_count + element]
    }

    /// Iterates over every non-empty `(pair, element)` coverage entry in
    /// pair-major, element-minor order.
    pub fn coverage_entries(
        &self,
    ) -> impl Iterator<Item = (PairIndex, Element, &[TripleIndex])> + '_ {
        let y = self.element_count;
        self.coverage
            .iter()
            .enumerate()
            .filter(|(_, triples)| !triples.is_empty())
            .map(move |(slot, triples)| (slot / y, slot % y, triples.as_slice()))
    }

    /// Number of non-empty coverage entries.
    pub fn coverage_key_count(&self) -> usize {
        self.coverage.iter().filter(|t| !t.is_empty()).count()
    }

    /// Returns true if `triple` is admissible for `pair`.
    pub fn is_admissible(&self, pair: PairIndex, triple: TripleIndex) -> bool {
        self.triples_for_pair[pair].binary_search(&triple).is_ok()
    }

    /// Total number of admissible (pair, triple) combinations.
    pub fn admissible_count(&self) -> usize {
        self.admissible_count
    }

    pub fn pair_count(&self) -> usize {
        self.triples_for_pair.len()
    }

    pub fn triple_count(&self) -> usize {
        self.pairs_for_triple.len()
    }
}

#[cfg(test)]
#[path = "incidence_tests.rs"]
mod tests;
