//! Combinatorial index over pairs and triples.
//!
//! Pairs and triples are enumerated in lexicographic order of their sorted
//! elements and receive dense zero-based indices. Downstream components
//! (symmetry breaking, output formatting) rely on this exact order.

use std::collections::HashMap;
use std::fmt;

use crate::dimensions::Dimensions;

/// An element of the universe, in `[0, y)`.
pub type Element = usize;

/// Dense index of a pair, in `[0, C(y, 2))`.
pub type PairIndex = usize;

/// Dense index of a triple, in `[0, C(y, 3))`.
pub type TripleIndex = usize;

/// An unordered 2-subset of elements, stored sorted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pair([Element; 2]);

impl Pair {
    /// Creates a pair, sorting its elements.
    pub fn new(a: Element, b: Element) -> Self {
        if a <= b {
            Self([a, b])
        } else {
            Self([b, a])
        }
    }

    pub fn first(&self) -> Element {
        self.0[0]
    }

    pub fn second(&self) -> Element {
        self.0[1]
    }

    pub fn elements(&self) -> [Element; 2] {
        self.0
    }

    pub fn contains(&self, element: Element) -> bool {
        self.0[0] == element || self.0[1] == element
    }

    /// Returns true if the triple shares no element with this pair.
    pub fn is_disjoint(&self, triple: &Triple) -> bool {
        !triple.contains(self.0[0]) && !triple.contains(self.0[1])
    }
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.0[0], self.0[1])
    }
}

/// An unordered 3-subset of elements, stored sorted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Triple([Element; 3]);

impl Triple {
    /// Creates a triple, sorting its elements.
    pub fn new(a: Element, b: Element, c: Element) -> Self {
        let mut elements = [a, b, c];
        elements.sort_unstable();
        Self(elements)
    }

    pub fn elements(&self) -> [Element; 3] {
        self.0
    }

    pub fn contains(&self, element: Element) -> bool {
        self.0.contains(&element)
    }

    /// Returns true if all three elements are distinct.
    pub fn is_proper(&self) -> bool {
        self.0[0] < self.0[1] && self.0[1] < self.0[2]
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.0[0], self.0[1], self.0[2])
    }
}

/// Dense enumeration of all pairs and triples over `{0..y-1}`.
///
/// # Examples
///
/// ```
/// use tripart_core::{CombinatorialIndex, Dimensions, Pair, Triple};
///
/// let index = CombinatorialIndex::new(Dimensions::for_group_size(1).unwrap());
/// assert_eq!(index.pair_count(), 10);
/// assert_eq!(index.pair(0), Pair::new(0, 1));
/// assert_eq!(index.triple_index(&Triple::new(2, 3, 4)), Some(9));
/// ```
#[derive(Debug, Clone)]
pub struct CombinatorialIndex {
    dims: Dimensions,
    pairs: Vec<Pair>,
    triples: Vec<Triple>,
    pair_lookup: HashMap<Pair, PairIndex>,
    triple_lookup: HashMap<Triple, TripleIndex>,
}

impl CombinatorialIndex {
    /// Enumerates all pairs and triples for the given dimensions.
    pub fn new(dims: Dimensions) -> Self {
        let y = dims.element_count();

        let mut pairs = Vec::with_capacity(dims.pair_count());
        for a in 0..y {
            for b in (a + 1)..y {
                pairs.push(Pair([a, b]));
            }
        }

        let mut triples = Vec::with_capacity(dims.triple_count());
        for a in 0..y {
            for b in (a + 1)..y {
                for c in (b + 1)..y {
                    triples.push(Triple([a, b, c]));
                }
            }
        }

        let pair_lookup = pairs.iter().enumerate().map(|(i, p)| (*p, i)).collect();
        let triple_lookup = triples.iter().enumerate().map(|(i, t)| (*t, i)).collect();

        Self {
            dims,
            pairs,
            triples,
            pair_lookup,
            triple_lookup,
        }
    }

    pub fn dims(&self) -> Dimensions {
        self.dims
    }

    pub fn element_count(&self) -> usize {
        self.dims.element_count()
    }

    pub fn pair_count(&self) -> usize {
        self.pairs.len()
    }

    pub fn triple_count(&self) -> usize {
        self.triples.len()
    }

    /// All pairs in index order.
    pub fn pairs(&self) -> &[Pair] {
        &self.pairs
    }

    /// All triples in index order.
    pub fn triples(&self) -> &[Triple] {
        &self.triples
    }

    /// Returns the pair at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= pair_count()`.
    pub fn pair(&self, index: PairIndex) -> Pair {
        self.pairs[index]
    }

    /// Returns the triple at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= triple_count()`.
    pub fn triple(&self, index: TripleIndex) -> Triple {
        self.triples[index]
    }

    pub fn pair_index(&self, pair: &Pair) -> Option<PairIndex> {
        self.pair_lookup.get(pair).copied()
    }

    pub fn triple_index(&self, triple: &Triple) -> Option<TripleIndex> {
        self.triple_lookup.get(triple).copied()
    }
}

#[cfg(test)]
#[path = "index_tests.rs"]
mod tests;
