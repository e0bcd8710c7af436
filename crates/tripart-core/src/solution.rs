//! The partition produced by a solver: one group per pair.

use crate::dimensions::Dimensions;
use crate::error::{Result, TripartError};
use crate::index::{Pair, PairIndex, Triple};

/// The triples assigned to a single omitted pair.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Group {
    /// The pair whose elements no triple of this group may contain.
    pub omitted: Pair,
    /// Assigned triples, ascending.
    pub triples: Vec<Triple>,
}

impl Group {
    pub fn new(omitted: Pair, mut triples: Vec<Triple>) -> Self {
        triples.sort_unstable();
        Self { omitted, triples }
    }

    pub fn len(&self) -> usize {
        self.triples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }
}

/// A complete pair-to-group mapping, groups in pair index order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    dims: Dimensions,
    groups: Vec<Group>,
}

impl Solution {
    /// Creates a solution from groups listed in pair index order.
    ///
    /// # Errors
    ///
    /// Returns [`TripartError::GroupCountMismatch`] unless there is exactly
    /// one group per pair.
    pub fn new(dims: Dimensions, groups: Vec<Group>) -> Result<Self> {
        if groups.len() != dims.pair_count() {
            return Err(TripartError::GroupCountMismatch {
                expected: dims.pair_count(),
                actual: groups.len(),
            });
        }
        Ok(Self { dims, groups })
    }

    pub fn dims(&self) -> Dimensions {
        self.dims
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn group(&self, pair: PairIndex) -> &Group {
        &self.groups[pair]
    }

    /// Total number of triples across all groups.
    pub fn triple_count(&self) -> usize {
        self.groups.iter().map(Group::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_sorts_triples() {
        let group = Group::new(
            Pair::new(0, 1),
            vec![Triple::new(5, 6, 7), Triple::new(2, 3, 4)],
        );
        assert_eq!(group.triples, vec![Triple::new(2, 3, 4), Triple::new(5, 6, 7)]);
        assert_eq!(group.len(), 2);
        assert!(!group.is_empty());
    }

    #[test]
    fn test_solution_requires_one_group_per_pair() {
        let dims = Dimensions::for_group_size(1).unwrap();
        let groups = vec![Group::new(Pair::new(0, 1), vec![Triple::new(2, 3, 4)])];

        let err = Solution::new(dims, groups).unwrap_err();
        assert!(matches!(
            err,
            TripartError::GroupCountMismatch {
                expected: 10,
                actual: 1
            }
        ));
    }

    #[test]
    fn test_triple_count_sums_groups() {
        let dims = Dimensions::custom(1, 3).unwrap();
        let groups = vec![
            Group::new(Pair::new(0, 1), vec![]),
            Group::new(Pair::new(0, 2), vec![]),
            Group::new(Pair::new(1, 2), vec![]),
        ];

        let solution = Solution::new(dims, groups).unwrap();
        assert_eq!(solution.triple_count(), 0);
        assert!(solution.group(2).is_empty());
        assert_eq!(solution.dims(), dims);
    }
}
