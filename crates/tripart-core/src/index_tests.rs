//! Tests for the combinatorial index.

use std::collections::HashSet;

use super::*;
use crate::dimensions::binomial;

fn index_for(g: usize) -> CombinatorialIndex {
    CombinatorialIndex::new(Dimensions::for_group_size(g).unwrap())
}

#[test]
fn test_counts_match_binomials() {
    for g in 1..6 {
        let index = index_for(g);
        let y = 3 * g + 2;
        assert_eq!(index.pair_count(), binomial(y, 2));
        assert_eq!(index.triple_count(), binomial(y, 3));
    }
}

#[test]
fn test_no_duplicates() {
    let index = index_for(3);
    let pairs: HashSet<_> = index.pairs().iter().collect();
    let triples: HashSet<_> = index.triples().iter().collect();
    assert_eq!(pairs.len(), index.pair_count());
    assert_eq!(triples.len(), index.triple_count());
}

#[test]
fn test_inverse_lookup_is_consistent() {
    let index = index_for(2);
    for (i, pair) in index.pairs().iter().enumerate() {
        assert_eq!(index.pair_index(pair), Some(i));
    }
    for (i, triple) in index.triples().iter().enumerate() {
        assert_eq!(index.triple_index(triple), Some(i));
    }
}

#[test]
fn test_enumeration_is_lexicographic() {
    let index = index_for(2);
    assert!(index.pairs().windows(2).all(|w| w[0] < w[1]));
    assert!(index.triples().windows(2).all(|w| w[0] < w[1]));
    assert_eq!(index.pair(0), Pair::new(0, 1));
    assert_eq!(index.pair(1), Pair::new(0, 2));
    assert_eq!(index.triple(0), Triple::new(0, 1, 2));
    assert_eq!(index.triple(1), Triple::new(0, 1, 3));
}

#[test]
fn test_unknown_members_not_found() {
    let index = index_for(1);
    assert_eq!(index.pair_index(&Pair::new(0, 5)), None);
    assert_eq!(index.triple_index(&Triple::new(1, 1, 2)), None);
}

#[test]
fn test_pair_and_triple_normalize_order() {
    assert_eq!(Pair::new(4, 1), Pair::new(1, 4));
    assert_eq!(Triple::new(7, 2, 5).elements(), [2, 5, 7]);
    assert!(Triple::new(1, 2, 3).is_proper());
    assert!(!Triple::new(1, 1, 3).is_proper());
}

#[test]
fn test_disjointness() {
    let pair = Pair::new(0, 1);
    assert!(pair.is_disjoint(&Triple::new(2, 3, 4)));
    assert!(!pair.is_disjoint(&Triple::new(1, 3, 4)));
    assert!(pair.contains(1));
    assert!(!pair.contains(2));
}

#[test]
fn test_display_matches_tuple_layout() {
    assert_eq!(Pair::new(3, 0).to_string(), "(0, 3)");
    assert_eq!(Triple::new(4, 2, 3).to_string(), "(2, 3, 4)");
}
