//! Tests for the model primitives.

use super::*;
use tripart_core::{Dimensions, Pair, Triple};

#[test]
fn test_add_var_is_idempotent() {
    let mut model = Model::new();
    let a = model.add_var(0, 3);
    let b = model.add_var(1, 3);
    assert_eq!(model.add_var(0, 3), a);
    assert_ne!(a, b);
    assert_eq!(model.variable_count(), 2);
    assert_eq!(model.var_id(1, 3), Some(b));
    assert_eq!(model.var_id(2, 3), None);
}

#[test]
fn test_unknown_variable_rejected() {
    let mut model = Model::new();
    model.add_var(0, 0);
    let err = model
        .add_exactly_one(vec![0, 5], ConstraintKind::Custom)
        .unwrap_err();
    assert!(matches!(err, ModelError::UnknownVariable(5)));
    assert_eq!(model.constraint_count(), 0);
}

#[test]
fn test_constraint_satisfaction() {
    let mut model = Model::new();
    let a = model.add_var(0, 0);
    let b = model.add_var(0, 1);
    let c = model.add_var(0, 2);
    model
        .add_linear_eq(vec![a, b, c], 2, ConstraintKind::Custom)
        .unwrap();
    model
        .add_exactly_one(vec![a, b], ConstraintKind::Custom)
        .unwrap();
    model.add_fixed(c, true, ConstraintKind::Custom).unwrap();

    let good = Assignment::new(vec![true, false, true]);
    assert!(model.violated_constraints(&good).unwrap().is_empty());

    let bad = Assignment::new(vec![true, true, false]);
    assert_eq!(model.violated_constraints(&bad).unwrap(), vec![1, 2]);
}

#[test]
fn test_assignment_size_checked() {
    let mut model = Model::new();
    model.add_var(0, 0);
    let err = model
        .violated_constraints(&Assignment::new(vec![]))
        .unwrap_err();
    assert!(matches!(
        err,
        ModelError::AssignmentSize {
            expected: 1,
            actual: 0
        }
    ));
}

#[test]
fn test_occurrences() {
    let mut model = Model::new();
    let a = model.add_var(0, 0);
    let b = model.add_var(0, 1);
    model
        .add_exactly_one(vec![a, b], ConstraintKind::Custom)
        .unwrap();
    model.add_fixed(b, false, ConstraintKind::Custom).unwrap();

    let occurrences = model.occurrences();
    assert_eq!(occurrences[a].as_slice(), &[0]);
    assert_eq!(occurrences[b].as_slice(), &[0, 1]);
}

#[test]
fn test_decode_orders_triples() {
    let index = CombinatorialIndex::new(Dimensions::for_group_size(2).unwrap());
    let pair = index.pair_index(&Pair::new(0, 1)).unwrap();
    let high = index.triple_index(&Triple::new(5, 6, 7)).unwrap();
    let low = index.triple_index(&Triple::new(2, 3, 4)).unwrap();

    let mut model = Model::new();
    model.add_var(pair, high);
    model.add_var(pair, low);

    let solution = model
        .decode(&index, &Assignment::new(vec![true, true]))
        .unwrap();
    assert_eq!(
        solution.group(pair).triples,
        vec![Triple::new(2, 3, 4), Triple::new(5, 6, 7)]
    );
    assert_eq!(solution.groups().len(), 28);
    assert_eq!(solution.triple_count(), 2);
}

#[test]
fn test_true_vars() {
    let assignment = Assignment::new(vec![false, true, true, false]);
    assert_eq!(assignment.true_vars().collect::<Vec<_>>(), vec![1, 2]);
    assert_eq!(BoolVar { pair: 3, triple: 9 }.to_string(), "x_3_9");
}
