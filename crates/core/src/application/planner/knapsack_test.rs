//! Unit tests for the knapsack solver

use super::knapsack::{solve, KnapsackItem, KnapsackSolution, MAX_CAPACITY};
use crate::domain::DomainError;

fn items(pairs: &[(u64, u64)]) -> Vec<KnapsackItem> {
    pairs
        .iter()
        .map(|&(weight, value)| KnapsackItem { weight, value })
        .collect()
}

#[test]
fn empty_item_set_yields_zero() {
    for capacity in [0, 1, 100] {
        let solution = solve(capacity, &[]).unwrap();
        assert_eq!(solution.max_value, 0);
        assert!(solution.chosen.is_empty());
    }
}

#[test]
fn zero_capacity_yields_zero() {
    let solution = solve(0, &items(&[(45, 115), (30, 70), (15, 35)])).unwrap();
    assert_eq!(solution.max_value, 0);
    assert!(solution.chosen.is_empty());
}

#[test]
fn revenue_scenario_picks_high_detail_alone() {
    // weights = [45, 30, 15], values = [115, 70, 35], W = 50:
    // High Detail alone (115) beats Standard + Fast (105); nothing else fits.
    let solution = solve(50, &items(&[(45, 115), (30, 70), (15, 35)])).unwrap();
    assert_eq!(solution.max_value, 115);
    assert_eq!(solution.chosen, vec![0]);
}

#[test]
fn combination_beats_single_item_when_it_fits() {
    // W = 60 admits High Detail + Fast exactly (45 + 15, value 150),
    // beating High Detail alone (115) and Standard + Fast (105).
    let solution = solve(60, &items(&[(45, 115), (30, 70), (15, 35)])).unwrap();
    assert_eq!(solution.max_value, 150);
    assert_eq!(solution.chosen, vec![0, 2]);

    // W = 75 swaps Fast for Standard: 115 + 70 = 185.
    let solution = solve(75, &items(&[(45, 115), (30, 70), (15, 35)])).unwrap();
    assert_eq!(solution.max_value, 185);
    assert_eq!(solution.chosen, vec![0, 1]);
}

#[test]
fn result_is_monotone_in_capacity() {
    let set = items(&[(45, 25), (30, 15), (15, 5), (25, 12), (40, 33)]);
    let mut previous = 0;
    for capacity in 0..=160 {
        let value = solve(capacity, &set).unwrap().max_value;
        assert!(
            value >= previous,
            "optimum dropped from {previous} to {value} at capacity {capacity}"
        );
        previous = value;
    }
}

#[test]
fn reconstruction_is_consistent_with_reported_optimum() {
    let set = items(&[(12, 4), (2, 2), (1, 2), (1, 1), (4, 10), (7, 7), (3, 3)]);
    for capacity in [0, 1, 5, 9, 15, 30] {
        let KnapsackSolution { max_value, chosen } = solve(capacity, &set).unwrap();

        let chosen_weight: u64 = chosen.iter().map(|&i| set[i].weight).sum();
        let chosen_value: u64 = chosen.iter().map(|&i| set[i].value).sum();

        assert!(chosen_weight <= capacity, "capacity {capacity} exceeded");
        assert_eq!(chosen_value, max_value, "capacity {capacity} value mismatch");
    }
}

#[test]
fn ties_resolve_toward_not_taking() {
    // Two items with identical weight and value: only one fits, and the
    // backward walk skips the later item on the tie, keeping the earlier.
    let solution = solve(5, &items(&[(5, 9), (5, 9)])).unwrap();
    assert_eq!(solution.max_value, 9);
    assert_eq!(solution.chosen, vec![0]);
}

#[test]
fn zero_weight_items_are_always_taken() {
    let solution = solve(0, &items(&[(0, 3), (1, 100)])).unwrap();
    assert_eq!(solution.max_value, 3);
    assert_eq!(solution.chosen, vec![0]);
}

#[test]
fn oversized_capacity_is_refused() {
    let err = solve(MAX_CAPACITY + 1, &items(&[(1, 1)])).unwrap_err();
    assert_eq!(
        err,
        DomainError::InvalidCapacity {
            capacity: MAX_CAPACITY + 1,
            max: MAX_CAPACITY,
        }
    );
}

#[test]
fn capacity_ceiling_tightens_with_item_count() {
    // At 1600 items, a full-table capacity would blow past the cell budget;
    // the guard must refuse it with a reduced ceiling instead of allocating.
    let many = vec![KnapsackItem { weight: 1, value: 1 }; 1600];
    let err = solve(700_000, &many).unwrap_err();
    assert!(matches!(
        err,
        DomainError::InvalidCapacity { capacity: 700_000, max } if max < MAX_CAPACITY
    ));

    // The same item count still solves at a capacity within the budget.
    let solution = solve(1_600, &many).unwrap();
    assert_eq!(solution.max_value, 1_600);
}

#[test]
fn ceiling_capacity_solves_with_linear_memory() {
    // A table of (n + 1) full u64 rows at this capacity would be tens of
    // megabytes even for four items; the rolling-row form stays small and
    // reconstruction still walks out the exact optimum.
    let set = items(&[(999_999, 5), (499_999, 3), (499_999, 3), (1, 1)]);
    let solution = solve(MAX_CAPACITY, &set).unwrap();
    assert_eq!(solution.max_value, 7);
    assert_eq!(solution.chosen, vec![1, 2, 3]);
}
