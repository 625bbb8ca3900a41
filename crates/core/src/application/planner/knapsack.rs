// 0/1 Knapsack - value maximization with reconstruction

use crate::domain::error::{DomainError, Result};

/// Largest capacity (in integer weight units, i.e. cents) the solver
/// accepts for any item count.
pub const MAX_CAPACITY: u64 = 1_000_000;

/// Upper bound on `(n + 1) * (capacity + 1)` cells. The decision matrix
/// holds one bit per cell, so this caps it at roughly 125 MB; without it a
/// guard-passing capacity combined with a large enough candidate list could
/// still allocate without limit.
const MAX_TABLE_CELLS: u64 = 1_000_000_000;

/// One candidate item: integer weight (cost in cents) and value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnapsackItem {
    pub weight: u64,
    pub value: u64,
}

/// The optimum value and the item indices realizing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnapsackSolution {
    pub max_value: u64,
    /// Indices into the input slice, ascending.
    pub chosen: Vec<usize>,
}

/// Maximize total value of a subset of `items` with total weight <= `capacity`.
///
/// Conceptually `K[i][w]` is the best value using a subset of the first `i`
/// items within weight `w`; only two rolling value rows are kept, and a
/// packed bit per cell records whether item `i` was taken there, so memory
/// is linear in capacity instead of `n * W` words. Degenerates to 0 for
/// zero capacity or no items. Capacity is unsigned, so a negative capacity
/// is unrepresentable; capacities whose table would exceed the cell budget
/// for the given item count are refused before any allocation.
///
/// When several subsets share the optimum value, each tie resolves toward
/// *not* taking the item, so the returned set is deterministic but not
/// canonical: callers asserting on the chosen set must pin this rule,
/// otherwise assert on `max_value` only.
pub fn solve(capacity: u64, items: &[KnapsackItem]) -> Result<KnapsackSolution> {
    let n = items.len();
    let max = MAX_CAPACITY.min(MAX_TABLE_CELLS / (n as u64 + 1) - 1);
    if capacity > max {
        return Err(DomainError::InvalidCapacity { capacity, max });
    }

    let cap = capacity as usize;
    let words = cap / 64 + 1;
    let mut prev = vec![0u64; cap + 1];
    let mut curr = vec![0u64; cap + 1];
    let mut taken = vec![0u64; n * words];

    for (i, item) in items.iter().enumerate() {
        let weight = item.weight as usize;
        let row = &mut taken[i * words..(i + 1) * words];
        for w in 0..=cap {
            let skip = prev[w];
            curr[w] = if weight > w {
                skip
            } else {
                let take = item.value + prev[w - weight];
                // Strict: on a tie the item is not taken.
                if take > skip {
                    row[w / 64] |= 1 << (w % 64);
                    take
                } else {
                    skip
                }
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    let max_value = prev[cap];

    // Walk the decision bits back down from the full capacity.
    let mut chosen = Vec::new();
    let mut w = cap;
    for i in (0..n).rev() {
        if taken[i * words + w / 64] & (1 << (w % 64)) != 0 {
            chosen.push(i);
            w -= items[i].weight as usize;
        }
    }
    chosen.reverse();

    Ok(KnapsackSolution { max_value, chosen })
}
