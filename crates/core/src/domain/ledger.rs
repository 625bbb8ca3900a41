// Budget Ledger - the single mutable remaining-budget value

use crate::domain::money::Money;
use serde::{Deserialize, Serialize};

/// Tracks the budget a controller may still spend.
///
/// Invariant: `remaining <= initial` at all times. The only mutation is a
/// successful debit; a refused debit leaves the ledger untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetLedger {
    initial: Money,
    remaining: Money,
}

impl BudgetLedger {
    pub fn new(initial: Money) -> Self {
        Self {
            initial,
            remaining: initial,
        }
    }

    pub fn initial(&self) -> Money {
        self.initial
    }

    pub fn remaining(&self) -> Money {
        self.remaining
    }

    /// Debit `cost` and return the new remaining budget, or `None` without
    /// mutating anything when the cost is unaffordable.
    pub fn try_debit(&mut self, cost: Money) -> Option<Money> {
        let remaining = self.remaining.checked_sub(cost)?;
        self.remaining = remaining;
        Some(remaining)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debit_subtracts_exactly_the_cost() {
        let mut ledger = BudgetLedger::new(Money::from_dollars(100));

        assert_eq!(
            ledger.try_debit(Money::from_dollars(75)),
            Some(Money::from_dollars(25))
        );
        assert_eq!(ledger.remaining(), Money::from_dollars(25));
        assert_eq!(ledger.initial(), Money::from_dollars(100));
    }

    #[test]
    fn refused_debit_leaves_ledger_unchanged() {
        let mut ledger = BudgetLedger::new(Money::from_dollars(40));

        assert_eq!(ledger.try_debit(Money::from_dollars(45)), None);
        assert_eq!(ledger.remaining(), Money::from_dollars(40));
    }

    #[test]
    fn budget_can_be_driven_to_zero() {
        let mut ledger = BudgetLedger::new(Money::from_dollars(25));

        assert_eq!(ledger.try_debit(Money::from_dollars(25)), Some(Money::ZERO));
        assert_eq!(ledger.try_debit(Money::from_cents(1)), None);
        assert_eq!(ledger.try_debit(Money::ZERO), Some(Money::ZERO));
    }
}
