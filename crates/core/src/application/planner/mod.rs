// Planner - budget-constrained value maximization over queued and
// speculative jobs

pub mod knapsack;
mod simulate;

#[cfg(test)]
mod knapsack_test;

pub use knapsack::{KnapsackItem, KnapsackSolution, MAX_CAPACITY};

use crate::domain::{BudgetLedger, JobId, JobKind, JobRegistry, Money, Objective};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Where a planner candidate came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CandidateSource {
    /// A job currently held by the registry.
    Queued(JobId),
    /// A simulated job the remaining budget could still afford.
    Speculative,
}

/// One job the planner may select.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub kind: JobKind,
    pub cost: Money,
    pub value: u64,
    pub source: CandidateSource,
}

/// The planner's answer: the best achievable value and the jobs realizing it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptimizationReport {
    pub objective: Objective,
    /// In cents for Profit/Revenue, a job count for Count.
    pub max_value: u64,
    pub chosen: Vec<Candidate>,
}

/// Compute the best achievable value under the *original* budget.
///
/// Candidates are the registry's current jobs (weighted by their full cost,
/// materials included) concatenated with speculative jobs generated from
/// the remaining budget, so the optimum reflects "best achievable" rather
/// than "best among what's already queued".
pub fn optimize(
    registry: &JobRegistry,
    ledger: &BudgetLedger,
    objective: Objective,
) -> Result<OptimizationReport> {
    let mut candidates: Vec<Candidate> = registry
        .iter()
        .map(|entry| Candidate {
            kind: entry.job.kind,
            cost: entry.total_cost(),
            value: entry.job.kind.objective_value(objective),
            source: CandidateSource::Queued(entry.job.id),
        })
        .collect();
    candidates.extend(simulate::speculative_candidates(
        ledger.remaining(),
        objective,
    ));

    let items: Vec<KnapsackItem> = candidates
        .iter()
        .map(|c| KnapsackItem {
            weight: c.cost.cents(),
            value: c.value,
        })
        .collect();

    let solution = knapsack::solve(ledger.initial().cents(), &items)?;
    let chosen: Vec<Candidate> = solution
        .chosen
        .iter()
        .map(|&index| candidates[index].clone())
        .collect();

    info!(
        %objective,
        candidates = candidates.len(),
        chosen = chosen.len(),
        max_value = solution.max_value,
        "optimization complete"
    );

    Ok(OptimizationReport {
        objective,
        max_value: solution.max_value,
        chosen,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Job, MaterialKind, Settings};

    fn registry_with(entries: &[(JobId, JobKind, Vec<MaterialKind>)]) -> JobRegistry {
        let mut registry = JobRegistry::new();
        for (id, kind, materials) in entries {
            registry
                .admit(
                    Job::new(*id, *kind, *id as i64),
                    Settings::new(materials.clone()),
                )
                .unwrap();
        }
        registry
    }

    #[test]
    fn empty_registry_with_budget_left_still_finds_value() {
        let registry = JobRegistry::new();
        let ledger = BudgetLedger::new(Money::from_dollars(100));

        let report = optimize(&registry, &ledger, Objective::Profit).unwrap();

        assert!(report.max_value > 0);
        assert!(report
            .chosen
            .iter()
            .all(|c| c.source == CandidateSource::Speculative));
    }

    #[test]
    fn chosen_cost_never_exceeds_original_budget() {
        let registry = registry_with(&[
            (0, JobKind::HighDetail, vec![MaterialKind::Nylon]),
            (1, JobKind::FastPrint, vec![]),
        ]);
        let mut ledger = BudgetLedger::new(Money::from_dollars(100));
        ledger.try_debit(Money::from_dollars(90)).unwrap();

        let report = optimize(&registry, &ledger, Objective::Revenue).unwrap();

        let total: Money = report.chosen.iter().map(|c| c.cost).sum();
        assert!(total <= ledger.initial());
    }

    #[test]
    fn exhausted_budget_optimizes_over_queued_jobs_only() {
        let registry = registry_with(&[
            (0, JobKind::StandardDetail, vec![]),
            (1, JobKind::FastPrint, vec![]),
        ]);
        let mut ledger = BudgetLedger::new(Money::from_dollars(45));
        ledger.try_debit(Money::from_dollars(45)).unwrap();

        let report = optimize(&registry, &ledger, Objective::Count).unwrap();

        // Both queued jobs fit under the original $45 and no speculative
        // candidate exists, so the count optimum is exactly 2.
        assert_eq!(report.max_value, 2);
        assert!(report
            .chosen
            .iter()
            .all(|c| matches!(c.source, CandidateSource::Queued(_))));
    }

    #[test]
    fn objective_switches_the_reported_unit() {
        let registry = registry_with(&[(0, JobKind::HighDetail, vec![])]);
        let mut ledger = BudgetLedger::new(Money::from_dollars(45));
        ledger.try_debit(Money::from_dollars(45)).unwrap();

        let profit = optimize(&registry, &ledger, Objective::Profit).unwrap();
        let revenue = optimize(&registry, &ledger, Objective::Revenue).unwrap();
        let count = optimize(&registry, &ledger, Objective::Count).unwrap();

        assert_eq!(profit.max_value, JobKind::HighDetail.profit().cents());
        assert_eq!(revenue.max_value, JobKind::HighDetail.revenue().cents());
        assert_eq!(count.max_value, 1);
    }
}
