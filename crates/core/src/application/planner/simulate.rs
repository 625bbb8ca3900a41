// Speculative job generation for what-if optimization

use super::{Candidate, CandidateSource};
use crate::domain::{JobKind, MaterialKind, Money, Objective};
use tracing::debug;

/// Generate the speculative jobs the remaining budget could still afford.
///
/// Each speculative job is priced at its kind's base cost plus the minimal
/// filament surcharge. Every kind simulates against the full remaining
/// budget independently, generating copies while they still fit; the
/// knapsack pass afterwards is what arbitrates between kinds, so a costly
/// kind early in the catalog cannot starve a cheap one out of the candidate
/// list. Nothing here touches the registry or the ledger; the candidates
/// live only for one planner call.
pub(super) fn speculative_candidates(remaining: Money, objective: Objective) -> Vec<Candidate> {
    let surcharge = MaterialKind::cheapest().additional_cost();
    let mut candidates = Vec::new();

    for kind in JobKind::ALL {
        let cost = kind.cost() + surcharge;
        let mut left = remaining;
        while let Some(rest) = left.checked_sub(cost) {
            left = rest;
            candidates.push(Candidate {
                kind,
                cost,
                value: kind.objective_value(objective),
                source: CandidateSource::Speculative,
            });
        }
    }

    debug!(
        remaining = %remaining,
        generated = candidates.len(),
        "speculative candidates generated"
    );
    candidates
}
