// Admission Service - the controller owning the registry and the ledger


use crate::application::planner::{self, OptimizationReport, MAX_CAPACITY};
use crate::domain::{
    BudgetLedger, DomainError, Job, JobId, JobKind, JobRegistry, MaterialKind, Money, Objective,
    Settings,
};
use crate::error::{AppError, Result};
use crate::port::{Clock, JobIdProvider};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};

/// Returned when a job clears admission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdmissionReceipt {
    pub job_id: JobId,
    pub cost: Money,
    pub remaining: Money,
}

/// One line of the review listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueEntry {
    pub id: JobId,
    pub line: String,
}

/// Snapshot of the queue for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueReport {
    pub entries: Vec<QueueEntry>,
    pub total_cost: Money,
    pub total_duration_min: u64,
}

/// Print Queue Service.
///
/// Owns the full controller state (registry + ledger) as one exclusively
/// held resource: `process_job`'s tentative-admit-then-evict sequence is not
/// atomic across steps, and `&mut self` keeps it from interleaving with
/// another admission or a planner read.
pub struct PrintQueueService {
    registry: JobRegistry,
    ledger: BudgetLedger,
    ids: Arc<dyn JobIdProvider>,
    clock: Arc<dyn Clock>,
}

impl PrintQueueService {
    /// Build a controller over a fresh registry and ledger.
    ///
    /// Refuses budgets the planner's DP table could not handle, so the
    /// capacity guard fires here once instead of on every optimize call.
    pub fn new(
        initial_budget: Money,
        ids: Arc<dyn JobIdProvider>,
        clock: Arc<dyn Clock>,
    ) -> Result<Self> {
        if initial_budget.cents() > MAX_CAPACITY {
            return Err(AppError::Validation(format!(
                "initial budget {} exceeds the supported maximum of {}",
                initial_budget,
                Money::from_cents(MAX_CAPACITY)
            )));
        }
        Ok(Self {
            registry: JobRegistry::new(),
            ledger: BudgetLedger::new(initial_budget),
            ids,
            clock,
        })
    }

    pub fn initial_budget(&self) -> Money {
        self.ledger.initial()
    }

    pub fn remaining_budget(&self) -> Money {
        self.ledger.remaining()
    }

    pub fn job_count(&self) -> usize {
        self.registry.len()
    }

    /// Catalog lookup for the menu layer. Out-of-range is recoverable:
    /// the caller re-prompts.
    pub fn job_kind_by_index(&self, index: usize) -> Result<JobKind> {
        Ok(JobKind::by_index(index)?)
    }

    pub fn material_by_index(&self, index: usize) -> Result<MaterialKind> {
        Ok(MaterialKind::by_index(index)?)
    }

    /// Build settings from catalog indices. An empty list is valid.
    pub fn build_settings(&self, indices: &[usize]) -> Result<Settings> {
        let mut materials = Vec::with_capacity(indices.len());
        for &index in indices {
            materials.push(MaterialKind::by_index(index)?);
        }
        Ok(Settings::new(materials))
    }

    /// Admit a job against the budget, or reject it.
    ///
    /// The job is constructed and tentatively admitted *before* the
    /// affordability check (a queue slot is requested either way), then the
    /// debit is the last irrevocable step: on rejection the ledger is
    /// untouched and the tentative admission is evicted, leaving registry
    /// and ledger mutually consistent.
    pub fn process_job(&mut self, kind: JobKind, settings: Settings) -> Result<AdmissionReceipt> {
        let job = Job::new(self.ids.next_id(), kind, self.clock.now_millis());
        let job_id = job.id;
        let cost = job.total_cost(&settings);

        self.registry.admit(job, settings)?;

        match self.ledger.try_debit(cost) {
            Some(remaining) => {
                // Slot processed; the job itself stays registered.
                self.registry.pop_oldest()?;
                info!(job_id, kind = %kind.name(), %cost, %remaining, "job admitted");
                Ok(AdmissionReceipt {
                    job_id,
                    cost,
                    remaining,
                })
            }
            None => {
                let remaining = self.ledger.remaining();
                self.registry.remove(job_id)?;
                warn!(job_id, kind = %kind.name(), %cost, %remaining, "job rejected: over budget");
                Err(DomainError::InsufficientBudget {
                    job_id,
                    cost,
                    remaining,
                }
                .into())
            }
        }
    }

    /// List every registered job in admission order with aggregate totals.
    pub fn review_jobs(&self) -> QueueReport {
        let entries = self
            .registry
            .iter()
            .map(|entry| {
                let line = if entry.settings.materials().is_empty() {
                    entry.job.to_string()
                } else {
                    format!("{} [{}]", entry.job, entry.settings)
                };
                QueueEntry {
                    id: entry.job.id,
                    line,
                }
            })
            .collect();

        QueueReport {
            entries,
            total_cost: self.registry.aggregate_cost(),
            total_duration_min: self.registry.aggregate_duration_min(),
        }
    }

    /// Best achievable value under the original budget, counting both the
    /// queued jobs and whatever speculative jobs the remaining budget still
    /// affords.
    pub fn optimize(&self, objective: Objective) -> Result<OptimizationReport> {
        planner::optimize(&self.registry, &self.ledger, objective)
    }
}
