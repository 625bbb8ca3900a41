// Job Registry - the live set of admitted jobs plus their queue slots

use crate::domain::error::{DomainError, Result};
use crate::domain::job::{Job, JobId, Settings};
use crate::domain::money::Money;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, VecDeque};

/// A job together with the settings it was admitted with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdmittedJob {
    pub job: Job,
    pub settings: Settings,
}

impl AdmittedJob {
    pub fn total_cost(&self) -> Money {
        self.job.total_cost(&self.settings)
    }

    pub fn total_duration_min(&self) -> u32 {
        self.job.total_duration_min(&self.settings)
    }
}

/// Owns the admitted jobs (id -> job) and the FIFO of pending queue slots.
///
/// `admit` and `remove` keep the two structures in lockstep: any sequence of
/// those two operations leaves the map keys and the FIFO contents equal.
/// [`JobRegistry::pop_oldest`] deliberately narrows that to "every queued id
/// is registered": it retires a queue slot once the admission decision for
/// that job is made, while the job itself stays registered.
#[derive(Debug, Default)]
pub struct JobRegistry {
    // BTreeMap keyed by the monotonic id keeps iteration in admission order.
    jobs: BTreeMap<JobId, AdmittedJob>,
    pending: VecDeque<JobId>,
}

impl JobRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// Ids currently holding a queue slot, oldest first.
    pub fn pending_ids(&self) -> impl Iterator<Item = JobId> + '_ {
        self.pending.iter().copied()
    }

    /// Register a job and append its id to the FIFO tail.
    ///
    /// Ids are assigned monotonically, so a duplicate indicates caller error.
    pub fn admit(&mut self, job: Job, settings: Settings) -> Result<()> {
        if self.jobs.contains_key(&job.id) {
            return Err(DomainError::DuplicateId(job.id));
        }
        let id = job.id;
        self.jobs.insert(id, AdmittedJob { job, settings });
        self.pending.push_back(id);
        Ok(())
    }

    /// Evict a job from both structures atomically.
    pub fn remove(&mut self, id: JobId) -> Result<AdmittedJob> {
        let entry = self.jobs.remove(&id).ok_or(DomainError::NotFound(id))?;
        self.pending.retain(|queued| *queued != id);
        Ok(entry)
    }

    pub fn get(&self, id: JobId) -> Result<&AdmittedJob> {
        self.jobs.get(&id).ok_or(DomainError::NotFound(id))
    }

    /// Retire the queue slot at the FIFO head. The job stays registered.
    pub fn pop_oldest(&mut self) -> Result<JobId> {
        self.pending.pop_front().ok_or(DomainError::EmptyQueue)
    }

    /// Registered jobs in admission order.
    pub fn iter(&self) -> impl Iterator<Item = &AdmittedJob> {
        self.jobs.values()
    }

    pub fn aggregate_cost(&self) -> Money {
        self.jobs.values().map(|entry| entry.total_cost()).sum()
    }

    pub fn aggregate_duration_min(&self) -> u64 {
        self.jobs
            .values()
            .map(|entry| entry.total_duration_min() as u64)
            .sum()
    }
}
