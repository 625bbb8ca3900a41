// Domain Error Types

use crate::domain::job::JobId;
use crate::domain::money::Money;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Caller selected outside catalog bounds. Recoverable: re-prompt.
    #[error("invalid catalog index {index} (catalog has {len} entries)")]
    InvalidIndex { index: usize, len: usize },

    /// Admission rejected. Recoverable: the job is evicted, flow continues.
    #[error("insufficient budget for job {job_id}: cost {cost} exceeds remaining {remaining}")]
    InsufficientBudget {
        job_id: JobId,
        cost: Money,
        remaining: Money,
    },

    /// Defensive check: ids are assigned monotonically so this should not
    /// occur under correct use.
    #[error("duplicate job id: {0}")]
    DuplicateId(JobId),

    #[error("job not found: {0}")]
    NotFound(JobId),

    #[error("admission queue is empty")]
    EmptyQueue,

    /// Budget too large for the planner's DP table.
    #[error("invalid knapsack capacity: {capacity} cents exceeds ceiling of {max} cents")]
    InvalidCapacity { capacity: u64, max: u64 },
}

pub type Result<T> = std::result::Result<T, DomainError>;
