// Domain Layer - Pure business logic and entities

pub mod catalog;
pub mod error;
pub mod job;
pub mod ledger;
pub mod money;
pub mod registry;

// Re-exports
pub use catalog::{JobKind, MaterialKind, Objective};
pub use error::DomainError;
pub use job::{Job, JobId, Settings};
pub use ledger::BudgetLedger;
pub use money::Money;
pub use registry::{AdmittedJob, JobRegistry};
