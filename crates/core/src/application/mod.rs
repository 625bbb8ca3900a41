// Application Layer - Use Cases and Business Logic

pub mod admission;
pub mod planner;

// Re-exports
pub use admission::{AdmissionReceipt, PrintQueueService, QueueReport};
pub use planner::{Candidate, CandidateSource, OptimizationReport};
