// Port Layer - Interfaces for injected dependencies

pub mod clock;
pub mod id_provider;

// Re-exports
pub use clock::{Clock, SystemClock};
pub use id_provider::{JobIdProvider, SequentialIdProvider};
