// Job ID Provider Port

use crate::domain::JobId;
use std::sync::atomic::{AtomicU64, Ordering};

/// Source of job ids.
///
/// Ids must be strictly increasing and never reused for the provider's
/// lifetime. Each controller owns its own provider, so ids are scoped to a
/// controller rather than hidden in process-global state; two controllers
/// in one process (e.g. in tests) never share or corrupt counters.
pub trait JobIdProvider: Send + Sync {
    fn next_id(&self) -> JobId;
}

/// Counter-based provider starting at 0 (production).
#[derive(Debug, Default)]
pub struct SequentialIdProvider {
    next: AtomicU64,
}

impl SequentialIdProvider {
    pub fn new() -> Self {
        Self::default()
    }
}

impl JobIdProvider for SequentialIdProvider {
    fn next_id(&self) -> JobId {
        self.next.fetch_add(1, Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_monotonic_from_zero() {
        let provider = SequentialIdProvider::new();
        assert_eq!(provider.next_id(), 0);
        assert_eq!(provider.next_id(), 1);
        assert_eq!(provider.next_id(), 2);
    }

    #[test]
    fn providers_do_not_share_counters() {
        let a = SequentialIdProvider::new();
        let b = SequentialIdProvider::new();
        a.next_id();
        a.next_id();
        assert_eq!(b.next_id(), 0);
    }
}
