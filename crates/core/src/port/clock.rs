// Clock Port (for testability)

/// Time source. Injected so tests can pin timestamps.
#[cfg_attr(test, mockall::automock)]
pub trait Clock: Send + Sync {
    /// Current time in milliseconds since epoch.
    fn now_millis(&self) -> i64;
}

/// Wall-clock implementation (production).
#[derive(Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}
