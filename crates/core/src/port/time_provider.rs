// Time Provider Port (for testability)

use chrono::{DateTime, Local};

/// Time provider interface (allows mocking in tests)
pub trait TimeProvider: Send + Sync {
    /// Current local wall-clock time
    fn now(&self) -> DateTime<Local>;
}

/// System time provider (production)
pub struct SystemTimeProvider;

impl TimeProvider for SystemTimeProvider {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Fixed time provider (tests)
pub struct FixedTimeProvider(pub DateTime<Local>);

impl TimeProvider for FixedTimeProvider {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}
