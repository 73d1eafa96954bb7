//! Clock abstraction for reading the current instant
//!
//! Every clock-dependent operation in this crate goes through the
//! [`Clock`] trait, so tests can pin "now" to a fixed instant instead of
//! depending on the wall clock at test-run time.

use chrono::{DateTime, Local};

/// Source of the current local time
pub trait Clock {
    /// Current instant in the process's local timezone
    fn now(&self) -> DateTime<Local>;
}

/// Clock backed by the system wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Clock pinned to a single instant
///
/// Useful in tests, both here and in host crates, to make every
/// clock-dependent computation deterministic.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    instant: DateTime<Local>,
}

impl FixedClock {
    pub fn new(instant: DateTime<Local>) -> Self {
        Self { instant }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.instant
    }
}
