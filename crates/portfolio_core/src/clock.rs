//! Clock abstraction for id generation and message timestamps.
//!
//! # Responsibility
//! - Isolate "current time" behind a trait so tests can inject fixed values.
//!
//! # Invariants
//! - Implementations must be cheap to call; repositories query the clock on
//!   every mutation.

use chrono::{DateTime, Utc};

/// Source of the current wall-clock time.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Production clock backed by the system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
