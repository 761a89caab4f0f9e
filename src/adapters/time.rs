//! Clock adapters.
//!
//! - [`SystemClock`] reads the host wall clock in local time.
//! - [`FixedClock`] always returns the same instant, for deterministic
//!   replays and tests.

use chrono::Local;

use crate::app::ports::Clock;
use crate::error::ClockError;
use crate::timestamp::Timestamp;

/// Host wall-clock time (local timezone).
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Result<Timestamp, ClockError> {
        Ok(Timestamp::new(Local::now().naive_local()))
    }
}

/// Clock frozen at a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    at: Timestamp,
}

impl FixedClock {
    pub fn new(at: Timestamp) -> Self {
        Self { at }
    }

    /// Move the frozen instant.
    pub fn set(&mut self, at: Timestamp) {
        self.at = at;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Result<Timestamp, ClockError> {
        Ok(self.at)
    }
}
