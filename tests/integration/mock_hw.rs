//! Mock ports for integration tests.
//!
//! Every mock records how it was called so tests can assert on exact
//! call counts and arguments.

use std::cell::Cell;
use std::collections::VecDeque;

use gearshift::app::ports::{Clock, GearActuator, Logger, SpeedSource};
use gearshift::error::{ActuatorError, ClockError, LogError, SensorError};
use gearshift::{GearValue, Timestamp};

/// Timestamp used by default in every mock clock.
pub fn fixed_ts() -> Timestamp {
    Timestamp::from_ymd_hms(2024, 11, 5, 8, 30, 15).unwrap()
}

// ── MockSpeedometer ───────────────────────────────────────────

pub struct MockSpeedometer {
    readings: VecDeque<Result<f64, SensorError>>,
    pub calls: usize,
}

#[allow(dead_code)]
impl MockSpeedometer {
    pub fn new(readings: &[f64]) -> Self {
        Self {
            readings: readings.iter().map(|&r| Ok(r)).collect(),
            calls: 0,
        }
    }

    /// Script with explicit failures interleaved.
    pub fn scripted(readings: Vec<Result<f64, SensorError>>) -> Self {
        Self {
            readings: readings.into(),
            calls: 0,
        }
    }

    pub fn remaining(&self) -> usize {
        self.readings.len()
    }
}

impl SpeedSource for MockSpeedometer {
    fn speed(&mut self) -> Result<f64, SensorError> {
        self.calls += 1;
        self.readings.pop_front().unwrap_or(Err(SensorError::NoReading))
    }
}

// ── MockGearbox ───────────────────────────────────────────────

#[derive(Default)]
pub struct MockGearbox {
    pub calls: Vec<GearValue>,
    pub reject: bool,
}

impl MockGearbox {
    pub fn new() -> Self {
        Self::default()
    }
}

impl GearActuator for MockGearbox {
    fn set_gear(&mut self, gear: GearValue) -> Result<(), ActuatorError> {
        self.calls.push(gear);
        if self.reject {
            Err(ActuatorError::Rejected(gear))
        } else {
            Ok(())
        }
    }
}

// ── MockClock ─────────────────────────────────────────────────

pub struct MockClock {
    pub at: Option<Timestamp>,
    pub calls: Cell<usize>,
}

#[allow(dead_code)]
impl MockClock {
    pub fn new() -> Self {
        Self::at(fixed_ts())
    }

    pub fn at(ts: Timestamp) -> Self {
        Self {
            at: Some(ts),
            calls: Cell::new(0),
        }
    }

    pub fn unavailable() -> Self {
        Self {
            at: None,
            calls: Cell::new(0),
        }
    }
}

impl Clock for MockClock {
    fn now(&self) -> Result<Timestamp, ClockError> {
        self.calls.set(self.calls.get() + 1);
        self.at.ok_or(ClockError::Unavailable)
    }
}

// ── MockLogger ────────────────────────────────────────────────

#[derive(Default)]
pub struct MockLogger {
    pub lines: Vec<String>,
    pub fail: bool,
}

impl MockLogger {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Logger for MockLogger {
    fn log(&mut self, line: &str) -> Result<(), LogError> {
        if self.fail {
            return Err(LogError::WriteFailed);
        }
        self.lines.push(line.to_owned());
        Ok(())
    }
}
