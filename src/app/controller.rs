//! Engine controller — the hexagonal core.
//!
//! [`EngineController`] owns the current gear and its four collaborators.
//! It exposes a hardware-agnostic API; every device interaction flows
//! through the port traits it was constructed with.
//!
//! ```text
//!  SpeedSource ──▶ ┌──────────────────────┐ ──▶ GearActuator
//!                  │   EngineController    │
//!        Clock ──▶ │ average · shift table │ ──▶ Logger
//!                  └──────────────────────┘
//! ```
//!
//! Collaborator faults are never caught here; they surface to the caller
//! through [`crate::error::Error`].

use log::{debug, info};

use crate::config::SystemConfig;
use crate::control::shift::ShiftTable;
use crate::error::Result;
use crate::gear::GearValue;
use crate::timestamp::Timestamp;

use super::ports::{Clock, GearActuator, Logger, SpeedSource};

/// Readings averaged into one instantaneous speed.
pub const SAMPLES_PER_READING: usize = 3;

/// Render the gear-change log line: `<yyyy-MM-dd HH:mm:ss> Gear changed to <NAME>`.
pub fn gear_change_line(at: &Timestamp, gear: GearValue) -> String {
    format!("{at} Gear changed to {gear}")
}

/// A shift performed by [`EngineController::adjust_gear`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GearChange {
    pub from: GearValue,
    pub to: GearValue,
    /// Averaged speed that triggered the shift (km/h).
    pub speed_kmh: f64,
    /// Clock time stamped on the log line.
    pub at: Timestamp,
}

// ───────────────────────────────────────────────────────────────
// EngineController
// ───────────────────────────────────────────────────────────────

pub struct EngineController<S, A, C, L> {
    speed: S,
    actuator: A,
    clock: C,
    logger: L,
    shift_table: ShiftTable,
    /// Last gear applied; written only after the actuator accepted it.
    gear: GearValue,
}

impl<S, A, C, L> EngineController<S, A, C, L>
where
    S: SpeedSource,
    A: GearActuator,
    C: Clock,
    L: Logger,
{
    /// Controller with the standard shift table, starting in first gear.
    pub fn new(speed: S, actuator: A, clock: C, logger: L) -> Self {
        Self {
            speed,
            actuator,
            clock,
            logger,
            shift_table: ShiftTable::STANDARD,
            gear: GearValue::LOWEST_DRIVE,
        }
    }

    /// Controller using the initial gear and shift points from `config`.
    pub fn with_config(config: &SystemConfig, speed: S, actuator: A, clock: C, logger: L) -> Result<Self> {
        let shift_table = config.shift_table()?;
        Ok(Self {
            speed,
            actuator,
            clock,
            logger,
            shift_table,
            gear: config.initial_gear,
        })
    }

    // ── Operations ────────────────────────────────────────────

    /// Set the current gear to `gear` and log the change.
    ///
    /// The gear is stored before the clock and logger are consulted, so
    /// it stays set even if either of them fails.
    pub fn record_gear(&mut self, gear: GearValue) -> Result<()> {
        self.record(gear).map(|_| ())
    }

    /// Mean of three consecutive speed readings.
    ///
    /// Sampling stops at the first failed reading.
    pub fn instantaneous_speed(&mut self) -> Result<f64> {
        let mut samples = [0.0_f64; SAMPLES_PER_READING];
        for slot in &mut samples {
            *slot = self.speed.speed()?;
        }
        let avg = samples.iter().sum::<f64>() / SAMPLES_PER_READING as f64;
        debug!("Speed samples {:?} -> avg {:.2} km/h", samples, avg);
        Ok(avg)
    }

    /// Sample speed, pick the target gear, and shift if it differs from
    /// the current one.
    ///
    /// Returns `None` when no shift was needed; in that case neither the
    /// actuator, the clock nor the logger is touched.
    pub fn adjust_gear(&mut self) -> Result<Option<GearChange>> {
        let speed_kmh = self.instantaneous_speed()?;
        let target = self.shift_table.select(speed_kmh);
        if target == self.gear {
            return Ok(None);
        }

        let from = self.gear;
        info!("Shift {} -> {} at {:.1} km/h", from, target, speed_kmh);
        self.actuator.set_gear(target)?;
        let at = self.record(target)?;

        Ok(Some(GearChange {
            from,
            to: target,
            speed_kmh,
            at,
        }))
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn current_gear(&self) -> GearValue {
        self.gear
    }

    pub fn shift_table(&self) -> &ShiftTable {
        &self.shift_table
    }

    pub fn speed_source(&self) -> &S {
        &self.speed
    }

    pub fn actuator(&self) -> &A {
        &self.actuator
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn logger(&self) -> &L {
        &self.logger
    }

    /// Give the collaborators back, in construction order.
    pub fn into_parts(self) -> (S, A, C, L) {
        (self.speed, self.actuator, self.clock, self.logger)
    }

    // ── Internal ──────────────────────────────────────────────

    fn record(&mut self, gear: GearValue) -> Result<Timestamp> {
        self.gear = gear;
        let at = self.clock.now()?;
        self.logger.log(&gear_change_line(&at, gear))?;
        Ok(at)
    }
}
