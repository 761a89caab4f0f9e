//! Port traits — the hexagonal boundary between gear logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ EngineController (domain)
//! ```
//!
//! Driven adapters (speedometer, gearbox, clock, log sink) implement
//! these traits.  The [`EngineController`](super::controller::EngineController)
//! owns them via generics, so the domain core never touches a device
//! directly.  Every port returns its own typed error; the controller
//! lifts them into [`crate::error::Error`] without handling them.

use crate::error::{ActuatorError, ClockError, LogError, SensorError};
use crate::gear::GearValue;
use crate::timestamp::Timestamp;

// ───────────────────────────────────────────────────────────────
// Speed source (driven adapter: sensor → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port: one fresh speed reading per call.
pub trait SpeedSource {
    /// Instantaneous vehicle speed in km/h.
    fn speed(&mut self) -> Result<f64, SensorError>;
}

// ───────────────────────────────────────────────────────────────
// Gear actuator (driven adapter: domain → gearbox)
// ───────────────────────────────────────────────────────────────

/// Write-side port: the domain commands a gear.
pub trait GearActuator {
    /// Engage `gear`.  `Ok` means the gear is now applied.
    fn set_gear(&mut self, gear: GearValue) -> Result<(), ActuatorError>;
}

// ───────────────────────────────────────────────────────────────
// Clock
// ───────────────────────────────────────────────────────────────

/// Source of the wall-clock time stamped on log lines.
pub trait Clock {
    fn now(&self) -> Result<Timestamp, ClockError>;
}

// ───────────────────────────────────────────────────────────────
// Logger (driven adapter: domain → log line sink)
// ───────────────────────────────────────────────────────────────

/// Accepts one pre-formatted line per call.  Adapters decide where it
/// goes (stdout, a file, the `log` facade).
pub trait Logger {
    fn log(&mut self, line: &str) -> Result<(), LogError>;
}

// ───────────────────────────────────────────────────────────────
// Borrowed collaborators
// ───────────────────────────────────────────────────────────────

impl<T: SpeedSource + ?Sized> SpeedSource for &mut T {
    fn speed(&mut self) -> Result<f64, SensorError> {
        (**self).speed()
    }
}

impl<T: GearActuator + ?Sized> GearActuator for &mut T {
    fn set_gear(&mut self, gear: GearValue) -> Result<(), ActuatorError> {
        (**self).set_gear(gear)
    }
}

impl<T: Clock + ?Sized> Clock for &T {
    fn now(&self) -> Result<Timestamp, ClockError> {
        (**self).now()
    }
}

impl<T: Logger + ?Sized> Logger for &mut T {
    fn log(&mut self, line: &str) -> Result<(), LogError> {
        (**self).log(line)
    }
}
