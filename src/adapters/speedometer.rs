//! Simulated speedometer.
//!
//! Replays a scripted list of readings, one per call.  Used by the host
//! simulation binary in place of a wheel-speed sensor.

use log::debug;

use crate::app::ports::SpeedSource;
use crate::error::SensorError;

/// Upper plausibility bound for a road vehicle (km/h).
pub const MAX_PLAUSIBLE_KMH: f64 = 400.0;

/// Speed source backed by a fixed script of readings.
#[derive(Debug, Clone)]
pub struct SimSpeedometer {
    script: Vec<f64>,
    next: usize,
    looping: bool,
    total_reads: u64,
}

impl SimSpeedometer {
    /// Play `script` once; further reads fail with [`SensorError::NoReading`].
    pub fn new(script: Vec<f64>) -> Self {
        Self {
            script,
            next: 0,
            looping: false,
            total_reads: 0,
        }
    }

    /// Play `script` forever, wrapping around at the end.
    pub fn looping(script: Vec<f64>) -> Self {
        Self {
            looping: true,
            ..Self::new(script)
        }
    }

    /// Readings left before the script runs out (`None` when looping).
    pub fn remaining(&self) -> Option<usize> {
        if self.looping {
            None
        } else {
            Some(self.script.len().saturating_sub(self.next))
        }
    }

    pub fn total_reads(&self) -> u64 {
        self.total_reads
    }
}

impl SpeedSource for SimSpeedometer {
    fn speed(&mut self) -> Result<f64, SensorError> {
        if self.looping && !self.script.is_empty() {
            self.next %= self.script.len();
        }
        let raw = *self.script.get(self.next).ok_or(SensorError::NoReading)?;
        self.next += 1;
        self.total_reads = self.total_reads.saturating_add(1);

        if !raw.is_finite() || !(0.0..=MAX_PLAUSIBLE_KMH).contains(&raw) {
            debug!("Rejecting implausible speed reading {}", raw);
            return Err(SensorError::OutOfRange);
        }
        Ok(raw)
    }
}
