//! Speed → gear selection table.
//!
//! Four upshift points split the speed axis into five bands, one per
//! forward gear.  Each band is inclusive on its lower edge:
//!
//! ```text
//!   v <  10        FIRST
//!  10 <= v < 30    SECOND
//!  30 <= v < 50    THIRD
//!  50 <= v < 70    FOURTH
//!  70 <= v         FIFTH
//! ```
//!
//! Neutral is never selected here.

use crate::error::ConfigError;
use crate::gear::GearValue;

/// Number of upshift points (one fewer than the forward gears).
pub const UPSHIFT_POINTS: usize = 4;

/// Ascending speed thresholds (km/h) at which the next gear is selected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShiftTable {
    upshift_kmh: [f64; UPSHIFT_POINTS],
}

impl ShiftTable {
    /// Standard road table: 10 / 30 / 50 / 70 km/h.
    pub const STANDARD: Self = Self {
        upshift_kmh: [10.0, 30.0, 50.0, 70.0],
    };

    /// Build a table, rejecting points that are non-finite, non-positive
    /// or not strictly ascending.
    pub fn new(upshift_kmh: [f64; UPSHIFT_POINTS]) -> Result<Self, ConfigError> {
        if upshift_kmh.iter().any(|p| !p.is_finite()) {
            return Err(ConfigError::ValidationFailed("shift point is not finite"));
        }
        if upshift_kmh[0] <= 0.0 {
            return Err(ConfigError::ValidationFailed("first shift point must be positive"));
        }
        if upshift_kmh.windows(2).any(|w| w[0] >= w[1]) {
            return Err(ConfigError::ValidationFailed("shift points must be strictly ascending"));
        }
        Ok(Self { upshift_kmh })
    }

    pub fn upshift_points(&self) -> [f64; UPSHIFT_POINTS] {
        self.upshift_kmh
    }

    /// Target gear for an averaged speed.
    ///
    /// Negative speeds and NaN select the lowest drive gear.
    pub fn select(&self, speed_kmh: f64) -> GearValue {
        if speed_kmh.is_nan() {
            return GearValue::LOWEST_DRIVE;
        }
        let band = self
            .upshift_kmh
            .iter()
            .take_while(|&&point| speed_kmh >= point)
            .count();
        GearValue::ALL[GearValue::LOWEST_DRIVE.number() as usize + band]
    }
}

impl Default for ShiftTable {
    fn default() -> Self {
        Self::STANDARD
    }
}
