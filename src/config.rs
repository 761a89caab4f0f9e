//! Controller configuration parameters
//!
//! All tunable parameters for the gear controller and the host
//! simulation.  Values can be overridden from a JSON document.

use serde::{Deserialize, Serialize};

use crate::control::shift::{ShiftTable, UPSHIFT_POINTS};
use crate::error::ConfigError;
use crate::gear::GearValue;

/// Core system configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemConfig {
    // --- Controller ---
    /// Gear assumed engaged before the first adjustment
    pub initial_gear: GearValue,
    /// Upshift points in km/h (strictly ascending)
    pub shift_points_kmh: [f64; UPSHIFT_POINTS],

    // --- Simulation ---
    /// Delay between consecutive gear adjustments (milliseconds)
    pub control_interval_ms: u32,
    /// Speed readings replayed by the simulated speedometer (km/h)
    pub speed_profile_kmh: Vec<f64>,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            initial_gear: GearValue::LOWEST_DRIVE,
            shift_points_kmh: ShiftTable::STANDARD.upshift_points(),

            control_interval_ms: 100, // 10 Hz
            // Pull away, cruise, brake to a stop; three samples per adjustment.
            speed_profile_kmh: vec![
                0.0, 2.0, 4.0, //
                8.0, 12.0, 16.0, //
                22.0, 28.0, 34.0, //
                40.0, 46.0, 52.0, //
                60.0, 68.0, 75.0, //
                80.0, 80.0, 80.0, //
                62.0, 48.0, 35.0, //
                12.0, 6.0, 0.0,
            ],
        }
    }
}

impl SystemConfig {
    /// Parse a JSON document and validate it.  Missing fields take their
    /// default values.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json).map_err(|e| {
            log::warn!("Config parse error: {}", e);
            ConfigError::Parse
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject out-of-range values instead of clamping them.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.shift_table()?;
        if self.control_interval_ms == 0 {
            return Err(ConfigError::ValidationFailed("control_interval_ms must be non-zero"));
        }
        Ok(())
    }

    /// Shift table built from `shift_points_kmh`.
    pub fn shift_table(&self) -> Result<ShiftTable, ConfigError> {
        ShiftTable::new(self.shift_points_kmh)
    }
}
