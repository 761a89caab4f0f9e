//! Simulated gearbox.
//!
//! Tracks the engaged gear and keeps a short ring buffer of recent
//! engagements for end-of-run diagnostics.

use heapless::HistoryBuffer;
use log::debug;

use crate::app::ports::GearActuator;
use crate::error::ActuatorError;
use crate::gear::GearValue;

/// Engagements retained in the history ring.
pub const HISTORY_LEN: usize = 16;

pub struct SimGearbox {
    engaged: GearValue,
    shifts: u32,
    history: HistoryBuffer<GearValue, HISTORY_LEN>,
}

impl SimGearbox {
    pub fn new(engaged: GearValue) -> Self {
        Self {
            engaged,
            shifts: 0,
            history: HistoryBuffer::new(),
        }
    }

    pub fn engaged(&self) -> GearValue {
        self.engaged
    }

    /// Number of accepted gear commands.
    pub fn shift_count(&self) -> u32 {
        self.shifts
    }

    /// Most recent engagements, oldest first.
    pub fn recent(&self) -> impl Iterator<Item = GearValue> + '_ {
        self.history.oldest_ordered().copied()
    }
}

impl Default for SimGearbox {
    fn default() -> Self {
        Self::new(GearValue::LOWEST_DRIVE)
    }
}

impl GearActuator for SimGearbox {
    fn set_gear(&mut self, gear: GearValue) -> Result<(), ActuatorError> {
        debug!("Gearbox: {} -> {}", self.engaged, gear);
        self.engaged = gear;
        self.shifts = self.shifts.saturating_add(1);
        self.history.write(gear);
        Ok(())
    }
}
