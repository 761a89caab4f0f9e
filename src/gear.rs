//! Gear identity.
//!
//! [`GearValue`] is a closed enumeration ordered by gear number, so
//! comparisons like `gear > GearValue::First` read naturally.  Its
//! rendered name is the upper-case form used in gear-change log lines.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// Every gear the gearbox can engage, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
#[repr(u8)]
pub enum GearValue {
    Neutral = 0,
    First = 1,
    Second = 2,
    Third = 3,
    Fourth = 4,
    Fifth = 5,
}

impl GearValue {
    /// Total number of gears, neutral included.
    pub const COUNT: usize = 6;

    /// All gears in ascending order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Neutral,
        Self::First,
        Self::Second,
        Self::Third,
        Self::Fourth,
        Self::Fifth,
    ];

    /// Lowest forward gear.
    pub const LOWEST_DRIVE: Self = Self::First;

    /// Highest forward gear.
    pub const HIGHEST_DRIVE: Self = Self::Fifth;

    /// Gear number (0 for neutral).
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Convert a gear number back to `GearValue`.
    pub fn from_number(n: u8) -> Option<Self> {
        Self::ALL.get(n as usize).copied()
    }

    /// Upper-case name as it appears in log lines.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Neutral => "NEUTRAL",
            Self::First => "FIRST",
            Self::Second => "SECOND",
            Self::Third => "THIRD",
            Self::Fourth => "FOURTH",
            Self::Fifth => "FIFTH",
        }
    }

    /// Whether this is a forward drive gear.
    pub const fn is_drive(self) -> bool {
        !matches!(self, Self::Neutral)
    }
}

impl fmt::Display for GearValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a string does not name a gear.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownGear;

impl fmt::Display for UnknownGear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown gear name")
    }
}

impl std::error::Error for UnknownGear {}

impl FromStr for GearValue {
    type Err = UnknownGear;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|g| g.name().eq_ignore_ascii_case(s.trim()))
            .ok_or(UnknownGear)
    }
}
