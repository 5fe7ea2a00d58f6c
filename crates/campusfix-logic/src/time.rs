//! Simulated day/hour clock.
//!
//! Time moves in whole-hour steps only. Days start at 1, hours run 0..=23,
//! and every session starts at 08:00 on day 1.

use std::fmt;

use serde::{Deserialize, Serialize};

pub const HOURS_PER_DAY: u8 = 24;

/// Start of the first shift.
pub const START_DAY: u32 = 1;
pub const START_HOUR: u8 = 8;

/// A point on the simulated clock. Orders by day, then hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SimTime {
    pub day: u32,
    pub hour: u8,
}

impl SimTime {
    pub const START: SimTime = SimTime {
        day: START_DAY,
        hour: START_HOUR,
    };

    pub fn new(day: u32, hour: u8) -> Self {
        Self { day, hour }
    }

    /// Step forward one hour. Returns `true` when the step rolled into a new day.
    pub fn advance_hour(&mut self) -> bool {
        self.hour += 1;
        if self.hour >= HOURS_PER_DAY {
            self.hour = 0;
            self.day += 1;
            true
        } else {
            false
        }
    }

    /// Hours since 00:00 of day 1.
    pub fn as_hours(&self) -> u64 {
        (self.day as u64).saturating_sub(1) * HOURS_PER_DAY as u64 + self.hour as u64
    }
}

impl Default for SimTime {
    fn default() -> Self {
        Self::START
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Day {}, {:02}:00", self.day, self.hour)
    }
}
