//! Severity levels and their static profiles.
//!
//! Each level maps to a fixed [`SeverityProfile`] governing the cost and
//! duration ranges of new incidents, risk accrual per open hour, and the
//! overdue threshold. Random incidents pick a level with [`Severity::from_roll`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Incident severity, ordered from least to most urgent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

/// Static configuration for one severity level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeverityProfile {
    /// Human-readable label used in log messages.
    pub label: &'static str,
    /// Inclusive repair cost range.
    pub cost_range: (u32, u32),
    /// Inclusive repair duration range, in hours.
    pub hours_range: (u32, u32),
    /// Risk added per open hour (doubled once overdue).
    pub risk_per_hour: f64,
    /// An incident becomes overdue once it has been open longer than this.
    pub overdue_after_hours: u32,
}

const LOW: SeverityProfile = SeverityProfile {
    label: "Low",
    cost_range: (300, 800),
    hours_range: (1, 2),
    risk_per_hour: 0.25,
    overdue_after_hours: 24,
};

const MEDIUM: SeverityProfile = SeverityProfile {
    label: "Medium",
    cost_range: (800, 2500),
    hours_range: (2, 4),
    risk_per_hour: 0.6,
    overdue_after_hours: 16,
};

const HIGH: SeverityProfile = SeverityProfile {
    label: "High",
    cost_range: (2500, 8000),
    hours_range: (3, 6),
    risk_per_hour: 1.2,
    overdue_after_hours: 8,
};

const CRITICAL: SeverityProfile = SeverityProfile {
    label: "Critical",
    cost_range: (8000, 18000),
    hours_range: (2, 5),
    risk_per_hour: 2.5,
    overdue_after_hours: 4,
};

/// Upper bounds of the cumulative severity roll, checked in this order.
///
/// Medium is the most common outcome (45%), then Low (25%), High (20%),
/// and Critical takes the remainder (10%).
const ROLL_TABLE: [(f64, Severity); 3] = [
    (0.45, Severity::Medium),
    (0.70, Severity::Low),
    (0.90, Severity::High),
];

impl Severity {
    /// All levels, least urgent first.
    pub const ALL: [Severity; 4] = [
        Severity::Low,
        Severity::Medium,
        Severity::High,
        Severity::Critical,
    ];

    pub fn profile(self) -> &'static SeverityProfile {
        match self {
            Severity::Low => &LOW,
            Severity::Medium => &MEDIUM,
            Severity::High => &HIGH,
            Severity::Critical => &CRITICAL,
        }
    }

    pub fn label(self) -> &'static str {
        self.profile().label
    }

    /// Display rank: Critical 3, High 2, Medium 1, Low 0.
    pub fn rank(self) -> u8 {
        self as u8
    }

    /// Map a uniform draw in `[0, 1)` to a severity.
    pub fn from_roll(roll: f64) -> Self {
        ROLL_TABLE
            .iter()
            .find(|(bound, _)| roll < *bound)
            .map(|(_, severity)| *severity)
            .unwrap_or(Severity::Critical)
    }

    /// Whether a quick fix of this level earns the fast-response bonus.
    pub fn is_urgent(self) -> bool {
        matches!(self, Severity::High | Severity::Critical)
    }

    /// Expected share of random incidents at this level.
    pub fn roll_probability(self) -> f64 {
        match self {
            Severity::Medium => 0.45,
            Severity::Low => 0.25,
            Severity::High => 0.20,
            Severity::Critical => 0.10,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returned when a severity name is not one of the four levels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSeverityError(pub String);

impl fmt::Display for ParseSeverityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown severity '{}'", self.0)
    }
}

impl std::error::Error for ParseSeverityError {}

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Severity::Low),
            "medium" => Ok(Severity::Medium),
            "high" => Ok(Severity::High),
            "critical" => Ok(Severity::Critical),
            _ => Err(ParseSeverityError(s.to_string())),
        }
    }
}
