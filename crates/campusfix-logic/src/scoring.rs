//! Score and risk rules.
//!
//! Penalties are applied by the session while time passes; rewards are
//! computed when an incident is resolved. Everything here is a pure function
//! of an incident's severity, its open hours and its overdue flag.

use serde::{Deserialize, Serialize};

use crate::severity::Severity;

/// One-time penalty when an incident first becomes overdue.
pub const OVERDUE_PENALTY: i64 = 2;

/// Recurring penalty for an incident left untouched in `Open`.
pub const NEGLECT_PENALTY: i64 = 1;

/// The neglect penalty fires whenever open hours reach a multiple of this.
pub const NEGLECT_INTERVAL_HOURS: u32 = 8;

/// Penalty for attempting a repair the budget cannot cover.
pub const REJECTED_RESOLUTION_PENALTY: i64 = 1;

/// Bonus for resolving an incident before it became overdue.
pub const ON_TIME_BONUS: i64 = 2;

/// Bonus for a quick fix of a High or Critical incident.
pub const FAST_RESPONSE_BONUS: i64 = 2;

/// Open hours (inclusive) within which the fast-response bonus applies.
pub const FAST_RESPONSE_WINDOW_HOURS: u32 = 4;

/// Base reward for resolving an incident of the given severity.
pub fn base_score(severity: Severity) -> i64 {
    match severity {
        Severity::Critical => 8,
        Severity::High => 5,
        Severity::Medium => 3,
        Severity::Low => 1,
    }
}

/// Itemised reward for one resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub base: i64,
    pub on_time_bonus: i64,
    pub fast_response_bonus: i64,
}

impl ScoreBreakdown {
    pub fn total(&self) -> i64 {
        self.base + self.on_time_bonus + self.fast_response_bonus
    }

    pub fn earned_fast_response(&self) -> bool {
        self.fast_response_bonus > 0
    }
}

/// Compute the reward for resolving an incident.
///
/// The on-time and fast-response bonuses are independent: a Critical incident
/// fixed after 3 hours earns both.
pub fn resolution_score(severity: Severity, overdue: bool, hours_open: u32) -> ScoreBreakdown {
    ScoreBreakdown {
        base: base_score(severity),
        on_time_bonus: if overdue { 0 } else { ON_TIME_BONUS },
        fast_response_bonus: if severity.is_urgent() && hours_open <= FAST_RESPONSE_WINDOW_HOURS {
            FAST_RESPONSE_BONUS
        } else {
            0
        },
    }
}

/// Whether an incident open this long is past its severity's threshold.
pub fn is_overdue(severity: Severity, hours_open: u32) -> bool {
    hours_open > severity.profile().overdue_after_hours
}

/// Risk accrued by one unresolved incident over one hour.
pub fn hourly_risk(severity: Severity, overdue_now: bool) -> f64 {
    let multiplier = if overdue_now { 2.0 } else { 1.0 };
    severity.profile().risk_per_hour * multiplier
}

/// Whether the neglect penalty fires at this hour count.
///
/// Only incidents still exactly `Open` are penalised; work in progress is not.
pub fn neglect_penalty_due(hours_open: u32, untouched: bool) -> bool {
    untouched && hours_open > 0 && hours_open % NEGLECT_INTERVAL_HOURS == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fast_critical_on_time() {
        let score = resolution_score(Severity::Critical, false, 3);
        assert_eq!(score.base, 8);
        assert_eq!(score.on_time_bonus, 2);
        assert_eq!(score.fast_response_bonus, 2);
        assert_eq!(score.total(), 12);
        assert!(score.earned_fast_response());
    }

    #[test]
    fn test_overdue_low_base_only() {
        let score = resolution_score(Severity::Low, true, 30);
        assert_eq!(score.total(), 1);
        assert!(!score.earned_fast_response());
    }

    #[test]
    fn test_fast_bonus_window_is_inclusive() {
        assert_eq!(resolution_score(Severity::High, false, 4).total(), 9);
        assert_eq!(resolution_score(Severity::High, false, 5).total(), 7);
    }

    #[test]
    fn test_fast_bonus_independent_of_overdue() {
        let score = resolution_score(Severity::Critical, true, 2);
        assert_eq!(score.total(), 10);
    }

    #[test]
    fn test_no_fast_bonus_for_medium() {
        assert_eq!(resolution_score(Severity::Medium, false, 0).total(), 5);
    }

    #[test]
    fn test_overdue_threshold_is_strict() {
        assert!(!is_overdue(Severity::Critical, 4));
        assert!(is_overdue(Severity::Critical, 5));
        assert!(!is_overdue(Severity::Low, 24));
        assert!(is_overdue(Severity::Low, 25));
    }

    #[test]
    fn test_hourly_risk_doubles_when_overdue() {
        assert!((hourly_risk(Severity::High, false) - 1.2).abs() < 1e-9);
        assert!((hourly_risk(Severity::High, true) - 2.4).abs() < 1e-9);
    }

    #[test]
    fn test_neglect_penalty_every_eighth_hour() {
        let due: Vec<u32> = (1..=24).filter(|&h| neglect_penalty_due(h, true)).collect();
        assert_eq!(due, vec![8, 16, 24]);
        assert!(!neglect_penalty_due(8, false));
        assert!(!neglect_penalty_due(0, true));
    }
}
