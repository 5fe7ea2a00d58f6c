//! Integration tests for the incident rule set.
//!
//! Exercises: Severity roll → SeverityProfile → hourly risk/penalties
//! → resolution score, the way a session applies them hour by hour.
//!
//! All tests are pure logic: no session, no random source.

use campusfix_logic::catalog::{find_building, BUILDINGS, INCIDENT_DESCRIPTIONS};
use campusfix_logic::display::format_currency;
use campusfix_logic::scoring::{
    hourly_risk, is_overdue, neglect_penalty_due, resolution_score, NEGLECT_PENALTY,
    OVERDUE_PENALTY,
};
use campusfix_logic::severity::Severity;
use campusfix_logic::time::SimTime;

// ── Helpers ────────────────────────────────────────────────────────────

/// Score and risk deltas of leaving one incident untouched for `hours`.
struct Neglect {
    score: i64,
    risk: f64,
    overdue_at: Option<u32>,
}

fn neglect(severity: Severity, hours: u32, untouched: bool) -> Neglect {
    let mut flagged = false;
    let mut out = Neglect {
        score: 0,
        risk: 0.0,
        overdue_at: None,
    };
    for hours_open in 1..=hours {
        let overdue_now = is_overdue(severity, hours_open);
        if overdue_now && !flagged {
            flagged = true;
            out.overdue_at = Some(hours_open);
            out.score -= OVERDUE_PENALTY;
        }
        out.risk += hourly_risk(severity, overdue_now);
        if neglect_penalty_due(hours_open, untouched) {
            out.score -= NEGLECT_PENALTY;
        }
    }
    out
}

// ── Hourly accrual ─────────────────────────────────────────────────────

#[test]
fn critical_left_open_ten_hours() {
    let n = neglect(Severity::Critical, 10, true);
    assert_eq!(n.overdue_at, Some(5));
    // 4h at 2.5 + 6h at 5.0
    assert!((n.risk - 40.0).abs() < 1e-9);
    // -2 overdue, -1 at hour 8
    assert_eq!(n.score, -3);
}

#[test]
fn low_left_open_two_days() {
    let n = neglect(Severity::Low, 48, true);
    assert_eq!(n.overdue_at, Some(25));
    // 24h at 0.25 + 24h at 0.5
    assert!((n.risk - 18.0).abs() < 1e-9);
    // -2 overdue, -1 at 8/16/24/32/40/48
    assert_eq!(n.score, -8);
}

#[test]
fn in_progress_work_skips_neglect_penalty() {
    let n = neglect(Severity::Medium, 24, false);
    assert_eq!(n.overdue_at, Some(17));
    assert_eq!(n.score, -OVERDUE_PENALTY);
}

#[test]
fn overdue_fires_once_per_incident() {
    for severity in Severity::ALL {
        let hours = severity.profile().overdue_after_hours * 3;
        let n = neglect(severity, hours, true);
        assert_eq!(
            n.overdue_at,
            Some(severity.profile().overdue_after_hours + 1),
            "{:?}",
            severity
        );
    }
}

// ── Resolution scoring ─────────────────────────────────────────────────

#[test]
fn resolution_rewards_by_severity() {
    let fresh: Vec<i64> = Severity::ALL
        .iter()
        .map(|&s| resolution_score(s, false, 0).total())
        .collect();
    // Low, Medium, High (+fast), Critical (+fast)
    assert_eq!(fresh, vec![3, 5, 9, 12]);

    let stale: Vec<i64> = Severity::ALL
        .iter()
        .map(|&s| resolution_score(s, true, 100).total())
        .collect();
    assert_eq!(stale, vec![1, 3, 5, 8]);
}

#[test]
fn prompt_fix_beats_late_fix() {
    for severity in Severity::ALL {
        let late_hours = severity.profile().overdue_after_hours + 1;
        let prompt = resolution_score(severity, false, 1).total();
        let late = resolution_score(severity, true, late_hours).total();
        assert!(prompt > late, "{:?}: {} <= {}", severity, prompt, late);
    }
}

// ── Catalog coherence ──────────────────────────────────────────────────

#[test]
fn every_building_resolves_by_id() {
    for b in &BUILDINGS {
        assert_eq!(find_building(b.id), Some(b));
    }
    assert_eq!(INCIDENT_DESCRIPTIONS.len(), 15);
}

#[test]
fn cost_ranges_format_cleanly() {
    let critical = Severity::Critical.profile();
    assert_eq!(format_currency(critical.cost_range.1 as i64), "฿ 18,000");
    assert_eq!(SimTime::START.to_string(), "Day 1, 08:00");
}
