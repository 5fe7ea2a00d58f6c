//! Rule checks run by the `validate` subcommand.
//!
//! Each section returns named pass/fail results; the caller prints them and
//! fails the process when any check fails.

use std::collections::HashSet;
use std::error::Error;

use campusfix_core::prelude::*;
use campusfix_logic::catalog::{find_building, BUILDINGS, INCIDENT_DESCRIPTIONS};
use campusfix_logic::display::format_currency;
use campusfix_logic::scoring::resolution_score;
use campusfix_logic::time::SimTime;

use crate::triage;

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

pub fn run(verbose: bool) -> Result<(), Box<dyn Error>> {
    println!("=== CampusFix Simulation Harness ===\n");

    let mut results = Vec::new();

    // 1. Catalog
    results.extend(validate_catalog(verbose));

    // 2. Severity profiles
    results.extend(validate_severity_profiles(verbose));

    // 3. Scoring rules
    results.extend(validate_scoring());

    // 4. Clock and hourly evolution
    results.extend(validate_clock());

    // 5. Spawning and determinism
    results.extend(validate_spawning(verbose));

    // 6. Full triage playthrough
    results.extend(validate_playthrough(verbose));

    // ── Summary ──
    println!();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.iter().filter(|r| !r.passed).count();
    let total = results.len();

    for r in &results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed, total, failed
    );

    if failed > 0 {
        return Err(format!("{} check(s) failed", failed).into());
    }
    Ok(())
}

// ── 1. Catalog ──────────────────────────────────────────────────────────

fn validate_catalog(verbose: bool) -> Vec<TestResult> {
    println!("--- Catalog ---");
    let mut results = Vec::new();

    let ids: HashSet<&str> = BUILDINGS.iter().map(|b| b.id).collect();
    results.push(TestResult {
        name: "catalog_unique_building_ids".into(),
        passed: ids.len() == BUILDINGS.len(),
        detail: format!("{} buildings, {} distinct ids", BUILDINGS.len(), ids.len()),
    });

    let unresolvable: Vec<&str> = BUILDINGS
        .iter()
        .filter(|b| find_building(b.id).map(|f| f.name) != Some(b.name))
        .map(|b| b.id)
        .collect();
    results.push(TestResult {
        name: "catalog_lookup".into(),
        passed: unresolvable.is_empty(),
        detail: if unresolvable.is_empty() {
            "every building resolves by id".into()
        } else {
            format!("lookup failed for {}", unresolvable.join(", "))
        },
    });

    let blank = INCIDENT_DESCRIPTIONS
        .iter()
        .filter(|d| d.trim().is_empty())
        .count();
    results.push(TestResult {
        name: "catalog_descriptions".into(),
        passed: INCIDENT_DESCRIPTIONS.len() == 15 && blank == 0,
        detail: format!(
            "{} descriptions, {} blank",
            INCIDENT_DESCRIPTIONS.len(),
            blank
        ),
    });

    if verbose {
        println!("  Buildings:");
        for b in BUILDINGS.iter() {
            println!("    {:3} {:36} {}", b.id, b.name, b.category);
        }
    }

    results
}

// ── 2. Severity Profiles ────────────────────────────────────────────────

fn validate_severity_profiles(verbose: bool) -> Vec<TestResult> {
    println!("--- Severity Profiles ---");
    let mut results = Vec::new();

    for severity in Severity::ALL {
        let p = severity.profile();
        let sane = p.cost_range.0 <= p.cost_range.1
            && p.hours_range.0 >= 1
            && p.hours_range.0 <= p.hours_range.1
            && p.risk_per_hour > 0.0;
        results.push(TestResult {
            name: format!("profile_{}_ranges", p.label.to_lowercase()),
            passed: sane,
            detail: format!(
                "cost {}-{}, {}-{}h, risk {}/h, overdue after {}h",
                p.cost_range.0,
                p.cost_range.1,
                p.hours_range.0,
                p.hours_range.1,
                p.risk_per_hour,
                p.overdue_after_hours
            ),
        });
    }

    // More urgent levels go overdue sooner and accrue risk faster
    let ordered = Severity::ALL.windows(2).all(|w| {
        let (a, b) = (w[0].profile(), w[1].profile());
        a.overdue_after_hours > b.overdue_after_hours && a.risk_per_hour < b.risk_per_hour
    });
    results.push(TestResult {
        name: "profile_urgency_ordering".into(),
        passed: ordered,
        detail: "thresholds shrink and risk grows with severity".into(),
    });

    let total: f64 = Severity::ALL.iter().map(|s| s.roll_probability()).sum();
    results.push(TestResult {
        name: "profile_roll_probabilities".into(),
        passed: (total - 1.0).abs() < 1e-9,
        detail: format!("probabilities sum to {:.3}", total),
    });

    let boundaries = [
        (0.0, Severity::Medium),
        (0.4499, Severity::Medium),
        (0.45, Severity::Low),
        (0.70, Severity::High),
        (0.8999, Severity::High),
        (0.90, Severity::Critical),
        (0.9999, Severity::Critical),
    ];
    let wrong: Vec<String> = boundaries
        .iter()
        .filter(|(roll, expected)| Severity::from_roll(*roll) != *expected)
        .map(|(roll, _)| roll.to_string())
        .collect();
    results.push(TestResult {
        name: "profile_roll_boundaries".into(),
        passed: wrong.is_empty(),
        detail: if wrong.is_empty() {
            "roll bands map to the right levels".into()
        } else {
            format!("wrong level for rolls {}", wrong.join(", "))
        },
    });

    if verbose {
        for severity in Severity::ALL {
            println!(
                "    {:8} {:>4.0}% of random incidents",
                severity.label(),
                severity.roll_probability() * 100.0
            );
        }
    }

    results
}

// ── 3. Scoring ──────────────────────────────────────────────────────────

fn validate_scoring() -> Vec<TestResult> {
    println!("--- Scoring ---");
    let mut results = Vec::new();

    let cases = [
        (Severity::Critical, false, 3, 12),
        (Severity::Critical, true, 10, 8),
        (Severity::High, false, 4, 9),
        (Severity::High, false, 5, 7),
        (Severity::Medium, false, 1, 5),
        (Severity::Low, true, 30, 1),
    ];
    for (severity, overdue, hours, expected) in cases {
        let got = resolution_score(severity, overdue, hours).total();
        results.push(TestResult {
            name: format!(
                "score_{}_{}h{}",
                severity.label().to_lowercase(),
                hours,
                if overdue { "_overdue" } else { "" }
            ),
            passed: got == expected,
            detail: format!("expected {}, got {}", expected, got),
        });
    }

    // A rejected repair costs a point and changes nothing else
    let mut session = SimulationSession::new(SessionConfig::quiet(1));
    let id = session.create_manual_incident(
        ManualIncident::new("B3", "Generator replacement", Severity::Critical).with_cost(250_000),
    );
    let rejected = id.map(|id| session.resolve_incident(id));
    let untouched = session.state().budget == 100_000 && session.open_count() == 1;
    results.push(TestResult {
        name: "score_budget_shortfall".into(),
        passed: matches!(rejected, Ok(Err(SimError::InsufficientBudget { .. })))
            && session.state().score == -1
            && untouched,
        detail: format!(
            "score {}, budget {}",
            session.state().score,
            format_currency(session.state().budget)
        ),
    });

    results
}

// ── 4. Clock & Evolution ────────────────────────────────────────────────

fn validate_clock() -> Vec<TestResult> {
    println!("--- Clock & Evolution ---");
    let mut results = Vec::new();

    let mut session = SimulationSession::new(SessionConfig::quiet(1));
    let critical = session
        .create_manual_incident(ManualIncident::new("B7", "Server room overheating", Severity::Critical))
        .unwrap_or_default();
    let low = session
        .create_manual_incident(ManualIncident::new("B8", "Goal net torn", Severity::Low))
        .unwrap_or_default();
    let advanced = session.advance_time(48);

    results.push(TestResult {
        name: "clock_two_days".into(),
        passed: advanced.is_ok() && session.time() == SimTime::new(3, 8),
        detail: format!(
            "{} after {}h",
            session.time(),
            session.state().hours_elapsed
        ),
    });

    let hours: Vec<u32> = [critical, low]
        .iter()
        .filter_map(|&id| session.incident(id))
        .map(|i| i.hours_open)
        .collect();
    results.push(TestResult {
        name: "clock_hours_open".into(),
        passed: hours == vec![48, 48],
        detail: format!("hours open {:?}", hours),
    });

    let overdue_logged = session.log().of_kind(LogKind::Overdue).count();
    results.push(TestResult {
        name: "clock_overdue_once".into(),
        passed: overdue_logged == 2 && session.overdue_count() == 2,
        detail: format!("{} overdue notices", overdue_logged),
    });

    // Critical: 4h at 2.5 then 44h at 5.0; Low: 24h at 0.25 then 24h at 0.5
    let expected_risk = 4.0 * 2.5 + 44.0 * 5.0 + 24.0 * 0.25 + 24.0 * 0.5;
    results.push(TestResult {
        name: "clock_risk_accrual".into(),
        passed: (session.state().total_risk - expected_risk).abs() < 1e-6,
        detail: format!(
            "risk {:.2}, expected {:.2}",
            session.state().total_risk,
            expected_risk
        ),
    });

    // Two overdue penalties plus six neglect penalties each
    results.push(TestResult {
        name: "clock_penalties".into(),
        passed: session.state().score == -2 * 2 - 6 * 2,
        detail: format!("score {}", session.state().score),
    });

    results.push(TestResult {
        name: "clock_zero_hours_rejected".into(),
        passed: session.advance_time(0) == Err(SimError::ZeroHours),
        detail: "advancing by zero hours is refused".into(),
    });

    results
}

// ── 5. Spawning & Determinism ───────────────────────────────────────────

fn validate_spawning(verbose: bool) -> Vec<TestResult> {
    println!("--- Spawning & Determinism ---");
    let mut results = Vec::new();

    let config = SessionConfig {
        opening_incidents: 0,
        ..SessionConfig::default().with_seed(2024)
    };
    let hours = 20_000;
    let mut session = SimulationSession::new(config);
    let spawned = session
        .advance_time(hours)
        .map(|r| r.spawned.len())
        .unwrap_or_default();
    let rate = spawned as f64 / hours as f64;
    results.push(TestResult {
        name: "spawn_rate".into(),
        passed: (rate - 0.08).abs() < 0.01,
        detail: format!("{} spawned over {}h ({:.3}/h)", spawned, hours, rate),
    });

    let mut counts = [0usize; 4];
    for incident in session.incidents() {
        counts[incident.severity.rank() as usize] += 1;
    }
    let total = session.incidents().len().max(1) as f64;
    let skewed: Vec<&str> = Severity::ALL
        .iter()
        .filter(|s| (counts[s.rank() as usize] as f64 / total - s.roll_probability()).abs() > 0.05)
        .map(|s| s.label())
        .collect();
    results.push(TestResult {
        name: "spawn_severity_mix".into(),
        passed: skewed.is_empty(),
        detail: format!("Low/Medium/High/Critical = {:?}", counts),
    });

    let ids_increasing = session.incidents().windows(2).all(|w| w[0].id < w[1].id);
    results.push(TestResult {
        name: "spawn_ids_increasing".into(),
        passed: ids_increasing,
        detail: format!("{} incidents", session.incidents().len()),
    });

    let mut a = SimulationSession::start(SessionConfig::default().with_seed(77));
    let mut b = SimulationSession::start(SessionConfig::default().with_seed(77));
    let advanced_a = a.advance_time(240);
    let advanced_b = b.advance_time(240);
    results.push(TestResult {
        name: "spawn_deterministic_seed".into(),
        passed: advanced_a.is_ok()
            && advanced_a == advanced_b
            && a.incidents() == b.incidents()
            && a.state() == b.state(),
        detail: format!("{} incidents each", a.incidents().len()),
    });

    if verbose {
        println!("  Severity mix over {}h: {:?}", hours, counts);
    }

    results
}

// ── 6. Playthrough ──────────────────────────────────────────────────────

fn validate_playthrough(verbose: bool) -> Vec<TestResult> {
    println!("--- Triage Playthrough ---");
    let mut results = Vec::new();

    let mut session = SimulationSession::start(SessionConfig::default().with_seed(7));
    let stats = triage::play(&mut session, 14, 2);

    results.push(TestResult {
        name: "play_budget_non_negative".into(),
        passed: session.state().budget >= 0,
        detail: format!("budget {}", format_currency(session.state().budget)),
    });

    let spent: i64 = session
        .incidents()
        .iter()
        .filter(|i| i.status == IncidentStatus::Resolved)
        .map(|i| i.cost as i64)
        .sum();
    results.push(TestResult {
        name: "play_budget_accounting".into(),
        passed: session.state().budget == 100_000 - spent,
        detail: format!("{} spent on {} repairs", format_currency(spent), stats.resolved),
    });

    let shortfalls = session.log().of_kind(LogKind::BudgetShortfall).count();
    results.push(TestResult {
        name: "play_no_shortfalls".into(),
        passed: shortfalls == 0,
        detail: format!("{} shortfall entries", shortfalls),
    });

    results.push(TestResult {
        name: "play_clock".into(),
        passed: session.time() == SimTime::new(15, 8) && session.state().hours_elapsed == 14 * 24,
        detail: format!("ended at {}", session.time()),
    });

    if verbose {
        println!(
            "  {} resolved, score {}, risk {:.1}",
            stats.resolved,
            session.state().score,
            session.state().total_risk
        );
    }

    results
}
