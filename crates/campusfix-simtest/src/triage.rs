//! Headless triage player.
//!
//! Plays a session hour by hour. After each hour the crews take the most
//! pressing unresolved incidents in dashboard order, skipping any the budget
//! cannot cover so no shortfall penalty is ever taken.

use std::error::Error;

use campusfix_core::engine::SessionSnapshot;
use campusfix_core::prelude::*;
use campusfix_logic::catalog::BUILDINGS;
use campusfix_logic::display::{format_currency, format_risk};
use campusfix_logic::time::HOURS_PER_DAY;
use serde::Serialize;

/// Tallies kept while the player runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TriageStats {
    pub resolved: usize,
    pub skipped_unaffordable: usize,
    pub fast_responses: usize,
    pub resolved_overdue: usize,
    pub score_from_repairs: i64,
    pub neglect_penalties: usize,
}

#[derive(Serialize)]
struct RunReport<'a> {
    stats: &'a TriageStats,
    session: SessionSnapshot<'a>,
}

/// Resolve up to `crews` unresolved incidents, most pressing first.
pub fn triage_hour(session: &mut SimulationSession, crews: usize, stats: &mut TriageStats) {
    let queue: Vec<(IncidentId, u32)> = session
        .list(&IncidentFilter::all())
        .into_iter()
        .filter(|i| i.is_unresolved())
        .map(|i| (i.id, i.cost))
        .collect();

    let mut dispatched = 0;
    for (id, cost) in queue {
        if dispatched == crews {
            break;
        }
        if !session.state().can_afford(cost) {
            stats.skipped_unaffordable += 1;
            continue;
        }
        match session.resolve_incident(id) {
            Ok(resolution) => {
                dispatched += 1;
                stats.resolved += 1;
                stats.score_from_repairs += resolution.score_gain();
                if resolution.score.earned_fast_response() {
                    stats.fast_responses += 1;
                }
                if resolution.was_overdue {
                    stats.resolved_overdue += 1;
                }
            }
            Err(e) => log::warn!("triage skipped #{}: {}", id, e),
        }
    }
}

/// Play `days` simulated days with the triage policy.
pub fn play(session: &mut SimulationSession, days: u32, crews: usize) -> TriageStats {
    let mut stats = TriageStats::default();
    let hours = days * HOURS_PER_DAY as u32;
    for _ in 0..hours {
        // One-hour advances never fail
        if let Ok(report) = session.advance_time(1) {
            stats.neglect_penalties += report.neglected.len();
            triage_hour(session, crews, &mut stats);
        }
    }
    stats
}

pub fn run(
    config: SessionConfig,
    days: u32,
    crews: usize,
    json: bool,
    verbose: bool,
) -> Result<(), Box<dyn Error>> {
    let mut session = SimulationSession::start(config);
    let stats = play(&mut session, days, crews);

    if json {
        let report = RunReport {
            stats: &stats,
            session: session.snapshot(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_summary(&session, &stats, days, crews);
    if verbose {
        println!(
            "\n--- Event Log ({} of {} entries kept) ---",
            session.log().len(),
            session.log().total_appended()
        );
        for entry in session.log().entries() {
            println!("  {}", entry);
        }
    }
    Ok(())
}

fn print_summary(session: &SimulationSession, stats: &TriageStats, days: u32, crews: usize) {
    let state = session.state();
    println!("=== CampusFix Triage Run ===\n");
    println!("  Seed:          {}", session.seed());
    println!("  Played:        {} day(s), {} crew(s)", days, crews);
    println!("  Clock:         {}", state.time);
    println!("  Budget:        {}", format_currency(state.budget));
    println!("  Score:         {}", state.score);
    println!("  Total risk:    {}", format_risk(state.total_risk));
    println!("  Reported:      {}", session.incidents().len());
    println!("  Resolved:      {}", stats.resolved);
    println!("  Fast fixes:    {}", stats.fast_responses);
    println!("  Late fixes:    {}", stats.resolved_overdue);
    println!("  Neglected:     {}", stats.neglect_penalties);
    println!(
        "  Open:          {} ({} in progress)",
        session.count_with_status(IncidentStatus::Open),
        session.count_with_status(IncidentStatus::InProgress)
    );
    println!("  Overdue:       {}", session.overdue_count());

    println!("\n--- Open Requests by Building ---");
    for building in BUILDINGS.iter() {
        println!(
            "  {:3} {:36} {}",
            building.id,
            building.name,
            session.open_count_in(building.id)
        );
    }

    let open = session.list(&IncidentFilter::all());
    let open: Vec<&Incident> = open.into_iter().filter(|i| i.is_unresolved()).collect();
    if !open.is_empty() {
        println!("\n--- Still Waiting ---");
        for incident in open {
            println!(
                "  #{:<4} {:8} {:12} {:>4}h {:>12}{}  {}",
                incident.id,
                incident.severity.label(),
                incident.status.label(),
                incident.hours_open,
                format_currency(incident.cost as i64),
                if incident.overdue { " !" } else { "  " },
                incident.headline()
            );
        }
    }
}
