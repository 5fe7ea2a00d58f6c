//! Resolution engine - budget checks, lifecycle transitions and score rewards

use campusfix_logic::display::format_currency;
use campusfix_logic::scoring::{resolution_score, ScoreBreakdown, REJECTED_RESOLUTION_PENALTY};
use serde::{Deserialize, Serialize};

use crate::components::{Incident, IncidentId, IncidentStatus, SimulationState};
use crate::error::{SimError, SimResult};
use crate::systems::{EventLog, LogKind};

/// Result of a successful resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    pub id: IncidentId,
    pub cost: u32,
    pub hours_open: u32,
    pub was_overdue: bool,
    pub score: ScoreBreakdown,
}

impl Resolution {
    pub fn score_gain(&self) -> i64 {
        self.score.total()
    }
}

/// Move an incident from `Open` to `InProgress`.
pub fn begin_work(incident: &mut Incident) -> SimResult<()> {
    match incident.status {
        IncidentStatus::Open => {
            incident.status = IncidentStatus::InProgress;
            Ok(())
        }
        IncidentStatus::InProgress => Err(SimError::AlreadyInProgress(incident.id)),
        IncidentStatus::Resolved => Err(SimError::AlreadyResolved(incident.id)),
    }
}

/// Refuse a repair the budget cannot cover.
///
/// A refusal costs a point and is logged; the incident itself is untouched.
pub fn ensure_affordable(
    incident: &Incident,
    state: &mut SimulationState,
    log: &mut EventLog,
) -> SimResult<()> {
    if state.can_afford(incident.cost) {
        return Ok(());
    }

    state.score -= REJECTED_RESOLUTION_PENALTY;
    log.push(
        state.time,
        LogKind::BudgetShortfall,
        format!(
            "Not enough budget for the job at {} ({})",
            incident.building_name, incident.description
        ),
    );
    Err(SimError::InsufficientBudget {
        id: incident.id,
        cost: incident.cost,
        budget: state.budget,
    })
}

/// Close out an in-progress incident: pay for it and award the score.
///
/// Callers must have passed [`ensure_affordable`] first.
pub fn finish_work(
    incident: &mut Incident,
    state: &mut SimulationState,
    log: &mut EventLog,
) -> Resolution {
    debug_assert_eq!(incident.status, IncidentStatus::InProgress);

    incident.status = IncidentStatus::Resolved;
    incident.hours_spent = incident.hours_required;
    state.budget -= incident.cost as i64;

    let score = resolution_score(incident.severity, incident.overdue, incident.hours_open);
    if score.earned_fast_response() {
        log.push(
            state.time,
            LogKind::FastResponse,
            format!(
                "Rapid response to an urgent job at {} (+bonus points)",
                incident.building_name
            ),
        );
    }
    state.score += score.total();

    log.push(
        state.time,
        LogKind::Resolved,
        format!(
            "Repair completed at {}: {} (spent {})",
            incident.building_name,
            incident.description,
            format_currency(incident.cost as i64)
        ),
    );

    Resolution {
        id: incident.id,
        cost: incident.cost,
        hours_open: incident.hours_open,
        was_overdue: incident.overdue,
        score,
    }
}
