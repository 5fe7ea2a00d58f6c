//! Hourly evolution - ages unresolved incidents, flags overdue work, accrues risk

use campusfix_logic::scoring::{
    hourly_risk, is_overdue, neglect_penalty_due, NEGLECT_PENALTY, OVERDUE_PENALTY,
};
use serde::{Deserialize, Serialize};

use crate::components::{IncidentId, IncidentStatus, SimulationState};
use crate::systems::{EventLog, IncidentStore, LogKind};

/// Chance per simulated hour that a fresh incident is reported.
pub const SPAWN_CHANCE_PER_HOUR: f64 = 0.08;

/// What one hourly pass changed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HourOutcome {
    /// Incidents that crossed their overdue threshold this hour
    pub newly_overdue: Vec<IncidentId>,
    /// Incidents that took the neglect penalty this hour
    pub neglected: Vec<IncidentId>,
    pub risk_gained: f64,
    pub score_delta: i64,
}

/// Run the per-hour rules over every unresolved incident, in creation order.
///
/// The clock must already show the new hour; log entries are stamped with it.
pub fn evolve_hour(
    store: &mut IncidentStore,
    state: &mut SimulationState,
    log: &mut EventLog,
) -> HourOutcome {
    let mut outcome = HourOutcome::default();

    for incident in store.unresolved_mut() {
        incident.hours_open += 1;

        let overdue_now = is_overdue(incident.severity, incident.hours_open);
        if overdue_now && !incident.overdue {
            incident.overdue = true;
            outcome.score_delta -= OVERDUE_PENALTY;
            outcome.newly_overdue.push(incident.id);
            log.push(
                state.time,
                LogKind::Overdue,
                format!(
                    "Request at {} ({}) is past its due time!",
                    incident.building_name, incident.description
                ),
            );
        }

        outcome.risk_gained += hourly_risk(incident.severity, overdue_now);

        let untouched = incident.status == IncidentStatus::Open;
        if neglect_penalty_due(incident.hours_open, untouched) {
            outcome.score_delta -= NEGLECT_PENALTY;
            outcome.neglected.push(incident.id);
        }
    }

    state.score += outcome.score_delta;
    state.total_risk += outcome.risk_gained;

    log::debug!(
        "{}: risk +{:.2}, score {:+}, {} newly overdue",
        state.time,
        outcome.risk_gained,
        outcome.score_delta,
        outcome.newly_overdue.len()
    );

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{IncidentDraft, IncidentOrigin};
    use campusfix_logic::catalog::BUILDINGS;
    use campusfix_logic::severity::Severity;
    use campusfix_logic::time::SimTime;

    fn store_with(severities: &[Severity]) -> IncidentStore {
        let mut store = IncidentStore::new();
        for &severity in severities {
            store.insert(
                IncidentDraft {
                    building: &BUILDINGS[0],
                    description: "Test".to_string(),
                    severity,
                    cost: 100,
                    hours_required: 1,
                    origin: IncidentOrigin::Random,
                },
                SimTime::START,
            );
        }
        store
    }

    #[test]
    fn test_hours_open_increments() {
        let mut store = store_with(&[Severity::Low, Severity::Medium]);
        let mut state = SimulationState::new();
        let mut log = EventLog::new();

        evolve_hour(&mut store, &mut state, &mut log);
        evolve_hour(&mut store, &mut state, &mut log);

        assert!(store.iter().all(|i| i.hours_open == 2));
        // (0.25 + 0.6) * 2
        assert!((state.total_risk - 1.7).abs() < 1e-9);
    }

    #[test]
    fn test_resolved_incidents_are_frozen() {
        let mut store = store_with(&[Severity::High]);
        if let Some(i) = store.get_mut(1) {
            i.status = IncidentStatus::Resolved;
        }
        let mut state = SimulationState::new();
        let mut log = EventLog::new();

        let outcome = evolve_hour(&mut store, &mut state, &mut log);

        assert_eq!(store.get(1).map(|i| i.hours_open), Some(0));
        assert_eq!(outcome.risk_gained, 0.0);
        assert_eq!(state.total_risk, 0.0);
    }

    #[test]
    fn test_critical_turns_overdue_after_four_hours() {
        let mut store = store_with(&[Severity::Critical]);
        let mut state = SimulationState::new();
        let mut log = EventLog::new();

        for _ in 0..4 {
            let outcome = evolve_hour(&mut store, &mut state, &mut log);
            assert!(outcome.newly_overdue.is_empty());
        }
        let outcome = evolve_hour(&mut store, &mut state, &mut log);
        assert_eq!(outcome.newly_overdue, vec![1]);
        assert_eq!(outcome.score_delta, -2);
        assert!((outcome.risk_gained - 5.0).abs() < 1e-9);
        assert_eq!(log.of_kind(LogKind::Overdue).count(), 1);

        // No second penalty
        let outcome = evolve_hour(&mut store, &mut state, &mut log);
        assert!(outcome.newly_overdue.is_empty());
        assert_eq!(outcome.score_delta, 0);
        assert_eq!(state.score, -2);
    }

    #[test]
    fn test_neglect_penalty_only_while_open() {
        let mut store = store_with(&[Severity::Low, Severity::Low]);
        if let Some(i) = store.get_mut(2) {
            i.status = IncidentStatus::InProgress;
        }
        let mut state = SimulationState::new();
        let mut log = EventLog::new();

        let mut neglected = Vec::new();
        for _ in 0..8 {
            neglected.extend(evolve_hour(&mut store, &mut state, &mut log).neglected);
        }

        assert_eq!(neglected, vec![1]);
        assert_eq!(state.score, -1);
        // In-progress work still ages
        assert_eq!(store.get(2).map(|i| i.hours_open), Some(8));
    }
}
