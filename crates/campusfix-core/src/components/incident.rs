//! Incident records and their lifecycle status

use campusfix_logic::catalog::Building;
use campusfix_logic::severity::Severity;
use campusfix_logic::time::SimTime;
use serde::{Deserialize, Serialize};

/// Incident identifier, assigned sequentially from 1 and never reused.
pub type IncidentId = u32;

/// Lifecycle of a maintenance incident.
///
/// `Open -> InProgress -> Resolved`; `Resolved` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IncidentStatus {
    /// Reported, nobody working on it yet
    Open,
    /// A crew has started work
    InProgress,
    /// Repair finished and paid for
    Resolved,
}

impl IncidentStatus {
    pub fn is_resolved(self) -> bool {
        self == IncidentStatus::Resolved
    }

    pub fn label(self) -> &'static str {
        match self {
            IncidentStatus::Open => "Open",
            IncidentStatus::InProgress => "In Progress",
            IncidentStatus::Resolved => "Resolved",
        }
    }
}

/// How an incident entered the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IncidentOrigin {
    /// Rolled by the generator (on request or spontaneously each hour)
    Random,
    /// Reported by staff through the manual form
    Manual,
}

/// A reported maintenance issue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Incident {
    pub id: IncidentId,
    pub building_id: String,
    /// Building name as it was when the incident was reported
    pub building_name: String,
    pub description: String,
    pub severity: Severity,
    pub status: IncidentStatus,
    pub cost: u32,
    pub hours_required: u32,
    /// Zero until resolution, then equal to `hours_required`
    pub hours_spent: u32,
    /// Simulated hours elapsed while unresolved
    pub hours_open: u32,
    pub created_at: SimTime,
    /// Sticky once set
    pub overdue: bool,
    pub origin: IncidentOrigin,
}

impl Incident {
    pub fn is_unresolved(&self) -> bool {
        !self.status.is_resolved()
    }

    pub fn created_day(&self) -> u32 {
        self.created_at.day
    }

    pub fn created_hour(&self) -> u8 {
        self.created_at.hour
    }

    /// Short "building: description" tag used in log lines.
    pub fn headline(&self) -> String {
        format!("{}: {}", self.building_name, self.description)
    }
}

/// Everything needed to file a new incident except its id and timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct IncidentDraft {
    pub building: &'static Building,
    pub description: String,
    pub severity: Severity,
    pub cost: u32,
    pub hours_required: u32,
    pub origin: IncidentOrigin,
}

impl IncidentDraft {
    pub fn into_incident(self, id: IncidentId, created_at: SimTime) -> Incident {
        Incident {
            id,
            building_id: self.building.id.to_string(),
            building_name: self.building.name.to_string(),
            description: self.description,
            severity: self.severity,
            status: IncidentStatus::Open,
            cost: self.cost,
            hours_required: self.hours_required,
            hours_spent: 0,
            hours_open: 0,
            created_at,
            overdue: false,
            origin: self.origin,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use campusfix_logic::catalog::BUILDINGS;

    #[test]
    fn test_draft_into_incident() {
        let draft = IncidentDraft {
            building: &BUILDINGS[4],
            description: "Leaking tap".to_string(),
            severity: Severity::Medium,
            cost: 1200,
            hours_required: 3,
            origin: IncidentOrigin::Manual,
        };
        let incident = draft.into_incident(7, SimTime::new(2, 14));

        assert_eq!(incident.id, 7);
        assert_eq!(incident.building_id, "B5");
        assert_eq!(incident.building_name, "Cafeteria");
        assert_eq!(incident.status, IncidentStatus::Open);
        assert_eq!(incident.hours_spent, 0);
        assert_eq!(incident.hours_open, 0);
        assert!(!incident.overdue);
        assert_eq!(incident.created_day(), 2);
        assert_eq!(incident.created_hour(), 14);
        assert_eq!(incident.headline(), "Cafeteria: Leaking tap");
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(IncidentStatus::InProgress.label(), "In Progress");
        assert!(IncidentStatus::Resolved.is_resolved());
        assert!(!IncidentStatus::InProgress.is_resolved());
    }
}
