//! Incident queries - filtering and the dashboard sort order

use std::cmp::Ordering;

use campusfix_logic::severity::Severity;

use crate::components::{Incident, IncidentStatus};

/// Filter over the incident list. `None` fields match everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IncidentFilter {
    pub status: Option<IncidentStatus>,
    pub severity: Option<Severity>,
    /// Restrict to one building (the building grid focus)
    pub building_id: Option<String>,
}

impl IncidentFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn status(mut self, status: IncidentStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = Some(severity);
        self
    }

    pub fn building(mut self, building_id: impl Into<String>) -> Self {
        self.building_id = Some(building_id.into());
        self
    }

    pub fn matches(&self, incident: &Incident) -> bool {
        self.status.map_or(true, |s| incident.status == s)
            && self.severity.map_or(true, |s| incident.severity == s)
            && self
                .building_id
                .as_deref()
                .map_or(true, |b| incident.building_id == b)
    }
}

/// Dashboard order: unresolved first, then most severe, then newest.
pub fn display_order(a: &Incident, b: &Incident) -> Ordering {
    a.status
        .is_resolved()
        .cmp(&b.status.is_resolved())
        .then_with(|| b.severity.rank().cmp(&a.severity.rank()))
        .then_with(|| b.created_at.cmp(&a.created_at))
}

/// Apply a filter and sort the survivors in display order.
pub fn list_incidents<'a>(
    incidents: impl IntoIterator<Item = &'a Incident>,
    filter: &IncidentFilter,
) -> Vec<&'a Incident> {
    let mut list: Vec<&Incident> = incidents
        .into_iter()
        .filter(|i| filter.matches(i))
        .collect();
    list.sort_by(|a, b| display_order(a, b));
    list
}
