//! Incident store - owns every incident record and the id counter

use campusfix_logic::time::SimTime;
use serde::{Deserialize, Serialize};

use crate::components::{Incident, IncidentDraft, IncidentId, IncidentStatus};

/// Incident collection in creation order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncidentStore {
    incidents: Vec<Incident>,
    next_id: IncidentId,
}

impl IncidentStore {
    pub fn new() -> Self {
        Self {
            incidents: Vec::new(),
            next_id: 1,
        }
    }

    /// File a draft under the next id. Ids are never reused.
    pub fn insert(&mut self, draft: IncidentDraft, created_at: SimTime) -> IncidentId {
        let id = self.next_id;
        self.next_id += 1;
        self.incidents.push(draft.into_incident(id, created_at));
        id
    }

    pub fn get(&self, id: IncidentId) -> Option<&Incident> {
        self.incidents.iter().find(|i| i.id == id)
    }

    pub fn get_mut(&mut self, id: IncidentId) -> Option<&mut Incident> {
        self.incidents.iter_mut().find(|i| i.id == id)
    }

    /// All incidents, oldest first.
    pub fn all(&self) -> &[Incident] {
        &self.incidents
    }

    pub fn iter(&self) -> impl Iterator<Item = &Incident> {
        self.incidents.iter()
    }

    pub(crate) fn unresolved_mut(&mut self) -> impl Iterator<Item = &mut Incident> {
        self.incidents.iter_mut().filter(|i| i.is_unresolved())
    }

    pub fn unresolved(&self) -> impl Iterator<Item = &Incident> {
        self.incidents.iter().filter(|i| i.is_unresolved())
    }

    /// Id the next incident will receive.
    pub fn next_id(&self) -> IncidentId {
        self.next_id
    }

    pub fn len(&self) -> usize {
        self.incidents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.incidents.is_empty()
    }

    /// Incidents that are `Open` or `InProgress`.
    pub fn open_count(&self) -> usize {
        self.unresolved().count()
    }

    /// Unresolved incidents carrying the overdue flag.
    pub fn overdue_count(&self) -> usize {
        self.unresolved().filter(|i| i.overdue).count()
    }

    pub fn count_with_status(&self, status: IncidentStatus) -> usize {
        self.incidents.iter().filter(|i| i.status == status).count()
    }

    /// Unresolved incidents in one building.
    pub fn open_count_in(&self, building_id: &str) -> usize {
        self.unresolved()
            .filter(|i| i.building_id == building_id)
            .count()
    }
}

impl Default for IncidentStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::IncidentOrigin;
    use campusfix_logic::catalog::BUILDINGS;
    use campusfix_logic::severity::Severity;

    fn draft(building: usize, severity: Severity) -> IncidentDraft {
        IncidentDraft {
            building: &BUILDINGS[building],
            description: "Test incident".to_string(),
            severity,
            cost: 500,
            hours_required: 1,
            origin: IncidentOrigin::Random,
        }
    }

    #[test]
    fn test_ids_start_at_one_and_increase() {
        let mut store = IncidentStore::new();
        let a = store.insert(draft(0, Severity::Low), SimTime::START);
        let b = store.insert(draft(1, Severity::High), SimTime::START);
        assert_eq!(a, 1);
        assert_eq!(b, 2);
        assert_eq!(store.next_id(), 3);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_lookup() {
        let mut store = IncidentStore::new();
        let id = store.insert(draft(2, Severity::Medium), SimTime::START);
        assert_eq!(store.get(id).map(|i| i.building_id.as_str()), Some("B3"));
        assert!(store.get(99).is_none());
    }

    #[test]
    fn test_counts() {
        let mut store = IncidentStore::new();
        let a = store.insert(draft(0, Severity::Low), SimTime::START);
        store.insert(draft(0, Severity::High), SimTime::START);
        store.insert(draft(3, Severity::Critical), SimTime::START);

        if let Some(i) = store.get_mut(a) {
            i.status = IncidentStatus::Resolved;
        }
        if let Some(i) = store.get_mut(3) {
            i.overdue = true;
        }

        assert_eq!(store.open_count(), 2);
        assert_eq!(store.overdue_count(), 1);
        assert_eq!(store.open_count_in("B1"), 1);
        assert_eq!(store.open_count_in("B4"), 1);
        assert_eq!(store.count_with_status(IncidentStatus::Resolved), 1);
    }
}
