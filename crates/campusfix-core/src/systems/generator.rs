//! Incident generator - random incidents from the catalog, and staff reports
//!
//! Random incidents pick a building and description uniformly, a severity
//! from the weighted roll, then cost and duration uniformly within that
//! severity's ranges. Manual reports supply their own fields and are
//! validated before anything is filed.

use campusfix_logic::catalog::{find_building, BUILDINGS, INCIDENT_DESCRIPTIONS};
use campusfix_logic::severity::Severity;
use rand::Rng;

use crate::components::{IncidentDraft, IncidentOrigin};
use crate::error::{SimError, SimResult};

/// Cost used when a staff report leaves the cost blank or unreadable.
pub const DEFAULT_MANUAL_COST: u32 = 1000;

/// Duration used when a staff report leaves the hours blank or unreadable.
pub const DEFAULT_MANUAL_HOURS: u32 = 2;

/// Roll a random incident draft.
pub fn roll_incident(rng: &mut impl Rng) -> IncidentDraft {
    let building = &BUILDINGS[rng.gen_range(0..BUILDINGS.len())];
    let severity = roll_severity(rng);
    let description = INCIDENT_DESCRIPTIONS[rng.gen_range(0..INCIDENT_DESCRIPTIONS.len())];

    let profile = severity.profile();
    let (min_cost, max_cost) = profile.cost_range;
    let (min_hours, max_hours) = profile.hours_range;

    IncidentDraft {
        building,
        description: description.to_string(),
        severity,
        cost: rng.gen_range(min_cost..=max_cost),
        hours_required: rng.gen_range(min_hours..=max_hours),
        origin: IncidentOrigin::Random,
    }
}

/// Draw a severity with the fixed 45/25/20/10 weighting.
pub fn roll_severity(rng: &mut impl Rng) -> Severity {
    Severity::from_roll(rng.gen::<f64>())
}

/// An incident reported by staff through the manual form.
#[derive(Debug, Clone, PartialEq)]
pub struct ManualIncident {
    pub building_id: String,
    pub description: String,
    pub severity: Severity,
    /// `None` falls back to [`DEFAULT_MANUAL_COST`]
    pub cost: Option<u32>,
    /// `None` falls back to [`DEFAULT_MANUAL_HOURS`]
    pub hours_required: Option<u32>,
}

impl ManualIncident {
    pub fn new(building_id: impl Into<String>, description: impl Into<String>, severity: Severity) -> Self {
        Self {
            building_id: building_id.into(),
            description: description.into(),
            severity,
            cost: None,
            hours_required: None,
        }
    }

    pub fn with_cost(mut self, cost: u32) -> Self {
        self.cost = Some(cost);
        self
    }

    pub fn with_hours(mut self, hours: u32) -> Self {
        self.hours_required = Some(hours);
        self
    }

    /// Build a report from raw form fields.
    ///
    /// Cost and hours are read from their leading digits, so `"3.5"` is 3 and
    /// `"12abc"` is 12. A field with no leading digit (blank, text, or a
    /// negative number) is treated as blank. An unrecognised severity name is
    /// an error.
    pub fn from_form(
        building_id: &str,
        description: &str,
        severity: &str,
        cost: &str,
        hours_required: &str,
    ) -> SimResult<Self> {
        let severity: Severity = severity
            .parse()
            .map_err(|_| SimError::UnknownSeverity(severity.to_string()))?;
        Ok(Self {
            building_id: building_id.to_string(),
            description: description.to_string(),
            severity,
            cost: parse_leading_count(cost),
            hours_required: parse_leading_count(hours_required),
        })
    }

    /// Check the report against the catalog and resolve defaults.
    pub fn into_draft(self) -> SimResult<IncidentDraft> {
        let description = self.description.trim();
        if description.is_empty() {
            return Err(SimError::EmptyDescription);
        }
        let building = find_building(&self.building_id)
            .ok_or_else(|| SimError::UnknownBuilding(self.building_id.clone()))?;

        Ok(IncidentDraft {
            building,
            description: description.to_string(),
            severity: self.severity,
            cost: self.cost.unwrap_or(DEFAULT_MANUAL_COST),
            hours_required: self.hours_required.unwrap_or(DEFAULT_MANUAL_HOURS),
            origin: IncidentOrigin::Manual,
        })
    }
}

/// Leading decimal digits of a trimmed form field, if any fit in a `u32`.
fn parse_leading_count(field: &str) -> Option<u32> {
    let field = field.trim();
    let end = field
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(field.len());
    field[..end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_rolled_incident_within_profile() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..500 {
            let draft = roll_incident(&mut rng);
            let profile = draft.severity.profile();
            assert!(draft.cost >= profile.cost_range.0 && draft.cost <= profile.cost_range.1);
            assert!(
                draft.hours_required >= profile.hours_range.0
                    && draft.hours_required <= profile.hours_range.1
            );
            assert!(INCIDENT_DESCRIPTIONS.contains(&draft.description.as_str()));
            assert_eq!(draft.origin, IncidentOrigin::Random);
        }
    }

    #[test]
    fn test_rolls_reach_every_building() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let mut seen = [false; BUILDINGS.len()];
        for _ in 0..1000 {
            let draft = roll_incident(&mut rng);
            if let Some(idx) = BUILDINGS.iter().position(|b| b.id == draft.building.id) {
                seen[idx] = true;
            }
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_severity_distribution() {
        let mut rng = ChaCha8Rng::seed_from_u64(2024);
        let trials = 100_000;
        let mut counts = [0usize; 4];
        for _ in 0..trials {
            counts[roll_severity(&mut rng).rank() as usize] += 1;
        }
        for severity in Severity::ALL {
            let share = counts[severity.rank() as usize] as f64 / trials as f64;
            assert!(
                (share - severity.roll_probability()).abs() < 0.01,
                "{:?}: {:.3}",
                severity,
                share
            );
        }
    }

    #[test]
    fn test_manual_defaults() {
        let draft = ManualIncident::new("B2", "  Projector flickers ", Severity::Low)
            .into_draft()
            .unwrap();
        assert_eq!(draft.cost, DEFAULT_MANUAL_COST);
        assert_eq!(draft.hours_required, DEFAULT_MANUAL_HOURS);
        assert_eq!(draft.description, "Projector flickers");
        assert_eq!(draft.building.id, "B2");
        assert_eq!(draft.origin, IncidentOrigin::Manual);
    }

    #[test]
    fn test_manual_explicit_values() {
        let draft = ManualIncident::new("B7", "Server room AC down", Severity::Critical)
            .with_cost(15_000)
            .with_hours(6)
            .into_draft()
            .unwrap();
        assert_eq!(draft.cost, 15_000);
        assert_eq!(draft.hours_required, 6);
    }

    #[test]
    fn test_manual_rejects_blank_description() {
        let result = ManualIncident::new("B1", "   ", Severity::High).into_draft();
        assert_eq!(result, Err(SimError::EmptyDescription));
    }

    #[test]
    fn test_manual_rejects_unknown_building() {
        let result = ManualIncident::new("B42", "Cracked wall", Severity::High).into_draft();
        assert_eq!(result, Err(SimError::UnknownBuilding("B42".to_string())));
    }

    #[test]
    fn test_from_form_fallbacks() {
        let manual = ManualIncident::from_form("B3", "Printer jam", "medium", "abc", "").unwrap();
        assert_eq!(manual.severity, Severity::Medium);
        assert_eq!(manual.cost, None);
        assert_eq!(manual.hours_required, None);

        let manual = ManualIncident::from_form("B3", "Printer jam", "High", " 2500 ", "-3").unwrap();
        assert_eq!(manual.cost, Some(2500));
        assert_eq!(manual.hours_required, None);
    }

    #[test]
    fn test_from_form_reads_leading_digits() {
        let manual = ManualIncident::from_form("B1", "Leak", "Low", "12abc", "3.5").unwrap();
        assert_eq!(manual.cost, Some(12));
        assert_eq!(manual.hours_required, Some(3));

        let draft = manual.into_draft().unwrap();
        assert_eq!(draft.cost, 12);
        assert_eq!(draft.hours_required, 3);

        let manual = ManualIncident::from_form("B1", "Leak", "Low", "abc", "0").unwrap();
        assert_eq!(manual.cost, None);
        assert_eq!(manual.hours_required, Some(0));
    }

    #[test]
    fn test_from_form_overflow_is_blank() {
        let manual = ManualIncident::from_form("B1", "Leak", "Low", "99999999999", "4").unwrap();
        assert_eq!(manual.cost, None);
        assert_eq!(manual.hours_required, Some(4));
    }

    #[test]
    fn test_from_form_unknown_severity() {
        let result = ManualIncident::from_form("B3", "Printer jam", "Severe", "100", "1");
        assert_eq!(result, Err(SimError::UnknownSeverity("Severe".to_string())));
    }
}
