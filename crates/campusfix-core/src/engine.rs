//! Simulation session - main entry point for running a campus

use campusfix_logic::time::SimTime;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

use crate::components::*;
use crate::config::SessionConfig;
use crate::error::{SimError, SimResult};
use crate::systems::*;

/// One running game: clock, budget, incidents, event log and random source.
pub struct SimulationSession {
    config: SessionConfig,
    /// Seed the RNG was built from, recorded for replays
    seed: u64,
    rng: ChaCha8Rng,
    state: SimulationState,
    store: IncidentStore,
    log: EventLog,
}

/// Summary of one `advance_time` call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdvanceReport {
    pub from: SimTime,
    pub to: SimTime,
    pub hours: u32,
    /// Incidents reported spontaneously during the advance
    pub spawned: Vec<IncidentId>,
    pub newly_overdue: Vec<IncidentId>,
    /// One entry per neglect penalty taken, so an id may repeat
    pub neglected: Vec<IncidentId>,
    pub score_delta: i64,
    pub risk_gained: f64,
}

/// Serializable read-only view for reports.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot<'a> {
    pub seed: u64,
    pub state: &'a SimulationState,
    /// Id the next filed incident will get
    pub next_id: IncidentId,
    pub open_count: usize,
    pub overdue_count: usize,
    pub incidents: &'a [Incident],
}

impl SimulationSession {
    /// Create a session with the fixed starting state and no incidents.
    pub fn new(config: SessionConfig) -> Self {
        let seed = config.seed.unwrap_or_else(rand::random);
        log::debug!("new session, seed {}", seed);
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
            state: SimulationState::new(),
            store: IncidentStore::new(),
            log: EventLog::with_retention(config.log_capacity),
            config,
        }
    }

    /// Create a session and file the configured opening incidents.
    pub fn start(config: SessionConfig) -> Self {
        let mut session = Self::new(config);
        for _ in 0..session.config.opening_incidents {
            session.create_random_incident();
        }
        session
    }

    /// Roll a random incident and file it. Always succeeds.
    pub fn create_random_incident(&mut self) -> IncidentId {
        let draft = roll_incident(&mut self.rng);
        let message = format!(
            "New maintenance request at {}: {} (severity {})",
            draft.building.name,
            draft.description,
            draft.severity.label()
        );
        let id = self.store.insert(draft, self.state.time);
        self.log.push(self.state.time, LogKind::IncidentReported, message);
        id
    }

    /// File a staff report. Invalid reports change nothing.
    pub fn create_manual_incident(&mut self, manual: ManualIncident) -> SimResult<IncidentId> {
        let draft = manual.into_draft().map_err(|e| {
            log::warn!("manual incident rejected: {}", e);
            e
        })?;
        let message = format!(
            "Staff reported a new request at {}: {}",
            draft.building.name, draft.description
        );
        let id = self.store.insert(draft, self.state.time);
        self.log.push(self.state.time, LogKind::StaffReport, message);
        Ok(id)
    }

    /// Advance the clock hour by hour, running the hourly pass after each step.
    pub fn advance_time(&mut self, hours: u32) -> SimResult<AdvanceReport> {
        if hours == 0 {
            return Err(SimError::ZeroHours);
        }

        let score_before = self.state.score;
        let mut report = AdvanceReport {
            from: self.state.time,
            to: self.state.time,
            hours,
            spawned: Vec::new(),
            newly_overdue: Vec::new(),
            neglected: Vec::new(),
            score_delta: 0,
            risk_gained: 0.0,
        };

        for _ in 0..hours {
            self.state.time.advance_hour();
            let outcome = evolve_hour(&mut self.store, &mut self.state, &mut self.log);
            report.newly_overdue.extend(outcome.newly_overdue);
            report.neglected.extend(outcome.neglected);
            report.risk_gained += outcome.risk_gained;

            let roll: f64 = self.rng.gen();
            if self.config.spontaneous_incidents && roll < SPAWN_CHANCE_PER_HOUR {
                report.spawned.push(self.create_random_incident());
            }
            self.state.hours_elapsed += 1;
        }

        report.to = self.state.time;
        report.score_delta = self.state.score - score_before;
        log::info!(
            "advanced {}h to {}: {} spawned, {} overdue, score {:+}",
            hours,
            report.to,
            report.spawned.len(),
            report.newly_overdue.len(),
            report.score_delta
        );
        Ok(report)
    }

    /// Pay for and close an incident in one step.
    ///
    /// Passes through `InProgress` on the way to `Resolved`. An incident that
    /// is already in progress is accepted too.
    pub fn resolve_incident(&mut self, id: IncidentId) -> SimResult<Resolution> {
        let incident = self
            .store
            .get_mut(id)
            .ok_or(SimError::IncidentNotFound(id))?;
        if incident.status.is_resolved() {
            return Err(SimError::AlreadyResolved(id));
        }

        ensure_affordable(incident, &mut self.state, &mut self.log)?;
        if incident.status == IncidentStatus::Open {
            begin_work(incident)?;
        }
        Ok(finish_work(incident, &mut self.state, &mut self.log))
    }

    /// Assign a crew to an open incident without paying for it yet.
    pub fn start_work(&mut self, id: IncidentId) -> SimResult<()> {
        let incident = self
            .store
            .get_mut(id)
            .ok_or(SimError::IncidentNotFound(id))?;
        begin_work(incident)?;
        self.log.push(
            self.state.time,
            LogKind::WorkStarted,
            format!("Work started at {}", incident.headline()),
        );
        Ok(())
    }

    /// Finish an in-progress incident, subject to the same budget check.
    pub fn complete_work(&mut self, id: IncidentId) -> SimResult<Resolution> {
        let incident = self
            .store
            .get_mut(id)
            .ok_or(SimError::IncidentNotFound(id))?;
        match incident.status {
            IncidentStatus::InProgress => {}
            IncidentStatus::Resolved => return Err(SimError::AlreadyResolved(id)),
            IncidentStatus::Open => return Err(SimError::NotInProgress(id)),
        }

        ensure_affordable(incident, &mut self.state, &mut self.log)?;
        Ok(finish_work(incident, &mut self.state, &mut self.log))
    }

    /// Append a free-form note to the event log.
    pub fn append_log_entry(&mut self, message: impl Into<String>) {
        self.log.push(self.state.time, LogKind::Note, message);
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn time(&self) -> SimTime {
        self.state.time
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// All incidents in creation order.
    pub fn incidents(&self) -> &[Incident] {
        self.store.all()
    }

    pub fn incident(&self, id: IncidentId) -> Option<&Incident> {
        self.store.get(id)
    }

    pub fn log(&self) -> &EventLog {
        &self.log
    }

    /// Filtered incidents in dashboard order.
    pub fn list(&self, filter: &IncidentFilter) -> Vec<&Incident> {
        list_incidents(self.store.iter(), filter)
    }

    pub fn open_count(&self) -> usize {
        self.store.open_count()
    }

    pub fn overdue_count(&self) -> usize {
        self.store.overdue_count()
    }

    pub fn count_with_status(&self, status: IncidentStatus) -> usize {
        self.store.count_with_status(status)
    }

    pub fn next_incident_id(&self) -> IncidentId {
        self.store.next_id()
    }

    pub fn open_count_in(&self, building_id: &str) -> usize {
        self.store.open_count_in(building_id)
    }

    pub fn snapshot(&self) -> SessionSnapshot<'_> {
        SessionSnapshot {
            seed: self.seed,
            state: &self.state,
            next_id: self.store.next_id(),
            open_count: self.store.open_count(),
            overdue_count: self.store.overdue_count(),
            incidents: self.store.all(),
        }
    }
}

impl Default for SimulationSession {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}
