//! CampusFix Core - Campus Maintenance Simulation Engine
//!
//! A deterministic simulation of a school campus where maintenance incidents
//! are reported across buildings, age hour by hour, accrue risk, and are
//! resolved by spending budget in exchange for score.
//!
//! # Architecture
//!
//! - **Components**: plain records (incidents, session counters)
//! - **Systems**: functions over those records (generation, hourly evolution,
//!   resolution, queries, the event log)
//! - **Engine**: [`SimulationSession`](engine::SimulationSession) owns all
//!   state plus a seeded RNG and exposes the operations a front end calls
//!
//! # Example
//!
//! ```rust
//! use campusfix_core::prelude::*;
//!
//! let mut session = SimulationSession::start(SessionConfig::default().with_seed(42));
//!
//! // Let a working day pass
//! session.advance_time(8).unwrap();
//!
//! // Fix the most pressing incident
//! let worst = session.list(&IncidentFilter::all().status(IncidentStatus::Open))[0].id;
//! let _ = session.resolve_incident(worst);
//! ```

pub mod components;
pub mod config;
pub mod engine;
pub mod error;
pub mod systems;

/// Commonly used types for convenient importing
pub mod prelude {
    pub use crate::components::*;
    pub use crate::config::SessionConfig;
    pub use crate::engine::{AdvanceReport, SimulationSession};
    pub use crate::error::{SimError, SimResult};
    pub use crate::systems::{IncidentFilter, LogKind, ManualIncident, Resolution};
    pub use campusfix_logic::severity::Severity;
}
