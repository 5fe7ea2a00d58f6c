//! Session configuration, loadable from JSON.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{SimError, SimResult};

/// Knobs for building a [`SimulationSession`](crate::engine::SimulationSession).
///
/// Missing fields take their defaults, so `{}` is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SessionConfig {
    /// RNG seed; when absent one is drawn and recorded on the session
    pub seed: Option<u64>,
    /// Random incidents filed when a game starts
    pub opening_incidents: usize,
    /// Whether each simulated hour may spawn a fresh incident
    pub spontaneous_incidents: bool,
    /// Keep only this many event log entries
    pub log_capacity: Option<usize>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: None,
            opening_incidents: 3,
            spontaneous_incidents: true,
            log_capacity: None,
        }
    }
}

impl SessionConfig {
    /// A reproducible config with no spontaneous spawns and an empty campus.
    pub fn quiet(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            opening_incidents: 0,
            spontaneous_incidents: false,
            log_capacity: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn from_json_str(json: &str) -> SimResult<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| SimError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> SimResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| SimError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> SimResult<()> {
        if self.log_capacity == Some(0) {
            return Err(SimError::Config(
                "log_capacity must be at least 1 when set".to_string(),
            ));
        }
        Ok(())
    }
}
