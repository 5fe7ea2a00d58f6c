//! Session-wide counters: clock, budget, score and accumulated risk

use campusfix_logic::time::SimTime;
use serde::{Deserialize, Serialize};

/// Budget every session starts with.
pub const STARTING_BUDGET: i64 = 100_000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationState {
    /// Current simulated time
    pub time: SimTime,
    /// Remaining budget
    pub budget: i64,
    /// Running score (may go negative)
    pub score: i64,
    /// Accumulated hazard exposure, never decreases
    pub total_risk: f64,
    /// Number of hourly evolution passes run so far
    pub hours_elapsed: u64,
}

impl SimulationState {
    pub fn new() -> Self {
        Self {
            time: SimTime::START,
            budget: STARTING_BUDGET,
            score: 0,
            total_risk: 0.0,
            hours_elapsed: 0,
        }
    }

    pub fn day(&self) -> u32 {
        self.time.day
    }

    pub fn hour(&self) -> u8 {
        self.time.hour
    }

    pub fn can_afford(&self, cost: u32) -> bool {
        cost as i64 <= self.budget
    }
}

impl Default for SimulationState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = SimulationState::new();
        assert_eq!(state.day(), 1);
        assert_eq!(state.hour(), 8);
        assert_eq!(state.budget, 100_000);
        assert_eq!(state.score, 0);
        assert_eq!(state.total_risk, 0.0);
        assert_eq!(state.hours_elapsed, 0);
    }

    #[test]
    fn test_can_afford_is_inclusive() {
        let state = SimulationState::new();
        assert!(state.can_afford(100_000));
        assert!(!state.can_afford(100_001));
    }
}
