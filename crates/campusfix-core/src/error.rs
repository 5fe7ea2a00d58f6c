//! Errors returned by session operations.
//!
//! Rejections are soft: apart from the budget shortfall penalty, a rejected
//! operation leaves the session exactly as it was.

use thiserror::Error;

use crate::components::IncidentId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimError {
    #[error("incident #{0} does not exist")]
    IncidentNotFound(IncidentId),

    #[error("incident #{0} is already resolved")]
    AlreadyResolved(IncidentId),

    #[error("work on incident #{0} has already started")]
    AlreadyInProgress(IncidentId),

    #[error("incident #{0} is not in progress")]
    NotInProgress(IncidentId),

    #[error("incident #{id} costs {cost} but only {budget} is left in the budget")]
    InsufficientBudget { id: IncidentId, cost: u32, budget: i64 },

    #[error("incident description is empty")]
    EmptyDescription,

    #[error("unknown building '{0}'")]
    UnknownBuilding(String),

    #[error("unknown severity '{0}'")]
    UnknownSeverity(String),

    #[error("time can only advance by at least one hour")]
    ZeroHours,

    #[error("invalid configuration: {0}")]
    Config(String),
}

pub type SimResult<T> = Result<T, SimError>;
