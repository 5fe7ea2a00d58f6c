//! Systems - logic that operates on incidents and session state

mod event_log;
mod evolution;
mod generator;
mod query;
mod resolution;
mod store;

pub use event_log::*;
pub use evolution::*;
pub use generator::*;
pub use query::*;
pub use resolution::*;
pub use store::*;
