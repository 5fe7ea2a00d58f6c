//! Components - plain data records owned by the session

mod incident;
mod state;

pub use incident::*;
pub use state::*;
