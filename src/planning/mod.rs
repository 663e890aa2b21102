//! Path planning: best-first search and waypoint simplification.

mod search;
mod simplify;
mod types;

pub use search::{PathSearcher, SearchConfig};
pub use simplify::WaypointSimplifier;
pub use types::PlannedPath;
