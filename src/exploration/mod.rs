//! Frontier-based exploration targeting.

mod frontier;
mod goal;

pub use frontier::FrontierDetector;
pub use goal::{GoalPolicy, GoalSelector};
