//! Fundamental value types shared across the planner.

mod cell;
mod point;
mod transform;

pub use cell::CellState;
pub use point::{GridCoord, WorldPoint};
pub use transform::MapTransform;
