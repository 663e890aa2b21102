//! Error types for marga-nav.

use thiserror::Error;

use crate::core::GridCoord;

/// Planner error type.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlannerError {
    /// Invalid configuration (threshold ordering, non-positive resolution
    /// or radius, malformed image buffers, TOML parse failures).
    #[error("Configuration error: {0}")]
    Config(String),

    /// A coordinate lies outside the grid extents.
    #[error("Coordinate {coord} outside grid extents {width}x{height}")]
    OutOfBounds {
        coord: GridCoord,
        width: usize,
        height: usize,
    },

    /// Search exhausted without exploring a single cell; the start is
    /// blocked or isolated and no best-effort path exists.
    #[error("Goal unreachable: no cells explored from start {start}")]
    UnreachableGoal { start: GridCoord },

    /// The frontier set was empty when a goal was requested. The caller
    /// should treat this as "nothing left to explore".
    #[error("No frontier cells: map fully explored")]
    NoFrontier,

    /// An empty or single-cell path was passed to the simplifier. The
    /// caller should treat this as a trivial path, not a crash.
    #[error("Path with {len} cells is too short to simplify")]
    DegeneratePath { len: usize },
}

impl From<toml::de::Error> for PlannerError {
    fn from(e: toml::de::Error) -> Self {
        PlannerError::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, PlannerError>;
