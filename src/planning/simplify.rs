//! Greedy reduction of a cell path to sparse waypoints.

use log::debug;

use crate::core::WorldPoint;
use crate::error::{PlannerError, Result};

use super::types::PlannedPath;

/// Reduces a dense cell path to waypoints a motion controller can chase.
///
/// Single greedy pass: a waypoint is emitted at every direction change
/// (the last cell before the turn) and whenever the accumulated travel
/// distance since the previous waypoint reaches the configured spacing.
/// The path's first and last points are always kept, and the output is a
/// strict subsequence of the input, never reordered or interpolated.
#[derive(Clone, Copy, Debug)]
pub struct WaypointSimplifier {
    spacing_m: f32,
}

impl WaypointSimplifier {
    /// Create a simplifier with the given waypoint spacing in meters.
    pub fn new(spacing_m: f32) -> Result<Self> {
        if !spacing_m.is_finite() || spacing_m <= 0.0 {
            return Err(PlannerError::Config(format!(
                "waypoint spacing must be positive, got {spacing_m}"
            )));
        }
        Ok(Self { spacing_m })
    }

    /// Simplify a planned path to waypoints in world coordinates.
    pub fn simplify(&self, path: &PlannedPath) -> Result<Vec<WorldPoint>> {
        if path.len() < 2 {
            return Err(PlannerError::DegeneratePath { len: path.len() });
        }

        let cells = &path.cells;
        let points = &path.points;

        let mut waypoints = Vec::new();
        // Index of the most recently emitted cell; emitting only strictly
        // later indices keeps the output an ordered subsequence with no
        // duplicates.
        let mut last_emitted: Option<usize> = None;
        let mut emit = |idx: usize, out: &mut Vec<WorldPoint>| {
            if last_emitted.is_none_or(|last| idx > last) {
                out.push(points[idx]);
                last_emitted = Some(idx);
            }
        };

        let mut last_step = None;
        let mut accumulated = 0.0f32;

        for i in 1..cells.len() {
            let step = cells[i] - cells[i - 1];
            if last_step != Some(step) {
                // Direction changed: keep the cell just before the turn
                // and measure spacing from it. The first iteration lands
                // here and emits the start.
                emit(i - 1, &mut waypoints);
                last_step = Some(step);
                accumulated = 0.0;
            }

            accumulated += points[i].distance(&points[i - 1]);
            if accumulated >= self.spacing_m {
                emit(i, &mut waypoints);
                accumulated = 0.0;
            }
        }

        emit(cells.len() - 1, &mut waypoints);

        debug!(
            "[Simplify] {} cells -> {} waypoints at {:.2} m spacing",
            cells.len(),
            waypoints.len(),
            self.spacing_m
        );

        Ok(waypoints)
    }
}
