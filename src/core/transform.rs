//! Grid/world coordinate conversion.

use serde::Deserialize;

use crate::core::{GridCoord, WorldPoint};
use crate::error::{PlannerError, Result};

/// Maps grid cell indices to world-frame coordinates.
///
/// The transform is supplied by the mapping subsystem alongside the raw
/// map. It is stateless: conversion happens only at the boundary, when a
/// searched path is turned into world-frame waypoints.
///
/// Invariant: `resolution > 0`. Construct via [`MapTransform::new`] or
/// validate after deserializing.
#[derive(Clone, Copy, Debug, Deserialize)]
pub struct MapTransform {
    /// Cell edge length in meters
    pub resolution: f32,
    /// World coordinates of the outer corner of cell (0, 0)
    pub origin: WorldPoint,
}

impl MapTransform {
    /// Create a transform, rejecting non-positive resolutions.
    pub fn new(resolution: f32, origin: WorldPoint) -> Result<Self> {
        if resolution <= 0.0 {
            return Err(PlannerError::Config(format!(
                "resolution must be positive, got {resolution}"
            )));
        }
        Ok(Self { resolution, origin })
    }

    /// Convert grid coordinates to world coordinates (cell center).
    #[inline]
    pub fn grid_to_world(&self, coord: GridCoord) -> WorldPoint {
        WorldPoint::new(
            self.origin.x + (coord.x as f32 + 0.5) * self.resolution,
            self.origin.y + (coord.y as f32 + 0.5) * self.resolution,
        )
    }

    /// Convert world coordinates to grid coordinates.
    #[inline]
    pub fn world_to_grid(&self, point: WorldPoint) -> GridCoord {
        GridCoord::new(
            ((point.x - self.origin.x) / self.resolution).floor() as i32,
            ((point.y - self.origin.y) / self.resolution).floor() as i32,
        )
    }

    /// Convert a physical radius in meters to a whole-cell radius, at
    /// least one cell.
    pub fn radius_cells(&self, radius_m: f32) -> Result<usize> {
        if radius_m <= 0.0 {
            return Err(PlannerError::Config(format!(
                "robot radius must be positive, got {radius_m}"
            )));
        }
        Ok(((radius_m / self.resolution).round() as usize).max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_bad_resolution() {
        assert!(MapTransform::new(0.0, WorldPoint::ZERO).is_err());
        assert!(MapTransform::new(-0.05, WorldPoint::ZERO).is_err());
    }

    #[test]
    fn test_round_trip() {
        let t = MapTransform::new(0.05, WorldPoint::new(-1.0, 2.0)).unwrap();
        let c = GridCoord::new(10, 7);
        let w = t.grid_to_world(c);
        assert_eq!(t.world_to_grid(w), c);
    }

    #[test]
    fn test_cell_center() {
        let t = MapTransform::new(0.1, WorldPoint::ZERO).unwrap();
        let w = t.grid_to_world(GridCoord::new(0, 0));
        assert!((w.x - 0.05).abs() < 1e-6);
        assert!((w.y - 0.05).abs() < 1e-6);
    }

    #[test]
    fn test_radius_cells() {
        let t = MapTransform::new(0.05, WorldPoint::ZERO).unwrap();
        assert_eq!(t.radius_cells(0.22).unwrap(), 4);
        // Sub-cell radii still inflate by one cell
        assert_eq!(t.radius_cells(0.01).unwrap(), 1);
        assert!(t.radius_cells(0.0).is_err());
    }
}
