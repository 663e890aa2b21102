//! Threshold classification of raw map intensities.

use log::debug;

use crate::core::CellState;
use crate::error::{PlannerError, Result};
use crate::grid::{IntensityImage, OccupancyGrid};

/// Converts a raw intensity map into a tri-state occupancy grid.
///
/// Per-cell intensity (channel mean) is normalized by the maximum over
/// the whole image, then thresholded: values above the wall threshold
/// classify as [`CellState::Wall`], values below the free threshold as
/// [`CellState::Free`], everything between stays [`CellState::Unseen`].
/// Pure function of its input; the original image is untouched.
#[derive(Clone, Copy, Debug)]
pub struct GridClassifier {
    wall_threshold: f32,
    free_threshold: f32,
}

impl GridClassifier {
    /// Create a classifier. Both thresholds must be normalized to [0, 1]
    /// with `free_threshold < wall_threshold`.
    pub fn new(wall_threshold: f32, free_threshold: f32) -> Result<Self> {
        if !(0.0..=1.0).contains(&wall_threshold) || !(0.0..=1.0).contains(&free_threshold) {
            return Err(PlannerError::Config(format!(
                "thresholds must lie in [0, 1]: wall={wall_threshold}, free={free_threshold}"
            )));
        }
        if free_threshold >= wall_threshold {
            return Err(PlannerError::Config(format!(
                "free threshold {free_threshold} must be below wall threshold {wall_threshold}"
            )));
        }
        Ok(Self {
            wall_threshold,
            free_threshold,
        })
    }

    /// Classify an intensity image into an occupancy grid.
    pub fn classify(&self, image: &IntensityImage) -> OccupancyGrid {
        let cells = image.cell_count();

        let mut intensities = Vec::with_capacity(cells);
        let mut max = 0.0f32;
        for idx in 0..cells {
            let v = image.mean_intensity(idx);
            max = max.max(v);
            intensities.push(v);
        }

        // Normalize into [0, 1]; an all-zero image stays all-zero.
        let scale = if max > 0.0 { 1.0 / max } else { 1.0 };

        let mut grid = OccupancyGrid::new(image.width(), image.height());
        for (idx, raw) in intensities.iter().enumerate() {
            let v = raw * scale;
            let state = if v > self.wall_threshold {
                CellState::Wall
            } else if v < self.free_threshold {
                CellState::Free
            } else {
                CellState::Unseen
            };
            if state != CellState::Unseen {
                let coord = crate::core::GridCoord::new(
                    (idx % image.width()) as i32,
                    (idx / image.width()) as i32,
                );
                grid.set(coord, state);
            }
        }

        let counts = grid.count_by_state();
        debug!(
            "[Classify] {}x{}: {} free, {} wall, {} unseen",
            image.width(),
            image.height(),
            counts.free,
            counts.wall,
            counts.unseen
        );

        grid
    }
}
