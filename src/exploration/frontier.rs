//! Frontier detection on a classified occupancy grid.

use log::debug;

use crate::core::{CellState, GridCoord};
use crate::grid::OccupancyGrid;

/// Finds frontier cells: the boundary between explored free space and
/// unseen territory.
///
/// A cell qualifies when it is [`CellState::Free`] and has at least one
/// [`CellState::Unseen`] 8-neighbor and at least one free 8-neighbor.
/// The free-neighbor requirement filters isolated single-cell openings
/// that classification noise produces. Candidates come back sorted by
/// (y, x), so downstream selection is reproducible for a given grid.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrontierDetector;

impl FrontierDetector {
    pub fn new() -> Self {
        Self
    }

    /// All frontier cells of the grid, in row-major order.
    pub fn find_frontier(&self, grid: &OccupancyGrid) -> Vec<GridCoord> {
        let mut frontier = Vec::new();

        for y in 0..grid.height() as i32 {
            for x in 0..grid.width() as i32 {
                let coord = GridCoord::new(x, y);
                if grid.get(coord) != Some(CellState::Free) {
                    continue;
                }
                if Self::is_frontier_cell(grid, coord) {
                    frontier.push(coord);
                }
            }
        }

        debug!(
            "[Frontier] {} candidates on {}x{} grid",
            frontier.len(),
            grid.width(),
            grid.height()
        );
        frontier
    }

    fn is_frontier_cell(grid: &OccupancyGrid, coord: GridCoord) -> bool {
        let mut has_unseen = false;
        let mut has_free = false;

        for neighbor in coord.neighbors_8() {
            match grid.get(neighbor) {
                Some(CellState::Unseen) => has_unseen = true,
                Some(CellState::Free) => has_free = true,
                _ => {}
            }
            if has_unseen && has_free {
                return true;
            }
        }
        false
    }
}
