//! Occupancy grid storage.

use crate::core::{CellState, GridCoord};
use crate::error::{PlannerError, Result};

/// Per-state cell counts, for map statistics and diagnostics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StateCounts {
    pub free: usize,
    pub wall: usize,
    pub unseen: usize,
}

/// Tri-state occupancy grid.
///
/// Cells are stored row-major; `(0, 0)` is the first cell of the first
/// row. The grid is rebuilt from fresh sensor data each planning cycle
/// and treated as a static snapshot while planning runs.
#[derive(Clone, Debug)]
pub struct OccupancyGrid {
    states: Vec<CellState>,
    width: usize,
    height: usize,
}

impl OccupancyGrid {
    /// Create a grid with every cell unseen.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            states: vec![CellState::Unseen; width * height],
            width,
            height,
        }
    }

    /// Grid width in cells.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Is the coordinate inside the grid extents?
    #[inline]
    pub fn is_valid_coord(&self, coord: GridCoord) -> bool {
        coord.x >= 0
            && coord.y >= 0
            && (coord.x as usize) < self.width
            && (coord.y as usize) < self.height
    }

    /// Row-major cell index. The coordinate must be in bounds.
    #[inline]
    pub fn index(&self, coord: GridCoord) -> usize {
        debug_assert!(self.is_valid_coord(coord));
        coord.y as usize * self.width + coord.x as usize
    }

    /// Cell state, or `None` outside the grid.
    #[inline]
    pub fn get(&self, coord: GridCoord) -> Option<CellState> {
        if self.is_valid_coord(coord) {
            Some(self.states[self.index(coord)])
        } else {
            None
        }
    }

    /// Set a cell state. Returns false without touching the grid when
    /// the coordinate is out of bounds. Used when building grids;
    /// classified grids are not mutated by the planner.
    #[inline]
    pub fn set(&mut self, coord: GridCoord, state: CellState) -> bool {
        if !self.is_valid_coord(coord) {
            return false;
        }
        let idx = self.index(coord);
        self.states[idx] = state;
        true
    }

    /// Fail with [`PlannerError::OutOfBounds`] unless the coordinate is
    /// inside the grid. Public operations validate their inputs through
    /// this before touching any state.
    pub fn check_bounds(&self, coord: GridCoord) -> Result<()> {
        if self.is_valid_coord(coord) {
            Ok(())
        } else {
            Err(PlannerError::OutOfBounds {
                coord,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Count cells by state.
    pub fn count_by_state(&self) -> StateCounts {
        let mut counts = StateCounts::default();
        for state in &self.states {
            match state {
                CellState::Free => counts.free += 1,
                CellState::Wall => counts.wall += 1,
                CellState::Unseen => counts.unseen += 1,
            }
        }
        counts
    }

    /// Iterate all wall cells.
    pub(crate) fn wall_cells(&self) -> impl Iterator<Item = GridCoord> + '_ {
        self.states.iter().enumerate().filter_map(|(i, s)| {
            if s.is_wall() {
                Some(GridCoord::new(
                    (i % self.width) as i32,
                    (i / self.width) as i32,
                ))
            } else {
                None
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_unseen() {
        let grid = OccupancyGrid::new(4, 3);
        assert_eq!(grid.width(), 4);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.get(GridCoord::new(2, 1)), Some(CellState::Unseen));
        assert_eq!(grid.count_by_state().unseen, 12);
    }

    #[test]
    fn test_get_set() {
        let mut grid = OccupancyGrid::new(4, 4);
        assert!(grid.set(GridCoord::new(1, 2), CellState::Wall));
        assert_eq!(grid.get(GridCoord::new(1, 2)), Some(CellState::Wall));
        assert_eq!(grid.get(GridCoord::new(4, 0)), None);
        assert_eq!(grid.get(GridCoord::new(-1, 0)), None);
    }

    #[test]
    fn test_set_out_of_bounds_is_rejected() {
        // x == width must not alias into the first cell of the next row
        let mut grid = OccupancyGrid::new(4, 4);
        assert!(!grid.set(GridCoord::new(4, 0), CellState::Wall));
        assert_eq!(grid.get(GridCoord::new(0, 1)), Some(CellState::Unseen));
        assert!(!grid.set(GridCoord::new(0, -1), CellState::Wall));
        assert!(!grid.set(GridCoord::new(0, 4), CellState::Wall));
        assert_eq!(grid.count_by_state().wall, 0);
    }

    #[test]
    fn test_check_bounds() {
        let grid = OccupancyGrid::new(4, 4);
        assert!(grid.check_bounds(GridCoord::new(3, 3)).is_ok());
        let err = grid.check_bounds(GridCoord::new(0, 4)).unwrap_err();
        assert!(matches!(err, PlannerError::OutOfBounds { .. }));
    }

    #[test]
    fn test_wall_cells() {
        let mut grid = OccupancyGrid::new(3, 3);
        grid.set(GridCoord::new(0, 1), CellState::Wall);
        grid.set(GridCoord::new(2, 2), CellState::Wall);
        let walls: Vec<_> = grid.wall_cells().collect();
        assert_eq!(walls, vec![GridCoord::new(0, 1), GridCoord::new(2, 2)]);
    }
}
