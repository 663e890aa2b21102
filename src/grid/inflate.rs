//! Obstacle inflation by robot radius.

use std::collections::VecDeque;

use log::debug;

use crate::core::GridCoord;
use crate::error::{PlannerError, Result};
use crate::grid::OccupancyGrid;

/// Blocked mask derived from an occupancy grid and a robot radius.
///
/// A cell is blocked when a wall lies strictly inside the robot's
/// footprint centered on it (nearest-wall distance < radius), regardless
/// of the cell's own classification. Planning over non-blocked cells
/// then guarantees physical clearance without a separate footprint check
/// in the search inner loop. A radius of one cell degenerates to
/// blocking only the wall cells themselves.
///
/// Internally stores the distance (in cells) from each cell to the
/// nearest wall, computed by a brushfire sweep from all wall cells, so
/// the blocked test is a single comparison and the field stays available
/// for diagnostics. Inflation is monotonic: a larger radius never shrinks
/// the blocked set.
#[derive(Clone, Debug)]
pub struct InflatedGrid {
    distance_field: Vec<f32>,
    width: usize,
    height: usize,
    radius_cells: usize,
}

impl InflatedGrid {
    /// Build the blocked mask for a robot radius given in cells (≥ 1).
    pub fn build(grid: &OccupancyGrid, radius_cells: usize) -> Result<Self> {
        if radius_cells == 0 {
            return Err(PlannerError::Config(
                "inflation radius must be at least one cell".to_string(),
            ));
        }

        let width = grid.width();
        let height = grid.height();
        let mut distance_field = vec![f32::MAX; width * height];

        // Seed the sweep with every wall cell at distance zero
        let mut queue: VecDeque<GridCoord> = VecDeque::new();
        for wall in grid.wall_cells() {
            distance_field[grid.index(wall)] = 0.0;
            queue.push_back(wall);
        }
        let wall_count = queue.len();

        Self::propagate(&mut distance_field, width, height, &mut queue);

        let inflated = Self {
            distance_field,
            width,
            height,
            radius_cells,
        };
        debug!(
            "[Inflate] {}x{} grid, {} walls, radius {} cells, {} blocked",
            width,
            height,
            wall_count,
            radius_cells,
            inflated.blocked_count()
        );
        Ok(inflated)
    }

    /// Brushfire distance propagation over 8-connected neighbors.
    fn propagate(
        distance_field: &mut [f32],
        width: usize,
        height: usize,
        queue: &mut VecDeque<GridCoord>,
    ) {
        while let Some(current) = queue.pop_front() {
            let current_dist = distance_field[current.y as usize * width + current.x as usize];

            for (i, neighbor) in current.neighbors_8().iter().enumerate() {
                if neighbor.x < 0
                    || neighbor.y < 0
                    || neighbor.x as usize >= width
                    || neighbor.y as usize >= height
                {
                    continue;
                }

                let step = if GridCoord::is_diagonal_neighbor(i) {
                    std::f32::consts::SQRT_2
                } else {
                    1.0
                };

                let idx = neighbor.y as usize * width + neighbor.x as usize;
                let new_dist = current_dist + step;
                if new_dist < distance_field[idx] {
                    distance_field[idx] = new_dist;
                    queue.push_back(*neighbor);
                }
            }
        }
    }

    /// Is this cell blocked for the configured radius (nearest wall
    /// strictly inside the footprint)? Out-of-bounds coordinates count
    /// as blocked.
    #[inline]
    pub fn is_blocked(&self, coord: GridCoord) -> bool {
        if coord.x < 0
            || coord.y < 0
            || coord.x as usize >= self.width
            || coord.y as usize >= self.height
        {
            return true;
        }
        self.distance_field[coord.y as usize * self.width + coord.x as usize]
            < self.radius_cells as f32
    }

    /// Distance to the nearest wall in cells, `f32::MAX` when the grid
    /// has no walls. Out-of-bounds coordinates report zero.
    #[inline]
    pub fn wall_distance(&self, coord: GridCoord) -> f32 {
        if coord.x < 0
            || coord.y < 0
            || coord.x as usize >= self.width
            || coord.y as usize >= self.height
        {
            return 0.0;
        }
        self.distance_field[coord.y as usize * self.width + coord.x as usize]
    }

    /// Inflation radius in cells.
    #[inline]
    pub fn radius_cells(&self) -> usize {
        self.radius_cells
    }

    /// Number of blocked cells.
    pub fn blocked_count(&self) -> usize {
        let r = self.radius_cells as f32;
        self.distance_field.iter().filter(|&&d| d < r).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CellState;

    fn grid_with_center_wall(size: usize) -> OccupancyGrid {
        let mut grid = OccupancyGrid::new(size, size);
        for y in 0..size {
            for x in 0..size {
                grid.set(GridCoord::new(x as i32, y as i32), CellState::Free);
            }
        }
        let c = (size / 2) as i32;
        grid.set(GridCoord::new(c, c), CellState::Wall);
        grid
    }

    #[test]
    fn test_rejects_zero_radius() {
        let grid = grid_with_center_wall(5);
        assert!(InflatedGrid::build(&grid, 0).is_err());
    }

    #[test]
    fn test_radius_one_blocks_walls_only() {
        let grid = grid_with_center_wall(9);
        let inflated = InflatedGrid::build(&grid, 1).unwrap();

        assert!(inflated.is_blocked(GridCoord::new(4, 4)));
        assert!(!inflated.is_blocked(GridCoord::new(3, 4)));
        assert!(!inflated.is_blocked(GridCoord::new(5, 5)));
        assert_eq!(inflated.blocked_count(), 1);
    }

    #[test]
    fn test_radius_two_blocks_adjacent_cells() {
        let grid = grid_with_center_wall(9);
        let inflated = InflatedGrid::build(&grid, 2).unwrap();

        // The wall and everything within one step of it
        assert!(inflated.is_blocked(GridCoord::new(4, 4)));
        assert!(inflated.is_blocked(GridCoord::new(3, 4)));
        assert!(inflated.is_blocked(GridCoord::new(5, 5)));

        // Two axis steps away: distance exactly 2, outside a radius-2
        // footprint
        assert!(!inflated.is_blocked(GridCoord::new(6, 4)));
        assert!(!inflated.is_blocked(GridCoord::new(0, 0)));
    }

    #[test]
    fn test_out_of_bounds_blocked() {
        let grid = grid_with_center_wall(5);
        let inflated = InflatedGrid::build(&grid, 1).unwrap();
        assert!(inflated.is_blocked(GridCoord::new(-1, 0)));
        assert!(inflated.is_blocked(GridCoord::new(5, 2)));
    }

    #[test]
    fn test_monotonic_in_radius() {
        let grid = grid_with_center_wall(15);
        let small = InflatedGrid::build(&grid, 1).unwrap();
        let large = InflatedGrid::build(&grid, 3).unwrap();

        for y in 0..15 {
            for x in 0..15 {
                let c = GridCoord::new(x, y);
                if small.is_blocked(c) {
                    assert!(large.is_blocked(c), "radius 3 lost blocked cell {c}");
                }
            }
        }
        assert!(large.blocked_count() > small.blocked_count());
    }

    #[test]
    fn test_distance_field() {
        let grid = grid_with_center_wall(9);
        let inflated = InflatedGrid::build(&grid, 1).unwrap();

        assert_eq!(inflated.wall_distance(GridCoord::new(4, 4)), 0.0);
        let adjacent = inflated.wall_distance(GridCoord::new(4, 5));
        assert!((adjacent - 1.0).abs() < 1e-6);
        let diagonal = inflated.wall_distance(GridCoord::new(5, 5));
        assert!((diagonal - std::f32::consts::SQRT_2).abs() < 1e-6);
    }

    #[test]
    fn test_no_walls_nothing_blocked() {
        let mut grid = OccupancyGrid::new(6, 6);
        for y in 0..6 {
            for x in 0..6 {
                grid.set(GridCoord::new(x, y), CellState::Free);
            }
        }
        let inflated = InflatedGrid::build(&grid, 2).unwrap();
        assert_eq!(inflated.blocked_count(), 0);
    }

    #[test]
    fn test_unseen_cell_near_wall_is_blocked() {
        // Blocked is independent of the cell's own classification
        let mut grid = OccupancyGrid::new(5, 5);
        grid.set(GridCoord::new(2, 2), CellState::Wall);
        let inflated = InflatedGrid::build(&grid, 2).unwrap();
        assert!(inflated.is_blocked(GridCoord::new(2, 3)));
        assert_eq!(grid.get(GridCoord::new(2, 3)), Some(CellState::Unseen));
    }
}
