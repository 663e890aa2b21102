//! Best-first shortest-path search over the inflated grid.

use std::collections::BinaryHeap;

use log::{debug, trace};

use crate::core::{GridCoord, MapTransform};
use crate::error::{PlannerError, Result};
use crate::grid::{InflatedGrid, OccupancyGrid};

use super::types::{PlannedPath, SearchNode, SearchRecord};

/// Search tuning knobs.
#[derive(Clone, Debug)]
pub struct SearchConfig {
    /// Maximum cell expansions before the search gives up and falls back
    /// to the closest approach found so far. Bounds the one long-running
    /// operation so callers can impose an iteration budget.
    pub max_expansions: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_expansions: 200_000,
        }
    }
}

/// Best-first path search (Dijkstra ordered by an additive Euclidean
/// heuristic, i.e. A*) over an occupancy grid with a pre-computed
/// blocked mask.
///
/// Expansion is 8-connected with unit axis cost and √2 diagonal cost;
/// the heuristic is straight-line distance, which is admissible and
/// consistent for these step costs, so returned paths are optimal.
///
/// When the goal is unreachable the search retries once toward the
/// farthest cell it explored (by accumulated cost) and returns that
/// best-effort path with `reached_goal = false`. Only a search that
/// explores nothing fails with [`PlannerError::UnreachableGoal`].
pub struct PathSearcher<'a> {
    grid: &'a OccupancyGrid,
    inflated: &'a InflatedGrid,
    transform: MapTransform,
    config: SearchConfig,
}

impl<'a> PathSearcher<'a> {
    /// Create a searcher over one grid snapshot.
    pub fn new(
        grid: &'a OccupancyGrid,
        inflated: &'a InflatedGrid,
        transform: MapTransform,
        config: SearchConfig,
    ) -> Self {
        Self {
            grid,
            inflated,
            transform,
            config,
        }
    }

    /// Create with default configuration.
    pub fn with_defaults(
        grid: &'a OccupancyGrid,
        inflated: &'a InflatedGrid,
        transform: MapTransform,
    ) -> Self {
        Self::new(grid, inflated, transform, SearchConfig::default())
    }

    /// Find a path from start to goal.
    pub fn search(&self, start: GridCoord, goal: GridCoord) -> Result<PlannedPath> {
        self.search_with_observer(start, goal, &mut |_, _| {})
    }

    /// Find a path, invoking `observer` with `(cell, accumulated cost)`
    /// for every cell expansion. The hook exists for external
    /// diagnostics; the search itself emits nothing per-cell.
    pub fn search_with_observer(
        &self,
        start: GridCoord,
        goal: GridCoord,
        observer: &mut dyn FnMut(GridCoord, f32),
    ) -> Result<PlannedPath> {
        self.grid.check_bounds(start)?;
        self.grid.check_bounds(goal)?;

        trace!("[Search] start={start} goal={goal}");

        if !self.is_traversable(start) {
            debug!("[Search] start {start} is blocked, nothing explored");
            return Err(PlannerError::UnreachableGoal { start });
        }

        let (records, reached) = self.run(start, goal, observer);
        if reached {
            return Ok(self.reconstruct(&records, goal, true));
        }

        // Goal not reached: aim for the farthest cell explored so far
        // and return a best-effort path toward it. One bounded retry,
        // never recursive.
        let Some(interim) = self.farthest_explored(&records) else {
            debug!("[Search] queue exhausted with zero cells explored from {start}");
            return Err(PlannerError::UnreachableGoal { start });
        };

        debug!("[Search] goal {goal} unreachable, falling back to {interim}");
        let (records, reached) = self.run(start, interim, observer);
        if reached {
            Ok(self.reconstruct(&records, interim, false))
        } else {
            Err(PlannerError::UnreachableGoal { start })
        }
    }

    /// Single best-first sweep. Returns the record arena and whether the
    /// goal was popped.
    fn run(
        &self,
        start: GridCoord,
        goal: GridCoord,
        observer: &mut dyn FnMut(GridCoord, f32),
    ) -> (Vec<SearchRecord>, bool) {
        let mut records = vec![SearchRecord::default(); self.grid.width() * self.grid.height()];
        let mut open = BinaryHeap::new();

        records[self.grid.index(start)].cost = 0.0;
        open.push(SearchNode {
            coord: start,
            f_cost: Self::heuristic(start, goal),
        });

        let mut expansions = 0;

        while let Some(node) = open.pop() {
            let idx = self.grid.index(node.coord);

            // Lazy deletion: stale queue entries for closed cells are
            // skipped, never removed eagerly
            if records[idx].closed {
                continue;
            }
            records[idx].closed = true;
            let g = records[idx].cost;

            if node.coord == goal {
                trace!("[Search] reached {goal} after {expansions} expansions, cost {g:.2}");
                return (records, true);
            }

            observer(node.coord, g);
            expansions += 1;
            if expansions >= self.config.max_expansions {
                debug!("[Search] expansion budget {} exhausted", self.config.max_expansions);
                break;
            }

            for (i, neighbor) in node.coord.neighbors_8().iter().enumerate() {
                if !self.grid.is_valid_coord(*neighbor) || !self.is_traversable(*neighbor) {
                    continue;
                }

                let n_idx = self.grid.index(*neighbor);
                if records[n_idx].closed {
                    continue;
                }

                let step = if GridCoord::is_diagonal_neighbor(i) {
                    std::f32::consts::SQRT_2
                } else {
                    1.0
                };

                // Relax on strict improvement only
                let tentative = g + step;
                if tentative < records[n_idx].cost {
                    records[n_idx].cost = tentative;
                    records[n_idx].parent = Some(idx as u32);
                    open.push(SearchNode {
                        coord: *neighbor,
                        f_cost: tentative + Self::heuristic(*neighbor, goal),
                    });
                }
            }
        }

        (records, false)
    }

    /// The explored cell with the largest accumulated cost, excluding
    /// the start itself.
    fn farthest_explored(&self, records: &[SearchRecord]) -> Option<GridCoord> {
        let width = self.grid.width();
        let mut best: Option<(usize, f32)> = None;

        for (idx, record) in records.iter().enumerate() {
            if !record.visited() || record.cost <= 0.0 {
                continue;
            }
            if best.is_none_or(|(_, cost)| record.cost > cost) {
                best = Some((idx, record.cost));
            }
        }

        best.map(|(idx, _)| GridCoord::new((idx % width) as i32, (idx / width) as i32))
    }

    /// Walk parent links from the terminal cell back to the start,
    /// converting to world coordinates along the way.
    fn reconstruct(
        &self,
        records: &[SearchRecord],
        terminal: GridCoord,
        reached_goal: bool,
    ) -> PlannedPath {
        let width = self.grid.width();
        let cost = records[self.grid.index(terminal)].cost;

        let mut cells = Vec::new();
        let mut idx = self.grid.index(terminal);
        loop {
            cells.push(GridCoord::new((idx % width) as i32, (idx / width) as i32));
            match records[idx].parent {
                Some(parent) => idx = parent as usize,
                None => break,
            }
        }
        cells.reverse();

        let points = cells.iter().map(|&c| self.transform.grid_to_world(c)).collect();

        PlannedPath {
            cells,
            points,
            cost,
            reached_goal,
        }
    }

    /// Straight-line distance to the goal in cells.
    #[inline]
    fn heuristic(from: GridCoord, to: GridCoord) -> f32 {
        from.distance(&to)
    }

    /// Free and clear of inflated obstacles.
    #[inline]
    fn is_traversable(&self, coord: GridCoord) -> bool {
        self.grid
            .get(coord)
            .is_some_and(|state| state.is_free() && !self.inflated.is_blocked(coord))
    }
}
