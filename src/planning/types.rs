//! Search node, per-call records, and path result types.

use std::cmp::Ordering;

use crate::core::{GridCoord, WorldPoint};

/// Entry in the open queue.
#[derive(Clone, Debug)]
pub(super) struct SearchNode {
    pub coord: GridCoord,
    /// Accumulated cost plus heuristic
    pub f_cost: f32,
}

impl PartialEq for SearchNode {
    fn eq(&self, other: &Self) -> bool {
        self.coord == other.coord
    }
}

impl Eq for SearchNode {}

impl Ord for SearchNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap (lower f_cost = higher priority)
        other
            .f_cost
            .partial_cmp(&self.f_cost)
            .unwrap_or(Ordering::Equal)
    }
}

impl PartialOrd for SearchNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Per-cell search state, owned by a single search invocation.
///
/// The arena of records is index-addressed by cell and discarded when
/// the call returns. Once `closed` is set, `cost` is never improved.
#[derive(Clone, Copy, Debug)]
pub(super) struct SearchRecord {
    /// Best known accumulated cost from the start, infinite while
    /// unvisited
    pub cost: f32,
    /// Cell index we arrived from
    pub parent: Option<u32>,
    pub closed: bool,
}

impl Default for SearchRecord {
    fn default() -> Self {
        Self {
            cost: f32::INFINITY,
            parent: None,
            closed: false,
        }
    }
}

impl SearchRecord {
    #[inline]
    pub fn visited(&self) -> bool {
        self.cost.is_finite()
    }
}

/// Result of a path search.
#[derive(Clone, Debug)]
pub struct PlannedPath {
    /// Path as grid coordinates, start first
    pub cells: Vec<GridCoord>,
    /// Path converted to world coordinates
    pub points: Vec<WorldPoint>,
    /// Total accumulated cost in cells
    pub cost: f32,
    /// False when the closest-approach fallback produced this path
    /// instead of reaching the requested goal
    pub reached_goal: bool,
}

impl PlannedPath {
    /// Path length in cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Is the path empty? (Never true for a successful search.)
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Path length in meters.
    pub fn length_meters(&self) -> f32 {
        self.points
            .windows(2)
            .map(|pair| pair[0].distance(&pair[1]))
            .sum()
    }
}
