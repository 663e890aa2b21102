//! Cell states for the occupancy grid.

use serde::{Deserialize, Serialize};

/// Tri-state classification of a grid cell.
///
/// Every cell is exactly one of the three states. Classification is
/// produced once by the [`GridClassifier`](crate::grid::GridClassifier)
/// and never mutated in place; inflation derives a separate blocked mask
/// so the original classification stays available for diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum CellState {
    /// Never observed by any sensor
    #[default]
    Unseen = 0,

    /// Observed and traversable
    Free = 1,

    /// Observed obstacle
    Wall = 2,
}

impl CellState {
    /// Is this cell observed free space?
    #[inline]
    pub fn is_free(self) -> bool {
        self == CellState::Free
    }

    /// Is this cell an obstacle?
    #[inline]
    pub fn is_wall(self) -> bool {
        self == CellState::Wall
    }

    /// Has this cell been observed?
    #[inline]
    pub fn is_known(self) -> bool {
        self != CellState::Unseen
    }

    /// Single character representation for debugging
    pub fn as_char(self) -> char {
        match self {
            CellState::Unseen => '?',
            CellState::Free => '.',
            CellState::Wall => '#',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_predicates() {
        assert!(CellState::Free.is_free());
        assert!(!CellState::Wall.is_free());
        assert!(CellState::Wall.is_wall());
        assert!(!CellState::Unseen.is_known());
        assert!(CellState::Free.is_known());
        assert!(CellState::Wall.is_known());
    }

    #[test]
    fn test_debug_chars() {
        assert_eq!(CellState::Unseen.as_char(), '?');
        assert_eq!(CellState::Free.as_char(), '.');
        assert_eq!(CellState::Wall.as_char(), '#');
    }
}
