//! Exploration goal selection among frontier candidates.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::GridCoord;
use crate::error::{PlannerError, Result};

/// Which frontier candidate to chase next.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalPolicy {
    /// Closest candidate: cheap incremental coverage
    #[default]
    Nearest,
    /// Farthest candidate: sweep toward distant unexplored regions
    Farthest,
}

/// Picks one exploration goal from a frontier candidate set.
///
/// Distances are compared as exact squared cell distances, so selection
/// is deterministic. Ties keep the first candidate encountered, which
/// combined with the detector's (y, x) ordering makes the chosen goal a
/// pure function of the grid and robot location.
#[derive(Clone, Copy, Debug, Default)]
pub struct GoalSelector {
    policy: GoalPolicy,
}

impl GoalSelector {
    pub fn new(policy: GoalPolicy) -> Self {
        Self { policy }
    }

    /// Select a goal for the robot at `robot_loc`.
    pub fn select(&self, candidates: &[GridCoord], robot_loc: GridCoord) -> Result<GridCoord> {
        let mut best: Option<(GridCoord, i64)> = None;

        for &candidate in candidates {
            let d = robot_loc.distance_squared(&candidate);
            let better = match (self.policy, best) {
                (_, None) => true,
                (GoalPolicy::Nearest, Some((_, best_d))) => d < best_d,
                (GoalPolicy::Farthest, Some((_, best_d))) => d > best_d,
            };
            if better {
                best = Some((candidate, d));
            }
        }

        match best {
            Some((goal, d)) => {
                debug!(
                    "[Goal] {:?} policy chose {goal} at distance² {d} from {robot_loc}",
                    self.policy
                );
                Ok(goal)
            }
            None => Err(PlannerError::NoFrontier),
        }
    }
}
