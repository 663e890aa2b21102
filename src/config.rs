//! Configuration loading for the planner.

use std::path::Path;

use serde::Deserialize;

use crate::error::{PlannerError, Result};
use crate::exploration::GoalPolicy;

/// Main configuration structure
#[derive(Clone, Debug, Deserialize)]
pub struct PlannerConfig {
    #[serde(default)]
    pub classify: ClassifyConfig,
    #[serde(default)]
    pub robot: RobotConfig,
    #[serde(default)]
    pub search: SearchLimitsConfig,
    #[serde(default)]
    pub exploration: ExplorationConfig,
}

/// Intensity thresholding settings
#[derive(Clone, Debug, Deserialize)]
pub struct ClassifyConfig {
    /// Normalized intensity above which a cell is a wall (default: 0.7)
    #[serde(default = "default_wall_threshold")]
    pub wall_threshold: f32,

    /// Normalized intensity below which a cell is free (default: 0.2)
    #[serde(default = "default_free_threshold")]
    pub free_threshold: f32,
}

/// Robot physical parameters
#[derive(Clone, Debug, Deserialize)]
pub struct RobotConfig {
    /// Robot radius for obstacle inflation in meters (default: 0.22)
    #[serde(default = "default_robot_radius")]
    pub radius: f32,
}

/// Search limits
#[derive(Clone, Debug, Deserialize)]
pub struct SearchLimitsConfig {
    /// Maximum cell expansions per search (default: 200000)
    #[serde(default = "default_max_expansions")]
    pub max_expansions: usize,
}

/// Exploration settings
#[derive(Clone, Debug, Deserialize)]
pub struct ExplorationConfig {
    /// Which frontier candidate to chase (default: nearest)
    #[serde(default)]
    pub goal_policy: GoalPolicy,

    /// Waypoint spacing along simplified paths in meters (default: 0.25)
    #[serde(default = "default_waypoint_spacing")]
    pub waypoint_spacing: f32,
}

impl Default for ClassifyConfig {
    fn default() -> Self {
        Self {
            wall_threshold: default_wall_threshold(),
            free_threshold: default_free_threshold(),
        }
    }
}

impl Default for RobotConfig {
    fn default() -> Self {
        Self {
            radius: default_robot_radius(),
        }
    }
}

impl Default for SearchLimitsConfig {
    fn default() -> Self {
        Self {
            max_expansions: default_max_expansions(),
        }
    }
}

impl Default for ExplorationConfig {
    fn default() -> Self {
        Self {
            goal_policy: GoalPolicy::default(),
            waypoint_spacing: default_waypoint_spacing(),
        }
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            classify: ClassifyConfig::default(),
            robot: RobotConfig::default(),
            search: SearchLimitsConfig::default(),
            exploration: ExplorationConfig::default(),
        }
    }
}

// Default value functions
fn default_wall_threshold() -> f32 {
    0.7
}
fn default_free_threshold() -> f32 {
    0.2
}
fn default_robot_radius() -> f32 {
    0.22
}
fn default_max_expansions() -> usize {
    200_000
}
fn default_waypoint_spacing() -> f32 {
    0.25
}

impl PlannerConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| PlannerError::Config(format!("Failed to read config file: {}", e)))?;
        let config: PlannerConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check cross-field consistency.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.classify.wall_threshold)
            || !(0.0..=1.0).contains(&self.classify.free_threshold)
        {
            return Err(PlannerError::Config(format!(
                "thresholds must lie in [0, 1]: wall={}, free={}",
                self.classify.wall_threshold, self.classify.free_threshold
            )));
        }
        if self.classify.free_threshold >= self.classify.wall_threshold {
            return Err(PlannerError::Config(format!(
                "free threshold {} must be below wall threshold {}",
                self.classify.free_threshold, self.classify.wall_threshold
            )));
        }
        if self.robot.radius <= 0.0 {
            return Err(PlannerError::Config(format!(
                "robot radius must be positive, got {}",
                self.robot.radius
            )));
        }
        if self.search.max_expansions == 0 {
            return Err(PlannerError::Config(
                "expansion budget must be at least 1".to_string(),
            ));
        }
        if self.exploration.waypoint_spacing <= 0.0 {
            return Err(PlannerError::Config(format!(
                "waypoint spacing must be positive, got {}",
                self.exploration.waypoint_spacing
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = PlannerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.classify.wall_threshold, 0.7);
        assert_eq!(config.robot.radius, 0.22);
        assert_eq!(config.exploration.goal_policy, GoalPolicy::Nearest);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: PlannerConfig = toml::from_str(
            r#"
            [robot]
            radius = 0.3

            [exploration]
            goal_policy = "farthest"
            "#,
        )
        .unwrap();

        assert_eq!(config.robot.radius, 0.3);
        assert_eq!(config.exploration.goal_policy, GoalPolicy::Farthest);
        assert_eq!(config.classify.free_threshold, 0.2);
        assert_eq!(config.search.max_expansions, 200_000);
    }

    #[test]
    fn test_empty_toml_is_all_defaults() {
        let config: PlannerConfig = toml::from_str("").unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_inverted_thresholds() {
        let mut config = PlannerConfig::default();
        config.classify.free_threshold = 0.8;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_radius() {
        let mut config = PlannerConfig::default();
        config.robot.radius = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_budget() {
        let mut config = PlannerConfig::default();
        config.search.max_expansions = 0;
        assert!(config.validate().is_err());
    }
}
