//! # Marga-Nav: Grid Path Planning and Frontier Exploration
//!
//! Collision-free path planning and exploration targeting over a 2D
//! occupancy grid, for indoor robot navigation.
//!
//! ## Features
//!
//! - **Tri-state classification**: raw intensity maps become
//!   Free/Wall/Unseen occupancy grids via normalized thresholding
//! - **Obstacle inflation**: a brushfire distance field expands walls by
//!   the robot radius so the planner can treat the robot as a point
//! - **Best-first search**: 8-connected A* with a closest-approach
//!   fallback when the goal turns out to be unreachable
//! - **Frontier exploration**: detects the boundary between explored and
//!   unseen space and picks the next goal by a configurable policy
//! - **Waypoint simplification**: dense cell paths reduce to sparse
//!   waypoints a motion controller can chase
//!
//! ## Quick Start
//!
//! ```rust
//! use marga_nav::core::{GridCoord, MapTransform, WorldPoint};
//! use marga_nav::grid::{GridClassifier, InflatedGrid, IntensityImage};
//! use marga_nav::planning::{PathSearcher, WaypointSimplifier};
//!
//! # fn main() -> marga_nav::Result<()> {
//! // Classify a raw intensity map (dark = free, bright = wall):
//! // a bright wall along the top row, open floor below
//! let mut data = vec![0.05; 100];
//! for x in 0..10 {
//!     data[x] = 1.0;
//! }
//! let image = IntensityImage::new(data, 10, 10, 1)?;
//! let grid = GridClassifier::new(0.7, 0.2)?.classify(&image);
//!
//! // Inflate obstacles by the robot radius and plan
//! let transform = MapTransform::new(0.05, WorldPoint::ZERO)?;
//! let inflated = InflatedGrid::build(&grid, transform.radius_cells(0.08)?)?;
//! let searcher = PathSearcher::with_defaults(&grid, &inflated, transform);
//! let path = searcher.search(GridCoord::new(0, 5), GridCoord::new(9, 5))?;
//!
//! // Reduce the cell path to waypoints
//! let waypoints = WaypointSimplifier::new(0.25)?.simplify(&path)?;
//! assert!(waypoints.len() <= path.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## Data Flow
//!
//! ```text
//! intensity map ─► GridClassifier ─► OccupancyGrid ─► InflatedGrid
//!                                         │                │
//!                  FrontierDetector ◄─────┘                │
//!                        │                                 ▼
//!                  GoalSelector ──────goal──────►     PathSearcher
//!                                                          │
//!                                     waypoints ◄── WaypointSimplifier
//! ```
//!
//! ## Modules
//!
//! - [`core`]: value types (CellState, GridCoord, WorldPoint, MapTransform)
//! - [`grid`]: classification and inflation
//! - [`planning`]: path search and waypoint simplification
//! - [`exploration`]: frontier detection and goal selection
//! - [`config`]: TOML-backed configuration

pub mod config;
pub mod core;
pub mod error;
pub mod exploration;
pub mod grid;
pub mod planning;

pub use config::PlannerConfig;
pub use error::{PlannerError, Result};
