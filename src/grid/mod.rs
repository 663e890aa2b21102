//! Occupancy grid construction: classification and obstacle inflation.

mod classify;
mod image;
mod inflate;
mod occupancy;

pub use classify::GridClassifier;
pub use image::IntensityImage;
pub use inflate::InflatedGrid;
pub use occupancy::{OccupancyGrid, StateCounts};
