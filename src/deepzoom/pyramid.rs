//! Pyramid building module
//!
//! Drives the partitioner across all levels, resamples and crops through the
//! codec traits, and writes the descriptor once every level is on disk.

mod builder;
mod timing;
pub mod types;


pub use builder::PyramidBuilder;
pub use timing::{BuildTimings, StepTiming, Timer};
pub use types::{
    BuildSummary, DEFAULT_OVERLAP, DEFAULT_TILE_SIZE, LevelSummary, PyramidConfig,
    PyramidConfigBuilder,
};
