//! Pyramid configuration and result types

use std::path::PathBuf;

use crate::deepzoom::common::error::{Result, TilerError};
use crate::deepzoom::geometry::TileGrid;
use crate::deepzoom::pyramid::timing::BuildTimings;

pub const DEFAULT_TILE_SIZE: u32 = 256;
pub const DEFAULT_OVERLAP: u32 = 0;

/// Configuration for building a deep zoom pyramid
#[derive(Debug, Clone)]
pub struct PyramidConfig {
    /// Edge length of a tile before overlap, in pixels
    pub tile_size: u32,
    /// Pixels shared with each neighbouring tile
    pub overlap: u32,
    /// Whether to encode the tiles of a level on the rayon thread pool
    pub parallel: bool,
}

impl Default for PyramidConfig {
    fn default() -> Self {
        Self {
            tile_size: DEFAULT_TILE_SIZE,
            overlap: DEFAULT_OVERLAP,
            parallel: false,
        }
    }
}

impl PyramidConfig {
    pub fn builder() -> PyramidConfigBuilder {
        PyramidConfigBuilder::default()
    }

    /// An overlap of a full tile or more would start neighbouring crops before
    /// the previous tile's origin, so it is rejected along with a zero tile size.
    /// The widest crop, `tile_size + 2 * overlap`, must fit in a `u32`.
    pub fn validate(&self) -> Result<()> {
        if self.tile_size == 0 {
            return Err(TilerError::InvalidConfig(
                "tile size must be greater than zero".to_string(),
            ));
        }

        if self.overlap >= self.tile_size {
            return Err(TilerError::InvalidConfig(format!(
                "overlap {} must be smaller than tile size {}",
                self.overlap, self.tile_size
            )));
        }

        if self.max_crop_extent().is_none() {
            return Err(TilerError::InvalidConfig(format!(
                "tile size {} with overlap {} exceeds the maximum crop size",
                self.tile_size, self.overlap
            )));
        }

        Ok(())
    }

    /// Edge length of an interior tile's crop, if it is representable.
    pub fn max_crop_extent(&self) -> Option<u32> {
        self.overlap
            .checked_mul(2)
            .and_then(|padding| self.tile_size.checked_add(padding))
    }
}

/// Builder for PyramidConfig
#[derive(Default)]
pub struct PyramidConfigBuilder {
    tile_size: Option<u32>,
    overlap: Option<u32>,
    parallel: Option<bool>,
}

impl PyramidConfigBuilder {
    pub fn tile_size(mut self, tile_size: u32) -> Self {
        self.tile_size = Some(tile_size);
        self
    }

    pub fn overlap(mut self, overlap: u32) -> Self {
        self.overlap = Some(overlap);
        self
    }

    pub fn parallel(mut self, enable: bool) -> Self {
        self.parallel = Some(enable);
        self
    }

    pub fn build(self) -> PyramidConfig {
        let default = PyramidConfig::default();
        PyramidConfig {
            tile_size: self.tile_size.unwrap_or(default.tile_size),
            overlap: self.overlap.unwrap_or(default.overlap),
            parallel: self.parallel.unwrap_or(default.parallel),
        }
    }
}

/// One generated level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelSummary {
    pub level: u32,
    pub width: u32,
    pub height: u32,
    pub grid: TileGrid,
}

/// Outcome of a completed pyramid build
#[derive(Debug)]
pub struct BuildSummary {
    pub max_level: u32,
    /// Levels in the order they were generated, full resolution first
    pub levels: Vec<LevelSummary>,
    pub tiles_written: u64,
    pub files_dir: PathBuf,
    pub descriptor_path: PathBuf,
    pub timings: BuildTimings,
}
