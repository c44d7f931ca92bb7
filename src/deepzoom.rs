//! Deep zoom pyramid module
//!
//! This module turns one bitmap into a tiled, multi-resolution pyramid with a
//! `.dzi` descriptor, with separate modules for geometry, image codecs, output
//! layout and build orchestration.

pub mod common;
pub mod geometry;
pub mod codec;
pub mod layout;
pub mod descriptor;
pub mod pyramid;

pub use common::{
    TilerError,
    Result,
};

pub use geometry::{
    LevelDimensions,
    Tile,
    TileGrid,
    TilePartitioner,
    TilePosition,
    TileRect,
    level_dimensions,
    max_level,
};

pub use codec::{
    FileTileWriter,
    ImageSourceReader,
    SourceImage,
    SourceReader,
    TileFormat,
    TileWriter,
};

pub use layout::PyramidLayout;
pub use descriptor::DziDescriptor;

pub use pyramid::{
    BuildSummary,
    LevelSummary,
    PyramidBuilder,
    PyramidConfig,
    PyramidConfigBuilder,
};
