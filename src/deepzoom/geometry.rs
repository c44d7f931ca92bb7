//! Pyramid geometry module
//!
//! Pure arithmetic for level sizes and tile rectangles. Nothing here touches
//! image data or the filesystem.

mod levels;
mod partition;
pub mod types;

pub use levels::{halve, level_dimensions, max_level};
pub use partition::TilePartitioner;
pub use types::{EdgeRole, LevelDimensions, Tile, TileGrid, TilePosition, TileRect};
