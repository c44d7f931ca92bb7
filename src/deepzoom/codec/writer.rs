use std::path::Path;

use image::DynamicImage;

use crate::deepzoom::codec::types::TileFormat;
use crate::deepzoom::common::error::Result;

/// Encodes a single tile. `Sync` so that one writer can serve a parallel level.
pub trait TileWriter: Sync {
    fn write_tile(&self, tile: &DynamicImage, path: &Path, format: &TileFormat) -> Result<()>;
}
