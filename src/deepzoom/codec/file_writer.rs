use std::path::Path;

use image::{DynamicImage, ImageError};
use tracing::trace;

use crate::deepzoom::codec::types::TileFormat;
use crate::deepzoom::codec::writer::TileWriter;
use crate::deepzoom::common::error::{Result, TilerError};

/// Writes each tile to its own file in the source's format.
pub struct FileTileWriter;

impl TileWriter for FileTileWriter {
    fn write_tile(&self, tile: &DynamicImage, path: &Path, format: &TileFormat) -> Result<()> {
        trace!("Encoding {}x{} tile to {}", tile.width(), tile.height(), path.display());

        tile.save_with_format(path, format.image_format)
            .map_err(|e| match e {
                ImageError::IoError(io) => {
                    TilerError::OutputWriteError(format!("{}: {}", path.display(), io))
                }
                other => TilerError::EncodeError(format!("{}: {}", path.display(), other)),
            })
    }
}
