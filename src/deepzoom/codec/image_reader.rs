//! Source image reader backed by the `image` crate.

use tracing::debug;

use crate::deepzoom::codec::reader::SourceReader;
use crate::deepzoom::codec::types::{SourceImage, TileFormat};
use crate::deepzoom::common::error::{Result, TilerError};

/// Decodes any format the `image` crate was built with (JPEG, PNG, TIFF, WebP,
/// ...). The format is taken from the file extension rather than sniffed, so a
/// mislabelled file fails to decode instead of producing tiles in another format.
pub struct ImageSourceReader;

impl SourceReader for ImageSourceReader {
    fn read_source(&self, data: &[u8], format: &TileFormat) -> Result<SourceImage> {
        debug!("Decoding {:?} image, {} bytes", format.image_format, data.len());

        let image = image::load_from_memory_with_format(data, format.image_format)
            .map_err(|e| TilerError::DecodeError(e.to_string()))?;

        debug!("Decoded image: {}x{} {:?}", image.width(), image.height(), image.color());

        Ok(SourceImage {
            image,
            format: format.clone(),
        })
    }
}
