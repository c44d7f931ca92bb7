//! Image codec data types

use std::path::Path;

use image::{DynamicImage, GenericImageView, ImageFormat};

use crate::deepzoom::common::error::{Result, TilerError};

/// Output format of every tile, taken from the source file's extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileFormat {
    /// Extension exactly as it appears on the source (e.g. "jpg", "PNG").
    /// Used for tile file names and the descriptor's `Format` attribute.
    pub extension: String,
    /// Codec used to decode the source and encode tiles.
    pub image_format: ImageFormat,
}

impl TileFormat {
    pub fn from_extension(extension: &str) -> Result<Self> {
        let image_format = ImageFormat::from_extension(extension)
            .filter(|format| format.reading_enabled() && format.writing_enabled())
            .ok_or_else(|| TilerError::UnsupportedFormat(extension.to_string()))?;

        Ok(Self {
            extension: extension.to_string(),
            image_format,
        })
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .filter(|ext| !ext.is_empty())
            .ok_or_else(|| {
                TilerError::UnsupportedFormat(format!("{} has no file extension", path.display()))
            })?;
        Self::from_extension(extension)
    }
}

/// A decoded source image. Never modified; every level is derived from it.
#[derive(Debug, Clone)]
pub struct SourceImage {
    pub image: DynamicImage,
    pub format: TileFormat,
}

impl SourceImage {
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_keeps_extension_case() {
        let format = TileFormat::from_extension("JPG").unwrap();
        assert_eq!(format.extension, "JPG");
        assert_eq!(format.image_format, ImageFormat::Jpeg);
    }

    #[test]
    fn test_format_from_path() {
        let format = TileFormat::from_path(Path::new("some/dir/photo.png")).unwrap();
        assert_eq!(format.extension, "png");
        assert_eq!(format.image_format, ImageFormat::Png);
    }

    #[test]
    fn test_missing_extension_is_unsupported() {
        let result = TileFormat::from_path(Path::new("some/dir/photo"));
        assert!(matches!(result, Err(TilerError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_unknown_extension_is_unsupported() {
        let result = TileFormat::from_extension("xyz");
        assert!(matches!(result, Err(TilerError::UnsupportedFormat(_))));
    }
}
