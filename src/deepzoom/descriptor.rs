//! Deep zoom image descriptor (`.dzi`)
//!
//! Viewers match element and attribute names case-sensitively, and some expect
//! the exact spacing around `=` below, so the XML is rendered by hand.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::deepzoom::common::error::{Result, TilerError};

pub const DEEPZOOM_NAMESPACE: &str = "http://schemas.microsoft.com/deepzoom/2008";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DziDescriptor {
    pub format: String,
    pub overlap: u32,
    pub tile_size: u32,
    /// Full-resolution width of the source image
    pub width: u32,
    /// Full-resolution height of the source image
    pub height: u32,
}

impl DziDescriptor {
    pub fn to_xml(&self) -> String {
        format!(
            concat!(
                "<?xml version = \"1.0\" encoding = \"UTF-8\" ?>\n",
                "<Image Format = \"{format}\" Overlap = \"{overlap}\" TileSize = \"{tile_size}\" ",
                "xmlns = \"{namespace}\">\n",
                "\t<Size Width = \"{width}\" Height = \"{height}\" />\n",
                "</Image>\n",
            ),
            format = self.format,
            overlap = self.overlap,
            tile_size = self.tile_size,
            namespace = DEEPZOOM_NAMESPACE,
            width = self.width,
            height = self.height,
        )
    }

    pub fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        info!(path = %path.display(), "Writing DZI");

        fs::write(path, self.to_xml())
            .map_err(|e| TilerError::OutputWriteError(format!("{}: {}", path.display(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor() -> DziDescriptor {
        DziDescriptor {
            format: "jpg".to_string(),
            overlap: 1,
            tile_size: 256,
            width: 4000,
            height: 3000,
        }
    }

    #[test]
    fn test_xml_matches_viewer_schema() {
        let expected = "<?xml version = \"1.0\" encoding = \"UTF-8\" ?>\n\
            <Image Format = \"jpg\" Overlap = \"1\" TileSize = \"256\" \
            xmlns = \"http://schemas.microsoft.com/deepzoom/2008\">\n\
            \t<Size Width = \"4000\" Height = \"3000\" />\n\
            </Image>\n";
        assert_eq!(descriptor().to_xml(), expected);
    }

    #[test]
    fn test_write_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("photo.dzi");

        descriptor().write_to(&path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, descriptor().to_xml());
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope").join("photo.dzi");

        let result = descriptor().write_to(&path);
        assert!(matches!(result, Err(TilerError::OutputWriteError(_))));
    }
}
