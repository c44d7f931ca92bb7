//! Output layout of a deep zoom pyramid
//!
//! For a source `dir/photo.jpg` the pyramid is written next to it:
//!
//! ```text
//! dir/photo_files/<level>/<column>_<row>.jpg
//! dir/photo.dzi
//! ```
//!
//! All paths are built from the source path; the working directory is never changed.

use std::path::{Path, PathBuf};

use crate::deepzoom::codec::TileFormat;
use crate::deepzoom::common::error::{Result, TilerError};

const FILES_SUFFIX: &str = "_files";
const DESCRIPTOR_EXTENSION: &str = "dzi";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PyramidLayout {
    files_dir: PathBuf,
    descriptor_path: PathBuf,
    extension: String,
}

impl PyramidLayout {
    pub fn for_source(source: &Path, format: &TileFormat) -> Result<Self> {
        let stem = source
            .file_stem()
            .and_then(|stem| stem.to_str())
            .filter(|stem| !stem.is_empty())
            .ok_or_else(|| {
                TilerError::InputReadError(format!("{}: not an image file name", source.display()))
            })?;
        let parent = source.parent().unwrap_or_else(|| Path::new(""));

        Ok(Self {
            files_dir: parent.join(format!("{stem}{FILES_SUFFIX}")),
            descriptor_path: parent.join(format!("{stem}.{DESCRIPTOR_EXTENSION}")),
            extension: format.extension.clone(),
        })
    }

    /// `<basename>_files`, the root of all level directories.
    pub fn files_dir(&self) -> &Path {
        &self.files_dir
    }

    /// `<basename>.dzi`, sibling of the files directory.
    pub fn descriptor_path(&self) -> &Path {
        &self.descriptor_path
    }

    pub fn level_dir(&self, level: u32) -> PathBuf {
        self.files_dir.join(level.to_string())
    }

    pub fn tile_path(&self, level: u32, column: u32, row: u32) -> PathBuf {
        self.level_dir(level)
            .join(format!("{column}_{row}.{}", self.extension))
    }
}
