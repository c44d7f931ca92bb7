//! Image codec module
//!
//! Decoding of the source image and encoding of individual tiles. The pyramid
//! builder only talks to the `SourceReader` and `TileWriter` traits.

mod reader;
mod image_reader;
mod writer;
mod file_writer;
pub mod types;

pub use reader::SourceReader;
pub use image_reader::ImageSourceReader;
pub use writer::TileWriter;
pub use file_writer::FileTileWriter;
pub use types::{SourceImage, TileFormat};
