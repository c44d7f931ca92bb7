use crate::deepzoom::codec::types::{SourceImage, TileFormat};
use crate::deepzoom::common::error::Result;

pub trait SourceReader {
    fn read_source(&self, data: &[u8], format: &TileFormat) -> Result<SourceImage>;
}
