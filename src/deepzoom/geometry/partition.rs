//! Tile partitioning of a single pyramid level.
//!
//! A level of `width` x `height` pixels is cut into a grid of `tile_size` squares.
//! Every tile is then widened by `overlap` pixels on each side that has a
//! neighbour, so adjacent tiles share a border strip. The first column and row
//! have no neighbour before them and are only padded after; the last column and
//! row are only padded before. Rectangles are not clipped here: a tile in the last
//! column or row may extend past the level, and the crop that consumes it trims it.

use crate::deepzoom::geometry::types::{EdgeRole, Tile, TileGrid, TilePosition, TileRect};

/// Computes tile grids and crop rectangles for a fixed tile size and overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TilePartitioner {
    tile_size: u32,
    overlap: u32,
}

impl TilePartitioner {
    /// `tile_size` must be non-zero; `PyramidConfig::validate` enforces this for
    /// the builder.
    pub fn new(tile_size: u32, overlap: u32) -> Self {
        debug_assert!(tile_size > 0, "tile size must be positive");
        Self { tile_size, overlap }
    }

    pub fn tile_size(&self) -> u32 {
        self.tile_size
    }

    pub fn overlap(&self) -> u32 {
        self.overlap
    }

    pub fn grid(&self, width: u32, height: u32) -> TileGrid {
        TileGrid::for_level(width, height, self.tile_size)
    }

    /// Crop rectangle for the tile at (`column`, `row`) of `grid`.
    pub fn tile_rect(&self, grid: TileGrid, column: u32, row: u32) -> TileRect {
        let position = TilePosition::classify(column, row, grid);
        let (x, width) = self.span(position.horizontal(), column * self.tile_size);
        let (y, height) = self.span(position.vertical(), row * self.tile_size);
        TileRect::new(x, y, width, height)
    }

    /// Start and length along one axis for a tile whose unpadded origin is `offset`.
    ///
    /// An overlap larger than the offset would start before the image, and a
    /// padded length past `u32::MAX` cannot be cropped anyway; both saturate.
    fn span(&self, role: EdgeRole, offset: u32) -> (u32, u32) {
        let one_side = self.tile_size.saturating_add(self.overlap);
        match role {
            EdgeRole::Leading => (0, one_side),
            EdgeRole::Trailing => (offset.saturating_sub(self.overlap), one_side),
            EdgeRole::Inner => (
                offset.saturating_sub(self.overlap),
                one_side.saturating_add(self.overlap),
            ),
        }
    }

    /// All tiles of a `width` x `height` level, column by column and top to bottom
    /// within each column.
    pub fn tiles(&self, width: u32, height: u32) -> impl Iterator<Item = Tile> + '_ {
        let grid = self.grid(width, height);
        (0..grid.columns).flat_map(move |column| {
            (0..grid.rows).map(move |row| Tile {
                column,
                row,
                rect: self.tile_rect(grid, column, row),
            })
        })
    }
}
