//! Geometry value types shared by the partitioner and the pyramid builder

/// A crop rectangle in the pixel space of one pyramid level.
///
/// Rectangles on the right and bottom of a level usually reach past the level's
/// bounds; the crop that consumes them clips to the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl TileRect {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }
}

/// Number of tile columns and rows covering one level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileGrid {
    pub columns: u32,
    pub rows: u32,
}

impl TileGrid {
    /// Grid for a `width` x `height` level cut into `tile_size` squares.
    pub fn for_level(width: u32, height: u32, tile_size: u32) -> Self {
        Self {
            columns: width.div_ceil(tile_size),
            rows: height.div_ceil(tile_size),
        }
    }

    pub fn tile_count(&self) -> u64 {
        u64::from(self.columns) * u64::from(self.rows)
    }

    pub fn last_column(&self) -> u32 {
        self.columns.saturating_sub(1)
    }

    pub fn last_row(&self) -> u32 {
        self.rows.saturating_sub(1)
    }
}

/// Where a tile sits in its grid. Corners take precedence over edges, edges over
/// the interior, and left/top take precedence over right/bottom, so a single
/// column or row resolves to its leading side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TilePosition {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    Top,
    Bottom,
    Left,
    Right,
    Interior,
}

/// Placement of a tile along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeRole {
    /// First column or row: padded on the far side only.
    Leading,
    /// Last column or row: padded on the near side only.
    Trailing,
    /// Padded on both sides.
    Inner,
}

impl TilePosition {
    pub fn classify(column: u32, row: u32, grid: TileGrid) -> Self {
        let last_col = grid.last_column();
        let last_row = grid.last_row();

        if column == 0 && row == 0 {
            TilePosition::TopLeft
        } else if column == last_col && row == 0 {
            TilePosition::TopRight
        } else if column == 0 && row == last_row {
            TilePosition::BottomLeft
        } else if column == last_col && row == last_row {
            TilePosition::BottomRight
        } else if row == 0 {
            TilePosition::Top
        } else if row == last_row {
            TilePosition::Bottom
        } else if column == 0 {
            TilePosition::Left
        } else if column == last_col {
            TilePosition::Right
        } else {
            TilePosition::Interior
        }
    }

    pub fn horizontal(self) -> EdgeRole {
        match self {
            TilePosition::TopLeft | TilePosition::BottomLeft | TilePosition::Left => {
                EdgeRole::Leading
            }
            TilePosition::TopRight | TilePosition::BottomRight | TilePosition::Right => {
                EdgeRole::Trailing
            }
            TilePosition::Top | TilePosition::Bottom | TilePosition::Interior => EdgeRole::Inner,
        }
    }

    pub fn vertical(self) -> EdgeRole {
        match self {
            TilePosition::TopLeft | TilePosition::TopRight | TilePosition::Top => {
                EdgeRole::Leading
            }
            TilePosition::BottomLeft | TilePosition::BottomRight | TilePosition::Bottom => {
                EdgeRole::Trailing
            }
            TilePosition::Left | TilePosition::Right | TilePosition::Interior => EdgeRole::Inner,
        }
    }
}

/// One tile of a level: its grid address and crop rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    pub column: u32,
    pub row: u32,
    pub rect: TileRect,
}

/// Pixel size of one pyramid level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelDimensions {
    pub level: u32,
    pub width: u32,
    pub height: u32,
}
