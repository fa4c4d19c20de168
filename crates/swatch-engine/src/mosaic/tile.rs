//! Mosaic tiles and the tile assignment grid.

use crate::catalogue::SwatchRecord;
use crate::color::Hsb;

/// One cell of a mosaic and the swatch chosen for it.
#[derive(Debug, Clone, PartialEq)]
pub struct Tile<'a> {
    /// Column index
    pub tx: u32,
    /// Row index
    pub ty: u32,
    /// Left edge in sample pixels
    pub x: u32,
    /// Top edge in sample pixels
    pub y: u32,
    /// Width of the tile square. Edge tiles keep the full tile size even
    /// though their sampled region is clipped to the image.
    pub width: u32,
    /// Height of the tile square
    pub height: u32,
    /// Average color observed in the region
    pub sampled: Hsb,
    /// Best-matching swatch
    pub swatch: &'a SwatchRecord,
    /// Match score of `swatch` against `sampled` (lower is better)
    pub score: f64,
}

/// Result of one mosaic composition pass.
///
/// A dense `tiles_y x tiles_x` grid indexed `[ty][tx]`. Cells are `None`
/// only when no candidate produced a finite score.
#[derive(Debug, Clone, PartialEq)]
pub struct Mosaic<'a> {
    pub(super) tile_size: u32,
    /// Sample image size in pixels
    pub(super) width: u32,
    pub(super) height: u32,
    pub(super) tiles_x: u32,
    pub(super) tiles_y: u32,
    pub(super) cells: Vec<Option<Tile<'a>>>,
}

impl<'a> Mosaic<'a> {
    /// A mosaic with no tiles, used when a filter leaves no candidates.
    pub fn empty(tile_size: u32) -> Self {
        Self {
            tile_size,
            width: 0,
            height: 0,
            tiles_x: 0,
            tiles_y: 0,
            cells: Vec::new(),
        }
    }

    /// Tile edge length in pixels.
    #[inline]
    pub fn tile_size(&self) -> u32 {
        self.tile_size
    }

    /// Size of the sampled image, which is also the rendered canvas size.
    #[inline]
    pub fn sample_size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Grid dimensions as `(columns, rows)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.tiles_x, self.tiles_y)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The tile at grid position `(tx, ty)`.
    pub fn get(&self, tx: u32, ty: u32) -> Option<&Tile<'a>> {
        if tx >= self.tiles_x || ty >= self.tiles_y {
            return None;
        }
        self.cells[(ty * self.tiles_x + tx) as usize].as_ref()
    }

    /// Rows of the grid, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Option<Tile<'a>>]> {
        self.cells.chunks(self.tiles_x.max(1) as usize)
    }

    /// Assigned tiles in row-major order, for tabular export.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile<'a>> {
        self.cells.iter().flatten()
    }

    /// The tile under a pixel position on the rendered mosaic.
    pub fn tile_at(&self, px: f64, py: f64) -> Option<&Tile<'a>> {
        if !(px >= 0.0 && py >= 0.0) {
            return None;
        }
        let tx = (px / self.tile_size as f64).floor() as u32;
        let ty = (py / self.tile_size as f64).floor() as u32;
        self.get(tx, ty)
    }

    /// Destination rectangle `(x, y, side, side)` a tile's swatch is painted
    /// into. Edge tiles paint a full square; the canvas clips the overflow.
    pub fn paint_rect(&self, tile: &Tile<'_>) -> (f64, f64, f64, f64) {
        let side = self.tile_size as f64;
        (tile.x as f64, tile.y as f64, side, side)
    }
}
