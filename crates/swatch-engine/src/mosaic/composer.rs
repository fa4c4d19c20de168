//! MosaicComposer builder: tiles a sample image with nearest swatches.

use super::tile::{Mosaic, Tile};
use crate::catalogue::SwatchRecord;
use crate::color::{nearest, MatchWeights};
use crate::error::EngineError;
use crate::pixels::{PixelBuffer, Region};

/// Smallest accepted tile edge in pixels.
pub const MIN_TILE_SIZE: u32 = 4;
/// Largest accepted tile edge in pixels.
pub const MAX_TILE_SIZE: u32 = 200;
/// Tile edge used when none is configured.
pub const DEFAULT_TILE_SIZE: u32 = 20;

/// Clamp a requested tile edge into `MIN_TILE_SIZE..=MAX_TILE_SIZE`.
#[inline]
pub fn clamp_tile_size(size: u32) -> u32 {
    size.clamp(MIN_TILE_SIZE, MAX_TILE_SIZE)
}

/// Photomosaic composer.
///
/// Configuration methods consume and return `self`; [`compose`](Self::compose)
/// takes `&self` so one composer can be reused across samples.
///
/// # Example
///
/// ```
/// use swatch_engine::{Catalogue, MatchWeights, MosaicComposer, PixelBuffer, RawSwatchRow};
///
/// let catalogue = Catalogue::load(vec![RawSwatchRow {
///     filename: "red.png".into(), h: 0.0, s: 100.0, b: 100.0, ..Default::default()
/// }]);
/// let candidates: Vec<_> = catalogue.records().iter().collect();
/// let sample = PixelBuffer::solid(100, 50, [255, 0, 0]).unwrap();
///
/// let mosaic = MosaicComposer::new(MatchWeights::default())
///     .tile_size(20)
///     .compose(&sample, &candidates)
///     .unwrap();
/// assert_eq!(mosaic.dimensions(), (5, 3));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MosaicComposer {
    tile_size: u32,
    weights: MatchWeights,
}

impl MosaicComposer {
    /// Create a composer with the default tile size.
    pub fn new(weights: MatchWeights) -> Self {
        Self {
            tile_size: DEFAULT_TILE_SIZE,
            weights,
        }
    }

    /// Set the tile edge length, clamped to `[4, 200]`.
    #[inline]
    pub fn tile_size(mut self, size: u32) -> Self {
        self.tile_size = clamp_tile_size(size);
        self
    }

    /// Replace the match weights.
    #[inline]
    pub fn weights(mut self, weights: MatchWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Configured tile edge length.
    #[inline]
    pub fn current_tile_size(&self) -> u32 {
        self.tile_size
    }

    /// Tile `sample` with the best-scoring candidate per cell.
    ///
    /// Tiles step by the tile size from the top-left corner; the last row and
    /// column may cover a partial region, which is sampled clipped to the
    /// image. Each cell scans every candidate; on equal scores the earliest
    /// candidate wins.
    ///
    /// # Errors
    ///
    /// [`EngineError::NoSwatchesAvailable`] if `candidates` is empty. No
    /// partial grid is produced.
    pub fn compose<'a>(
        &self,
        sample: &PixelBuffer,
        candidates: &[&'a SwatchRecord],
    ) -> Result<Mosaic<'a>, EngineError> {
        if candidates.is_empty() {
            return Err(EngineError::NoSwatchesAvailable);
        }

        let size = self.tile_size;
        let (width, height) = (sample.width(), sample.height());
        let tiles_x = width.div_ceil(size);
        let tiles_y = height.div_ceil(size);

        let mut cells = Vec::with_capacity(tiles_x as usize * tiles_y as usize);
        for ty in 0..tiles_y {
            let y = ty * size;
            for tx in 0..tiles_x {
                let x = tx * size;
                let region = Region::new(x, y, size, size);
                let sampled = sample.average_colour(region);

                let best = nearest(candidates.iter().map(|r| r.color), sampled, self.weights);
                cells.push(best.map(|(i, score)| Tile {
                    tx,
                    ty,
                    x,
                    y,
                    width: size,
                    height: size,
                    sampled,
                    swatch: candidates[i],
                    score,
                }));
            }
        }

        Ok(Mosaic {
            tile_size: size,
            width,
            height,
            tiles_x,
            tiles_y,
            cells,
        })
    }
}
