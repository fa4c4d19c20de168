//! Photomosaic composition
//!
//! [`MosaicComposer`] samples a sample image on a square tile grid and
//! assigns each tile the swatch with the lowest [`score`](crate::score).

mod composer;
mod tile;

pub use composer::{
    clamp_tile_size, MosaicComposer, DEFAULT_TILE_SIZE, MAX_TILE_SIZE, MIN_TILE_SIZE,
};
pub use tile::{Mosaic, Tile};
