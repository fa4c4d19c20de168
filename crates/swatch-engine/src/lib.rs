//! swatch-engine: color matching and layout for dye swatch catalogues
//!
//! This library turns a catalogue of measured dye swatches into two kinds of
//! drawable output:
//!
//! - a **photomosaic**: a sample image tiled with the nearest-matching swatch
//!   per tile ([`MosaicComposer`])
//! - an **atlas**: every swatch placed on a color wheel ([`PolarLayout`]) or
//!   a categorical grid ([`NestedGridLayout`]), with hover hit-testing
//!   ([`find_entry_at`])
//!
//! Everything here is synchronous and allocation-light. Loading metadata,
//! decoding images and drawing pixels are left to the caller.
//!
//! # Quick Start
//!
//! ```
//! use swatch_engine::{
//!     Catalogue, Field, FilterEngine, LayoutStrategy, MatchWeights, MosaicComposer,
//!     PixelBuffer, PolarLayout, RawSwatchRow,
//! };
//!
//! let catalogue = Catalogue::load(vec![
//!     RawSwatchRow {
//!         filename: "madder_alum.png".into(),
//!         h: 8.0, s: 70.0, b: 75.0,
//!         dyestuff: "Madder".into(), mordant: "Alum".into(),
//!         ..Default::default()
//!     },
//!     RawSwatchRow {
//!         filename: "indigo.png".into(),
//!         h: 220.0, s: 60.0, b: 40.0,
//!         dyestuff: "Indigo".into(), mordant: "None".into(),
//!         ..Default::default()
//!     },
//! ]);
//!
//! let mut filter = FilterEngine::new();
//! filter.set_selection(Field::Mordant, Some(["Alum"]));
//! let visible = filter.apply(catalogue.records());
//! assert_eq!(visible.len(), 1);
//!
//! let sample = PixelBuffer::solid(40, 40, [200, 50, 40]).unwrap();
//! let mosaic = MosaicComposer::new(MatchWeights::default())
//!     .tile_size(20)
//!     .compose(&sample, &visible)
//!     .unwrap();
//! assert_eq!(mosaic.dimensions(), (2, 2));
//!
//! let atlas = PolarLayout::default().layout(&visible);
//! assert_eq!(atlas.entries.len(), 1);
//! ```
//!
//! # Match Score
//!
//! Candidates are ranked by a weighted sum of absolute component
//! differences, with hue measured the short way around the wheel:
//!
//! `score = w_h * hue_distance + w_b * |Δb| + w_s * |Δs|`
//!
//! Lower is better. Ties go to the candidate that comes first in the list
//! handed to the composer, which is catalogue load order.

pub mod catalogue;
pub mod color;
pub mod error;
pub mod filter;
pub mod hit;
pub mod layout;
pub mod mosaic;
pub mod pixels;

#[cfg(test)]
mod domain_tests;

pub use catalogue::{
    exposure_minutes, Catalogue, Field, FieldIndex, FieldOrdering, LoadReport, ParseFieldError,
    RawSwatchRow, SwatchRecord,
};
pub use color::{hue_distance, nearest, score, Hsb, MatchWeights};
pub use error::EngineError;
pub use filter::{FilterEngine, FilterSelection};
pub use hit::{find_entry_at, find_entry_at_screen, ViewTransform};
pub use layout::{
    AtlasLayout, AtlasMode, GridAxes, GridCellGuide, GridGuides, GridParams, GroupTag, Guides,
    LayoutStrategy, NestedGridLayout, PolarGuides, PolarLayout, PolarParams, PositionedEntry,
    VisualEncoding,
};
pub use mosaic::{clamp_tile_size, Mosaic, MosaicComposer, Tile, DEFAULT_TILE_SIZE};
pub use pixels::{square_crop, PixelBuffer, Region, SquareCrop};
