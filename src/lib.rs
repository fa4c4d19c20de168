//! dyeatlas - browse a catalogue of dye swatches
//!
//! Loads swatch metadata and images, then renders photomosaics of sample
//! images and colour atlases of the catalogue. The matching and layout
//! algorithms live in the `swatch-engine` crate; this crate supplies
//! configuration, loading, session state, raster output and exports.

pub mod error;
pub mod export;
pub mod models;
pub mod rendering;
pub mod services;
