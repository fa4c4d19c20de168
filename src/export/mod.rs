//! Tabular and JSON exports.

pub mod csv;
pub mod json;

pub use csv::{mosaic_csv, MOSAIC_CSV_HEADER};
pub use json::{atlas_json, AtlasExport, CellExport, EntryExport, GuidesExport, LabelExport};
