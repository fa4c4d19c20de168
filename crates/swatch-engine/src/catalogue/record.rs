//! Raw and normalized swatch records.

use crate::color::Hsb;

/// One row of the metadata table, as handed over by the loading
/// collaborator. Numeric fields that failed to coerce are NaN.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawSwatchRow {
    pub filename: String,
    pub h: f64,
    pub s: f64,
    pub b: f64,
    pub dyestuff: String,
    pub ph: String,
    pub mordant: String,
    pub additive: String,
    pub time: String,
}

/// A validated swatch: measured color plus categorical provenance.
///
/// Immutable once loaded. `filename` is the identity key.
#[derive(Debug, Clone, PartialEq)]
pub struct SwatchRecord {
    pub filename: String,
    pub color: Hsb,
    pub dyestuff: String,
    pub ph: String,
    pub mordant: String,
    pub additive: String,
    pub exposure_time: String,
}

impl SwatchRecord {
    /// Normalize a raw row, or `None` if its color is not finite.
    pub fn from_raw(row: RawSwatchRow) -> Option<Self> {
        let color = Hsb::new(row.h, row.s, row.b);
        if !color.is_finite() {
            return None;
        }
        Some(Self {
            filename: row.filename,
            color,
            dyestuff: row.dyestuff,
            ph: row.ph,
            mordant: row.mordant,
            additive: row.additive,
            exposure_time: row.time,
        })
    }
}
