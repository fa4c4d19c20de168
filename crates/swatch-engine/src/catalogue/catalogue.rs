//! The swatch catalogue: validated records plus per-field indexes.

use std::collections::HashSet;

use super::field::Field;
use super::index::FieldIndex;
use super::record::{RawSwatchRow, SwatchRecord};

/// Summary of what happened while loading rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadReport {
    /// Rows that became records
    pub accepted: usize,
    /// Rows dropped because hue, saturation or brightness was not finite
    pub malformed: usize,
    /// Rows dropped because an earlier row already used the same filename
    pub duplicates: usize,
}

/// An ordered collection of swatch records with a [`FieldIndex`] per field.
///
/// Record order is load order, which is also the tie-break order for
/// nearest-swatch matching. Indexes are rebuilt on every mutation.
#[derive(Debug, Clone)]
pub struct Catalogue {
    records: Vec<SwatchRecord>,
    indexes: Vec<FieldIndex>,
    report: LoadReport,
}

impl Catalogue {
    /// Build a catalogue from raw rows, silently dropping malformed ones.
    ///
    /// # Example
    ///
    /// ```
    /// use swatch_engine::{Catalogue, RawSwatchRow};
    ///
    /// let rows = vec![
    ///     RawSwatchRow { filename: "a.png".into(), h: 10.0, s: 50.0, b: 50.0, ..Default::default() },
    ///     RawSwatchRow { filename: "b.png".into(), h: f64::NAN, ..Default::default() },
    /// ];
    /// let catalogue = Catalogue::load(rows);
    /// assert_eq!(catalogue.len(), 1);
    /// assert_eq!(catalogue.report().malformed, 1);
    /// ```
    pub fn load(rows: impl IntoIterator<Item = RawSwatchRow>) -> Self {
        let mut report = LoadReport::default();
        let mut seen = HashSet::new();
        let mut records = Vec::new();

        for row in rows {
            let Some(record) = SwatchRecord::from_raw(row) else {
                report.malformed += 1;
                continue;
            };
            if !seen.insert(record.filename.clone()) {
                report.duplicates += 1;
                continue;
            }
            records.push(record);
        }
        report.accepted = records.len();

        let indexes = build_indexes(&records);
        Self {
            records,
            indexes,
            report,
        }
    }

    /// Records in load order.
    #[inline]
    pub fn records(&self) -> &[SwatchRecord] {
        &self.records
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Load statistics from [`Catalogue::load`].
    #[inline]
    pub fn report(&self) -> LoadReport {
        self.report
    }

    /// Look a record up by filename.
    pub fn get(&self, filename: &str) -> Option<&SwatchRecord> {
        self.records.iter().find(|r| r.filename == filename)
    }

    /// Ordered distinct values of `field` across the whole catalogue.
    #[inline]
    pub fn unique_values(&self, field: Field) -> &FieldIndex {
        &self.indexes[field.index()]
    }

    /// Keep only records matching `keep`, rebuilding indexes.
    ///
    /// Returns the number of records removed.
    pub fn retain<F>(&mut self, mut keep: F) -> usize
    where
        F: FnMut(&SwatchRecord) -> bool,
    {
        let before = self.records.len();
        self.records.retain(|r| keep(r));
        let removed = before - self.records.len();
        if removed > 0 {
            self.indexes = build_indexes(&self.records);
        }
        removed
    }
}

fn build_indexes(records: &[SwatchRecord]) -> Vec<FieldIndex> {
    Field::ALL
        .iter()
        .map(|&field| FieldIndex::build(field, records))
        .collect()
}
