//! Ordered distinct values of one field.

use super::field::Field;
use super::record::SwatchRecord;

/// The distinct values a field takes over a set of records, in the field's
/// domain order (see [`Field::ordering`]).
///
/// Values are first collected in first-seen order and then stably sorted,
/// so values the comparator considers equal keep their encounter order.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldIndex {
    field: Field,
    values: Vec<String>,
}

impl FieldIndex {
    /// Build the index for `field` over `records`.
    pub fn build<'a, I>(field: Field, records: I) -> Self
    where
        I: IntoIterator<Item = &'a SwatchRecord>,
    {
        let mut values: Vec<String> = Vec::new();
        for record in records {
            let v = field.value(record);
            if !values.iter().any(|seen| seen == v) {
                values.push(v.to_string());
            }
        }
        let ordering = field.ordering();
        values.sort_by(|a, b| ordering.compare(a, b));
        Self { field, values }
    }

    /// The field this index describes.
    #[inline]
    pub fn field(&self) -> Field {
        self.field
    }

    /// Ordered distinct values.
    #[inline]
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Number of distinct values.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Ordinal position of a value, or `None` if absent.
    pub fn position(&self, value: &str) -> Option<usize> {
        self.values.iter().position(|v| v == value)
    }

    /// Display labels in index order.
    pub fn labels(&self) -> Vec<String> {
        self.values
            .iter()
            .map(|v| self.field.display_label(v).into_owned())
            .collect()
    }
}
