//! Categorical multi-select filtering.

use std::collections::BTreeSet;

use crate::catalogue::{Field, SwatchRecord};

/// Selection state of one field.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FilterSelection {
    /// The field is not filtered.
    #[default]
    Unrestricted,
    /// Only these values pass. An empty set matches nothing.
    Allowed(BTreeSet<String>),
}

impl FilterSelection {
    /// Whether `value` passes this selection.
    #[inline]
    pub fn admits(&self, value: &str) -> bool {
        match self {
            FilterSelection::Unrestricted => true,
            FilterSelection::Allowed(set) => set.contains(value),
        }
    }
}

/// Per-field selection sets and the inclusion predicate over records.
///
/// A record passes iff every field's selection is unrestricted or contains
/// the record's value for that field.
///
/// # Example
///
/// ```
/// use swatch_engine::{Field, FilterEngine};
///
/// let mut filter = FilterEngine::new();
/// filter.set_selection(Field::Mordant, Some(["Alum", "Iron"]));
/// filter.set_selection(Field::Ph, None::<Vec<String>>);
/// assert!(!filter.is_unrestricted());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterEngine {
    selections: [FilterSelection; 5],
}

impl FilterEngine {
    /// A filter with every field unrestricted.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set one field's selection. `None` means unrestricted; `Some` replaces
    /// the allowed set, which may be empty.
    pub fn set_selection<I, S>(&mut self, field: Field, values: Option<I>)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selections[field.index()] = match values {
            None => FilterSelection::Unrestricted,
            Some(values) => FilterSelection::Allowed(values.into_iter().map(Into::into).collect()),
        };
    }

    /// Current selection for a field.
    #[inline]
    pub fn selection(&self, field: Field) -> &FilterSelection {
        &self.selections[field.index()]
    }

    /// Make every field unrestricted.
    pub fn select_all(&mut self) {
        self.selections = Default::default();
    }

    /// Set every field to the empty set, so nothing passes.
    pub fn clear_all(&mut self) {
        for selection in &mut self.selections {
            *selection = FilterSelection::Allowed(BTreeSet::new());
        }
    }

    /// Whether no field is restricted.
    pub fn is_unrestricted(&self) -> bool {
        self.selections
            .iter()
            .all(|s| *s == FilterSelection::Unrestricted)
    }

    /// Whether a record passes every field's selection.
    pub fn passes(&self, record: &SwatchRecord) -> bool {
        Field::ALL
            .iter()
            .all(|&field| self.selections[field.index()].admits(field.value(record)))
    }

    /// Records that pass, in input order.
    pub fn apply<'a, I>(&self, records: I) -> Vec<&'a SwatchRecord>
    where
        I: IntoIterator<Item = &'a SwatchRecord>,
    {
        records.into_iter().filter(|r| self.passes(r)).collect()
    }
}
