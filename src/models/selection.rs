use std::str::FromStr;

use swatch_engine::{Field, FilterEngine};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SelectionParseError {
    #[error("Expected FIELD=VALUES, got '{0}'")]
    MissingSeparator(String),

    #[error("{0}")]
    UnknownField(String),
}

/// One field's selection as given on the command line.
///
/// `mordant=Alum,Iron` selects two values, `mordant=` selects nothing and
/// `mordant=*` makes the field unrestricted.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionArg {
    pub field: Field,
    /// `None` means unrestricted
    pub values: Option<Vec<String>>,
}

impl FromStr for SelectionArg {
    type Err = SelectionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (field, values) = s
            .split_once('=')
            .ok_or_else(|| SelectionParseError::MissingSeparator(s.to_string()))?;
        let field = Field::from_str(field.trim())
            .map_err(|e| SelectionParseError::UnknownField(e.to_string()))?;

        let values = match values.trim() {
            "*" => None,
            "" => Some(Vec::new()),
            list => Some(list.split(',').map(|v| v.trim().to_string()).collect()),
        };
        Ok(Self { field, values })
    }
}

impl SelectionArg {
    pub fn apply(&self, filter: &mut FilterEngine) {
        filter.set_selection(self.field, self.values.clone());
    }
}
