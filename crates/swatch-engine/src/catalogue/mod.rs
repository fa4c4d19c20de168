//! Swatch catalogue types
//!
//! Raw metadata rows are normalized into [`SwatchRecord`]s and indexed per
//! categorical [`Field`] for filter population and axis ordering.

mod catalogue;
mod field;
mod index;
mod record;

pub use catalogue::{Catalogue, LoadReport};
pub use field::{exposure_minutes, Field, FieldOrdering, ParseFieldError};
pub use index::FieldIndex;
pub use record::{RawSwatchRow, SwatchRecord};
