//! Error type for composition and layout operations.
//!
//! Load-time problems (malformed rows, undecodable images) never abort a
//! load and are therefore not represented here; see
//! [`LoadReport`](crate::catalogue::LoadReport).

use std::fmt;

/// Failure of a whole composition or layout operation.
///
/// Every variant aborts the operation it came from; no partial mosaic or
/// layout is ever returned alongside one of these.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineError {
    /// The candidate swatch list was empty.
    NoSwatchesAvailable,
    /// The sample pixel buffer does not hold `width * height` RGBA samples.
    SampleUnreadable {
        /// Byte length implied by the declared dimensions
        expected: usize,
        /// Byte length actually supplied
        actual: usize,
    },
    /// A sample image with zero width or height.
    InvalidDimensions {
        /// Declared width in pixels
        width: u32,
        /// Declared height in pixels
        height: u32,
    },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::NoSwatchesAvailable => write!(f, "no swatches available"),
            EngineError::SampleUnreadable { expected, actual } => {
                write!(
                    f,
                    "sample pixels unreadable: expected {} bytes, got {}",
                    expected, actual
                )
            }
            EngineError::InvalidDimensions { width, height } => {
                write!(f, "invalid sample dimensions: {}x{}", width, height)
            }
        }
    }
}

impl std::error::Error for EngineError {}
