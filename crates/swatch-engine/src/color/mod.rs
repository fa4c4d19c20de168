//! Color model: HSB conversion and the hue-aware match score.
//!
//! # Example
//!
//! ```
//! use swatch_engine::{score, Hsb, MatchWeights};
//!
//! let sampled = Hsb::from_rgb(200, 40, 40);
//! let swatch = Hsb::new(2.0, 78.0, 80.0);
//! let s = score(swatch, sampled, MatchWeights::default());
//! assert!(s >= 0.0);
//! ```

mod distance;
mod hsb;

pub use distance::{hue_distance, nearest, score, MatchWeights};
pub use hsb::Hsb;
