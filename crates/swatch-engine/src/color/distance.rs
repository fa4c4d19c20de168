//! Hue-aware distance metric used for swatch matching.

use super::hsb::Hsb;

/// Per-component weights for [`score`].
///
/// Weights are plain multipliers and need not sum to 1. Hue defaults to the
/// largest weight since it dominates perceived dye color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchWeights {
    /// Weight applied to circular hue distance (degrees)
    pub hue: f64,
    /// Weight applied to absolute brightness difference
    pub brightness: f64,
    /// Weight applied to absolute saturation difference
    pub saturation: f64,
}

impl MatchWeights {
    /// Create a weight triple.
    #[inline]
    pub fn new(hue: f64, brightness: f64, saturation: f64) -> Self {
        Self {
            hue,
            brightness,
            saturation,
        }
    }
}

impl Default for MatchWeights {
    fn default() -> Self {
        Self::new(1.0, 0.6, 0.2)
    }
}

/// Circular distance between two hues in degrees, in `0.0..=180.0`.
///
/// # Example
/// ```
/// use swatch_engine::hue_distance;
/// assert_eq!(hue_distance(10.0, 350.0), 20.0);
/// ```
#[inline]
pub fn hue_distance(a: f64, b: f64) -> f64 {
    let d = (a - b).abs() % 360.0;
    if d > 180.0 {
        360.0 - d
    } else {
        d
    }
}

/// Weighted HSB distance between a candidate swatch and a target color.
///
/// `hue * hue_distance + brightness * |Δb| + saturation * |Δs|`. Lower is
/// better. Non-negative whenever the weights are.
#[inline]
pub fn score(candidate: Hsb, target: Hsb, weights: MatchWeights) -> f64 {
    weights.hue * hue_distance(candidate.h, target.h)
        + weights.brightness * (candidate.b - target.b).abs()
        + weights.saturation * (candidate.s - target.s).abs()
}

/// Index of the lowest-scoring candidate, with its score.
///
/// Linear scan; on exact ties the first candidate encountered wins.
/// Returns `None` for an empty iterator, or when no candidate produces a
/// finite score.
pub fn nearest<I>(candidates: I, target: Hsb, weights: MatchWeights) -> Option<(usize, f64)>
where
    I: IntoIterator<Item = Hsb>,
{
    let mut best = None;
    let mut best_score = f64::INFINITY;
    for (i, candidate) in candidates.into_iter().enumerate() {
        let s = score(candidate, target, weights);
        if s < best_score {
            best = Some(i);
            best_score = s;
        }
    }
    best.map(|i| (i, best_score))
}
