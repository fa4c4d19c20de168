//! Polar (color wheel) layout.

use super::{lerp, unit, AtlasLayout, Guides, LayoutStrategy, PositionedEntry, VisualEncoding};
use crate::catalogue::SwatchRecord;

/// Saturation levels at which guide rings are drawn.
pub const GUIDE_SATURATIONS: [f64; 5] = [20.0, 40.0, 60.0, 80.0, 100.0];
/// Hues at which guide spokes are drawn.
pub const GUIDE_HUES: [f64; 6] = [0.0, 60.0, 120.0, 180.0, 240.0, 300.0];

/// Polar layout parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolarParams {
    /// Overall wheel diameter `D`
    pub diameter: f64,
    /// Radius at saturation 0
    pub inner_radius: f64,
    /// Radius at saturation 100 as a fraction of `D`
    pub outer_ratio: f64,
    pub encoding: VisualEncoding,
}

impl Default for PolarParams {
    fn default() -> Self {
        Self {
            diameter: 800.0,
            inner_radius: 30.0,
            outer_ratio: 0.45,
            encoding: VisualEncoding::default(),
        }
    }
}

/// Guide overlay for the wheel, centered on the world origin.
#[derive(Debug, Clone, PartialEq)]
pub struct PolarGuides {
    pub inner_radius: f64,
    pub outer_radius: f64,
    /// `(saturation, radius)` per ring
    pub rings: Vec<(f64, f64)>,
    /// `(hue, angle in radians)` per spoke, using the same angle convention
    /// as placed entries
    pub spokes: Vec<(f64, f64)>,
}

/// Hue around the wheel, saturation outward.
///
/// Angle is `hue - 90` degrees, so hue 0 points up (negative y). Radius
/// interpolates saturation from `inner_radius` to `outer_ratio * diameter`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PolarLayout {
    params: PolarParams,
}

impl PolarLayout {
    pub fn new(params: PolarParams) -> Self {
        Self { params }
    }

    #[inline]
    pub fn params(&self) -> &PolarParams {
        &self.params
    }

    /// Radius at saturation 100.
    #[inline]
    pub fn outer_radius(&self) -> f64 {
        self.params.diameter * self.params.outer_ratio
    }

    /// Radius for a saturation percentage.
    #[inline]
    pub fn radius(&self, saturation: f64) -> f64 {
        lerp(self.params.inner_radius, self.outer_radius(), unit(saturation))
    }

    /// Wheel angle in radians for a hue in degrees.
    #[inline]
    pub fn angle(hue: f64) -> f64 {
        (hue - 90.0).to_radians()
    }

    /// World position of a hue/saturation pair.
    pub fn position(&self, hue: f64, saturation: f64) -> (f64, f64) {
        let r = self.radius(saturation);
        let theta = Self::angle(hue);
        (r * theta.cos(), r * theta.sin())
    }

    fn guides(&self) -> PolarGuides {
        PolarGuides {
            inner_radius: self.params.inner_radius,
            outer_radius: self.outer_radius(),
            rings: GUIDE_SATURATIONS
                .iter()
                .map(|&s| (s, self.radius(s)))
                .collect(),
            spokes: GUIDE_HUES.iter().map(|&h| (h, Self::angle(h))).collect(),
        }
    }
}

impl LayoutStrategy for PolarLayout {
    fn layout<'a>(&self, records: &[&'a SwatchRecord]) -> AtlasLayout<'a> {
        let enc = &self.params.encoding;
        let mut entries: Vec<PositionedEntry<'a>> = records
            .iter()
            .map(|&record| {
                let (x, y) = self.position(record.color.h, record.color.s);
                PositionedEntry {
                    record,
                    x,
                    y,
                    size: enc.size(record.color.b),
                    alpha: enc.alpha(record.color.b),
                    group: None,
                }
            })
            .collect();

        // Paint order only: back to front by y, stable for equal rows
        entries.sort_by(|a, b| a.y.total_cmp(&b.y));

        AtlasLayout {
            entries,
            guides: Guides::Polar(self.guides()),
        }
    }
}
