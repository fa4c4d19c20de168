//! Atlas layout strategies
//!
//! A layout turns a filtered list of swatches into [`PositionedEntry`]
//! values in world coordinates, plus a [`Guides`] overlay description.
//! Layouts are stateless: every call recomputes positions from scratch, and
//! switching strategy never carries positions over.
//!
//! Two strategies share the [`LayoutStrategy`] contract:
//!
//! - [`PolarLayout`]: hue around the circle, saturation outward from an
//!   inner radius. World origin is the wheel center.
//! - [`NestedGridLayout`]: two categorical fields define an outer grid,
//!   with optional inner fields subdividing each cell. World origin is the
//!   top-left corner of the layout area.
//!
//! [`AtlasMode`] wraps either one so callers can hold the active strategy as
//! a single value.

mod grid;
mod jitter;
mod polar;

pub use grid::{GridAxes, GridCellGuide, GridGuides, GridParams, NestedGridLayout};
pub use jitter::{jitter_offset, rolling_hash, GroupTag};
pub use polar::{PolarGuides, PolarLayout, PolarParams, GUIDE_HUES, GUIDE_SATURATIONS};

use crate::catalogue::SwatchRecord;

/// Brightness to size/opacity mapping shared by both strategies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualEncoding {
    /// Size at brightness 0
    pub min_size: f64,
    /// Size at brightness 100
    pub max_size: f64,
    /// Opacity at brightness 0
    pub min_alpha: f64,
    /// Opacity at brightness 100
    pub max_alpha: f64,
}

impl Default for VisualEncoding {
    fn default() -> Self {
        Self {
            min_size: 10.0,
            max_size: 26.0,
            min_alpha: 0.45,
            max_alpha: 1.0,
        }
    }
}

impl VisualEncoding {
    /// Rendered size for a brightness percentage.
    #[inline]
    pub fn size(&self, brightness: f64) -> f64 {
        lerp(self.min_size, self.max_size, unit(brightness))
    }

    /// Opacity for a brightness percentage.
    #[inline]
    pub fn alpha(&self, brightness: f64) -> f64 {
        lerp(self.min_alpha, self.max_alpha, unit(brightness))
    }
}

/// Percentage to `[0, 1]`.
#[inline]
pub(crate) fn unit(percent: f64) -> f64 {
    (percent / 100.0).clamp(0.0, 1.0)
}

#[inline]
pub(crate) fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// One swatch placed in layout world coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionedEntry<'a> {
    pub record: &'a SwatchRecord,
    /// Center x in world units
    pub x: f64,
    /// Center y in world units (grows downward)
    pub y: f64,
    /// Unscaled edge length of the rendered sprite
    pub size: f64,
    /// Opacity in `[0, 1]`
    pub alpha: f64,
    /// Group color hint when a color-by field is configured
    pub group: Option<GroupTag>,
}

/// Overlay geometry for the active strategy.
#[derive(Debug, Clone, PartialEq)]
pub enum Guides {
    Polar(PolarGuides),
    Grid(GridGuides),
}

/// Output of one layout pass.
#[derive(Debug, Clone, PartialEq)]
pub struct AtlasLayout<'a> {
    /// Entries in paint order (back to front)
    pub entries: Vec<PositionedEntry<'a>>,
    pub guides: Guides,
}

impl AtlasLayout<'_> {
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Common contract of the atlas strategies.
pub trait LayoutStrategy {
    /// Position every record of `records`, replacing any previous layout.
    fn layout<'a>(&self, records: &[&'a SwatchRecord]) -> AtlasLayout<'a>;
}

/// The active atlas strategy.
#[derive(Debug, Clone, PartialEq)]
pub enum AtlasMode {
    Polar(PolarLayout),
    Grid(NestedGridLayout),
}

impl AtlasMode {
    /// Short lowercase mode name (`polar` or `grid`).
    pub fn name(&self) -> &'static str {
        match self {
            AtlasMode::Polar(_) => "polar",
            AtlasMode::Grid(_) => "grid",
        }
    }
}

impl LayoutStrategy for AtlasMode {
    fn layout<'a>(&self, records: &[&'a SwatchRecord]) -> AtlasLayout<'a> {
        match self {
            AtlasMode::Polar(polar) => polar.layout(records),
            AtlasMode::Grid(grid) => grid.layout(records),
        }
    }
}

impl From<PolarLayout> for AtlasMode {
    fn from(layout: PolarLayout) -> Self {
        AtlasMode::Polar(layout)
    }
}

impl From<NestedGridLayout> for AtlasMode {
    fn from(layout: NestedGridLayout) -> Self {
        AtlasMode::Grid(layout)
    }
}
