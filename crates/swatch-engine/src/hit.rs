//! Pointer hit-testing against positioned atlas entries.

use crate::layout::PositionedEntry;

/// Pan/zoom transform from world to presentation coordinates.
///
/// `screen = world * zoom + pan`. Hit-testing needs the exact inverse, so
/// presentation code should convert pointer positions with
/// [`to_world`](Self::to_world) rather than re-deriving it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    pub zoom: f64,
    pub pan_x: f64,
    pub pan_y: f64,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            pan_x: 0.0,
            pan_y: 0.0,
        }
    }
}

impl ViewTransform {
    pub fn new(zoom: f64, pan_x: f64, pan_y: f64) -> Self {
        Self { zoom, pan_x, pan_y }
    }

    /// World point to presentation point.
    #[inline]
    pub fn to_screen(&self, x: f64, y: f64) -> (f64, f64) {
        (x * self.zoom + self.pan_x, y * self.zoom + self.pan_y)
    }

    /// Presentation point to world point.
    #[inline]
    pub fn to_world(&self, sx: f64, sy: f64) -> (f64, f64) {
        ((sx - self.pan_x) / self.zoom, (sy - self.pan_y) / self.zoom)
    }
}

/// Index of the entry under world point `(x, y)`.
///
/// An entry covers the axis-aligned box of half-size
/// `size * size_scale * 0.5` around its center. Among covering entries the
/// one whose center is nearest wins; ties keep the earlier entry.
pub fn find_entry_at(
    x: f64,
    y: f64,
    entries: &[PositionedEntry<'_>],
    size_scale: f64,
) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, entry) in entries.iter().enumerate() {
        let half = entry.size * size_scale * 0.5;
        let dx = x - entry.x;
        let dy = y - entry.y;
        if dx.abs() > half || dy.abs() > half {
            continue;
        }
        let dist = dx * dx + dy * dy;
        if best.map_or(true, |(_, d)| dist < d) {
            best = Some((i, dist));
        }
    }
    best.map(|(i, _)| i)
}

/// [`find_entry_at`] for a pointer position in presentation coordinates.
pub fn find_entry_at_screen(
    sx: f64,
    sy: f64,
    view: &ViewTransform,
    entries: &[PositionedEntry<'_>],
    size_scale: f64,
) -> Option<usize> {
    let (x, y) = view.to_world(sx, sy);
    find_entry_at(x, y, entries, size_scale)
}
