//! Nested categorical grid layout.

use std::collections::BTreeMap;

use super::jitter::{jitter_offset, GroupTag};
use super::{AtlasLayout, Guides, LayoutStrategy, PositionedEntry, VisualEncoding};
use crate::catalogue::{Field, FieldIndex, SwatchRecord};

/// Fields driving the outer grid and the optional inner sub-grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridAxes {
    pub outer_x: Field,
    pub outer_y: Field,
    pub inner_x: Option<Field>,
    pub inner_y: Option<Field>,
}

impl Default for GridAxes {
    fn default() -> Self {
        Self {
            outer_x: Field::Dyestuff,
            outer_y: Field::Ph,
            inner_x: None,
            inner_y: None,
        }
    }
}

impl GridAxes {
    /// Outer axes only.
    pub fn outer(x: Field, y: Field) -> Self {
        Self {
            outer_x: x,
            outer_y: y,
            inner_x: None,
            inner_y: None,
        }
    }

    /// Add inner axes.
    pub fn with_inner(mut self, x: Option<Field>, y: Option<Field>) -> Self {
        self.inner_x = x;
        self.inner_y = y;
        self
    }

    #[inline]
    pub fn has_inner(&self) -> bool {
        self.inner_x.is_some() || self.inner_y.is_some()
    }
}

/// Grid layout parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct GridParams {
    /// Layout area width including margins
    pub width: f64,
    /// Layout area height including margins
    pub height: f64,
    /// Margin on every side of the outer grid
    pub margin: f64,
    /// Inner padding of a cell as a fraction of the cell edge
    pub inner_margin_ratio: f64,
    /// Maximum jitter as a fraction of the smaller cell edge
    pub jitter_ratio: f64,
    /// Initial state of the placement hash
    pub seed: u32,
    pub axes: GridAxes,
    /// Field whose value picks each entry's group color
    pub colour_by: Option<Field>,
    pub encoding: VisualEncoding,
}

impl Default for GridParams {
    fn default() -> Self {
        Self {
            width: 1000.0,
            height: 800.0,
            margin: 40.0,
            inner_margin_ratio: 0.1,
            jitter_ratio: 0.15,
            seed: 0,
            axes: GridAxes::default(),
            colour_by: None,
            encoding: VisualEncoding::default(),
        }
    }
}

/// Inner sub-grid of one occupied outer cell.
#[derive(Debug, Clone, PartialEq)]
pub struct GridCellGuide {
    pub column: usize,
    pub row: usize,
    /// Local inner x values, empty when no inner x field is set
    pub inner_columns: Vec<String>,
    /// Local inner y values, empty when no inner y field is set
    pub inner_rows: Vec<String>,
}

/// Overlay geometry for the grid.
#[derive(Debug, Clone, PartialEq)]
pub struct GridGuides {
    pub origin_x: f64,
    pub origin_y: f64,
    pub cell_width: f64,
    pub cell_height: f64,
    pub x_field: Field,
    pub y_field: Field,
    /// Outer column values, left to right
    pub columns: Vec<String>,
    /// Outer row values, top to bottom
    pub rows: Vec<String>,
    /// Inner sub-grids, only when inner axes are set
    pub cells: Vec<GridCellGuide>,
}

/// Categorical grid with optional per-cell subdivision.
///
/// Outer column and row values come from a [`FieldIndex`] built over the
/// records being laid out, so the grid shrinks with the filter. Inner
/// indexes are built per cell from the records inside that cell only;
/// neighbouring cells may have different inner cardinalities.
///
/// Without inner axes, records sharing a cell are spread around its center
/// by a filename-hash offset (see [`jitter_offset`]). The offset is stable
/// for a given filename and seed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NestedGridLayout {
    params: GridParams,
}

impl NestedGridLayout {
    pub fn new(params: GridParams) -> Self {
        Self { params }
    }

    #[inline]
    pub fn params(&self) -> &GridParams {
        &self.params
    }

    /// Replace the axis fields.
    pub fn axes(mut self, axes: GridAxes) -> Self {
        self.params.axes = axes;
        self
    }

    /// Set or clear the group-color field.
    pub fn colour_by(mut self, field: Option<Field>) -> Self {
        self.params.colour_by = field;
        self
    }

    /// Set the placement hash seed.
    pub fn seed(mut self, seed: u32) -> Self {
        self.params.seed = seed;
        self
    }
}

/// Position of `record` along an optional local axis; 0 when absent.
fn slot(index: Option<&FieldIndex>, record: &SwatchRecord) -> usize {
    index
        .and_then(|i| i.position(i.field().value(record)))
        .unwrap_or(0)
}

fn span(index: Option<&FieldIndex>) -> usize {
    index.map_or(1, |i| i.len().max(1))
}

impl LayoutStrategy for NestedGridLayout {
    fn layout<'a>(&self, records: &[&'a SwatchRecord]) -> AtlasLayout<'a> {
        let p = &self.params;
        let axes = p.axes;

        let columns = FieldIndex::build(axes.outer_x, records.iter().copied());
        let rows = FieldIndex::build(axes.outer_y, records.iter().copied());

        let cols = columns.len().max(1);
        let row_count = rows.len().max(1);
        let cell_w = (p.width - 2.0 * p.margin).max(0.0) / cols as f64;
        let cell_h = (p.height - 2.0 * p.margin).max(0.0) / row_count as f64;

        // Keyed (row, column) so entries come out row-major
        let mut cells: BTreeMap<(usize, usize), Vec<&'a SwatchRecord>> = BTreeMap::new();
        for &record in records {
            let cx = columns.position(axes.outer_x.value(record));
            let cy = rows.position(axes.outer_y.value(record));
            if let (Some(cx), Some(cy)) = (cx, cy) {
                cells.entry((cy, cx)).or_default().push(record);
            }
        }

        let mut entries = Vec::with_capacity(records.len());
        let mut cell_guides = Vec::new();

        for (&(cy, cx), members) in &cells {
            let cell_x = p.margin + cx as f64 * cell_w;
            let cell_y = p.margin + cy as f64 * cell_h;

            let inner_x = axes
                .inner_x
                .map(|f| FieldIndex::build(f, members.iter().copied()));
            let inner_y = axes
                .inner_y
                .map(|f| FieldIndex::build(f, members.iter().copied()));

            let pad_x = cell_w * p.inner_margin_ratio;
            let pad_y = cell_h * p.inner_margin_ratio;
            let sub_w = (cell_w - 2.0 * pad_x).max(0.0) / span(inner_x.as_ref()) as f64;
            let sub_h = (cell_h - 2.0 * pad_y).max(0.0) / span(inner_y.as_ref()) as f64;

            for &record in members {
                let (x, y) = if axes.has_inner() {
                    let ix = slot(inner_x.as_ref(), record) as f64;
                    let iy = slot(inner_y.as_ref(), record) as f64;
                    (
                        cell_x + pad_x + (ix + 0.5) * sub_w,
                        cell_y + pad_y + (iy + 0.5) * sub_h,
                    )
                } else {
                    let (dx, dy) =
                        jitter_offset(p.seed, &record.filename, cell_w.min(cell_h), p.jitter_ratio);
                    (cell_x + cell_w / 2.0 + dx, cell_y + cell_h / 2.0 + dy)
                };

                entries.push(PositionedEntry {
                    record,
                    x,
                    y,
                    size: p.encoding.size(record.color.b),
                    alpha: p.encoding.alpha(record.color.b),
                    group: p.colour_by.map(|f| GroupTag::for_value(f.value(record))),
                });
            }

            if axes.has_inner() {
                cell_guides.push(GridCellGuide {
                    column: cx,
                    row: cy,
                    inner_columns: inner_x.map(|i| i.values().to_vec()).unwrap_or_default(),
                    inner_rows: inner_y.map(|i| i.values().to_vec()).unwrap_or_default(),
                });
            }
        }

        AtlasLayout {
            entries,
            guides: Guides::Grid(GridGuides {
                origin_x: p.margin,
                origin_y: p.margin,
                cell_width: cell_w,
                cell_height: cell_h,
                x_field: axes.outer_x,
                y_field: axes.outer_y,
                columns: columns.values().to_vec(),
                rows: rows.values().to_vec(),
                cells: cell_guides,
            }),
        }
    }
}
