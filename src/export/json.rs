use serde::Serialize;
use swatch_engine::{AtlasLayout, Field, Guides, PositionedEntry};

/// Serializable snapshot of an atlas layout.
#[derive(Debug, Serialize)]
pub struct AtlasExport<'a> {
    pub mode: &'a str,
    pub entries: Vec<EntryExport<'a>>,
    pub guides: GuidesExport<'a>,
}

#[derive(Debug, Serialize)]
pub struct EntryExport<'a> {
    pub filename: &'a str,
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub alpha: f64,
    /// Group colour as `#rrggbb`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    pub h: f64,
    pub s: f64,
    pub b: f64,
    pub dyestuff: &'a str,
    #[serde(rename = "pH")]
    pub ph: &'a str,
    pub mordant: &'a str,
    pub additive: &'a str,
    pub time: &'a str,
}

impl<'a> From<&PositionedEntry<'a>> for EntryExport<'a> {
    fn from(entry: &PositionedEntry<'a>) -> Self {
        let r = entry.record;
        Self {
            filename: &r.filename,
            x: entry.x,
            y: entry.y,
            size: entry.size,
            alpha: entry.alpha,
            group: entry.group.map(|g| g.to_hex()),
            h: r.color.h,
            s: r.color.s,
            b: r.color.b,
            dyestuff: &r.dyestuff,
            ph: &r.ph,
            mordant: &r.mordant,
            additive: &r.additive,
            time: &r.exposure_time,
        }
    }
}

/// Raw category value with its display label.
#[derive(Debug, Serialize, PartialEq)]
pub struct LabelExport<'a> {
    pub value: &'a str,
    pub label: String,
}

fn labels(field: Field, values: &[String]) -> Vec<LabelExport<'_>> {
    values
        .iter()
        .map(|v| LabelExport {
            value: v,
            label: field.display_label(v).into_owned(),
        })
        .collect()
}

#[derive(Debug, Serialize)]
pub struct CellExport<'a> {
    pub column: usize,
    pub row: usize,
    pub inner_columns: &'a [String],
    pub inner_rows: &'a [String],
}

#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum GuidesExport<'a> {
    Polar {
        inner_radius: f64,
        outer_radius: f64,
        /// `[saturation, radius]` pairs
        rings: &'a [(f64, f64)],
        /// `[hue, angle]` pairs, angle in radians
        spokes: &'a [(f64, f64)],
    },
    Grid {
        origin_x: f64,
        origin_y: f64,
        cell_width: f64,
        cell_height: f64,
        x_title: &'static str,
        y_title: &'static str,
        columns: Vec<LabelExport<'a>>,
        rows: Vec<LabelExport<'a>>,
        cells: Vec<CellExport<'a>>,
    },
}

impl<'a> From<&'a Guides> for GuidesExport<'a> {
    fn from(guides: &'a Guides) -> Self {
        match guides {
            Guides::Polar(p) => GuidesExport::Polar {
                inner_radius: p.inner_radius,
                outer_radius: p.outer_radius,
                rings: &p.rings,
                spokes: &p.spokes,
            },
            Guides::Grid(g) => GuidesExport::Grid {
                origin_x: g.origin_x,
                origin_y: g.origin_y,
                cell_width: g.cell_width,
                cell_height: g.cell_height,
                x_title: g.x_field.title(),
                y_title: g.y_field.title(),
                columns: labels(g.x_field, &g.columns),
                rows: labels(g.y_field, &g.rows),
                cells: g
                    .cells
                    .iter()
                    .map(|c| CellExport {
                        column: c.column,
                        row: c.row,
                        inner_columns: &c.inner_columns,
                        inner_rows: &c.inner_rows,
                    })
                    .collect(),
            },
        }
    }
}

impl<'a> AtlasExport<'a> {
    pub fn new(mode: &'a str, layout: &'a AtlasLayout<'a>) -> Self {
        Self {
            mode,
            entries: layout.entries.iter().map(EntryExport::from).collect(),
            guides: GuidesExport::from(&layout.guides),
        }
    }
}

/// Pretty-printed JSON of an atlas layout.
pub fn atlas_json(mode: &str, layout: &AtlasLayout<'_>) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&AtlasExport::new(mode, layout))
}
