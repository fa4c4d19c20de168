use std::collections::HashMap;

use swatch_engine::{AtlasLayout, AtlasMode, Guides, GridGuides, PolarGuides, ViewTransform};
use tiny_skia::{Color, Pixmap};

use super::canvas::{draw_square_crop, new_canvas, stroke_circle, stroke_line, stroke_square};
use super::codec::pixmap_from_buffer;
use crate::error::RenderError;
use crate::services::SwatchLibrary;

const GUIDE_WIDTH: f32 = 1.0;
const GROUP_OUTLINE_WIDTH: f32 = 2.0;

/// Canvas geometry for an atlas render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AtlasCanvas {
    pub width: u32,
    pub height: u32,
    /// World to canvas transform
    pub view: ViewTransform,
    /// Multiplier on each entry's encoded size
    pub size_scale: f64,
    pub show_guides: bool,
}

impl AtlasCanvas {
    /// Default canvas for a mode: the wheel is centered on a square canvas
    /// of its diameter, the grid fills its configured area.
    pub fn for_mode(mode: &AtlasMode) -> Self {
        let (width, height, view) = match mode {
            AtlasMode::Polar(polar) => {
                let d = polar.params().diameter;
                (d, d, ViewTransform::new(1.0, d / 2.0, d / 2.0))
            }
            AtlasMode::Grid(grid) => {
                let p = grid.params();
                (p.width, p.height, ViewTransform::default())
            }
        };
        Self {
            width: width.round().max(1.0) as u32,
            height: height.round().max(1.0) as u32,
            view,
            size_scale: 1.0,
            show_guides: true,
        }
    }

    /// Zoom around the canvas center.
    pub fn zoomed(mut self, zoom: f64) -> Self {
        let cx = self.width as f64 / 2.0;
        let cy = self.height as f64 / 2.0;
        let (wx, wy) = self.view.to_world(cx, cy);
        self.view = ViewTransform::new(zoom, cx - wx * zoom, cy - wy * zoom);
        self
    }

    /// Edge length on canvas of an entry with encoded size `size`.
    pub fn sprite_side(&self, size: f64) -> f64 {
        size * self.size_scale * self.view.zoom
    }
}

/// Paint every entry's tile image at its position, size and opacity, on
/// top of the strategy's guides.
pub fn render_atlas(
    layout: &AtlasLayout<'_>,
    library: &SwatchLibrary,
    frame: &AtlasCanvas,
) -> Result<Pixmap, RenderError> {
    let mut canvas = new_canvas(frame.width, frame.height)?;
    canvas.fill(Color::WHITE);

    if frame.show_guides {
        let color = Color::from_rgba8(200, 200, 200, 255);
        match &layout.guides {
            Guides::Polar(guides) => draw_polar_guides(&mut canvas, guides, &frame.view, color),
            Guides::Grid(guides) => draw_grid_guides(&mut canvas, guides, &frame.view, color),
        }
    }

    let mut sprites: HashMap<&str, Pixmap> = HashMap::new();
    for entry in &layout.entries {
        let name = entry.record.filename.as_str();
        if !sprites.contains_key(name) {
            let Some(images) = library.images(name) else {
                tracing::warn!(filename = name, "No tile image for atlas entry");
                continue;
            };
            sprites.insert(name, pixmap_from_buffer(&images.tile)?);
        }
        let Some(sprite) = sprites.get(name) else {
            continue;
        };

        let (cx, cy) = frame.view.to_screen(entry.x, entry.y);
        let side = frame.sprite_side(entry.size);
        let x = (cx - side / 2.0) as f32;
        let y = (cy - side / 2.0) as f32;
        draw_square_crop(&mut canvas, sprite, x, y, side as f32, entry.alpha as f32);

        if let Some(group) = entry.group {
            let [r, g, b] = group.to_rgb();
            stroke_square(
                &mut canvas,
                x,
                y,
                side as f32,
                Color::from_rgba8(r, g, b, 255),
                GROUP_OUTLINE_WIDTH,
            );
        }
    }

    tracing::debug!(
        entries = layout.len(),
        width = frame.width,
        height = frame.height,
        "Rendered atlas"
    );
    Ok(canvas)
}

fn draw_polar_guides(canvas: &mut Pixmap, guides: &PolarGuides, view: &ViewTransform, color: Color) {
    let (cx, cy) = view.to_screen(0.0, 0.0);
    for &(_, radius) in &guides.rings {
        stroke_circle(
            canvas,
            cx as f32,
            cy as f32,
            (radius * view.zoom) as f32,
            color,
            GUIDE_WIDTH,
        );
    }
    for &(_, angle) in &guides.spokes {
        let (sin, cos) = angle.sin_cos();
        let from = view.to_screen(cos * guides.inner_radius, sin * guides.inner_radius);
        let to = view.to_screen(cos * guides.outer_radius, sin * guides.outer_radius);
        stroke_line(
            canvas,
            (from.0 as f32, from.1 as f32),
            (to.0 as f32, to.1 as f32),
            color,
            GUIDE_WIDTH,
        );
    }
}

fn draw_grid_guides(canvas: &mut Pixmap, guides: &GridGuides, view: &ViewTransform, color: Color) {
    let columns = guides.columns.len();
    let rows = guides.rows.len();
    if columns == 0 || rows == 0 {
        return;
    }
    let left = guides.origin_x;
    let top = guides.origin_y;
    let right = left + guides.cell_width * columns as f64;
    let bottom = top + guides.cell_height * rows as f64;

    for i in 0..=columns {
        let x = left + guides.cell_width * i as f64;
        let from = view.to_screen(x, top);
        let to = view.to_screen(x, bottom);
        stroke_line(
            canvas,
            (from.0 as f32, from.1 as f32),
            (to.0 as f32, to.1 as f32),
            color,
            GUIDE_WIDTH,
        );
    }
    for j in 0..=rows {
        let y = top + guides.cell_height * j as f64;
        let from = view.to_screen(left, y);
        let to = view.to_screen(right, y);
        stroke_line(
            canvas,
            (from.0 as f32, from.1 as f32),
            (to.0 as f32, to.1 as f32),
            color,
            GUIDE_WIDTH,
        );
    }
}
