//! Shared drawing primitives.

use swatch_engine::square_crop;
use tiny_skia::{
    Color, FilterQuality, Paint, PathBuilder, Pattern, Pixmap, Rect, SpreadMode, Stroke, Transform,
};

use crate::error::RenderError;

/// Allocate a canvas, rejecting zero-sized requests.
pub fn new_canvas(width: u32, height: u32) -> Result<Pixmap, RenderError> {
    if width == 0 || height == 0 {
        return Err(RenderError::UnsupportedDimensions { width, height });
    }
    Pixmap::new(width, height).ok_or(RenderError::PixmapAllocation)
}

/// Draw the centered square crop of `image` into the square at `(x, y)`
/// with edge `side`, scaled with bilinear filtering.
pub fn draw_square_crop(
    canvas: &mut Pixmap,
    image: &Pixmap,
    x: f32,
    y: f32,
    side: f32,
    opacity: f32,
) {
    let crop = square_crop(image.width(), image.height());
    let Some(rect) = Rect::from_xywh(x, y, side, side) else {
        return;
    };
    let scale = side / crop.side as f32;
    let transform = Transform::from_row(
        scale,
        0.0,
        0.0,
        scale,
        x - crop.x as f32 * scale,
        y - crop.y as f32 * scale,
    );

    let paint = Paint {
        shader: Pattern::new(
            image.as_ref(),
            SpreadMode::Pad,
            FilterQuality::Bilinear,
            opacity.clamp(0.0, 1.0),
            transform,
        ),
        anti_alias: false,
        ..Default::default()
    };
    canvas.fill_rect(rect, &paint, Transform::identity(), None);
}

pub fn solid_paint(color: Color) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color(color);
    paint.anti_alias = true;
    paint
}

/// Stroke an axis-aligned square outline.
pub fn stroke_square(canvas: &mut Pixmap, x: f32, y: f32, side: f32, color: Color, width: f32) {
    let Some(rect) = Rect::from_xywh(x, y, side, side) else {
        return;
    };
    let path = PathBuilder::from_rect(rect);
    let stroke = Stroke {
        width,
        ..Default::default()
    };
    canvas.stroke_path(&path, &solid_paint(color), &stroke, Transform::identity(), None);
}

/// Stroke a circle given in canvas coordinates.
pub fn stroke_circle(canvas: &mut Pixmap, cx: f32, cy: f32, r: f32, color: Color, width: f32) {
    let Some(path) = PathBuilder::from_circle(cx, cy, r) else {
        return;
    };
    let stroke = Stroke {
        width,
        ..Default::default()
    };
    canvas.stroke_path(&path, &solid_paint(color), &stroke, Transform::identity(), None);
}

/// Stroke a straight line given in canvas coordinates.
pub fn stroke_line(
    canvas: &mut Pixmap,
    from: (f32, f32),
    to: (f32, f32),
    color: Color,
    width: f32,
) {
    let mut pb = PathBuilder::new();
    pb.move_to(from.0, from.1);
    pb.line_to(to.0, to.1);
    let Some(path) = pb.finish() else {
        return;
    };
    let stroke = Stroke {
        width,
        ..Default::default()
    };
    canvas.stroke_path(&path, &solid_paint(color), &stroke, Transform::identity(), None);
}
