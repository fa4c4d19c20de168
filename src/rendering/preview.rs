use swatch_engine::{Field, SwatchRecord, Tile};
use tiny_skia::{Color, Pixmap};

use super::canvas::{draw_square_crop, new_canvas};
use super::codec::pixmap_from_buffer;
use crate::error::RenderError;
use crate::services::SwatchImages;

/// Default edge length of the hover preview
pub const PREVIEW_SIDE: u32 = 160;

/// Square hover preview: the preview image, or the tile image when the
/// preview is missing, center-cropped to `side`.
pub fn render_preview(images: &SwatchImages, side: u32) -> Result<Pixmap, RenderError> {
    let mut canvas = new_canvas(side, side)?;
    canvas.fill(Color::WHITE);
    let source = pixmap_from_buffer(images.preview_or_tile())?;
    draw_square_crop(&mut canvas, &source, 0.0, 0.0, side as f32, 1.0);
    Ok(canvas)
}

/// Text lines shown next to a hovered swatch.
pub fn hover_lines(record: &SwatchRecord) -> Vec<String> {
    let mut lines = vec![record.filename.clone()];
    for field in Field::ALL {
        let value = field.value(record);
        if value.is_empty() {
            continue;
        }
        lines.push(format!("{}: {}", field.title(), field.display_label(value)));
    }
    let c = record.color;
    lines.push(format!("H: {:.2}  S: {:.2}  B: {:.2}", c.h, c.s, c.b));
    lines
}

/// Hover lines for a mosaic tile, with the sampled colour and match score.
pub fn tile_hover_lines(tile: &Tile<'_>) -> Vec<String> {
    let mut lines = hover_lines(tile.swatch);
    let s = tile.sampled;
    lines.push(format!(
        "Sampled H: {:.2}  S: {:.2}  B: {:.2}  score: {:.3}",
        s.h, s.s, s.b, tile.score
    ));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use swatch_engine::{Catalogue, PixelBuffer, RawSwatchRow};

    fn record() -> SwatchRecord {
        Catalogue::load(vec![RawSwatchRow {
            filename: "madder_alum.png".into(),
            h: 8.4,
            s: 70.0,
            b: 75.0,
            dyestuff: "Madder".into(),
            ph: "Acidic".into(),
            mordant: "Alum".into(),
            time: "12h".into(),
            ..Default::default()
        }])
        .records()[0]
            .clone()
    }

    #[test]
    fn test_hover_lines() {
        assert_eq!(
            hover_lines(&record()),
            vec![
                "madder_alum.png",
                "Dyestuff: Madder",
                "pH: Acidic (~pH3)",
                "Mordant: Alum",
                "Time: 12h (~720m)",
                "H: 8.40  S: 70.00  B: 75.00",
            ]
        );
    }

    #[test]
    fn test_preview_falls_back_to_tile() {
        let images = SwatchImages {
            tile: PixelBuffer::solid(8, 4, [0, 0, 255]).unwrap(),
            preview: None,
        };
        let canvas = render_preview(&images, 16).unwrap();
        let px = canvas.pixel(8, 8).unwrap().demultiply();
        assert_eq!((px.red(), px.green(), px.blue()), (0, 0, 255));
    }

    #[test]
    fn test_preview_prefers_preview_image() {
        let images = SwatchImages {
            tile: PixelBuffer::solid(4, 4, [0, 0, 255]).unwrap(),
            preview: Some(PixelBuffer::solid(4, 4, [0, 255, 0]).unwrap()),
        };
        let canvas = render_preview(&images, PREVIEW_SIDE).unwrap();
        let px = canvas.pixel(80, 80).unwrap().demultiply();
        assert_eq!((px.red(), px.green(), px.blue()), (0, 255, 0));
    }
}
