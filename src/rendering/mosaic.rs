use std::collections::HashMap;

use swatch_engine::Mosaic;
use tiny_skia::Pixmap;

use super::canvas::{draw_square_crop, new_canvas};
use super::codec::pixmap_from_buffer;
use crate::error::RenderError;
use crate::services::SwatchLibrary;

/// Paint a mosaic at its sample's size: each tile gets its swatch's
/// centered square crop scaled to the tile edge. Edge tiles overflow the
/// canvas and are clipped.
pub fn render_mosaic(
    mosaic: &Mosaic<'_>,
    library: &SwatchLibrary,
) -> Result<Pixmap, RenderError> {
    if mosaic.is_empty() {
        return Err(RenderError::Empty("mosaic has no tiles"));
    }
    let (width, height) = mosaic.sample_size();
    let mut canvas = new_canvas(width, height)?;
    let mut sprites: HashMap<&str, Pixmap> = HashMap::new();

    for tile in mosaic.tiles() {
        let name = tile.swatch.filename.as_str();
        if !sprites.contains_key(name) {
            let Some(images) = library.images(name) else {
                tracing::warn!(filename = name, "No tile image for matched swatch");
                continue;
            };
            sprites.insert(name, pixmap_from_buffer(&images.tile)?);
        }
        let Some(sprite) = sprites.get(name) else {
            continue;
        };
        let (x, y, side, _) = mosaic.paint_rect(tile);
        draw_square_crop(&mut canvas, sprite, x as f32, y as f32, side as f32, 1.0);
    }

    tracing::debug!(
        width,
        height,
        distinct_swatches = sprites.len(),
        "Rendered mosaic"
    );
    Ok(canvas)
}
