//! PNG decoding to straight RGBA and PNG encoding of rendered pixmaps.

use std::io::Cursor;

use swatch_engine::PixelBuffer;
use tiny_skia::{ColorU8, Pixmap};

use crate::error::{ImageError, RenderError};

/// Decode PNG bytes into an RGBA8 buffer.
///
/// Palette, low bit depth and 16-bit images are normalized to 8 bits per
/// channel; grey and RGB images get an opaque alpha channel.
pub fn decode_png(filename: &str, bytes: &[u8]) -> Result<PixelBuffer, ImageError> {
    let decode_err = |reason: String| ImageError::Decode {
        filename: filename.to_string(),
        reason,
    };

    let mut decoder = png::Decoder::new(Cursor::new(bytes));
    decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);
    let mut reader = decoder
        .read_info()
        .map_err(|e| decode_err(e.to_string()))?;
    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e| decode_err(e.to_string()))?;
    let data = &buf[..info.buffer_size()];

    let rgba: Vec<u8> = match info.color_type {
        png::ColorType::Rgba => data.to_vec(),
        png::ColorType::Rgb => data
            .chunks_exact(3)
            .flat_map(|p| [p[0], p[1], p[2], 255])
            .collect(),
        png::ColorType::GrayscaleAlpha => data
            .chunks_exact(2)
            .flat_map(|p| [p[0], p[0], p[0], p[1]])
            .collect(),
        png::ColorType::Grayscale => data.iter().flat_map(|&g| [g, g, g, 255]).collect(),
        png::ColorType::Indexed => {
            return Err(decode_err("palette was not expanded".to_string()));
        }
    };

    PixelBuffer::new(info.width, info.height, rgba).map_err(|e| decode_err(e.to_string()))
}

/// Copy a straight-alpha buffer into a premultiplied pixmap.
pub fn pixmap_from_buffer(buffer: &PixelBuffer) -> Result<Pixmap, RenderError> {
    let mut pixmap =
        Pixmap::new(buffer.width(), buffer.height()).ok_or(RenderError::PixmapAllocation)?;
    for (dst, src) in pixmap
        .pixels_mut()
        .iter_mut()
        .zip(buffer.data().chunks_exact(4))
    {
        *dst = ColorU8::from_rgba(src[0], src[1], src[2], src[3]).premultiply();
    }
    Ok(pixmap)
}

/// Encode a pixmap as an 8-bit RGBA PNG.
pub fn encode_png(pixmap: &Pixmap) -> Result<Vec<u8>, RenderError> {
    let rgba: Vec<u8> = pixmap
        .pixels()
        .iter()
        .flat_map(|p| {
            let c = p.demultiply();
            [c.red(), c.green(), c.blue(), c.alpha()]
        })
        .collect();

    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, pixmap.width(), pixmap.height());
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(png::Compression::Fast);
        let mut writer = encoder
            .write_header()
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
        writer
            .write_image_data(&rgba)
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}
