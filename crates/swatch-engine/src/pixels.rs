//! Decoded RGBA pixel buffers, region averaging and the square-crop rule.

use crate::color::Hsb;
use crate::error::EngineError;

/// A decoded image as straight (non-premultiplied) RGBA8 samples.
///
/// Row-major, four bytes per pixel. Construction validates that the buffer
/// length matches the declared dimensions, so pixel access never goes out
/// of bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Wrap RGBA8 data.
    ///
    /// # Errors
    ///
    /// - [`EngineError::InvalidDimensions`] if either dimension is zero
    /// - [`EngineError::SampleUnreadable`] if `data.len() != width * height * 4`
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Result<Self, EngineError> {
        if width == 0 || height == 0 {
            return Err(EngineError::InvalidDimensions { width, height });
        }
        let expected = width as usize * height as usize * 4;
        if data.len() != expected {
            return Err(EngineError::SampleUnreadable {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// A buffer filled with one opaque color.
    pub fn solid(width: u32, height: u32, rgb: [u8; 3]) -> Result<Self, EngineError> {
        let data = std::iter::repeat([rgb[0], rgb[1], rgb[2], 255])
            .take(width as usize * height as usize)
            .flatten()
            .collect();
        Self::new(width, height, data)
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA bytes.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// The RGBA sample at `(x, y)`, or `None` outside the image.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        Some([
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ])
    }

    /// Mean color of a rectangular region, as HSB.
    ///
    /// Only pixels inside the image with non-zero alpha contribute; the
    /// region is clipped, not wrapped. The mean of each channel is rounded
    /// to the nearest integer before conversion. A region with no eligible
    /// pixels yields `(0, 0, 0)`.
    pub fn average_colour(&self, region: Region) -> Hsb {
        let x0 = region.x.min(self.width);
        let y0 = region.y.min(self.height);
        let x1 = region.x.saturating_add(region.width).min(self.width);
        let y1 = region.y.saturating_add(region.height).min(self.height);

        let (mut sum_r, mut sum_g, mut sum_b, mut count) = (0u64, 0u64, 0u64, 0u64);
        let stride = self.width as usize * 4;
        for y in y0..y1 {
            let row = &self.data[y as usize * stride..(y as usize + 1) * stride];
            for px in row[x0 as usize * 4..x1 as usize * 4].chunks_exact(4) {
                if px[3] > 0 {
                    sum_r += px[0] as u64;
                    sum_g += px[1] as u64;
                    sum_b += px[2] as u64;
                    count += 1;
                }
            }
        }

        if count == 0 {
            return Hsb::default();
        }

        let mean = |sum: u64| (sum as f64 / count as f64).round().clamp(0.0, 255.0) as u8;
        Hsb::from_rgb(mean(sum_r), mean(sum_g), mean(sum_b))
    }
}

/// An axis-aligned pixel rectangle. May extend past the image edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Region {
    #[inline]
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Source rectangle of the largest centered square inside an image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SquareCrop {
    /// Left edge of the crop in source pixels
    pub x: f64,
    /// Top edge of the crop in source pixels
    pub y: f64,
    /// Edge length of the crop (the image's shorter edge)
    pub side: f64,
}

/// Crop rule used for every swatch thumbnail: the largest centered square,
/// offset by `(long_edge - short_edge) / 2` along the longer axis.
///
/// # Example
/// ```
/// use swatch_engine::square_crop;
/// let crop = square_crop(300, 200);
/// assert_eq!((crop.x, crop.y, crop.side), (50.0, 0.0, 200.0));
/// ```
pub fn square_crop(width: u32, height: u32) -> SquareCrop {
    let side = width.min(height) as f64;
    SquareCrop {
        x: (width as f64 - side) / 2.0,
        y: (height as f64 - side) / 2.0,
        side,
    }
}
