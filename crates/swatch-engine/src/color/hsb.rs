//! HSB color type and RGB conversion.

/// A color in hue/saturation/brightness form.
///
/// - `h`: hue in degrees, `0.0..360.0`
/// - `s`: saturation as a percentage, `0.0..=100.0`
/// - `b`: brightness (value) as a percentage, `0.0..=100.0`
///
/// Swatch measurements arrive from upstream already in this form; sampled
/// image regions are converted into it with [`Hsb::from_rgb`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsb {
    /// Hue in degrees
    pub h: f64,
    /// Saturation percentage
    pub s: f64,
    /// Brightness percentage
    pub b: f64,
}

impl Hsb {
    /// Create an HSB triple from raw components.
    #[inline]
    pub fn new(h: f64, s: f64, b: f64) -> Self {
        Self { h, s, b }
    }

    /// Convert 8-bit RGB to HSB using the standard RGB to HSV formula.
    ///
    /// Achromatic colors (all channels equal) get hue 0. Black gets
    /// saturation 0.
    ///
    /// # Example
    /// ```
    /// use swatch_engine::Hsb;
    /// let red = Hsb::from_rgb(255, 0, 0);
    /// assert_eq!(red, Hsb::new(0.0, 100.0, 100.0));
    /// ```
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        let r = r as f64 / 255.0;
        let g = g as f64 / 255.0;
        let b = b as f64 / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let s = if max == 0.0 { 0.0 } else { delta / max };

        let h = if delta == 0.0 {
            0.0
        } else if max == r {
            (g - b) / delta + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / delta + 2.0
        } else {
            (r - g) / delta + 4.0
        };

        Self {
            h: h * 60.0,
            s: s * 100.0,
            b: max * 100.0,
        }
    }

    /// Whether all three components are finite numbers.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.h.is_finite() && self.s.is_finite() && self.b.is_finite()
    }
}
