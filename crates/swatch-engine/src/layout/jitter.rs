//! Deterministic string-hash placement helpers.
//!
//! Grid layout separates records that share a cell by nudging each one by an
//! offset derived from its filename. The same filename and seed always give
//! the same offset, so hover targets stay put across redraws. Separation is
//! best-effort; two records can still overlap.

/// Polynomial rolling hash (`h = h * 31 + byte`, wrapping) starting from `seed`.
///
/// Not cryptographic.
#[inline]
pub fn rolling_hash(seed: u32, key: &str) -> u32 {
    key.bytes()
        .fold(seed, |h, b| h.wrapping_mul(31).wrapping_add(b as u32))
}

/// Offset `(dx, dy)` for `key` inside a cell whose smaller edge is `cell_min`.
///
/// Angle is `hash mod 360` degrees. Magnitude is `ratio * cell_min` scaled by
/// a second fraction in `[0, 1)` taken from the hash bits above the angle.
pub fn jitter_offset(seed: u32, key: &str, cell_min: f64, ratio: f64) -> (f64, f64) {
    let hash = rolling_hash(seed, key);
    let angle = ((hash % 360) as f64).to_radians();
    let fraction = ((hash / 360) % 1024) as f64 / 1024.0;
    let magnitude = ratio * cell_min * fraction;
    (magnitude * angle.cos(), magnitude * angle.sin())
}

/// Rendering hint coloring entries by a categorical value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroupTag {
    /// Hue in degrees, `hash(value) mod 360`
    pub hue: f64,
    /// HSL saturation percentage
    pub saturation: f64,
    /// HSL lightness percentage
    pub lightness: f64,
}

const GROUP_SATURATION: f64 = 65.0;
const GROUP_LIGHTNESS: f64 = 55.0;

impl GroupTag {
    /// Tag for a categorical value.
    pub fn for_value(value: &str) -> Self {
        Self {
            hue: (rolling_hash(0, value) % 360) as f64,
            saturation: GROUP_SATURATION,
            lightness: GROUP_LIGHTNESS,
        }
    }

    /// The tag color as 8-bit RGB (HSL to RGB).
    pub fn to_rgb(self) -> [u8; 3] {
        let s = self.saturation / 100.0;
        let l = self.lightness / 100.0;
        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let h = (self.hue.rem_euclid(360.0)) / 60.0;
        let x = c * (1.0 - (h % 2.0 - 1.0).abs());
        let (r, g, b) = match h as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };
        let m = l - c / 2.0;
        let to_u8 = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
        [to_u8(r), to_u8(g), to_u8(b)]
    }

    /// CSS-style `#rrggbb` string.
    pub fn to_hex(self) -> String {
        let [r, g, b] = self.to_rgb();
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }
}
