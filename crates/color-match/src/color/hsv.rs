//! HSV color type
//!
//! HSV (hue, saturation, value) shares HSL's hue circle but measures
//! saturation against value rather than lightness. Like HSL it exists for
//! human-facing display; distance math never sees it.

use super::rgb::Rgb;

/// A color in HSV form.
///
/// Public-boundary convention matches [`Hsl`](super::Hsl): hue in degrees
/// `[0, 360)`, saturation/value as percentages `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    /// Hue in degrees (0.0..360.0)
    pub h: f64,
    /// Saturation as a percentage (0.0..=100.0)
    pub s: f64,
    /// Value as a percentage (0.0..=100.0)
    pub v: f64,
}

impl Hsv {
    /// Create a new Hsv color, normalizing the components.
    ///
    /// Hue wraps modulo 360 degrees; saturation and value clamp to
    /// `0..=100`.
    pub fn new(h: f64, s: f64, v: f64) -> Self {
        Self {
            h: h.rem_euclid(360.0),
            s: s.clamp(0.0, 100.0),
            v: v.clamp(0.0, 100.0),
        }
    }

    /// Convert to 8-bit sRGB.
    ///
    /// Inverse of `Hsv::from(rgb)` within +/-1 per channel.
    pub fn to_rgb(self) -> Rgb {
        let h = self.h.rem_euclid(360.0) / 60.0;
        let s = self.s / 100.0;
        let v = self.v / 100.0;

        let sector = h.floor();
        let f = h - sector;
        let p = v * (1.0 - s);
        let q = v * (1.0 - s * f);
        let t = v * (1.0 - s * (1.0 - f));

        let (r, g, b) = match sector as u32 % 6 {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        };

        Rgb::new(
            (r * 255.0).round() as u8,
            (g * 255.0).round() as u8,
            (b * 255.0).round() as u8,
        )
    }
}

impl From<Rgb> for Hsv {
    fn from(rgb: Rgb) -> Self {
        let r = rgb.r as f64 / 255.0;
        let g = rgb.g as f64 / 255.0;
        let b = rgb.b as f64 / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let v = max;

        if max == min {
            return Hsv {
                h: 0.0,
                s: 0.0,
                v: v * 100.0,
            };
        }

        let d = max - min;
        let s = d / max;

        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };

        Hsv {
            h: h / 6.0 * 360.0,
            s: s * 100.0,
            v: v * 100.0,
        }
    }
}
