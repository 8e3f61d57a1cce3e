//! HSL color type
//!
//! HSL (hue, saturation, lightness) is a hue-oriented view of an sRGB
//! color, used for human-facing display and adjustment. It plays no role
//! in distance math.

use super::rgb::Rgb;

/// A color in HSL form.
///
/// Public-boundary convention: hue in degrees `[0, 360)`,
/// saturation/lightness as percentages `[0, 100]`. Constructors normalize
/// out-of-range input (hue wraps modulo 360, percentages clamp); the
/// conversion math itself runs on normalized fractions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    /// Hue in degrees (0.0..360.0)
    pub h: f64,
    /// Saturation as a percentage (0.0..=100.0)
    pub s: f64,
    /// Lightness as a percentage (0.0..=100.0)
    pub l: f64,
}

impl Hsl {
    /// Create a new Hsl color, normalizing the components.
    ///
    /// Hue wraps modulo 360 degrees; saturation and lightness clamp to
    /// `0..=100`.
    ///
    /// # Example
    /// ```
    /// use color_match::Hsl;
    /// let c = Hsl::new(420.0, 150.0, 50.0);
    /// assert_eq!(c.h, 60.0);
    /// assert_eq!(c.s, 100.0);
    /// ```
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self {
            h: h.rem_euclid(360.0),
            s: s.clamp(0.0, 100.0),
            l: l.clamp(0.0, 100.0),
        }
    }

    /// Convert to 8-bit sRGB.
    ///
    /// Inverse of `Hsl::from(rgb)` within +/-1 per channel (both directions
    /// round to 8 bits).
    pub fn to_rgb(self) -> Rgb {
        let h = self.h.rem_euclid(360.0) / 360.0;
        let s = self.s / 100.0;
        let l = self.l / 100.0;

        if s == 0.0 {
            let v = (l * 255.0).round() as u8;
            return Rgb::new(v, v, v);
        }

        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;

        let r = hue_to_channel(p, q, h + 1.0 / 3.0);
        let g = hue_to_channel(p, q, h);
        let b = hue_to_channel(p, q, h - 1.0 / 3.0);

        Rgb::new(
            (r * 255.0).round() as u8,
            (g * 255.0).round() as u8,
            (b * 255.0).round() as u8,
        )
    }
}

impl From<Rgb> for Hsl {
    fn from(rgb: Rgb) -> Self {
        let r = rgb.r as f64 / 255.0;
        let g = rgb.g as f64 / 255.0;
        let b = rgb.b as f64 / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if max == min {
            // Achromatic: hue is undefined, report 0
            return Hsl {
                h: 0.0,
                s: 0.0,
                l: l * 100.0,
            };
        }

        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };

        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };

        Hsl {
            h: h / 6.0 * 360.0,
            s: s * 100.0,
            l: l * 100.0,
        }
    }
}

/// Map one hue segment back to a channel fraction (standard HSL inverse).
fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_values() {
        // Pure red: h=0, s=100, l=50
        let red = Hsl::from(Rgb::new(255, 0, 0));
        assert!(red.h.abs() < 1e-9);
        assert!((red.s - 100.0).abs() < 1e-9);
        assert!((red.l - 50.0).abs() < 1e-9);

        // Pure green: h=120
        let green = Hsl::from(Rgb::new(0, 255, 0));
        assert!((green.h - 120.0).abs() < 1e-9);

        // Pure blue: h=240
        let blue = Hsl::from(Rgb::new(0, 0, 255));
        assert!((blue.h - 240.0).abs() < 1e-9);

        // White: l=100, s=0
        let white = Hsl::from(Rgb::new(255, 255, 255));
        assert!((white.l - 100.0).abs() < 1e-9);
        assert!(white.s.abs() < 1e-9);
    }

    #[test]
    fn test_achromatic_hue_is_zero() {
        for v in [0u8, 64, 128, 200, 255] {
            let hsl = Hsl::from(Rgb::new(v, v, v));
            assert_eq!(hsl.h, 0.0);
            assert_eq!(hsl.s, 0.0);
        }
    }

    #[test]
    fn test_hue_wraps() {
        assert_eq!(Hsl::new(-60.0, 50.0, 50.0).h, 300.0);
        assert_eq!(Hsl::new(720.0, 50.0, 50.0).h, 0.0);
    }

    /// Round-trip RGB -> HSL -> RGB stays within +/-1 per channel across a
    /// coarse sweep of the cube.
    #[test]
    fn test_round_trip_within_one() {
        for r in (0..=255).step_by(17) {
            for g in (0..=255).step_by(51) {
                for b in (0..=255).step_by(51) {
                    let original = Rgb::new(r as u8, g as u8, b as u8);
                    let back = Hsl::from(original).to_rgb();
                    assert!(
                        (back.r as i32 - original.r as i32).abs() <= 1
                            && (back.g as i32 - original.g as i32).abs() <= 1
                            && (back.b as i32 - original.b as i32).abs() <= 1,
                        "round trip drifted: {original:?} -> {back:?}"
                    );
                }
            }
        }
    }
}
