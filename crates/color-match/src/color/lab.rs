//! CIE-Lab color space and the CIE94 distance metric
//!
//! Lab is the numerical foundation of the engine: every ranking decision
//! (catalog matching, mix scoring) is a CIE94 distance between two Lab
//! colors. Nothing else in the crate measures color difference.
//!
//! # References
//!
//! CIE 116-1995, "Industrial colour-difference evaluation" (CIE94).
//! sRGB matrix and D65 white point per IEC 61966-2-1.

use super::lut::srgb_to_linear;
use super::rgb::Rgb;

/// D65 reference white, nominal 2-degree observer.
const XN: f64 = 95.047;
const YN: f64 = 100.0;
const ZN: f64 = 108.883;

/// CIE Lab nonlinearity threshold (216/24389, rounded as commonly published).
const EPSILON: f64 = 0.008856;
/// CIE Lab linear-branch slope (24389/27, rounded as commonly published).
const KAPPA: f64 = 903.3;

/// A color in CIE-Lab space (D65 reference white).
///
/// # Components
///
/// - `l`: Lightness, 0.0 (black) to 100.0 (white)
/// - `a`: Green-red axis, roughly -128..127 for 8-bit sRGB input
/// - `b`: Blue-yellow axis, roughly -128..127 for 8-bit sRGB input
///
/// Values are not clamped; they are whatever the conversion from sRGB
/// produces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lab {
    /// Lightness: 0.0 (black) to 100.0 (white)
    pub l: f64,
    /// Green-red axis
    pub a: f64,
    /// Blue-yellow axis
    pub b: f64,
}

impl Lab {
    /// Create a new Lab color.
    #[inline]
    pub fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// CIE94 color difference (graphic-arts weights, kL = kC = kH = 1).
    ///
    /// ```text
    /// dL = L1 - L2
    /// C1 = sqrt(a1^2 + b1^2); C2 = sqrt(a2^2 + b2^2); dC = C1 - C2
    /// dH = sqrt(max(0, da^2 + db^2 - dC^2))
    /// Cs = sqrt(C1 * C2)
    /// SL = 1; SC = 1 + 0.045*Cs; SH = 1 + 0.015*Cs
    /// d  = sqrt((dL/SL)^2 + (dC/SC)^2 + (dH/SH)^2)
    /// ```
    ///
    /// The S weights use the geometric mean of the two chromas rather than
    /// the textbook reference-sample C1, making the metric symmetric:
    /// `a.distance(b) == b.distance(a)` exactly, with no "which argument
    /// is the reference" footgun for callers.
    ///
    /// The output is unbounded but empirically lands in 0..~100 for 8-bit
    /// sRGB colors. It is never negative and never NaN: the dH radicand is
    /// clamped to zero before the square root, because floating-point
    /// cancellation can leave it slightly negative for near-identical
    /// colors and NaN would silently corrupt every downstream sort.
    ///
    /// # Example
    ///
    /// ```
    /// use color_match::{Lab, Rgb};
    ///
    /// let a = Lab::from(Rgb::new(255, 0, 0));
    /// let b = Lab::from(Rgb::new(254, 0, 0));
    /// let d = a.distance(b);
    /// assert!(d >= 0.0 && d < 1.0);
    /// ```
    pub fn distance(self, other: Lab) -> f64 {
        let dl = self.l - other.l;
        let da = self.a - other.a;
        let db = self.b - other.b;

        let c1 = (self.a * self.a + self.b * self.b).sqrt();
        let c2 = (other.a * other.a + other.b * other.b).sqrt();
        let dc = c1 - c2;

        // Clamp the radicand: da^2 + db^2 - dc^2 can dip below zero by a
        // few ulps when the colors are nearly identical.
        let dh = (da * da + db * db - dc * dc).max(0.0).sqrt();

        // Symmetric S weights: geometric mean of the chromas
        let cs = (c1 * c2).sqrt();
        let sc = 1.0 + 0.045 * cs;
        let sh = 1.0 + 0.015 * cs;

        let term_l = dl; // SL = 1
        let term_c = dc / sc;
        let term_h = dh / sh;

        (term_l * term_l + term_c * term_c + term_h * term_h).sqrt()
    }
}

impl From<Rgb> for Lab {
    /// Convert 8-bit sRGB to CIE-Lab via linear RGB and XYZ.
    fn from(rgb: Rgb) -> Self {
        let (x, y, z) = rgb_to_xyz(rgb);

        let fx = lab_f(x / XN);
        let fy = lab_f(y / YN);
        let fz = lab_f(z / ZN);

        Lab {
            l: 116.0 * fy - 16.0,
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
        }
    }
}

/// sRGB (8-bit) to CIE XYZ, D65, scaled so Y of white is 100.
///
/// Each output component is a full row of the sRGB matrix applied to the
/// ORIGINAL linear triple. The three inputs are bound once, up front, so no
/// output can read a partially-updated value; collapsing them into one
/// mutable variable reused across rows silently corrupts the second and
/// third components.
pub(crate) fn rgb_to_xyz(rgb: Rgb) -> (f64, f64, f64) {
    let r = srgb_to_linear(rgb.r as f64 / 255.0) * 100.0;
    let g = srgb_to_linear(rgb.g as f64 / 255.0) * 100.0;
    let b = srgb_to_linear(rgb.b as f64 / 255.0) * 100.0;

    let x = r * 0.4124564 + g * 0.3575761 + b * 0.1804375;
    let y = r * 0.2126729 + g * 0.7151522 + b * 0.0721750;
    let z = r * 0.0193339 + g * 0.1191920 + b * 0.9503041;

    (x, y, z)
}

/// CIE Lab nonlinearity: cube root above the threshold, linear below.
#[inline]
fn lab_f(t: f64) -> f64 {
    if t > EPSILON {
        t.cbrt()
    } else {
        (KAPPA * t + 16.0) / 116.0
    }
}

/// CIE94 distance between two sRGB colors.
///
/// Convenience wrapper: converts both through [`Lab`] and calls
/// [`Lab::distance`]. This is the sole distance metric in the engine;
/// there is intentionally no Euclidean-RGB variant.
///
/// # Example
///
/// ```
/// use color_match::{color_distance, Rgb};
///
/// let d = color_distance(Rgb::new(255, 0, 0), Rgb::new(255, 0, 0));
/// assert_eq!(d, 0.0);
/// ```
pub fn color_distance(a: Rgb, b: Rgb) -> f64 {
    Lab::from(a).distance(Lab::from(b))
}

/// Map a CIE94 distance onto the human-facing 0..=100 accuracy score.
///
/// `accuracy = clamp(100 - distance/4, 0, 100)`. The clamp matters: CIE94
/// values are unbounded above, and without it a very distant color would
/// report a negative accuracy.
///
/// # Example
///
/// ```
/// use color_match::accuracy_from_distance;
///
/// assert_eq!(accuracy_from_distance(0.0), 100.0);
/// assert_eq!(accuracy_from_distance(1000.0), 0.0);
/// ```
pub fn accuracy_from_distance(distance: f64) -> f64 {
    (100.0 - distance / 4.0).clamp(0.0, 100.0)
}
