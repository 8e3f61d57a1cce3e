//! Color types and conversion utilities
//!
//! This module provides the canonical color representations used by the
//! engine and the conversions between them.
//!
//! # Representations
//!
//! - [`Rgb`]: 8-bit sRGB, the at-rest representation. Parses from and
//!   formats to `#RRGGBB` hex.
//! - [`Hsl`] / [`Hsv`]: hue-oriented views of the same sRGB color. The
//!   public boundary uses ONE fixed convention: hue in degrees `[0, 360)`,
//!   saturation/lightness/value as percentages `[0, 100]`. All internal
//!   math runs on normalized fractions.
//! - [`Lab`]: CIE-Lab (D65), the foundation for perceptual distance.
//!
//! Hex-composed conversions (hex to HSL, HSV to hex, ...) are the
//! composition of [`Rgb`]'s `FromStr`/`to_hex` with the `From` impls; there
//! is deliberately no second copy of any conversion in the crate.
//!
//! # Example
//!
//! ```
//! use color_match::{Hsl, Lab, Rgb};
//!
//! let rgb: Rgb = "#FF8000".parse().unwrap();
//! let hsl = Hsl::from(rgb);
//! assert!((hsl.h - 30.1).abs() < 0.5);
//!
//! let lab = Lab::from(rgb);
//! assert!(lab.l > 0.0 && lab.l < 100.0);
//! ```

mod error;
mod hsl;
mod hsv;
mod lab;
mod lut;
mod rgb;

pub use error::ParseColorError;
pub use hsl::Hsl;
pub use hsv::Hsv;
pub use lab::{accuracy_from_distance, color_distance, Lab};
pub use rgb::Rgb;

pub(crate) use lab::rgb_to_xyz;
