//! 8-bit sRGB color type
//!
//! [`Rgb`] is the at-rest representation for every color the engine
//! touches: catalog entries, pigments, image pixels, and user input all
//! normalize to it before any math happens.

use std::fmt;
use std::str::FromStr;

use super::error::ParseColorError;

/// A color in 8-bit sRGB, the canonical at-rest representation.
///
/// Components are gamma-encoded sRGB channel values in `0..=255`, matching
/// what a `#RRGGBB` hex string stores. Convert to [`Lab`](super::Lab) for
/// distance math and to [`Hsl`](super::Hsl)/[`Hsv`](super::Hsv) for
/// hue-oriented display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
}

impl Rgb {
    /// Create a new Rgb color.
    ///
    /// # Example
    /// ```
    /// use color_match::Rgb;
    /// let red = Rgb::new(255, 0, 0);
    /// assert_eq!(red.r, 255);
    /// ```
    #[inline]
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create an Rgb color from a byte array [R, G, B].
    #[inline]
    pub fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2])
    }

    /// Convert to a byte array [R, G, B].
    #[inline]
    pub fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Format as an uppercase `#RRGGBB` hex string.
    ///
    /// Single-digit channel values are zero-padded, so the output is always
    /// exactly 7 characters.
    ///
    /// # Example
    /// ```
    /// use color_match::Rgb;
    /// assert_eq!(Rgb::new(255, 8, 0).to_hex(), "#FF0800");
    /// ```
    pub fn to_hex(self) -> String {
        format!("{self}")
    }
}

impl fmt::Display for Rgb {
    /// Formats as uppercase `#RRGGBB`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    /// Parse an sRGB color from a `#RRGGBB` hex string.
    ///
    /// Accepts exactly 6 hex digits after an optional leading `#`.
    /// Parsing is case-insensitive and trims surrounding whitespace.
    /// Shorthand 3-digit codes are rejected with
    /// [`ParseColorError::InvalidLength`]: the engine fails fast on
    /// malformed input instead of expanding or zero-filling it.
    ///
    /// # Examples
    ///
    /// ```
    /// use color_match::{ParseColorError, Rgb};
    ///
    /// let teal: Rgb = "#008080".parse().unwrap();
    /// assert_eq!(teal.g, 128);
    ///
    /// let no_hash: Rgb = "ff8000".parse().unwrap();
    /// assert_eq!(no_hash.r, 255);
    ///
    /// assert_eq!("#F00".parse::<Rgb>(), Err(ParseColorError::InvalidLength));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);

        if s.len() != 6 {
            return Err(ParseColorError::InvalidLength);
        }
        // All-ASCII-hex check up front: it rejects sign prefixes that
        // from_str_radix would accept, and guarantees the byte slicing
        // below lands on char boundaries.
        if !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ParseColorError::InvalidDigit);
        }

        let r = u8::from_str_radix(&s[0..2], 16).map_err(|_| ParseColorError::InvalidDigit)?;
        let g = u8::from_str_radix(&s[2..4], 16).map_err(|_| ParseColorError::InvalidDigit)?;
        let b = u8::from_str_radix(&s[4..6], 16).map_err(|_| ParseColorError::InvalidDigit)?;
        Ok(Self::new(r, g, b))
    }
}
