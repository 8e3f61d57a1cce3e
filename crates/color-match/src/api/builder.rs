//! ColorMatcher builder -- the primary ergonomic entry point for the crate.
//!
//! [`ColorMatcher`] owns a validated [`Catalog`] and answers ranked-match
//! queries for boundary inputs. [`ColorInput`] is the one place duck-typed
//! caller data (a bare hex string, or a named swatch carrying a hex)
//! becomes a typed value; everything behind it works on [`Rgb`].

use std::str::FromStr;

use super::error::MatchError;
use crate::catalog::{Catalog, CatalogEntry, MatchResult};
use crate::color::{ParseColorError, Rgb};

/// A color supplied by a caller at the API boundary.
///
/// The surrounding application deals in two shapes: plain hex strings
/// (picked from an image) and named swatches (saved palette entries that
/// carry a label alongside their hex). Both normalize to [`Rgb`] via
/// [`rgb()`](Self::rgb) on entry; no engine code branches on the shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorInput {
    /// A bare hex color string, e.g. "#FF8000"
    Hex(String),
    /// A named swatch: a label plus its hex color
    Named {
        /// Display label, e.g. "sky highlight"
        name: String,
        /// Hex color string
        hex: String,
    },
}

impl ColorInput {
    /// Create a bare hex input.
    pub fn hex(hex: impl Into<String>) -> Self {
        ColorInput::Hex(hex.into())
    }

    /// Create a named swatch input.
    pub fn named(name: impl Into<String>, hex: impl Into<String>) -> Self {
        ColorInput::Named {
            name: name.into(),
            hex: hex.into(),
        }
    }

    /// The label, if this input carries one.
    pub fn name(&self) -> Option<&str> {
        match self {
            ColorInput::Hex(_) => None,
            ColorInput::Named { name, .. } => Some(name),
        }
    }

    /// Normalize to [`Rgb`], failing fast on malformed hex.
    pub fn rgb(&self) -> Result<Rgb, ParseColorError> {
        let hex = match self {
            ColorInput::Hex(hex) => hex,
            ColorInput::Named { hex, .. } => hex,
        };
        Rgb::from_str(hex)
    }
}

impl From<&str> for ColorInput {
    fn from(hex: &str) -> Self {
        ColorInput::Hex(hex.to_string())
    }
}

/// High-level catalog matching front end.
///
/// # Design
///
/// - Constructor requires a validated [`Catalog`] (no invalid states)
/// - Configuration methods consume and return `self` (standard builder
///   pattern)
/// - Query methods take `&self`, so one matcher serves any number of
///   lookups, concurrently if the caller likes -- nothing here mutates
///
/// # Example
///
/// ```
/// use color_match::{CatalogEntry, ColorInput, ColorMatcher};
///
/// let matcher = ColorMatcher::from_entries(vec![
///     CatalogEntry::new(903, "Prismacolor", "True Blue", "PC903", "#2D6BB4".parse().unwrap()),
///     CatalogEntry::new(924, "Prismacolor", "Crimson Red", "PC924", "#B8283C".parse().unwrap()),
/// ])
/// .unwrap()
/// .match_limit(4);
///
/// let results = matcher.matches(&ColorInput::hex("#B0303F")).unwrap();
/// assert_eq!(results[0].entry.code, "PC924");
/// ```
#[derive(Debug)]
pub struct ColorMatcher {
    catalog: Catalog,
    match_limit: usize,
}

impl ColorMatcher {
    /// Create a matcher over an already-validated catalog.
    ///
    /// The default single-color match limit is
    /// [`Catalog::DEFAULT_MATCH_LIMIT`].
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            match_limit: Catalog::DEFAULT_MATCH_LIMIT,
        }
    }

    /// Build a matcher directly from entries, validating them.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::Catalog`] if the entries contain a duplicate
    /// `(brand, id)` key.
    pub fn from_entries(entries: Vec<CatalogEntry>) -> Result<Self, MatchError> {
        Ok(Self::new(Catalog::new(entries)?))
    }

    /// Set how many results a single-color lookup returns.
    #[inline]
    pub fn match_limit(mut self, limit: usize) -> Self {
        self.match_limit = limit;
        self
    }

    /// The underlying catalog.
    #[inline]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Ranked matches for one color.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::ParseColor`] if the input's hex is malformed.
    pub fn matches(&self, input: &ColorInput) -> Result<Vec<MatchResult<'_>>, MatchError> {
        let target = input.rgb()?;
        Ok(self.catalog.find_closest(target, self.match_limit))
    }

    /// Aggregated matches for a multi-color palette.
    ///
    /// All inputs are parsed before any matching happens, so one malformed
    /// hex fails the whole call instead of silently dropping a color.
    pub fn palette_matches(
        &self,
        inputs: &[ColorInput],
    ) -> Result<Vec<MatchResult<'_>>, MatchError> {
        let targets: Vec<Rgb> = inputs
            .iter()
            .map(|input| input.rgb())
            .collect::<Result<_, _>>()?;
        Ok(self.catalog.find_palette_matches(&targets))
    }
}
