//! Unified error type for the color-match public API.
//!
//! [`MatchError`] wraps the crate's error types into a single enum for
//! convenient `?` propagation in application code.

use std::fmt;

use crate::catalog::CatalogError;
use crate::color::ParseColorError;

/// Unified error type for the color-match public API.
///
/// # Example
///
/// ```
/// use color_match::{ColorMatcher, MatchError};
///
/// fn build() -> Result<ColorMatcher, MatchError> {
///     ColorMatcher::from_entries(Vec::new())
/// }
/// ```
#[derive(Debug)]
pub enum MatchError {
    /// Color parsing error (malformed hex string)
    ParseColor(ParseColorError),
    /// Catalog validation error (duplicate composite key)
    Catalog(CatalogError),
}

impl fmt::Display for MatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchError::ParseColor(err) => write!(f, "color parse error: {}", err),
            MatchError::Catalog(err) => write!(f, "catalog error: {}", err),
        }
    }
}

impl std::error::Error for MatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MatchError::ParseColor(err) => Some(err),
            MatchError::Catalog(err) => Some(err),
        }
    }
}

impl From<ParseColorError> for MatchError {
    fn from(err: ParseColorError) -> Self {
        MatchError::ParseColor(err)
    }
}

impl From<CatalogError> for MatchError {
    fn from(err: CatalogError) -> Self {
        MatchError::Catalog(err)
    }
}
