//! Error types for catalog validation.

use std::fmt;

/// Error type for catalog validation.
///
/// Entry identity is the composite key `(brand, id)`: product ids are only
/// unique within a brand's own numbering, so two brands may legitimately
/// reuse the same id. A duplicate composite key, however, means the same
/// product was loaded twice and is rejected at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The same (brand, id) pair appeared more than once
    DuplicateEntry {
        /// Brand of the colliding entries
        brand: String,
        /// Per-brand product id of the colliding entries
        id: u32,
    },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::DuplicateEntry { brand, id } => {
                write!(f, "duplicate catalog entry: brand {brand:?} id {id}")
            }
        }
    }
}

impl std::error::Error for CatalogError {}
