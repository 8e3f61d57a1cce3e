//! Catalog struct with precomputed Lab values and ranked matching.

use std::collections::HashSet;

use super::error::CatalogError;
use crate::color::{accuracy_from_distance, Lab, Rgb};

/// An immutable pencil/paint reference record.
///
/// Identity is the composite key `(brand, id)` -- ids are only unique
/// within one brand's product line. Entries never change after the catalog
/// is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Per-brand product id (NOT globally unique)
    pub id: u32,
    /// Brand name, e.g. "Prismacolor"
    pub brand: String,
    /// Human-readable color name, e.g. "True Blue"
    pub name: String,
    /// Product code printed on the pencil/tube, e.g. "PC903"
    pub code: String,
    /// Advertised color of the product
    pub color: Rgb,
}

impl CatalogEntry {
    /// Create a new catalog entry.
    pub fn new(
        id: u32,
        brand: impl Into<String>,
        name: impl Into<String>,
        code: impl Into<String>,
        color: Rgb,
    ) -> Self {
        Self {
            id,
            brand: brand.into(),
            name: name.into(),
            code: code.into(),
            color,
        }
    }

    /// The entry's composite identity.
    #[inline]
    pub fn key(&self) -> (&str, u32) {
        (self.brand.as_str(), self.id)
    }
}

/// A ranked match against one catalog entry.
///
/// Ephemeral: computed per query, never persisted. `distance` is the raw
/// CIE94 value, `accuracy` the clamped 0..=100 percentage derived from it.
#[derive(Debug, Clone)]
pub struct MatchResult<'a> {
    /// The matched catalog entry
    pub entry: &'a CatalogEntry,
    /// Raw CIE94 distance between the query color and the entry color
    pub distance: f64,
    /// `clamp(100 - distance/4, 0, 100)`
    pub accuracy: f64,
}

/// An immutable catalog of reference colors with precomputed Lab values.
///
/// Catalogs are injected data: callers build them from whatever source
/// they like (built-in tables, user files) and the engine only reads them.
/// After construction nothing is ever mutated, so a `Catalog` can be
/// shared freely across threads behind a plain reference.
///
/// An empty catalog is valid -- queries against it return empty results
/// rather than erroring, since "no catalog loaded yet" is a normal state
/// for the surrounding application.
///
/// # Example
///
/// ```
/// use color_match::{Catalog, CatalogEntry};
///
/// let catalog = Catalog::new(vec![
///     CatalogEntry::new(903, "Prismacolor", "True Blue", "PC903", "#2D6BB4".parse().unwrap()),
/// ]).unwrap();
///
/// let results = catalog.find_closest("#2D6BB4".parse().unwrap(), 8);
/// assert_eq!(results[0].distance, 0.0);
/// assert_eq!(results[0].accuracy, 100.0);
/// ```
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
    // Lab value per entry, same order. Precomputed once at construction
    // so every query is a scan of cheap CIE94 evaluations.
    labs: Vec<Lab>,
}

impl Catalog {
    /// Default number of results for a single-color lookup.
    pub const DEFAULT_MATCH_LIMIT: usize = 8;
    /// Matches taken per color when aggregating an extracted palette.
    pub const PALETTE_MATCHES_PER_COLOR: usize = 2;
    /// Cap on the aggregated palette match list.
    pub const PALETTE_MATCH_CAP: usize = 12;

    /// Build a catalog from entries, validating composite-key uniqueness.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateEntry`] if the same `(brand, id)`
    /// pair appears twice. Ids MAY repeat across brands; that is how the
    /// source product lines are numbered.
    pub fn new(entries: Vec<CatalogEntry>) -> Result<Self, CatalogError> {
        let mut seen: HashSet<(String, u32)> = HashSet::with_capacity(entries.len());
        for entry in &entries {
            if !seen.insert((entry.brand.clone(), entry.id)) {
                return Err(CatalogError::DuplicateEntry {
                    brand: entry.brand.clone(),
                    id: entry.id,
                });
            }
        }

        let labs = entries.iter().map(|e| Lab::from(e.color)).collect();
        Ok(Self { entries, labs })
    }

    /// Returns the number of entries in the catalog.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the catalog has no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries, in input order.
    #[inline]
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Rank all entries by CIE94 distance to `target` and return the
    /// closest `limit`.
    ///
    /// The sort is ascending by distance and stable: entries at equal
    /// distance keep their catalog input order, so results are
    /// deterministic for a given catalog.
    ///
    /// An empty catalog (or `limit` of 0) yields an empty vec.
    pub fn find_closest(&self, target: Rgb, limit: usize) -> Vec<MatchResult<'_>> {
        let target_lab = Lab::from(target);

        let mut results: Vec<MatchResult<'_>> = self
            .entries
            .iter()
            .zip(&self.labs)
            .map(|(entry, lab)| {
                let distance = target_lab.distance(*lab);
                MatchResult {
                    entry,
                    distance,
                    accuracy: accuracy_from_distance(distance),
                }
            })
            .collect();

        // Stable sort: ties keep catalog order. The metric never produces
        // NaN, so total_cmp is a plain numeric order here.
        results.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        results.truncate(limit);
        results
    }

    /// Aggregate matches for a multi-color palette (e.g. the dominant
    /// colors extracted from an image region).
    ///
    /// Takes the top [`PALETTE_MATCHES_PER_COLOR`](Self::PALETTE_MATCHES_PER_COLOR)
    /// matches for each target in order, skips entries already claimed by
    /// an earlier target (composite-key dedup), and stops at
    /// [`PALETTE_MATCH_CAP`](Self::PALETTE_MATCH_CAP) total.
    pub fn find_palette_matches(&self, targets: &[Rgb]) -> Vec<MatchResult<'_>> {
        let mut seen: HashSet<(&str, u32)> = HashSet::new();
        let mut results: Vec<MatchResult<'_>> = Vec::new();

        'targets: for &target in targets {
            for m in self.find_closest(target, Self::PALETTE_MATCHES_PER_COLOR) {
                if seen.insert(m.entry.key()) {
                    results.push(m);
                    if results.len() >= Self::PALETTE_MATCH_CAP {
                        break 'targets;
                    }
                }
            }
        }

        results
    }
}
