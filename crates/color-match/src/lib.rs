#![allow(clippy::excessive_precision, clippy::module_inception)]

//! color-match: perceptual color matching and mixing for art reference
//!
//! This library converts colors between common representations, measures
//! perceptual color difference, ranks pencil/paint catalog entries by
//! closeness to a target color, and suggests multi-pigment blends that
//! approximate a target.
//!
//! # Quick Start
//!
//! The [`ColorMatcher`] builder is the primary entry point:
//!
//! ```
//! use color_match::{Catalog, CatalogEntry, ColorInput, ColorMatcher};
//!
//! let entries = vec![
//!     CatalogEntry::new(903, "Prismacolor", "True Blue", "PC903", "#2D6BB4".parse().unwrap()),
//!     CatalogEntry::new(924, "Prismacolor", "Crimson Red", "PC924", "#B8283C".parse().unwrap()),
//! ];
//! let matcher = ColorMatcher::from_entries(entries).unwrap();
//!
//! let results = matcher.matches(&ColorInput::hex("#2D6BB4")).unwrap();
//! assert_eq!(results[0].entry.code, "PC903");
//! assert_eq!(results[0].accuracy, 100.0);
//! ```
//!
//! # Mixing
//!
//! [`find_mixes`] searches single pigments, weighted pairs, and balanced
//! triples for blends close to a target:
//!
//! ```
//! use color_match::{find_mixes, Pigment};
//!
//! let pigments = vec![
//!     Pigment::primary("Titanium White", "#FFFFFF".parse().unwrap()),
//!     Pigment::primary("Ivory Black", "#000000".parse().unwrap()),
//! ];
//! let mixes = find_mixes("#808080".parse().unwrap(), &pigments);
//! assert!(!mixes.is_empty());
//! ```
//!
//! # Color Science
//!
//! This section explains the rationale behind the color space and distance
//! metric choices. Understanding these decisions is essential for
//! maintaining correctness -- subtle changes (e.g., ranking matches by
//! Euclidean distance in RGB instead of CIE94 in Lab) produce visibly
//! wrong suggestions for exactly the colors artists care about most.
//!
//! ## Three Representations, Three Purposes
//!
//! | Representation | Key Property | Used For |
//! |----------------|--------------|----------|
//! | **sRGB** (`#RRGGBB` / [`Rgb`]) | Standard encoding (IEC 61966-2-1) | Input/output: hex strings, catalog data, image pixels |
//! | **HSL / HSV** ([`Hsl`], [`Hsv`]) | Hue-oriented axes | Human-facing adjustment and display |
//! | **CIE-Lab** ([`Lab`]) | Perceptually uniform distances | All distance and ranking math |
//!
//! sRGB is a gamma-corrected encoding designed for displays; equal numeric
//! steps are NOT equally visible, so distance in sRGB over-weights
//! differences between saturated colors and under-weights differences
//! between dark ones. CIE-Lab (D65 reference white) is approximately
//! perceptually uniform, which is why every ranking decision in this crate
//! goes through [`Lab`].
//!
//! ## Distance Metric: CIE94
//!
//! Catalog matching and mix scoring both use the CIE94 color difference
//! with graphic-arts weights (kL = kC = kH = 1):
//!
//! ```text
//! dL = L1 - L2
//! C1 = sqrt(a1^2 + b1^2); C2 = sqrt(a2^2 + b2^2); dC = C1 - C2
//! dH = sqrt(max(0, da^2 + db^2 - dC^2))
//! Cs = sqrt(C1 * C2)
//! SL = 1; SC = 1 + 0.045*Cs; SH = 1 + 0.015*Cs
//! d  = sqrt((dL/SL)^2 + (dC/SC)^2 + (dH/SH)^2)
//! ```
//!
//! The S weights use the geometric mean of the chromas (not the textbook
//! reference-sample C1), so the metric is symmetric -- callers never have
//! to care which color is "the reference".
//!
//! The `max(0, ..)` clamp on the dH radicand is a hard correctness
//! requirement, not an optimization: floating-point cancellation can leave
//! a tiny negative radicand for near-identical colors, and an unguarded
//! sqrt would inject NaN into the ranking sort, silently corrupting match
//! order. See [`Lab::distance`].
//!
//! The human-facing score is `accuracy = clamp(100 - d/4, 0, 100)`, which
//! maps the empirical 0..~100 CIE94 range for 8-bit colors onto a
//! percentage. See [`accuracy_from_distance`].
//!
//! ## Mixing Is an Approximation
//!
//! [`find_mixes`] blends pigments by weighted-average sRGB, deliberately
//! without gamma correction. Real pigment mixing is subtractive and
//! strongly nonlinear; the weighted average matches what the reference
//! behavior promises artists ("2 parts white, 1 part black lands near
//! mid-gray") and is cheap enough to search exhaustively. Accuracy
//! thresholds rise with mix complexity (singles > 50, pairs > 60,
//! triples > 65) so the combinatorially larger tiers cannot flood the
//! result list with low-quality recipes.

pub mod api;
pub mod catalog;
pub mod color;
pub mod extract;
pub mod mix;

#[cfg(test)]
mod domain_tests;

pub use api::{ColorInput, ColorMatcher, MatchError};
pub use catalog::{Catalog, CatalogEntry, CatalogError, MatchResult};
pub use color::{accuracy_from_distance, color_distance, Hsl, Hsv, Lab, ParseColorError, Rgb};
pub use extract::{extract_dominant_colors, DEFAULT_MAX_COLORS};
pub use mix::{find_mixes, MixCandidate, MixComponent, Pigment};
