//! Pigment mixing simulator
//!
//! Searches weighted combinations of a small base-pigment palette for
//! blends that land perceptually close to a target color, and reports them
//! as part recipes ("2 parts white, 1 part black").
//!
//! The search runs three escalating tiers -- single pigments, weighted
//! pairs, and balanced triples over the primary-like subset -- with an
//! accuracy bar that rises with mix complexity, so the combinatorially
//! larger tiers cannot flood the results with mediocre recipes.
//!
//! Blending is weighted-average sRGB without gamma correction. That is an
//! approximation, not pigment physics; see the crate-level docs for why it
//! is the chosen tradeoff.

mod mixer;

pub use mixer::{find_mixes, MixCandidate, MixComponent, Pigment};
