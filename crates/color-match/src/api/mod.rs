//! Public API for the color-match crate.
//!
//! This module provides the high-level API: the [`ColorMatcher`] builder,
//! the [`ColorInput`] boundary type, and the [`MatchError`] unified error.

mod builder;
mod error;

pub use builder::{ColorInput, ColorMatcher};
pub use error::MatchError;
