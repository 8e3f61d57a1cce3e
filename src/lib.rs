//! Huemix - color matching and mixing toolkit for art reference
//!
//! CLI front end and data layer around the `color-match` engine.
//! This library exposes modules for integration testing.

pub mod catalogs;
pub mod error;
pub mod export;
pub mod image;
pub mod models;
