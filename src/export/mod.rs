//! Palette export writers.
//!
//! Serializes a list of swatches to the formats other art tools ingest:
//! JSON, CSV, GPL (GIMP palette text), and ACO (Adobe swatch binary).
//! Each writer is a straightforward bytes-out encoding of
//! `{name, hex, rgb}` rows; none of them feed back into the engine.

use std::io::Write;
use std::str::FromStr;

use color_match::Rgb;
use serde::Serialize;

use crate::error::AppError;

mod aco;
mod csv;
mod gpl;
mod json;

/// One exported palette entry.
#[derive(Debug, Clone, Serialize)]
pub struct Swatch {
    /// Display name
    pub name: String,
    /// Uppercase #RRGGBB hex
    pub hex: String,
    /// Raw channel bytes [r, g, b]
    pub rgb: [u8; 3],
}

impl Swatch {
    /// Build a swatch from a name and color; hex and rgb stay consistent
    /// by construction.
    pub fn new(name: impl Into<String>, color: Rgb) -> Self {
        Self {
            name: name.into(),
            hex: color.to_hex(),
            rgb: color.to_bytes(),
        }
    }
}

/// Supported palette file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteFormat {
    /// JSON document with name and swatch rows
    Json,
    /// CSV with a name,hex,r,g,b header
    Csv,
    /// GIMP palette text format
    Gpl,
    /// Adobe Color Swatch binary, version-1 records
    Aco,
}

impl PaletteFormat {
    /// Conventional file extension for the format.
    pub fn extension(self) -> &'static str {
        match self {
            PaletteFormat::Json => "json",
            PaletteFormat::Csv => "csv",
            PaletteFormat::Gpl => "gpl",
            PaletteFormat::Aco => "aco",
        }
    }
}

impl FromStr for PaletteFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(PaletteFormat::Json),
            "csv" => Ok(PaletteFormat::Csv),
            "gpl" => Ok(PaletteFormat::Gpl),
            "aco" => Ok(PaletteFormat::Aco),
            other => Err(AppError::UnknownFormat(other.to_string())),
        }
    }
}

/// Write a palette in the given format.
pub fn write_palette<W: Write>(
    writer: &mut W,
    format: PaletteFormat,
    name: &str,
    swatches: &[Swatch],
) -> Result<(), AppError> {
    match format {
        PaletteFormat::Json => json::write(writer, name, swatches),
        PaletteFormat::Csv => csv::write(writer, swatches),
        PaletteFormat::Gpl => gpl::write(writer, name, swatches),
        PaletteFormat::Aco => aco::write(writer, swatches),
    }
}
