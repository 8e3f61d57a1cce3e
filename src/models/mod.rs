//! Data models for user-supplied catalog and pigment files.
//!
//! Users can bring their own product lines (a scanned swatch sheet, a
//! brand the built-ins do not cover) as YAML or JSON files. Files are
//! parsed into plain serde structs here and converted into engine types
//! with hex validation; the engine's catalog construction then enforces
//! composite-key uniqueness on the merged result.

use std::fs;
use std::path::Path;

use color_match::{CatalogEntry, Pigment, Rgb};
use serde::Deserialize;

use crate::error::AppError;

/// A user catalog file: one brand with its entries.
///
/// ```yaml
/// brand: Luminance
/// entries:
///   - id: 1
///     name: Burnt Sienna
///     code: "069"
///     color: "#8A4A2C"
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogFile {
    /// Brand name applied to every entry
    pub brand: String,

    /// Catalog entries
    #[serde(default)]
    pub entries: Vec<CatalogFileEntry>,
}

/// One entry row in a [`CatalogFile`].
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogFileEntry {
    /// Per-brand id
    pub id: u32,

    /// Human-readable color name
    pub name: String,

    /// Product code; defaults to empty
    #[serde(default)]
    pub code: String,

    /// Color as #RRGGBB hex
    pub color: String,
}

/// A user pigment file: a named mixing set.
#[derive(Debug, Clone, Deserialize)]
pub struct PigmentFile {
    /// Set name, e.g. "my gouache"
    pub name: String,

    /// Pigments in the set
    #[serde(default)]
    pub pigments: Vec<PigmentFileEntry>,
}

/// One pigment row in a [`PigmentFile`].
#[derive(Debug, Clone, Deserialize)]
pub struct PigmentFileEntry {
    /// Pigment name
    pub name: String,

    /// Masstone color as #RRGGBB hex
    pub color: String,

    /// Whether the pigment joins triadic mixes
    #[serde(default)]
    pub primary: bool,
}

impl CatalogFile {
    /// Load a catalog file, choosing the parser by extension
    /// (`.json` is JSON, anything else is YAML).
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let content = fs::read_to_string(path)?;
        let file: Self = parse_by_extension(path, &content)?;
        tracing::info!(
            brand = %file.brand,
            entries = file.entries.len(),
            "Loaded catalog file"
        );
        Ok(file)
    }

    /// Convert into engine entries, validating every hex color.
    pub fn into_entries(self) -> Result<Vec<CatalogEntry>, AppError> {
        self.entries
            .into_iter()
            .map(|row| {
                let color: Rgb = row.color.parse()?;
                Ok(CatalogEntry::new(
                    row.id,
                    self.brand.clone(),
                    row.name,
                    row.code,
                    color,
                ))
            })
            .collect()
    }
}

impl PigmentFile {
    /// Load a pigment file, choosing the parser by extension
    /// (`.json` is JSON, anything else is YAML).
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let content = fs::read_to_string(path)?;
        let file: Self = parse_by_extension(path, &content)?;
        tracing::info!(
            set = %file.name,
            pigments = file.pigments.len(),
            "Loaded pigment file"
        );
        Ok(file)
    }

    /// Convert into engine pigments, validating every hex color.
    pub fn into_pigments(self) -> Result<Vec<Pigment>, AppError> {
        self.pigments
            .into_iter()
            .map(|row| {
                let color: Rgb = row.color.parse()?;
                Ok(if row.primary {
                    Pigment::primary(row.name, color)
                } else {
                    Pigment::new(row.name, color)
                })
            })
            .collect()
    }
}

fn parse_by_extension<T: serde::de::DeserializeOwned>(
    path: &Path,
    content: &str,
) -> Result<T, AppError> {
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let result = if is_json {
        serde_json::from_str(content).map_err(|e| e.to_string())
    } else {
        serde_yaml::from_str(content).map_err(|e| e.to_string())
    };

    result.map_err(|message| AppError::CatalogFile {
        path: path.to_path_buf(),
        message,
    })
}
