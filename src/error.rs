use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Color matching error: {0}")]
    Match(#[from] color_match::MatchError),

    #[error("Invalid color: {0}")]
    ParseColor(#[from] color_match::ParseColorError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] color_match::CatalogError),

    #[error("Catalog file {path}: {message}")]
    CatalogFile { path: PathBuf, message: String },

    #[error("Pigment file {path}: {message}")]
    PigmentFile { path: PathBuf, message: String },

    #[error("Unknown brand: {0}")]
    UnknownBrand(String),

    #[error("Unknown pigment set: {0}")]
    UnknownPigmentSet(String),

    #[error("Unknown export format: {0} (expected json, csv, gpl or aco)")]
    UnknownFormat(String),

    #[error("Export error: {0}")]
    Export(String),

    #[error("PNG decode error: {0}")]
    PngDecode(String),

    #[error("Unsupported PNG color type: {0}")]
    UnsupportedColorType(String),

    #[error("Invalid region \"{0}\" (expected X,Y,WIDTH,HEIGHT inside the image)")]
    InvalidRegion(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
