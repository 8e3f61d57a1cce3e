//! JSON palette writer.

use std::io::Write;

use serde::Serialize;

use super::Swatch;
use crate::error::AppError;

#[derive(Serialize)]
struct PaletteDoc<'a> {
    name: &'a str,
    swatches: &'a [Swatch],
}

pub(super) fn write<W: Write>(
    writer: &mut W,
    name: &str,
    swatches: &[Swatch],
) -> Result<(), AppError> {
    let doc = PaletteDoc { name, swatches };
    serde_json::to_writer_pretty(&mut *writer, &doc)
        .map_err(|e| AppError::Export(e.to_string()))?;
    writeln!(writer)?;
    Ok(())
}
