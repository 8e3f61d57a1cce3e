//! CSV palette writer.
//!
//! Header row `name,hex,r,g,b`, one row per swatch. Names containing a
//! comma, quote, or newline are quoted with doubled inner quotes per RFC
//! 4180; everything else is written bare.

use std::io::Write;

use super::Swatch;
use crate::error::AppError;

pub(super) fn write<W: Write>(writer: &mut W, swatches: &[Swatch]) -> Result<(), AppError> {
    writeln!(writer, "name,hex,r,g,b")?;
    for swatch in swatches {
        writeln!(
            writer,
            "{},{},{},{},{}",
            escape(&swatch.name),
            swatch.hex,
            swatch.rgb[0],
            swatch.rgb[1],
            swatch.rgb[2]
        )?;
    }
    Ok(())
}

fn escape(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
