//! Adobe Color Swatch (.aco) writer.
//!
//! Emits version-1 records only: big-endian u16 fields, color space 0
//! (RGB), channels scaled to 0..=65535 by multiplying the byte value by
//! 257 (so 0xFF maps to 0xFFFF exactly). Version-1 records carry no
//! swatch names; tools that want names read the JSON or GPL export.

use std::io::Write;

use super::Swatch;
use crate::error::AppError;

pub(super) fn write<W: Write>(writer: &mut W, swatches: &[Swatch]) -> Result<(), AppError> {
    let count = u16::try_from(swatches.len())
        .map_err(|_| AppError::Export(format!("too many swatches for ACO: {}", swatches.len())))?;

    write_u16(writer, 1)?; // version 1
    write_u16(writer, count)?;

    for swatch in swatches {
        write_u16(writer, 0)?; // color space: RGB
        write_u16(writer, swatch.rgb[0] as u16 * 257)?;
        write_u16(writer, swatch.rgb[1] as u16 * 257)?;
        write_u16(writer, swatch.rgb[2] as u16 * 257)?;
        write_u16(writer, 0)?; // fourth channel unused for RGB
    }

    Ok(())
}

fn write_u16<W: Write>(writer: &mut W, value: u16) -> std::io::Result<()> {
    writer.write_all(&value.to_be_bytes())
}
