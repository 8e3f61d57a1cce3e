//! GIMP palette (.gpl) writer.
//!
//! Text format: a fixed header, then one `R G B<TAB>name` row per swatch
//! with channels printed as right-aligned decimal bytes.

use std::io::Write;

use super::Swatch;
use crate::error::AppError;

pub(super) fn write<W: Write>(
    writer: &mut W,
    name: &str,
    swatches: &[Swatch],
) -> Result<(), AppError> {
    writeln!(writer, "GIMP Palette")?;
    writeln!(writer, "Name: {name}")?;
    writeln!(writer, "Columns: 8")?;
    writeln!(writer, "#")?;

    for swatch in swatches {
        writeln!(
            writer,
            "{:>3} {:>3} {:>3}\t{}",
            swatch.rgb[0], swatch.rgb[1], swatch.rgb[2], swatch.name
        )?;
    }

    Ok(())
}
