//! Tests for palette export formats.

mod common;

use std::fs;

use color_match::Rgb;
use huemix::error::AppError;
use huemix::export::{write_palette, PaletteFormat, Swatch};
use pretty_assertions::assert_eq;

fn sample_swatches() -> Vec<Swatch> {
    vec![
        Swatch::new("True Blue", Rgb::new(0x2D, 0x6B, 0xB4)),
        Swatch::new("Crimson Red", Rgb::new(0xB8, 0x28, 0x3C)),
        Swatch::new("White", Rgb::new(255, 255, 255)),
    ]
}

/// Write a palette through a real file on disk, like the CLI does.
fn export_to_disk(format: PaletteFormat, swatches: &[Swatch]) -> Vec<u8> {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(format!("palette.{}", format.extension()));

    let mut file = fs::File::create(&path).unwrap();
    write_palette(&mut file, format, "test palette", swatches).unwrap();
    drop(file);

    fs::read(&path).unwrap()
}

#[test]
fn test_json_export() {
    let bytes = export_to_disk(PaletteFormat::Json, &sample_swatches());
    let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(value["name"], "test palette");
    let swatches = value["swatches"].as_array().unwrap();
    assert_eq!(swatches.len(), 3);
    assert_eq!(swatches[0]["name"], "True Blue");
    assert_eq!(swatches[0]["hex"], "#2D6BB4");
    assert_eq!(swatches[0]["rgb"], serde_json::json!([45, 107, 180]));
}

#[test]
fn test_csv_export() {
    let bytes = export_to_disk(PaletteFormat::Csv, &sample_swatches());
    let text = String::from_utf8(bytes).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "name,hex,r,g,b");
    assert_eq!(lines[1], "True Blue,#2D6BB4,45,107,180");
    assert_eq!(lines[3], "White,#FFFFFF,255,255,255");
}

#[test]
fn test_gpl_export() {
    let bytes = export_to_disk(PaletteFormat::Gpl, &sample_swatches());
    let text = String::from_utf8(bytes).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], "GIMP Palette");
    assert_eq!(lines[1], "Name: test palette");
    assert_eq!(lines[4], " 45 107 180\tTrue Blue");
    assert_eq!(lines[6], "255 255 255\tWhite");
}

#[test]
fn test_aco_export() {
    let bytes = export_to_disk(PaletteFormat::Aco, &sample_swatches());

    // version 1, three records
    assert_eq!(&bytes[0..4], &[0x00, 0x01, 0x00, 0x03]);
    assert_eq!(bytes.len(), 4 + 3 * 10);

    // First record: RGB space, channels scaled by 257 (0x2D -> 0x2D2D)
    assert_eq!(
        &bytes[4..14],
        &[0x00, 0x00, 0x2D, 0x2D, 0x6B, 0x6B, 0xB4, 0xB4, 0x00, 0x00]
    );
}

#[test]
fn test_empty_palette_is_valid_everywhere() {
    for format in [
        PaletteFormat::Json,
        PaletteFormat::Csv,
        PaletteFormat::Gpl,
        PaletteFormat::Aco,
    ] {
        let bytes = export_to_disk(format, &[]);
        assert!(!bytes.is_empty(), "{format:?} wrote nothing");
    }
}

#[test]
fn test_unknown_format_rejected() {
    let err = "swatchbook".parse::<PaletteFormat>().unwrap_err();
    assert!(matches!(err, AppError::UnknownFormat(_)));
}
