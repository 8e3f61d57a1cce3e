//! Shared fixtures: catalog/pigment file contents and in-memory PNGs.

use std::fs;
use std::path::PathBuf;

/// A small user catalog in YAML form.
pub fn catalog_yaml() -> &'static str {
    r##"
brand: Luminance
entries:
  - id: 1
    name: Burnt Sienna
    code: "069"
    color: "#8A4A2C"
  - id: 2
    name: Primerose
    code: "102"
    color: "#F5E27A"
  - id: 3
    name: Middle Cobalt Blue
    code: "660"
    color: "#2B55A4"
"##
}

/// The same catalog in JSON form.
pub fn catalog_json() -> &'static str {
    r##"{
  "brand": "Luminance",
  "entries": [
    { "id": 1, "name": "Burnt Sienna", "code": "069", "color": "#8A4A2C" },
    { "id": 2, "name": "Primerose", "code": "102", "color": "#F5E27A" },
    { "id": 3, "name": "Middle Cobalt Blue", "code": "660", "color": "#2B55A4" }
  ]
}"##
}

/// A pigment set in YAML form with a marked primary subset.
pub fn pigment_yaml() -> &'static str {
    r##"
name: test gouache
pigments:
  - name: White
    color: "#FFFFFF"
    primary: true
  - name: Black
    color: "#000000"
    primary: true
  - name: Red
    color: "#D23441"
    primary: true
  - name: Ochre
    color: "#C39044"
"##
}

/// Write fixture content into a temp dir and return the file path.
pub fn write_temp(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("write fixture file");
    path
}

/// Encode raw RGBA8 pixels as a PNG byte stream.
pub fn png_bytes(width: u32, height: u32, rgba: &[u8]) -> Vec<u8> {
    assert_eq!(rgba.len(), (width * height * 4) as usize);
    let mut out = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut out, width, height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header().expect("png header");
        writer.write_image_data(rgba).expect("png data");
    }
    out
}

/// A solid single-color PNG.
pub fn solid_png(width: u32, height: u32, rgba: [u8; 4]) -> Vec<u8> {
    let pixels = rgba.repeat((width * height) as usize);
    png_bytes(width, height, &pixels)
}

/// A PNG split into a left half of `left` and a right half of `right`.
pub fn split_png(width: u32, height: u32, left: [u8; 4], right: [u8; 4]) -> Vec<u8> {
    let mut pixels = Vec::with_capacity((width * height * 4) as usize);
    for _y in 0..height {
        for x in 0..width {
            let px = if x < width / 2 { left } else { right };
            pixels.extend_from_slice(&px);
        }
    }
    png_bytes(width, height, &pixels)
}
