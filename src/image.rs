//! PNG loading for the dominant-color extractor.
//!
//! Decodes any 8/16-bit PNG into a flat RGBA8 buffer and supports cropping
//! a rectangular region before sampling. This is the only place the
//! application touches image bytes; the engine itself never does I/O.

use std::fs::File;
use std::path::Path;
use std::str::FromStr;

use crate::error::AppError;

/// A decoded image as a flat RGBA8 buffer, row-major.
#[derive(Debug, Clone)]
pub struct RgbaImage {
    pub width: u32,
    pub height: u32,
    /// `width * height * 4` bytes, RGBA interleaved
    pub pixels: Vec<u8>,
}

/// A crop rectangle in pixel coordinates, parsed from `X,Y,WIDTH,HEIGHT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl FromStr for Region {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<u32> = s
            .split(',')
            .map(|p| p.trim().parse::<u32>())
            .collect::<Result<_, _>>()
            .map_err(|_| AppError::InvalidRegion(s.to_string()))?;
        match parts[..] {
            [x, y, width, height] if width > 0 && height > 0 => Ok(Region {
                x,
                y,
                width,
                height,
            }),
            _ => Err(AppError::InvalidRegion(s.to_string())),
        }
    }
}

impl RgbaImage {
    /// Decode a PNG file into RGBA8.
    ///
    /// Grayscale, palette, and 16-bit inputs are normalized to 8-bit color
    /// by the decoder; RGB input gains an opaque alpha channel.
    pub fn load_png(path: &Path) -> Result<Self, AppError> {
        let mut decoder = png::Decoder::new(File::open(path)?);
        decoder.set_transformations(png::Transformations::normalize_to_color8());

        let mut reader = decoder
            .read_info()
            .map_err(|e| AppError::PngDecode(e.to_string()))?;
        let mut buf = vec![0; reader.output_buffer_size()];
        let info = reader
            .next_frame(&mut buf)
            .map_err(|e| AppError::PngDecode(e.to_string()))?;
        buf.truncate(info.buffer_size());

        let pixels = match info.color_type {
            png::ColorType::Rgba => buf,
            png::ColorType::Rgb => buf
                .chunks_exact(3)
                .flat_map(|px| [px[0], px[1], px[2], 255])
                .collect(),
            png::ColorType::Grayscale => buf.iter().flat_map(|&v| [v, v, v, 255]).collect(),
            png::ColorType::GrayscaleAlpha => buf
                .chunks_exact(2)
                .flat_map(|px| [px[0], px[0], px[0], px[1]])
                .collect(),
            other => return Err(AppError::UnsupportedColorType(format!("{other:?}"))),
        };

        tracing::debug!(
            width = info.width,
            height = info.height,
            "Decoded PNG for extraction"
        );

        Ok(Self {
            width: info.width,
            height: info.height,
            pixels,
        })
    }

    /// Copy out a crop region.
    ///
    /// The region must lie fully inside the image; anything else is an
    /// [`AppError::InvalidRegion`], not a silent clamp.
    pub fn crop(&self, region: Region) -> Result<RgbaImage, AppError> {
        let right = region.x.checked_add(region.width);
        let bottom = region.y.checked_add(region.height);
        let in_bounds = matches!((right, bottom), (Some(r), Some(b)) if r <= self.width && b <= self.height);
        if !in_bounds {
            return Err(AppError::InvalidRegion(format!(
                "{},{},{},{}",
                region.x, region.y, region.width, region.height
            )));
        }

        let mut pixels = Vec::with_capacity(region.width as usize * region.height as usize * 4);
        for row in region.y..region.y + region.height {
            let start = (row as usize * self.width as usize + region.x as usize) * 4;
            let end = start + region.width as usize * 4;
            pixels.extend_from_slice(&self.pixels[start..end]);
        }

        Ok(RgbaImage {
            width: region.width,
            height: region.height,
            pixels,
        })
    }
}
