//! Dominant color extraction
//!
//! Reduces a sampled RGBA pixel buffer to a handful of representative
//! colors by frequency. This is deliberate frequency quantization, not
//! clustering -- no k-means, no median cut. It is coarser than production
//! color quantization and exactly right for small reference swatches,
//! where the interesting colors ARE the frequent exact values.

use std::collections::HashMap;

use crate::color::Rgb;

/// Default number of dominant colors to return.
pub const DEFAULT_MAX_COLORS: usize = 8;

/// Sampling stride in pixels: every 10th pixel is inspected.
const SAMPLE_STRIDE: usize = 10;

/// Minimum alpha for a pixel to count as visible.
const ALPHA_VISIBLE_MIN: u8 = 128;

/// Extract up to `max_colors` dominant colors from an RGBA8 buffer.
///
/// Samples every 10th pixel, skips pixels with alpha below 128, counts
/// exact RGB values, and returns the most frequent ones. The ranking sort
/// is stable with ties keeping first-encounter order, so the result is
/// reproducible for a given buffer.
///
/// Trailing bytes that do not form a whole RGBA pixel are ignored. A fully
/// transparent buffer yields an empty vec.
///
/// # Example
///
/// ```
/// use color_match::{extract_dominant_colors, Rgb};
///
/// // A 2x2 opaque red swatch
/// let pixels = [255u8, 0, 0, 255].repeat(4);
/// let colors = extract_dominant_colors(&pixels, 8);
/// assert_eq!(colors, vec![Rgb::new(255, 0, 0)]);
/// ```
pub fn extract_dominant_colors(rgba: &[u8], max_colors: usize) -> Vec<Rgb> {
    let mut counts: HashMap<[u8; 3], usize> = HashMap::new();
    // First-encounter order, for deterministic tie-breaking
    let mut order: Vec<[u8; 3]> = Vec::new();

    for px in rgba.chunks_exact(4).step_by(SAMPLE_STRIDE) {
        if px[3] < ALPHA_VISIBLE_MIN {
            continue;
        }
        let key = [px[0], px[1], px[2]];
        let count = counts.entry(key).or_insert_with(|| {
            order.push(key);
            0
        });
        *count += 1;
    }

    let mut ranked: Vec<([u8; 3], usize)> = order.into_iter().map(|k| (k, counts[&k])).collect();
    // Stable sort: equal frequencies keep encounter order
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(max_colors);

    ranked.into_iter().map(|(k, _)| Rgb::from_bytes(k)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Build an RGBA buffer of `n` pixels all set to (r, g, b, a).
    fn solid(n: usize, rgba: [u8; 4]) -> Vec<u8> {
        rgba.repeat(n)
    }

    #[test]
    fn test_single_color_swatch() {
        // 10x10 opaque single-color image -> exactly that one color
        let buf = solid(100, [200, 150, 100, 255]);
        let colors = extract_dominant_colors(&buf, 8);
        assert_eq!(colors, vec![Rgb::new(200, 150, 100)]);
    }

    #[test]
    fn test_fully_transparent_is_empty() {
        let buf = solid(100, [200, 150, 100, 0]);
        assert!(extract_dominant_colors(&buf, 8).is_empty());
    }

    #[test]
    fn test_alpha_threshold_boundary() {
        // 127 is invisible, 128 is visible
        let invisible = solid(100, [10, 20, 30, 127]);
        assert!(extract_dominant_colors(&invisible, 8).is_empty());

        let visible = solid(100, [10, 20, 30, 128]);
        assert_eq!(extract_dominant_colors(&visible, 8), vec![Rgb::new(10, 20, 30)]);
    }

    #[test]
    fn test_frequency_ordering() {
        // Sampled pixels hit indices 0, 10, 20, ... -- lay the buffer out
        // so blue dominates the sample, then red, then one green.
        let mut buf = Vec::new();
        for i in 0..300usize {
            let px = match i / 10 {
                0..=14 => [0u8, 0, 255, 255],  // 15 sampled blues
                15..=24 => [255, 0, 0, 255],   // 10 sampled reds
                _ => [0, 255, 0, 255],         // 5 sampled greens
            };
            buf.extend_from_slice(&px);
        }
        let colors = extract_dominant_colors(&buf, 8);
        assert_eq!(
            colors,
            vec![
                Rgb::new(0, 0, 255),
                Rgb::new(255, 0, 0),
                Rgb::new(0, 255, 0)
            ]
        );
    }

    #[test]
    fn test_tie_keeps_encounter_order() {
        // Alternate two colors so each gets the same sample count; the one
        // encountered first must rank first.
        let mut buf = Vec::new();
        for i in 0..200usize {
            let px = if (i / 10) % 2 == 0 {
                [1u8, 1, 1, 255]
            } else {
                [2u8, 2, 2, 255]
            };
            buf.extend_from_slice(&px);
        }
        let colors = extract_dominant_colors(&buf, 8);
        assert_eq!(colors, vec![Rgb::new(1, 1, 1), Rgb::new(2, 2, 2)]);
    }

    #[test]
    fn test_max_colors_truncates() {
        let mut buf = Vec::new();
        // 12 distinct colors, one sampled pixel each
        for i in 0..12u8 {
            buf.extend_from_slice(&[i, i, i, 255]);
            buf.extend(std::iter::repeat(0u8).take(36)); // 9 unsampled pixels
        }
        let colors = extract_dominant_colors(&buf, 5);
        assert_eq!(colors.len(), 5);
    }

    #[test]
    fn test_trailing_partial_pixel_ignored() {
        let mut buf = solid(10, [9, 9, 9, 255]);
        buf.extend_from_slice(&[1, 2]); // ragged tail
        assert_eq!(extract_dominant_colors(&buf, 8), vec![Rgb::new(9, 9, 9)]);
    }
}
