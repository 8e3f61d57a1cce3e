//! Domain-critical regression tests for color-match.
//!
//! These tests are designed to catch specific classes of bugs, not just
//! confirm happy paths. Each test documents the regression it guards
//! against.

#[cfg(test)]
mod domain_tests {
    use crate::catalog::{Catalog, CatalogEntry};
    use crate::color::{accuracy_from_distance, color_distance, rgb_to_xyz, Rgb};
    use crate::extract::extract_dominant_colors;
    use crate::mix::{find_mixes, Pigment};

    // ========================================================================
    // GAP 1: XYZ matrix aliasing -- every output row must read the ORIGINAL
    // linear RGB triple
    // ========================================================================

    /// If this breaks, it means: the sRGB -> XYZ conversion is reusing a
    /// mutable variable across matrix rows, so the Y and Z rows read
    /// already-overwritten values instead of the original channels. That
    /// bug does not crash; it silently skews every Lab value and therefore
    /// every ranked match. The independent nalgebra matrix multiply cannot
    /// alias, so divergence pinpoints exactly this defect.
    #[test]
    fn test_xyz_matrix_no_aliasing() {
        use nalgebra::{Matrix3, Vector3};

        fn srgb_to_linear(c: u8) -> f64 {
            let c = c as f64 / 255.0;
            if c <= 0.04045 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }

        let m = Matrix3::new(
            0.4124564, 0.3575761, 0.1804375, //
            0.2126729, 0.7151522, 0.0721750, //
            0.0193339, 0.1191920, 0.9503041,
        );

        for rgb in [
            Rgb::new(255, 0, 0),
            Rgb::new(0, 255, 0),
            Rgb::new(0, 0, 255),
            Rgb::new(255, 128, 7),
            Rgb::new(13, 200, 90),
            Rgb::new(128, 128, 128),
        ] {
            let (x, y, z) = rgb_to_xyz(rgb);
            let linear = Vector3::new(
                srgb_to_linear(rgb.r) * 100.0,
                srgb_to_linear(rgb.g) * 100.0,
                srgb_to_linear(rgb.b) * 100.0,
            );
            let reference = m * linear;

            assert!(
                (x - reference[0]).abs() < 1e-3
                    && (y - reference[1]).abs() < 1e-3
                    && (z - reference[2]).abs() < 1e-3,
                "REGRESSION: XYZ diverges from reference matrix multiply for {rgb:?}: \
                 got ({x:.4},{y:.4},{z:.4}), expected ({:.4},{:.4},{:.4}). \
                 A mismatch in Y or Z only is the signature of row aliasing.",
                reference[0],
                reference[1],
                reference[2]
            );
        }
    }

    // ========================================================================
    // GAP 2: dH radicand guard -- the distance metric must never emit NaN
    // ========================================================================

    /// If this breaks, it means: the max(0, ..) clamp on the dH radicand
    /// was dropped, and floating-point cancellation turned sqrt of a tiny
    /// negative into NaN. NaN does not raise anything; it quietly makes
    /// sort order nondeterministic, which surfaces as matches "randomly"
    /// shuffling between runs. The sweep leans on near-identical and
    /// achromatic pairs, where the radicand sits closest to zero.
    #[test]
    fn test_distance_never_nan_never_negative() {
        let mut colors = vec![
            Rgb::new(0, 0, 0),
            Rgb::new(255, 255, 255),
            Rgb::new(128, 128, 128),
            Rgb::new(128, 128, 129),
            Rgb::new(1, 0, 0),
            Rgb::new(0, 1, 0),
        ];
        // Deterministic pseudo-random spread across the cube
        for i in 0..64u32 {
            colors.push(Rgb::new(
                ((i * 37) % 256) as u8,
                ((i * 101) % 256) as u8,
                ((i * 197) % 256) as u8,
            ));
        }

        for &a in &colors {
            for &b in &colors {
                let d = color_distance(a, b);
                assert!(
                    d.is_finite() && d >= 0.0,
                    "REGRESSION: distance({a:?}, {b:?}) = {d}, must be finite and >= 0"
                );
            }
        }
    }

    // ========================================================================
    // GAP 3: metric identity -- ranking must use CIE94 in Lab, not
    // Euclidean RGB
    // ========================================================================

    /// If this breaks, it means: someone "simplified" the distance to
    /// Euclidean RGB (the deprecated variant this engine exists to
    /// replace). White-to-black is the cleanest discriminator: both ends
    /// are achromatic, so CIE94 collapses to the plain lightness
    /// difference of 100, while Euclidean RGB gives sqrt(3 * 255^2),
    /// roughly 441.
    #[test]
    fn test_metric_is_cie94_not_rgb_euclidean() {
        let d = color_distance(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0));
        assert!(
            (d - 100.0).abs() < 0.1,
            "REGRESSION: white-black distance is {d}, expected ~100 (CIE94 lightness). \
             A value near 441 means Euclidean RGB snuck back in."
        );
    }

    /// If this breaks, it means: the accuracy clamp was removed and very
    /// distant colors report negative accuracy, which the UI renders as
    /// nonsense percentages.
    #[test]
    fn test_accuracy_clamped_for_any_distance() {
        for d in [0.0, 1.0, 99.9, 100.0, 400.0, 401.0, 5000.0] {
            let acc = accuracy_from_distance(d);
            assert!(
                (0.0..=100.0).contains(&acc),
                "accuracy {acc} out of [0, 100] for distance {d}"
            );
        }
    }

    // ========================================================================
    // GAP 4: determinism -- equal-distance matches must keep catalog order
    // ========================================================================

    /// If this breaks, it means: the matcher switched to an unstable sort
    /// (or a NaN slipped into the keys) and entries at equal distance
    /// shuffle between runs, flickering the UI and breaking snapshot
    /// expectations downstream.
    #[test]
    fn test_match_ranking_deterministic() {
        let entries = vec![
            CatalogEntry::new(1, "A", "One", "A1", Rgb::new(50, 60, 70)),
            CatalogEntry::new(2, "A", "Two", "A2", Rgb::new(50, 60, 70)),
            CatalogEntry::new(3, "A", "Three", "A3", Rgb::new(50, 60, 70)),
            CatalogEntry::new(4, "A", "Far", "A4", Rgb::new(250, 10, 10)),
        ];
        let catalog = Catalog::new(entries).unwrap();

        for _ in 0..10 {
            let results = catalog.find_closest(Rgb::new(51, 61, 71), 8);
            let names: Vec<&str> = results.iter().map(|m| m.entry.name.as_str()).collect();
            assert_eq!(names, ["One", "Two", "Three", "Far"]);
        }
    }

    // ========================================================================
    // GAP 5: mix tier floors -- thresholds are per component count
    // ========================================================================

    /// If this breaks, it means: the tier thresholds were merged or
    /// reordered, and the cubic triple tier is flooding results with
    /// recipes barely better than chance. The floors are the contract
    /// that keeps higher-complexity recipes rarer and better.
    #[test]
    fn test_mix_tier_floors() {
        let pigments = [
            Pigment::primary("White", Rgb::new(255, 255, 255)),
            Pigment::primary("Black", Rgb::new(20, 20, 20)),
            Pigment::primary("Red", Rgb::new(220, 50, 40)),
            Pigment::primary("Yellow", Rgb::new(240, 210, 40)),
            Pigment::primary("Blue", Rgb::new(40, 80, 170)),
            Pigment::new("Umber", Rgb::new(110, 80, 50)),
        ];

        // A spread of plausible painting targets
        let targets = [
            Rgb::new(190, 150, 120),
            Rgb::new(90, 110, 150),
            Rgb::new(230, 190, 80),
            Rgb::new(60, 60, 60),
            Rgb::new(170, 90, 80),
        ];

        for target in targets {
            for candidate in find_mixes(target, &pigments) {
                let floor = match candidate.components.len() {
                    1 => 50.0,
                    2 => 60.0,
                    3 => 65.0,
                    n => panic!("unexpected component count {n}"),
                };
                assert!(
                    candidate.accuracy > floor,
                    "candidate {:?} at accuracy {} breaches its tier floor {}",
                    candidate
                        .components
                        .iter()
                        .map(|c| c.name.as_str())
                        .collect::<Vec<_>>(),
                    candidate.accuracy,
                    floor
                );
            }
        }
    }

    // ========================================================================
    // Scenario pins from the engine contract
    // ========================================================================

    /// Pure red against a catalog containing pure red: first match must be
    /// exact with accuracy 100.
    #[test]
    fn test_scenario_exact_red_match() {
        let catalog = Catalog::new(vec![
            CatalogEntry::new(1, "A", "Crimson", "A1", Rgb::new(220, 20, 60)),
            CatalogEntry::new(2, "A", "Pure Red", "A2", Rgb::new(255, 0, 0)),
            CatalogEntry::new(3, "A", "Vermilion", "A3", Rgb::new(227, 66, 52)),
        ])
        .unwrap();

        let results = catalog.find_closest(Rgb::new(255, 0, 0), 8);
        assert_eq!(results[0].entry.name, "Pure Red");
        assert_eq!(results[0].distance, 0.0);
        assert_eq!(results[0].accuracy, 100.0);
    }

    /// Mid-gray from 1:1 white/black: the simulated blend must land on
    /// (128, 128, 128) within rounding.
    #[test]
    fn test_scenario_gray_from_white_and_black() {
        let pigments = [
            Pigment::primary("White", Rgb::new(255, 255, 255)),
            Pigment::primary("Black", Rgb::new(0, 0, 0)),
        ];
        let mixes = find_mixes(Rgb::new(128, 128, 128), &pigments);
        let best = &mixes[0];
        assert_eq!(best.mixed, Rgb::new(128, 128, 128));
        assert_eq!(best.total_parts, 2);
    }

    /// A 10x10 single-color opaque buffer yields exactly one color; a
    /// fully transparent buffer yields none.
    #[test]
    fn test_scenario_extractor_edges() {
        let opaque: Vec<u8> = [77u8, 120, 33, 255].repeat(100);
        assert_eq!(
            extract_dominant_colors(&opaque, 8),
            vec![Rgb::new(77, 120, 33)]
        );

        let transparent: Vec<u8> = [77u8, 120, 33, 0].repeat(100);
        assert!(extract_dominant_colors(&transparent, 8).is_empty());
    }

    /// Round-trip property over every representable hex color is too slow
    /// for a unit suite; a structured sweep catches the same formatting
    /// and parsing defects (case, zero padding, channel order).
    #[test]
    fn test_hex_round_trip_sweep() {
        for r in (0..=255).step_by(15) {
            for g in (0..=255).step_by(45) {
                for b in (0..=255).step_by(45) {
                    let rgb = Rgb::new(r as u8, g as u8, b as u8);
                    let parsed: Rgb = rgb.to_hex().parse().unwrap();
                    assert_eq!(parsed, rgb);
                }
            }
        }
    }

    /// CIE94 symmetry across a deterministic sweep. Textbook CIE94 weights
    /// by the reference color's chroma and is therefore asymmetric; this
    /// engine deliberately uses the geometric-mean variant so the metric
    /// is a true distance. If this breaks, someone reverted to C1-only
    /// weights and every "which argument goes first" call site is now a
    /// correctness question.
    #[test]
    fn test_distance_symmetry_sweep() {
        let colors: Vec<Rgb> = (0..32u32)
            .map(|i| {
                Rgb::new(
                    ((i * 53) % 256) as u8,
                    ((i * 89) % 256) as u8,
                    ((i * 143) % 256) as u8,
                )
            })
            .collect();

        for &a in &colors {
            for &b in &colors {
                let fwd = color_distance(a, b);
                let back = color_distance(b, a);
                assert!(
                    (fwd - back).abs() < 1e-9,
                    "asymmetry for {a:?} / {b:?}: {fwd} vs {back}"
                );
            }
        }
    }
}
