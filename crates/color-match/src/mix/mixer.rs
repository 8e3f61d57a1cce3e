//! Three-tier combinatorial mix search.

use crate::color::{accuracy_from_distance, Lab, Rgb};

/// Minimum accuracy for a single-pigment suggestion.
const SINGLE_MIN_ACCURACY: f64 = 50.0;
/// Minimum accuracy for a two-pigment mix.
const PAIR_MIN_ACCURACY: f64 = 60.0;
/// Minimum accuracy for a three-pigment mix.
const TRIPLE_MIN_ACCURACY: f64 = 65.0;
/// Cap on the merged result list.
const MAX_RESULTS: usize = 10;

/// Ratio grid for pairwise mixes.
const PAIR_RATIOS: [(u32, u32); 9] = [
    (3, 1),
    (2, 1),
    (1, 1),
    (1, 2),
    (1, 3),
    (4, 1),
    (3, 2),
    (2, 3),
    (1, 4),
];

/// Ratio grid for triadic mixes. Kept small and balanced: the triple tier
/// is cubic in the primary count and exists for "almost there, needs a
/// touch of a third color" cases, not for exhaustive search.
const TRIPLE_RATIOS: [(u32, u32, u32); 4] = [(2, 1, 1), (1, 2, 1), (1, 1, 2), (1, 1, 1)];

/// A base pigment available for mixing.
///
/// `primary` marks the primary-like subset (primaries plus white/black)
/// that participates in triadic mixes; secondary convenience colors stay
/// out of the cubic tier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pigment {
    /// Display name, e.g. "Titanium White"
    pub name: String,
    /// Masstone color of the pigment
    pub color: Rgb,
    /// Whether this pigment joins triadic mixes
    pub primary: bool,
}

impl Pigment {
    /// Create a non-primary pigment.
    pub fn new(name: impl Into<String>, color: Rgb) -> Self {
        Self {
            name: name.into(),
            color,
            primary: false,
        }
    }

    /// Create a primary-like pigment (eligible for triadic mixes).
    pub fn primary(name: impl Into<String>, color: Rgb) -> Self {
        Self {
            name: name.into(),
            color,
            primary: true,
        }
    }
}

/// One pigment's share of a mix recipe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MixComponent {
    /// Pigment name
    pub name: String,
    /// Pigment masstone color
    pub color: Rgb,
    /// Integer parts of this pigment in the recipe
    pub parts: u32,
}

/// A candidate mix recipe with its simulated result.
///
/// Ephemeral: generated by the search, filtered by tier threshold, and
/// discarded after display. `total_parts` is the sum of component parts,
/// kept so callers can render "2 parts X, 1 part Y" without re-summing.
#[derive(Debug, Clone)]
pub struct MixCandidate {
    /// Ordered recipe components
    pub components: Vec<MixComponent>,
    /// Sum of all component parts
    pub total_parts: u32,
    /// Simulated blend color
    pub mixed: Rgb,
    /// Accuracy of `mixed` against the search target
    pub accuracy: f64,
}

/// Search single pigments, weighted pairs, and primary triples for blends
/// close to `target`.
///
/// Tier thresholds: singles must exceed 50 accuracy, pairs 60, triples 65.
/// Surviving candidates are merged, sorted descending by accuracy (stable,
/// so ties keep generation order: singles before pairs before triples),
/// and truncated to the top 10.
///
/// An empty pigment list yields an empty vec.
///
/// # Example
///
/// ```
/// use color_match::{find_mixes, Pigment};
///
/// let pigments = vec![
///     Pigment::primary("White", "#FFFFFF".parse().unwrap()),
///     Pigment::primary("Black", "#000000".parse().unwrap()),
/// ];
/// let mixes = find_mixes("#808080".parse().unwrap(), &pigments);
/// // A 1:1 white/black blend lands on mid-gray
/// assert!(mixes[0].accuracy > 99.0);
/// ```
pub fn find_mixes(target: Rgb, pigments: &[Pigment]) -> Vec<MixCandidate> {
    let target_lab = Lab::from(target);
    let mut candidates: Vec<MixCandidate> = Vec::new();

    // Tier 1: single pigments
    for pigment in pigments {
        let accuracy = accuracy_against(target_lab, pigment.color);
        if accuracy > SINGLE_MIN_ACCURACY {
            candidates.push(MixCandidate {
                components: vec![component(pigment, 1)],
                total_parts: 1,
                mixed: pigment.color,
                accuracy,
            });
        }
    }

    // Tier 2: unordered pairs over the ratio grid
    for (i, first) in pigments.iter().enumerate() {
        for second in &pigments[i + 1..] {
            for &(parts_a, parts_b) in &PAIR_RATIOS {
                let Some(mixed) = blend(&[(first.color, parts_a), (second.color, parts_b)]) else {
                    continue;
                };
                let accuracy = accuracy_against(target_lab, mixed);
                if accuracy > PAIR_MIN_ACCURACY {
                    candidates.push(MixCandidate {
                        components: vec![component(first, parts_a), component(second, parts_b)],
                        total_parts: parts_a + parts_b,
                        mixed,
                        accuracy,
                    });
                }
            }
        }
    }

    // Tier 3: triples, restricted to the primary-like subset
    let primaries: Vec<&Pigment> = pigments.iter().filter(|p| p.primary).collect();
    for (i, &first) in primaries.iter().enumerate() {
        for (j, &second) in primaries.iter().enumerate().skip(i + 1) {
            for &third in &primaries[j + 1..] {
                for &(parts_a, parts_b, parts_c) in &TRIPLE_RATIOS {
                    // Mix the first two, then fold in the third with the
                    // combined weight of the intermediate.
                    let Some(intermediate) =
                        blend(&[(first.color, parts_a), (second.color, parts_b)])
                    else {
                        continue;
                    };
                    let Some(mixed) =
                        blend(&[(intermediate, parts_a + parts_b), (third.color, parts_c)])
                    else {
                        continue;
                    };
                    let accuracy = accuracy_against(target_lab, mixed);
                    if accuracy > TRIPLE_MIN_ACCURACY {
                        candidates.push(MixCandidate {
                            components: vec![
                                component(first, parts_a),
                                component(second, parts_b),
                                component(third, parts_c),
                            ],
                            total_parts: parts_a + parts_b + parts_c,
                            mixed,
                            accuracy,
                        });
                    }
                }
            }
        }
    }

    // Stable sort keeps generation order on ties
    candidates.sort_by(|a, b| b.accuracy.total_cmp(&a.accuracy));
    candidates.truncate(MAX_RESULTS);
    candidates
}

fn component(pigment: &Pigment, parts: u32) -> MixComponent {
    MixComponent {
        name: pigment.name.clone(),
        color: pigment.color,
        parts,
    }
}

fn accuracy_against(target: Lab, candidate: Rgb) -> f64 {
    accuracy_from_distance(target.distance(Lab::from(candidate)))
}

/// Weighted-average sRGB blend.
///
/// Returns `None` when the total weight is zero. The fixed ratio grids
/// make that unreachable, but the guard stands so a future ratio table
/// cannot introduce a division by zero.
fn blend(parts: &[(Rgb, u32)]) -> Option<Rgb> {
    let total: u32 = parts.iter().map(|(_, p)| p).sum();
    if total == 0 {
        return None;
    }

    let mut r = 0.0f64;
    let mut g = 0.0f64;
    let mut b = 0.0f64;
    for &(color, weight) in parts {
        let w = weight as f64;
        r += color.r as f64 * w;
        g += color.g as f64 * w;
        b += color.b as f64 * w;
    }

    let total = total as f64;
    Some(Rgb::new(
        (r / total).round() as u8,
        (g / total).round() as u8,
        (b / total).round() as u8,
    ))
}
