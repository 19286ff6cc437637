//! Algorithmic palette generation.
//!
//! Every mode except random sampling starts from the seed's HSL triple and
//! walks a normalized `step` in `[0, 1]` across the requested number of
//! colors. Random jitter is drawn from the supplied RNG so callers can make
//! generation reproducible.

use rand::Rng;

use crate::convert::{generate_random_hex_with, hex_to_hsl, HslColor};
use crate::mode::GenerationMode;

/// Seed-driven modes. Random sampling never reaches the per-index loop.
#[derive(Debug, Clone, Copy)]
enum Harmony {
    Monochromatic,
    Analogous,
    Complementary,
    Triadic,
}

/// Generates `count` hex colors derived from `seed_hex` using `mode`.
pub fn generate_algorithmic_palette(seed_hex: &str, mode: GenerationMode, count: usize) -> Vec<String> {
    generate_with_rng(seed_hex, mode, count, &mut rand::thread_rng())
}

pub fn generate_with_rng<R: Rng + ?Sized>(
    seed_hex: &str,
    mode: GenerationMode,
    count: usize,
    rng: &mut R,
) -> Vec<String> {
    let harmony = match mode {
        GenerationMode::Monochromatic => Harmony::Monochromatic,
        GenerationMode::Analogous => Harmony::Analogous,
        GenerationMode::Complementary => Harmony::Complementary,
        GenerationMode::Triadic => Harmony::Triadic,
        // Random sampling ignores the seed entirely. AI generation happens
        // outside of this crate, so asking for it here degrades the same way.
        GenerationMode::Random | GenerationMode::Ai => {
            return (0..count).map(|_| generate_random_hex_with(rng)).collect();
        }
    };

    let seed = hex_to_hsl(seed_hex);
    let denominator = count.saturating_sub(1).max(1) as f64;

    (0..count)
        .map(|i| {
            let step = i as f64 / denominator;
            derive_color(harmony, seed, i, count, step, rng).to_hex()
        })
        .collect()
}

fn derive_color<R: Rng + ?Sized>(
    harmony: Harmony,
    seed: HslColor,
    index: usize,
    count: usize,
    step: f64,
    rng: &mut R,
) -> HslColor {
    let HslColor { h, s, l } = seed;

    match harmony {
        Harmony::Monochromatic => HslColor::new(
            h,
            (s - 10.0 + rng.gen_range(0.0..20.0)).clamp(0.0, 100.0),
            10.0 + 80.0 * step,
        ),
        Harmony::Analogous => HslColor::new((h - 30.0 + 60.0 * step).rem_euclid(360.0), s, l),
        Harmony::Complementary => {
            if index == 0 {
                seed
            } else if (index as f64) < count as f64 / 2.0 {
                HslColor::new(h, s, jitter(l, 20.0, 20.0, 90.0, rng))
            } else {
                HslColor::new((h + 180.0) % 360.0, s, jitter(l, 20.0, 20.0, 90.0, rng))
            }
        }
        Harmony::Triadic => {
            let group = (index as f64 / (count as f64 / 3.0)).floor();

            HslColor::new((h + group * 120.0) % 360.0, s, jitter(l, 15.0, 25.0, 85.0, rng))
        }
    }
}

/// Uniform jitter of `±spread` around `value`, clamped to `[min, max]`.
fn jitter<R: Rng + ?Sized>(value: f64, spread: f64, min: f64, max: f64, rng: &mut R) -> f64 {
    (value + rng.gen_range(-spread..spread)).clamp(min, max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::{is_valid_hex, try_hex_to_hsl};
    use pretty_assertions::assert_eq;
    use rand::{rngs::StdRng, SeedableRng};

    const SEED: &str = "#3b82f6";

    fn hsl(hex: &str) -> HslColor {
        try_hex_to_hsl(hex).unwrap()
    }

    /// Shortest distance between two hues, in degrees.
    fn hue_distance(a: f64, b: f64) -> f64 {
        let d = (a - b).rem_euclid(360.0);
        d.min(360.0 - d)
    }

    #[test]
    fn always_returns_the_requested_number_of_valid_colors() {
        let mut rng = StdRng::seed_from_u64(1);

        for mode in GenerationMode::ALL {
            for count in 1..=30 {
                let colors = generate_with_rng(SEED, mode, count, &mut rng);

                assert_eq!(colors.len(), count, "{} with {} colors", mode, count);
                for color in &colors {
                    assert!(is_valid_hex(color), "{} produced {}", mode, color);
                }
            }
        }
    }

    #[test]
    fn zero_colors_is_empty() {
        for mode in GenerationMode::ALL {
            assert!(generate_algorithmic_palette(SEED, mode, 0).is_empty());
        }
    }

    #[test]
    fn same_rng_seed_gives_the_same_palette() {
        let a = generate_with_rng(SEED, GenerationMode::Triadic, 9, &mut StdRng::seed_from_u64(3));
        let b = generate_with_rng(SEED, GenerationMode::Triadic, 9, &mut StdRng::seed_from_u64(3));

        assert_eq!(a, b);
    }

    #[test]
    fn monochromatic_spans_dark_to_light() {
        let colors = generate_algorithmic_palette(SEED, GenerationMode::Monochromatic, 8);

        assert!((hsl(&colors[0]).l - 10.0).abs() < 0.5, "{}", colors[0]);
        assert!((hsl(&colors[7]).l - 90.0).abs() < 0.5, "{}", colors[7]);
    }

    #[test]
    fn monochromatic_single_color_is_darkest() {
        let colors = generate_algorithmic_palette(SEED, GenerationMode::Monochromatic, 1);

        assert!((hsl(&colors[0]).l - 10.0).abs() < 0.5);
    }

    #[test]
    fn monochromatic_end_to_end() {
        let colors = generate_algorithmic_palette(SEED, GenerationMode::Monochromatic, 5);
        let seed_hue = hsl(SEED).h;

        assert_eq!(colors.len(), 5);
        for (color, expected_l) in colors.iter().zip([10.0, 30.0, 50.0, 70.0, 90.0]) {
            let hsl = hsl(color);

            assert!((hsl.l - expected_l).abs() < 0.5, "{} has lightness {}", color, hsl.l);
            assert!(hue_distance(hsl.h, seed_hue) < 3.0, "{} has hue {}", color, hsl.h);
            assert!((hsl.h - 217.0).abs() < 3.0);
        }
    }

    #[test]
    fn analogous_stays_within_thirty_degrees() {
        let seed_hue = hsl(SEED).h;

        for count in 1..=12 {
            for color in generate_algorithmic_palette(SEED, GenerationMode::Analogous, count) {
                let hue = hsl(&color).h;

                assert!(
                    hue_distance(hue, seed_hue) <= 30.5,
                    "{} has hue {} for seed hue {}",
                    color,
                    hue,
                    seed_hue
                );
            }
        }
    }

    #[test]
    fn analogous_wraps_around_red() {
        let colors = generate_algorithmic_palette("#ff0000", GenerationMode::Analogous, 3);

        assert!(hue_distance(hsl(&colors[0]).h, 330.0) < 0.5);
        assert!(hue_distance(hsl(&colors[1]).h, 0.0) < 0.5);
        assert!(hue_distance(hsl(&colors[2]).h, 30.0) < 0.5);
    }

    #[test]
    fn complementary_keeps_the_seed_first() {
        let mut rng = StdRng::seed_from_u64(11);
        let seed_hue = hsl(SEED).h;

        for count in 2..=10 {
            let colors = generate_with_rng(SEED, GenerationMode::Complementary, count, &mut rng);

            assert_eq!(colors[0], SEED);
            assert!(
                colors
                    .iter()
                    .skip(1)
                    .any(|c| hue_distance(hsl(c).h, (seed_hue + 180.0) % 360.0) < 2.0),
                "no complement in {:?}",
                colors
            );
        }
    }

    #[test]
    fn complementary_splits_the_palette_in_half() {
        let seed_hue = hsl(SEED).h;
        let colors = generate_algorithmic_palette(SEED, GenerationMode::Complementary, 6);

        for color in &colors[..3] {
            assert!(hue_distance(hsl(color).h, seed_hue) < 2.0, "{}", color);
        }
        for color in &colors[3..] {
            assert!(hue_distance(hsl(color).h, seed_hue + 180.0) < 2.0, "{}", color);
            let l = hsl(color).l;
            assert!((19.5..=90.5).contains(&l), "{} has lightness {}", color, l);
        }
    }

    #[test]
    fn triadic_uses_three_hue_groups() {
        let seed_hue = hsl(SEED).h;

        for count in 1..=15 {
            let colors = generate_algorithmic_palette(SEED, GenerationMode::Triadic, count);
            let mut groups: Vec<usize> = Vec::new();

            for color in &colors {
                let hsl = hsl(color);
                let group = (0..3)
                    .find(|g| hue_distance(hsl.h, seed_hue + *g as f64 * 120.0) < 2.0)
                    .unwrap_or_else(|| panic!("{} is not triadic to {}", color, SEED));

                assert!((24.5..=85.5).contains(&hsl.l), "{} has lightness {}", color, hsl.l);
                groups.push(group);
            }

            // Groups are contiguous and ascending
            let mut sorted = groups.clone();
            sorted.sort();
            assert_eq!(groups, sorted);
        }
    }

    #[test]
    fn random_ignores_the_seed() {
        let a = generate_algorithmic_palette(SEED, GenerationMode::Random, 10);
        let b = generate_algorithmic_palette(SEED, GenerationMode::Random, 10);

        assert_eq!(a.len(), 10);
        assert_ne!(a, b);
    }

    #[test]
    fn ai_mode_falls_back_to_random_sampling() {
        let mut rng = StdRng::seed_from_u64(5);
        let ai = generate_with_rng(SEED, GenerationMode::Ai, 4, &mut rng);

        let mut rng = StdRng::seed_from_u64(5);
        let random = generate_with_rng("#000000", GenerationMode::Random, 4, &mut rng);

        assert_eq!(ai, random);
    }

    #[test]
    fn malformed_seed_is_treated_as_black() {
        let colors = generate_algorithmic_palette("not a color", GenerationMode::Analogous, 3);

        assert_eq!(colors, vec!["#000000", "#000000", "#000000"]);
    }
}
