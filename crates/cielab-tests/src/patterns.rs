//! Sample color generation
//!
//! Reproducible sets of sRGB and Lab colors for parity and property tests.

use cielab_core::{Lab, Rgb8};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Sample sets of sRGB colors
#[derive(Debug, Clone, Copy)]
pub enum SamplePattern {
    /// RGB color cube corners (8 colors)
    ColorCube,
    /// Grayscale ramp 0-255
    Grayscale,
    /// Every channel value near black, on the linear gamma segment (0..=10)
    NearBlack,
    /// Saturated colors near gamut boundary
    GamutBoundary,
    /// Skin tone samples
    SkinTones,
    /// Regular lattice through the cube with the given step
    Lattice(u8),
    /// Uniform random colors with seed
    Random { seed: u64, count: usize },
}

/// Generate a pattern as a list of colors
pub fn generate_colors(pattern: SamplePattern) -> Vec<Rgb8> {
    match pattern {
        SamplePattern::ColorCube => [
            [0, 0, 0],
            [255, 0, 0],
            [0, 255, 0],
            [0, 0, 255],
            [255, 255, 0],
            [255, 0, 255],
            [0, 255, 255],
            [255, 255, 255],
        ]
        .into_iter()
        .map(Rgb8::from)
        .collect(),
        SamplePattern::Grayscale => (0..=255u8).map(|v| Rgb8::new(v, v, v)).collect(),
        SamplePattern::NearBlack => lattice(0..=10, 1),
        SamplePattern::GamutBoundary => [
            [255, 0, 0],
            [0, 255, 0],
            [0, 0, 255],
            [255, 255, 0],
            [255, 0, 255],
            [0, 255, 255],
            [255, 128, 0],
            [128, 0, 255],
        ]
        .into_iter()
        .map(Rgb8::from)
        .collect(),
        SamplePattern::SkinTones => [
            [255, 224, 189],
            [241, 194, 125],
            [224, 172, 105],
            [198, 134, 66],
            [141, 85, 36],
            [89, 47, 42],
        ]
        .into_iter()
        .map(Rgb8::from)
        .collect(),
        SamplePattern::Lattice(step) => lattice(0..=255, step.max(1)),
        SamplePattern::Random { seed, count } => {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            (0..count)
                .map(|_| Rgb8::new(rng.r#gen(), rng.r#gen(), rng.r#gen()))
                .collect()
        }
    }
}

/// Generate random Lab colors, including values outside the sRGB gamut
///
/// L is drawn from [0, 100], a and b from [-150, 150].
pub fn random_labs(seed: u64, count: usize) -> Vec<Lab> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            Lab::new(
                rng.gen_range(0.0..=100.0),
                rng.gen_range(-150.0..=150.0),
                rng.gen_range(-150.0..=150.0),
            )
        })
        .collect()
}

fn lattice(range: std::ops::RangeInclusive<u8>, step: u8) -> Vec<Rgb8> {
    let axis: Vec<u8> = range.step_by(usize::from(step)).collect();
    let mut colors = Vec::with_capacity(axis.len().pow(3));
    for &r in &axis {
        for &g in &axis {
            for &b in &axis {
                colors.push(Rgb8::new(r, g, b));
            }
        }
    }
    colors
}
