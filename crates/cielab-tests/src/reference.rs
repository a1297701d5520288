//! Reference implementation wrappers
//!
//! `palette` computes the same transforms with exact CIE constants
//! (216/24389 and 24389/27) and matrices derived from the sRGB primaries,
//! so it differs from cielab-core only by the rounding of those constants.

use palette::color_difference::Ciede2000;
use palette::white_point::D65;
use palette::{FromColor, IntoColor, Srgb};

/// palette's Lab under D65 at double precision
pub type PaletteLab = palette::Lab<D65, f64>;

/// Convert 8-bit sRGB to Lab with palette
pub fn srgb_to_lab_palette(rgb: [u8; 3]) -> [f64; 3] {
    let srgb: Srgb<f64> = Srgb::new(rgb[0], rgb[1], rgb[2]).into_format();
    let lab: PaletteLab = srgb.into_color();
    [lab.l, lab.a, lab.b]
}

/// Convert Lab to 8-bit sRGB with palette, clamping out-of-gamut colors
pub fn lab_to_srgb_palette(lab: [f64; 3]) -> [u8; 3] {
    let srgb = Srgb::<f64>::from_color(PaletteLab::new(lab[0], lab[1], lab[2]));
    let srgb: Srgb<u8> = srgb.into_format();
    [srgb.red, srgb.green, srgb.blue]
}

/// CIEDE2000 difference between two Lab triples, computed by palette
pub fn ciede2000(lab1: [f64; 3], lab2: [f64; 3]) -> f64 {
    let lab1 = PaletteLab::new(lab1[0], lab1[1], lab1[2]);
    let lab2 = PaletteLab::new(lab2[0], lab2[1], lab2[2]);
    lab1.difference(lab2)
}
