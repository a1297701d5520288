//! Conversions on plain triples
//!
//! Channel-level entry points for callers that hold raw components rather
//! than [`Rgb8`], [`Xyz`] or [`Lab`] values. Triples are always ordered
//! R,G,B / X,Y,Z / L,a,b.

use crate::color::{Lab, Rgb8, Xyz};

/// Convert 8-bit sRGB to XYZ (D65, Y of white = 100)
#[inline]
pub fn rgb_to_xyz(r: u8, g: u8, b: u8) -> [f64; 3] {
    Rgb8::new(r, g, b).to_xyz().to_array()
}

/// Convert XYZ to 8-bit sRGB, clamping each channel to 0..=255
#[inline]
pub fn xyz_to_rgb(x: f64, y: f64, z: f64) -> [u8; 3] {
    Rgb8::from_xyz(Xyz::new(x, y, z)).to_array()
}

/// Convert XYZ to L*a*b*
#[inline]
pub fn xyz_to_lab(x: f64, y: f64, z: f64) -> [f64; 3] {
    Lab::from_xyz(Xyz::new(x, y, z)).to_array()
}

/// Convert L*a*b* to XYZ
#[inline]
pub fn lab_to_xyz(l: f64, a: f64, b: f64) -> [f64; 3] {
    Lab::new(l, a, b).to_xyz().to_array()
}

/// Convert 8-bit sRGB to L*a*b*
#[inline]
pub fn rgb_to_lab(r: u8, g: u8, b: u8) -> [f64; 3] {
    Lab::from_rgb8(Rgb8::new(r, g, b)).to_array()
}

/// Convert L*a*b* to 8-bit sRGB, clamping each channel to 0..=255
#[inline]
pub fn lab_to_rgb(l: f64, a: f64, b: f64) -> [u8; 3] {
    Lab::new(l, a, b).to_rgb8().to_array()
}
