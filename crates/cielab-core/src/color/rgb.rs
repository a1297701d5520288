//! 8-bit sRGB colors and the sRGB↔XYZ transforms

use crate::color::{Lab, Xyz};
use crate::error::{self, Error};
use crate::math::{SRGB_TO_XYZ, XYZ_TO_SRGB, srgb_gamma_decode, srgb_gamma_encode};
use tracing::trace;

/// sRGB color with 8 bits per channel
///
/// `#[repr(C)]` and [`bytemuck::Pod`], so a `[u8; 3]` coming from an
/// imaging layer can be viewed as an `Rgb8` without copying.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, bytemuck::Pod, bytemuck::Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Rgb8 {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Rgb8 {
    /// Black
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// White
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Create a new RGB color
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create RGB from an array
    #[inline]
    pub const fn from_array(arr: [u8; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }

    /// Convert to array
    #[inline]
    pub const fn to_array(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Convert to CIE XYZ (D65, Y of white = 100)
    ///
    /// Each channel is normalized to [0,1], linearized with the sRGB curve,
    /// scaled by 100 and then multiplied as a row vector by [`SRGB_TO_XYZ`].
    pub fn to_xyz(&self) -> Xyz {
        let linear = self
            .to_array()
            .map(|c| srgb_gamma_decode(f64::from(c) / 255.0) * 100.0);
        Xyz::from_array(SRGB_TO_XYZ.multiply_row_vec(linear))
    }

    /// Convert from CIE XYZ, clamping out-of-gamut values
    ///
    /// Linear channels below 0 or encoded channels above 1 are clamped to
    /// [0,1] before scaling to 0..=255, so the result never wraps.
    pub fn from_xyz(xyz: Xyz) -> Self {
        let scaled = xyz.to_array().map(|c| c / 100.0);
        let linear = XYZ_TO_SRGB.multiply_row_vec(scaled);
        let [r, g, b] = linear.map(|c| {
            let encoded = srgb_gamma_encode(c);
            if !(0.0..=1.0).contains(&encoded) {
                trace!(linear = c, encoded, "clamping out-of-gamut sRGB channel");
            }
            to_channel(encoded)
        });
        Self::new(r, g, b)
    }

    /// Convert to CIE L*a*b*
    #[inline]
    pub fn to_lab(&self) -> Lab {
        Lab::from_rgb8(*self)
    }
}

/// Clamp an encoded channel to [0,1] and round to a byte
///
/// NaN maps to 0 through the saturating float-to-int cast.
#[inline]
fn to_channel(encoded: f64) -> u8 {
    (encoded.clamp(0.0, 1.0) * 255.0).round() as u8
}

impl From<[u8; 3]> for Rgb8 {
    fn from(arr: [u8; 3]) -> Self {
        Self::from_array(arr)
    }
}

impl From<(u8, u8, u8)> for Rgb8 {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Rgb8> for [u8; 3] {
    fn from(rgb: Rgb8) -> Self {
        rgb.to_array()
    }
}

impl TryFrom<&[u8]> for Rgb8 {
    type Error = Error;

    fn try_from(values: &[u8]) -> Result<Self, Self::Error> {
        error::expect_channels(values)?;
        Ok(Self::new(values[0], values[1], values[2]))
    }
}

impl From<Xyz> for Rgb8 {
    fn from(xyz: Xyz) -> Self {
        Self::from_xyz(xyz)
    }
}

impl From<Lab> for Rgb8 {
    fn from(lab: Lab) -> Self {
        lab.to_rgb8()
    }
}
