//! CIE XYZ Color Space
//!
//! XYZ is the device-independent hub between sRGB and L*a*b*. Values here
//! are on the 0..100 scale, so D65 white is (95.047, 100.0, 108.883).

use crate::color::{D65, Lab, Rgb8};
use crate::error::{self, Error};

/// CIE 1931 XYZ color coordinates
///
/// Components are unconstrained; out-of-gamut intermediates are allowed
/// and only clamped on the way back to [`Rgb8`].
#[derive(Debug, Clone, Copy, PartialEq, Default, bytemuck::Pod, bytemuck::Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Xyz {
    /// X tristimulus value
    pub x: f64,
    /// Y tristimulus value (luminance)
    pub y: f64,
    /// Z tristimulus value
    pub z: f64,
}

impl Xyz {
    /// Create a new XYZ color
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Create a new XYZ color, rejecting NaN and infinite components
    pub fn try_new(x: f64, y: f64, z: f64) -> error::Result<Self> {
        Ok(Self {
            x: error::expect_finite("X", x)?,
            y: error::expect_finite("Y", y)?,
            z: error::expect_finite("Z", z)?,
        })
    }

    /// Create XYZ from an array
    #[inline]
    pub const fn from_array(arr: [f64; 3]) -> Self {
        Self {
            x: arr[0],
            y: arr[1],
            z: arr[2],
        }
    }

    /// Convert to array
    #[inline]
    pub const fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Get the luminance (Y component)
    #[inline]
    pub const fn luminance(&self) -> f64 {
        self.y
    }

    /// Convert to L*a*b*
    #[inline]
    pub fn to_lab(&self) -> Lab {
        Lab::from_xyz(*self)
    }

    /// Convert to 8-bit sRGB, clamping out-of-gamut values
    #[inline]
    pub fn to_rgb8(&self) -> Rgb8 {
        Rgb8::from_xyz(*self)
    }

    /// Convert to xyY chromaticity coordinates
    ///
    /// Returns (x, y, Y). A zero sum (black) has no chromaticity of its own
    /// and reports the D65 white chromaticity; Y is always carried through.
    pub fn to_xyy(&self) -> (f64, f64, f64) {
        let sum = self.x + self.y + self.z;
        if sum == 0.0 {
            let (x, y) = D65.chromaticity();
            (x, y, self.y)
        } else {
            (self.x / sum, self.y / sum, self.y)
        }
    }

    /// Create XYZ from xyY chromaticity coordinates
    ///
    /// A chromaticity with y = 0 carries no luminance and yields black.
    pub fn from_xyy(x: f64, y: f64, big_y: f64) -> Self {
        if y == 0.0 {
            Self::default()
        } else {
            Self {
                x: (x * big_y) / y,
                y: big_y,
                z: ((1.0 - x - y) * big_y) / y,
            }
        }
    }

    /// Check if approximately equal to another XYZ color
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.x - other.x).abs() < epsilon
            && (self.y - other.y).abs() < epsilon
            && (self.z - other.z).abs() < epsilon
    }
}

impl From<[f64; 3]> for Xyz {
    fn from(arr: [f64; 3]) -> Self {
        Self::from_array(arr)
    }
}

impl From<Xyz> for [f64; 3] {
    fn from(xyz: Xyz) -> Self {
        xyz.to_array()
    }
}

impl TryFrom<&[f64]> for Xyz {
    type Error = Error;

    fn try_from(values: &[f64]) -> Result<Self, Self::Error> {
        error::expect_channels(values)?;
        Ok(Self::new(values[0], values[1], values[2]))
    }
}

impl From<Rgb8> for Xyz {
    fn from(rgb: Rgb8) -> Self {
        rgb.to_xyz()
    }
}

impl From<Lab> for Xyz {
    fn from(lab: Lab) -> Self {
        lab.to_xyz()
    }
}
