//! CIELAB (L*a*b*) Color Space
//!
//! L*a*b* is a perceptually uniform color space where equal distances
//! correspond to roughly equal perceived color differences.
//!
//! - L*: Lightness (0 = black, 100 = white)
//! - a*: Green-red axis (negative = green, positive = red)
//! - b*: Blue-yellow axis (negative = blue, positive = yellow)
//!
//! All conversions are relative to the D65 white point.

use std::fmt;

use crate::color::{D65, Rgb8, Xyz};
use crate::error::{self, Error};

/// Ratio above which the forward nonlinearity uses the cube root
pub const LAB_EPSILON: f64 = 0.008856;

/// Slope of the linear segment near black
pub const LAB_SLOPE: f64 = 7.787;

/// Offset of the linear segment near black
pub const LAB_OFFSET: f64 = 16.0 / 116.0;

/// CIELAB color coordinates
///
/// Immutable once built: components are read through [`Lab::l`],
/// [`Lab::a`] and [`Lab::b`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Lab {
    l: f64,
    a: f64,
    b: f64,
}

impl Lab {
    /// Create a new Lab color from raw components
    #[inline]
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Create a new Lab color, rejecting NaN and infinite components
    pub fn try_new(l: f64, a: f64, b: f64) -> error::Result<Self> {
        Ok(Self {
            l: error::expect_finite("L", l)?,
            a: error::expect_finite("a", a)?,
            b: error::expect_finite("b", b)?,
        })
    }

    /// Create Lab from an array ordered L, a, b
    #[inline]
    pub const fn from_array(arr: [f64; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }

    /// Convert to an array ordered L, a, b
    #[inline]
    pub const fn to_array(&self) -> [f64; 3] {
        [self.l, self.a, self.b]
    }

    /// Lightness (0 to 100)
    #[inline]
    pub const fn l(&self) -> f64 {
        self.l
    }

    /// Green-red axis
    #[inline]
    pub const fn a(&self) -> f64 {
        self.a
    }

    /// Blue-yellow axis
    #[inline]
    pub const fn b(&self) -> f64 {
        self.b
    }

    /// Convert from 8-bit sRGB (through XYZ)
    pub fn from_rgb8(rgb: Rgb8) -> Self {
        Self::from_xyz(rgb.to_xyz())
    }

    /// Convert to 8-bit sRGB (through XYZ), clamping out-of-gamut colors
    pub fn to_rgb8(&self) -> Rgb8 {
        Rgb8::from_xyz(self.to_xyz())
    }

    /// Convert from XYZ relative to D65
    pub fn from_xyz(xyz: Xyz) -> Self {
        let white = D65.xyz;
        let fx = lab_f(xyz.x / white.x);
        let fy = lab_f(xyz.y / white.y);
        let fz = lab_f(xyz.z / white.z);

        Self {
            l: 116.0 * fy - 16.0,
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
        }
    }

    /// Convert to XYZ relative to D65
    pub fn to_xyz(&self) -> Xyz {
        let white = D65.xyz;
        let fy = (self.l + 16.0) / 116.0;
        let fx = self.a / 500.0 + fy;
        let fz = fy - self.b / 200.0;

        Xyz::new(
            lab_f_inv(fx) * white.x,
            lab_f_inv(fy) * white.y,
            lab_f_inv(fz) * white.z,
        )
    }

    /// Squared Euclidean distance to another Lab color
    ///
    /// This is **not** ΔE*ab: the square root is skipped, which keeps the
    /// ordering of distances but not their magnitude. Use it for sorting or
    /// nearest-color searches. Compare against published ΔE thresholds with
    /// [`Lab::delta_e76`] instead, or square the threshold.
    #[inline]
    pub fn distance_squared(&self, other: &Self) -> f64 {
        delta_e_squared(self, other)
    }

    /// CIE76 color difference (ΔE*ab), the Euclidean distance
    #[inline]
    pub fn delta_e76(&self, other: &Self) -> f64 {
        delta_e76(self, other)
    }

    /// Get chroma (colorfulness)
    #[inline]
    pub fn chroma(&self) -> f64 {
        self.a.hypot(self.b)
    }

    /// Get hue angle in radians
    #[inline]
    pub fn hue(&self) -> f64 {
        self.b.atan2(self.a)
    }

    /// Get hue angle in degrees, in [0, 360)
    #[inline]
    pub fn hue_degrees(&self) -> f64 {
        // rem_euclid rounds tiny negative angles up to exactly 360.0
        let h = self.hue().to_degrees().rem_euclid(360.0);
        if h >= 360.0 { 0.0 } else { h }
    }

    /// Check if approximately equal to another Lab color
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.l - other.l).abs() < epsilon
            && (self.a - other.a).abs() < epsilon
            && (self.b - other.b).abs() < epsilon
    }
}

/// Squared Euclidean distance between two Lab colors
///
/// `(L1-L2)² + (a1-a2)² + (b1-b2)²`, deliberately without the square root.
/// The result is symmetric, non-negative and zero only for equal colors,
/// but its units are squared: a ΔE*ab of 2.3 corresponds to ~5.29 here.
#[inline]
pub fn delta_e_squared(p: &Lab, v: &Lab) -> f64 {
    let dl = p.l - v.l;
    let da = p.a - v.a;
    let db = p.b - v.b;
    dl * dl + da * da + db * db
}

/// CIE76 color difference (ΔE*ab) between two Lab colors
#[inline]
pub fn delta_e76(p: &Lab, v: &Lab) -> f64 {
    delta_e_squared(p, v).sqrt()
}

/// Forward nonlinearity for XYZ → Lab, applied to a white-relative ratio
#[inline]
fn lab_f(t: f64) -> f64 {
    if t > LAB_EPSILON {
        t.cbrt()
    } else {
        LAB_SLOPE * t + LAB_OFFSET
    }
}

/// Inverse nonlinearity for Lab → XYZ
///
/// The branch is chosen on the cube of `f`, and the linear segment is
/// inverted on `f` itself.
#[inline]
fn lab_f_inv(f: f64) -> f64 {
    let cube = f * f * f;
    if cube > LAB_EPSILON {
        cube
    } else {
        (f - LAB_OFFSET) / LAB_SLOPE
    }
}

impl fmt::Display for Lab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Lab({}, {}, {})", self.l, self.a, self.b)
    }
}

impl From<[f64; 3]> for Lab {
    fn from(arr: [f64; 3]) -> Self {
        Self::from_array(arr)
    }
}

impl From<Lab> for [f64; 3] {
    fn from(lab: Lab) -> Self {
        lab.to_array()
    }
}

impl TryFrom<&[f64]> for Lab {
    type Error = Error;

    fn try_from(values: &[f64]) -> Result<Self, Self::Error> {
        error::expect_channels(values)?;
        Ok(Self::new(values[0], values[1], values[2]))
    }
}

impl From<Rgb8> for Lab {
    fn from(rgb: Rgb8) -> Self {
        Self::from_rgb8(rgb)
    }
}

impl From<[u8; 3]> for Lab {
    fn from(arr: [u8; 3]) -> Self {
        Self::from_rgb8(Rgb8::from_array(arr))
    }
}

impl From<Xyz> for Lab {
    fn from(xyz: Xyz) -> Self {
        Self::from_xyz(xyz)
    }
}
