//! Reference white
//!
//! The working space is sRGB, so the only illuminant is D65. Coordinates
//! are scaled so that Y of the white point is 100, matching the scale
//! produced by [`Rgb8::to_xyz`](crate::Rgb8::to_xyz).

use crate::color::Xyz;

/// A white point definition
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WhitePoint {
    /// Name of the illuminant
    pub name: &'static str,
    /// CIE XYZ coordinates (Y = 100)
    pub xyz: Xyz,
}

impl WhitePoint {
    /// Create a new white point
    pub const fn new(name: &'static str, x: f64, y: f64, z: f64) -> Self {
        Self {
            name,
            xyz: Xyz::new(x, y, z),
        }
    }

    /// Get the chromaticity coordinates (x, y)
    pub fn chromaticity(&self) -> (f64, f64) {
        let sum = self.xyz.x + self.xyz.y + self.xyz.z;
        (self.xyz.x / sum, self.xyz.y / sum)
    }
}

/// CIE Standard Illuminant D65 (Noon Daylight), 2° observer
///
/// Correlated Color Temperature: ~6504K
pub const D65: WhitePoint = WhitePoint::new("D65", 95.047, 100.0, 108.883);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_d65_values() {
        assert_eq!(D65.name, "D65");
        assert_eq!(D65.xyz.to_array(), [95.047, 100.0, 108.883]);
    }

    #[test]
    fn test_chromaticity() {
        // D65 chromaticity should be approximately (0.3127, 0.3290)
        let (x, y) = D65.chromaticity();
        assert!((x - 0.3127).abs() < 0.001, "x = {}", x);
        assert!((y - 0.3290).abs() < 0.001, "y = {}", y);
    }
}
