//! 3x3 matrices for the sRGB↔XYZ transforms
//!
//! Colors are treated as row vectors multiplied on the left:
//! `[X Y Z] = [r g b] · M`, so `out[i] = v[0]*m[0][i] + v[1]*m[1][i] + v[2]*m[2][i]`.

use std::ops::Index;

/// A 3x3 matrix, stored row-major: m[row][col]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix3x3 {
    /// Matrix elements in row-major order
    pub m: [[f64; 3]; 3],
}

impl Matrix3x3 {
    /// Create a new matrix from row-major elements
    #[inline]
    pub const fn new(m: [[f64; 3]; 3]) -> Self {
        Self { m }
    }

    /// Create an identity matrix
    #[inline]
    pub const fn identity() -> Self {
        Self {
            m: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
        }
    }

    /// Multiply a row vector by this matrix
    ///
    /// Returns v × M
    #[inline]
    pub fn multiply_row_vec(&self, v: [f64; 3]) -> [f64; 3] {
        let m = &self.m;
        [
            v[0] * m[0][0] + v[1] * m[1][0] + v[2] * m[2][0],
            v[0] * m[0][1] + v[1] * m[1][1] + v[2] * m[2][1],
            v[0] * m[0][2] + v[1] * m[1][2] + v[2] * m[2][2],
        ]
    }

    /// Multiply this matrix by another matrix
    ///
    /// Returns self × other
    pub fn multiply(&self, other: &Self) -> Self {
        let mut m = [[0.0; 3]; 3];
        for (i, row) in m.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = self.m[i][0] * other.m[0][j]
                    + self.m[i][1] * other.m[1][j]
                    + self.m[i][2] * other.m[2][j];
            }
        }
        Self { m }
    }

    /// Check if this matrix is approximately equal to another
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.m
            .iter()
            .flatten()
            .zip(other.m.iter().flatten())
            .all(|(a, b)| (a - b).abs() <= epsilon)
    }

    /// Check if this is approximately an identity matrix
    pub fn is_identity(&self, epsilon: f64) -> bool {
        self.approx_eq(&Self::identity(), epsilon)
    }
}

impl Default for Matrix3x3 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Index<usize> for Matrix3x3 {
    type Output = [f64; 3];

    fn index(&self, row: usize) -> &Self::Output {
        &self.m[row]
    }
}

// ============================================================================
// sRGB working space (D65)
// ============================================================================

/// sRGB to XYZ matrix, D65 adapted, row-vector convention
///
/// Row i holds the XYZ contribution of linear channel i (r, g, b).
pub const SRGB_TO_XYZ: Matrix3x3 = Matrix3x3::new([
    [0.412424, 0.212656, 0.0193324],
    [0.357579, 0.715158, 0.119193],
    [0.180464, 0.0721856, 0.950444],
]);

/// XYZ to sRGB matrix, row-vector convention
///
/// Inverse of [`SRGB_TO_XYZ`] to six significant digits.
pub const XYZ_TO_SRGB: Matrix3x3 = Matrix3x3::new([
    [3.24071, -0.969258, 0.0556352],
    [-1.53726, 1.87599, -0.203996],
    [-0.498571, 0.0415557, 1.05707],
]);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_vector_convention() {
        // Pure red picks out the first row
        let red = SRGB_TO_XYZ.multiply_row_vec([1.0, 0.0, 0.0]);
        assert_eq!(red, SRGB_TO_XYZ[0]);

        let m = Matrix3x3::new([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
        assert_eq!(m.multiply_row_vec([1.0, 1.0, 1.0]), [12.0, 15.0, 18.0]);
    }

    #[test]
    fn test_identity() {
        let v = [0.25, 0.5, 0.75];
        assert_eq!(Matrix3x3::identity().multiply_row_vec(v), v);
        assert!(Matrix3x3::default().is_identity(0.0));
    }

    #[test]
    fn test_srgb_matrices_are_inverse() {
        // Constants are rounded, so the product is only close to identity
        let product = SRGB_TO_XYZ.multiply(&XYZ_TO_SRGB);
        assert!(
            product.is_identity(1e-5),
            "SRGB_TO_XYZ × XYZ_TO_SRGB = {:?}",
            product
        );
    }

    #[test]
    fn test_white_row_sums() {
        // Linear white maps onto D65 (scaled to Y = 1)
        let white = SRGB_TO_XYZ.multiply_row_vec([1.0, 1.0, 1.0]);
        assert!((white[0] - 0.95047).abs() < 1e-4);
        assert!((white[1] - 1.0).abs() < 1e-5);
        assert!((white[2] - 1.08883).abs() < 1e-3);
    }
}
