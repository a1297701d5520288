//! Numeric building blocks for the sRGB working space
//!
//! - 3x3 matrices for RGB↔XYZ, applied to row vectors
//! - The sRGB transfer function

pub mod gamma;
pub mod matrix;

pub use gamma::{srgb_gamma_decode, srgb_gamma_encode};
pub use matrix::{Matrix3x3, SRGB_TO_XYZ, XYZ_TO_SRGB};
