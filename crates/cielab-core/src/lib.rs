//! # cielab - sRGB, CIE XYZ and CIE L*a*b* conversions
//!
//! Converts 8-bit sRGB colors to and from CIE XYZ and CIE L*a*b* under the
//! D65 illuminant, and measures how far apart two L*a*b* colors are.
//!
//! ## Pipeline
//!
//! - sRGB → XYZ: linearize with the sRGB curve, scale to 0..100, multiply by
//!   the sRGB→XYZ matrix
//! - XYZ → L*a*b*: divide by D65 white, cube root (linear near black)
//! - and the inverses, with sRGB output clamped to 0..=255
//!
//! Everything is a pure function over `Copy` values. The matrices and the
//! reference white are `const`.
//!
//! ## Quick Start
//!
//! ```
//! use cielab_core::{Lab, Rgb8};
//!
//! let orange = Lab::from_rgb8(Rgb8::new(255, 128, 0));
//! let amber = Lab::from_rgb8(Rgb8::new(255, 191, 0));
//!
//! // Squared distance: fine for ranking, not a ΔE value
//! let d2 = orange.distance_squared(&amber);
//! assert!((d2.sqrt() - orange.delta_e76(&amber)).abs() < 1e-9);
//!
//! assert_eq!(orange.to_rgb8(), Rgb8::new(255, 128, 0));
//! ```

pub mod color;
pub mod convert;
pub mod error;
pub mod math;

pub use color::{D65, Lab, Rgb8, WhitePoint, Xyz, delta_e_squared, delta_e76};
pub use convert::{lab_to_rgb, lab_to_xyz, rgb_to_lab, rgb_to_xyz, xyz_to_lab, xyz_to_rgb};
pub use error::{Error, Result};

/// Version of cielab
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
