//! # cielab-tests
//!
//! Parity and property testing for cielab-core.
//!
//! This crate provides:
//! - Wrappers around `palette` as an independent reference implementation
//! - Accuracy statistics using CIEDE2000
//! - Reproducible sample colors
//!
//! ## Test Categories
//!
//! 1. **Parity**: sRGB ↔ Lab against palette
//! 2. **Round trips**: RGB → XYZ → RGB, RGB → Lab → RGB (all 16.7M colors)
//! 3. **Properties**: distance metric laws, clamping, threshold seams
//! 4. **Serialization**: the `serde` feature

pub mod accuracy;
pub mod patterns;
pub mod reference;

pub use accuracy::{DeltaEStats, compare_rgb_to_lab, max_channel_diff};
pub use patterns::{SamplePattern, generate_colors, random_labs};
