//! sRGB transfer function
//!
//! IEC 61966-2-1 piecewise curve: a linear segment near black and a 2.4
//! power segment elsewhere. Both directions keep negative inputs on the
//! linear segment, so `powf` never sees a negative base.

/// Encoded values at or below this use the linear segment when decoding
pub const SRGB_DECODE_THRESHOLD: f64 = 0.04045;

/// Linear values at or below this use the linear segment when encoding
pub const SRGB_ENCODE_THRESHOLD: f64 = 0.0031308;

/// Slope of the linear segment
pub const SRGB_LINEAR_SLOPE: f64 = 12.92;

/// sRGB gamma decode (encoded → linear)
///
/// Converts an sRGB-encoded value in [0,1] to linear light in [0,1].
#[inline]
pub fn srgb_gamma_decode(encoded: f64) -> f64 {
    if encoded <= SRGB_DECODE_THRESHOLD {
        encoded / SRGB_LINEAR_SLOPE
    } else {
        ((encoded + 0.055) / 1.055).powf(2.4)
    }
}

/// sRGB gamma encode (linear → encoded)
///
/// Converts linear light to an sRGB-encoded value. The result is not
/// clamped; out-of-gamut linear values produce encoded values outside [0,1].
#[inline]
pub fn srgb_gamma_encode(linear: f64) -> f64 {
    if linear <= SRGB_ENCODE_THRESHOLD {
        linear * SRGB_LINEAR_SLOPE
    } else {
        1.055 * linear.powf(1.0 / 2.4) - 0.055
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_srgb_gamma_roundtrip() {
        for i in 0..=255 {
            let encoded = i as f64 / 255.0;
            let linear = srgb_gamma_decode(encoded);
            let roundtrip = srgb_gamma_encode(linear);
            assert!(
                (roundtrip - encoded).abs() < 1e-10,
                "sRGB roundtrip failed at {}: {}",
                i,
                roundtrip
            );
        }
    }

    #[test]
    fn test_srgb_known_values() {
        assert!(srgb_gamma_decode(0.0).abs() < EPSILON);
        assert!((srgb_gamma_decode(1.0) - 1.0).abs() < EPSILON);

        // Mid-gray: 0.5 encoded is ~0.214 linear
        let mid = srgb_gamma_decode(0.5);
        assert!(mid > 0.21 && mid < 0.22, "Mid-gray decode: {}", mid);

        // Threshold itself is on the linear segment
        assert_eq!(
            srgb_gamma_decode(SRGB_DECODE_THRESHOLD),
            SRGB_DECODE_THRESHOLD / SRGB_LINEAR_SLOPE
        );
        assert_eq!(
            srgb_gamma_encode(SRGB_ENCODE_THRESHOLD),
            SRGB_ENCODE_THRESHOLD * SRGB_LINEAR_SLOPE
        );
    }

    #[test]
    fn test_segments_meet() {
        // Both pieces agree at the seam to within the rounding of the constants
        let below = srgb_gamma_decode(SRGB_DECODE_THRESHOLD);
        let above = srgb_gamma_decode(SRGB_DECODE_THRESHOLD + 1e-12);
        assert!((below - above).abs() < 1e-7, "{} vs {}", below, above);

        let below = srgb_gamma_encode(SRGB_ENCODE_THRESHOLD);
        let above = srgb_gamma_encode(SRGB_ENCODE_THRESHOLD + 1e-12);
        assert!((below - above).abs() < 1e-6, "{} vs {}", below, above);
    }

    #[test]
    fn test_negative_stays_linear() {
        assert_eq!(srgb_gamma_encode(-0.5), -0.5 * SRGB_LINEAR_SLOPE);
        assert_eq!(srgb_gamma_decode(-0.5), -0.5 / SRGB_LINEAR_SLOPE);
    }
}
