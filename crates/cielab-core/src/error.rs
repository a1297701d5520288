//! Error types for cielab
//!
//! The conversions themselves are total. Errors only come out of the
//! checked constructors that take untrusted slices or raw floats.

use thiserror::Error;

/// Result type for cielab operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when building color values from untrusted input
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// Slice did not hold exactly one value per channel
    #[error("Channel count mismatch: expected {expected}, got {actual}")]
    ChannelCount { expected: usize, actual: usize },

    /// NaN or infinite component
    #[error("Non-finite {component} component: {value}")]
    NonFinite { component: &'static str, value: f64 },
}

/// Check that a slice carries exactly three channels
pub(crate) fn expect_channels<T>(values: &[T]) -> Result<()> {
    if values.len() == 3 {
        Ok(())
    } else {
        Err(Error::ChannelCount {
            expected: 3,
            actual: values.len(),
        })
    }
}

/// Check that a component is finite
pub(crate) fn expect_finite(component: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::NonFinite { component, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_count() {
        assert!(expect_channels(&[1u8, 2, 3]).is_ok());
        assert_eq!(
            expect_channels(&[1.0, 2.0]),
            Err(Error::ChannelCount {
                expected: 3,
                actual: 2
            })
        );
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(expect_finite("L", 42.0), Ok(42.0));
        assert!(matches!(
            expect_finite("a", f64::NAN),
            Err(Error::NonFinite { component: "a", .. })
        ));
        assert!(expect_finite("b", f64::INFINITY).is_err());
    }

    #[test]
    fn test_display() {
        let err = Error::ChannelCount {
            expected: 3,
            actual: 4,
        };
        assert_eq!(err.to_string(), "Channel count mismatch: expected 3, got 4");
    }
}
