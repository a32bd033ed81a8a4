//! Error types for the filter bank core and its configuration layer.

use thiserror::Error;

/// Result alias used across the core operations.
pub type Result<T> = std::result::Result<T, FilterBankError>;

/// Precondition violations surfaced by the core.
///
/// Every variant is a caller error: the core performs no I/O, so nothing
/// here is transient or worth retrying.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FilterBankError {
    /// Vector length is zero or not a power of two.
    #[error("invalid vector length {len}: must be a non-zero power of two")]
    InvalidLength { len: usize },

    /// Two buffers that must agree in length do not.
    #[error("length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// Non-positive depth, mutation count or precision.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

impl FilterBankError {
    /// Fail with `InvalidLength` unless `len` is a non-zero power of two.
    pub(crate) fn check_power_of_two(len: usize) -> Result<()> {
        if len.is_power_of_two() {
            Ok(())
        } else {
            Err(Self::InvalidLength { len })
        }
    }

    /// Fail with `LengthMismatch` unless the lengths agree.
    pub(crate) fn check_same_len(expected: usize, actual: usize) -> Result<()> {
        if expected == actual {
            Ok(())
        } else {
            Err(Self::LengthMismatch { expected, actual })
        }
    }
}

/// Errors raised while loading or saving a [`Config`](crate::Config).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Invalid(#[from] FilterBankError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_power_of_two_check() {
        assert!(FilterBankError::check_power_of_two(1).is_ok());
        assert!(FilterBankError::check_power_of_two(256).is_ok());
        assert_eq!(
            FilterBankError::check_power_of_two(0),
            Err(FilterBankError::InvalidLength { len: 0 })
        );
        assert_eq!(
            FilterBankError::check_power_of_two(12),
            Err(FilterBankError::InvalidLength { len: 12 })
        );
    }

    #[test]
    fn test_error_messages() {
        let err = FilterBankError::LengthMismatch { expected: 8, actual: 4 };
        assert_eq!(err.to_string(), "length mismatch: expected 8, got 4");

        let err: ConfigError = FilterBankError::InvalidConfiguration("depth must be > 0".into()).into();
        assert_eq!(err.to_string(), "invalid configuration: depth must be > 0");
    }
}
