//! Error types for the cache crate
//!
//! Cache operations themselves are total: misses and expirations are
//! reported as `None`/`false`, never as errors. The only fallible surface
//! is loading configuration.

use thiserror::Error;

// == Config Error Enum ==
/// Errors raised while loading cache configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Variable is set but does not parse as a number
    #[error("Invalid value for {var}: {value:?}")]
    InvalidValue { var: String, value: String },

    /// Variable is set to zero where zero makes no sense
    #[error("{var} must be greater than zero")]
    ZeroValue { var: String },
}

// == Result Type Alias ==
/// Convenience Result type for configuration loading.
pub type Result<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ConfigError::InvalidValue {
            var: "CACHE_MAX_SIZE".to_string(),
            value: "lots".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid value for CACHE_MAX_SIZE: \"lots\"");

        let err = ConfigError::ZeroValue {
            var: "CACHE_MAX_SIZE".to_string(),
        };
        assert_eq!(err.to_string(), "CACHE_MAX_SIZE must be greater than zero");
    }
}
