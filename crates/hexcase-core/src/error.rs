//! Error handling for HexCase
//!
//! Configuration errors shared across the workspace. Uses `thiserror`.

use thiserror::Error;

/// Configuration error type
///
/// Raised while turning user-facing settings into resolved case parameters.
/// Every variant is fatal: no geometry is generated once one is reported.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The hole grid dimension must be odd so the hexagon has a centre row
    #[error("Grid dimension must be an odd number >= 1, got {0}")]
    EvenDimension(u32),

    /// A numeric hole diameter was given without a battery height
    #[error("A numeric hole diameter requires an explicit height")]
    MissingHeight,

    /// The hole value is neither a known preset nor a number
    #[error("Unknown battery preset: {0}")]
    UnknownPreset(String),

    /// A value failed validation
    #[error("Invalid value for '{name}': {reason}")]
    InvalidValue {
        /// The option name.
        name: String,
        /// Why the value was rejected.
        reason: String,
    },
}

impl ConfigError {
    /// Shorthand for [`ConfigError::InvalidValue`]
    pub fn invalid(name: impl Into<String>, reason: impl Into<String>) -> Self {
        ConfigError::InvalidValue {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        assert_eq!(
            ConfigError::EvenDimension(4).to_string(),
            "Grid dimension must be an odd number >= 1, got 4"
        );
        assert_eq!(
            ConfigError::invalid("kerf", "must not be negative").to_string(),
            "Invalid value for 'kerf': must not be negative"
        );
    }
}
