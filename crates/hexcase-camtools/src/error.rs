//! Error types for the CAM tools crate.
//!
//! This module provides structured error types for parameter validation
//! and the geometry feasibility search.

use std::io;
use thiserror::Error;

/// Errors that can occur during CAM tool operations.
#[derive(Error, Debug)]
pub enum CamToolError {
    /// The padding search did not reach a cuttable corner leg.
    #[error(
        "No feasible geometry after {iterations} padding increases (exterior leg {exterior_leg:.3} mm)"
    )]
    Infeasible { iterations: u32, exterior_leg: f64 },

    /// A parameter validation error occurred.
    #[error("Parameter error: {0}")]
    Parameter(#[from] ParameterError),

    /// I/O error while writing generated output.
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),
}

/// Errors related to CAM tool parameter validation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParameterError {
    /// A parameter value is out of the valid range.
    #[error("Parameter '{name}' out of range: {value} (valid: {min}..{max})")]
    OutOfRange {
        name: String,
        value: f64,
        min: f64,
        max: f64,
    },

    /// A parameter value is invalid.
    #[error("Invalid value for '{name}': {reason}")]
    InvalidValue { name: String, reason: String },

    /// Dimensions are invalid (zero or negative).
    #[error("Invalid dimensions: {0}")]
    InvalidDimensions(String),
}

/// Result type alias for CAM tool operations.
pub type CamToolResult<T> = Result<T, CamToolError>;

/// Result type alias for parameter validation.
pub type ParameterResult<T> = Result<T, ParameterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cam_tool_error_display() {
        let err = CamToolError::Infeasible {
            iterations: 1000,
            exterior_leg: 0.55,
        };
        assert_eq!(
            err.to_string(),
            "No feasible geometry after 1000 padding increases (exterior leg 0.550 mm)"
        );
    }

    #[test]
    fn test_parameter_error_display() {
        let err = ParameterError::OutOfRange {
            name: "kerf".to_string(),
            value: 4.0,
            min: 0.0,
            max: 3.0,
        };
        assert_eq!(
            err.to_string(),
            "Parameter 'kerf' out of range: 4 (valid: 0..3)"
        );

        let err = ParameterError::InvalidDimensions("thickness must be positive".to_string());
        assert_eq!(err.to_string(), "Invalid dimensions: thickness must be positive");
    }

    #[test]
    fn test_error_conversion() {
        let param_err = ParameterError::InvalidValue {
            name: "dimension".to_string(),
            reason: "must be odd".to_string(),
        };
        let cam_err: CamToolError = param_err.into();
        assert!(matches!(cam_err, CamToolError::Parameter(_)));

        let io_err = io::Error::new(io::ErrorKind::BrokenPipe, "closed");
        let cam_err: CamToolError = io_err.into();
        assert!(matches!(cam_err, CamToolError::IoError(_)));
    }
}
