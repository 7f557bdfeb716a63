//! Error types for the HR overtime toolkit.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while calculating overtime,
//! registering employees, or loading configuration.

use thiserror::Error;

/// The main error type for the HR overtime toolkit.
///
/// The core logic only ever raises [`HrError::InvalidInput`]; the
/// configuration variants come from loading the YAML config at startup.
///
/// # Example
///
/// ```
/// use hr_overtime::error::HrError;
///
/// let error = HrError::InvalidInput {
///     field: "salario".to_string(),
///     message: "must not be negative".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid input for 'salario': must not be negative");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HrError {
    /// A caller-supplied value could not be parsed or was out of range.
    #[error("Invalid input for '{field}': {message}")]
    InvalidInput {
        /// The name of the offending input field.
        field: String,
        /// A description of what made the value invalid.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

impl HrError {
    /// Shorthand for building an [`HrError::InvalidInput`].
    pub fn invalid_input(field: impl Into<String>, message: impl Into<String>) -> Self {
        HrError::InvalidInput {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// A type alias for Results that return HrError.
pub type HrResult<T> = Result<T, HrError>;
