//! Custom error types for apportion-cli
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.
//!
//! The allocation engine itself never fails: invalid edits are no-ops and a
//! cleared budget normalizes to zero. These errors cover the surrounding
//! layers (configuration, export, CLI argument validation, terminal setup).

use thiserror::Error;

/// The main error type for apportion-cli operations
#[derive(Error, Debug)]
pub enum ApportionError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML serialization errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// Validation errors for CLI input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// TUI errors
    #[error("TUI error: {0}")]
    Tui(String),
}

impl ApportionError {
    /// Create a validation error for an unknown category key
    pub fn unknown_category(key: impl Into<String>) -> Self {
        Self::Validation(format!("Unknown category key: {}", key.into()))
    }

    /// Create a validation error for an unsupported currency code
    pub fn unknown_currency(code: impl Into<String>) -> Self {
        Self::Validation(format!(
            "Unsupported currency code: {} (expected RUB, USD or EUR)",
            code.into()
        ))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for ApportionError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ApportionError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for ApportionError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err.to_string())
    }
}

/// Result type alias for apportion-cli operations
pub type ApportionResult<T> = Result<T, ApportionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ApportionError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_unknown_category_error() {
        let err = ApportionError::unknown_category("vacation");
        assert_eq!(err.to_string(), "Validation error: Unknown category key: vacation");
        assert!(err.is_validation());
    }

    #[test]
    fn test_unknown_currency_error() {
        let err = ApportionError::unknown_currency("GBP");
        assert!(err.to_string().contains("GBP"));
        assert!(err.is_validation());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let apportion_err: ApportionError = io_err.into();
        assert!(matches!(apportion_err, ApportionError::Io(_)));
    }
}
