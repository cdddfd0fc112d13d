//! Domain error types
//!
//! This module defines the error hierarchy for PiiScout. All errors are
//! domain-specific and don't expose third-party driver types.

use thiserror::Error;

/// Main PiiScout error type
///
/// This is the primary error type used throughout the application.
#[derive(Debug, Error)]
pub enum PiiScoutError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Keyword list could not be read
    #[error("Keyword list error: {0}")]
    Keywords(String),

    /// Catalog (database introspection) errors
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Report rendering or writing errors
    #[error("Report error: {0}")]
    Report(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

/// Errors raised by a dialect backend while talking to a database server
///
/// These never cross the catalog provider boundary: the provider logs them
/// to its error sink and degrades to an empty result.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Failed to open a connection
    #[error("Failed to connect: {0}")]
    ConnectionFailed(String),

    /// A catalog or sample query failed
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Connection setup did not finish in time
    #[error("Connection timed out after {0}s")]
    Timeout(u64),

    /// A returned value could not be decoded
    #[error("Failed to decode value: {0}")]
    Decode(String),
}

impl From<std::io::Error> for PiiScoutError {
    fn from(err: std::io::Error) -> Self {
        PiiScoutError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for PiiScoutError {
    fn from(err: serde_json::Error) -> Self {
        PiiScoutError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for PiiScoutError {
    fn from(err: toml::de::Error) -> Self {
        PiiScoutError::Configuration(format!("TOML parse error: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PiiScoutError::Configuration("Invalid config".to_string());
        assert_eq!(err.to_string(), "Configuration error: Invalid config");
    }

    #[test]
    fn test_catalog_error_conversion() {
        let catalog_err = CatalogError::ConnectionFailed("Access denied".to_string());
        let err: PiiScoutError = catalog_err.into();
        assert!(matches!(err, PiiScoutError::Catalog(_)));
        assert_eq!(
            err.to_string(),
            "Catalog error: Failed to connect: Access denied"
        );
    }

    #[test]
    fn test_timeout_display() {
        let err = CatalogError::Timeout(10);
        assert_eq!(err.to_string(), "Connection timed out after 10s");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let err: PiiScoutError = io_err.into();
        assert!(matches!(err, PiiScoutError::Io(_)));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("invalid = toml = syntax").unwrap_err();
        let err: PiiScoutError = toml_err.into();
        assert!(matches!(err, PiiScoutError::Configuration(_)));
        assert!(err.to_string().contains("TOML parse error"));
    }

    #[test]
    fn test_errors_implement_std_error() {
        let err = PiiScoutError::Report("Test error".to_string());
        let _: &dyn std::error::Error = &err;

        let err = CatalogError::QueryFailed("Test error".to_string());
        let _: &dyn std::error::Error = &err;
    }
}
