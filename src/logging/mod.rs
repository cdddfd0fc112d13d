//! Logging and observability
//!
//! This module provides structured logging with support for:
//! - Console output on stderr
//! - Configurable log levels, overridable with `RUST_LOG`
//! - JSON file logging with rotation
//!
//! # Example
//!
//! ```no_run
//! use piiscout::logging::init_logging;
//! use piiscout::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

pub use structured::{init_logging, LoggingGuard};

/// Log the start of a scan
///
/// # Example
///
/// ```no_run
/// use piiscout::log_scan_start;
/// use piiscout::config::Dialect;
///
/// log_scan_start!(Dialect::MySql, "db.internal", 12);
/// ```
#[macro_export]
macro_rules! log_scan_start {
    ($dialect:expr, $host:expr, $keyword_count:expr) => {
        tracing::info!(
            dialect = %$dialect,
            host = %$host,
            keywords = $keyword_count,
            "Starting PII scan"
        );
    };
}

/// Log the verdict for one table
///
/// # Example
///
/// ```no_run
/// use piiscout::log_table_verdict;
///
/// log_table_verdict!("shop", "users", true, 5);
/// ```
#[macro_export]
macro_rules! log_table_verdict {
    ($database:expr, $table:expr, $is_pii:expr, $sampled:expr) => {
        tracing::debug!(
            database = %$database,
            table = %$table,
            is_pii = $is_pii,
            sampled_rows = $sampled,
            "Table scanned"
        );
    };
}

/// Log a catalog call that failed and was degraded to an empty result
///
/// # Example
///
/// ```no_run
/// use piiscout::log_catalog_failure;
/// use piiscout::adapters::catalog::CatalogOperation;
/// use piiscout::config::Dialect;
/// use piiscout::domain::{CatalogError, PiiScoutError};
///
/// let error: PiiScoutError = CatalogError::ConnectionFailed("refused".to_string()).into();
/// log_catalog_failure!(Dialect::MySql, CatalogOperation::ListDatabases, &error);
/// ```
#[macro_export]
macro_rules! log_catalog_failure {
    ($dialect:expr, $operation:expr, $error:expr) => {
        tracing::error!(
            dialect = %$dialect,
            operation = $operation.name(),
            database = $operation.database().unwrap_or_default(),
            table = $operation.table().unwrap_or_default(),
            error = %$error,
            "Error connecting to {} server: {}",
            $dialect,
            $error
        );
    };
}
