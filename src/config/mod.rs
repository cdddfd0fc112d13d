//! Configuration management for PiiScout.
//!
//! # Overview
//!
//! PiiScout reads an optional TOML file with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - Default values for every setting
//! - `PIISCOUT_<SECTION>_<KEY>` environment overrides
//! - Secret handling for the database password
//!
//! # Configuration Structure
//!
//! - [`ApplicationConfig`] - Application settings (log level)
//! - [`ConnectionConfig`] - Dialect, host, credentials, connection reuse
//! - [`ScanConfig`] - Keyword list, sample size, summary mode
//! - [`ReportConfig`] - Output directory and JSON export
//! - [`LoggingConfig`] - Local file logging
//!
//! # Example Configuration
//!
//! ```toml
//! [connection]
//! dialect = "postgresql"
//! host = "pg.internal"
//! user = "auditor"
//! password = "${PIISCOUT_DB_PASSWORD}"
//!
//! [scan]
//! keywords_path = "keywords.txt"
//! sample_limit = 5
//! ```
//!
//! ```rust,no_run
//! use piiscout::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("piiscout.toml")?;
//! println!("Scanning {} on {}", config.connection.dialect, config.connection.host);
//! # Ok(())
//! # }
//! ```

pub mod loader;
pub mod schema;
pub mod secret;

pub use loader::{load_config, resolve_config, DEFAULT_CONFIG_FILE};
pub use schema::{
    ApplicationConfig, ConnectionConfig, Dialect, LoggingConfig, PiiScoutConfig, ReportConfig,
    ScanConfig, SummaryMode,
};
pub use secret::{secret_string, SecretString, SecretValue};
