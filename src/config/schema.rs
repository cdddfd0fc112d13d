//! Configuration schema types
//!
//! Every section is optional in the TOML file; missing values fall back to
//! the defaults defined here. Connection details that are still missing
//! after the file, the environment and the command line are collected by
//! interactive prompts in the `scan` command.

use crate::config::SecretString;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Database dialect spoken by the catalog backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// MySQL / MariaDB
    #[default]
    #[value(name = "mysql")]
    MySql,
    /// PostgreSQL
    #[value(name = "postgresql", alias = "postgres")]
    PostgreSql,
}

impl Dialect {
    /// Port used when none is configured
    pub fn default_port(self) -> u16 {
        match self {
            Dialect::MySql => 3306,
            Dialect::PostgreSql => 5432,
        }
    }

    /// Server-owned databases that are never scanned
    pub fn system_databases(self) -> &'static [&'static str] {
        match self {
            Dialect::MySql => &["information_schema", "performance_schema", "mysql"],
            Dialect::PostgreSql => &["postgres", "information_schema", "template0", "template1"],
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dialect::MySql => write!(f, "MySQL"),
            Dialect::PostgreSql => write!(f, "PostgreSQL"),
        }
    }
}

/// How the summary section is computed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SummaryMode {
    /// Re-fetch tables and columns from the catalog for the summary
    #[default]
    Rescan,
    /// Aggregate the findings of the detailed pass
    Aggregate,
}

impl fmt::Display for SummaryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SummaryMode::Rescan => write!(f, "rescan"),
            SummaryMode::Aggregate => write!(f, "aggregate"),
        }
    }
}

/// Main PiiScout configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PiiScoutConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Database server connection
    #[serde(default)]
    pub connection: ConnectionConfig,

    /// Scan behavior
    #[serde(default)]
    pub scan: ScanConfig,

    /// Report output
    #[serde(default)]
    pub report: ReportConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl PiiScoutConfig {
    /// Validates the structure of the configuration
    ///
    /// Connection details may still be missing at this point; use
    /// [`PiiScoutConfig::validate_for_scan`] before starting a scan.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.connection.validate()?;
        self.scan.validate()?;
        self.report.validate()?;
        self.logging.validate()?;
        Ok(())
    }

    /// Validates that everything a scan needs is present
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or incomplete
    pub fn validate_for_scan(&self) -> Result<(), String> {
        self.validate()?;

        let missing = self.missing_scan_fields();
        if !missing.is_empty() {
            return Err(format!(
                "missing required settings: {}",
                missing.join(", ")
            ));
        }

        Ok(())
    }

    /// Settings a scan requires that are not set yet
    pub fn missing_scan_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.connection.host.trim().is_empty() {
            missing.push("connection.host");
        }
        if self.connection.user.trim().is_empty() {
            missing.push("connection.user");
        }
        if self
            .scan
            .keywords_path
            .as_deref()
            .map_or(true, |p| p.trim().is_empty())
        {
            missing.push("scan.keywords_path");
        }
        missing
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.to_lowercase().as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Database server connection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionConfig {
    /// Database dialect (mysql or postgresql)
    #[serde(default)]
    pub dialect: Dialect,

    /// Server hostname
    #[serde(default)]
    pub host: String,

    /// Server port; the dialect default when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,

    /// Login user
    #[serde(default)]
    pub user: String,

    /// Login password
    /// Stored securely in memory and automatically zeroized on drop
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<SecretString>,

    /// Database used to enumerate databases (PostgreSQL only)
    #[serde(default = "default_maintenance_database")]
    pub maintenance_database: String,

    /// Connection setup timeout in seconds
    #[serde(default = "default_connect_timeout_seconds")]
    pub connect_timeout_seconds: u64,

    /// Keep one connection per database open for the whole scan instead of
    /// reconnecting for every catalog call
    #[serde(default)]
    pub reuse_connections: bool,
}

impl ConnectionConfig {
    /// Effective port
    pub fn port(&self) -> u16 {
        self.port.unwrap_or_else(|| self.dialect.default_port())
    }

    /// Connection target without credentials, for logs and console output
    pub fn redacted_url(&self) -> String {
        let scheme = match self.dialect {
            Dialect::MySql => "mysql",
            Dialect::PostgreSql => "postgresql",
        };
        format!("{}://{}:***@{}:{}", scheme, self.user, self.host, self.port())
    }

    fn validate(&self) -> Result<(), String> {
        if self.port == Some(0) {
            return Err("connection.port must be > 0".to_string());
        }

        if self.connect_timeout_seconds == 0 || self.connect_timeout_seconds > 300 {
            return Err(format!(
                "connection.connect_timeout_seconds must be between 1 and 300, got {}",
                self.connect_timeout_seconds
            ));
        }

        if self.dialect == Dialect::PostgreSql && self.maintenance_database.trim().is_empty() {
            return Err("connection.maintenance_database cannot be empty".to_string());
        }

        Ok(())
    }
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            dialect: Dialect::default(),
            host: String::new(),
            port: None,
            user: String::new(),
            password: None,
            maintenance_database: default_maintenance_database(),
            connect_timeout_seconds: default_connect_timeout_seconds(),
            reuse_connections: false,
        }
    }
}

/// Scan behavior configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Path to the newline-delimited keyword list
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords_path: Option<String>,

    /// Rows sampled from every PII table
    #[serde(default = "default_sample_limit")]
    pub sample_limit: usize,

    /// Drop blank lines from the keyword list instead of keeping them as
    /// empty keywords (an empty keyword matches every column)
    #[serde(default)]
    pub skip_blank_keywords: bool,

    /// How the summary section is computed
    #[serde(default)]
    pub summary_mode: SummaryMode,

    /// Databases excluded in addition to the dialect's system databases
    #[serde(default)]
    pub exclude_databases: Vec<String>,
}

impl ScanConfig {
    fn validate(&self) -> Result<(), String> {
        if self.sample_limit == 0 || self.sample_limit > 1000 {
            return Err(format!(
                "scan.sample_limit must be between 1 and 1000, got {}",
                self.sample_limit
            ));
        }
        Ok(())
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            keywords_path: None,
            sample_limit: default_sample_limit(),
            skip_blank_keywords: false,
            summary_mode: SummaryMode::default(),
            exclude_databases: Vec::new(),
        }
    }
}

/// Report output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Directory the report files are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Also write the findings as JSON next to the text report
    #[serde(default)]
    pub write_json: bool,
}

impl ReportConfig {
    fn validate(&self) -> Result<(), String> {
        if self.output_dir.trim().is_empty() {
            return Err("report.output_dir cannot be empty".to_string());
        }
        Ok(())
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            write_json: false,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Local log directory
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path cannot be empty when local logging is enabled".to_string());
        }

        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_maintenance_database() -> String {
    "postgres".to_string()
}

fn default_connect_timeout_seconds() -> u64 {
    10
}

fn default_sample_limit() -> usize {
    crate::core::scan::DEFAULT_SAMPLE_LIMIT
}

fn default_output_dir() -> String {
    ".".to_string()
}

fn default_local_path() -> String {
    "./logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}
