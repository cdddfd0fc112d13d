//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::{Dialect, PiiScoutConfig, SummaryMode};
use super::secret::secret_string;
use crate::domain::errors::PiiScoutError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Configuration file looked up in the working directory when none is given
pub const DEFAULT_CONFIG_FILE: &str = "piiscout.toml";

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into PiiScoutConfig
/// 4. Applies environment variable overrides (PIISCOUT_* prefix)
/// 5. Validates the configuration structure
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - Environment variable substitution fails
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use piiscout::config::loader::load_config;
///
/// let config = load_config("piiscout.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<PiiScoutConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(PiiScoutError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        PiiScoutError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: PiiScoutConfig = toml::from_str(&contents)
        .map_err(|e| PiiScoutError::Configuration(format!("Failed to parse TOML: {e}")))?;

    apply_env_overrides(&mut config)?;

    config.validate().map_err(|e| {
        PiiScoutError::Configuration(format!("Configuration validation failed: {e}"))
    })?;

    Ok(config)
}

/// Resolves the configuration for a command
///
/// An explicit path must exist. Without one, `piiscout.toml` in the working
/// directory is used when present, otherwise the built-in defaults (with
/// `PIISCOUT_*` overrides applied).
///
/// # Errors
///
/// Returns an error if an explicit file is missing or any file fails to load.
pub fn resolve_config(path: Option<&str>) -> Result<PiiScoutConfig> {
    match path {
        Some(path) => load_config(path),
        None if Path::new(DEFAULT_CONFIG_FILE).exists() => load_config(DEFAULT_CONFIG_FILE),
        None => {
            let mut config = PiiScoutConfig::default();
            apply_env_overrides(&mut config)?;
            config.validate().map_err(|e| {
                PiiScoutError::Configuration(format!("Configuration validation failed: {e}"))
            })?;
            Ok(config)
        }
    }
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are copied untouched. All missing variables are reported
/// together.
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| PiiScoutError::Other(format!("Invalid substitution pattern: {e}")))?;
    let mut lines = Vec::new();
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            lines.push(line.to_string());
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{var_name}}}");
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        lines.push(processed_line);
    }

    if !missing_vars.is_empty() {
        return Err(PiiScoutError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(lines.join("\n"))
}

/// Applies environment variable overrides using PIISCOUT_* prefix
///
/// Environment variables follow the pattern: PIISCOUT_<SECTION>_<KEY>
/// For example: PIISCOUT_CONNECTION_HOST, PIISCOUT_SCAN_SAMPLE_LIMIT
fn apply_env_overrides(config: &mut PiiScoutConfig) -> Result<()> {
    // Application overrides
    if let Ok(val) = std::env::var("PIISCOUT_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    // Connection overrides
    if let Ok(val) = std::env::var("PIISCOUT_CONNECTION_DIALECT") {
        config.connection.dialect = match val.to_lowercase().as_str() {
            "mysql" => Dialect::MySql,
            "postgresql" | "postgres" => Dialect::PostgreSql,
            other => {
                return Err(PiiScoutError::Configuration(format!(
                    "PIISCOUT_CONNECTION_DIALECT must be 'mysql' or 'postgresql', got '{other}'"
                )))
            }
        };
    }
    if let Ok(val) = std::env::var("PIISCOUT_CONNECTION_HOST") {
        config.connection.host = val;
    }
    if let Ok(val) = std::env::var("PIISCOUT_CONNECTION_PORT") {
        let port = val.parse().map_err(|_| {
            PiiScoutError::Configuration(format!("PIISCOUT_CONNECTION_PORT is not a port: {val}"))
        })?;
        config.connection.port = Some(port);
    }
    if let Ok(val) = std::env::var("PIISCOUT_CONNECTION_USER") {
        config.connection.user = val;
    }
    if let Ok(val) = std::env::var("PIISCOUT_CONNECTION_PASSWORD") {
        config.connection.password = Some(secret_string(val));
    }
    if let Ok(val) = std::env::var("PIISCOUT_CONNECTION_MAINTENANCE_DATABASE") {
        config.connection.maintenance_database = val;
    }
    if let Ok(val) = std::env::var("PIISCOUT_CONNECTION_REUSE_CONNECTIONS") {
        config.connection.reuse_connections = val.parse().unwrap_or(false);
    }

    // Scan overrides
    if let Ok(val) = std::env::var("PIISCOUT_SCAN_KEYWORDS_PATH") {
        config.scan.keywords_path = Some(val);
    }
    if let Ok(val) = std::env::var("PIISCOUT_SCAN_SAMPLE_LIMIT") {
        if let Ok(limit) = val.parse() {
            config.scan.sample_limit = limit;
        }
    }
    if let Ok(val) = std::env::var("PIISCOUT_SCAN_SKIP_BLANK_KEYWORDS") {
        config.scan.skip_blank_keywords = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("PIISCOUT_SCAN_SUMMARY_MODE") {
        config.scan.summary_mode = match val.to_lowercase().as_str() {
            "aggregate" => SummaryMode::Aggregate,
            _ => SummaryMode::Rescan,
        };
    }

    // Report overrides
    if let Ok(val) = std::env::var("PIISCOUT_REPORT_OUTPUT_DIR") {
        config.report.output_dir = val;
    }
    if let Ok(val) = std::env::var("PIISCOUT_REPORT_WRITE_JSON") {
        config.report.write_json = val.parse().unwrap_or(false);
    }

    // Logging overrides
    if let Ok(val) = std::env::var("PIISCOUT_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("PIISCOUT_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }

    Ok(())
}
