//! Integration tests for configuration loading and validation
//!
//! Tests that modify environment variables hold ENV_MUTEX.

use piiscout::config::{load_config, Dialect, SummaryMode};
use piiscout::domain::PiiScoutError;
use secrecy::ExposeSecret;
use std::io::Write;
use std::sync::Mutex;
use tempfile::NamedTempFile;

static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn cleanup_env_vars() {
    std::env::remove_var("PIISCOUT_CONNECTION_HOST");
    std::env::remove_var("PIISCOUT_CONNECTION_PASSWORD");
    std::env::remove_var("PIISCOUT_SCAN_SAMPLE_LIMIT");
    std::env::remove_var("PIISCOUT_SCAN_SUMMARY_MODE");
    std::env::remove_var("TEST_PIISCOUT_DB_PASSWORD");
}

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_load_complete_config() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let file = write_config(
        r#"
[application]
log_level = "debug"

[connection]
dialect = "postgresql"
host = "pg.internal"
port = 6543
user = "auditor"
password = "plain"
maintenance_database = "template_admin"
connect_timeout_seconds = 30
reuse_connections = true

[scan]
keywords_path = "keywords.txt"
sample_limit = 10
skip_blank_keywords = true
summary_mode = "aggregate"
exclude_databases = ["staging"]

[report]
output_dir = "/tmp/reports"
write_json = true

[logging]
local_enabled = false
local_path = "/tmp/piiscout"
local_rotation = "hourly"
"#,
    );

    let config = load_config(file.path()).unwrap();

    assert_eq!(config.application.log_level, "debug");
    assert_eq!(config.connection.dialect, Dialect::PostgreSql);
    assert_eq!(config.connection.port(), 6543);
    assert_eq!(config.connection.maintenance_database, "template_admin");
    assert!(config.connection.reuse_connections);
    assert_eq!(config.scan.sample_limit, 10);
    assert!(config.scan.skip_blank_keywords);
    assert_eq!(config.scan.summary_mode, SummaryMode::Aggregate);
    assert_eq!(config.scan.exclude_databases, vec!["staging"]);
    assert!(config.report.write_json);
    assert_eq!(config.logging.local_rotation, "hourly");
    assert!(config.validate_for_scan().is_ok());
}

#[test]
fn test_empty_file_uses_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let file = write_config("");
    let config = load_config(file.path()).unwrap();

    assert_eq!(config.connection.dialect, Dialect::MySql);
    assert_eq!(config.connection.port(), 3306);
    assert_eq!(config.scan.sample_limit, 5);
    assert_eq!(config.scan.summary_mode, SummaryMode::Rescan);
    assert_eq!(
        config.missing_scan_fields(),
        vec!["connection.host", "connection.user", "scan.keywords_path"]
    );
}

#[test]
fn test_password_substitution_from_environment() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();
    std::env::set_var("TEST_PIISCOUT_DB_PASSWORD", "from-env");

    let file = write_config(
        r#"
[connection]
host = "db.internal"
user = "auditor"
password = "${TEST_PIISCOUT_DB_PASSWORD}"
"#,
    );
    let config = load_config(file.path()).unwrap();

    let password = config.connection.password.as_ref().unwrap();
    assert_eq!(password.expose_secret().as_ref(), "from-env");
    assert!(!format!("{:?}", config.connection).contains("from-env"));

    cleanup_env_vars();
}

#[test]
fn test_missing_substitution_variable() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let file = write_config("[connection]\npassword = \"${TEST_PIISCOUT_DB_PASSWORD}\"\n");
    let err = load_config(file.path()).unwrap_err();

    assert!(matches!(err, PiiScoutError::Configuration(_)));
    assert!(err.to_string().contains("TEST_PIISCOUT_DB_PASSWORD"));
}

#[test]
fn test_environment_overrides_file() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();
    std::env::set_var("PIISCOUT_CONNECTION_HOST", "override.internal");
    std::env::set_var("PIISCOUT_SCAN_SAMPLE_LIMIT", "2");
    std::env::set_var("PIISCOUT_SCAN_SUMMARY_MODE", "aggregate");

    let file = write_config("[connection]\nhost = \"file.internal\"\n\n[scan]\nsample_limit = 9\n");
    let config = load_config(file.path()).unwrap();

    assert_eq!(config.connection.host, "override.internal");
    assert_eq!(config.scan.sample_limit, 2);
    assert_eq!(config.scan.summary_mode, SummaryMode::Aggregate);

    cleanup_env_vars();
}

#[test]
fn test_invalid_values_rejected() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let file = write_config("[scan]\nsample_limit = 0\n");
    assert!(load_config(file.path()).is_err());

    let file = write_config("[connection]\ndialect = \"oracle\"\n");
    assert!(load_config(file.path()).is_err());

    let file = write_config("[logging]\nlocal_rotation = \"size\"\n");
    assert!(load_config(file.path()).is_err());
}

#[test]
fn test_missing_file() {
    let err = load_config("/nonexistent/piiscout.toml").unwrap_err();
    assert!(matches!(err, PiiScoutError::Configuration(_)));
}
