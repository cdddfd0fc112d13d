//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the PiiScout configuration file.

use crate::config::{resolve_config, PiiScoutConfig, DEFAULT_CONFIG_FILE};
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Also require the settings a scan needs (host, user, keyword list)
    #[arg(long)]
    pub strict: bool,
}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: Option<&str>) -> anyhow::Result<i32> {
        let shown_path = config_path.unwrap_or(DEFAULT_CONFIG_FILE);
        tracing::info!(config_path = %shown_path, "Validating configuration");

        println!("🔍 Validating configuration file: {shown_path}");
        println!();

        let config = match resolve_config(config_path) {
            Ok(c) => {
                println!("✅ Configuration file loaded successfully");
                c
            }
            Err(e) => {
                println!("❌ Failed to load configuration file");
                println!("   Error: {e}");
                return Ok(2);
            }
        };

        let result = if self.strict {
            config.validate_for_scan()
        } else {
            config.validate()
        };

        match result {
            Ok(()) => {
                println!("✅ Configuration is valid");
                println!();
                print_summary(&config);
                Ok(0)
            }
            Err(e) => {
                println!("❌ Configuration validation failed");
                println!("   Error: {e}");
                println!();
                Ok(2)
            }
        }
    }
}

fn print_summary(config: &PiiScoutConfig) {
    let missing = config.missing_scan_fields();

    println!("Configuration Summary:");
    println!("  Log Level: {}", config.application.log_level);
    println!("  Dialect: {}", config.connection.dialect);
    println!("  Server: {}", config.connection.redacted_url());
    println!(
        "  Password: {}",
        if config.connection.password.is_some() {
            "set"
        } else {
            "not set (will prompt)"
        }
    );
    println!("  Reuse Connections: {}", config.connection.reuse_connections);
    println!(
        "  Keyword List: {}",
        config.scan.keywords_path.as_deref().unwrap_or("not set")
    );
    println!("  Sample Limit: {}", config.scan.sample_limit);
    println!("  Summary Mode: {}", config.scan.summary_mode);
    println!("  Output Directory: {}", config.report.output_dir);
    println!("  JSON Report: {}", config.report.write_json);
    if !missing.is_empty() {
        println!("  Prompted at scan time: {}", missing.join(", "));
    }
    println!();
}
