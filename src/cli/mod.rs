//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for PiiScout using clap.

pub mod commands;
pub mod prompt;

use clap::{Parser, Subcommand};

/// PiiScout - PII column detector for MySQL and PostgreSQL
#[derive(Parser, Debug)]
#[command(name = "piiscout")]
#[command(version, about, long_about = None)]
#[command(author = "PiiScout Contributors")]
pub struct Cli {
    /// Path to configuration file (defaults to ./piiscout.toml when present)
    #[arg(short, long, env = "PIISCOUT_CONFIG")]
    pub config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "PIISCOUT_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan a database server for PII columns and write the report
    Scan(commands::scan::ScanArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Dialect, SummaryMode};

    #[test]
    fn test_cli_parse_scan() {
        let cli = Cli::parse_from(["piiscout", "scan"]);
        assert_eq!(cli.config, None);
        assert!(matches!(cli.command, Commands::Scan(_)));
    }

    #[test]
    fn test_cli_parse_with_config() {
        let cli = Cli::parse_from(["piiscout", "--config", "custom.toml", "scan"]);
        assert_eq!(cli.config, Some("custom.toml".to_string()));
    }

    #[test]
    fn test_cli_parse_with_log_level() {
        let cli = Cli::parse_from(["piiscout", "--log-level", "debug", "scan"]);
        assert_eq!(cli.log_level, Some("debug".to_string()));
    }

    #[test]
    fn test_cli_parse_scan_flags() {
        let cli = Cli::parse_from([
            "piiscout",
            "scan",
            "--dialect",
            "postgres",
            "--host",
            "pg.internal",
            "--user",
            "auditor",
            "--keywords",
            "keywords.txt",
            "--sample-limit",
            "3",
            "--summary-mode",
            "aggregate",
            "--json",
            "--no-input",
        ]);

        let Commands::Scan(args) = cli.command else {
            panic!("expected scan command");
        };
        assert_eq!(args.dialect, Some(Dialect::PostgreSql));
        assert_eq!(args.host.as_deref(), Some("pg.internal"));
        assert_eq!(args.user.as_deref(), Some("auditor"));
        assert_eq!(args.keywords.as_deref(), Some("keywords.txt"));
        assert_eq!(args.sample_limit, Some(3));
        assert_eq!(args.summary_mode, Some(SummaryMode::Aggregate));
        assert!(args.json);
        assert!(args.no_input);
        assert!(!args.reuse_connections);
    }

    #[test]
    fn test_cli_parse_validate_config() {
        let cli = Cli::parse_from(["piiscout", "validate-config"]);
        assert!(matches!(cli.command, Commands::ValidateConfig(_)));
    }

    #[test]
    fn test_cli_parse_init() {
        let cli = Cli::parse_from(["piiscout", "init", "--force"]);
        match cli.command {
            Commands::Init(args) => assert!(args.force),
            _ => panic!("expected init command"),
        }
    }
}
