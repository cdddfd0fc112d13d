//! Scan command implementation
//!
//! This module implements the `scan` command: resolve settings, load the
//! keyword list, traverse the server catalog and write the report.

use crate::adapters::catalog::create_catalog;
use crate::cli::prompt::{fill_missing, TerminalPrompter};
use crate::config::{resolve_config, secret_string, Dialect, PiiScoutConfig, SummaryMode};
use crate::core::keywords::KeywordSet;
use crate::core::report::{
    json_report_file_name, report_file_name, write_json_report, FileSink, JsonReport,
    ReportRenderer, ReportSink, WriterSink,
};
use crate::core::scan::ScanOrchestrator;
use crate::domain::ScanReport;
use clap::Args;
use secrecy::ExposeSecret;
use std::path::{Path, PathBuf};

/// Arguments for the scan command
#[derive(Args, Debug, Default)]
pub struct ScanArgs {
    /// Database dialect
    #[arg(long, value_enum, env = "PIISCOUT_DIALECT")]
    pub dialect: Option<Dialect>,

    /// Server hostname
    #[arg(long, env = "PIISCOUT_HOST")]
    pub host: Option<String>,

    /// Server port (dialect default when omitted)
    #[arg(long)]
    pub port: Option<u16>,

    /// Login user
    #[arg(short, long, env = "PIISCOUT_USER")]
    pub user: Option<String>,

    /// Login password
    #[arg(long, env = "PIISCOUT_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Keyword list file, one keyword per line
    #[arg(short, long, env = "PIISCOUT_KEYWORDS")]
    pub keywords: Option<String>,

    /// Directory the report files are written to
    #[arg(short, long)]
    pub output_dir: Option<String>,

    /// Rows sampled from every PII table
    #[arg(long)]
    pub sample_limit: Option<usize>,

    /// How the summary section is computed
    #[arg(long, value_enum)]
    pub summary_mode: Option<SummaryMode>,

    /// Keep one connection per database instead of reconnecting per call
    #[arg(long)]
    pub reuse_connections: bool,

    /// Ignore blank lines in the keyword list
    #[arg(long)]
    pub skip_blank_keywords: bool,

    /// Also write the findings as JSON
    #[arg(long)]
    pub json: bool,

    /// Never prompt; fail when required settings are missing
    #[arg(long)]
    pub no_input: bool,
}

impl ScanArgs {
    /// Execute the scan command
    pub async fn execute(&self, config_path: Option<&str>) -> anyhow::Result<i32> {
        tracing::info!("Starting scan command");

        let mut config = match resolve_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("❌ Failed to load configuration");
                eprintln!("   Error: {e}");
                return Ok(2);
            }
        };

        self.apply_overrides(&mut config);

        if !self.no_input {
            let prompted = fill_missing(&mut config, &mut TerminalPrompter::new())?;
            if !prompted.is_empty() {
                tracing::debug!(settings = ?prompted, "Collected settings interactively");
            }
        }

        if let Err(e) = config.validate_for_scan() {
            eprintln!("❌ Invalid configuration: {e}");
            return Ok(2);
        }

        if config
            .connection
            .password
            .as_ref()
            .map_or(true, |p| p.expose_secret().is_empty())
        {
            tracing::warn!(user = %config.connection.user, "Connecting without a password");
        }

        let keywords_path = config.scan.keywords_path.clone().unwrap_or_default();
        let keywords = match KeywordSet::load(&keywords_path, config.scan.skip_blank_keywords) {
            Ok(k) => k,
            Err(e) => {
                tracing::error!(path = %keywords_path, error = %e, "Keyword list unreadable");
                eprintln!("❌ {e}");
                return Ok(2);
            }
        };

        if keywords.contains_blank() {
            tracing::warn!("Keyword list contains a blank line; every table will be flagged");
        }

        crate::log_scan_start!(
            config.connection.dialect,
            config.connection.redacted_url(),
            keywords.len()
        );

        let catalog = create_catalog(&config.connection, &config.scan);
        let report = ScanOrchestrator::new(config.scan.sample_limit, config.scan.summary_mode)
            .run(&catalog, &keywords)
            .await;

        match write_reports(&config, &report) {
            Ok(path) => {
                print_summary(&report)?;
                println!();
                println!("📄 Report written to {}", path.display());
                Ok(0)
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to write report");
                eprintln!("❌ {e}");
                Ok(5)
            }
        }
    }

    /// Applies command-line values on top of the resolved configuration
    pub fn apply_overrides(&self, config: &mut PiiScoutConfig) {
        if let Some(dialect) = self.dialect {
            config.connection.dialect = dialect;
        }
        if let Some(host) = &self.host {
            config.connection.host = host.clone();
        }
        if let Some(port) = self.port {
            config.connection.port = Some(port);
        }
        if let Some(user) = &self.user {
            config.connection.user = user.clone();
        }
        if let Some(password) = &self.password {
            config.connection.password = Some(secret_string(password.clone()));
        }
        if let Some(keywords) = &self.keywords {
            config.scan.keywords_path = Some(keywords.clone());
        }
        if let Some(output_dir) = &self.output_dir {
            config.report.output_dir = output_dir.clone();
        }
        if let Some(sample_limit) = self.sample_limit {
            config.scan.sample_limit = sample_limit;
        }
        if let Some(summary_mode) = self.summary_mode {
            config.scan.summary_mode = summary_mode;
        }
        if self.reuse_connections {
            config.connection.reuse_connections = true;
        }
        if self.skip_blank_keywords {
            config.scan.skip_blank_keywords = true;
        }
        if self.json {
            config.report.write_json = true;
        }
    }
}

/// Writes the text report (and the JSON report when enabled)
///
/// Returns the path of the text report.
fn write_reports(config: &PiiScoutConfig, report: &ScanReport) -> crate::domain::Result<PathBuf> {
    let output_dir = Path::new(&config.report.output_dir);
    let host = &config.connection.host;

    let path = output_dir.join(report_file_name(host));
    let mut sink = FileSink::create(&path)?;
    ReportRenderer::new().render(report, &mut sink)?;
    tracing::info!(path = %path.display(), "Report written");

    if config.report.write_json {
        let json_report = JsonReport::new(report, config.connection.dialect, host);
        write_json_report(output_dir.join(json_report_file_name(host)), &json_report)?;
    }

    Ok(path)
}

fn print_summary(report: &ScanReport) -> anyhow::Result<()> {
    let mut stdout = WriterSink::new(std::io::stdout().lock());
    ReportRenderer::new().render_summary(report, &mut stdout)?;
    stdout.flush()?;
    Ok(())
}
