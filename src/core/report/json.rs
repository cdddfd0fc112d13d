//! JSON export of scan findings

use crate::config::Dialect;
use crate::domain::{DatabaseFinding, PiiScoutError, Result, ScanReport, ScanSummary};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::Path;

/// Serialized form of a scan report
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    /// When the report was produced
    pub generated_at: DateTime<Utc>,
    /// Dialect of the scanned server
    pub dialect: Dialect,
    /// Scanned host
    pub host: &'a str,
    /// Whether the database list could not be retrieved
    pub database_list_missing: bool,
    /// Detailed findings
    pub databases: &'a [DatabaseFinding],
    /// Summary counters
    pub summary: &'a ScanSummary,
}

impl<'a> JsonReport<'a> {
    /// Wraps `report` with run metadata, timestamped now
    pub fn new(report: &'a ScanReport, dialect: Dialect, host: &'a str) -> Self {
        Self {
            generated_at: Utc::now(),
            dialect,
            host,
            database_list_missing: report.database_list_missing(),
            databases: &report.databases,
            summary: &report.summary,
        }
    }
}

/// Writes `report` as pretty-printed JSON to `path`, replacing any existing file
///
/// # Errors
///
/// Returns an error if serialization fails or the file cannot be written.
pub fn write_json_report(path: impl AsRef<Path>, report: &JsonReport<'_>) -> Result<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(report)?;

    std::fs::write(path, json).map_err(|e| {
        PiiScoutError::Report(format!(
            "Failed to write JSON report {}: {}",
            path.display(),
            e
        ))
    })?;

    tracing::info!(path = %path.display(), "JSON report written");
    Ok(())
}
