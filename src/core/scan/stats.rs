//! Scan statistics for logging

use crate::domain::ScanReport;
use std::time::Duration;

/// Counters logged once a scan completes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanStats {
    /// Databases in the detailed pass
    pub databases: usize,
    /// Tables in the detailed pass
    pub tables: usize,
    /// Tables flagged as PII in the detailed pass
    pub pii_tables: usize,
    /// Rows sampled across all PII tables
    pub sampled_rows: usize,
    /// Wall-clock time of the scan
    pub duration: Duration,
}

impl ScanStats {
    /// Counts the detailed findings of `report`
    pub fn from_report(report: &ScanReport) -> Self {
        let tables = report.databases.iter().flat_map(|db| db.tables.iter());

        let mut stats = Self {
            databases: report.databases.len(),
            ..Self::default()
        };
        for table in tables {
            stats.tables += 1;
            if table.is_pii {
                stats.pii_tables += 1;
            }
            stats.sampled_rows += table.sample_rows.as_ref().map_or(0, Vec::len);
        }
        stats
    }

    /// Set the duration
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Log the statistics
    pub fn log_summary(&self) {
        tracing::info!(
            databases = self.databases,
            tables = self.tables,
            pii_tables = self.pii_tables,
            sampled_rows = self.sampled_rows,
            duration_ms = self.duration.as_millis() as u64,
            "Scan completed"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DatabaseFinding, SampleValue, TableFinding};

    #[test]
    fn test_stats_from_report() {
        let report = ScanReport::from_findings(vec![
            DatabaseFinding::new(
                "shop",
                vec![
                    TableFinding::pii(
                        "users",
                        vec![vec![SampleValue::text("1")], vec![SampleValue::text("2")]],
                    ),
                    TableFinding::pii("orders", vec![]),
                    TableFinding::clean("logs"),
                ],
            ),
            DatabaseFinding::new("empty", vec![]),
        ]);

        let stats = ScanStats::from_report(&report).with_duration(Duration::from_millis(40));
        assert_eq!(stats.databases, 2);
        assert_eq!(stats.tables, 3);
        assert_eq!(stats.pii_tables, 2);
        assert_eq!(stats.sampled_rows, 2);
        assert_eq!(stats.duration, Duration::from_millis(40));
    }
}
