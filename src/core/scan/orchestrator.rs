//! Scan orchestrator
//!
//! Walks databases, tables and columns in catalog order, one call at a time,
//! and collects a [`TableFinding`] per table.

use crate::adapters::catalog::CatalogProvider;
use crate::config::SummaryMode;
use crate::core::keywords::KeywordSet;
use crate::core::matcher;
use crate::core::scan::stats::ScanStats;
use crate::domain::{DatabaseFinding, DatabaseSummary, ScanReport, ScanSummary, TableFinding};
use std::time::Instant;

/// Rows sampled from a PII table when nothing else is configured
pub const DEFAULT_SAMPLE_LIMIT: usize = 5;

/// Drives a complete scan against a [`CatalogProvider`]
#[derive(Debug, Clone, Copy)]
pub struct ScanOrchestrator {
    sample_limit: usize,
    summary_mode: SummaryMode,
}

impl Default for ScanOrchestrator {
    fn default() -> Self {
        Self::new(DEFAULT_SAMPLE_LIMIT, SummaryMode::default())
    }
}

impl ScanOrchestrator {
    /// Create a new orchestrator
    pub fn new(sample_limit: usize, summary_mode: SummaryMode) -> Self {
        Self {
            sample_limit,
            summary_mode,
        }
    }

    /// Runs the detailed pass followed by the summary pass
    ///
    /// Never fails: catalog failures have already been degraded to empty
    /// results by the provider.
    pub async fn run(&self, provider: &dyn CatalogProvider, keywords: &KeywordSet) -> ScanReport {
        let start_time = Instant::now();

        let database_names = provider.list_databases().await;
        if database_names.is_empty() {
            tracing::warn!(dialect = %provider.dialect(), "No databases retrieved from the server");
        } else {
            tracing::info!(count = database_names.len(), "Retrieved database list");
        }

        let mut databases = Vec::with_capacity(database_names.len());
        for database in &database_names {
            databases.push(self.scan_database(provider, keywords, database).await);
        }

        let summary = match self.summary_mode {
            SummaryMode::Rescan => rescan_summary(provider, keywords, &database_names).await,
            SummaryMode::Aggregate => ScanSummary::from_findings(&databases),
        };

        let report = ScanReport { databases, summary };
        ScanStats::from_report(&report)
            .with_duration(start_time.elapsed())
            .log_summary();

        report
    }

    async fn scan_database(
        &self,
        provider: &dyn CatalogProvider,
        keywords: &KeywordSet,
        database: &str,
    ) -> DatabaseFinding {
        let table_names = provider.list_tables(database).await;
        if table_names.is_empty() {
            tracing::info!(database = %database, "No tables found");
        }

        let mut tables = Vec::with_capacity(table_names.len());
        for table in table_names {
            tables.push(self.scan_table(provider, keywords, database, table).await);
        }

        DatabaseFinding::new(database, tables)
    }

    async fn scan_table(
        &self,
        provider: &dyn CatalogProvider,
        keywords: &KeywordSet,
        database: &str,
        table: String,
    ) -> TableFinding {
        let columns = provider.list_columns(database, &table).await;

        match matcher::first_match(&columns, keywords) {
            Some(hit) => {
                tracing::debug!(
                    database = %database,
                    table = %table,
                    column = %hit.column,
                    keyword = %hit.keyword,
                    "Column name matched keyword"
                );
                let rows = provider
                    .sample_rows(database, &table, self.sample_limit)
                    .await;
                crate::log_table_verdict!(database, table, true, rows.len());
                TableFinding::pii(table, rows)
            }
            None => {
                crate::log_table_verdict!(database, table, false, 0usize);
                TableFinding::clean(table)
            }
        }
    }
}

/// Computes the summary with a second traversal of the catalog
///
/// Tables and columns are fetched again for every name in `databases`; no
/// rows are sampled. The result can differ from the detailed pass if the
/// catalog changed in between.
pub async fn rescan_summary(
    provider: &dyn CatalogProvider,
    keywords: &KeywordSet,
    databases: &[String],
) -> ScanSummary {
    let mut summaries = Vec::with_capacity(databases.len());

    for database in databases {
        let tables = provider.list_tables(database).await;
        let mut pii_tables = Vec::new();

        for table in &tables {
            let columns = provider.list_columns(database, table).await;
            if matcher::is_pii(&columns, keywords) {
                pii_tables.push(table.clone());
            }
        }

        summaries.push(DatabaseSummary {
            database_name: database.clone(),
            total_tables: tables.len(),
            pii_tables,
        });
    }

    ScanSummary {
        databases: summaries,
    }
}
