//! Degrade-to-empty catalog provider
//!
//! Wraps a [`CatalogBackend`] so that every failure is reported to an
//! [`ErrorSink`] and replaced by an empty result. The scan orchestrator
//! never sees a catalog error.

use crate::adapters::catalog::traits::{
    CatalogBackend, CatalogOperation, CatalogProvider, ErrorSink,
};
use crate::config::Dialect;
use crate::domain::{ColumnDescriptor, PiiScoutError, Result, Row};
use async_trait::async_trait;
use std::sync::Arc;

/// Error sink that emits one `error!` event per failed catalog call
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingErrorSink;

impl ErrorSink for TracingErrorSink {
    fn record(&self, dialect: Dialect, operation: CatalogOperation<'_>, error: &PiiScoutError) {
        crate::log_catalog_failure!(dialect, operation, error);
    }
}

/// Catalog provider that never fails
pub struct ResilientCatalog {
    backend: Box<dyn CatalogBackend>,
    errors: Arc<dyn ErrorSink>,
}

impl ResilientCatalog {
    /// Wraps `backend`, reporting failures through tracing
    pub fn new(backend: Box<dyn CatalogBackend>) -> Self {
        Self::with_error_sink(backend, Arc::new(TracingErrorSink))
    }

    /// Wraps `backend`, reporting failures to `errors`
    pub fn with_error_sink(backend: Box<dyn CatalogBackend>, errors: Arc<dyn ErrorSink>) -> Self {
        Self { backend, errors }
    }

    fn degrade<T>(&self, operation: CatalogOperation<'_>, result: Result<Vec<T>>) -> Vec<T> {
        match result {
            Ok(items) => items,
            Err(err) => {
                self.errors.record(self.backend.dialect(), operation, &err);
                Vec::new()
            }
        }
    }
}

#[async_trait]
impl CatalogProvider for ResilientCatalog {
    fn dialect(&self) -> Dialect {
        self.backend.dialect()
    }

    async fn list_databases(&self) -> Vec<String> {
        let result = self.backend.fetch_databases().await;
        self.degrade(CatalogOperation::ListDatabases, result)
    }

    async fn list_tables(&self, database: &str) -> Vec<String> {
        let result = self.backend.fetch_tables(database).await;
        self.degrade(CatalogOperation::ListTables { database }, result)
    }

    async fn list_columns(&self, database: &str, table: &str) -> Vec<ColumnDescriptor> {
        let result = self.backend.fetch_columns(database, table).await;
        self.degrade(CatalogOperation::ListColumns { database, table }, result)
    }

    async fn sample_rows(&self, database: &str, table: &str, limit: usize) -> Vec<Row> {
        let result = self.backend.fetch_rows(database, table, limit).await;
        self.degrade(CatalogOperation::SampleRows { database, table }, result)
    }
}
