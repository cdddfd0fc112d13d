//! Catalog abstraction traits
//!
//! Two layers sit at the dialect boundary:
//!
//! - [`CatalogBackend`] is implemented once per dialect and reports failures
//!   as errors.
//! - [`CatalogProvider`] is what the scan orchestrator consumes. It never
//!   fails: errors are handed to an [`ErrorSink`] and the call returns an
//!   empty result.

use crate::config::Dialect;
use crate::domain::{ColumnDescriptor, PiiScoutError, Result, Row};
use async_trait::async_trait;
use std::fmt;

/// Catalog operation that failed, with the objects it targeted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogOperation<'a> {
    /// Enumerating databases
    ListDatabases,
    /// Enumerating tables of a database
    ListTables {
        /// Database name
        database: &'a str,
    },
    /// Introspecting the columns of a table
    ListColumns {
        /// Database name
        database: &'a str,
        /// Table name
        table: &'a str,
    },
    /// Sampling rows from a table
    SampleRows {
        /// Database name
        database: &'a str,
        /// Table name
        table: &'a str,
    },
}

impl CatalogOperation<'_> {
    /// Short operation name used as a log field
    pub fn name(&self) -> &'static str {
        match self {
            CatalogOperation::ListDatabases => "list_databases",
            CatalogOperation::ListTables { .. } => "list_tables",
            CatalogOperation::ListColumns { .. } => "list_columns",
            CatalogOperation::SampleRows { .. } => "sample_rows",
        }
    }

    /// Targeted database, if any
    pub fn database(&self) -> Option<&str> {
        match self {
            CatalogOperation::ListDatabases => None,
            CatalogOperation::ListTables { database }
            | CatalogOperation::ListColumns { database, .. }
            | CatalogOperation::SampleRows { database, .. } => Some(database),
        }
    }

    /// Targeted table, if any
    pub fn table(&self) -> Option<&str> {
        match self {
            CatalogOperation::ListColumns { table, .. }
            | CatalogOperation::SampleRows { table, .. } => Some(table),
            _ => None,
        }
    }
}

impl fmt::Display for CatalogOperation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogOperation::ListDatabases => write!(f, "list databases"),
            CatalogOperation::ListTables { database } => write!(f, "list tables in {database}"),
            CatalogOperation::ListColumns { database, table } => {
                write!(f, "list columns of {database}.{table}")
            }
            CatalogOperation::SampleRows { database, table } => {
                write!(f, "sample rows from {database}.{table}")
            }
        }
    }
}

/// Receives catalog failures that were degraded to empty results
pub trait ErrorSink: Send + Sync {
    /// Records one failed catalog call
    fn record(&self, dialect: Dialect, operation: CatalogOperation<'_>, error: &PiiScoutError);
}

/// Dialect-specific access to the server catalog
///
/// Each method owns whatever connection it needs for the duration of the
/// call; implementations decide whether that connection is fresh or pooled.
#[async_trait]
pub trait CatalogBackend: Send + Sync {
    /// Dialect served by this backend
    fn dialect(&self) -> Dialect;

    /// Database names, system databases excluded
    ///
    /// # Errors
    ///
    /// Returns an error if the server cannot be reached or the query fails.
    async fn fetch_databases(&self) -> Result<Vec<String>>;

    /// Table names of `database`
    ///
    /// # Errors
    ///
    /// Returns an error if the server cannot be reached or the query fails.
    async fn fetch_tables(&self, database: &str) -> Result<Vec<String>>;

    /// Columns of `database.table` in catalog order
    ///
    /// # Errors
    ///
    /// Returns an error if the server cannot be reached or the query fails.
    async fn fetch_columns(&self, database: &str, table: &str) -> Result<Vec<ColumnDescriptor>>;

    /// Up to `limit` rows of `database.table` in server order
    ///
    /// # Errors
    ///
    /// Returns an error if the server cannot be reached or the query fails.
    async fn fetch_rows(&self, database: &str, table: &str, limit: usize) -> Result<Vec<Row>>;
}

/// Failure-free catalog consumed by the scan orchestrator
///
/// Every method returns an empty result when the underlying call fails.
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Dialect of the underlying server
    fn dialect(&self) -> Dialect;

    /// Database names, or empty on failure
    async fn list_databases(&self) -> Vec<String>;

    /// Table names of `database`, or empty on failure
    async fn list_tables(&self, database: &str) -> Vec<String>;

    /// Columns of `database.table`, or empty on failure
    async fn list_columns(&self, database: &str, table: &str) -> Vec<ColumnDescriptor>;

    /// Up to `limit` sampled rows, or empty on failure
    async fn sample_rows(&self, database: &str, table: &str, limit: usize) -> Vec<Row>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_fields() {
        let op = CatalogOperation::SampleRows {
            database: "shop",
            table: "users",
        };
        assert_eq!(op.name(), "sample_rows");
        assert_eq!(op.database(), Some("shop"));
        assert_eq!(op.table(), Some("users"));
        assert_eq!(op.to_string(), "sample rows from shop.users");

        let op = CatalogOperation::ListDatabases;
        assert_eq!(op.database(), None);
        assert_eq!(op.table(), None);
    }
}
