//! Catalog factory
//!
//! This module builds the catalog provider for the configured dialect.

use crate::adapters::catalog::resilient::ResilientCatalog;
use crate::adapters::catalog::traits::CatalogBackend;
use crate::adapters::mysql::{MySqlCatalog, MySqlClient};
use crate::adapters::postgresql::{PostgreSQLCatalog, PostgreSQLClient};
use crate::config::{ConnectionConfig, Dialect, ScanConfig};

/// Databases skipped for `connection.dialect`
///
/// The dialect's system databases come first, followed by the
/// user-configured `scan.exclude_databases` entries.
pub fn excluded_databases(connection: &ConnectionConfig, scan: &ScanConfig) -> Vec<String> {
    let mut excluded: Vec<String> = connection
        .dialect
        .system_databases()
        .iter()
        .map(|name| name.to_string())
        .collect();

    for name in &scan.exclude_databases {
        if !excluded.contains(name) {
            excluded.push(name.clone());
        }
    }

    excluded
}

/// Create the catalog provider for the configured dialect
///
/// No connection is opened here; the first catalog call connects.
pub fn create_catalog(connection: &ConnectionConfig, scan: &ScanConfig) -> ResilientCatalog {
    let excluded = excluded_databases(connection, scan);

    let backend: Box<dyn CatalogBackend> = match connection.dialect {
        Dialect::MySql => {
            tracing::info!(host = %connection.host, "Creating MySQL catalog");
            Box::new(MySqlCatalog::new(MySqlClient::new(connection), excluded))
        }
        Dialect::PostgreSql => {
            tracing::info!(host = %connection.host, "Creating PostgreSQL catalog");
            Box::new(PostgreSQLCatalog::new(
                PostgreSQLClient::new(connection.clone()),
                excluded,
            ))
        }
    };

    ResilientCatalog::new(backend)
}
