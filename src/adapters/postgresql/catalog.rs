//! PostgreSQL catalog backend

use crate::adapters::catalog::{without_excluded, CatalogBackend};
use crate::adapters::postgresql::client::{quote_identifier, PostgreSQLClient};
use crate::config::Dialect;
use crate::domain::{ColumnDescriptor, Result, Row};
use async_trait::async_trait;

/// Only this schema is introspected in every database
pub const SCANNED_SCHEMA: &str = "public";

/// PostgreSQL implementation of [`CatalogBackend`]
///
/// Databases come from `pg_database`; tables and columns from
/// `information_schema`, restricted to the `public` schema.
pub struct PostgreSQLCatalog {
    client: PostgreSQLClient,
    excluded: Vec<String>,
}

impl PostgreSQLCatalog {
    /// Create a new PostgreSQL catalog
    ///
    /// `excluded` lists database names never returned by `fetch_databases`.
    pub fn new(client: PostgreSQLClient, excluded: Vec<String>) -> Self {
        Self { client, excluded }
    }
}

#[async_trait]
impl CatalogBackend for PostgreSQLCatalog {
    fn dialect(&self) -> Dialect {
        Dialect::PostgreSql
    }

    async fn fetch_databases(&self) -> Result<Vec<String>> {
        let names = self
            .client
            .query_names(
                self.client.maintenance_database(),
                "SELECT datname::text FROM pg_database",
                &[],
            )
            .await?;
        Ok(without_excluded(names, &self.excluded))
    }

    async fn fetch_tables(&self, database: &str) -> Result<Vec<String>> {
        self.client
            .query_names(
                database,
                "SELECT table_name::text FROM information_schema.tables WHERE table_schema = $1",
                &[&SCANNED_SCHEMA],
            )
            .await
    }

    async fn fetch_columns(&self, database: &str, table: &str) -> Result<Vec<ColumnDescriptor>> {
        let names = self
            .client
            .query_names(
                database,
                "SELECT column_name::text FROM information_schema.columns \
                 WHERE table_schema = $1 AND table_name = $2 ORDER BY ordinal_position",
                &[&SCANNED_SCHEMA, &table],
            )
            .await?;
        Ok(names.into_iter().map(ColumnDescriptor::new).collect())
    }

    async fn fetch_rows(&self, database: &str, table: &str, limit: usize) -> Result<Vec<Row>> {
        let sql = format!(
            "SELECT * FROM {}.{} LIMIT {}",
            quote_identifier(SCANNED_SCHEMA),
            quote_identifier(table),
            limit
        );
        self.client.query_text(database, &sql).await
    }
}
