//! MySQL catalog backend

use crate::adapters::catalog::{without_excluded, CatalogBackend};
use crate::adapters::mysql::client::{quote_identifier, MySqlClient};
use crate::config::Dialect;
use crate::domain::{ColumnDescriptor, Result, Row, SampleValue};
use async_trait::async_trait;

/// MySQL implementation of [`CatalogBackend`]
///
/// Databases come from `SHOW DATABASES`, tables from `SHOW TABLES` and
/// columns from `SHOW COLUMNS`.
pub struct MySqlCatalog {
    client: MySqlClient,
    excluded: Vec<String>,
}

impl MySqlCatalog {
    /// Create a new MySQL catalog
    ///
    /// `excluded` lists database names never returned by `fetch_databases`.
    pub fn new(client: MySqlClient, excluded: Vec<String>) -> Self {
        Self { client, excluded }
    }
}

#[async_trait]
impl CatalogBackend for MySqlCatalog {
    fn dialect(&self) -> Dialect {
        Dialect::MySql
    }

    async fn fetch_databases(&self) -> Result<Vec<String>> {
        let rows = self.client.query(None, "SHOW DATABASES").await?;
        Ok(without_excluded(first_column(rows), &self.excluded))
    }

    async fn fetch_tables(&self, database: &str) -> Result<Vec<String>> {
        let rows = self.client.query(Some(database), "SHOW TABLES").await?;
        Ok(first_column(rows))
    }

    async fn fetch_columns(&self, database: &str, table: &str) -> Result<Vec<ColumnDescriptor>> {
        let sql = format!("SHOW COLUMNS FROM {}", quote_identifier(table));
        let rows = self.client.query(Some(database), &sql).await?;
        Ok(first_column(rows)
            .into_iter()
            .map(ColumnDescriptor::new)
            .collect())
    }

    async fn fetch_rows(&self, database: &str, table: &str, limit: usize) -> Result<Vec<Row>> {
        let sql = format!("SELECT * FROM {} LIMIT {}", quote_identifier(table), limit);
        self.client.query(Some(database), &sql).await
    }
}

/// Text of the first cell of every row; NULL cells are skipped
fn first_column(rows: Vec<Row>) -> Vec<String> {
    rows.into_iter()
        .filter_map(|row| row.into_iter().next())
        .filter_map(|cell| match cell {
            SampleValue::Text(text) => Some(text),
            SampleValue::Bytes(bytes) => Some(String::from_utf8_lossy(&bytes).into_owned()),
            SampleValue::Null => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConnectionConfig;
    use crate::domain::{CatalogError, PiiScoutError};

    fn unreachable_catalog(reuse_connections: bool) -> MySqlCatalog {
        let config = ConnectionConfig {
            dialect: Dialect::MySql,
            host: "127.0.0.1".to_string(),
            port: Some(1),
            user: "auditor".to_string(),
            connect_timeout_seconds: 2,
            reuse_connections,
            ..ConnectionConfig::default()
        };
        MySqlCatalog::new(MySqlClient::new(&config), Vec::new())
    }

    fn assert_connection_error(err: PiiScoutError) {
        assert!(
            matches!(
                err,
                PiiScoutError::Catalog(CatalogError::ConnectionFailed(_))
                    | PiiScoutError::Catalog(CatalogError::Timeout(_))
            ),
            "unexpected error: {err}"
        );
    }

    #[test]
    fn test_catalog_boxes_as_backend() {
        let backend: Box<dyn CatalogBackend> = Box::new(unreachable_catalog(false));
        assert_eq!(backend.dialect(), Dialect::MySql);
    }

    #[tokio::test]
    async fn test_fetch_methods_report_connection_failure() {
        let backend: Box<dyn CatalogBackend> = Box::new(unreachable_catalog(false));

        assert_connection_error(backend.fetch_databases().await.unwrap_err());
        assert_connection_error(backend.fetch_tables("shop").await.unwrap_err());
        assert_connection_error(backend.fetch_columns("shop", "users").await.unwrap_err());
        assert_connection_error(backend.fetch_rows("shop", "users", 5).await.unwrap_err());
    }

    #[tokio::test]
    async fn test_pooled_fetch_reports_connection_failure() {
        let backend: Box<dyn CatalogBackend> = Box::new(unreachable_catalog(true));

        assert_connection_error(backend.fetch_tables("shop").await.unwrap_err());
    }

    #[test]
    fn test_first_column() {
        let rows = vec![
            vec![SampleValue::text("shop"), SampleValue::text("ignored")],
            vec![SampleValue::Null],
            vec![],
            vec![SampleValue::Bytes(b"crm".to_vec())],
        ];
        assert_eq!(first_column(rows), vec!["shop", "crm"]);
    }
}
