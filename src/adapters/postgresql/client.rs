//! PostgreSQL client implementation
//!
//! This module provides the client used by the PostgreSQL catalog backend.

use crate::config::ConnectionConfig;
use crate::domain::{CatalogError, Result, Row, SampleValue};
use deadpool_postgres::{Manager, ManagerConfig, Pool, RecyclingMethod};
use secrecy::ExposeSecret;
use std::collections::HashMap;
use std::ops::Deref;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio_postgres::{Client, NoTls, SimpleQueryMessage};

/// Connection owned by a single catalog call
pub enum PgSession {
    /// Fresh connection, dropped when the call ends
    Direct(Client),
    /// Connection borrowed from a per-database pool
    Pooled(deadpool_postgres::Object),
}

impl Deref for PgSession {
    type Target = Client;

    fn deref(&self) -> &Client {
        match self {
            PgSession::Direct(client) => client,
            PgSession::Pooled(object) => object,
        }
    }
}

/// PostgreSQL client for PiiScout
///
/// Opens one connection per call by default. With `reuse_connections` it
/// keeps a single-connection pool per database instead.
pub struct PostgreSQLClient {
    config: ConnectionConfig,
    pools: Mutex<HashMap<String, Pool>>,
}

impl PostgreSQLClient {
    /// Create a new PostgreSQL client
    ///
    /// No connection is opened until the first query.
    pub fn new(config: ConnectionConfig) -> Self {
        Self {
            config,
            pools: Mutex::new(HashMap::new()),
        }
    }

    /// Database used to enumerate the other databases
    pub fn maintenance_database(&self) -> &str {
        &self.config.maintenance_database
    }

    /// Opens (or borrows) a connection to `database`
    ///
    /// # Errors
    ///
    /// Returns an error if the connection cannot be established.
    pub async fn connect(&self, database: &str) -> Result<PgSession> {
        let pg_config = self.pg_config(database);

        if self.config.reuse_connections {
            let pool = {
                let mut pools = self.pools.lock().await;
                match pools.get(database) {
                    Some(pool) => pool.clone(),
                    None => {
                        tracing::debug!(host = %self.config.host, database = %database, "Creating PostgreSQL pool");
                        let manager = Manager::from_config(
                            pg_config,
                            NoTls,
                            ManagerConfig {
                                recycling_method: RecyclingMethod::Fast,
                            },
                        );
                        let pool = Pool::builder(manager).max_size(1).build().map_err(|e| {
                            CatalogError::ConnectionFailed(format!(
                                "Failed to create connection pool: {e}"
                            ))
                        })?;
                        pools.insert(database.to_string(), pool.clone());
                        pool
                    }
                }
            };

            let object = pool.get().await.map_err(|e| {
                CatalogError::ConnectionFailed(format!("Failed to get connection from pool: {e}"))
            })?;
            return Ok(PgSession::Pooled(object));
        }

        let (client, connection) = pg_config
            .connect(NoTls)
            .await
            .map_err(|e| CatalogError::ConnectionFailed(e.to_string()))?;

        tokio::spawn(async move {
            if let Err(e) = connection.await {
                tracing::debug!(error = %e, "PostgreSQL connection closed with error");
            }
        });

        Ok(PgSession::Direct(client))
    }

    /// Runs a parameterized query and returns the first column as text
    ///
    /// # Errors
    ///
    /// Returns an error if the connection or the query fails.
    pub async fn query_names(
        &self,
        database: &str,
        query: &str,
        params: &[&(dyn tokio_postgres::types::ToSql + Sync)],
    ) -> Result<Vec<String>> {
        let session = self.connect(database).await?;

        let rows = session
            .query(query, params)
            .await
            .map_err(|e| CatalogError::QueryFailed(e.to_string()))?;

        rows.iter()
            .map(|row| {
                row.try_get::<_, String>(0)
                    .map_err(|e| CatalogError::Decode(e.to_string()).into())
            })
            .collect()
    }

    /// Runs `sql` over the simple query protocol; every value arrives as text
    ///
    /// # Errors
    ///
    /// Returns an error if the connection or the query fails.
    pub async fn query_text(&self, database: &str, sql: &str) -> Result<Vec<Row>> {
        let session = self.connect(database).await?;

        let messages = session
            .simple_query(sql)
            .await
            .map_err(|e| CatalogError::QueryFailed(e.to_string()))?;

        let rows: Vec<Row> = messages
            .iter()
            .filter_map(|message| match message {
                SimpleQueryMessage::Row(row) => Some(
                    (0..row.len())
                        .map(|idx| row.get(idx).map_or(SampleValue::Null, SampleValue::text))
                        .collect(),
                ),
                _ => None,
            })
            .collect();

        Ok(rows)
    }

    fn pg_config(&self, database: &str) -> tokio_postgres::Config {
        let mut pg_config = tokio_postgres::Config::new();
        pg_config
            .host(&self.config.host)
            .port(self.config.port())
            .user(&self.config.user)
            .dbname(database)
            .application_name("piiscout")
            .connect_timeout(Duration::from_secs(self.config.connect_timeout_seconds));

        if let Some(password) = &self.config.password {
            pg_config.password(password.expose_secret().as_ref());
        }

        pg_config
    }
}

/// Quotes an identifier with double quotes
pub fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{secret_string, Dialect};

    fn config() -> ConnectionConfig {
        ConnectionConfig {
            dialect: Dialect::PostgreSql,
            host: "pg.internal".to_string(),
            user: "auditor".to_string(),
            password: Some(secret_string("password".to_string())),
            ..ConnectionConfig::default()
        }
    }

    #[test]
    fn test_pg_config_targets_database() {
        let client = PostgreSQLClient::new(config());
        let pg_config = client.pg_config("shop");

        assert_eq!(pg_config.get_dbname(), Some("shop"));
        assert_eq!(pg_config.get_user(), Some("auditor"));
        assert_eq!(pg_config.get_ports(), &[5432]);
        assert_eq!(pg_config.get_password(), Some(&b"password"[..]));
    }

    #[test]
    fn test_quote_identifier() {
        assert_eq!(quote_identifier("users"), "\"users\"");
        assert_eq!(quote_identifier("we\"ird"), "\"we\"\"ird\"");
    }
}
