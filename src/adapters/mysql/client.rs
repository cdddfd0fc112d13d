//! MySQL client implementation
//!
//! Every query runs over the text protocol, so all scalar values come back
//! as their textual rendering regardless of column type.

use crate::config::ConnectionConfig;
use crate::domain::{CatalogError, Result, Row, SampleValue};
use secrecy::ExposeSecret;
use sqlx::mysql::{MySqlConnectOptions, MySqlConnection, MySqlPool, MySqlPoolOptions, MySqlRow};
use sqlx::pool::PoolConnection;
use sqlx::{ConnectOptions, Connection, Executor, MySql, Row as SqlxRow};
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::Mutex;

/// Connection owned by a single catalog call
pub enum MySqlSession {
    /// Fresh connection, closed when the call ends
    Direct(MySqlConnection),
    /// Connection borrowed from a per-database pool
    Pooled(PoolConnection<MySql>),
}

impl MySqlSession {
    /// Runs `sql` and decodes every row
    async fn fetch_rows(&mut self, sql: &str) -> Result<Vec<Row>> {
        let rows = match self {
            MySqlSession::Direct(conn) => Executor::fetch_all(&mut *conn, sqlx::raw_sql(sql)).await,
            MySqlSession::Pooled(conn) => Executor::fetch_all(&mut **conn, sqlx::raw_sql(sql)).await,
        }
        .map_err(|e| CatalogError::QueryFailed(e.to_string()))?;

        rows.iter().map(decode_row).collect()
    }

    /// Closes a direct connection; pooled connections return to their pool
    async fn close(self) {
        if let MySqlSession::Direct(conn) = self {
            if let Err(e) = conn.close().await {
                tracing::debug!(error = %e, "MySQL connection did not close cleanly");
            }
        }
    }
}

/// MySQL client for PiiScout
///
/// Opens one connection per call by default. With `reuse_connections` it
/// keeps a single-connection pool per database instead.
pub struct MySqlClient {
    options: MySqlConnectOptions,
    host: String,
    connect_timeout_seconds: u64,
    reuse_connections: bool,
    pools: Mutex<HashMap<Option<String>, MySqlPool>>,
}

impl MySqlClient {
    /// Create a new MySQL client
    ///
    /// No connection is opened until the first query.
    pub fn new(config: &ConnectionConfig) -> Self {
        let mut options = MySqlConnectOptions::new()
            .host(&config.host)
            .port(config.port())
            .username(&config.user)
            .disable_statement_logging();

        if let Some(password) = &config.password {
            options = options.password(password.expose_secret().as_ref());
        }

        Self {
            options,
            host: config.host.clone(),
            connect_timeout_seconds: config.connect_timeout_seconds,
            reuse_connections: config.reuse_connections,
            pools: Mutex::new(HashMap::new()),
        }
    }

    /// Runs `sql` against `database` (or no default database) and returns
    /// the decoded rows
    ///
    /// # Errors
    ///
    /// Returns an error if the connection or the query fails.
    pub async fn query(&self, database: Option<&str>, sql: &str) -> Result<Vec<Row>> {
        let mut session = self.connect(database).await?;
        let result = session.fetch_rows(sql).await;
        session.close().await;
        result
    }

    /// Opens (or borrows) a connection for one catalog call
    ///
    /// # Errors
    ///
    /// Returns an error if the connection cannot be established in time.
    pub async fn connect(&self, database: Option<&str>) -> Result<MySqlSession> {
        let options = self.options_for(database);
        let timeout = Duration::from_secs(self.connect_timeout_seconds);

        if self.reuse_connections {
            let pool = {
                let mut pools = self.pools.lock().await;
                pools
                    .entry(database.map(str::to_string))
                    .or_insert_with(|| {
                        tracing::debug!(host = %self.host, database = ?database, "Creating MySQL pool");
                        MySqlPoolOptions::new()
                            .max_connections(1)
                            .acquire_timeout(timeout)
                            .connect_lazy_with(options)
                    })
                    .clone()
            };

            let conn = pool
                .acquire()
                .await
                .map_err(|e| CatalogError::ConnectionFailed(e.to_string()))?;
            return Ok(MySqlSession::Pooled(conn));
        }

        let conn = tokio::time::timeout(timeout, MySqlConnection::connect_with(&options))
            .await
            .map_err(|_| CatalogError::Timeout(self.connect_timeout_seconds))?
            .map_err(|e| CatalogError::ConnectionFailed(e.to_string()))?;

        Ok(MySqlSession::Direct(conn))
    }

    fn options_for(&self, database: Option<&str>) -> MySqlConnectOptions {
        match database {
            Some(database) => self.options.clone().database(database),
            None => self.options.clone(),
        }
    }
}

/// Quotes an identifier with backticks
pub fn quote_identifier(name: &str) -> String {
    format!("`{}`", name.replace('`', "``"))
}

fn decode_row(row: &MySqlRow) -> Result<Row> {
    (0..row.len()).map(|idx| decode_cell(row, idx)).collect()
}

fn decode_cell(row: &MySqlRow, idx: usize) -> Result<SampleValue> {
    if let Ok(text) = row.try_get_unchecked::<Option<String>, _>(idx) {
        return Ok(text.map_or(SampleValue::Null, SampleValue::Text));
    }

    row.try_get_unchecked::<Option<Vec<u8>>, _>(idx)
        .map(|bytes| bytes.map_or(SampleValue::Null, SampleValue::Bytes))
        .map_err(|e| CatalogError::Decode(e.to_string()).into())
}
