//! External system integrations for PiiScout.
//!
//! This module provides adapters for the database servers being scanned:
//!
//! - [`catalog`] - Dialect-neutral catalog traits, the degrade-to-empty
//!   wrapper and the backend factory
//! - [`mysql`] - MySQL implementation (sqlx)
//! - [`postgresql`] - PostgreSQL implementation (tokio-postgres)
//!
//! # Design Pattern
//!
//! Adapters follow the **Adapter Pattern** to isolate the database drivers
//! from the scan logic. The orchestrator only sees
//! [`catalog::CatalogProvider`], which lets tests drive a scan with an
//! in-memory backend.
//!
//! ```rust,no_run
//! use piiscout::adapters::catalog::{create_catalog, CatalogProvider};
//! use piiscout::config::{ConnectionConfig, Dialect, ScanConfig};
//!
//! # async fn example() {
//! let connection = ConnectionConfig {
//!     dialect: Dialect::MySql,
//!     host: "db.internal".to_string(),
//!     user: "auditor".to_string(),
//!     ..ConnectionConfig::default()
//! };
//!
//! let catalog = create_catalog(&connection, &ScanConfig::default());
//! for database in catalog.list_databases().await {
//!     println!("{database}");
//! }
//! # }
//! ```

pub mod catalog;
pub mod mysql;
pub mod postgresql;
