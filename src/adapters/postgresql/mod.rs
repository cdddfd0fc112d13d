//! PostgreSQL catalog integration
//!
//! This module provides the PostgreSQL dialect of the catalog backend,
//! built on tokio-postgres with optional deadpool connection reuse.

pub mod catalog;
pub mod client;

pub use catalog::PostgreSQLCatalog;
pub use client::PostgreSQLClient;
