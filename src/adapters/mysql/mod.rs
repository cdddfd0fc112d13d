//! MySQL catalog integration
//!
//! This module provides the MySQL dialect of the catalog backend, built on
//! sqlx.

pub mod catalog;
pub mod client;

pub use catalog::MySqlCatalog;
pub use client::MySqlClient;
