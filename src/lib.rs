// PiiScout - PII column detector for MySQL and PostgreSQL
// Copyright (c) 2025 PiiScout Contributors
// Licensed under the MIT License

//! # PiiScout - PII column detector
//!
//! PiiScout scans the catalog of a MySQL or PostgreSQL server and flags
//! tables whose column names suggest personally identifiable information.
//! Flagged tables get a small row sample for human review.
//!
//! ## Overview
//!
//! This library provides the core functionality for:
//! - **Loading** a newline-delimited keyword list
//! - **Traversing** databases, tables and columns in catalog order
//! - **Matching** column names against keywords (case-insensitive substring)
//! - **Reporting** a detailed narrative log followed by a summary
//!
//! ## Architecture
//!
//! PiiScout follows a layered architecture:
//!
//! - [`cli`] - Command-line interface, argument parsing and prompts
//! - [`core`] - Scan logic (keywords, matcher, orchestrator, report)
//! - [`adapters`] - Catalog backends (MySQL, PostgreSQL)
//! - [`domain`] - Errors and findings
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use piiscout::adapters::catalog::create_catalog;
//! use piiscout::config::{ConnectionConfig, Dialect, ScanConfig};
//! use piiscout::core::keywords::KeywordSet;
//! use piiscout::core::scan::ScanOrchestrator;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let connection = ConnectionConfig {
//!         dialect: Dialect::PostgreSql,
//!         host: "pg.internal".to_string(),
//!         user: "auditor".to_string(),
//!         ..ConnectionConfig::default()
//!     };
//!     let keywords = KeywordSet::load("keywords.txt", false)?;
//!
//!     let catalog = create_catalog(&connection, &ScanConfig::default());
//!     let report = ScanOrchestrator::default().run(&catalog, &keywords).await;
//!
//!     println!("Databases scanned: {}", report.summary.total_databases());
//!     Ok(())
//! }
//! ```
//!
//! ## Failure Model
//!
//! Catalog failures never abort a scan. Each failed call is logged and
//! treated as an empty result, so an unreachable server still produces a
//! report stating that the database list could not be retrieved. The only
//! fatal input error is an unreadable keyword list.

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
