//! Core scanning logic for PiiScout.
//!
//! # Modules
//!
//! - [`keywords`] - Keyword list loading and normalization
//! - [`matcher`] - Column-name based PII detection
//! - [`scan`] - Catalog traversal and summary computation
//! - [`report`] - Text and JSON report output
//!
//! # Scan Workflow
//!
//! 1. **Load keywords**: Read the keyword list; an unreadable list aborts
//! 2. **List databases**: System databases are excluded by the backend
//! 3. **Scan tables**: Match column names, sample rows of PII tables
//! 4. **Summarize**: Rescan the catalog, or aggregate the detailed pass
//! 5. **Report**: Render the detailed section and the summary
//!
//! # Example
//!
//! ```rust,no_run
//! use piiscout::adapters::catalog::create_catalog;
//! use piiscout::config::load_config;
//! use piiscout::core::keywords::KeywordSet;
//! use piiscout::core::report::{ReportRenderer, WriterSink};
//! use piiscout::core::scan::ScanOrchestrator;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("piiscout.toml")?;
//! let keywords = KeywordSet::load("keywords.txt", false)?;
//!
//! let catalog = create_catalog(&config.connection, &config.scan);
//! let orchestrator = ScanOrchestrator::new(config.scan.sample_limit, config.scan.summary_mode);
//! let report = orchestrator.run(&catalog, &keywords).await;
//!
//! let mut sink = WriterSink::new(std::io::stdout());
//! ReportRenderer::new().render(&report, &mut sink)?;
//! # Ok(())
//! # }
//! ```

pub mod keywords;
pub mod matcher;
pub mod report;
pub mod scan;
