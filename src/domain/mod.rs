//! Domain models and types for PiiScout.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Findings model** ([`TableFinding`], [`DatabaseFinding`], [`ScanReport`], [`ScanSummary`])
//! - **Sampled data** ([`Row`], [`SampleValue`], [`ColumnDescriptor`])
//! - **Error types** ([`PiiScoutError`], [`CatalogError`])
//! - **Result type alias** ([`Result`])
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T, PiiScoutError>`]:
//!
//! ```rust
//! use piiscout::domain::{PiiScoutError, Result};
//!
//! fn example() -> Result<()> {
//!     let keywords = piiscout::core::keywords::KeywordSet::parse("ssn\nemail\n", false);
//!     if keywords.is_empty() {
//!         return Err(PiiScoutError::Keywords("empty keyword list".to_string()));
//!     }
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod findings;
pub mod result;

pub use errors::{CatalogError, PiiScoutError};
pub use findings::{
    ColumnDescriptor, DatabaseFinding, DatabaseSummary, Row, SampleValue, ScanReport,
    ScanSummary, TableFinding,
};
pub use result::Result;
