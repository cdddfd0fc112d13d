//! Scan orchestration
//!
//! This module drives the catalog traversal and computes the summary.

pub mod orchestrator;
pub mod stats;

pub use orchestrator::{rescan_summary, ScanOrchestrator, DEFAULT_SAMPLE_LIMIT};
pub use stats::ScanStats;
