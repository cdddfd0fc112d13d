//! Report rendering and output
//!
//! - [`renderer`] - Narrative text report (detailed section and summary)
//! - [`sink`] - Line-oriented destinations for the rendered report
//! - [`json`] - Machine-readable export of the same findings

pub mod json;
pub mod renderer;
pub mod sink;

pub use json::{write_json_report, JsonReport};
pub use renderer::{format_sample, ReportRenderer};
pub use sink::{FileSink, ReportSink, WriterSink};

/// Suffix shared by every report file name
const REPORT_SUFFIX: &str = "_database_pii_detection";

/// Text report file name for `host`
///
/// Path separators in the host are replaced so the file always lands in
/// the output directory.
pub fn report_file_name(host: &str) -> String {
    format!("{}{}.txt", file_stem(host), REPORT_SUFFIX)
}

/// JSON report file name for `host`
pub fn json_report_file_name(host: &str) -> String {
    format!("{}{}.json", file_stem(host), REPORT_SUFFIX)
}

fn file_stem(host: &str) -> String {
    host.replace(['/', '\\'], "_")
}
