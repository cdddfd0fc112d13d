//! Narrative text report
//!
//! The layout is line-for-line stable: the same [`ScanReport`] always
//! renders to byte-identical output.

use crate::core::report::sink::ReportSink;
use crate::domain::{DatabaseFinding, DatabaseSummary, Result, Row, ScanReport, TableFinding};

const BANNER: &str = "
        ================================================================
        ||                 PII DATA DETECTOR                 ||
        ================================================================
        ";
const SUMMARY_TITLE: &str = "||                 SUMMARY                 ||\n";
const SCAN_COMPLETE: &str = "******Scan Has Been Completed!!!*********";
const DATABASE_LIST_FAILED: &str = "Failed to retrieve database list.";

const RULE_WIDTH: usize = 64;
const DATABASE_RULE_WIDTH: usize = 89;

/// Renders a [`ScanReport`] as the detailed section followed by the summary
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportRenderer;

impl ReportRenderer {
    /// Create a new renderer
    pub fn new() -> Self {
        Self
    }

    /// Writes the full report to `sink`
    ///
    /// # Errors
    ///
    /// Returns an error if the sink cannot be written.
    pub fn render(&self, report: &ScanReport, sink: &mut dyn ReportSink) -> Result<()> {
        self.render_detailed(report, sink)?;
        self.render_summary(report, sink)?;
        sink.flush()
    }

    /// Writes the banner, the database list and every table verdict
    ///
    /// # Errors
    ///
    /// Returns an error if the sink cannot be written.
    pub fn render_detailed(&self, report: &ScanReport, sink: &mut dyn ReportSink) -> Result<()> {
        if report.database_list_missing() {
            return sink.write_line(DATABASE_LIST_FAILED);
        }

        sink.write_line(BANNER)?;
        sink.write_line("List of databases on the server:")?;
        for database in &report.databases {
            sink.write_line(&format!("  - {}", database.database_name))?;
        }

        sink.write_line(&format!("\n{}\n", "-".repeat(RULE_WIDTH)))?;

        for database in &report.databases {
            self.render_database(database, sink)?;
            sink.write_line(&format!("\n{}\n", "-".repeat(DATABASE_RULE_WIDTH)))?;
        }

        Ok(())
    }

    /// Writes the completion banner and the per-database counters
    ///
    /// # Errors
    ///
    /// Returns an error if the sink cannot be written.
    pub fn render_summary(&self, report: &ScanReport, sink: &mut dyn ReportSink) -> Result<()> {
        let rule = "=".repeat(RULE_WIDTH);

        sink.write_line("\n\n")?;
        sink.write_line(SCAN_COMPLETE)?;
        sink.write_line(&format!("\n\n{}\n", rule))?;
        sink.write_line(SUMMARY_TITLE)?;
        sink.write_line(&format!("{}\n", rule))?;
        sink.write_line(&format!(
            "Total number of databases: {}",
            report.summary.total_databases()
        ))?;

        for database in &report.summary.databases {
            render_database_summary(database, sink)?;
        }

        Ok(())
    }

    fn render_database(&self, database: &DatabaseFinding, sink: &mut dyn ReportSink) -> Result<()> {
        if database.tables.is_empty() {
            return sink.write_line(&format!("\nNo tables found in {}", database.database_name));
        }

        sink.write_line(&format!("\nTables in {}:", database.database_name))?;
        for table in &database.tables {
            render_table(table, sink)?;
        }
        Ok(())
    }
}

fn render_table(table: &TableFinding, sink: &mut dyn ReportSink) -> Result<()> {
    sink.write_line(&format!("  - {}", table.table_name))?;

    if !table.is_pii {
        sink.write_line("    PII data not detected.")?;
        return sink.write_line("\n");
    }

    sink.write_line("    PII data detected!")?;
    match table.sample_rows.as_deref() {
        Some(rows) if !rows.is_empty() => {
            sink.write_line("    Table contents:")?;
            sink.write_line(&format_sample(rows))?;
        }
        _ => sink.write_line("    No data found in the table.")?,
    }
    sink.write_line("\n")
}

fn render_database_summary(database: &DatabaseSummary, sink: &mut dyn ReportSink) -> Result<()> {
    sink.write_line(&format!("  - {}:", database.database_name))?;
    sink.write_line(&format!("    Total tables: {}", database.total_tables))?;
    sink.write_line(&format!(
        "    Tables with PII data: {}",
        database.pii_table_count()
    ))?;

    if database.pii_tables.is_empty() {
        sink.write_line("    No tables contain PII data")
    } else {
        sink.write_line(&format!(
            "    PII data detected in tables: {}",
            quoted_list(&database.pii_tables)
        ))
    }
}

/// Formats sampled rows as a tab-separated table
///
/// The header line repeats the values of the first row, not the column
/// names, and the divider is sized to those values. Every line, including
/// the last, ends with a newline. An empty sample renders `No data found.`.
///
/// Cells use the server's text rendering with NULL shown as `None`. Other
/// values are not Python `str()` renderings: PostgreSQL booleans print as
/// `t`/`f` and temporal values use the server's own format.
pub fn format_sample(rows: &[Row]) -> String {
    let Some(first) = rows.first() else {
        return "No data found.".to_string();
    };

    let header: Vec<String> = first.iter().map(ToString::to_string).collect();
    let divider: Vec<String> = header
        .iter()
        .map(|field| "-".repeat(field.chars().count()))
        .collect();

    let mut out = format!("{}\n{}\n", header.join("\t"), divider.join("\t"));
    for row in rows {
        let values: Vec<String> = row.iter().map(ToString::to_string).collect();
        out.push_str(&values.join("\t"));
        out.push('\n');
    }
    out
}

/// `['a', 'b']` style list of quoted names
fn quoted_list(names: &[String]) -> String {
    let quoted: Vec<String> = names.iter().map(|name| quote_name(name)).collect();
    format!("[{}]", quoted.join(", "))
}

/// Python `repr` quoting: single quotes unless the name holds only `'`
fn quote_name(name: &str) -> String {
    let quote = if name.contains('\'') && !name.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut out = String::with_capacity(name.len() + 2);
    out.push(quote);
    for c in name.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if c.is_control() => out.push_str(&format!("\\x{:02x}", u32::from(c))),
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}
