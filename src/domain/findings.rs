//! Scan findings model
//!
//! Every type here is created once during a scan run and never mutated
//! afterwards. The renderer and the JSON export only read them.

use serde::{Serialize, Serializer};
use std::fmt;

/// A column as reported by the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnDescriptor {
    /// Column name
    pub name: String,
}

impl ColumnDescriptor {
    /// Creates a new column descriptor
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl From<&str> for ColumnDescriptor {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// A single sampled cell
///
/// Backends stringify values on the server side, so the only distinctions
/// kept are SQL NULL, textual values and raw bytes that are not valid UTF-8.
/// NULL displays as `None` and serializes as JSON `null`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SampleValue {
    /// SQL NULL
    Null,
    /// Textual rendering of any scalar
    Text(String),
    /// Binary value that is not valid UTF-8
    Bytes(Vec<u8>),
}

impl SampleValue {
    /// Creates a text value
    pub fn text(value: impl Into<String>) -> Self {
        SampleValue::Text(value.into())
    }
}

impl fmt::Display for SampleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SampleValue::Null => write!(f, "None"),
            SampleValue::Text(s) => write!(f, "{s}"),
            SampleValue::Bytes(bytes) => {
                write!(f, "0x")?;
                for byte in bytes {
                    write!(f, "{byte:02x}")?;
                }
                Ok(())
            }
        }
    }
}

impl Serialize for SampleValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            SampleValue::Null => serializer.serialize_none(),
            SampleValue::Text(s) => serializer.serialize_str(s),
            SampleValue::Bytes(_) => serializer.serialize_str(&self.to_string()),
        }
    }
}

/// One sampled row; arity equals the table's column count at sampling time
pub type Row = Vec<SampleValue>;

/// Verdict for a single table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableFinding {
    /// Table name as reported by the catalog
    pub table_name: String,

    /// Whether any column name matched a keyword
    pub is_pii: bool,

    /// Row sample, present only when `is_pii` is true (and possibly empty)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sample_rows: Option<Vec<Row>>,
}

impl TableFinding {
    /// Finding for a table with no PII-indicating column
    pub fn clean(table_name: impl Into<String>) -> Self {
        Self {
            table_name: table_name.into(),
            is_pii: false,
            sample_rows: None,
        }
    }

    /// Finding for a table flagged as PII, with its row sample
    pub fn pii(table_name: impl Into<String>, sample_rows: Vec<Row>) -> Self {
        Self {
            table_name: table_name.into(),
            is_pii: true,
            sample_rows: Some(sample_rows),
        }
    }
}

/// Findings for one database, tables in catalog order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatabaseFinding {
    /// Database (or schema) name
    pub database_name: String,

    /// One finding per table the catalog reported
    pub tables: Vec<TableFinding>,
}

impl DatabaseFinding {
    /// Creates a database finding
    pub fn new(database_name: impl Into<String>, tables: Vec<TableFinding>) -> Self {
        Self {
            database_name: database_name.into(),
            tables,
        }
    }

    /// Names of the tables flagged as PII, in catalog order
    pub fn pii_table_names(&self) -> Vec<String> {
        self.tables
            .iter()
            .filter(|t| t.is_pii)
            .map(|t| t.table_name.clone())
            .collect()
    }
}

/// Per-database summary counters
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatabaseSummary {
    /// Database name
    pub database_name: String,

    /// Number of tables in the database
    pub total_tables: usize,

    /// Tables flagged as PII, in catalog order
    pub pii_tables: Vec<String>,
}

impl DatabaseSummary {
    /// Number of tables flagged as PII
    pub fn pii_table_count(&self) -> usize {
        self.pii_tables.len()
    }
}

/// Aggregate summary of a scan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct ScanSummary {
    /// Per-database counters in scan order
    pub databases: Vec<DatabaseSummary>,
}

impl ScanSummary {
    /// Total number of databases scanned
    pub fn total_databases(&self) -> usize {
        self.databases.len()
    }

    /// Total number of tables flagged as PII across all databases
    pub fn total_pii_tables(&self) -> usize {
        self.databases.iter().map(|d| d.pii_table_count()).sum()
    }

    /// Derives the summary from already-collected findings
    pub fn from_findings(findings: &[DatabaseFinding]) -> Self {
        let databases = findings
            .iter()
            .map(|db| DatabaseSummary {
                database_name: db.database_name.clone(),
                total_tables: db.tables.len(),
                pii_tables: db.pii_table_names(),
            })
            .collect();

        Self { databases }
    }
}

/// Complete result of one scan run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScanReport {
    /// Detailed findings in catalog order
    pub databases: Vec<DatabaseFinding>,

    /// Summary counters
    pub summary: ScanSummary,
}

impl ScanReport {
    /// Builds a report whose summary is aggregated from the findings
    pub fn from_findings(databases: Vec<DatabaseFinding>) -> Self {
        let summary = ScanSummary::from_findings(&databases);
        Self { databases, summary }
    }

    /// Whether the catalog returned no databases at all
    pub fn database_list_missing(&self) -> bool {
        self.databases.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_findings() -> Vec<DatabaseFinding> {
        vec![
            DatabaseFinding::new(
                "shop",
                vec![
                    TableFinding::pii("users", vec![vec![SampleValue::text("1")]]),
                    TableFinding::clean("logs"),
                    TableFinding::pii("orders", vec![]),
                ],
            ),
            DatabaseFinding::new("empty", vec![]),
        ]
    }

    #[test]
    fn test_summary_from_findings() {
        let summary = ScanSummary::from_findings(&sample_findings());

        assert_eq!(summary.total_databases(), 2);
        assert_eq!(summary.databases[0].total_tables, 3);
        assert_eq!(summary.databases[0].pii_tables, vec!["users", "orders"]);
        assert_eq!(summary.databases[1].total_tables, 0);
        assert_eq!(summary.databases[1].pii_table_count(), 0);
        assert_eq!(summary.total_pii_tables(), 2);
    }

    #[test]
    fn test_sample_value_display() {
        assert_eq!(SampleValue::Null.to_string(), "None");
        assert_eq!(SampleValue::text("alice").to_string(), "alice");
        assert_eq!(SampleValue::Bytes(vec![0xde, 0xad]).to_string(), "0xdead");
    }

    #[test]
    fn test_clean_finding_has_no_sample() {
        let finding = TableFinding::clean("logs");
        assert!(!finding.is_pii);
        assert!(finding.sample_rows.is_none());
    }

    #[test]
    fn test_report_serializes_null_cells() {
        let report = ScanReport::from_findings(vec![DatabaseFinding::new(
            "shop",
            vec![TableFinding::pii(
                "users",
                vec![vec![SampleValue::Null, SampleValue::text("a@b.c")]],
            )],
        )]);

        let json = serde_json::to_value(&report).unwrap();
        let row = &json["databases"][0]["tables"][0]["sample_rows"][0];
        assert!(row[0].is_null());
        assert_eq!(row[1], "a@b.c");
        assert_eq!(json["summary"]["databases"][0]["pii_tables"][0], "users");
    }

    #[test]
    fn test_report_without_databases() {
        let report = ScanReport::from_findings(vec![]);
        assert!(report.database_list_missing());
        assert_eq!(report.summary.total_databases(), 0);
    }
}
