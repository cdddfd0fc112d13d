//! Integration tests for keyword list loading and column matching

use piiscout::core::keywords::KeywordSet;
use piiscout::core::matcher::{first_match, is_pii};
use piiscout::domain::{ColumnDescriptor, PiiScoutError};
use tempfile::TempDir;
use test_case::test_case;

fn columns(names: &[&str]) -> Vec<ColumnDescriptor> {
    names.iter().copied().map(ColumnDescriptor::from).collect()
}

#[test]
fn test_load_trims_and_lowercases() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("keywords.txt");
    std::fs::write(&path, "  SSN \r\nEmail\nemail\nphone").unwrap();

    let keywords = KeywordSet::load(&path, false).unwrap();

    assert_eq!(keywords.iter().collect::<Vec<_>>(), vec!["email", "phone", "ssn"]);
    assert!(!keywords.contains_blank());
}

#[test]
fn test_load_keeps_blank_lines_unless_skipped() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("keywords.txt");
    std::fs::write(&path, "ssn\n\n   \nemail\n").unwrap();

    let kept = KeywordSet::load(&path, false).unwrap();
    assert!(kept.contains_blank());
    assert!(is_pii(&columns(&["id"]), &kept));

    let skipped = KeywordSet::load(&path, true).unwrap();
    assert!(!skipped.contains_blank());
    assert!(!is_pii(&columns(&["id"]), &skipped));
}

#[test]
fn test_load_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let err = KeywordSet::load(temp_dir.path().join("absent.txt"), false).unwrap_err();

    assert!(matches!(err, PiiScoutError::Keywords(_)));
    assert!(err.to_string().contains("absent.txt"));
}

#[test]
fn test_load_rejects_invalid_utf8() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("keywords.txt");
    std::fs::write(&path, [0xff, 0xfe, b'\n']).unwrap();

    assert!(KeywordSet::load(&path, false).is_err());
}

#[test_case(&["id", "user_email", "created_at"], true ; "users table")]
#[test_case(&["id", "event", "ts"], false ; "logs table")]
#[test_case(&["Customer_SSN"], true ; "mixed case column")]
#[test_case(&["emai"], false ; "partial keyword")]
fn test_reference_tables(names: &[&str], expected: bool) {
    let keywords = KeywordSet::new(["ssn", "email"]);
    assert_eq!(is_pii(&columns(names), &keywords), expected);
}

#[test]
fn test_first_match_reports_column_and_keyword() {
    let keywords = KeywordSet::new(["ssn", "email"]);
    let cols = columns(&["id", "backup_email", "ssn"]);

    let hit = first_match(&cols, &keywords).unwrap();
    assert_eq!(hit.column, "backup_email");
    assert_eq!(hit.keyword, "email");
}
