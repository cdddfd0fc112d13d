//! Column-name based PII matching

use crate::core::keywords::KeywordSet;
use crate::domain::ColumnDescriptor;

/// A column whose name contains a keyword
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMatch<'a> {
    /// Matching column
    pub column: &'a str,
    /// Keyword found in the column name
    pub keyword: &'a str,
}

/// True iff at least one column name contains a keyword
///
/// Stops at the first matching column.
pub fn is_pii(columns: &[ColumnDescriptor], keywords: &KeywordSet) -> bool {
    first_match(columns, keywords).is_some()
}

/// The first column (in catalog order) that matches a keyword
pub fn first_match<'a>(
    columns: &'a [ColumnDescriptor],
    keywords: &'a KeywordSet,
) -> Option<ColumnMatch<'a>> {
    columns.iter().find_map(|column| {
        keywords
            .first_match(&column.name)
            .map(|keyword| ColumnMatch {
                column: &column.name,
                keyword,
            })
    })
}
