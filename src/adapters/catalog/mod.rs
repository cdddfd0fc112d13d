//! Server catalog access
//!
//! This module defines the dialect boundary of the scanner and the factory
//! that picks a backend from configuration.

pub mod factory;
pub mod resilient;
pub mod traits;

pub use factory::{create_catalog, excluded_databases};
pub use resilient::{ResilientCatalog, TracingErrorSink};
pub use traits::{CatalogBackend, CatalogOperation, CatalogProvider, ErrorSink};

/// Drops every name listed in `excluded`, keeping server order
pub(crate) fn without_excluded(names: Vec<String>, excluded: &[String]) -> Vec<String> {
    names
        .into_iter()
        .filter(|name| !excluded.iter().any(|e| e == name))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_without_excluded_keeps_order() {
        let names = vec![
            "mysql".to_string(),
            "shop".to_string(),
            "information_schema".to_string(),
            "crm".to_string(),
        ];
        let excluded = vec!["mysql".to_string(), "information_schema".to_string()];

        assert_eq!(without_excluded(names, &excluded), vec!["shop", "crm"]);
    }

    #[test]
    fn test_without_excluded_is_case_sensitive() {
        let names = vec!["MySQL".to_string()];
        let excluded = vec!["mysql".to_string()];

        assert_eq!(without_excluded(names, &excluded), vec!["MySQL"]);
    }
}
