//! Static showcase of projects maintained through the portal.
//!
//! The catalog is compiled into the bundle; nothing is fetched at runtime.

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const EMBEDDED_CATALOG: &str = include_str!("../assets/projects.json");

#[derive(Error, Diagnostic, Debug)]
pub enum CatalogError {
    #[error("Invalid project catalog: {0}")]
    #[diagnostic(code(githubsrm::catalog::parse))]
    Parse(String),
}

/// Project card shown on the showcase page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub description: String,
    pub repository: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

pub fn parse_catalog(source: &str) -> Result<Vec<Project>, CatalogError> {
    serde_json::from_str(source).map_err(|e| CatalogError::Parse(e.to_string()))
}

pub fn embedded_catalog() -> Result<Vec<Project>, CatalogError> {
    parse_catalog(EMBEDDED_CATALOG)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_catalog_parses() {
        let projects = embedded_catalog().unwrap();
        assert!(!projects.is_empty());
        assert!(
            projects
                .iter()
                .all(|p| p.repository.starts_with("https://example.org/projects/"))
        );
    }

    #[test]
    fn test_tags_default_to_empty() {
        let projects =
            parse_catalog(r#"[{"name":"a","description":"b","repository":"https://x"}]"#)
                .unwrap();
        assert_eq!(projects.len(), 1);
        assert!(projects[0].tags.is_empty());
    }

    #[test]
    fn test_invalid_catalog_rejected() {
        let result = parse_catalog(r#"{"name": "not a list"}"#);
        assert!(matches!(result, Err(CatalogError::Parse(_))));
    }
}
