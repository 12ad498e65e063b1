//! Portal configuration, embedded at build time from `portal.yaml`.

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration file compiled into the frontend bundle.
pub const EMBEDDED_CONFIG: &str = include_str!("../portal.yaml");

#[derive(Error, Diagnostic, Debug)]
pub enum ConfigError {
    #[error("Invalid portal configuration: {0}")]
    #[diagnostic(code(githubsrm::config::parse))]
    Parse(String),

    #[error("page_size must be greater than zero")]
    #[diagnostic(
        code(githubsrm::config::invalid_page_size),
        help("Set page_size in portal.yaml to the number of cards per page")
    )]
    InvalidPageSize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortalConfig {
    pub site_title: String,
    /// Cards per page on paginated listings.
    pub page_size: usize,
    pub contact_email: Option<String>,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            site_title: "githubsrm".to_string(),
            page_size: 6,
            contact_email: None,
        }
    }
}

impl PortalConfig {
    pub fn from_yaml(source: &str) -> Result<Self, ConfigError> {
        let config: PortalConfig =
            serde_yaml::from_str(source).map_err(|e| ConfigError::Parse(e.to_string()))?;

        if config.page_size == 0 {
            return Err(ConfigError::InvalidPageSize);
        }

        Ok(config)
    }

    pub fn embedded() -> Result<Self, ConfigError> {
        Self::from_yaml(EMBEDDED_CONFIG)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_is_valid() {
        let config = PortalConfig::embedded().expect("embedded config should parse");
        assert!(config.page_size > 0);
        assert!(!config.site_title.is_empty());
    }

    #[test]
    fn test_missing_keys_use_defaults() {
        let config = PortalConfig::from_yaml("site_title: srm").unwrap();
        assert_eq!(config.site_title, "srm");
        assert_eq!(config.page_size, 6);
        assert_eq!(config.contact_email, None);
    }

    #[test]
    fn test_full_config() {
        let yaml = "site_title: portal\npage_size: 12\ncontact_email: team@example.org\n";
        let config = PortalConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.page_size, 12);
        assert_eq!(config.contact_email.as_deref(), Some("team@example.org"));
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let result = PortalConfig::from_yaml("page_size: 0");
        assert!(matches!(result, Err(ConfigError::InvalidPageSize)));
    }

    #[test]
    fn test_malformed_yaml_rejected() {
        let result = PortalConfig::from_yaml("page_size: [not, a, number]");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
