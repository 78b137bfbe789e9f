//! Controller configuration.
//!
//! The configuration deserializes from TOML, so hosts can keep the
//! autocomplete knobs next to their other settings:
//!
//! ```toml
//! min_chars = 2
//! case_sensitive = false
//! max_distance = 1
//! max_results = 5
//! ```
//!
//! Every field is optional and falls back to its default.

use std::path::Path;

use serde::Deserialize;

use crate::matching::MatchConfig;

/// Configuration for [`AutocompleteController`](super::AutocompleteController).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AutocompleteConfig {
    /// Minimum number of characters the query needs before the filter
    /// runs at all.
    pub min_chars: usize,

    /// Parameters forwarded to the match filter.
    #[serde(flatten)]
    pub matching: MatchConfig,
}

impl Default for AutocompleteConfig {
    fn default() -> Self {
        Self {
            min_chars: 2,
            matching: MatchConfig::default(),
        }
    }
}

impl AutocompleteConfig {
    /// Parse a configuration from TOML content.
    pub fn parse_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load a configuration from a TOML file path.
    ///
    /// Returns `None` if the file does not exist or cannot be parsed.
    pub fn load_from_toml_path(path: &Path) -> Option<Self> {
        if !path.exists() {
            return None;
        }

        let content = std::fs::read_to_string(path).ok()?;
        Self::parse_toml(&content).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AutocompleteConfig::default();

        assert_eq!(config.min_chars, 2);
        assert!(!config.matching.case_sensitive);
        assert_eq!(config.matching.max_distance, 0);
        assert_eq!(config.matching.max_results, 5);
    }

    #[test]
    fn test_parse_toml_full() {
        let config = AutocompleteConfig::parse_toml(
            r#"
            min_chars = 3
            case_sensitive = true
            max_distance = 1
            max_results = 8
            "#,
        )
        .unwrap();

        assert_eq!(config.min_chars, 3);
        assert!(config.matching.case_sensitive);
        assert_eq!(config.matching.max_distance, 1);
        assert_eq!(config.matching.max_results, 8);
    }

    #[test]
    fn test_parse_toml_partial_falls_back_to_defaults() {
        let config = AutocompleteConfig::parse_toml("max_distance = 2").unwrap();

        assert_eq!(config.min_chars, 2);
        assert_eq!(config.matching.max_distance, 2);
        assert_eq!(config.matching.max_results, 5);
    }

    #[test]
    fn test_parse_toml_empty_is_default() {
        let config = AutocompleteConfig::parse_toml("").unwrap();
        assert_eq!(config, AutocompleteConfig::default());
    }

    #[test]
    fn test_parse_toml_rejects_malformed_input() {
        assert!(AutocompleteConfig::parse_toml("min_chars = \"two\"").is_err());
    }

    #[test]
    fn test_load_missing_path_is_none() {
        let loaded = AutocompleteConfig::load_from_toml_path(Path::new("/nonexistent/autotext.toml"));
        assert!(loaded.is_none());
    }
}
