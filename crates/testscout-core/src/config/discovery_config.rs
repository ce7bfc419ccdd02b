//! Discovery configuration.

use std::fs;
use std::path::Path;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Default macros that register a GTest executable in a CMakeLists.txt.
///
/// Covers the catkin, ament and plain-CMake registration families. Each
/// entry is a regex fragment matched anywhere in a line or command string.
pub const DEFAULT_TEST_MACROS: &[&str] = &[
    "catkin_add_gtest",
    "catkin_add_gmock",
    "ament_add_gtest",
    "ament_add_gmock",
    "add_rostest_gtest",
    "gtest_add_tests",
];

/// Configuration for a discovery request.
///
/// Hosts usually build this from their own settings surface; `Default`
/// gives the stock macro set.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscoveryConfig {
    /// Regex fragments recognizing test-registration macros in
    /// build-description files and target-defining commands.
    pub test_macro_patterns: Vec<String>,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            test_macro_patterns: DEFAULT_TEST_MACROS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl DiscoveryConfig {
    /// Parse a configuration from TOML text. `origin` is only used in
    /// error messages.
    pub fn from_toml_str(text: &str, origin: &str) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|e| ConfigError::Parse {
            path: origin.to_string(),
            message: e.to_string(),
        })
    }

    /// Load a configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        Self::from_toml_str(&text, &path.display().to_string())
    }

    /// Compile the configured pattern fragments.
    ///
    /// Fragments are matched unanchored, so a match may occur anywhere in
    /// the inspected line or command string.
    pub fn compile_patterns(&self) -> Result<Vec<Regex>, ConfigError> {
        self.test_macro_patterns
            .iter()
            .map(|pattern| {
                Regex::new(pattern).map_err(|e| ConfigError::InvalidPattern {
                    pattern: pattern.clone(),
                    message: e.to_string(),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_patterns_compile() {
        let config = DiscoveryConfig::default();
        let patterns = config.compile_patterns().unwrap();
        assert_eq!(patterns.len(), DEFAULT_TEST_MACROS.len());
        assert!(patterns[0].is_match("catkin_add_gtest(${PROJECT_NAME}-test test/test_foo.cpp)"));
    }

    #[test]
    fn test_invalid_pattern_rejected() {
        let config = DiscoveryConfig {
            test_macro_patterns: vec!["(".to_string()],
        };
        let err = config.compile_patterns().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPattern { .. }));
    }

    #[test]
    fn test_from_toml() {
        let config = DiscoveryConfig::from_toml_str(
            r#"test_macro_patterns = ["my_custom_gtest_macro"]"#,
            "inline",
        )
        .unwrap();
        assert_eq!(config.test_macro_patterns, vec!["my_custom_gtest_macro"]);
    }

    #[test]
    fn test_from_toml_empty_uses_defaults() {
        let config = DiscoveryConfig::from_toml_str("", "inline").unwrap();
        assert_eq!(config.test_macro_patterns.len(), DEFAULT_TEST_MACROS.len());
    }
}
