//! Line-level skim of build-description files.

use std::fs;
use std::path::Path;

use regex::Regex;
use tracing::debug;

use crate::config::DiscoveryConfig;
use crate::errors::ConfigError;

use super::walker::find_cmake_lists;

/// Cheap check whether a package registers any tests.
///
/// Scans the package's CMakeLists.txt files line-by-line against the
/// configured macro patterns and returns on the first hit. No build-tool
/// invocation takes place. A file that cannot be read is skipped and the
/// probe continues; only pattern compilation can fail the call.
pub fn probe_package(package_root: &Path, config: &DiscoveryConfig) -> Result<bool, ConfigError> {
    let patterns = config.compile_patterns()?;
    Ok(any_test_declaration(package_root, &patterns))
}

fn any_test_declaration(package_root: &Path, patterns: &[Regex]) -> bool {
    for file in find_cmake_lists(package_root) {
        let text = match fs::read_to_string(&file) {
            Ok(text) => text,
            Err(e) => {
                debug!(file = %file.display(), error = %e, "skipping unreadable build file");
                continue;
            }
        };
        for line in text.lines() {
            if patterns.iter().any(|pattern| pattern.is_match(line)) {
                debug!(file = %file.display(), "found test declaration");
                return true;
            }
        }
    }
    false
}
