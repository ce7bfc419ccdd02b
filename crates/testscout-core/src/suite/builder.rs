//! Suite assembly from target descriptors.

use std::path::{Path, PathBuf};

use regex::Regex;
use tracing::{info, warn};

use crate::cmake::{self, TargetReply};
use crate::config::DiscoveryConfig;
use crate::errors::{DiscoveryError, ErrorCode};
use crate::gtest;
use crate::package::PackageContext;

use super::types::{BuildTarget, TestSource, TestSuite};

/// Discover the full test inventory of one package.
///
/// Runs the file-API exchange, then assembles the suite from the reply.
/// Hard protocol failures abort the whole request; a failure to analyze
/// one source file only skips that file.
pub fn discover_tests(
    pkg: &PackageContext,
    config: &DiscoveryConfig,
) -> Result<TestSuite, DiscoveryError> {
    let patterns = config.compile_patterns()?;
    let replies = cmake::query_code_model(pkg)?;
    Ok(assemble_suite(pkg, &replies, &patterns))
}

/// Assemble the lookup model from parsed target descriptors.
///
/// Targets are keyed by name: the first descriptor seen for a name fixes
/// the recorded CMakeLists.txt path and traced line, and sources from
/// any later descriptor with the same name append to the same target.
pub fn assemble_suite(
    pkg: &PackageContext,
    replies: &[TargetReply],
    patterns: &[Regex],
) -> TestSuite {
    let mut targets: Vec<BuildTarget> = Vec::new();

    for reply in replies {
        if !cmake::is_test_target(reply) {
            continue;
        }
        for source in &reply.sources {
            let slot = match targets.iter().position(|t| t.name == reply.name) {
                Some(slot) => slot,
                None => {
                    targets.push(BuildTarget {
                        name: reply.name.clone(),
                        cmake_path: cmake_lists_path(&reply.paths.source),
                        line: cmake::trace_target_line(reply, patterns),
                        sources: Vec::new(),
                    });
                    targets.len() - 1
                }
            };
            match gtest::scan_source(&pkg.source_space.join(&source.path)) {
                Ok(fixtures) => targets[slot].sources.push(TestSource {
                    path: PathBuf::from(&source.path),
                    fixtures,
                }),
                Err(e) => {
                    warn!(
                        code = e.error_code(),
                        source = %source.path,
                        "cannot analyze test source: {e}"
                    );
                }
            }
        }
    }

    info!(package = %pkg.name, targets = targets.len(), "assembled test suite");
    TestSuite { targets }
}

/// Package-relative CMakeLists.txt path for a target's source directory.
fn cmake_lists_path(source_dir: &str) -> PathBuf {
    if source_dir.is_empty() || source_dir == "." {
        PathBuf::from("CMakeLists.txt")
    } else {
        Path::new(source_dir).join("CMakeLists.txt")
    }
}
