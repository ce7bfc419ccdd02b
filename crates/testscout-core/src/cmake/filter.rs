//! Test-target classification over parsed target descriptors.

use regex::Regex;

use super::types::TargetReply;

/// Whether a target descriptor denotes a test executable.
///
/// A target qualifies iff it is an `EXECUTABLE` and at least one
/// dependency id contains `gtest` or `gmock`. Substring matching is
/// deliberately permissive: it catches static/shared variants and
/// versioned library names alike.
pub fn is_test_target(target: &TargetReply) -> bool {
    if target.target_type != "EXECUTABLE" {
        return false;
    }
    match &target.dependencies {
        Some(dependencies) => dependencies
            .iter()
            .any(|dependency| dependency.id.contains("gtest") || dependency.id.contains("gmock")),
        None => false,
    }
}

/// Resolve the 0-based build-description line defining the target.
///
/// Walks the backtrace graph in node order and returns the line of the
/// first node whose command matches a configured test-macro pattern.
/// Nodes without a command or without a line are skipped; `None` means
/// the target has no resolvable declaration site.
pub fn trace_target_line(target: &TargetReply, patterns: &[Regex]) -> Option<usize> {
    let graph = target.backtrace_graph.as_ref()?;
    for node in &graph.nodes {
        if let Some(command_index) = node.command {
            if let Some(command) = graph.commands.get(command_index) {
                if patterns.iter().any(|pattern| pattern.is_match(command)) {
                    if let Some(line) = node.line {
                        return Some(line.saturating_sub(1));
                    }
                }
            }
        }
    }
    None
}
