//! Serde views over CMake file-API reply documents.

use serde::Deserialize;

/// One target descriptor from the reply directory.
///
/// Only the fields the discovery pipeline consumes are modeled, all
/// optional or defaulted: the reply directory holds JSON shapes other
/// than full target descriptors, and even target files vary by CMake
/// version.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TargetReply {
    /// Build-tool target identifier.
    pub name: String,
    /// Target type, e.g. `EXECUTABLE` or `STATIC_LIBRARY`.
    #[serde(rename = "type")]
    pub target_type: String,
    /// Link/usage dependency identifiers; absent on descriptors that
    /// are not real targets.
    pub dependencies: Option<Vec<TargetDependency>>,
    /// Source files compiled into the target.
    pub sources: Vec<TargetSource>,
    /// Source/build directory paths of the defining CMakeLists.txt.
    pub paths: TargetPaths,
    /// Provenance graph mapping the target back to build-description
    /// commands and lines.
    #[serde(rename = "backtraceGraph")]
    pub backtrace_graph: Option<BacktraceGraph>,
}

/// One dependency edge of a target.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TargetDependency {
    /// Dependency identifier, `<name>::@<directory-hash>`.
    pub id: String,
}

/// One source file entry of a target.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TargetSource {
    /// Path relative to the top-level source directory.
    pub path: String,
}

/// Directory paths of a target's defining CMakeLists.txt.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TargetPaths {
    /// Source directory relative to the top-level source directory.
    pub source: String,
}

/// Backtrace graph embedded in a target descriptor.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BacktraceGraph {
    /// Backtrace nodes in evaluation order.
    pub nodes: Vec<BacktraceNode>,
    /// Command name table indexed by `BacktraceNode::command`.
    pub commands: Vec<String>,
}

/// One node of the backtrace graph.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BacktraceNode {
    /// Index into the command table; absent on file-level nodes.
    pub command: Option<usize>,
    /// 1-based line in the build-description file issuing the command.
    pub line: Option<usize>,
}
