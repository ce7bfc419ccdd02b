//! CMake file-API integration
//!
//! Drives the build tool's file-based introspection protocol:
//! - `query`: writes the codemodel query, reruns configure, reads replies
//! - `types`: serde views over target descriptor JSON
//! - `filter`: test-target classification and defining-line backtrace

mod filter;
mod query;
mod types;

pub use filter::{is_test_target, trace_target_line};
pub use query::{
    query_code_model, read_reply_dir, run_configure, write_query_file, CLIENT_ID, CODEMODEL_QUERY,
};
pub use types::{
    BacktraceGraph, BacktraceNode, TargetDependency, TargetPaths, TargetReply, TargetSource,
};
