//! Quick-scan probe - query-free test existence check
//!
//! Answers "does this package register any tests at all" by scanning its
//! build-description files directly, without touching the build tool.

mod skim;
mod walker;

pub use skim::probe_package;
pub use walker::find_cmake_lists;
