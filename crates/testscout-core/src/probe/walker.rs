//! Build-description file enumeration.

use std::path::{Path, PathBuf};

use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;
use once_cell::sync::Lazy;

/// Include pattern for build-description files.
static CMAKE_LISTS_GLOB: Lazy<GlobSet> = Lazy::new(|| {
    let mut builder = GlobSetBuilder::new();
    if let Ok(glob) = Glob::new("**/CMakeLists.txt") {
        builder.add(glob);
    }
    builder
        .build()
        .unwrap_or_else(|_| GlobSetBuilder::new().build().expect("empty glob set"))
});

/// Enumerate every CMakeLists.txt under `root`, in sorted order.
///
/// The walk consults no ignore files and descends into hidden entries;
/// every build-description file in the tree is a probe candidate.
pub fn find_cmake_lists(root: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for entry in WalkBuilder::new(root).standard_filters(false).build() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(_) => continue,
        };
        if !entry.file_type().map_or(false, |t| t.is_file()) {
            continue;
        }
        let path = entry.path();
        let relative = path.strip_prefix(root).unwrap_or(path);
        if CMAKE_LISTS_GLOB.is_match(relative) {
            files.push(path.to_path_buf());
        }
    }
    files.sort();
    files
}
