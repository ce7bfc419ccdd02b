//! End-to-end discovery tests over a synthetic package tree.
//!
//! The build tool itself is stubbed out through the setup command (a
//! shell function shadowing `cmake`), with the reply directory
//! pre-seeded the way a real configure step would leave it.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use testscout_core::cmake::read_reply_dir;
use testscout_core::{
    assemble_suite, discover_tests, probe_package, DiscoveryConfig, DiscoveryError,
    PackageContext, QueryError,
};

/// Test source with `FooFixture` declared at line 3 and its test case
/// at line 10 (0-based).
const TEST_FOO_CPP: &str = "\
#include <gtest/gtest.h>


class FooFixture : public ::testing::Test {
 protected:
  void SetUp() override {}
};



TEST_F(FooFixture, DoesThing) {
  EXPECT_EQ(1, 1);
}
";

const CMAKE_LISTS: &str = "\
cmake_minimum_required(VERSION 3.10)
project(foo)

find_package(GTest REQUIRED)

catkin_add_gtest(foo_test test/test_foo.cpp)
";

const TARGET_FOO_TEST_JSON: &str = r#"{
  "name": "foo_test",
  "type": "EXECUTABLE",
  "dependencies": [
    { "id": "gtest::@6890427a1f51a3e7e1df" },
    { "id": "foo_lib::@ba1e264b4a3ce0c0f1b2" }
  ],
  "sources": [
    { "path": "test/test_foo.cpp" }
  ],
  "paths": { "source": "." },
  "backtraceGraph": {
    "nodes": [
      { "file": 0 },
      { "command": 0, "file": 0, "line": 6, "parent": 0 }
    ],
    "commands": [ "catkin_add_gtest" ],
    "files": [ "CMakeLists.txt" ]
  }
}"#;

const TARGET_FOO_LIB_JSON: &str = r#"{
  "name": "foo_lib",
  "type": "STATIC_LIBRARY",
  "dependencies": [ { "id": "gtest::@6890427a1f51a3e7e1df" } ],
  "sources": [ { "path": "src/foo.cpp" } ],
  "paths": { "source": "." }
}"#;

fn write(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent dirs");
    }
    fs::write(path, content).expect("write file");
}

/// Lay out a package source tree plus a build tree whose reply
/// directory already holds the descriptors above.
fn create_package() -> (TempDir, PackageContext) {
    let dir = TempDir::new().expect("create temp dir");
    let source = dir.path().join("src/foo");
    let build = dir.path().join("build/foo");

    write(&source.join("CMakeLists.txt"), CMAKE_LISTS);
    write(&source.join("test/test_foo.cpp"), TEST_FOO_CPP);

    let reply = build.join(".cmake/api/v1/reply");
    write(
        &reply.join("target-foo_test-Debug-0123456789ab.json"),
        TARGET_FOO_TEST_JSON,
    );
    write(
        &reply.join("target-foo_lib-Debug-0123456789ab.json"),
        TARGET_FOO_LIB_JSON,
    );
    write(&reply.join("index-2026-08-04T00-00-00-0000.json"), "{}");

    let pkg = PackageContext::new("foo", &source, &build);
    (dir, pkg)
}

#[test]
fn test_end_to_end_assembly() {
    let (_dir, pkg) = create_package();
    let config = DiscoveryConfig::default();
    let patterns = config.compile_patterns().unwrap();

    let replies = read_reply_dir(&pkg.build_space).unwrap();
    assert_eq!(replies.len(), 2);

    let suite = assemble_suite(&pkg, &replies, &patterns);
    assert_eq!(suite.targets.len(), 1);

    let target = suite.build_target("foo_test").unwrap();
    assert_eq!(target.cmake_path, PathBuf::from("CMakeLists.txt"));
    assert_eq!(target.line, Some(5));
    assert_eq!(target.sources.len(), 1);
    assert_eq!(target.sources[0].path, PathBuf::from("test/test_foo.cpp"));

    let (case, fixture, source, target) = suite.test_case("FooFixture", "DoesThing").unwrap();
    assert_eq!(case.name, "DoesThing");
    assert_eq!(case.line, 10);
    assert_eq!(fixture.name, "FooFixture");
    assert_eq!(fixture.line, Some(3));
    assert_eq!(source.path, PathBuf::from("test/test_foo.cpp"));
    assert_eq!(target.name, "foo_test");
}

#[test]
fn test_discover_tests_with_stubbed_build_tool() {
    let (_dir, pkg) = create_package();
    // Shadow cmake with a no-op; the reply directory is pre-seeded.
    let pkg = pkg.with_setup_command("cmake() { :; }");

    let suite = discover_tests(&pkg, &DiscoveryConfig::default()).unwrap();

    assert!(suite.test_case("FooFixture", "DoesThing").is_some());
    let query_file = pkg
        .build_space
        .join(".cmake/api/v1/query/client-testscout/query.json");
    assert!(query_file.exists());
}

#[test]
fn test_failed_configure_aborts_discovery() {
    let (_dir, pkg) = create_package();
    let pkg = pkg.with_setup_command("exit 1");

    let err = discover_tests(&pkg, &DiscoveryConfig::default()).unwrap_err();
    assert!(matches!(
        err,
        DiscoveryError::Query(QueryError::Configure { .. })
    ));
}

#[test]
fn test_missing_reply_dir_after_configure_is_hard_failure() {
    let (_dir, pkg) = create_package();
    let pkg = pkg.with_setup_command("cmake() { :; }");
    fs::remove_dir_all(pkg.build_space.join(".cmake/api/v1/reply")).unwrap();

    let err = discover_tests(&pkg, &DiscoveryConfig::default()).unwrap_err();
    assert!(matches!(
        err,
        DiscoveryError::Query(QueryError::ReplyDirUnreadable { .. })
    ));
}

#[test]
fn test_probe_agrees_with_discovery() {
    let (_dir, pkg) = create_package();
    assert!(probe_package(&pkg.source_space, &DiscoveryConfig::default()).unwrap());
}

#[test]
fn test_probe_example_from_plain_cmake() {
    let dir = TempDir::new().unwrap();
    write(
        &dir.path().join("CMakeLists.txt"),
        "gtest_add_tests(TARGET foo_test)\nadd_executable(foo_test test/test_foo.cpp)\n",
    );
    assert!(probe_package(dir.path(), &DiscoveryConfig::default()).unwrap());

    let empty = TempDir::new().unwrap();
    write(
        &empty.path().join("CMakeLists.txt"),
        "add_executable(foo src/main.cpp)\n",
    );
    assert!(!probe_package(empty.path(), &DiscoveryConfig::default()).unwrap());
}
