//! Suite types - the hierarchical test inventory model
//!
//! Strict ownership, four levels deep: suite → build target → test source
//! → fixture → test case. Names are unique only within their immediate
//! parent; every lookup is a linear first-match scan in insertion order.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// The full test inventory of one package.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestSuite {
    /// Test build targets in discovery order.
    pub targets: Vec<BuildTarget>,
}

impl TestSuite {
    /// Find a build target by name.
    pub fn build_target(&self, name: &str) -> Option<&BuildTarget> {
        self.targets.iter().find(|target| target.name == name)
    }

    /// Find a fixture by name anywhere in the suite.
    pub fn fixture(&self, name: &str) -> Option<(&TestFixture, &TestSource, &BuildTarget)> {
        for target in &self.targets {
            if let Some((fixture, source)) = target.fixture(name) {
                return Some((fixture, source, target));
            }
        }
        None
    }

    /// Find a test case by fixture and case name anywhere in the suite.
    pub fn test_case(
        &self,
        fixture_name: &str,
        case_name: &str,
    ) -> Option<(&TestCase, &TestFixture, &TestSource, &BuildTarget)> {
        for target in &self.targets {
            if let Some((case, fixture, source)) = target.test_case(fixture_name, case_name) {
                return Some((case, fixture, source, target));
            }
        }
        None
    }
}

/// One compiled test executable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildTarget {
    /// Build-tool target identifier, unique within the suite.
    pub name: String,
    /// Package-relative path of the CMakeLists.txt defining the target.
    pub cmake_path: PathBuf,
    /// 0-based line of the macro invocation naming the target, when the
    /// backtrace graph resolves one.
    pub line: Option<usize>,
    /// Source files contributing test declarations, in reply order.
    pub sources: Vec<TestSource>,
}

impl BuildTarget {
    /// Find a fixture by name within this target.
    pub fn fixture(&self, name: &str) -> Option<(&TestFixture, &TestSource)> {
        for source in &self.sources {
            if let Some(fixture) = source.fixture(name) {
                return Some((fixture, source));
            }
        }
        None
    }

    /// Find a test case by fixture and case name within this target.
    pub fn test_case(
        &self,
        fixture_name: &str,
        case_name: &str,
    ) -> Option<(&TestCase, &TestFixture, &TestSource)> {
        for source in &self.sources {
            if let Some((case, fixture)) = source.test_case(fixture_name, case_name) {
                return Some((case, fixture, source));
            }
        }
        None
    }
}

/// One source file contributing test declarations to a build target.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestSource {
    /// Path relative to the package root.
    pub path: PathBuf,
    /// Fixtures in order of first appearance in the file.
    pub fixtures: Vec<TestFixture>,
}

impl TestSource {
    /// Find a fixture by name within this source file.
    pub fn fixture(&self, name: &str) -> Option<&TestFixture> {
        self.fixtures.iter().find(|fixture| fixture.name == name)
    }

    /// Find a test case by fixture and case name within this source file.
    pub fn test_case(
        &self,
        fixture_name: &str,
        case_name: &str,
    ) -> Option<(&TestCase, &TestFixture)> {
        let fixture = self.fixture(fixture_name)?;
        let case = fixture.test_case(case_name)?;
        Some((case, fixture))
    }
}

/// A named grouping of test cases, corresponding to a test-fixture class.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestFixture {
    /// Fixture name, unique within its source file.
    pub name: String,
    /// Best-effort 0-based line of the fixture's first standalone mention
    /// in the file.
    pub line: Option<usize>,
    /// Test cases in declaration order.
    pub cases: Vec<TestCase>,
}

impl TestFixture {
    /// Find a test case by name within this fixture.
    pub fn test_case(&self, name: &str) -> Option<&TestCase> {
        self.cases.iter().find(|case| case.name == name)
    }
}

/// One test declaration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestCase {
    /// Test case name.
    pub name: String,
    /// 0-based line of the declaring macro invocation.
    pub line: usize,
}
