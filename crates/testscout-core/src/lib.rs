//! testscout-core: CMake/GTest test discovery engine
//!
//! This crate provides the discovery pipeline behind TestScout:
//! - Probe: query-free "does this package have tests" check
//! - CMake: file-API query client and test-target classification
//! - GTest: line-oriented scanner for TEST/TEST_F/TEST_P declarations
//! - Suite: hierarchical inventory model with name-based lookup
//! - Config: user-configurable test-registration macro patterns
//! - Errors: per-subsystem taxonomy with host-facing error codes
//!
//! The engine is invoked programmatically by a host (an editor
//! extension backend) and returns in-memory structures; it has no CLI
//! surface of its own.

pub mod cmake;
pub mod config;
pub mod errors;
pub mod gtest;
pub mod logging;
pub mod package;
pub mod probe;
pub mod shell;
pub mod suite;

// Re-exports for convenience
pub use config::{DiscoveryConfig, DEFAULT_TEST_MACROS};
pub use errors::{ConfigError, DiscoveryError, ErrorCode, QueryError, SourceError};
pub use logging::init_logging;
pub use package::PackageContext;
pub use probe::probe_package;
pub use suite::{
    assemble_suite, discover_tests, BuildTarget, TestCase, TestFixture, TestSource, TestSuite,
};
