//! Suite assembly & lookup model
//!
//! The queryable artifact handed back to the host: a 4-level ownership
//! hierarchy with name-based descent at every level, plus the assembly
//! that builds it from target descriptors.

mod builder;
mod types;

pub use builder::{assemble_suite, discover_tests};
pub use types::{BuildTarget, TestCase, TestFixture, TestSource, TestSuite};
