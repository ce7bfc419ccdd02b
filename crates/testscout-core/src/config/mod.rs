//! Discovery configuration.

mod discovery_config;

pub use discovery_config::{DiscoveryConfig, DEFAULT_TEST_MACROS};
