//! Logging and observability.

mod setup;

pub use setup::init_logging;
