//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the TestScout tracing/logging system.
///
/// Reads `TESTSCOUT_LOG` environment variable for per-subsystem log levels.
/// Format: `TESTSCOUT_LOG=probe=debug,cmake=info,gtest=warn`
///
/// Falls back to `testscout=info` if `TESTSCOUT_LOG` is not set or is invalid.
///
/// This function is idempotent — calling it multiple times is safe.
pub fn init_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("TESTSCOUT_LOG")
            .unwrap_or_else(|_| EnvFilter::new("testscout=info"));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .init();
    });
}
