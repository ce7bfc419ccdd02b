//! GTest source scanner - macro declaration discovery
//!
//! A line-oriented mini-parser recognizing the `TEST`/`TEST_F`/`TEST_P`
//! declaration family. Deliberately not a C++ parser: it pattern-matches
//! trimmed line text and tolerates being wrong on heavily macro-obfuscated
//! code.

mod scanner;

pub use scanner::{scan_source, scan_source_text};
