//! Line-oriented scanner for GTest declaration macros.

use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::errors::SourceError;
use crate::suite::{TestCase, TestFixture};

/// Cheap check that a line opens a test declaration. Unanchored: the
/// invocation may be preceded by other text on the line.
static TEST_MACRO_START: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"TEST(_[PF])?\(").expect("static regex"));

/// Strict capture over the accumulated logical line: fixture name and
/// case name as the two comma-separated identifiers in the macro call.
static TEST_MACRO: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"TEST(_[PF])?\(\s*([A-Za-z_][A-Za-z0-9_]*)\s*,\s*([A-Za-z_][A-Za-z0-9_]*)\s*\)")
        .expect("static regex")
});

/// Scan a source file for test declarations.
///
/// Returns the fixtures declared in the file, in order of first
/// appearance. Fails only when the file itself cannot be read.
pub fn scan_source(path: &Path) -> Result<Vec<TestFixture>, SourceError> {
    debug!(path = %path.display(), "scanning source for gtest declarations");
    let text = fs::read_to_string(path).map_err(|source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(scan_source_text(&text))
}

/// Scan source text for test declarations.
///
/// The accumulator is local to this call; repeated scans never share
/// fixture state.
pub fn scan_source_text(text: &str) -> Vec<TestFixture> {
    let lines: Vec<&str> = text.split('\n').collect();
    let mut fixtures: Vec<TestFixture> = Vec::new();

    let mut index = 0;
    while index < lines.len() {
        let line = lines[index].trim_start();
        if TEST_MACRO_START.is_match(line) {
            let declaration_line = index;

            // A declaration may span physical lines before its opening
            // brace; accumulate until the logical line holds one.
            let mut logical = line.to_string();
            while !logical.contains('{') && index + 1 < lines.len() {
                index += 1;
                logical.push_str(lines[index].trim_start());
            }

            // A start match that never resolves to a full declaration is
            // dropped without recording anything.
            if let Some(caps) = TEST_MACRO.captures(&logical) {
                let fixture_name = caps[2].to_string();
                let case_name = caps[3].to_string();

                let slot = match fixtures.iter().position(|f| f.name == fixture_name) {
                    Some(slot) => slot,
                    None => {
                        let line = find_first_mention(&lines, &fixture_name)
                            .unwrap_or(declaration_line);
                        fixtures.push(TestFixture {
                            name: fixture_name,
                            line: Some(line),
                            cases: Vec::new(),
                        });
                        fixtures.len() - 1
                    }
                };
                fixtures[slot].cases.push(TestCase {
                    name: case_name,
                    line: declaration_line,
                });
            }
        }
        index += 1;
    }

    fixtures
}

/// Find the first line mentioning `name` as a standalone token: preceded
/// by start-of-line or whitespace, followed by whitespace, `;`, `:`, `{`,
/// or end-of-line. Macro argument positions do not qualify, so the
/// declarations themselves are not counted as mentions.
fn find_first_mention(lines: &[&str], name: &str) -> Option<usize> {
    let pattern = format!(r"(^|.*\s)({})([\s;:{{].*|$)", regex::escape(name));
    let regex = Regex::new(&pattern).ok()?;
    lines
        .iter()
        .position(|line| line.contains(name) && regex.is_match(line))
}
