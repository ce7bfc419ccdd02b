//! CMake file-API query client.
//!
//! Protocol: write a codemodel query under the well-known query
//! directory, rerun the configure step so the build tool regenerates its
//! introspection data, then parse every `target*` file in the reply
//! directory. Codemodel generation is all-or-nothing; any protocol
//! failure aborts the query instead of yielding partial data.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::errors::QueryError;
use crate::package::PackageContext;
use crate::shell::run_shell_command;

use super::types::TargetReply;

/// Client id under which the query file is registered with the file API.
pub const CLIENT_ID: &str = "client-testscout";

/// Codemodel query document, exactly as the file API expects it.
pub const CODEMODEL_QUERY: &str = r#"{ "requests": [{ "kind": "codemodel", "version": 2 }] }"#;

fn api_dir(build_space: &Path) -> PathBuf {
    build_space.join(".cmake").join("api").join("v1")
}

/// Write the codemodel query file, creating parent directories.
pub fn write_query_file(build_space: &Path) -> Result<(), QueryError> {
    let query_dir = api_dir(build_space).join("query").join(CLIENT_ID);
    fs::create_dir_all(&query_dir).map_err(|source| QueryError::CreateQueryDir {
        path: query_dir.clone(),
        source,
    })?;

    let query_file = query_dir.join("query.json");
    fs::write(&query_file, CODEMODEL_QUERY).map_err(|source| QueryError::WriteQueryFile {
        path: query_file.clone(),
        source,
    })
}

/// Rerun the build tool's configure step in the build directory so the
/// reply directory is regenerated.
///
/// The command is the workspace's environment-setup prefix followed by
/// the reconfigure invocation; output is captured for logging only.
pub fn run_configure(pkg: &PackageContext) -> Result<(), QueryError> {
    let command = match &pkg.setup_command {
        Some(setup) => format!("{setup}; cmake ."),
        None => "cmake .".to_string(),
    };
    info!(package = %pkg.name, command = %command, "running configure step");

    match run_shell_command(&command, &pkg.build_space) {
        Ok(output) if output.success => {
            debug!(stdout = %output.stdout, "configure step finished");
            Ok(())
        }
        Ok(output) => Err(QueryError::Configure {
            command,
            message: output.stderr.trim().to_string(),
        }),
        Err(e) => Err(QueryError::Configure {
            command,
            message: e.to_string(),
        }),
    }
}

/// Read and parse every target descriptor in the reply directory.
///
/// Entries are taken in sorted name order. Files that fail to parse as a
/// target descriptor are logged and skipped; an unreadable directory or
/// file is a hard failure.
pub fn read_reply_dir(build_space: &Path) -> Result<Vec<TargetReply>, QueryError> {
    let reply_dir = api_dir(build_space).join("reply");
    let entries = fs::read_dir(&reply_dir).map_err(|source| QueryError::ReplyDirUnreadable {
        path: reply_dir.clone(),
        source,
    })?;

    let mut reply_files: Vec<PathBuf> = Vec::new();
    for entry in entries.flatten() {
        let is_target_file = entry
            .file_name()
            .to_str()
            .map(|name| name.starts_with("target"))
            .unwrap_or(false);
        if is_target_file {
            reply_files.push(entry.path());
        }
    }
    reply_files.sort();

    let mut replies = Vec::new();
    for path in reply_files {
        let text = fs::read_to_string(&path).map_err(|source| QueryError::ReplyRead {
            path: path.clone(),
            source,
        })?;
        match serde_json::from_str::<TargetReply>(&text) {
            Ok(reply) => {
                debug!(file = %path.display(), target = %reply.name, "parsed target descriptor");
                replies.push(reply);
            }
            Err(e) => {
                warn!(file = %path.display(), error = %e, "skipping malformed reply file");
            }
        }
    }
    Ok(replies)
}

/// Run the whole file-API exchange for one package.
pub fn query_code_model(pkg: &PackageContext) -> Result<Vec<TargetReply>, QueryError> {
    write_query_file(&pkg.build_space)?;
    run_configure(pkg)?;
    read_reply_dir(&pkg.build_space)
}
