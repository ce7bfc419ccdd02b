//! External shell invocation.
//!
//! The build tool is reached through a host-composed shell command (the
//! workspace's environment-setup prefix plus the configure invocation),
//! so execution goes through a real shell rather than a direct exec.

use std::io;
use std::path::Path;
use std::process::Command;

/// Captured result of a shell invocation.
#[derive(Debug)]
pub struct ShellOutput {
    /// Whether the command exited with status zero.
    pub success: bool,
    /// Captured standard output.
    pub stdout: String,
    /// Captured standard error.
    pub stderr: String,
}

/// Run `command` through `bash -c` with `cwd` as the working directory,
/// capturing both output streams. Spawn failures surface as `io::Error`;
/// a non-zero exit is reported through [`ShellOutput::success`].
pub fn run_shell_command(command: &str, cwd: &Path) -> io::Result<ShellOutput> {
    let output = Command::new("bash")
        .arg("-c")
        .arg(command)
        .current_dir(cwd)
        .output()?;

    Ok(ShellOutput {
        success: output.status.success(),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    })
}
