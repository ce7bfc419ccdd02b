//! Collaborator-supplied package description.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// A source package as described by the hosting workspace abstraction.
///
/// The engine does not detect workspace types itself; the host supplies
/// the package root, its build directory, and the shell prefix needed to
/// establish the build environment (e.g. sourcing a ROS setup script).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageContext {
    /// Package name, used in diagnostics.
    pub name: String,
    /// Absolute path of the package source root.
    pub source_space: PathBuf,
    /// Absolute path of the package build directory.
    pub build_space: PathBuf,
    /// Shell prefix prepended to the configure invocation, supplied by
    /// the workspace provider (catkin and colcon need different setups).
    pub setup_command: Option<String>,
}

impl PackageContext {
    /// Describe a package without an environment-setup prefix.
    pub fn new(
        name: impl Into<String>,
        source_space: impl Into<PathBuf>,
        build_space: impl Into<PathBuf>,
    ) -> Self {
        Self {
            name: name.into(),
            source_space: source_space.into(),
            build_space: build_space.into(),
            setup_command: None,
        }
    }

    /// Attach the workspace provider's environment-setup command.
    pub fn with_setup_command(mut self, command: impl Into<String>) -> Self {
        self.setup_command = Some(command.into());
        self
    }
}
