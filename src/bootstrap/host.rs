//! The seam between the bootstrapper and the machine it modifies.

use crate::error::Result;
use crate::requirements::probe::{resolve_tool_path, search_path};
use crate::shell::{execute, CommandOptions, CommandResult};
use std::path::PathBuf;

/// Presence queries and command execution against the host system.
///
/// The bootstrapper never touches the process environment directly, so its
/// control flow can be tested with [`FakeHost`](super::fake::FakeHost).
pub trait Host {
    /// Check whether an executable is available.
    fn has_executable(&mut self, name: &str) -> bool;

    /// Run a program to completion.
    ///
    /// A non-zero exit is a failed [`CommandResult`], not an error. An error
    /// means the program could not be started at all.
    fn run(
        &mut self,
        program: &str,
        args: &[String],
        options: &CommandOptions,
    ) -> Result<CommandResult>;
}

/// The real machine: PATH lookup plus process spawning.
#[derive(Debug, Clone)]
pub struct SystemHost {
    path_entries: Vec<PathBuf>,
}

impl SystemHost {
    /// Search the system PATH and the default Homebrew prefixes.
    pub fn new() -> Self {
        Self::with_path(search_path())
    }

    /// Search an explicit list of directories.
    pub fn with_path(path_entries: Vec<PathBuf>) -> Self {
        Self { path_entries }
    }
}

impl Default for SystemHost {
    fn default() -> Self {
        Self::new()
    }
}

impl Host for SystemHost {
    fn has_executable(&mut self, name: &str) -> bool {
        let found = resolve_tool_path(name, &self.path_entries);
        tracing::debug!("Looked up {}: {:?}", name, found);
        found.is_some()
    }

    fn run(
        &mut self,
        program: &str,
        args: &[String],
        options: &CommandOptions,
    ) -> Result<CommandResult> {
        // Resolve through the search path so a Homebrew outside PATH still runs
        let resolved = resolve_tool_path(program, &self.path_entries)
            .map(|p| p.to_string_lossy().to_string())
            .unwrap_or_else(|| program.to_string());
        execute(&resolved, args, options)
    }
}
