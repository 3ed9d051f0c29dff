//! The bootstrap command.
//!
//! Loads the plan, runs it against a [`Host`], and turns the outcome into
//! an exit code.

use std::path::{Path, PathBuf};

use crate::bootstrap::{Bootstrapper, Host, RunOptions, SystemHost};
use crate::cli::args::Cli;
use crate::config::load_config;
use crate::error::{BootstrapError, Result};
use crate::ui::UserInterface;

/// Result of command execution.
#[derive(Debug, PartialEq, Eq)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// The bootstrap command implementation.
pub struct BootstrapCommand {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
    options: RunOptions,
}

impl BootstrapCommand {
    /// Create a command for the given project directory.
    pub fn new(project_root: &Path, config_path: Option<PathBuf>, options: RunOptions) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_path,
            options,
        }
    }

    /// Build the command from parsed arguments.
    pub fn from_cli(cli: &Cli, project_root: &Path) -> Self {
        Self::new(
            project_root,
            cli.config.clone(),
            RunOptions {
                dry_run: cli.dry_run,
                skip_install: cli.skip_install,
            },
        )
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Run against the real machine.
    pub fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut host = SystemHost::new();
        self.execute_with(&mut host, ui)
    }

    /// Run against any host.
    ///
    /// A missing package manager is reported through `ui` and becomes exit
    /// code 1. Configuration problems are returned as errors.
    pub fn execute_with(
        &self,
        host: &mut dyn Host,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        let config = load_config(self.config_path.as_deref(), &self.project_root)?;

        let mut bootstrapper = Bootstrapper::new(&config, self.options);
        match bootstrapper.run(host, ui) {
            Ok(report) => {
                let failed = report.installs.iter().filter(|s| !s.success).count();
                tracing::debug!(
                    "Bootstrap finished: {} installs ({} failed), {} checks",
                    report.installs.len(),
                    failed,
                    report.probes.len()
                );
                Ok(CommandResult::success())
            }
            Err(BootstrapError::PackageManagerMissing { manager, .. }) => {
                tracing::debug!("Stopping: '{}' is required", manager);
                Ok(CommandResult::failure(1))
            }
            Err(e) => Err(e),
        }
    }
}
