//! Configuration validation.

use crate::config::schema::BootstrapConfig;
use crate::error::{BootstrapError, Result};

/// Validate a plan before any step runs.
///
/// Rejects empty installer commands, empty package names and probes
/// without a command. An empty install or probe list is allowed.
pub fn validate(config: &BootstrapConfig) -> Result<()> {
    if config.package_manager.command.trim().is_empty() {
        return Err(invalid("package_manager.command must not be empty"));
    }

    if config.package_installer.command.trim().is_empty() {
        return Err(invalid("package_installer.command must not be empty"));
    }

    for (index, step) in config.installs.iter().enumerate() {
        if step.package.trim().is_empty() {
            return Err(invalid(&format!(
                "installs[{}] ('{}') has an empty package name",
                index, step.label
            )));
        }
    }

    for (index, probe) in config.probes.iter().enumerate() {
        if probe.command.trim().is_empty() {
            return Err(invalid(&format!(
                "probes[{}] ('{}') has an empty command",
                index, probe.label
            )));
        }
    }

    Ok(())
}

fn invalid(message: &str) -> BootstrapError {
    BootstrapError::ConfigValidationError {
        message: message.to_string(),
    }
}
