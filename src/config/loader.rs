//! Configuration file discovery and loading.

use crate::config::schema::BootstrapConfig;
use crate::config::validator::validate;
use crate::error::{BootstrapError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up in the project directory.
pub const CONFIG_FILE_NAME: &str = ".align-bootstrap.yml";

/// Find the project config at `<project_root>/.align-bootstrap.yml`.
pub fn find_project_config(project_root: &Path) -> Option<PathBuf> {
    let path = project_root.join(CONFIG_FILE_NAME);
    if path.is_file() {
        Some(path)
    } else {
        None
    }
}

/// Load a single config file and parse it into `BootstrapConfig`.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<BootstrapConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            BootstrapError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            BootstrapError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into `BootstrapConfig`.
///
/// An empty document yields the built-in plan.
pub fn parse_config(content: &str, source_path: &Path) -> Result<BootstrapConfig> {
    if content.trim().is_empty() {
        return Ok(BootstrapConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| BootstrapError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Resolve the plan for a run.
///
/// An explicit path must exist. Otherwise the project config is used when
/// present, and the built-in plan when not. The result is validated.
pub fn load_config(explicit: Option<&Path>, project_root: &Path) -> Result<BootstrapConfig> {
    let config = match explicit {
        Some(path) => {
            tracing::debug!("Loading config from {}", path.display());
            load_config_file(path)?
        }
        None => match find_project_config(project_root) {
            Some(path) => {
                tracing::debug!("Loading project config from {}", path.display());
                load_config_file(&path)?
            }
            None => {
                tracing::debug!("No config file found, using built-in plan");
                BootstrapConfig::default()
            }
        },
    };

    validate(&config)?;
    Ok(config)
}
