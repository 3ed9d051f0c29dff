//! Configuration loading, parsing, and validation.
//!
//! - Schema definitions and the built-in plan in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use align_bootstrap::config::{load_config, CONFIG_FILE_NAME};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join(CONFIG_FILE_NAME), "completion_message: Ready").unwrap();
//!
//! let config = load_config(None, temp.path()).unwrap();
//! assert_eq!(config.completion_message, "Ready");
//! assert_eq!(config.package_manager.command, "brew");
//! ```
//!
//! # Configuration File Locations
//!
//! 1. The path given with `--config`
//! 2. `.align-bootstrap.yml` in the project directory
//! 3. Otherwise the built-in plan

pub mod loader;
pub mod schema;
pub mod validator;

pub use loader::{find_project_config, load_config, load_config_file, parse_config, CONFIG_FILE_NAME};
pub use schema::{
    BootstrapConfig, InstallStep, InstallerConfig, InstallerKind, ProbeOutput, ProbeStep,
};
pub use validator::validate;
