//! align-bootstrap - dependency setup for the verse alignment toolchain.
//!
//! Checks that Homebrew is available, installs ffmpeg and espeak with it,
//! installs numpy and aeneas with pip, then prints what each tool reports
//! about itself. Only a missing package manager stops the run; every other
//! failure is shown to the operator and the run carries on.
//!
//! # Modules
//!
//! - [`bootstrap`] - The bootstrap procedure and the `Host` seam
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - The plan, its YAML overrides, and validation
//! - [`error`] - Error types and result aliases
//! - [`requirements`] - Executable lookup
//! - [`shell`] - External command execution
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use align_bootstrap::bootstrap::{Bootstrapper, FakeHost, RunOptions};
//! use align_bootstrap::config::BootstrapConfig;
//! use align_bootstrap::ui::MockUI;
//!
//! let config = BootstrapConfig::default();
//! let mut host = FakeHost::new();
//! let mut ui = MockUI::new();
//!
//! let result = Bootstrapper::new(&config, RunOptions::default()).run(&mut host, &mut ui);
//! assert!(result.is_err());
//! assert!(host.calls().is_empty());
//! ```

pub mod bootstrap;
pub mod cli;
pub mod config;
pub mod error;
pub mod requirements;
pub mod shell;
pub mod ui;

pub use error::{BootstrapError, Result};
