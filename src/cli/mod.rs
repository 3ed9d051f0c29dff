//! Command-line interface.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`command`] - The bootstrap command and its exit codes

pub mod args;
pub mod command;

pub use args::Cli;
pub use command::{BootstrapCommand, CommandResult};
