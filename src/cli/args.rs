//! CLI argument definitions.
//!
//! Every flag is optional: invoked with no arguments the tool runs the
//! built-in plan.

use clap::Parser;
use std::path::PathBuf;

/// Install and verify the verse alignment toolchain (ffmpeg, espeak, aeneas).
#[derive(Debug, Default, Parser)]
#[command(name = "align-bootstrap")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to config file (overrides .align-bootstrap.yml)
    #[arg(short, long, env = "ALIGN_BOOTSTRAP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Path to project directory (overrides current directory)
    #[arg(short, long)]
    pub project: Option<PathBuf>,

    /// Print install and check commands without running them
    #[arg(long)]
    pub dry_run: bool,

    /// Skip installs and only run the checks
    #[arg(long)]
    pub skip_install: bool,

    /// Echo every command before it runs
    #[arg(short, long)]
    pub verbose: bool,

    /// Hide installer output
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}
