//! Output verbosity mode.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Stream install output and echo every command before it runs.
    Verbose,
    /// Stream install output.
    #[default]
    Normal,
    /// Capture install output; show headings, probe results and the banner.
    Quiet,
}

impl OutputMode {
    /// Pick a mode from the `--verbose` / `--quiet` flags.
    pub fn from_flags(verbose: bool, quiet: bool) -> Self {
        if quiet {
            Self::Quiet
        } else if verbose {
            Self::Verbose
        } else {
            Self::Normal
        }
    }

    /// Check if install commands write straight to the terminal.
    pub fn streams_install_output(&self) -> bool {
        matches!(self, Self::Verbose | Self::Normal)
    }

    /// Check if command lines are echoed before they run.
    pub fn shows_commands(&self) -> bool {
        matches!(self, Self::Verbose)
    }
}
