//! Run phases and per-step records.

use regex::Regex;
use std::sync::LazyLock;

/// Dotted version number, e.g. `6.1.1` or `1.48.03`.
static VERSION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(\d+\.\d+(?:\.\d+)*)\b").expect("VERSION_REGEX must compile")
});

/// Where a bootstrap run currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    NotStarted,
    PreconditionChecked,
    Installing,
    Verifying,
    Done,
    /// Terminal state after a failed precondition check.
    Failed,
}

/// Exit status of one install command.
///
/// Recorded and logged only; a failed install never changes the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepOutcome {
    /// Step label.
    pub label: String,
    /// Command line that was run.
    pub command: String,
    /// Exit code (None if the command could not be spawned or was killed).
    pub exit_code: Option<i32>,
    /// Whether the command exited with status 0.
    pub success: bool,
}

/// What a diagnostic probe printed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeReport {
    /// Probe label.
    pub label: String,
    /// Text shown to the operator.
    pub text: String,
    /// Exit code (None if the command could not be spawned or was killed).
    pub exit_code: Option<i32>,
    /// First version-looking token in `text`, if any.
    pub version: Option<String>,
}

/// Everything a completed run did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BootstrapReport {
    pub installs: Vec<StepOutcome>,
    pub probes: Vec<ProbeReport>,
}

/// Extract the first dotted version number from tool output.
pub fn extract_version(text: &str) -> Option<String> {
    VERSION_REGEX
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}
