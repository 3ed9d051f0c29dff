//! Configuration schema definitions.
//!
//! These structs map to the optional `.align-bootstrap.yml` file. Every
//! field has a default, and the defaults together form the built-in plan:
//! install ffmpeg and espeak with Homebrew, install numpy and aeneas with
//! pip, then probe each tool.

use serde::Deserialize;

/// Root configuration: the full bootstrap plan.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BootstrapConfig {
    /// System package manager; its presence gates every other step.
    pub package_manager: InstallerConfig,

    /// Language-specific package installer.
    pub package_installer: InstallerConfig,

    /// Install steps, run in order.
    pub installs: Vec<InstallStep>,

    /// Diagnostic probes, run in order after the installs.
    pub probes: Vec<ProbeStep>,

    /// Message printed once every step has been attempted.
    pub completion_message: String,

    /// Usage hints printed after the completion message.
    pub hints: Vec<String>,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            package_manager: InstallerConfig {
                command: "brew".to_string(),
                install_args: vec!["install".to_string()],
                missing_hint: Some(
                    "Homebrew not found. Install it from https://brew.sh".to_string(),
                ),
            },
            package_installer: InstallerConfig {
                command: "pip3".to_string(),
                install_args: vec!["install".to_string()],
                missing_hint: None,
            },
            installs: vec![
                InstallStep::new("ffmpeg", InstallerKind::PackageManager, "ffmpeg"),
                InstallStep::new("espeak", InstallerKind::PackageManager, "espeak"),
                InstallStep::new("numpy", InstallerKind::PackageInstaller, "numpy"),
                InstallStep::new("aeneas", InstallerKind::PackageInstaller, "aeneas"),
            ],
            probes: vec![
                ProbeStep::new("ffmpeg", "ffmpeg", &["-version"], ProbeOutput::FirstLine),
                ProbeStep::new("espeak", "espeak", &["--version"], ProbeOutput::FirstLine),
                ProbeStep::new(
                    "aeneas",
                    "python3",
                    &["-c", "import aeneas; print(aeneas.__version__)"],
                    ProbeOutput::FirstLine,
                ),
                ProbeStep::new(
                    "aeneas diagnostics",
                    "python3",
                    &["-m", "aeneas.diagnostics"],
                    ProbeOutput::Full,
                ),
            ],
            completion_message: "Installation complete!".to_string(),
            hints: vec![
                "Extract verse text:  python3 scripts/extract_text.py".to_string(),
                "Align a verse:       python3 scripts/align_verse.py".to_string(),
            ],
        }
    }
}

impl BootstrapConfig {
    /// The installer configuration for an install step.
    pub fn installer(&self, kind: InstallerKind) -> &InstallerConfig {
        match kind {
            InstallerKind::PackageManager => &self.package_manager,
            InstallerKind::PackageInstaller => &self.package_installer,
        }
    }

    /// The remediation message shown when the package manager is absent.
    pub fn missing_hint(&self) -> String {
        self.package_manager
            .missing_hint
            .clone()
            .unwrap_or_else(|| format!("{} not found on PATH", self.package_manager.command))
    }
}

/// An external installer invoked as `<command> <install_args...> <package>`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InstallerConfig {
    /// Executable name or absolute path.
    pub command: String,

    /// Arguments placed before the package name.
    #[serde(default = "default_install_args")]
    pub install_args: Vec<String>,

    /// Remediation message when the executable is absent.
    #[serde(default)]
    pub missing_hint: Option<String>,
}

fn default_install_args() -> Vec<String> {
    vec!["install".to_string()]
}

/// Which installer handles an install step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InstallerKind {
    PackageManager,
    PackageInstaller,
}

/// One package to install.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InstallStep {
    /// Display label.
    pub label: String,

    /// Installer that handles this package.
    pub installer: InstallerKind,

    /// Package name passed to the installer.
    pub package: String,
}

impl InstallStep {
    pub fn new(label: &str, installer: InstallerKind, package: &str) -> Self {
        Self {
            label: label.to_string(),
            installer,
            package: package.to_string(),
        }
    }
}

/// How much of a probe's output to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProbeOutput {
    #[default]
    FirstLine,
    Full,
}

/// A version or diagnostic command whose output is shown to the operator.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProbeStep {
    /// Display label, shown as `Checking <label>...`.
    pub label: String,

    /// Executable to run.
    pub command: String,

    /// Arguments to the executable.
    #[serde(default)]
    pub args: Vec<String>,

    /// How much output to print.
    #[serde(default)]
    pub output: ProbeOutput,
}

impl ProbeStep {
    pub fn new(label: &str, command: &str, args: &[&str], output: ProbeOutput) -> Self {
        Self {
            label: label.to_string(),
            command: command.to_string(),
            args: args.iter().map(|s| s.to_string()).collect(),
            output,
        }
    }
}
