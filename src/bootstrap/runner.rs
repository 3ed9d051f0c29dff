//! The bootstrap procedure.
//!
//! One linear pass: precondition, installs, probes, banner. Only the
//! precondition can stop it. Every install and probe status is captured,
//! logged and then ignored, so the banner is always reached once the
//! package manager has been found.

use super::host::Host;
use super::report::{extract_version, BootstrapReport, Phase, ProbeReport, StepOutcome};
use crate::config::{BootstrapConfig, InstallStep, ProbeOutput, ProbeStep};
use crate::error::{BootstrapError, Result};
use crate::shell::{display_command, CommandOptions};
use crate::ui::UserInterface;

/// Switches that change how much of the plan touches the host.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Print install and probe commands instead of running them.
    pub dry_run: bool,
    /// Go straight from the precondition check to the probes.
    pub skip_install: bool,
}

/// Runs a [`BootstrapConfig`] plan against a [`Host`].
pub struct Bootstrapper<'a> {
    config: &'a BootstrapConfig,
    options: RunOptions,
    phase: Phase,
}

impl<'a> Bootstrapper<'a> {
    pub fn new(config: &'a BootstrapConfig, options: RunOptions) -> Self {
        Self {
            config,
            options,
            phase: Phase::NotStarted,
        }
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Run the whole plan.
    ///
    /// # Errors
    ///
    /// Returns `PackageManagerMissing` when the package manager is absent.
    /// The remediation message has already been shown through `ui`, and no
    /// install or probe has run.
    pub fn run(
        &mut self,
        host: &mut dyn Host,
        ui: &mut dyn UserInterface,
    ) -> Result<BootstrapReport> {
        self.check_precondition(host, ui)?;

        let mut report = BootstrapReport::default();

        self.phase = Phase::Installing;
        if self.options.skip_install {
            tracing::info!("Skipping install steps");
        } else {
            for step in &self.config.installs {
                report.installs.push(self.install(step, host, ui));
            }
        }

        self.phase = Phase::Verifying;
        for probe in &self.config.probes {
            report.probes.push(self.probe(probe, host, ui));
        }

        self.finish(ui);
        self.phase = Phase::Done;
        Ok(report)
    }

    /// Gate every other step on the package manager being present.
    pub fn check_precondition(
        &mut self,
        host: &mut dyn Host,
        ui: &mut dyn UserInterface,
    ) -> Result<()> {
        let manager = &self.config.package_manager.command;
        if host.has_executable(manager) {
            tracing::debug!("Package manager '{}' found", manager);
            self.phase = Phase::PreconditionChecked;
            return Ok(());
        }

        let hint = self.config.missing_hint();
        tracing::debug!("Package manager '{}' not found", manager);
        ui.error(&hint);
        self.phase = Phase::Failed;
        Err(BootstrapError::PackageManagerMissing {
            manager: manager.clone(),
            hint,
        })
    }

    fn install(
        &self,
        step: &InstallStep,
        host: &mut dyn Host,
        ui: &mut dyn UserInterface,
    ) -> StepOutcome {
        let installer = self.config.installer(step.installer);
        let mut args = installer.install_args.clone();
        args.push(step.package.clone());
        let command = display_command(&installer.command, &args);

        ui.show_header(&format!("Installing {}...", step.label));

        if self.options.dry_run {
            ui.message(&format!("[dry-run] {}", command));
            return StepOutcome {
                label: step.label.clone(),
                command,
                exit_code: None,
                success: true,
            };
        }

        ui.show_command(&command);

        let options = if ui.output_mode().streams_install_output() {
            CommandOptions::inherited()
        } else {
            CommandOptions::captured()
        };

        // Install failures never stop the run
        let (exit_code, success) = match host.run(&installer.command, &args, &options) {
            Ok(result) if result.success => {
                tracing::debug!("{} exited with status 0 in {:?}", command, result.duration);
                (result.exit_code, true)
            }
            Ok(result) => {
                tracing::debug!(
                    "{} exited with status {:?} in {:?}",
                    command,
                    result.exit_code,
                    result.duration
                );
                if options.capture {
                    ui.show_block(&result.combined_output());
                }
                match result.exit_code {
                    Some(code) => ui.warning(&format!(
                        "Installing {} exited with status {}",
                        step.label, code
                    )),
                    None => ui.warning(&format!("Installing {} was terminated", step.label)),
                }
                (result.exit_code, false)
            }
            Err(e) => {
                tracing::debug!("Could not run {}: {}", command, e);
                ui.warning(&format!("Could not run {}: {}", command, e));
                (None, false)
            }
        };

        StepOutcome {
            label: step.label.clone(),
            command,
            exit_code,
            success,
        }
    }

    fn probe(
        &self,
        probe: &ProbeStep,
        host: &mut dyn Host,
        ui: &mut dyn UserInterface,
    ) -> ProbeReport {
        let command = display_command(&probe.command, &probe.args);

        ui.show_header(&format!("Checking {}...", probe.label));

        if self.options.dry_run {
            ui.message(&format!("[dry-run] {}", command));
            return ProbeReport {
                label: probe.label.clone(),
                text: String::new(),
                exit_code: None,
                version: None,
            };
        }

        ui.show_command(&command);

        let (text, exit_code) =
            match host.run(&probe.command, &probe.args, &CommandOptions::captured()) {
                Ok(result) => {
                    tracing::debug!("{} finished in {:?}", command, result.duration);
                    let text = match probe.output {
                        ProbeOutput::FirstLine => result.first_line().unwrap_or_default(),
                        ProbeOutput::Full => result.combined_output(),
                    };
                    (text, result.exit_code)
                }
                Err(_) => (format!("{}: command not found", probe.command), None),
            };

        ui.show_block(&text);

        let version = match probe.output {
            ProbeOutput::FirstLine if exit_code == Some(0) => extract_version(&text),
            _ => None,
        };

        match (&version, exit_code) {
            (Some(v), _) => tracing::info!("{} reports version {}", probe.label, v),
            (None, Some(0)) => tracing::debug!("{} exited with status 0", command),
            (None, code) => tracing::warn!("{} exited with status {:?}", command, code),
        }

        ProbeReport {
            label: probe.label.clone(),
            text,
            exit_code,
            version,
        }
    }

    fn finish(&self, ui: &mut dyn UserInterface) {
        ui.message("");
        ui.success(&self.config.completion_message);
        if !self.config.hints.is_empty() {
            ui.message("");
            ui.message("Next steps:");
            for hint in &self.config.hints {
                ui.show_hint(hint);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bootstrap::fake::FakeHost;
    use crate::config::{InstallerKind, InstallStep};
    use crate::ui::{MockUI, OutputMode};

    fn default_host() -> FakeHost {
        FakeHost::new()
            .with_executable("brew")
            .with_output("ffmpeg", 0, "ffmpeg version 6.1.1 Copyright (c) 2000-2023\nbuilt with clang\n")
            .with_output("espeak", 0, "eSpeak text-to-speech: 1.48.03  04.Mar.14\n")
            .with_output(
                "python3 -c \"import aeneas; print(aeneas.__version__)\"",
                0,
                "1.7.3.0\n",
            )
            .with_output(
                "python3 -m aeneas.diagnostics",
                0,
                "[INFO] ffprobe        OK\n[INFO] ffmpeg         OK\n[INFO] espeak         OK\n",
            )
    }

    fn run_with(
        config: &BootstrapConfig,
        options: RunOptions,
        host: &mut FakeHost,
        ui: &mut MockUI,
    ) -> Result<BootstrapReport> {
        Bootstrapper::new(config, options).run(host, ui)
    }

    #[test]
    fn missing_package_manager_stops_before_installs() {
        let config = BootstrapConfig::default();
        let mut host = FakeHost::new();
        let mut ui = MockUI::new();
        let mut bootstrapper = Bootstrapper::new(&config, RunOptions::default());

        let result = bootstrapper.run(&mut host, &mut ui);

        assert!(matches!(
            result,
            Err(BootstrapError::PackageManagerMissing { .. })
        ));
        assert_eq!(bootstrapper.phase(), Phase::Failed);
        assert!(host.calls().is_empty());
        assert!(ui.errors()[0].contains("Homebrew not found"));
        assert!(!ui.has_output("Installation complete!"));
    }

    #[test]
    fn precondition_is_idempotent() {
        let config = BootstrapConfig::default();
        let mut host = FakeHost::new();
        let mut ui = MockUI::new();
        let mut bootstrapper = Bootstrapper::new(&config, RunOptions::default());

        let first = bootstrapper.check_precondition(&mut host, &mut ui).is_ok();
        let second = bootstrapper.check_precondition(&mut host, &mut ui).is_ok();
        assert_eq!(first, second);
        assert_eq!(host.presence_queries(), ["brew", "brew"]);
    }

    #[test]
    fn successful_run_installs_in_order_then_probes() {
        let config = BootstrapConfig::default();
        let mut host = default_host();
        let mut ui = MockUI::new();
        let mut bootstrapper = Bootstrapper::new(&config, RunOptions::default());

        let report = bootstrapper.run(&mut host, &mut ui).unwrap();

        assert_eq!(bootstrapper.phase(), Phase::Done);
        assert_eq!(
            host.calls(),
            [
                "brew install ffmpeg",
                "brew install espeak",
                "pip3 install numpy",
                "pip3 install aeneas",
                "ffmpeg -version",
                "espeak --version",
                "python3 -c \"import aeneas; print(aeneas.__version__)\"",
                "python3 -m aeneas.diagnostics",
            ]
        );
        assert!(report.installs.iter().all(|s| s.success));
        assert_eq!(report.probes.len(), 4);
    }

    #[test]
    fn successful_run_prints_four_checks_and_banner_last() {
        let config = BootstrapConfig::default();
        let mut host = default_host();
        let mut ui = MockUI::new();

        run_with(&config, RunOptions::default(), &mut host, &mut ui).unwrap();

        let checks: Vec<&String> = ui
            .headers()
            .iter()
            .filter(|h| h.starts_with("Checking"))
            .collect();
        assert_eq!(checks.len(), 4);
        assert_eq!(ui.successes().last().unwrap(), "Installation complete!");
        assert_eq!(ui.hints().len(), 2);
        assert!(ui.hints()[0].contains("extract_text.py"));
        assert!(ui.hints()[1].contains("align_verse.py"));
    }

    #[test]
    fn first_line_probes_print_only_first_line() {
        let config = BootstrapConfig::default();
        let mut host = default_host();
        let mut ui = MockUI::new();

        let report = run_with(&config, RunOptions::default(), &mut host, &mut ui).unwrap();

        assert_eq!(
            report.probes[0].text,
            "ffmpeg version 6.1.1 Copyright (c) 2000-2023"
        );
        assert!(!ui.has_output("built with clang"));
        assert_eq!(report.probes[0].version.as_deref(), Some("6.1.1"));
        assert_eq!(report.probes[1].version.as_deref(), Some("1.48.03"));
        assert_eq!(report.probes[2].version.as_deref(), Some("1.7.3.0"));
    }

    #[test]
    fn diagnostics_probe_prints_full_output() {
        let config = BootstrapConfig::default();
        let mut host = default_host();
        let mut ui = MockUI::new();

        let report = run_with(&config, RunOptions::default(), &mut host, &mut ui).unwrap();

        let diag = &report.probes[3];
        assert_eq!(diag.text.lines().count(), 3);
        assert!(diag.version.is_none());
        assert!(ui.has_output("[INFO] espeak         OK"));
    }

    #[test]
    fn failed_installs_are_not_fatal() {
        let config = BootstrapConfig::default();
        let mut host = default_host()
            .with_stderr("brew install espeak", 1, "Error: No available formula")
            .with_spawn_error("pip3");
        let mut ui = MockUI::new();

        let report = run_with(&config, RunOptions::default(), &mut host, &mut ui).unwrap();

        assert_eq!(report.installs.len(), 4);
        assert!(report.installs[0].success);
        assert_eq!(report.installs[1].exit_code, Some(1));
        assert!(!report.installs[1].success);
        assert_eq!(report.installs[2].exit_code, None);
        assert!(!report.installs[3].success);
        assert_eq!(report.probes.len(), 4);
        assert_eq!(ui.successes().last().unwrap(), "Installation complete!");
        assert!(ui
            .warnings()
            .iter()
            .any(|w| w.contains("espeak exited with status 1")));
    }

    #[test]
    fn quiet_mode_shows_failed_installer_output() {
        let config = BootstrapConfig::default();
        let mut host = default_host().with_stderr(
            "brew install espeak",
            1,
            "Error: No available formula with the name \"espeak\".\n",
        );
        let mut ui = MockUI::with_mode(OutputMode::Quiet);

        run_with(&config, RunOptions::default(), &mut host, &mut ui).unwrap();

        assert!(ui.has_output("No available formula"));
        assert_eq!(
            ui.blocks()
                .iter()
                .filter(|b| b.contains("No available formula"))
                .count(),
            1
        );
        assert!(ui
            .warnings()
            .iter()
            .any(|w| w.contains("espeak exited with status 1")));
    }

    #[test]
    fn quiet_mode_hides_successful_installer_output() {
        let config = BootstrapConfig::default();
        let mut host = default_host().with_output("brew", 0, "==> Pouring ffmpeg bottle\n");
        let mut ui = MockUI::with_mode(OutputMode::Quiet);

        run_with(&config, RunOptions::default(), &mut host, &mut ui).unwrap();

        assert!(!ui.has_output("Pouring"));
        assert!(ui.warnings().is_empty());
    }

    #[test]
    fn normal_mode_failure_only_warns() {
        let config = BootstrapConfig::default();
        let mut host = default_host().with_stderr("brew install espeak", 1, "Error: boom\n");
        let mut ui = MockUI::new();

        run_with(&config, RunOptions::default(), &mut host, &mut ui).unwrap();

        // Streamed output already reached the terminal
        assert!(!ui.has_output("Error: boom"));
        assert_eq!(ui.warnings().len(), 1);
    }

    #[test]
    fn killed_install_is_reported() {
        let config = BootstrapConfig::default();
        let mut host = default_host().with_signal("brew install ffmpeg");
        let mut ui = MockUI::new();

        let report = run_with(&config, RunOptions::default(), &mut host, &mut ui).unwrap();

        assert!(!report.installs[0].success);
        assert!(report.installs[0].exit_code.is_none());
        assert_eq!(ui.warnings(), ["Installing ffmpeg was terminated"]);
        assert_eq!(report.installs.len(), 4);
        assert!(ui.has_output("Installation complete!"));
    }

    #[test]
    fn failing_probe_still_reaches_banner() {
        let config = BootstrapConfig::default();
        let mut host = default_host().with_stderr(
            "python3 -c \"import aeneas; print(aeneas.__version__)\"",
            1,
            "Traceback (most recent call last):\nModuleNotFoundError: No module named 'aeneas'\n",
        );
        let mut ui = MockUI::new();

        let report = run_with(&config, RunOptions::default(), &mut host, &mut ui).unwrap();

        assert_eq!(report.probes[2].text, "Traceback (most recent call last):");
        assert_eq!(report.probes[2].exit_code, Some(1));
        assert!(report.probes[2].version.is_none());
        assert!(ui.has_output("Installation complete!"));
    }

    #[test]
    fn missing_probe_program_prints_not_found() {
        let config = BootstrapConfig::default();
        let mut host = default_host().with_spawn_error("espeak");
        let mut ui = MockUI::new();

        let report = run_with(&config, RunOptions::default(), &mut host, &mut ui).unwrap();

        assert_eq!(report.probes[1].text, "espeak: command not found");
        assert!(ui.has_output("espeak: command not found"));
        assert!(ui.has_output("Installation complete!"));
    }

    #[test]
    fn quiet_mode_captures_install_output() {
        let config = BootstrapConfig::default();
        let mut host = default_host();
        let mut ui = MockUI::with_mode(OutputMode::Quiet);

        run_with(&config, RunOptions::default(), &mut host, &mut ui).unwrap();

        // Four installs then four probes, all captured
        assert_eq!(host.captured(), [true; 8]);
    }

    #[test]
    fn normal_mode_streams_install_output() {
        let config = BootstrapConfig::default();
        let mut host = default_host();
        let mut ui = MockUI::new();

        run_with(&config, RunOptions::default(), &mut host, &mut ui).unwrap();

        assert_eq!(&host.captured()[..4], [false; 4]);
        assert_eq!(&host.captured()[4..], [true; 4]);
    }

    #[test]
    fn verbose_mode_echoes_commands() {
        let config = BootstrapConfig::default();
        let mut host = default_host();
        let mut ui = MockUI::with_mode(OutputMode::Verbose);

        run_with(&config, RunOptions::default(), &mut host, &mut ui).unwrap();

        assert!(ui.has_output("$ brew install ffmpeg"));
        assert!(ui.has_output("$ python3 -m aeneas.diagnostics"));
    }

    #[test]
    fn dry_run_only_queries_presence() {
        let config = BootstrapConfig::default();
        let mut host = default_host();
        let mut ui = MockUI::new();
        let options = RunOptions {
            dry_run: true,
            skip_install: false,
        };

        let report = run_with(&config, options, &mut host, &mut ui).unwrap();

        assert!(host.calls().is_empty());
        assert_eq!(host.presence_queries(), ["brew"]);
        assert!(ui.has_output("[dry-run] brew install ffmpeg"));
        assert!(ui.has_output("[dry-run] python3 -m aeneas.diagnostics"));
        assert_eq!(report.installs.len(), 4);
        assert!(ui.has_output("Installation complete!"));
    }

    #[test]
    fn dry_run_still_requires_package_manager() {
        let config = BootstrapConfig::default();
        let mut host = FakeHost::new();
        let mut ui = MockUI::new();
        let options = RunOptions {
            dry_run: true,
            skip_install: false,
        };

        assert!(run_with(&config, options, &mut host, &mut ui).is_err());
    }

    #[test]
    fn skip_install_runs_only_probes() {
        let config = BootstrapConfig::default();
        let mut host = default_host();
        let mut ui = MockUI::new();
        let options = RunOptions {
            dry_run: false,
            skip_install: true,
        };

        let report = run_with(&config, options, &mut host, &mut ui).unwrap();

        assert!(report.installs.is_empty());
        assert_eq!(host.calls().len(), 4);
        assert!(host.calls().iter().all(|c| !c.contains("install")));
    }

    #[test]
    fn custom_plan_changes_install_calls() {
        let mut config = BootstrapConfig::default();
        config.package_installer.command = "uv".to_string();
        config.package_installer.install_args = vec!["pip".to_string(), "install".to_string()];
        config.installs = vec![InstallStep::new(
            "aeneas",
            InstallerKind::PackageInstaller,
            "aeneas",
        )];
        config.probes.clear();
        let mut host = default_host();
        let mut ui = MockUI::new();

        run_with(&config, RunOptions::default(), &mut host, &mut ui).unwrap();

        assert_eq!(host.calls(), ["uv pip install aeneas"]);
    }
}
