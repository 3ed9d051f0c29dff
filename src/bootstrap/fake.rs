//! Scripted [`Host`] for tests.
//!
//! # Example
//!
//! ```
//! use align_bootstrap::bootstrap::{FakeHost, Host};
//! use align_bootstrap::shell::CommandOptions;
//!
//! let mut host = FakeHost::new()
//!     .with_executable("brew")
//!     .with_output("ffmpeg", 0, "ffmpeg version 6.1.1\n");
//!
//! assert!(host.has_executable("brew"));
//! let result = host.run("ffmpeg", &["-version".to_string()], &CommandOptions::captured()).unwrap();
//! assert!(result.success);
//! assert_eq!(host.calls(), ["ffmpeg -version"]);
//! ```

use super::host::Host;
use crate::error::{BootstrapError, Result};
use crate::shell::{display_command, CommandOptions, CommandResult};
use std::collections::{HashMap, HashSet};
use std::time::Duration;

/// Scripted reply for a program.
#[derive(Debug, Clone)]
enum Reply {
    Output {
        code: i32,
        stdout: String,
        stderr: String,
    },
    SpawnError,
    Killed,
}

/// A host that records every call and returns scripted outcomes.
///
/// Programs without a scripted reply succeed with empty output. Replies can
/// be keyed by program name or by the full command line; the full command
/// line wins.
#[derive(Debug, Default)]
pub struct FakeHost {
    executables: HashSet<String>,
    replies: HashMap<String, Reply>,
    presence_queries: Vec<String>,
    calls: Vec<String>,
    captured: Vec<bool>,
}

impl FakeHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark an executable as present.
    pub fn with_executable(mut self, name: &str) -> Self {
        self.executables.insert(name.to_string());
        self
    }

    /// Script stdout and an exit code for a program or command line.
    pub fn with_output(mut self, key: &str, code: i32, stdout: &str) -> Self {
        self.replies.insert(
            key.to_string(),
            Reply::Output {
                code,
                stdout: stdout.to_string(),
                stderr: String::new(),
            },
        );
        self
    }

    /// Script stderr and an exit code for a program or command line.
    pub fn with_stderr(mut self, key: &str, code: i32, stderr: &str) -> Self {
        self.replies.insert(
            key.to_string(),
            Reply::Output {
                code,
                stdout: String::new(),
                stderr: stderr.to_string(),
            },
        );
        self
    }

    /// Make a program or command line fail to start.
    pub fn with_spawn_error(mut self, key: &str) -> Self {
        self.replies.insert(key.to_string(), Reply::SpawnError);
        self
    }

    /// Make a program or command line start and then die from a signal.
    pub fn with_signal(mut self, key: &str) -> Self {
        self.replies.insert(key.to_string(), Reply::Killed);
        self
    }

    /// Names passed to `has_executable`, in order.
    pub fn presence_queries(&self) -> &[String] {
        &self.presence_queries
    }

    /// Command lines passed to `run`, in order.
    pub fn calls(&self) -> &[String] {
        &self.calls
    }

    /// Whether each call captured its output, in order.
    pub fn captured(&self) -> &[bool] {
        &self.captured
    }
}

impl Host for FakeHost {
    fn has_executable(&mut self, name: &str) -> bool {
        self.presence_queries.push(name.to_string());
        self.executables.contains(name)
    }

    fn run(
        &mut self,
        program: &str,
        args: &[String],
        options: &CommandOptions,
    ) -> Result<CommandResult> {
        let line = display_command(program, args);
        self.calls.push(line.clone());
        self.captured.push(options.capture);

        let reply = self
            .replies
            .get(&line)
            .or_else(|| self.replies.get(program))
            .cloned();

        match reply {
            None => Ok(CommandResult::success(
                String::new(),
                String::new(),
                Duration::ZERO,
            )),
            Some(Reply::SpawnError) => Err(BootstrapError::CommandFailed {
                command: line,
                code: None,
            }),
            Some(Reply::Killed) => Ok(CommandResult::failure(
                None,
                String::new(),
                String::new(),
                Duration::ZERO,
            )),
            Some(Reply::Output {
                code,
                stdout,
                stderr,
            }) => {
                // Uncaptured output goes to the terminal, not the result
                let (stdout, stderr) = if options.capture {
                    (stdout, stderr)
                } else {
                    (String::new(), String::new())
                };
                if code == 0 {
                    Ok(CommandResult::success(stdout, stderr, Duration::ZERO))
                } else {
                    Ok(CommandResult::failure(
                        Some(code),
                        stdout,
                        stderr,
                        Duration::ZERO,
                    ))
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn unscripted_programs_succeed() {
        let mut host = FakeHost::new();
        let result = host
            .run("brew", &args(&["install", "x"]), &CommandOptions::inherited())
            .unwrap();
        assert!(result.success);
        assert_eq!(host.calls(), ["brew install x"]);
        assert_eq!(host.captured(), [false]);
    }

    #[test]
    fn full_command_line_reply_wins_over_program_reply() {
        let mut host = FakeHost::new()
            .with_output("python3", 0, "generic\n")
            .with_stderr("python3 -m aeneas.diagnostics", 1, "[ERRO] broken\n");

        let generic = host
            .run("python3", &args(&["-V"]), &CommandOptions::captured())
            .unwrap();
        assert_eq!(generic.stdout, "generic\n");

        let diag = host
            .run(
                "python3",
                &args(&["-m", "aeneas.diagnostics"]),
                &CommandOptions::captured(),
            )
            .unwrap();
        assert!(!diag.success);
        assert_eq!(diag.exit_code, Some(1));
        assert_eq!(diag.stderr, "[ERRO] broken\n");
    }

    #[test]
    fn spawn_error_is_reported() {
        let mut host = FakeHost::new().with_spawn_error("pip3");
        let result = host.run("pip3", &args(&["install", "numpy"]), &CommandOptions::captured());
        assert!(matches!(result, Err(BootstrapError::CommandFailed { .. })));
    }

    #[test]
    fn signalled_command_has_no_exit_code() {
        let mut host = FakeHost::new().with_signal("brew install espeak");
        let result = host
            .run("brew", &args(&["install", "espeak"]), &CommandOptions::inherited())
            .unwrap();
        assert!(!result.success);
        assert!(result.exit_code.is_none());
    }

    #[test]
    fn presence_queries_are_recorded() {
        let mut host = FakeHost::new().with_executable("brew");
        assert!(host.has_executable("brew"));
        assert!(!host.has_executable("pip3"));
        assert_eq!(host.presence_queries(), ["brew", "pip3"]);
    }
}
