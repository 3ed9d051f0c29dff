//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion.
//!
//! # Example
//!
//! ```
//! use align_bootstrap::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.show_header("Checking ffmpeg...");
//! ui.success("Installation complete!");
//!
//! assert_eq!(ui.headers(), ["Checking ffmpeg..."]);
//! assert!(ui.transcript().ends_with("Installation complete!\n"));
//! ```

use super::{OutputMode, UserInterface};

/// Mock UI implementation for testing.
///
/// Every call is captured twice: in a per-kind list, and as a line of a
/// transcript that preserves the order of output.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    headers: Vec<String>,
    commands: Vec<String>,
    blocks: Vec<String>,
    hints: Vec<String>,
    transcript: Vec<String>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all captured warning messages.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get all captured error messages.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get all captured headers.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Get all echoed commands.
    pub fn commands(&self) -> &[String] {
        &self.commands
    }

    /// Get all diagnostic blocks.
    pub fn blocks(&self) -> &[String] {
        &self.blocks
    }

    /// Get all captured hints.
    pub fn hints(&self) -> &[String] {
        &self.hints
    }

    /// Everything shown, in order, one entry per line.
    pub fn transcript(&self) -> String {
        let mut out = String::new();
        for line in &self.transcript {
            out.push_str(line);
            out.push('\n');
        }
        out
    }

    /// Check if any captured output contains the given text.
    pub fn has_output(&self, text: &str) -> bool {
        self.transcript.iter().any(|line| line.contains(text))
    }

    fn record(&mut self, line: &str) {
        self.transcript.push(line.to_string());
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
        self.record(msg);
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
        self.record(msg);
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
        self.record(msg);
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
        self.record(msg);
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
        self.record(title);
    }

    fn show_command(&mut self, command: &str) {
        self.commands.push(command.to_string());
        if self.mode.shows_commands() {
            self.record(&format!("$ {}", command));
        }
    }

    fn show_block(&mut self, text: &str) {
        let text = text.trim_end();
        self.blocks.push(text.to_string());
        if !text.is_empty() {
            self.record(text);
        }
    }

    fn show_hint(&mut self, hint: &str) {
        self.hints.push(hint.to_string());
        self.record(hint);
    }
}
