//! Terminal output.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`ConsoleUI`] for the terminal
//! - [`MockUI`] for tests
//!
//! # Example
//!
//! ```
//! use align_bootstrap::ui::{ConsoleUI, OutputMode, UserInterface};
//!
//! let mut ui = ConsoleUI::with_colors(OutputMode::Normal, false);
//! ui.show_header("Checking ffmpeg...");
//! ui.success("Installation complete!");
//! ```

pub mod console;
pub mod mock;
pub mod output;
pub mod theme;

pub use console::ConsoleUI;
pub use mock::MockUI;
pub use output::OutputMode;
pub use theme::{should_use_colors, BootstrapTheme};

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a message to the user.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Show a section header.
    fn show_header(&mut self, title: &str);

    /// Echo a command line about to run (verbose mode only).
    fn show_command(&mut self, command: &str);

    /// Show tool output verbatim.
    fn show_block(&mut self, text: &str);

    /// Show a usage hint.
    fn show_hint(&mut self, hint: &str);
}
