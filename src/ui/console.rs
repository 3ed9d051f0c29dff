//! Terminal UI writing to stdout and stderr.

use super::theme::BootstrapTheme;
use super::{OutputMode, UserInterface};

/// UI implementation for the terminal.
///
/// Messages, headers and diagnostic blocks go to stdout. Warnings and
/// errors go to stderr so piped output stays readable.
pub struct ConsoleUI {
    mode: OutputMode,
    theme: BootstrapTheme,
}

impl ConsoleUI {
    /// Create with an explicit color choice (for --no-color and tests).
    pub fn with_colors(mode: OutputMode, colors: bool) -> Self {
        Self {
            mode,
            theme: BootstrapTheme::for_colors(colors),
        }
    }
}

impl UserInterface for ConsoleUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        println!("{}", msg);
    }

    fn success(&mut self, msg: &str) {
        println!("{}", self.theme.format_success(msg));
    }

    fn warning(&mut self, msg: &str) {
        eprintln!("{}", self.theme.format_warning(msg));
    }

    fn error(&mut self, msg: &str) {
        eprintln!("{}", self.theme.format_error(msg));
    }

    fn show_header(&mut self, title: &str) {
        println!("\n{}", self.theme.format_header(title));
    }

    fn show_command(&mut self, command: &str) {
        if self.mode.shows_commands() {
            println!("{}", self.theme.format_command(command));
        }
    }

    fn show_block(&mut self, text: &str) {
        let text = text.trim_end();
        if !text.is_empty() {
            println!("{}", text);
        }
    }

    fn show_hint(&mut self, hint: &str) {
        println!("  {}", self.theme.hint.apply_to(hint));
    }
}
