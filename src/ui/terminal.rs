//! Terminal output.

use super::theme::{should_use_colors, DoctorTheme};
use super::UserInterface;

/// Writes report lines to stdout and fatal errors to stderr.
pub struct TerminalUI {
    theme: DoctorTheme,
}

impl TerminalUI {
    /// Create a terminal UI, disabling colors when `no_color` is set or
    /// stdout is not a terminal.
    pub fn new(no_color: bool) -> Self {
        let theme = if !no_color && should_use_colors() {
            DoctorTheme::new()
        } else {
            DoctorTheme::plain()
        };
        Self { theme }
    }
}

impl UserInterface for TerminalUI {
    fn message(&mut self, msg: &str) {
        println!("{}", self.theme.format_info(msg));
    }

    fn success(&mut self, msg: &str) {
        println!("{}", self.theme.format_success(msg));
    }

    fn error(&mut self, msg: &str) {
        println!("{}", self.theme.format_error(msg));
    }

    fn fatal(&mut self, msg: &str) {
        eprintln!("{}", self.theme.format_error(msg));
    }
}
