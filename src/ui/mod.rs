//! User-facing output.
//!
//! This module provides:
//! - [`UserInterface`] trait for output abstraction
//! - [`TerminalUI`] for styled terminal output
//! - [`MockUI`] for capturing output in tests
//!
//! # Example
//!
//! ```
//! use pose_doctor::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.message("[INFO] diagnostics starting");
//! assert!(ui.has_message("diagnostics starting"));
//! ```

pub mod mock;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, DoctorTheme};

use crate::diagnostics::{LineKind, ReportLine};

/// Trait for user interface output.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Display an informational line.
    fn message(&mut self, msg: &str);

    /// Display a passing result.
    fn success(&mut self, msg: &str);

    /// Display a failing result.
    fn error(&mut self, msg: &str);

    /// Display an error that stops the program before diagnostics run.
    fn fatal(&mut self, msg: &str);

    /// Display one line of a diagnostic report.
    fn report_line(&mut self, line: &ReportLine) {
        let text = line.to_string();
        match line.kind {
            LineKind::Ok => self.success(&text),
            LineKind::Error => self.error(&text),
            LineKind::Marker | LineKind::Summary => self.message(&text),
        }
    }
}
