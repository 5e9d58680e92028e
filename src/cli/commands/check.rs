//! Check command implementation.
//!
//! Loads configuration, runs every probe, and prints the report.

use std::path::{Path, PathBuf};

use crate::backends::{platform_backend, CandleRuntime};
use crate::cli::args::CheckArgs;
use crate::config::{load_config, ConfigOverrides};
use crate::diagnostics::{
    render, render_with_verdict, CaptureBackend, NumericRuntime, Orchestrator, ProbeSettings,
    Status,
};
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The check command implementation.
pub struct CheckCommand {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(project_root: &Path, config_path: Option<PathBuf>, args: CheckArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_path,
            args,
        }
    }

    /// Resolve probe settings from config file, environment, and flags.
    pub fn settings(&self) -> Result<ProbeSettings> {
        let overrides = ConfigOverrides {
            model_path: self.args.model.clone(),
            camera_index: self.args.camera,
            capture_timeout_ms: self.args.capture_timeout,
        };
        let config = load_config(&self.project_root, self.config_path.as_deref(), &overrides)?;
        Ok(ProbeSettings {
            capture_timeout: config.capture_timeout(),
            model_path: config.model_path,
            camera_index: config.camera_index,
        })
    }

    /// Run the diagnostics against the given collaborators.
    pub fn execute_with<R, B>(
        &self,
        ui: &mut dyn UserInterface,
        runtime: &R,
        backend: &B,
    ) -> Result<CommandResult>
    where
        R: NumericRuntime + ?Sized,
        B: CaptureBackend + ?Sized,
    {
        let settings = self.settings()?;
        tracing::debug!(?settings, "Starting diagnostics");

        let report = Orchestrator::new(runtime, backend, settings).run();

        let lines = if self.args.strict {
            render_with_verdict(&report)
        } else {
            render(&report)
        };
        for line in &lines {
            ui.report_line(line);
        }

        if self.args.strict && report.verdict() != Status::Success {
            Ok(CommandResult::failure(1))
        } else {
            Ok(CommandResult::success())
        }
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let runtime = CandleRuntime::new();
        let backend = platform_backend();
        self.execute_with(ui, &runtime, &backend)
    }
}
