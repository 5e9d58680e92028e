//! Diagnostic orchestration.
//!
//! The [`Orchestrator`] runs the runtime, artifact, and device probes in
//! that order and collects their outcomes into a [`Report`]. A failing probe
//! never stops the ones after it.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::path::PathBuf;
use std::time::Duration;

use super::artifact::probe_artifact;
use super::device::{probe_device, CaptureBackend};
use super::outcome::{Outcome, ProbeName};
use super::report::Report;
use super::runtime::{probe_runtime, NumericRuntime};

/// Inputs for a diagnostics run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeSettings {
    /// Path of the model artifact to check.
    pub model_path: PathBuf,
    /// Camera index to open.
    pub camera_index: usize,
    /// Maximum wait for the first frame.
    pub capture_timeout: Duration,
}

/// Runs all probes against the given collaborators.
pub struct Orchestrator<'a, R: ?Sized, B: ?Sized> {
    runtime: &'a R,
    backend: &'a B,
    settings: ProbeSettings,
}

impl<'a, R, B> Orchestrator<'a, R, B>
where
    R: NumericRuntime + ?Sized,
    B: CaptureBackend + ?Sized,
{
    pub fn new(runtime: &'a R, backend: &'a B, settings: ProbeSettings) -> Self {
        Self {
            runtime,
            backend,
            settings,
        }
    }

    /// Run every probe once, in order.
    pub fn run(&self) -> Report {
        let runtime = contained(ProbeName::Runtime, || probe_runtime(self.runtime));
        let runtime_usable = runtime.is_success();
        tracing::debug!(runtime_usable, "Runtime probe finished");

        let artifact = contained(ProbeName::Artifact, || {
            probe_artifact(&self.settings.model_path, self.runtime, runtime_usable)
        });

        let device = contained(ProbeName::Device, || {
            probe_device(
                self.backend,
                self.settings.camera_index,
                self.settings.capture_timeout,
            )
        });

        Report::new(vec![runtime, artifact, device])
    }
}

/// Run a probe, turning a panic inside it into a failed outcome.
fn contained<F>(probe: ProbeName, run: F) -> Outcome
where
    F: FnOnce() -> Outcome,
{
    match panic::catch_unwind(AssertUnwindSafe(run)) {
        Ok(outcome) => outcome,
        Err(payload) => {
            let message = panic_message(payload.as_ref());
            tracing::warn!(probe = %probe, "Probe panicked: {}", message);
            Outcome::failed(probe, format!("probe panicked: {}", message))
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
