//! Runtime probe.
//!
//! Confirms the numeric/ML runtime can be initialized and reports its
//! version and accelerator count.

use std::path::Path;

use thiserror::Error;

use super::outcome::{Outcome, ProbeName, Status, ACCELERATOR_COUNT};

/// Facts reported by an initialized runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeInfo {
    /// Human-readable version string.
    pub version: String,
    /// Names of the accelerator devices the runtime can use.
    pub accelerators: Vec<String>,
}

/// Opaque handle to a loaded model.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelHandle {
    /// Number of named tensors in the model, if the runtime reports it.
    pub tensor_count: Option<usize>,
}

/// Failures raised by a [`NumericRuntime`].
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// The runtime could not be initialized.
    #[error("runtime initialization failed: {reason}")]
    Init { reason: String },

    /// The runtime rejected a model file.
    #[error("failed to load model: {reason}")]
    Load { reason: String },
}

/// The two capabilities the diagnostics need from an ML runtime.
pub trait NumericRuntime {
    /// Initialize the runtime and report its version and accelerators.
    fn initialize(&self) -> Result<RuntimeInfo, RuntimeError>;

    /// Deserialize the model at `path`.
    fn load_model(&self, path: &Path) -> Result<ModelHandle, RuntimeError>;
}

/// Probe the runtime.
///
/// Initialization failures become an `UNAVAILABLE` outcome.
pub fn probe_runtime<R: NumericRuntime + ?Sized>(runtime: &R) -> Outcome {
    match runtime.initialize() {
        Ok(info) => {
            tracing::debug!(
                version = %info.version,
                accelerators = ?info.accelerators,
                "Runtime initialized"
            );
            Outcome::success(ProbeName::Runtime)
                .with_detail(info.version)
                .with_metric(ACCELERATOR_COUNT, info.accelerators.len())
        }
        Err(e) => {
            tracing::warn!("Runtime unavailable: {}", e);
            Outcome::new(ProbeName::Runtime, Status::Unavailable).with_detail(e.to_string())
        }
    }
}
