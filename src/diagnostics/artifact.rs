//! Artifact probe.
//!
//! Checks that the trained-model file exists, records its size, and, when
//! the runtime is usable, loads it through the runtime. The sub-checks run
//! in that order and a missing file stops the probe immediately.

use std::fs;
use std::path::Path;

use super::outcome::{Outcome, ProbeName, Status, LOAD_VERIFIED, SIZE_BYTES, TENSOR_COUNT};
use super::runtime::NumericRuntime;

/// Probe the model artifact at `path`.
///
/// `runtime_usable` is the runtime probe's result. When it is `false` the
/// load sub-check is skipped and the outcome is marked unverified.
pub fn probe_artifact<R: NumericRuntime + ?Sized>(
    path: &Path,
    runtime: &R,
    runtime_usable: bool,
) -> Outcome {
    let size = match artifact_size(path) {
        Some(size) => size,
        None => {
            tracing::warn!("Model artifact not found at {}", path.display());
            return Outcome::new(ProbeName::Artifact, Status::NotFound)
                .with_detail(path.display().to_string());
        }
    };
    tracing::debug!(size, "Model artifact found at {}", path.display());

    if !runtime_usable {
        return Outcome::success(ProbeName::Artifact)
            .with_detail(format!(
                "found {}; load unverified: runtime unavailable",
                path.display()
            ))
            .with_metric(SIZE_BYTES, size)
            .with_metric(LOAD_VERIFIED, false);
    }

    match runtime.load_model(path) {
        Ok(handle) => {
            let mut outcome = Outcome::success(ProbeName::Artifact)
                .with_detail(format!("loaded {}", path.display()))
                .with_metric(SIZE_BYTES, size)
                .with_metric(LOAD_VERIFIED, true);
            if let Some(count) = handle.tensor_count {
                outcome = outcome.with_metric(TENSOR_COUNT, count);
            }
            outcome
        }
        Err(e) => {
            tracing::warn!("Model artifact failed to load: {}", e);
            Outcome::failed(ProbeName::Artifact, e.to_string()).with_metric(SIZE_BYTES, size)
        }
    }
}

/// Size of the file at `path`, or `None` if it is not a readable regular file.
fn artifact_size(path: &Path) -> Option<u64> {
    let file = fs::File::open(path).ok()?;
    let metadata = file.metadata().ok()?;
    if metadata.is_file() {
        Some(metadata.len())
    } else {
        None
    }
}
