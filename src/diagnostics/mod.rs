//! Readiness diagnostics.
//!
//! Three fault-isolated probes each produce one [`Outcome`]:
//!
//! - [`runtime`] - is the numeric/ML runtime usable
//! - [`artifact`] - is the trained-model file present and loadable
//! - [`device`] - can the camera deliver a frame
//!
//! [`Orchestrator`] runs them in that order and [`render`] turns the
//! resulting [`Report`] into text.
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//! use pose_doctor::backends::{platform_backend, CandleRuntime};
//! use pose_doctor::diagnostics::{render, Orchestrator, ProbeSettings};
//!
//! let runtime = CandleRuntime::new();
//! let backend = platform_backend();
//! let settings = ProbeSettings {
//!     model_path: "modelLHRHBOTHHAND.mdl".into(),
//!     camera_index: 0,
//!     capture_timeout: Duration::from_secs(5),
//! };
//! let report = Orchestrator::new(&runtime, &backend, settings).run();
//! for line in render(&report) {
//!     println!("{}", line);
//! }
//! ```

pub mod artifact;
pub mod device;
pub mod orchestrator;
pub mod outcome;
pub mod report;
pub mod runtime;

#[cfg(test)]
pub(crate) mod fakes;

pub use artifact::probe_artifact;
pub use device::{probe_device, CaptureBackend, CaptureError, Frame, OpenDevice};
pub use orchestrator::{Orchestrator, ProbeSettings};
pub use outcome::{ArtifactState, Metric, Outcome, ProbeName, Status};
pub use report::{render, render_with_verdict, LineKind, Report, ReportLine};
pub use runtime::{probe_runtime, ModelHandle, NumericRuntime, RuntimeError, RuntimeInfo};
