//! pose-doctor - readiness diagnostics for the pose/hand-tracking client.
//!
//! Before the tracking client starts, pose-doctor answers three questions:
//! is the ML runtime usable, is the trained model present and loadable, and
//! can the camera deliver a frame. Each check is isolated; none can abort
//! the run.
//!
//! # Modules
//!
//! - [`backends`] - Production runtime (candle) and capture (V4L2) collaborators
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading and validation
//! - [`diagnostics`] - Probes, orchestration, and report rendering
//! - [`error`] - Error types and result aliases
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use pose_doctor::diagnostics::{render, Outcome, ProbeName, Report, Status};
//!
//! let report = Report::new(vec![
//!     Outcome::new(ProbeName::Artifact, Status::NotFound).with_detail("model.mdl"),
//! ]);
//! let lines: Vec<String> = render(&report).iter().map(|l| l.to_string()).collect();
//! assert_eq!(lines[1], "[ERROR] artifact NOT_FOUND: model.mdl");
//! ```

pub mod backends;
pub mod cli;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod ui;

pub use error::{DoctorError, Result};
