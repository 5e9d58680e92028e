//! Diagnostic outcome types.
//!
//! Every probe produces exactly one [`Outcome`]. Outcomes are built once,
//! when the probe finishes, and are read-only afterwards.

use std::collections::BTreeMap;
use std::fmt;

/// Identifies which probe produced an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProbeName {
    /// Numeric/ML runtime availability.
    Runtime,
    /// Trained-model artifact presence and loadability.
    Artifact,
    /// Camera device reachability.
    Device,
}

impl ProbeName {
    /// All probes in execution order.
    pub const ALL: [ProbeName; 3] = [ProbeName::Runtime, ProbeName::Artifact, ProbeName::Device];

    /// Short lowercase name used in the report.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProbeName::Runtime => "runtime",
            ProbeName::Artifact => "artifact",
            ProbeName::Device => "device",
        }
    }
}

impl fmt::Display for ProbeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status of a single probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// The check passed.
    Success,
    /// A dependency is missing or could not be initialized.
    Unavailable,
    /// An expected artifact is absent.
    NotFound,
    /// The check was attempted but did not succeed.
    Failed,
}

impl Status {
    /// Uppercase label used in the report.
    pub fn label(&self) -> &'static str {
        match self {
            Status::Success => "SUCCESS",
            Status::Unavailable => "UNAVAILABLE",
            Status::NotFound => "NOT_FOUND",
            Status::Failed => "FAILED",
        }
    }

    /// Ordering used to pick the worst status of a report.
    pub fn severity(&self) -> u8 {
        match self {
            Status::Success => 0,
            Status::Unavailable => 1,
            Status::NotFound => 2,
            Status::Failed => 3,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An auxiliary scalar fact gathered during a probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    /// A count, size, or dimension.
    Int(u64),
    /// A yes/no fact.
    Flag(bool),
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Metric::Int(v) => write!(f, "{}", v),
            Metric::Flag(v) => write!(f, "{}", v),
        }
    }
}

impl From<u64> for Metric {
    fn from(v: u64) -> Self {
        Metric::Int(v)
    }
}

impl From<u32> for Metric {
    fn from(v: u32) -> Self {
        Metric::Int(u64::from(v))
    }
}

impl From<usize> for Metric {
    fn from(v: usize) -> Self {
        Metric::Int(v as u64)
    }
}

impl From<bool> for Metric {
    fn from(v: bool) -> Self {
        Metric::Flag(v)
    }
}

/// Metric key for the number of accelerator devices the runtime exposes.
pub const ACCELERATOR_COUNT: &str = "accelerator_count";
/// Metric key for the artifact size in bytes.
pub const SIZE_BYTES: &str = "size_bytes";
/// Metric key recording whether the artifact was loaded through the runtime.
pub const LOAD_VERIFIED: &str = "load_verified";
/// Metric key for the number of tensors in a loaded artifact.
pub const TENSOR_COUNT: &str = "tensor_count";
/// Metric key for the probed camera index.
pub const CAMERA_INDEX: &str = "camera_index";
/// Metric key for captured frame width.
pub const FRAME_WIDTH: &str = "frame_width";
/// Metric key for captured frame height.
pub const FRAME_HEIGHT: &str = "frame_height";

/// What the artifact probe established about the model file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactState {
    /// No file at the configured path.
    NotFound,
    /// File exists but the runtime was unavailable to load it.
    Unverified,
    /// File exists and the runtime loaded it.
    Loadable,
    /// File exists but the runtime rejected it.
    Broken,
}

/// The structured result of one probe invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    probe: ProbeName,
    status: Status,
    detail: Option<String>,
    metrics: BTreeMap<String, Metric>,
}

impl Outcome {
    /// Create an outcome with no detail or metrics.
    pub fn new(probe: ProbeName, status: Status) -> Self {
        Self {
            probe,
            status,
            detail: None,
            metrics: BTreeMap::new(),
        }
    }

    /// Shorthand for a successful outcome.
    pub fn success(probe: ProbeName) -> Self {
        Self::new(probe, Status::Success)
    }

    /// Shorthand for a failed outcome with a reason.
    pub fn failed(probe: ProbeName, reason: impl Into<String>) -> Self {
        Self::new(probe, Status::Failed).with_detail(reason)
    }

    /// Attach a detail message.
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Attach a metric. A repeated key replaces the earlier value.
    pub fn with_metric(mut self, key: &str, value: impl Into<Metric>) -> Self {
        self.metrics.insert(key.to_string(), value.into());
        self
    }

    pub fn probe(&self) -> ProbeName {
        self.probe
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }

    pub fn metrics(&self) -> &BTreeMap<String, Metric> {
        &self.metrics
    }

    pub fn metric(&self, key: &str) -> Option<Metric> {
        self.metrics.get(key).copied()
    }

    /// Whether the probe succeeded.
    pub fn is_success(&self) -> bool {
        self.status == Status::Success
    }

    /// Interpret an artifact outcome.
    ///
    /// Returns `None` for outcomes of other probes.
    pub fn artifact_state(&self) -> Option<ArtifactState> {
        if self.probe != ProbeName::Artifact {
            return None;
        }
        let state = match self.status {
            Status::NotFound => ArtifactState::NotFound,
            Status::Success => match self.metric(LOAD_VERIFIED) {
                Some(Metric::Flag(true)) => ArtifactState::Loadable,
                _ => ArtifactState::Unverified,
            },
            Status::Failed | Status::Unavailable => ArtifactState::Broken,
        };
        Some(state)
    }
}
