//! Configuration schema.

use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// Model artifact checked when nothing else is configured.
pub const DEFAULT_MODEL_PATH: &str = "modelLHRHBOTHHAND.mdl";

/// Default wait for the first camera frame.
pub const DEFAULT_CAPTURE_TIMEOUT_MS: u64 = 5000;

/// Longest accepted frame wait. V4L2 polls with a signed 32-bit millisecond timeout.
pub const MAX_CAPTURE_TIMEOUT_MS: u64 = i32::MAX as u64;

/// Diagnostics configuration.
///
/// ```yaml
/// model_path: models/modelLHRHBOTHHAND.mdl
/// camera_index: 1
/// capture_timeout_ms: 2000
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DoctorConfig {
    /// Path of the trained-model artifact. Relative paths resolve against the
    /// project root.
    pub model_path: PathBuf,

    /// Camera index to probe.
    pub camera_index: usize,

    /// Maximum wait for the first frame, in milliseconds.
    pub capture_timeout_ms: u64,
}

impl Default for DoctorConfig {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from(DEFAULT_MODEL_PATH),
            camera_index: 0,
            capture_timeout_ms: DEFAULT_CAPTURE_TIMEOUT_MS,
        }
    }
}

impl DoctorConfig {
    pub fn capture_timeout(&self) -> Duration {
        Duration::from_millis(self.capture_timeout_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = DoctorConfig::default();
        assert_eq!(config.model_path, PathBuf::from("modelLHRHBOTHHAND.mdl"));
        assert_eq!(config.camera_index, 0);
        assert_eq!(config.capture_timeout(), Duration::from_secs(5));
    }

    #[test]
    fn partial_yaml_keeps_defaults() {
        let config: DoctorConfig = serde_yaml::from_str("camera_index: 2\n").unwrap();
        assert_eq!(config.camera_index, 2);
        assert_eq!(config.model_path, PathBuf::from(DEFAULT_MODEL_PATH));
    }

    #[test]
    fn unknown_fields_rejected() {
        let result: Result<DoctorConfig, _> = serde_yaml::from_str("camera: 2\n");
        assert!(result.is_err());
    }
}
