//! Configuration file discovery and loading.
//!
//! Sources in priority order (later overrides earlier):
//! 1. Built-in defaults
//! 2. Config file: `--config <path>`, or `<project>/.pose-doctor.yml`
//! 3. Environment variables and command-line flags ([`ConfigOverrides`])

use crate::config::schema::{DoctorConfig, MAX_CAPTURE_TIMEOUT_MS};
use crate::error::{DoctorError, Result};
use anyhow::Context;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the project-level config file.
pub const PROJECT_CONFIG_FILE: &str = ".pose-doctor.yml";

/// Values supplied on the command line or through the environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub model_path: Option<PathBuf>,
    pub camera_index: Option<usize>,
    pub capture_timeout_ms: Option<u64>,
}

/// Find the config file to load.
///
/// An explicit path must exist. Without one, the project config is used if
/// present.
pub fn discover_config(project_root: &Path, explicit: Option<&Path>) -> Result<Option<PathBuf>> {
    if let Some(path) = explicit {
        let path = if path.is_absolute() {
            path.to_path_buf()
        } else {
            project_root.join(path)
        };
        if !path.is_file() {
            return Err(DoctorError::ConfigNotFound { path });
        }
        return Ok(Some(path));
    }

    let project = project_root.join(PROJECT_CONFIG_FILE);
    if project.is_file() {
        Ok(Some(project))
    } else {
        Ok(None)
    }
}

/// Parse a config file.
pub fn load_config_file(path: &Path) -> Result<DoctorConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    if content.trim().is_empty() {
        return Ok(DoctorConfig::default());
    }
    serde_yaml::from_str(&content).map_err(|e| DoctorError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load, override, validate, and resolve the configuration for a project.
pub fn load_config(
    project_root: &Path,
    explicit: Option<&Path>,
    overrides: &ConfigOverrides,
) -> Result<DoctorConfig> {
    let mut config = match discover_config(project_root, explicit)? {
        Some(path) => {
            tracing::debug!("Loading config from {}", path.display());
            load_config_file(&path)?
        }
        None => DoctorConfig::default(),
    };

    apply_overrides(&mut config, overrides);
    validate(&config)?;

    if config.model_path.is_relative() {
        config.model_path = project_root.join(&config.model_path);
    }
    Ok(config)
}

fn apply_overrides(config: &mut DoctorConfig, overrides: &ConfigOverrides) {
    if let Some(path) = &overrides.model_path {
        config.model_path = path.clone();
    }
    if let Some(index) = overrides.camera_index {
        config.camera_index = index;
    }
    if let Some(ms) = overrides.capture_timeout_ms {
        config.capture_timeout_ms = ms;
    }
}

fn validate(config: &DoctorConfig) -> Result<()> {
    if config.capture_timeout_ms == 0 {
        return Err(DoctorError::ConfigValidationError {
            message: "capture_timeout_ms must be positive".to_string(),
        });
    }
    if config.capture_timeout_ms > MAX_CAPTURE_TIMEOUT_MS {
        return Err(DoctorError::ConfigValidationError {
            message: format!(
                "capture_timeout_ms must be at most {}",
                MAX_CAPTURE_TIMEOUT_MS
            ),
        });
    }
    if config.model_path.as_os_str().is_empty() {
        return Err(DoctorError::ConfigValidationError {
            message: "model_path must not be empty".to_string(),
        });
    }
    Ok(())
}
