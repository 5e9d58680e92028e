//! Configuration loading.
//!
//! - [`schema`] - The [`DoctorConfig`] type and its defaults
//! - [`loader`] - File discovery, overrides, and validation

pub mod loader;
pub mod schema;

pub use loader::{
    discover_config, load_config, load_config_file, ConfigOverrides, PROJECT_CONFIG_FILE,
};
pub use schema::{
    DoctorConfig, DEFAULT_CAPTURE_TIMEOUT_MS, DEFAULT_MODEL_PATH, MAX_CAPTURE_TIMEOUT_MS,
};
