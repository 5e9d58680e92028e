//! Production collaborators for the diagnostics.
//!
//! - [`CandleRuntime`] - numeric runtime over `candle-core`
//! - [`V4lBackend`] - camera capture over Video4Linux (Linux only)
//! - [`UnsupportedBackend`] - capture stand-in for platforms without a backend

pub mod candle;
#[cfg(target_os = "linux")]
pub mod video;

pub use self::candle::CandleRuntime;
#[cfg(target_os = "linux")]
pub use self::video::V4lBackend;

use std::time::Duration;

use crate::diagnostics::{CaptureBackend, CaptureError, Frame};

/// Capture backend for platforms without camera support. Opening always fails.
#[derive(Debug, Clone, Default)]
pub struct UnsupportedBackend;

impl CaptureBackend for UnsupportedBackend {
    type Handle = ();

    fn open(&self, index: usize) -> Result<(), CaptureError> {
        Err(CaptureError::Open {
            index,
            reason: format!(
                "video capture is not supported on {}",
                std::env::consts::OS
            ),
        })
    }

    fn read_frame(&self, _handle: &mut (), _timeout: Duration) -> Result<Frame, CaptureError> {
        Err(CaptureError::NoFrame)
    }

    fn release(&self, _handle: ()) {}
}

/// Capture backend for the current platform.
#[cfg(target_os = "linux")]
pub type PlatformBackend = V4lBackend;

/// Capture backend for the current platform.
#[cfg(not(target_os = "linux"))]
pub type PlatformBackend = UnsupportedBackend;

/// Create the capture backend for the current platform.
pub fn platform_backend() -> PlatformBackend {
    PlatformBackend::default()
}
