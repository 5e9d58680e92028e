//! Device probe.
//!
//! Opens a camera, reads one frame with a bounded wait, and releases the
//! device. The handle is owned by an [`OpenDevice`] guard so release runs on
//! every exit path once the open has succeeded.

use std::time::Duration;

use thiserror::Error;

use super::outcome::{Outcome, ProbeName, CAMERA_INDEX, FRAME_HEIGHT, FRAME_WIDTH};

/// A captured frame. Only its shape matters to the diagnostics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Frame {
    /// `(width, height)` in pixels, if the backend reports it.
    pub dimensions: Option<(u32, u32)>,
}

/// Failures raised by a [`CaptureBackend`].
#[derive(Debug, Error)]
pub enum CaptureError {
    /// The device could not be opened.
    #[error("failed to open camera {index}: {reason}")]
    Open { index: usize, reason: String },

    /// The device opened but no frame arrived within the wait.
    #[error("no frame")]
    NoFrame,

    /// Reading from an open device failed unexpectedly.
    #[error("read error: {0}")]
    Read(String),
}

/// The capture operations the device probe needs.
pub trait CaptureBackend {
    /// Handle to an open device.
    type Handle;

    /// Open the camera at `index`.
    fn open(&self, index: usize) -> Result<Self::Handle, CaptureError>;

    /// Read exactly one frame, waiting at most `timeout`.
    fn read_frame(&self, handle: &mut Self::Handle, timeout: Duration)
        -> Result<Frame, CaptureError>;

    /// Release the device.
    fn release(&self, handle: Self::Handle);
}

/// An open device that is released when dropped.
pub struct OpenDevice<'a, B: CaptureBackend + ?Sized> {
    backend: &'a B,
    handle: Option<B::Handle>,
}

impl<'a, B: CaptureBackend + ?Sized> OpenDevice<'a, B> {
    /// Open the camera at `index` through `backend`.
    pub fn open(backend: &'a B, index: usize) -> Result<Self, CaptureError> {
        let handle = backend.open(index)?;
        Ok(Self {
            backend,
            handle: Some(handle),
        })
    }

    /// Read one frame from the open device.
    pub fn read_frame(&mut self, timeout: Duration) -> Result<Frame, CaptureError> {
        match self.handle.as_mut() {
            Some(handle) => self.backend.read_frame(handle, timeout),
            None => Err(CaptureError::Read("device already released".to_string())),
        }
    }
}

impl<B: CaptureBackend + ?Sized> Drop for OpenDevice<'_, B> {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.backend.release(handle);
            tracing::debug!("Camera released");
        }
    }
}

/// Probe the camera at `index`.
pub fn probe_device<B: CaptureBackend + ?Sized>(
    backend: &B,
    index: usize,
    timeout: Duration,
) -> Outcome {
    let mut device = match OpenDevice::open(backend, index) {
        Ok(device) => device,
        Err(e) => {
            tracing::warn!("{}", e);
            return Outcome::failed(ProbeName::Device, "failed to open")
                .with_metric(CAMERA_INDEX, index);
        }
    };
    tracing::debug!(index, "Camera opened");

    let outcome = match device.read_frame(timeout) {
        Ok(frame) => {
            let mut outcome = Outcome::success(ProbeName::Device)
                .with_detail("frame captured")
                .with_metric(CAMERA_INDEX, index);
            if let Some((width, height)) = frame.dimensions {
                outcome = outcome
                    .with_metric(FRAME_WIDTH, width)
                    .with_metric(FRAME_HEIGHT, height);
            }
            outcome
        }
        Err(e) => {
            tracing::warn!(index, "Camera capture failed: {}", e);
            Outcome::failed(ProbeName::Device, e.to_string()).with_metric(CAMERA_INDEX, index)
        }
    };

    drop(device);
    outcome
}
