//! Video4Linux capture backend.

use std::io;
use std::time::Duration;

use ::v4l::buffer::Type;
use ::v4l::io::mmap::Stream;
use ::v4l::io::traits::CaptureStream;
use ::v4l::video::Capture;
use ::v4l::Device;

use crate::config::MAX_CAPTURE_TIMEOUT_MS;
use crate::diagnostics::{CaptureBackend, CaptureError, Frame};

/// Opens `/dev/video<index>` and reads a single memory-mapped buffer.
#[derive(Debug, Clone, Default)]
pub struct V4lBackend;

impl V4lBackend {
    pub fn new() -> Self {
        Self
    }
}

/// An open V4L2 device.
pub struct V4lHandle {
    device: Device,
}

impl CaptureBackend for V4lBackend {
    type Handle = V4lHandle;

    fn open(&self, index: usize) -> Result<V4lHandle, CaptureError> {
        let device = Device::new(index).map_err(|e| CaptureError::Open {
            index,
            reason: e.to_string(),
        })?;
        Ok(V4lHandle { device })
    }

    fn read_frame(
        &self,
        handle: &mut V4lHandle,
        timeout: Duration,
    ) -> Result<Frame, CaptureError> {
        let mut stream = Stream::with_buffers(&handle.device, Type::VideoCapture, 1)
            .map_err(|e| CaptureError::Read(e.to_string()))?;
        // v4l converts the poll timeout to i32 milliseconds and panics past that.
        stream.set_timeout(timeout.min(Duration::from_millis(MAX_CAPTURE_TIMEOUT_MS)));

        match stream.next() {
            Ok((data, meta)) if !data.is_empty() && meta.bytesused > 0 => {}
            Ok(_) => return Err(CaptureError::NoFrame),
            Err(e) if e.kind() == io::ErrorKind::TimedOut => return Err(CaptureError::NoFrame),
            Err(e) => return Err(CaptureError::Read(e.to_string())),
        }

        let dimensions = handle
            .device
            .format()
            .ok()
            .map(|format| (format.width, format.height));
        Ok(Frame { dimensions })
    }

    fn release(&self, handle: V4lHandle) {
        drop(handle);
    }
}
