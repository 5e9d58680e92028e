//! Recording fakes for the runtime and capture seams.

use std::cell::{Cell, RefCell};
use std::path::Path;
use std::rc::Rc;
use std::time::Duration;

use super::device::{CaptureBackend, CaptureError, Frame};
use super::runtime::{ModelHandle, NumericRuntime, RuntimeError, RuntimeInfo};

/// Call log that can be shared between fakes to observe ordering.
pub type CallLog = Rc<RefCell<Vec<String>>>;

pub fn call_log() -> CallLog {
    Rc::new(RefCell::new(Vec::new()))
}

pub struct FakeRuntime {
    init: Result<RuntimeInfo, String>,
    load_error: Option<String>,
    tensor_count: Option<usize>,
    panic_on_init: bool,
    log: CallLog,
}

impl FakeRuntime {
    pub fn available(version: &str, accelerators: &[&str]) -> Self {
        Self {
            init: Ok(RuntimeInfo {
                version: version.to_string(),
                accelerators: accelerators.iter().map(|s| s.to_string()).collect(),
            }),
            load_error: None,
            tensor_count: None,
            panic_on_init: false,
            log: call_log(),
        }
    }

    pub fn unavailable(reason: &str) -> Self {
        Self {
            init: Err(reason.to_string()),
            load_error: None,
            tensor_count: None,
            panic_on_init: false,
            log: call_log(),
        }
    }

    pub fn panicking() -> Self {
        Self {
            panic_on_init: true,
            ..Self::available("never", &[])
        }
    }

    pub fn rejecting_models(mut self, reason: &str) -> Self {
        self.load_error = Some(reason.to_string());
        self
    }

    pub fn with_tensor_count(mut self, count: usize) -> Self {
        self.tensor_count = Some(count);
        self
    }

    pub fn with_log(mut self, log: CallLog) -> Self {
        self.log = log;
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.log.borrow().clone()
    }
}

impl NumericRuntime for FakeRuntime {
    fn initialize(&self) -> Result<RuntimeInfo, RuntimeError> {
        self.log.borrow_mut().push("initialize".to_string());
        if self.panic_on_init {
            panic!("runtime exploded");
        }
        self.init
            .clone()
            .map_err(|reason| RuntimeError::Init { reason })
    }

    fn load_model(&self, path: &Path) -> Result<ModelHandle, RuntimeError> {
        self.log
            .borrow_mut()
            .push(format!("load_model({})", path.display()));
        match &self.load_error {
            Some(reason) => Err(RuntimeError::Load {
                reason: reason.clone(),
            }),
            None => Ok(ModelHandle {
                tensor_count: self.tensor_count,
            }),
        }
    }
}

#[derive(Debug, Clone)]
pub enum FrameBehavior {
    Frame(Option<(u32, u32)>),
    NoFrame,
    ReadError(String),
    Panic,
}

pub struct FakeBackend {
    opens: bool,
    behavior: FrameBehavior,
    releases: Cell<usize>,
    log: CallLog,
}

impl FakeBackend {
    pub fn unopenable() -> Self {
        Self {
            opens: false,
            behavior: FrameBehavior::NoFrame,
            releases: Cell::new(0),
            log: call_log(),
        }
    }

    pub fn opening(behavior: FrameBehavior) -> Self {
        Self {
            opens: true,
            behavior,
            releases: Cell::new(0),
            log: call_log(),
        }
    }

    pub fn with_log(mut self, log: CallLog) -> Self {
        self.log = log;
        self
    }

    pub fn release_count(&self) -> usize {
        self.releases.get()
    }

    pub fn calls(&self) -> Vec<String> {
        self.log.borrow().clone()
    }
}

impl CaptureBackend for FakeBackend {
    type Handle = usize;

    fn open(&self, index: usize) -> Result<usize, CaptureError> {
        self.log.borrow_mut().push(format!("open({})", index));
        if self.opens {
            Ok(index)
        } else {
            Err(CaptureError::Open {
                index,
                reason: "No such device".to_string(),
            })
        }
    }

    fn read_frame(&self, _handle: &mut usize, timeout: Duration) -> Result<Frame, CaptureError> {
        self.log
            .borrow_mut()
            .push(format!("read_frame({}ms)", timeout.as_millis()));
        match &self.behavior {
            FrameBehavior::Frame(dimensions) => Ok(Frame {
                dimensions: *dimensions,
            }),
            FrameBehavior::NoFrame => Err(CaptureError::NoFrame),
            FrameBehavior::ReadError(reason) => Err(CaptureError::Read(reason.clone())),
            FrameBehavior::Panic => panic!("driver crashed"),
        }
    }

    fn release(&self, _handle: usize) {
        self.log.borrow_mut().push("release".to_string());
        self.releases.set(self.releases.get() + 1);
    }
}
