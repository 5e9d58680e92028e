//! Numeric runtime backed by `candle-core`.

use std::path::Path;

use candle_core::{DType, Device, Tensor};

use crate::diagnostics::{ModelHandle, NumericRuntime, RuntimeError, RuntimeInfo};

/// Release line of the `candle-core` dependency this crate is built against.
///
/// candle exposes no version at runtime, so this is fixed at compile time and
/// must move with the requirement in `Cargo.toml`.
pub const CANDLE_RELEASE: &str = "0.9";

/// Upper bound on accelerator ordinals probed per backend.
const MAX_ORDINALS: usize = 16;

/// [`NumericRuntime`] over candle. Models are safetensors files.
#[derive(Debug, Clone, Default)]
pub struct CandleRuntime;

impl CandleRuntime {
    pub fn new() -> Self {
        Self
    }

    fn smoke_test() -> candle_core::Result<f32> {
        let t = Tensor::ones((2, 2), DType::F32, &Device::Cpu)?;
        t.sum_all()?.to_scalar::<f32>()
    }

    fn accelerators() -> Vec<String> {
        let mut found = Vec::new();
        if candle_core::utils::cuda_is_available() {
            for ordinal in 0..MAX_ORDINALS {
                match Device::new_cuda(ordinal) {
                    Ok(_) => found.push(format!("cuda:{}", ordinal)),
                    Err(_) => break,
                }
            }
        }
        if candle_core::utils::metal_is_available() {
            for ordinal in 0..MAX_ORDINALS {
                match Device::new_metal(ordinal) {
                    Ok(_) => found.push(format!("metal:{}", ordinal)),
                    Err(_) => break,
                }
            }
        }
        found
    }
}

impl NumericRuntime for CandleRuntime {
    fn initialize(&self) -> Result<RuntimeInfo, RuntimeError> {
        let sum = Self::smoke_test().map_err(|e| RuntimeError::Init {
            reason: e.to_string(),
        })?;
        if sum != 4.0 {
            return Err(RuntimeError::Init {
                reason: format!("CPU smoke test returned {} instead of 4", sum),
            });
        }

        Ok(RuntimeInfo {
            version: format!("candle-core {}", CANDLE_RELEASE),
            accelerators: Self::accelerators(),
        })
    }

    fn load_model(&self, path: &Path) -> Result<ModelHandle, RuntimeError> {
        let tensors =
            candle_core::safetensors::load(path, &Device::Cpu).map_err(|e| RuntimeError::Load {
                reason: e.to_string(),
            })?;
        Ok(ModelHandle {
            tensor_count: Some(tensors.len()),
        })
    }
}
