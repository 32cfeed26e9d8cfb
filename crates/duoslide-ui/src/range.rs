//! Value domain of a slider.

use crate::error::{SliderError, SliderResult, ensure_finite};

/// Default quantization step.
pub const DEFAULT_STEP: f32 = 1.0;

/// Bounds and step of the value domain.
///
/// `(max - min)` need not be a multiple of `step`; values snap to `min + k * step` (see [`crate::mapper::snap_to_step`]) and are then
/// clamped, so `max` itself may be unreachable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueRange {
    min: f32,
    max: f32,
    step: f32,
}

impl ValueRange {
    /// Create a validated range.
    pub fn new(min: f32, max: f32, step: f32) -> SliderResult<Self> {
        let min = ensure_finite("min", min)?;
        let max = ensure_finite("max", max)?;
        let step = ensure_finite("step", step)?;
        if min >= max {
            return Err(SliderError::EmptyRange { min, max });
        }
        if step <= 0.0 {
            return Err(SliderError::InvalidStep { step });
        }
        Ok(Self { min, max, step })
    }

    /// Range with [`DEFAULT_STEP`].
    pub fn with_default_step(min: f32, max: f32) -> SliderResult<Self> {
        Self::new(min, max, DEFAULT_STEP)
    }

    #[inline]
    pub fn min(&self) -> f32 {
        self.min
    }

    #[inline]
    pub fn max(&self) -> f32 {
        self.max
    }

    #[inline]
    pub fn step(&self) -> f32 {
        self.step
    }

    #[inline]
    pub fn clamp(&self, value: f32) -> f32 {
        crate::mapper::clamp(value, self.min, self.max)
    }
}
