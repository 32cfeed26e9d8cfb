//! Error types for slider configuration and layout reports.

use std::fmt;

use crate::measure::MeasurementKind;

/// Contract violations detected by the slider.
///
/// Missing measurements are not errors: a slider whose widths are still zero simply stays put
/// until layout settles.
#[derive(Debug, Clone, PartialEq)]
pub enum SliderError {
    /// A configuration value was NaN or infinite.
    NonFinite {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f32,
    },

    /// `min` was not strictly below `max`.
    EmptyRange {
        /// Lower bound.
        min: f32,
        /// Upper bound.
        max: f32,
    },

    /// `step` was zero or negative.
    InvalidStep {
        /// The rejected step.
        step: f32,
    },

    /// `low` was above `high`.
    InvertedSelection {
        /// Requested low value.
        low: f32,
        /// Requested high value.
        high: f32,
    },

    /// A layout report was negative or not finite. The report is discarded.
    InvalidMeasurement {
        /// Which measurement was reported.
        kind: MeasurementKind,
        /// The rejected value.
        value: f32,
    },

    /// The thumb is at least as wide as the container, leaving no room to travel.
    ///
    /// The report is kept, but the slider stays inert until the widths are corrected.
    DegenerateGeometry {
        /// Reported container width.
        container_width: f32,
        /// Reported thumb width.
        thumb_width: f32,
    },
}

impl fmt::Display for SliderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SliderError::NonFinite { field, value } => {
                write!(f, "'{}' must be finite, got {}", field, value)
            }
            SliderError::EmptyRange { min, max } => {
                write!(f, "min ({}) must be less than max ({})", min, max)
            }
            SliderError::InvalidStep { step } => {
                write!(f, "step must be positive, got {}", step)
            }
            SliderError::InvertedSelection { low, high } => {
                write!(f, "low ({}) must not exceed high ({})", low, high)
            }
            SliderError::InvalidMeasurement { kind, value } => {
                write!(f, "invalid {} measurement: {}", kind, value)
            }
            SliderError::DegenerateGeometry {
                container_width,
                thumb_width,
            } => write!(
                f,
                "container width ({}) must exceed thumb width ({})",
                container_width, thumb_width
            ),
        }
    }
}

impl std::error::Error for SliderError {}

/// Result alias for slider operations.
pub type SliderResult<T> = Result<T, SliderError>;

/// Reject NaN and infinities.
pub(crate) fn ensure_finite(field: &'static str, value: f32) -> SliderResult<f32> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(SliderError::NonFinite { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = SliderError::EmptyRange { min: 5.0, max: 5.0 };
        assert_eq!(err.to_string(), "min (5) must be less than max (5)");

        let err = SliderError::InvalidMeasurement {
            kind: MeasurementKind::ThumbWidth,
            value: -1.0,
        };
        assert_eq!(err.to_string(), "invalid thumb width measurement: -1");
    }

    #[test]
    fn test_ensure_finite() {
        assert_eq!(ensure_finite("min", 1.5), Ok(1.5));
        assert!(matches!(
            ensure_finite("max", f32::NAN),
            Err(SliderError::NonFinite { field: "max", .. })
        ));
    }
}
