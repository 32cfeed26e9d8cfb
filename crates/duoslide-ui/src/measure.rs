//! Layout measurements reported by the slider's leaf views.

use std::fmt;

use crate::error::{SliderError, SliderResult};
use crate::mapper;
use crate::range::ValueRange;
use crate::selection::Thumb;

/// Which measurement a layout report carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeasurementKind {
    ContainerWidth,
    ThumbWidth,
    LabelWidth,
    LabelHeight,
}

impl fmt::Display for MeasurementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MeasurementKind::ContainerWidth => "container width",
            MeasurementKind::ThumbWidth => "thumb width",
            MeasurementKind::LabelWidth => "label width",
            MeasurementKind::LabelHeight => "label height",
        };
        f.write_str(name)
    }
}

/// Latest reported sizes. Everything is zero until its view reports.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Measurements {
    pub container_width: f32,
    pub thumb_width: f32,
    pub label_width: f32,
    pub label_height: f32,
}

impl Measurements {
    /// Track geometry, once both widths are known and usable.
    pub fn geometry(&self) -> Option<TrackGeometry> {
        TrackGeometry::new(self.container_width, self.thumb_width).ok()
    }

    /// Store a report. Returns whether the stored value changed.
    ///
    /// Negative and non-finite reports are rejected without being stored. A width report that
    /// leaves the thumb at least as wide as the container is stored but reported as
    /// [`SliderError::DegenerateGeometry`].
    pub fn report(&mut self, kind: MeasurementKind, value: f32) -> SliderResult<bool> {
        if !value.is_finite() || value < 0.0 {
            return Err(SliderError::InvalidMeasurement { kind, value });
        }
        let slot = match kind {
            MeasurementKind::ContainerWidth => &mut self.container_width,
            MeasurementKind::ThumbWidth => &mut self.thumb_width,
            MeasurementKind::LabelWidth => &mut self.label_width,
            MeasurementKind::LabelHeight => &mut self.label_height,
        };
        let changed = *slot != value;
        *slot = value;

        if matches!(
            kind,
            MeasurementKind::ContainerWidth | MeasurementKind::ThumbWidth
        ) && self.container_width > 0.0
            && self.thumb_width > 0.0
            && self.container_width <= self.thumb_width
        {
            return Err(SliderError::DegenerateGeometry {
                container_width: self.container_width,
                thumb_width: self.thumb_width,
            });
        }
        Ok(changed)
    }
}

/// Container and thumb widths known to leave room for the thumb to travel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackGeometry {
    container_width: f32,
    thumb_width: f32,
}

impl TrackGeometry {
    pub fn new(container_width: f32, thumb_width: f32) -> SliderResult<Self> {
        if !(thumb_width > 0.0 && container_width > thumb_width) {
            return Err(SliderError::DegenerateGeometry {
                container_width,
                thumb_width,
            });
        }
        Ok(Self {
            container_width,
            thumb_width,
        })
    }

    #[inline]
    pub fn container_width(&self) -> f32 {
        self.container_width
    }

    #[inline]
    pub fn thumb_width(&self) -> f32 {
        self.thumb_width
    }

    /// Distance a thumb's left edge can travel.
    #[inline]
    pub fn available(&self) -> f32 {
        self.container_width - self.thumb_width
    }

    /// Thumb center for `value`.
    #[inline]
    pub fn center_for(&self, value: f32, range: &ValueRange) -> f32 {
        mapper::position_for_value(
            value,
            self.container_width,
            self.thumb_width,
            range.min(),
            range.max(),
        )
    }

    /// Thumb left-edge offset for `value`.
    #[inline]
    pub fn offset_for(&self, value: f32, range: &ValueRange) -> f32 {
        mapper::thumb_offset_for_value(
            value,
            self.container_width,
            self.thumb_width,
            range.min(),
            range.max(),
        )
    }

    /// Quantized value under a track-local pixel.
    #[inline]
    pub fn value_at(&self, pixel: f32, range: &ValueRange) -> f32 {
        mapper::value_for_position(
            pixel,
            self.container_width,
            self.thumb_width,
            range.min(),
            range.max(),
            range.step(),
        )
    }

    /// Thumb nearest to a track-local touch, given both current values.
    pub fn nearest_thumb(&self, touch_x: f32, low: f32, high: f32, range: &ValueRange) -> Thumb {
        mapper::select_nearest_thumb(
            touch_x,
            self.center_for(low, range),
            self.center_for(high, range),
        )
    }
}
