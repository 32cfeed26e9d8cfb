//! Pixel <-> value mapping.
//!
//! All functions are pure. Pixel positions are measured from the container's left edge.
//! A thumb's *center* travels from `thumb_width / 2` to `container_width - thumb_width / 2`;
//! its rendered *offset* (left edge) travels from `0` to `container_width - thumb_width`.
//!
//! Callers must not map while either width is unknown (zero); [`crate::measure::TrackGeometry`]
//! only exists once both are known, and is the preferred entry point.

use duoslide_core::math::Vec2;

use crate::selection::Thumb;

/// Standard clamp. `lo <= hi` is assumed.
#[inline]
pub fn clamp(x: f32, lo: f32, hi: f32) -> f32 {
    x.max(lo).min(hi)
}

/// Center pixel of a thumb showing `value`.
#[inline]
pub fn position_for_value(
    value: f32,
    container_width: f32,
    thumb_width: f32,
    min: f32,
    max: f32,
) -> f32 {
    thumb_width / 2.0 + (value - min) / (max - min) * (container_width - thumb_width)
}

/// Quantized value under a pixel, clamped to `[min, max]`.
///
/// Steps count from `min`; halves round up.
pub fn value_for_position(
    pixel: f32,
    container_width: f32,
    thumb_width: f32,
    min: f32,
    max: f32,
    step: f32,
) -> f32 {
    let raw = min + (pixel - thumb_width / 2.0) / (container_width - thumb_width) * (max - min);
    snap_to_step(raw, min, max, step)
}

/// Snap `value` to `min + k * step`, clamped to `[min, max]` before and after.
///
/// Halves round up, so `max` is unreachable when the span is not a multiple of `step` and
/// `max` is nearer the step below it.
pub fn snap_to_step(value: f32, min: f32, max: f32, step: f32) -> f32 {
    let raw = clamp(value, min, max);
    let steps = ((raw - min) / step).round();
    clamp(min + steps * step, min, max)
}

/// Left-edge offset of a thumb showing `value`, kept inside the track.
#[inline]
pub fn thumb_offset_for_value(
    value: f32,
    container_width: f32,
    thumb_width: f32,
    min: f32,
    max: f32,
) -> f32 {
    let available = container_width - thumb_width;
    let offset = position_for_value(value, container_width, thumb_width, min, max) - thumb_width / 2.0;
    clamp(offset, 0.0, available)
}

/// Which thumb a touch at `touch_x` should grab.
///
/// Equidistant touches go to [`Thumb::Low`]. When both thumbs sit on the same pixel the side
/// of the touch decides instead: right of the stack grabs [`Thumb::High`], anything else
/// [`Thumb::Low`]. Thumbs never cross, so this is the only way to pull a stack apart when it
/// rests against `min`.
#[inline]
pub fn select_nearest_thumb(touch_x: f32, low_pixel: f32, high_pixel: f32) -> Thumb {
    if low_pixel == high_pixel {
        return if touch_x > high_pixel { Thumb::High } else { Thumb::Low };
    }
    if (touch_x - low_pixel).abs() <= (touch_x - high_pixel).abs() {
        Thumb::Low
    } else {
        Thumb::High
    }
}

/// Label offset that centers a label of `label_width` over a thumb at `thumb_offset`, raised
/// by its own height.
#[inline]
pub fn label_offset(thumb_offset: f32, thumb_width: f32, label_width: f32, label_height: f32) -> Vec2 {
    Vec2::new(
        thumb_offset + thumb_width / 2.0 - label_width / 2.0,
        -label_height,
    )
}

/// Round half up, matching the label's integer display.
#[inline]
pub fn round_half_up(value: f32) -> f32 {
    (value + 0.5).floor()
}
