//! Derived pixel positions for the thumbs and the value label.

use duoslide_core::math::{Vec2, approx_eq};

use crate::dirty::DirtyFlags;
use crate::mapper;
use crate::measure::Measurements;
use crate::range::ValueRange;
use crate::selection::{Selection, Thumb};

/// Keeps thumb and label offsets in step with measurements and values.
///
/// Every method reports, as [`DirtyFlags`], which offsets actually moved; calling any of them
/// again with the same inputs reports nothing.
#[derive(Debug, Clone, Default)]
pub struct LayoutTracker {
    low_offset: f32,
    high_offset: f32,
    label_offset: Vec2,
    /// Offset of the thumb the label follows, as of the last drag update.
    label_anchor: f32,
    rails_inset: f32,
}

impl LayoutTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute both thumb offsets from the current values.
    ///
    /// No-op until both widths are known; the thumbs stay at offset 0 until then.
    pub fn refresh(
        &mut self,
        selection: Selection,
        range: &ValueRange,
        measurements: &Measurements,
    ) -> DirtyFlags {
        let Some(geometry) = measurements.geometry() else {
            return DirtyFlags::NONE;
        };
        let low = geometry.offset_for(selection.low, range);
        let high = geometry.offset_for(selection.high, range);
        self.set_thumb(Thumb::Low, low) | self.set_thumb(Thumb::High, high)
    }

    /// Move one thumb to an already computed offset.
    pub fn set_thumb(&mut self, thumb: Thumb, offset: f32) -> DirtyFlags {
        let slot = match thumb {
            Thumb::Low => &mut self.low_offset,
            Thumb::High => &mut self.high_offset,
        };
        let changed = !approx_eq(*slot, offset);
        *slot = offset;
        DirtyFlags::when(changed, DirtyFlags::thumb(thumb))
    }

    /// Re-anchor the label over a thumb at `anchor`.
    pub fn track_label(&mut self, anchor: f32, measurements: &Measurements) -> DirtyFlags {
        self.label_anchor = anchor;
        self.relayout_label(measurements)
    }

    /// Recompute the label offset after the label or thumb was re-measured.
    pub fn relayout_label(&mut self, measurements: &Measurements) -> DirtyFlags {
        let offset = mapper::label_offset(
            self.label_anchor,
            measurements.thumb_width,
            measurements.label_width,
            measurements.label_height,
        );
        let changed =
            !approx_eq(self.label_offset.x, offset.x) || !approx_eq(self.label_offset.y, offset.y);
        self.label_offset = offset;
        DirtyFlags::when(changed, DirtyFlags::LABEL_POSITION)
    }

    /// Rails are inset by half a thumb on each side so they end under the thumb centers.
    pub fn relayout_rails(&mut self, measurements: &Measurements) -> DirtyFlags {
        let inset = measurements.thumb_width / 2.0;
        let changed = !approx_eq(self.rails_inset, inset);
        self.rails_inset = inset;
        DirtyFlags::when(changed, DirtyFlags::RAILS)
    }

    #[inline]
    pub fn thumb_offset(&self, thumb: Thumb) -> f32 {
        match thumb {
            Thumb::Low => self.low_offset,
            Thumb::High => self.high_offset,
        }
    }

    #[inline]
    pub fn label_offset(&self) -> Vec2 {
        self.label_offset
    }

    #[inline]
    pub fn label_anchor(&self) -> f32 {
        self.label_anchor
    }

    #[inline]
    pub fn rails_inset(&self) -> f32 {
        self.rails_inset
    }
}
