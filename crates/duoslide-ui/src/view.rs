//! Leaf view collaborators.
//!
//! The slider does not draw anything. It pushes offsets and label text to a [`SliderView`],
//! and only for the outputs that changed since the previous render pass.

use duoslide_core::math::Vec2;

use crate::selection::Thumb;

/// Receiver for the slider's rendered outputs.
///
/// Offsets are in pixels relative to the container's left edge. `S` is the opaque root style
/// handed through from the slider's configuration.
pub trait SliderView<S = ()> {
    /// Root container style was set or replaced.
    fn root(&mut self, _style: &S) {}

    /// Rails inset from both container edges.
    fn rails(&mut self, inset: f32);

    /// A thumb's left-edge offset.
    fn thumb(&mut self, thumb: Thumb, offset_x: f32);

    /// Label offset; `y` is negative to sit above the track.
    fn label_position(&mut self, offset: Vec2);

    fn label_text(&mut self, text: &str);
}

/// Retained copy of everything a slider has rendered.
///
/// Useful as a headless view and for snapshots.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SliderFrame {
    pub rails_inset: f32,
    pub low_offset: f32,
    pub high_offset: f32,
    pub label_offset: Vec2,
    pub label_text: String,
}

impl SliderFrame {
    pub fn thumb_offset(&self, thumb: Thumb) -> f32 {
        match thumb {
            Thumb::Low => self.low_offset,
            Thumb::High => self.high_offset,
        }
    }
}

impl<S> SliderView<S> for SliderFrame {
    fn rails(&mut self, inset: f32) {
        self.rails_inset = inset;
    }

    fn thumb(&mut self, thumb: Thumb, offset_x: f32) {
        match thumb {
            Thumb::Low => self.low_offset = offset_x,
            Thumb::High => self.high_offset = offset_x,
        }
    }

    fn label_position(&mut self, offset: Vec2) {
        self.label_offset = offset;
    }

    fn label_text(&mut self, text: &str) {
        self.label_text.clear();
        self.label_text.push_str(text);
    }
}
