use duoslide_core::math::Vec2;
use duoslide_ui::{SliderFrame, SliderView, Thumb};

/// One leaf update pushed by a render pass.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewCall {
    Root,
    Rails(f32),
    Thumb(Thumb, f32),
    LabelPosition(Vec2),
    LabelText(String),
}

/// View that logs every call and keeps the resulting frame.
#[derive(Debug, Default)]
pub struct RecordingView {
    calls: Vec<ViewCall>,
    frame: SliderFrame,
}

impl RecordingView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[ViewCall] {
        &self.calls
    }

    /// Drain the call log, keeping the frame.
    pub fn take_calls(&mut self) -> Vec<ViewCall> {
        std::mem::take(&mut self.calls)
    }

    pub fn frame(&self) -> &SliderFrame {
        &self.frame
    }

    pub fn thumb_updates(&self, thumb: Thumb) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, ViewCall::Thumb(t, _) if *t == thumb))
            .count()
    }

    pub fn label_text_updates(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, ViewCall::LabelText(_)))
            .count()
    }
}

impl<S> SliderView<S> for RecordingView {
    fn root(&mut self, _style: &S) {
        self.calls.push(ViewCall::Root);
    }

    fn rails(&mut self, inset: f32) {
        self.calls.push(ViewCall::Rails(inset));
        SliderView::<S>::rails(&mut self.frame, inset);
    }

    fn thumb(&mut self, thumb: Thumb, offset_x: f32) {
        self.calls.push(ViewCall::Thumb(thumb, offset_x));
        SliderView::<S>::thumb(&mut self.frame, thumb, offset_x);
    }

    fn label_position(&mut self, offset: Vec2) {
        self.calls.push(ViewCall::LabelPosition(offset));
        SliderView::<S>::label_position(&mut self.frame, offset);
    }

    fn label_text(&mut self, text: &str) {
        self.calls.push(ViewCall::LabelText(text.to_string()));
        SliderView::<S>::label_text(&mut self.frame, text);
    }
}
