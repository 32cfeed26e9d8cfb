use std::sync::Arc;

use parking_lot::Mutex;

/// Records value-changed notifications.
///
/// Clones share the same log, so a test can hand [`ValueRecorder::callback`] to a slider and
/// keep the recorder to inspect afterwards.
#[derive(Debug, Clone, Default)]
pub struct ValueRecorder {
    calls: Arc<Mutex<Vec<(f32, f32)>>>,
}

impl ValueRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Callback suitable for `on_value_changed`.
    pub fn callback(&self) -> impl FnMut(f32, f32) + 'static {
        let calls = Arc::clone(&self.calls);
        move |low, high| calls.lock().push((low, high))
    }

    pub fn calls(&self) -> Vec<(f32, f32)> {
        self.calls.lock().clone()
    }

    pub fn count(&self) -> usize {
        self.calls.lock().len()
    }

    pub fn last(&self) -> Option<(f32, f32)> {
        self.calls.lock().last().copied()
    }

    pub fn clear(&self) {
        self.calls.lock().clear();
    }
}
