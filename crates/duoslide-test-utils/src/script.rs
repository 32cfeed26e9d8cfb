use duoslide_input::{GestureBatch, GestureEnd, GestureEvent, TouchStart};

/// Gesture sequence written in track-local coordinates.
///
/// The script converts to page coordinates using the track origin it was created with, the
/// same way a host would deliver them.
#[derive(Debug, Clone)]
pub struct DragScript {
    origin_x: f32,
    events: Vec<GestureEvent>,
}

impl DragScript {
    pub fn new(origin_x: f32) -> Self {
        Self {
            origin_x,
            events: Vec::new(),
        }
    }

    pub fn touch(self, local_x: f32) -> Self {
        self.touch_with(local_x, 1)
    }

    pub fn touch_with(mut self, local_x: f32, active_touches: u32) -> Self {
        let start = TouchStart::new(local_x, self.origin_x + local_x)
            .with_active_touches(active_touches);
        self.events.push(GestureEvent::Start(start));
        self
    }

    pub fn drag_to(mut self, local_x: f32) -> Self {
        self.events.push(GestureEvent::moved(self.origin_x + local_x));
        self
    }

    /// Move through every point in `path`.
    pub fn drag_through(self, path: impl IntoIterator<Item = f32>) -> Self {
        path.into_iter().fold(self, |script, x| script.drag_to(x))
    }

    pub fn release(self) -> Self {
        self.end(GestureEnd::Release)
    }

    pub fn end(mut self, reason: GestureEnd) -> Self {
        self.events.push(GestureEvent::End(reason));
        self
    }

    pub fn events(&self) -> &[GestureEvent] {
        &self.events
    }

    pub fn batch(self) -> GestureBatch {
        GestureBatch::from_events(self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_to_page() {
        let script = DragScript::new(100.0).touch(10.0).drag_through([20.0, 30.0]).release();
        assert_eq!(
            script.events(),
            &[
                GestureEvent::start(10.0, 110.0),
                GestureEvent::moved(120.0),
                GestureEvent::moved(130.0),
                GestureEvent::release(),
            ]
        );
    }
}
