/// Data carried by a touch-start.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchStart {
    /// Touch x relative to the track's left edge.
    pub local_x: f32,
    /// Touch x in page (window) coordinates.
    pub page_x: f32,
    /// Number of contacts down when this touch started.
    pub active_touches: u32,
}

impl TouchStart {
    pub fn new(local_x: f32, page_x: f32) -> Self {
        Self {
            local_x,
            page_x,
            active_touches: 1,
        }
    }

    pub fn with_active_touches(mut self, active_touches: u32) -> Self {
        self.active_touches = active_touches;
        self
    }

    /// Page x of the track's left edge.
    #[inline]
    pub fn container_origin_x(&self) -> f32 {
        self.page_x - self.local_x
    }

    /// Whether this start belongs to a multi-contact gesture.
    #[inline]
    pub fn is_multi_touch(&self) -> bool {
        self.active_touches > 1
    }
}

/// How a gesture finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GestureEnd {
    /// Pointer lifted normally.
    Release,
    /// Another responder took over the gesture.
    Terminate,
    /// The platform cancelled the touch.
    Cancel,
}

/// Gesture events consumed by the slider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    /// A touch or primary button went down over the slider.
    Start(TouchStart),
    /// The pointer moved; `page_x` is absolute.
    Move { page_x: f32 },
    /// The gesture finished.
    End(GestureEnd),
}

impl GestureEvent {
    pub fn start(local_x: f32, page_x: f32) -> Self {
        GestureEvent::Start(TouchStart::new(local_x, page_x))
    }

    pub fn moved(page_x: f32) -> Self {
        GestureEvent::Move { page_x }
    }

    pub fn release() -> Self {
        GestureEvent::End(GestureEnd::Release)
    }

    pub fn is_move(&self) -> bool {
        matches!(self, GestureEvent::Move { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_container_origin() {
        let start = TouchStart::new(30.0, 130.0);
        assert_eq!(start.container_origin_x(), 100.0);
        assert!(!start.is_multi_touch());
        assert!(start.with_active_touches(2).is_multi_touch());
    }
}
