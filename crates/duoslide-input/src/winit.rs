//! Translation of winit window events into slider gestures.
//!
//! The host tells the adapter where the slider's touchable area sits in logical window
//! coordinates; touches and left-button presses inside it start gestures, and the pointer
//! that started a gesture drives it until it lifts.

use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, MouseButton, TouchPhase, WindowEvent};

use crate::gesture::{GestureEnd, GestureEvent, TouchStart};

/// Slider touchable area in logical window coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TrackBounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl TrackBounds {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x <= self.x + self.width && y >= self.y && y <= self.y + self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Driver {
    Touch(u64),
    Mouse,
}

pub struct WinitGestureAdapter {
    bounds: TrackBounds,
    scale_factor: f64,
    cursor: Option<(f32, f32)>,
    touches: Vec<u64>,
    driver: Option<Driver>,
}

impl WinitGestureAdapter {
    pub fn new(bounds: TrackBounds) -> Self {
        Self {
            bounds,
            scale_factor: 1.0,
            cursor: None,
            touches: Vec::new(),
            driver: None,
        }
    }

    pub fn set_bounds(&mut self, bounds: TrackBounds) {
        self.bounds = bounds;
    }

    pub fn set_scale_factor(&mut self, scale_factor: f64) {
        self.scale_factor = scale_factor;
    }

    pub fn is_tracking(&self) -> bool {
        self.driver.is_some()
    }

    /// Translate a window event, if it means anything to the slider.
    pub fn translate(&mut self, event: &WindowEvent) -> Option<GestureEvent> {
        match event {
            WindowEvent::Touch(touch) => self.touch(touch.id, touch.phase, touch.location),
            WindowEvent::CursorMoved { position, .. } => self.cursor_moved(*position),
            WindowEvent::MouseInput { state, button, .. } => self.mouse_input(*state, *button),
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                self.scale_factor = *scale_factor;
                None
            }
            WindowEvent::Focused(false) => self.terminate(),
            WindowEvent::CursorLeft { .. } if self.driver == Some(Driver::Mouse) => {
                self.terminate()
            }
            _ => None,
        }
    }

    pub fn touch(
        &mut self,
        id: u64,
        phase: TouchPhase,
        location: PhysicalPosition<f64>,
    ) -> Option<GestureEvent> {
        let (x, y) = self.to_logical(location);
        match phase {
            TouchPhase::Started => {
                self.touches.push(id);
                if self.driver.is_some() || !self.bounds.contains(x, y) {
                    return None;
                }
                self.driver = Some(Driver::Touch(id));
                let start = TouchStart::new(x - self.bounds.x, x)
                    .with_active_touches(self.touches.len() as u32);
                Some(GestureEvent::Start(start))
            }
            TouchPhase::Moved => {
                (self.driver == Some(Driver::Touch(id))).then_some(GestureEvent::moved(x))
            }
            TouchPhase::Ended | TouchPhase::Cancelled => {
                self.touches.retain(|t| *t != id);
                if self.driver != Some(Driver::Touch(id)) {
                    return None;
                }
                self.driver = None;
                let end = if phase == TouchPhase::Ended {
                    GestureEnd::Release
                } else {
                    GestureEnd::Cancel
                };
                Some(GestureEvent::End(end))
            }
        }
    }

    pub fn cursor_moved(&mut self, position: PhysicalPosition<f64>) -> Option<GestureEvent> {
        let (x, y) = self.to_logical(position);
        self.cursor = Some((x, y));
        (self.driver == Some(Driver::Mouse)).then_some(GestureEvent::moved(x))
    }

    pub fn mouse_input(&mut self, state: ElementState, button: MouseButton) -> Option<GestureEvent> {
        if button != MouseButton::Left {
            return None;
        }
        match state {
            ElementState::Pressed => {
                let (x, y) = self.cursor?;
                if self.driver.is_some() || !self.bounds.contains(x, y) {
                    return None;
                }
                self.driver = Some(Driver::Mouse);
                Some(GestureEvent::start(x - self.bounds.x, x))
            }
            ElementState::Released => {
                if self.driver != Some(Driver::Mouse) {
                    return None;
                }
                self.driver = None;
                Some(GestureEvent::release())
            }
        }
    }

    fn terminate(&mut self) -> Option<GestureEvent> {
        self.touches.clear();
        self.driver
            .take()
            .map(|_| GestureEvent::End(GestureEnd::Terminate))
    }

    fn to_logical(&self, position: PhysicalPosition<f64>) -> (f32, f32) {
        let logical = position.to_logical::<f64>(self.scale_factor);
        (logical.x as f32, logical.y as f32)
    }
}
