//! Gesture event dispatch into a slider.

use duoslide_core::profiling::profile_function;
use duoslide_input::{GestureBatch, GestureEvent, HandleStatus};

use crate::drag::{DragPhase, StartOutcome};
use crate::slider::RangeSlider;

impl<S> RangeSlider<S> {
    /// Route one gesture event.
    ///
    /// Starts are consumed unless declined; moves and ends are consumed only while this slider
    /// holds a gesture, so other responders still see them otherwise.
    pub fn handle_gesture(&mut self, event: &GestureEvent) -> HandleStatus {
        match *event {
            GestureEvent::Start(start) => match self.on_touch_start(start) {
                StartOutcome::Declined => HandleStatus::ignored(),
                StartOutcome::Deferred | StartOutcome::Active(_) => HandleStatus::consumed(),
            },
            GestureEvent::Move { page_x } => {
                if self.phase() == DragPhase::Idle {
                    return HandleStatus::ignored();
                }
                self.on_pointer_move(page_x);
                HandleStatus::consumed()
            }
            GestureEvent::End(reason) => {
                if self.phase() == DragPhase::Idle {
                    return HandleStatus::ignored();
                }
                self.on_touch_end(reason);
                HandleStatus::consumed()
            }
        }
    }

    /// Handle events from the batch, removing the ones this slider consumed.
    pub fn handle_events(&mut self, events: &mut GestureBatch) {
        profile_function!();
        events.dispatch(|event| self.handle_gesture(event));
    }
}
