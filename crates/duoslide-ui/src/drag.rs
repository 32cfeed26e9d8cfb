//! Drag state machine.
//!
//! One gesture at a time. A touch-start captures the track origin, picks the nearest thumb and
//! subscribes to the pointer signal; every pointer sample is mapped to a quantized value and
//! reported as a [`ValueTransition`] only when that value differs from the last one reported in
//! this gesture. Release, terminate and cancel all drop the session and its subscription.
//!
//! The machine never caches range, values or measurements across calls: each call receives
//! the current [`DragInputs`], so a gesture that outlives several prop updates still maps
//! against the newest configuration.

use duoslide_input::{GestureEnd, PointerSignal, Subscription, TouchStart};

use crate::measure::{Measurements, TrackGeometry};
use crate::range::ValueRange;
use crate::selection::{Selection, Thumb};

/// Current slider state read by every drag step.
#[derive(Debug, Clone, Copy)]
pub struct DragInputs<'a> {
    pub range: &'a ValueRange,
    pub selection: Selection,
    pub measurements: &'a Measurements,
}

/// Observable phase of the machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragPhase {
    /// No gesture in progress.
    Idle,
    /// A touch is down but the track has not been measured yet.
    Pending,
    /// A thumb is following the pointer.
    Dragging,
}

/// Result of a touch-start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartOutcome {
    /// More than one contact; the gesture was not captured.
    Declined,
    /// Captured, but inert until the track is measured.
    Deferred,
    /// Captured; `Thumb` follows the pointer.
    Active(Thumb),
}

/// A committed value change produced by one pointer sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueTransition {
    /// Thumb that moved.
    pub thumb: Thumb,
    /// Its new quantized value.
    pub value: f32,
    /// Its new left-edge offset.
    pub offset: f32,
    /// Full pair with `value` substituted on `thumb`'s side.
    pub selection: Selection,
}

/// Result of a pointer sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SampleOutcome {
    /// No gesture, or the gesture is still waiting for measurements.
    Ignored,
    /// The sample mapped to the value already reported.
    Unchanged,
    /// The active thumb moved to a new value.
    Changed(ValueTransition),
}

/// State of one captured gesture.
#[derive(Debug)]
pub struct GestureSession {
    active: Thumb,
    container_origin_x: f32,
    last_value: Option<f32>,
    last_position: f32,
    subscription: Subscription,
}

impl GestureSession {
    pub fn active_thumb(&self) -> Thumb {
        self.active
    }

    pub fn container_origin_x(&self) -> f32 {
        self.container_origin_x
    }

    /// Last value reported in this gesture, if any.
    pub fn last_value(&self) -> Option<f32> {
        self.last_value
    }

    pub fn last_position(&self) -> f32 {
        self.last_position
    }

    /// Map one sample. Only reports when the value changed.
    fn sample(
        &mut self,
        page_x: f32,
        geometry: &TrackGeometry,
        inputs: &DragInputs<'_>,
    ) -> SampleOutcome {
        let local = page_x - self.container_origin_x;
        let mapped = geometry.value_at(local, inputs.range);
        // The active thumb may meet the other one but never pass it.
        let value = match self.active {
            Thumb::Low => mapped.min(inputs.selection.high),
            Thumb::High => mapped.max(inputs.selection.low),
        };
        if self.last_value == Some(value) {
            return SampleOutcome::Unchanged;
        }

        let offset = geometry.offset_for(value, inputs.range);
        self.last_value = Some(value);
        self.last_position = offset;
        SampleOutcome::Changed(ValueTransition {
            thumb: self.active,
            value,
            offset,
            selection: inputs.selection.with(self.active, value),
        })
    }
}

#[derive(Debug)]
struct PendingGesture {
    start: TouchStart,
    subscription: Subscription,
}

#[derive(Debug, Default)]
enum DragState {
    #[default]
    Idle,
    Pending(PendingGesture),
    Dragging(GestureSession),
}

/// Owns the active gesture and the pointer signal it listens on.
#[derive(Debug, Default)]
pub struct DragMachine {
    state: DragState,
    signal: PointerSignal,
    /// Thumb of the most recent gesture; the label shows its value.
    label_thumb: Thumb,
}

impl DragMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> DragPhase {
        match self.state {
            DragState::Idle => DragPhase::Idle,
            DragState::Pending(_) => DragPhase::Pending,
            DragState::Dragging(_) => DragPhase::Dragging,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    /// Thumb currently following the pointer.
    pub fn active_thumb(&self) -> Option<Thumb> {
        self.session().map(GestureSession::active_thumb)
    }

    pub fn session(&self) -> Option<&GestureSession> {
        match &self.state {
            DragState::Dragging(session) => Some(session),
            _ => None,
        }
    }

    /// Thumb whose value the label shows.
    pub fn label_thumb(&self) -> Thumb {
        self.label_thumb
    }

    /// Attached pointer listeners; never more than one.
    pub fn listener_count(&self) -> usize {
        self.signal.listener_count()
    }

    /// Begin a gesture, replacing any gesture still in progress.
    pub fn touch_start(&mut self, start: TouchStart, inputs: &DragInputs<'_>) -> StartOutcome {
        // Dropping the old state detaches its listener before the new one attaches.
        self.state = DragState::Idle;

        if start.is_multi_touch() {
            tracing::debug!(touches = start.active_touches, "multi-touch start declined");
            return StartOutcome::Declined;
        }

        let subscription = self.signal.subscribe();
        match inputs.measurements.geometry() {
            Some(geometry) => {
                let thumb = self.activate(start, subscription, &geometry, inputs);
                StartOutcome::Active(thumb)
            }
            None => {
                tracing::debug!(local_x = start.local_x, "track not measured, gesture deferred");
                self.state = DragState::Pending(PendingGesture {
                    start,
                    subscription,
                });
                StartOutcome::Deferred
            }
        }
    }

    /// Feed one absolute pointer sample.
    pub fn pointer_sample(&mut self, page_x: f32, inputs: &DragInputs<'_>) -> SampleOutcome {
        let Some(geometry) = inputs.measurements.geometry() else {
            return SampleOutcome::Ignored;
        };

        if matches!(self.state, DragState::Pending(_)) {
            let DragState::Pending(pending) = std::mem::take(&mut self.state) else {
                return SampleOutcome::Ignored;
            };
            self.activate(pending.start, pending.subscription, &geometry, inputs);
        }

        match &mut self.state {
            DragState::Dragging(session) if session.subscription.is_attached() => {
                let outcome = session.sample(page_x, &geometry, inputs);
                if let SampleOutcome::Changed(transition) = &outcome {
                    tracing::trace!(
                        thumb = ?transition.thumb,
                        value = transition.value,
                        offset = transition.offset,
                        "thumb moved"
                    );
                }
                outcome
            }
            _ => SampleOutcome::Ignored,
        }
    }

    /// Finish the gesture. The last committed value stands.
    pub fn end(&mut self, reason: GestureEnd) {
        let previous = std::mem::take(&mut self.state);
        if let DragState::Dragging(session) = &previous {
            tracing::debug!(
                ?reason,
                thumb = ?session.active,
                value = ?session.last_value,
                "drag finished"
            );
        }
    }

    fn activate(
        &mut self,
        start: TouchStart,
        subscription: Subscription,
        geometry: &TrackGeometry,
        inputs: &DragInputs<'_>,
    ) -> Thumb {
        let thumb = geometry.nearest_thumb(
            start.local_x,
            inputs.selection.low,
            inputs.selection.high,
            inputs.range,
        );
        tracing::debug!(?thumb, local_x = start.local_x, "drag started");
        self.label_thumb = thumb;
        self.state = DragState::Dragging(GestureSession {
            active: thumb,
            container_origin_x: start.container_origin_x(),
            last_value: None,
            last_position: geometry.offset_for(inputs.selection.get(thumb), inputs.range),
            subscription,
        });
        thumb
    }
}
