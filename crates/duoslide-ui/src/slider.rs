//! The range slider widget controller.

use std::fmt;

use duoslide_core::math::Vec2;
use duoslide_core::profiling::profile_function;
use duoslide_input::{GestureEnd, TouchStart};

use crate::builder::SliderBuilder;
use crate::dirty::DirtyFlags;
use crate::drag::{DragInputs, DragMachine, DragPhase, SampleOutcome, StartOutcome, ValueTransition};
use crate::error::SliderResult;
use crate::layout::LayoutTracker;
use crate::mapper;
use crate::measure::{MeasurementKind, Measurements};
use crate::metrics::SliderMetrics;
use crate::range::ValueRange;
use crate::selection::{Selection, Thumb};
use crate::value_source::{OwnedValues, ValueSource};
use crate::view::{SliderFrame, SliderView};

/// Host callback for committed value changes, called with `(low, high)`.
pub type ValueChanged = Box<dyn FnMut(f32, f32)>;

/// Dual-thumb range slider.
///
/// Feed it layout reports (`on_*_layout`) and gestures (`on_touch_start`, `on_pointer_move`,
/// `on_touch_end`, or [`RangeSlider::handle_events`]), then call [`RangeSlider::render`] to
/// push whatever changed to the leaf views.
pub struct RangeSlider<S = ()> {
    range: ValueRange,
    values: Box<dyn ValueSource>,
    measurements: Measurements,
    layout: LayoutTracker,
    drag: DragMachine,
    on_value_changed: Option<ValueChanged>,
    style: S,
    label_value: i64,
    dirty: DirtyFlags,
    metrics: SliderMetrics,
}

impl RangeSlider<()> {
    /// Slider over `[min, max]` with step 1 and the full range selected.
    pub fn new(min: f32, max: f32) -> SliderResult<Self> {
        let range = ValueRange::with_default_step(min, max)?;
        let values = Box::new(OwnedValues::new(Selection::full(&range)));
        Ok(Self::from_parts(range, values, None, ()))
    }

    pub fn builder(min: f32, max: f32) -> SliderBuilder<()> {
        SliderBuilder::new(min, max)
    }
}

impl<S> RangeSlider<S> {
    pub(crate) fn from_parts(
        range: ValueRange,
        values: Box<dyn ValueSource>,
        on_value_changed: Option<ValueChanged>,
        style: S,
    ) -> Self {
        let label_value = mapper::round_half_up(values.selection().low) as i64;
        Self {
            range,
            values,
            measurements: Measurements::default(),
            layout: LayoutTracker::new(),
            drag: DragMachine::new(),
            on_value_changed,
            style,
            label_value,
            dirty: DirtyFlags::all(),
            metrics: SliderMetrics::new(),
        }
    }

    // ---------------------------------------------------------------------
    // Layout reports
    // ---------------------------------------------------------------------

    /// Container (root view) width was measured.
    pub fn on_container_layout(&mut self, width: f32) -> SliderResult<()> {
        self.report(MeasurementKind::ContainerWidth, width)
    }

    /// Thumb width was measured. Both thumbs share it.
    pub fn on_thumb_layout(&mut self, width: f32) -> SliderResult<()> {
        self.report(MeasurementKind::ThumbWidth, width)
    }

    /// Label size was measured.
    pub fn on_label_layout(&mut self, width: f32, height: f32) -> SliderResult<()> {
        let width = self.measurements.report(MeasurementKind::LabelWidth, width);
        let height = self.measurements.report(MeasurementKind::LabelHeight, height);
        self.dirty |= self.layout.relayout_label(&self.measurements);
        width?;
        height?;
        Ok(())
    }

    fn report(&mut self, kind: MeasurementKind, value: f32) -> SliderResult<()> {
        let result = self.measurements.report(kind, value);
        if let Err(err) = &result {
            tracing::warn!(%err, "layout report rejected");
        }
        self.relayout();
        result.map(|_| ())
    }

    fn relayout(&mut self) {
        let selection = self.values.selection();
        self.dirty |= self.layout.refresh(selection, &self.range, &self.measurements)
            | self.layout.relayout_rails(&self.measurements)
            | self.layout.relayout_label(&self.measurements);
    }

    // ---------------------------------------------------------------------
    // Gestures
    // ---------------------------------------------------------------------

    /// A touch went down on the slider.
    pub fn on_touch_start(&mut self, start: TouchStart) -> StartOutcome {
        let inputs = DragInputs {
            range: &self.range,
            selection: self.values.selection(),
            measurements: &self.measurements,
        };
        let outcome = self.drag.touch_start(start, &inputs);
        match outcome {
            StartOutcome::Declined => self.metrics.gestures_declined += 1,
            StartOutcome::Deferred => self.metrics.gestures_deferred += 1,
            StartOutcome::Active(_) => {
                self.metrics.gestures_started += 1;
                self.update_label_value();
            }
        }
        outcome
    }

    /// The pointer moved to absolute `page_x`.
    pub fn on_pointer_move(&mut self, page_x: f32) -> SampleOutcome {
        self.metrics.samples_received += 1;
        let was_pending = self.drag.phase() == DragPhase::Pending;
        let inputs = DragInputs {
            range: &self.range,
            selection: self.values.selection(),
            measurements: &self.measurements,
        };
        let outcome = self.drag.pointer_sample(page_x, &inputs);

        if was_pending && self.drag.is_dragging() {
            self.metrics.gestures_started += 1;
            self.update_label_value();
        }
        match outcome {
            SampleOutcome::Ignored => self.metrics.samples_ignored += 1,
            SampleOutcome::Unchanged => self.metrics.samples_suppressed += 1,
            SampleOutcome::Changed(transition) => self.apply(transition),
        }
        outcome
    }

    /// The gesture was released, terminated or cancelled.
    pub fn on_touch_end(&mut self, reason: GestureEnd) {
        self.drag.end(reason);
    }

    fn apply(&mut self, transition: ValueTransition) {
        self.dirty |= self.layout.set_thumb(transition.thumb, transition.offset);
        if let Some(callback) = self.on_value_changed.as_mut() {
            callback(transition.selection.low, transition.selection.high);
            self.metrics.notifications += 1;
        }
        self.values.commit(transition.thumb, transition.value);
        self.dirty |= self.layout.track_label(transition.offset, &self.measurements);
        self.update_label_value();
    }

    fn update_label_value(&mut self) {
        let value = self.values.selection().get(self.drag.label_thumb());
        let shown = mapper::round_half_up(value) as i64;
        if shown != self.label_value {
            self.label_value = shown;
            self.dirty |= DirtyFlags::LABEL_TEXT;
        }
    }

    // ---------------------------------------------------------------------
    // External updates
    // ---------------------------------------------------------------------

    /// Replace both values from outside (controlled prop update).
    pub fn set_values(&mut self, low: f32, high: f32) -> SliderResult<()> {
        let selection = Selection::validated(low, high, &self.range)?;
        self.values.replace(selection);
        self.relayout();
        self.update_label_value();
        Ok(())
    }

    /// Replace the value domain. Current values are clamped into it.
    pub fn set_range(&mut self, range: ValueRange) {
        self.range = range;
        let current = self.values.selection();
        let clamped = current.clamped(&range);
        if clamped != current {
            tracing::debug!(?current, ?clamped, "selection clamped into new range");
            self.values.replace(clamped);
        }
        self.relayout();
        self.update_label_value();
    }

    pub fn set_on_value_changed(&mut self, callback: impl FnMut(f32, f32) + 'static) {
        self.on_value_changed = Some(Box::new(callback));
    }

    pub fn clear_on_value_changed(&mut self) {
        self.on_value_changed = None;
    }

    pub fn set_style(&mut self, style: S) {
        self.style = style;
        self.dirty |= DirtyFlags::ROOT;
    }

    /// Pick up values written into a controlled cell by the host.
    pub fn sync(&mut self) {
        self.dirty |=
            self.layout
                .refresh(self.values.selection(), &self.range, &self.measurements);
        self.update_label_value();
    }

    // ---------------------------------------------------------------------
    // Rendering
    // ---------------------------------------------------------------------

    /// Push changed outputs to `view`. Returns what was pushed.
    pub fn render<V>(&mut self, view: &mut V) -> DirtyFlags
    where
        V: SliderView<S> + ?Sized,
    {
        profile_function!();
        self.sync();
        let dirty = std::mem::replace(&mut self.dirty, DirtyFlags::NONE);
        if dirty.is_empty() {
            self.metrics.renders_skipped += 1;
            return dirty;
        }

        if dirty.contains(DirtyFlags::ROOT) {
            view.root(&self.style);
        }
        if dirty.contains(DirtyFlags::RAILS) {
            view.rails(self.layout.rails_inset());
        }
        for thumb in [Thumb::Low, Thumb::High] {
            if dirty.contains(DirtyFlags::thumb(thumb)) {
                view.thumb(thumb, self.layout.thumb_offset(thumb));
            }
        }
        if dirty.contains(DirtyFlags::LABEL_POSITION) {
            view.label_position(self.layout.label_offset());
        }
        if dirty.contains(DirtyFlags::LABEL_TEXT) {
            view.label_text(&self.label_text());
        }

        self.metrics.renders += 1;
        self.metrics.leaves_rendered += dirty.iter().count();
        dirty
    }

    /// Snapshot of every output, regardless of dirty state.
    pub fn frame(&self) -> SliderFrame {
        SliderFrame {
            rails_inset: self.layout.rails_inset(),
            low_offset: self.layout.thumb_offset(Thumb::Low),
            high_offset: self.layout.thumb_offset(Thumb::High),
            label_offset: self.layout.label_offset(),
            label_text: self.label_text(),
        }
    }

    // ---------------------------------------------------------------------
    // Accessors
    // ---------------------------------------------------------------------

    pub fn selection(&self) -> Selection {
        self.values.selection()
    }

    pub fn range(&self) -> &ValueRange {
        &self.range
    }

    pub fn measurements(&self) -> &Measurements {
        &self.measurements
    }

    pub fn thumb_offset(&self, thumb: Thumb) -> f32 {
        self.layout.thumb_offset(thumb)
    }

    pub fn label_offset(&self) -> Vec2 {
        self.layout.label_offset()
    }

    /// `"Value: N"` for the thumb the label follows.
    pub fn label_text(&self) -> String {
        format!("Value: {}", self.label_value)
    }

    pub fn phase(&self) -> DragPhase {
        self.drag.phase()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    pub fn active_thumb(&self) -> Option<Thumb> {
        self.drag.active_thumb()
    }

    pub fn listener_count(&self) -> usize {
        self.drag.listener_count()
    }

    pub fn is_controlled(&self) -> bool {
        self.values.is_controlled()
    }

    pub fn style(&self) -> &S {
        &self.style
    }

    pub fn dirty(&self) -> DirtyFlags {
        self.dirty
    }

    pub fn metrics(&self) -> &SliderMetrics {
        &self.metrics
    }

    pub fn reset_metrics(&mut self) {
        self.metrics.reset();
    }
}

impl<S: fmt::Debug> fmt::Debug for RangeSlider<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RangeSlider")
            .field("range", &self.range)
            .field("selection", &self.values.selection())
            .field("controlled", &self.values.is_controlled())
            .field("measurements", &self.measurements)
            .field("phase", &self.drag.phase())
            .field("style", &self.style)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn measured_slider() -> RangeSlider {
        let mut slider = RangeSlider::builder(0.0, 100.0)
            .values(20.0, 80.0)
            .build()
            .unwrap();
        slider.on_container_layout(220.0).unwrap();
        slider.on_thumb_layout(20.0).unwrap();
        slider
    }

    #[test]
    fn test_layout_positions_thumbs() {
        let slider = measured_slider();
        assert_eq!(slider.thumb_offset(Thumb::Low), 40.0);
        assert_eq!(slider.thumb_offset(Thumb::High), 160.0);
    }

    #[test]
    fn test_label_text_follows_active_thumb() {
        let mut slider = measured_slider();
        assert_eq!(slider.label_text(), "Value: 20");
        slider.on_touch_start(TouchStart::new(170.0, 170.0));
        assert_eq!(slider.label_text(), "Value: 80");
    }

    #[test]
    fn test_drag_without_callback_still_commits() {
        let mut slider = measured_slider();
        slider.on_touch_start(TouchStart::new(50.0, 150.0));
        slider.on_pointer_move(180.0);
        assert_eq!(slider.selection(), Selection::new(35.0, 80.0));
        assert_eq!(slider.metrics().notifications, 0);
    }

    #[test]
    fn test_set_values_relayouts() {
        let mut slider = measured_slider();
        slider.set_values(50.0, 60.0).unwrap();
        assert_eq!(slider.thumb_offset(Thumb::Low), 100.0);
        assert_eq!(slider.thumb_offset(Thumb::High), 120.0);
        assert!(slider.set_values(70.0, 60.0).is_err());
        assert_eq!(slider.selection(), Selection::new(50.0, 60.0));
    }

    #[test]
    fn test_set_range_clamps_selection() {
        let mut slider = measured_slider();
        slider.set_range(ValueRange::new(30.0, 50.0, 1.0).unwrap());
        assert_eq!(slider.selection(), Selection::new(30.0, 50.0));
        assert_eq!(slider.thumb_offset(Thumb::Low), 0.0);
        assert_eq!(slider.thumb_offset(Thumb::High), 200.0);
    }

    #[test]
    fn test_rejected_report_keeps_slider_inert() {
        let mut slider = RangeSlider::new(0.0, 100.0).unwrap();
        assert!(slider.on_thumb_layout(-1.0).is_err());
        assert!(slider.on_container_layout(10.0).is_ok());
        assert!(slider.on_thumb_layout(20.0).is_err());
        assert_eq!(
            slider.on_touch_start(TouchStart::new(5.0, 5.0)),
            StartOutcome::Deferred
        );
    }
}
