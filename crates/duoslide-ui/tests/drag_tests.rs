//! End-to-end drag behavior through the public controller API.
//!
//! Every test uses a 220px container and a 20px thumb, so the thumb centers travel over
//! 200px starting at local x = 10. The track origin on the page is x = 100.

use std::cell::RefCell;
use std::rc::Rc;

use duoslide_input::{GestureEnd, TouchStart};
use duoslide_test_utils::{DragScript, ValueRecorder};
use duoslide_ui::{
    DragPhase, RangeSlider, SampleOutcome, Selection, StartOutcome, Thumb, ValueRange,
};
use proptest::prelude::*;

const ORIGIN: f32 = 100.0;

fn measured(min: f32, max: f32, step: f32, low: f32, high: f32) -> (RangeSlider, ValueRecorder) {
    let recorder = ValueRecorder::new();
    let mut slider = RangeSlider::builder(min, max)
        .step(step)
        .values(low, high)
        .on_value_changed(recorder.callback())
        .build()
        .unwrap();
    slider.on_container_layout(220.0).unwrap();
    slider.on_thumb_layout(20.0).unwrap();
    (slider, recorder)
}

fn percent_slider() -> (RangeSlider, ValueRecorder) {
    measured(0.0, 100.0, 1.0, 20.0, 80.0)
}

/// Local x of the thumb center for `value` on the 0..100 track.
fn local_for(value: f32) -> f32 {
    10.0 + value * 2.0
}

// ── Reference scenarios ──────────────────────────────────────────────

#[test]
fn test_drag_low_thumb_notifies_once() {
    let (mut slider, recorder) = percent_slider();

    let mut batch = DragScript::new(ORIGIN)
        .touch(local_for(20.0))
        .drag_to(local_for(35.0))
        .batch();
    slider.handle_events(&mut batch);
    assert_eq!(slider.active_thumb(), Some(Thumb::Low));
    assert_eq!(recorder.calls(), vec![(35.0, 80.0)]);

    // Identical samples report nothing new.
    for _ in 0..5 {
        assert_eq!(slider.on_pointer_move(ORIGIN + local_for(35.0)), SampleOutcome::Unchanged);
    }
    assert_eq!(recorder.count(), 1);
    assert_eq!(slider.selection(), Selection::new(35.0, 80.0));
}

#[test]
fn test_coarse_step_quantizes() {
    let (mut slider, recorder) = measured(0.0, 10.0, 5.0, 0.0, 10.0);

    // Raw value 7 sits at local 10 + 0.7 * 200 = 150.
    let mut batch = DragScript::new(ORIGIN).touch(10.0).drag_to(150.0).release().batch();
    slider.handle_events(&mut batch);

    assert_eq!(recorder.calls(), vec![(5.0, 10.0)]);
    assert_eq!(slider.selection(), Selection::new(5.0, 10.0));
}

#[test]
fn test_unmeasured_container_is_inert() {
    let recorder = ValueRecorder::new();
    let mut slider = RangeSlider::builder(0.0, 100.0)
        .values(20.0, 80.0)
        .on_value_changed(recorder.callback())
        .build()
        .unwrap();
    slider.on_thumb_layout(20.0).unwrap();

    let outcome = slider.on_touch_start(TouchStart::new(50.0, ORIGIN + 50.0));
    assert_eq!(outcome, StartOutcome::Deferred);
    assert_eq!(slider.phase(), DragPhase::Pending);

    for x in [60.0, 90.0, 120.0] {
        assert_eq!(slider.on_pointer_move(ORIGIN + x), SampleOutcome::Ignored);
    }
    assert_eq!(recorder.count(), 0);
    assert_eq!(slider.thumb_offset(Thumb::Low), 0.0);
    assert_eq!(slider.thumb_offset(Thumb::High), 0.0);

    // Once measured, the held gesture picks its thumb from the original touch point.
    slider.on_container_layout(220.0).unwrap();
    assert!(matches!(
        slider.on_pointer_move(ORIGIN + local_for(35.0)),
        SampleOutcome::Changed(_)
    ));
    assert_eq!(slider.active_thumb(), Some(Thumb::Low));
    assert_eq!(recorder.calls(), vec![(35.0, 80.0)]);
}

#[test]
fn test_touch_nearer_high_drags_high() {
    let (mut slider, recorder) = percent_slider();
    let mut batch = DragScript::new(ORIGIN)
        .touch(local_for(70.0))
        .drag_to(local_for(90.0))
        .release()
        .batch();
    slider.handle_events(&mut batch);
    assert_eq!(recorder.calls(), vec![(20.0, 90.0)]);
}

#[test]
fn test_stacked_thumbs_grab_low() {
    let (mut slider, _recorder) = measured(0.0, 100.0, 1.0, 50.0, 50.0);
    let outcome = slider.on_touch_start(TouchStart::new(local_for(50.0), ORIGIN + local_for(50.0)));
    assert_eq!(outcome, StartOutcome::Active(Thumb::Low));
}

// ── Thumb ordering ───────────────────────────────────────────────────

#[test]
fn test_stack_at_min_can_be_pulled_apart() {
    let (mut slider, recorder) = percent_slider();
    slider.set_values(0.0, 80.0).unwrap();

    // Collapse the high thumb onto the low one at `min`.
    let mut batch = DragScript::new(ORIGIN)
        .touch(local_for(80.0))
        .drag_to(-300.0)
        .release()
        .batch();
    slider.handle_events(&mut batch);
    assert_eq!(slider.selection(), Selection::new(0.0, 0.0));

    // A touch right of the stack grabs the high thumb and drags it back out.
    let outcome = slider.on_touch_start(TouchStart::new(local_for(10.0), ORIGIN + local_for(10.0)));
    assert_eq!(outcome, StartOutcome::Active(Thumb::High));
    slider.on_pointer_move(ORIGIN + local_for(60.0));
    slider.on_touch_end(GestureEnd::Release);

    assert_eq!(slider.selection(), Selection::new(0.0, 60.0));
    assert_eq!(recorder.calls(), vec![(0.0, 0.0), (0.0, 60.0)]);
}

#[test]
fn test_stack_at_max_can_be_pulled_apart() {
    let (mut slider, _recorder) = measured(0.0, 100.0, 1.0, 100.0, 100.0);
    let outcome = slider.on_touch_start(TouchStart::new(local_for(90.0), ORIGIN + local_for(90.0)));
    assert_eq!(outcome, StartOutcome::Active(Thumb::Low));
    slider.on_pointer_move(ORIGIN + local_for(40.0));
    assert_eq!(slider.selection(), Selection::new(40.0, 100.0));
}

#[test]
fn test_low_thumb_stops_at_high() {
    let (mut slider, recorder) = percent_slider();
    let mut batch = DragScript::new(ORIGIN)
        .touch(local_for(20.0))
        .drag_to(local_for(95.0))
        .release()
        .batch();
    slider.handle_events(&mut batch);
    assert_eq!(recorder.calls(), vec![(80.0, 80.0)]);
}

#[test]
fn test_high_thumb_stops_at_low() {
    let (mut slider, recorder) = percent_slider();
    let mut batch = DragScript::new(ORIGIN)
        .touch(local_for(80.0))
        .drag_to(-300.0)
        .release()
        .batch();
    slider.handle_events(&mut batch);
    assert_eq!(recorder.calls(), vec![(20.0, 20.0)]);
}

// ── Subscription lifecycle ───────────────────────────────────────────

#[test]
fn test_listener_count_never_exceeds_one() {
    let (mut slider, _recorder) = percent_slider();
    assert_eq!(slider.listener_count(), 0);

    for x in [30.0, 60.0, 150.0, 200.0] {
        slider.on_touch_start(TouchStart::new(x, ORIGIN + x));
        assert_eq!(slider.listener_count(), 1);
    }

    slider.on_touch_end(GestureEnd::Release);
    assert_eq!(slider.listener_count(), 0);
}

#[test]
fn test_multi_touch_declined_and_detached() {
    let (mut slider, recorder) = percent_slider();
    slider.on_touch_start(TouchStart::new(50.0, ORIGIN + 50.0));
    assert_eq!(slider.listener_count(), 1);

    let outcome = slider.on_touch_start(TouchStart::new(50.0, ORIGIN + 50.0).with_active_touches(2));
    assert_eq!(outcome, StartOutcome::Declined);
    assert_eq!(slider.phase(), DragPhase::Idle);
    assert_eq!(slider.listener_count(), 0);

    assert_eq!(slider.on_pointer_move(ORIGIN + 80.0), SampleOutcome::Ignored);
    assert_eq!(recorder.count(), 0);
    assert_eq!(slider.metrics().gestures_declined, 1);
}

#[test]
fn test_samples_after_release_ignored() {
    let (mut slider, recorder) = percent_slider();
    let mut batch = DragScript::new(ORIGIN)
        .touch(local_for(20.0))
        .drag_to(local_for(30.0))
        .end(GestureEnd::Terminate)
        .drag_to(local_for(60.0))
        .batch();
    slider.handle_events(&mut batch);

    // The stray move after termination is left for other responders.
    assert_eq!(batch.len(), 1);
    assert_eq!(recorder.calls(), vec![(30.0, 80.0)]);
    assert_eq!(slider.on_pointer_move(ORIGIN + local_for(60.0)), SampleOutcome::Ignored);
    assert_eq!(slider.selection(), Selection::new(30.0, 80.0));
}

#[test]
fn test_new_gesture_resets_suppression() {
    let (mut slider, recorder) = percent_slider();
    let mut batch = DragScript::new(ORIGIN)
        .touch(local_for(20.0))
        .drag_to(local_for(35.0))
        .release()
        .touch(local_for(35.0))
        .drag_to(local_for(35.0))
        .release()
        .batch();
    slider.handle_events(&mut batch);

    // The first sample of each gesture always reports, even at the same value.
    assert_eq!(recorder.calls(), vec![(35.0, 80.0), (35.0, 80.0)]);
}

// ── Fresh inputs ─────────────────────────────────────────────────────

#[test]
fn test_range_change_mid_drag_applies() {
    let (mut slider, recorder) = percent_slider();
    slider.on_touch_start(TouchStart::new(local_for(20.0), ORIGIN + local_for(20.0)));

    slider.set_range(ValueRange::new(0.0, 200.0, 1.0).unwrap());
    // Local 80 is 35% of the travel: 70 on the wider range.
    slider.on_pointer_move(ORIGIN + 80.0);
    assert_eq!(recorder.last(), Some((70.0, 80.0)));
}

#[test]
fn test_callback_swap_mid_drag() {
    let (mut slider, first) = percent_slider();
    slider.on_touch_start(TouchStart::new(local_for(20.0), ORIGIN + local_for(20.0)));
    slider.on_pointer_move(ORIGIN + local_for(25.0));

    let second = ValueRecorder::new();
    slider.set_on_value_changed(second.callback());
    slider.on_pointer_move(ORIGIN + local_for(30.0));

    assert_eq!(first.calls(), vec![(25.0, 80.0)]);
    assert_eq!(second.calls(), vec![(30.0, 80.0)]);
}

#[test]
fn test_values_commit_without_callback() {
    let (mut slider, _recorder) = percent_slider();
    slider.clear_on_value_changed();
    let mut batch = DragScript::new(ORIGIN)
        .touch(local_for(80.0))
        .drag_to(local_for(60.0))
        .release()
        .batch();
    slider.handle_events(&mut batch);
    assert_eq!(slider.selection(), Selection::new(20.0, 60.0));
    assert_eq!(slider.metrics().notifications, 0);
}

// ── Controlled values ────────────────────────────────────────────────

#[test]
fn test_controlled_cell_receives_commits() {
    let cell = Rc::new(RefCell::new(Selection::new(20.0, 80.0)));
    let mut slider = RangeSlider::builder(0.0, 100.0)
        .controlled(Rc::clone(&cell))
        .build()
        .unwrap();
    slider.on_container_layout(220.0).unwrap();
    slider.on_thumb_layout(20.0).unwrap();
    assert!(slider.is_controlled());

    let mut batch = DragScript::new(ORIGIN)
        .touch(local_for(20.0))
        .drag_to(local_for(40.0))
        .release()
        .batch();
    slider.handle_events(&mut batch);
    assert_eq!(*cell.borrow(), Selection::new(40.0, 80.0));
}

#[test]
fn test_host_write_visible_to_next_sample() {
    let recorder = ValueRecorder::new();
    let cell = Rc::new(RefCell::new(Selection::new(20.0, 80.0)));
    let mut slider = RangeSlider::builder(0.0, 100.0)
        .controlled(Rc::clone(&cell))
        .on_value_changed(recorder.callback())
        .build()
        .unwrap();
    slider.on_container_layout(220.0).unwrap();
    slider.on_thumb_layout(20.0).unwrap();

    slider.on_touch_start(TouchStart::new(local_for(20.0), ORIGIN + local_for(20.0)));
    slider.on_pointer_move(ORIGIN + local_for(30.0));

    // The host moves the other thumb while the drag is live.
    cell.borrow_mut().high = 60.0;
    slider.on_pointer_move(ORIGIN + local_for(40.0));
    slider.on_pointer_move(ORIGIN + local_for(75.0));

    assert_eq!(recorder.calls(), vec![(30.0, 80.0), (40.0, 60.0), (60.0, 60.0)]);
}

// ── Properties ───────────────────────────────────────────────────────

fn arb_path() -> impl Strategy<Value = Vec<f32>> {
    prop::collection::vec(-100.0..400.0_f32, 1..40)
}

proptest! {
    /// Only the active thumb ever changes, and the pair stays ordered.
    #[test]
    fn inactive_thumb_untouched(touch in 0.0..220.0_f32, path in arb_path()) {
        let (mut slider, recorder) = percent_slider();
        slider.on_touch_start(TouchStart::new(touch, ORIGIN + touch));
        let active = slider.active_thumb().unwrap();
        let pinned = slider.selection().get(active.other());

        for x in path {
            slider.on_pointer_move(ORIGIN + x);
            let selection = slider.selection();
            prop_assert_eq!(selection.get(active.other()), pinned);
            prop_assert!(selection.low <= selection.high);
            prop_assert!(selection.low >= 0.0 && selection.high <= 100.0);
        }
        for (low, high) in recorder.calls() {
            prop_assert!(low <= high);
        }
    }

    /// Notifications never repeat a value back to back within one gesture.
    #[test]
    fn no_duplicate_notifications(touch in 0.0..220.0_f32, path in arb_path()) {
        let (mut slider, recorder) = percent_slider();
        slider.on_touch_start(TouchStart::new(touch, ORIGIN + touch));
        for x in &path {
            slider.on_pointer_move(ORIGIN + x);
            slider.on_pointer_move(ORIGIN + x);
        }
        let calls = recorder.calls();
        for pair in calls.windows(2) {
            prop_assert_ne!(pair[0], pair[1]);
        }
        prop_assert!(calls.len() <= path.len());
    }
}
