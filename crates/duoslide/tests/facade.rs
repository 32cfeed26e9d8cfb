//! The facade exposes a working slider through the prelude alone.

use duoslide::prelude::*;
use duoslide_test_utils::{RecordingView, ValueRecorder};

#[test]
fn test_prelude_round_trip() {
    let recorder = ValueRecorder::new();
    let mut slider = RangeSlider::builder(0.0, 100.0)
        .values(20.0, 80.0)
        .on_value_changed(recorder.callback())
        .build()
        .unwrap();
    slider.on_container_layout(220.0).unwrap();
    slider.on_thumb_layout(20.0).unwrap();

    let mut queue = GestureQueue::new();
    queue.push(GestureEvent::start(170.0, 270.0));
    queue.push(GestureEvent::moved(260.0));
    queue.push(GestureEvent::moved(250.0));
    queue.push(GestureEvent::release());
    let mut batch = queue.drain();
    slider.handle_events(&mut batch);

    // The two moves coalesce into the last one.
    assert_eq!(recorder.calls(), vec![(20.0, 70.0)]);

    let mut view = RecordingView::new();
    slider.render(&mut view);
    assert_eq!(view.frame().high_offset, 140.0);
    assert_eq!(view.frame().label_text, "Value: 70");
}

#[test]
fn test_invalid_range_rejected() {
    let err = RangeSlider::new(10.0, 10.0).unwrap_err();
    assert!(matches!(err, SliderError::EmptyRange { .. }));
}
