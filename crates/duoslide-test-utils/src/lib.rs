//! Test utilities for duoslide.
//!
//! - [`RecordingView`] - a [`SliderView`](duoslide_ui::SliderView) that logs every leaf update
//! - [`ValueRecorder`] - a value-changed callback that keeps every `(low, high)` it receives
//! - [`DragScript`] - builds gesture batches in track-local coordinates
//!
//! # Example
//!
//! ```rust
//! use duoslide_test_utils::{DragScript, RecordingView, ValueRecorder};
//! use duoslide_ui::RangeSlider;
//!
//! let recorder = ValueRecorder::new();
//! let mut slider = RangeSlider::builder(0.0, 100.0)
//!     .values(20.0, 80.0)
//!     .on_value_changed(recorder.callback())
//!     .build()
//!     .unwrap();
//! slider.on_container_layout(220.0).unwrap();
//! slider.on_thumb_layout(20.0).unwrap();
//!
//! let mut batch = DragScript::new(100.0).touch(50.0).drag_to(80.0).release().batch();
//! slider.handle_events(&mut batch);
//!
//! assert_eq!(recorder.calls(), vec![(35.0, 80.0)]);
//!
//! let mut view = RecordingView::new();
//! slider.render(&mut view);
//! assert_eq!(view.frame().label_text, "Value: 35");
//! ```

pub mod recorder;
pub mod script;
pub mod view;

pub use recorder::ValueRecorder;
pub use script::DragScript;
pub use view::{RecordingView, ViewCall};
