//! Duoslide - a headless dual-thumb range slider
//!
//! A range slider selects a `[low, high]` sub-interval of a numeric range by dragging one of
//! two thumbs along a horizontal track. Duoslide owns the value mapping, the drag gesture and
//! the layout math; the host owns the pixels. It reports measurements and gestures in, and
//! receives value changes and leaf updates out:
//!
//! - **Mapping**: pixel <-> value conversion with step quantization
//! - **Dragging**: nearest-thumb selection, single-listener gesture sessions, no-op suppression
//! - **Rendering**: dirty tracking so only changed leaves are pushed to the view
//! - **Input**: gesture queue with move coalescing, optional `winit` adapter
//!
//! # Quick Start
//!
//! ```rust
//! use duoslide::prelude::*;
//!
//! let mut slider = RangeSlider::builder(0.0, 100.0)
//!     .values(20.0, 80.0)
//!     .on_value_changed(|low, high| println!("{low}..{high}"))
//!     .build()
//!     .unwrap();
//!
//! slider.on_container_layout(220.0).unwrap();
//! slider.on_thumb_layout(20.0).unwrap();
//!
//! // Track at page x = 100; grab the low thumb and pull it to 35.
//! slider.on_touch_start(TouchStart::new(50.0, 150.0));
//! slider.on_pointer_move(180.0);
//! slider.on_touch_end(GestureEnd::Release);
//!
//! let mut frame = SliderFrame::default();
//! slider.render(&mut frame);
//! assert_eq!(frame.label_text, "Value: 35");
//! ```
//!
//! # Features
//!
//! - `profiling` (default) - puffin scopes around render and dispatch
//! - `winit` - [`input::winit::WinitGestureAdapter`] for window-event translation

pub use duoslide_core as core;
pub use duoslide_core::{Config, LogConfig, ProfilingMode, init};
pub use duoslide_input as input;
pub use duoslide_ui as ui;

pub use duoslide_ui::{
    RangeSlider, Selection, SliderBuilder, SliderConfig, SliderError, SliderFrame, SliderResult,
    SliderView, Thumb, ValueRange,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use duoslide_core::math::Vec2;
    pub use duoslide_core::{Config, LogConfig};

    pub use duoslide_input::{
        GestureBatch, GestureEnd, GestureEvent, GestureQueue, HandleStatus, TouchStart,
    };

    #[cfg(feature = "winit")]
    pub use duoslide_input::winit::{TrackBounds, WinitGestureAdapter};

    pub use duoslide_ui::{
        DirtyFlags, DragPhase, RangeSlider, SampleOutcome, Selection, SliderBuilder, SliderError,
        SliderFrame, SliderResult, SliderView, StartOutcome, Thumb, ValueRange,
    };
}
