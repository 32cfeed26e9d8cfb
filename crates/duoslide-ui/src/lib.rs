//! duoslide UI - dual-thumb range slider
//!
//! A headless range slider: two thumbs on a horizontal track, each bound to a value in
//! `[min, max]` snapped to a step, plus a floating label over the thumb being dragged.
//!
//! - [`mapper`]: pure pixel/value conversions and nearest-thumb selection
//! - [`layout`]: derived thumb and label offsets, recomputed on measurement or value changes
//! - [`drag`]: the single-gesture drag state machine
//! - [`RangeSlider`]: the controller that ties them to a value source and leaf views
//!
//! ## Quick Start
//!
//! ```rust
//! use duoslide_ui::{RangeSlider, SliderFrame, Thumb};
//! use duoslide_input::TouchStart;
//!
//! let mut slider = RangeSlider::builder(0.0, 100.0)
//!     .values(20.0, 80.0)
//!     .on_value_changed(|low, high| println!("selected {low}..{high}"))
//!     .build()
//!     .unwrap();
//!
//! // Layout reports from the host views.
//! slider.on_container_layout(220.0).unwrap();
//! slider.on_thumb_layout(20.0).unwrap();
//!
//! // Drag the low thumb; the track's left edge is at page x 100.
//! slider.on_touch_start(TouchStart::new(50.0, 150.0));
//! slider.on_pointer_move(180.0);
//!
//! let mut frame = SliderFrame::default();
//! slider.render(&mut frame);
//! assert_eq!(frame.label_text, "Value: 35");
//! assert_eq!(frame.thumb_offset(Thumb::Low), 70.0);
//! ```

pub mod builder;
pub mod dirty;
pub mod drag;
pub mod error;
pub mod event;
pub mod layout;
pub mod mapper;
pub mod measure;
pub mod metrics;
pub mod range;
pub mod selection;
pub mod slider;
pub mod value_source;
pub mod view;

pub use builder::{SliderBuilder, SliderConfig};
pub use dirty::DirtyFlags;
pub use drag::{DragMachine, DragPhase, SampleOutcome, StartOutcome, ValueTransition};
pub use error::{SliderError, SliderResult};
pub use layout::LayoutTracker;
pub use measure::{MeasurementKind, Measurements, TrackGeometry};
pub use metrics::SliderMetrics;
pub use range::ValueRange;
pub use selection::{Selection, Thumb};
pub use slider::{RangeSlider, ValueChanged};
pub use value_source::{OwnedValues, SharedValues, ValueSource};
pub use view::{SliderFrame, SliderView};
