//! Headless Drag Demo - Driving a Range Slider Without a Window
//!
//! Demonstrates the full slider pipeline with no rendering backend:
//! - Building a slider with a coarse step and a value-changed callback
//! - Reporting layout measurements
//! - Queueing raw gesture events (moves are coalesced)
//! - Rendering only the leaves that changed into a retained frame
//!
//! Run with `RUST_LOG=trace` to see every sample the drag machine maps.

use duoslide_core::{Config, LogConfig};
use duoslide_input::{GestureEvent, GestureQueue};
use duoslide_ui::{RangeSlider, SliderFrame};

fn main() {
    duoslide_core::init(&Config {
        logging: LogConfig::verbose(),
        ..Default::default()
    });

    let mut slider = RangeSlider::builder(0.0, 50.0)
        .step(5.0)
        .values(10.0, 40.0)
        .on_value_changed(|low, high| tracing::info!(low, high, "value changed"))
        .build()
        .expect("valid slider configuration");

    let mut frame = SliderFrame::default();
    slider.render(&mut frame);
    tracing::info!(?frame, "before layout");

    // The host reports layout once it is known.
    slider.on_container_layout(320.0).expect("container width");
    slider.on_thumb_layout(24.0).expect("thumb width");
    slider.on_label_layout(72.0, 20.0).expect("label size");

    let pushed = slider.render(&mut frame);
    tracing::info!(?pushed, ?frame, "after layout");

    // Track sits at x = 40 on the page. Grab the low thumb and sweep it right.
    let origin = 40.0;
    let low_center = 12.0 + 10.0 / 50.0 * (320.0 - 24.0);
    let mut queue = GestureQueue::new();
    queue.push(GestureEvent::start(low_center, origin + low_center));
    for step in 0..20 {
        queue.push(GestureEvent::moved(origin + low_center + step as f32 * 6.0));
        // A real host renders between deliveries; flush every few events.
        if step % 5 == 4 {
            duoslide_core::profiling::new_frame();
            let mut batch = queue.drain();
            slider.handle_events(&mut batch);
            let pushed = slider.render(&mut frame);
            tracing::info!(?pushed, label = %frame.label_text, low = frame.low_offset, "frame");
        }
    }
    queue.push(GestureEvent::release());
    let mut batch = queue.drain();
    slider.handle_events(&mut batch);

    tracing::info!(selection = ?slider.selection(), "drag finished");
    tracing::info!("{}", slider.metrics().format());
    tracing::info!(stats = ?queue.stats(), "gesture queue");
}
