//! Gesture input for duoslide.
//!
//! The host delivers raw touch or mouse input; this crate turns it into a small vocabulary of
//! [`GestureEvent`]s, queues them between frames, and provides the single-listener
//! [`PointerSignal`] that a drag session subscribes to.

pub mod gesture;
pub mod queue;
pub mod signal;
#[cfg(feature = "winit")]
pub mod winit;

pub use gesture::{GestureEnd, GestureEvent, TouchStart};
pub use queue::{GestureBatch, GestureQueue, HandleStatus, QueueStats};
pub use signal::{ListenerId, PointerSignal, Subscription};
