use std::collections::VecDeque;

use crate::gesture::GestureEvent;

/// Gesture queue with move coalescing.
///
/// Pointer moves can arrive faster than the host drains the queue. Consecutive moves collapse
/// into the most recent one; starts and ends are never dropped or reordered.
pub struct GestureQueue {
    pending: VecDeque<GestureEvent>,
    stats: QueueStats,
}

impl GestureQueue {
    pub fn new() -> Self {
        Self {
            pending: VecDeque::with_capacity(16),
            stats: QueueStats::default(),
        }
    }

    /// Push event to queue (called from the platform handler)
    pub fn push(&mut self, event: GestureEvent) {
        self.stats.events_received += 1;

        if event.is_move() {
            if let Some(last) = self.pending.back_mut() {
                if last.is_move() {
                    *last = event;
                    self.stats.moves_coalesced += 1;
                    return;
                }
            }
        }
        self.pending.push_back(event);
    }

    /// Take everything queued so far
    pub fn drain(&mut self) -> GestureBatch {
        let events: Vec<GestureEvent> = self.pending.drain(..).collect();
        self.stats.events_processed += events.len();
        GestureBatch { events }
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn stats(&self) -> &QueueStats {
        &self.stats
    }

    pub fn reset_stats(&mut self) {
        self.stats = QueueStats::default();
    }
}

impl Default for GestureQueue {
    fn default() -> Self {
        Self::new()
    }
}

pub struct GestureBatch {
    events: Vec<GestureEvent>,
}

impl GestureBatch {
    pub fn from_events(events: impl IntoIterator<Item = GestureEvent>) -> Self {
        Self {
            events: events.into_iter().collect(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &GestureEvent> {
        self.events.iter()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Offer every event to `handler`, removing the ones it consumes.
    pub fn dispatch<H>(&mut self, mut handler: H)
    where
        H: FnMut(&GestureEvent) -> HandleStatus,
    {
        self.events.retain(|event| {
            let status = handler(event);
            !status.is_consumed()
        });
    }
}

#[derive(Default, Debug, Clone)]
pub struct QueueStats {
    pub events_received: usize,
    pub events_processed: usize,
    pub moves_coalesced: usize,
}

bitflags::bitflags! {
    /// What a slider did with one gesture event during [`GestureBatch::dispatch`].
    ///
    /// Consumed events are removed from the batch; everything else stays for other responders.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct HandleStatus: u8 {
        /// The event reached a slider.
        const HANDLED = 0b0000_0001;
        /// The slider owns the gesture; nobody else sees the event.
        const CONSUMED = 0b0000_0010;
    }
}

impl HandleStatus {
    pub const fn is_consumed(&self) -> bool {
        self.contains(Self::CONSUMED)
    }

    pub const fn is_handled(&self) -> bool {
        self.contains(Self::HANDLED)
    }

    pub const fn consumed() -> Self {
        Self::from_bits_truncate(Self::HANDLED.bits() | Self::CONSUMED.bits())
    }

    pub const fn handled() -> Self {
        Self::from_bits_truncate(Self::HANDLED.bits())
    }

    pub const fn ignored() -> Self {
        Self::empty()
    }
}
