//! Single-listener pointer signal.
//!
//! A drag session subscribes when it starts and holds the returned [`Subscription`] for its
//! lifetime. Subscribing again replaces the previous listener, and dropping a subscription
//! detaches it, so at most one listener exists no matter how many gestures come and go.

use std::cell::Cell;
use std::rc::Rc;

/// Identity of a pointer listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

#[derive(Debug, Default)]
pub struct PointerSignal {
    slot: Rc<Cell<Option<ListenerId>>>,
    next_id: u64,
}

impl PointerSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a new listener, detaching whichever one was attached before.
    pub fn subscribe(&mut self) -> Subscription {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        if let Some(previous) = self.slot.replace(Some(id)) {
            tracing::trace!(?previous, ?id, "pointer listener replaced");
        }
        Subscription {
            id,
            slot: Rc::clone(&self.slot),
        }
    }

    pub fn active_listener(&self) -> Option<ListenerId> {
        self.slot.get()
    }

    pub fn listener_count(&self) -> usize {
        usize::from(self.slot.get().is_some())
    }
}

/// Handle to an attached listener. Detaches on drop.
#[derive(Debug)]
pub struct Subscription {
    id: ListenerId,
    slot: Rc<Cell<Option<ListenerId>>>,
}

impl Subscription {
    pub fn id(&self) -> ListenerId {
        self.id
    }

    /// Whether this subscription is still the signal's listener.
    pub fn is_attached(&self) -> bool {
        self.slot.get() == Some(self.id)
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if self.is_attached() {
            self.slot.set(None);
        }
    }
}
