//! Storage for the selected values.
//!
//! A slider either owns its values ([`OwnedValues`]) or reads and writes a cell the host also
//! holds ([`SharedValues`]). The choice is made once, at construction, and the rest of the
//! slider only sees the [`ValueSource`] trait.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::selection::{Selection, Thumb};

pub trait ValueSource {
    /// Current pair. Always read fresh; never cache across events.
    fn selection(&self) -> Selection;

    /// Store one thumb's new value.
    fn commit(&mut self, thumb: Thumb, value: f32);

    /// Replace both values (external prop update).
    fn replace(&mut self, selection: Selection);

    /// Whether the host owns the storage.
    fn is_controlled(&self) -> bool {
        false
    }
}

/// Values owned by the slider itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OwnedValues {
    selection: Selection,
}

impl OwnedValues {
    pub fn new(selection: Selection) -> Self {
        Self { selection }
    }
}

impl ValueSource for OwnedValues {
    fn selection(&self) -> Selection {
        self.selection
    }

    fn commit(&mut self, thumb: Thumb, value: f32) {
        self.selection = self.selection.with(thumb, value);
    }

    fn replace(&mut self, selection: Selection) {
        self.selection = selection;
    }
}

/// Values living in a host-owned cell.
///
/// The host may write the cell between events; the slider picks the change up on its next
/// layout refresh.
#[derive(Clone)]
pub struct SharedValues {
    cell: Rc<RefCell<Selection>>,
}

impl SharedValues {
    pub fn new(cell: Rc<RefCell<Selection>>) -> Self {
        Self { cell }
    }

    pub fn cell(&self) -> &Rc<RefCell<Selection>> {
        &self.cell
    }
}

impl fmt::Debug for SharedValues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedValues")
            .field("selection", &*self.cell.borrow())
            .finish()
    }
}

impl ValueSource for SharedValues {
    fn selection(&self) -> Selection {
        *self.cell.borrow()
    }

    fn commit(&mut self, thumb: Thumb, value: f32) {
        let mut selection = self.cell.borrow_mut();
        *selection = selection.with(thumb, value);
    }

    fn replace(&mut self, selection: Selection) {
        *self.cell.borrow_mut() = selection;
    }

    fn is_controlled(&self) -> bool {
        true
    }
}
