//! Snapshot-based listener registry shared by the toast store and the
//! selection controller.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

type Listener<T> = Rc<dyn Fn(&T)>;
type Entries<T> = RefCell<Vec<(u64, Listener<T>)>>;

pub struct ListenerSet<T> {
    next_id: Cell<u64>,
    entries: Rc<Entries<T>>,
}

impl<T: 'static> ListenerSet<T> {
    pub fn new() -> Self {
        Self {
            next_id: Cell::new(0),
            entries: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn subscribe(&self, listener: impl Fn(&T) + 'static) -> Subscription {
        let id = self.next_id.get();
        self.next_id.set(id.wrapping_add(1));
        self.entries.borrow_mut().push((id, Rc::new(listener)));

        let weak: Weak<Entries<T>> = Rc::downgrade(&self.entries);
        Subscription {
            remove: Rc::new(move || {
                if let Some(entries) = weak.upgrade() {
                    entries.borrow_mut().retain(|(entry_id, _)| *entry_id != id);
                }
            }),
        }
    }

    /// Calls every listener registered when the cycle starts. A listener
    /// removed mid-cycle is skipped; one added mid-cycle waits for the next.
    pub fn emit(&self, value: &T) {
        let snapshot: Vec<(u64, Listener<T>)> = self
            .entries
            .borrow()
            .iter()
            .map(|(id, listener)| (*id, listener.clone()))
            .collect();

        for (id, listener) in snapshot {
            let still_registered = self
                .entries
                .borrow()
                .iter()
                .any(|(entry_id, _)| *entry_id == id);
            if still_registered {
                listener(value);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl<T: 'static> Default for ListenerSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle returned by `subscribe`. Unsubscribing twice is a no-op.
#[derive(Clone)]
pub struct Subscription {
    remove: Rc<dyn Fn()>,
}

impl Subscription {
    pub fn unsubscribe(&self) {
        (self.remove)();
    }
}

impl PartialEq for Subscription {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.remove, &other.remove)
    }
}
