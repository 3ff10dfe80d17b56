//! Observable value cells and derived variant toggles.
//!
//! Mutation is synchronous and single-threaded: every write happens on a UI
//! event callback or the once-per-frame render callback, never concurrently,
//! so interior mutability needs no locking.

use hashbrown::HashMap;
use std::cell::RefCell;
use std::fmt::Debug;

/// Opaque handle returned by [`Cell::subscribe`]; pass it back to
/// [`Cell::unsubscribe`] to stop delivery.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct SubId(u64);

type Observer<T> = Box<dyn Fn(T)>;

/// A single observable value.
///
/// `set` notifies subscribers only when the stored value actually changes,
/// which keeps the idempotent derived-toggle writes quiet for observers.
pub struct Cell<T: Copy + PartialEq> {
    value: RefCell<T>,
    next_sub: std::cell::Cell<u64>,
    observers: RefCell<HashMap<u64, Observer<T>>>,
}

impl<T: Copy + PartialEq> Cell<T> {
    pub fn new(value: T) -> Self {
        Self {
            value: RefCell::new(value),
            next_sub: std::cell::Cell::new(0),
            observers: RefCell::new(HashMap::new()),
        }
    }

    #[inline]
    pub fn get(&self) -> T {
        *self.value.borrow()
    }

    /// Store `next` and notify subscribers if the value changed.
    ///
    /// Observers run synchronously during the call; subscribing or
    /// unsubscribing on this cell from inside an observer is not supported.
    pub fn set(&self, next: T) {
        let changed = {
            let mut value = self.value.borrow_mut();
            if *value == next {
                false
            } else {
                *value = next;
                true
            }
        };
        if changed {
            for observer in self.observers.borrow().values() {
                observer(next);
            }
        }
    }

    /// Register an observer called with the new value on every change.
    pub fn subscribe(&self, observer: impl Fn(T) + 'static) -> SubId {
        let id = self.next_sub.get();
        self.next_sub.set(id.wrapping_add(1));
        self.observers.borrow_mut().insert(id, Box::new(observer));
        SubId(id)
    }

    /// Remove an observer; returns false if the handle was already gone.
    pub fn unsubscribe(&self, id: SubId) -> bool {
        self.observers.borrow_mut().remove(&id.0).is_some()
    }

    pub fn observer_count(&self) -> usize {
        self.observers.borrow().len()
    }
}

impl<T: Copy + PartialEq + Default> Default for Cell<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Copy + PartialEq + Debug> Debug for Cell<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cell")
            .field("value", &self.get())
            .field("observers", &self.observer_count())
            .finish()
    }
}

/// Derived boolean projection over a shared enum cell.
///
/// Reading is true iff the shared cell holds this toggle's variant. Writing
/// true selects the variant; writing false resets to the neutral variant only
/// if this variant is the active one, so one toggle never clobbers another.
pub struct Toggle<'a, T: Copy + PartialEq + Debug> {
    cell: &'a Cell<T>,
    variant: T,
    neutral: T,
}

impl<'a, T: Copy + PartialEq + Debug> Toggle<'a, T> {
    pub fn new(cell: &'a Cell<T>, variant: T, neutral: T) -> Self {
        Self {
            cell,
            variant,
            neutral,
        }
    }

    #[inline]
    pub fn get(&self) -> bool {
        self.cell.get() == self.variant
    }

    pub fn set(&self, active: bool) {
        if active {
            log::trace!("toggle select {:?}", self.variant);
            self.cell.set(self.variant);
        } else if self.cell.get() == self.variant {
            log::trace!("toggle clear {:?} -> {:?}", self.variant, self.neutral);
            self.cell.set(self.neutral);
        }
    }
}
