// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Observable set: a hash set that notifies listeners on mutation.
//!
//! [`SharedSet`] is a cheaply cloneable handle to one underlying set. Base
//! sets are held through these handles so that the owning application, the
//! selection view, and any number of readers can share them without
//! lifetime plumbing; the model is single-threaded, so sharing is `Rc`
//! based and handles are deliberately not `Send`.
//!
//! Listeners are zero-payload "changed" callbacks. A notification fires
//! only when a mutation actually changed the set, and only after the
//! internal borrow has been released, so a listener is free to re-read the
//! set (or mutate other sets) from inside the callback.
//!
//! # Examples
//!
//! ```
//! use venn_model::SharedSet;
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let set: SharedSet<i32> = [1, 2].into_iter().collect();
//! let fired = Rc::new(Cell::new(0));
//!
//! let count = Rc::clone(&fired);
//! let id = set.subscribe(move || count.set(count.get() + 1));
//!
//! set.insert(3);     // changed: fires
//! set.insert(3);     // already present: silent
//! assert_eq!(fired.get(), 1);
//!
//! set.unsubscribe(id);
//! ```

use std::cell::RefCell;
use std::collections::HashSet;
use std::hash::Hash;
use std::rc::{Rc, Weak};

/// Handle identifying one registered listener, for later removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

struct Inner<E> {
    items: HashSet<E>,
    listeners: Vec<(ListenerId, Rc<dyn Fn()>)>,
    next_listener: u64,
}

/// A shared, observable hash set.
///
/// Cloning the handle aliases the same set; use [`SharedSet::downgrade`]
/// for back-references that must not keep the set alive (e.g. from inside
/// a listener registered on the set itself).
pub struct SharedSet<E> {
    inner: Rc<RefCell<Inner<E>>>,
}

impl<E> Clone for SharedSet<E> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<E> Default for SharedSet<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> SharedSet<E> {
    /// Create an empty set.
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                items: HashSet::new(),
                listeners: Vec::new(),
                next_listener: 0,
            })),
        }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.inner.borrow().items.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.inner.borrow().items.is_empty()
    }

    /// Register a zero-payload change listener.
    ///
    /// The listener runs synchronously after every effective mutation, in
    /// registration order, with no borrow held on the set.
    pub fn subscribe(&self, listener: impl Fn() + 'static) -> ListenerId {
        let mut inner = self.inner.borrow_mut();
        let id = ListenerId(inner.next_listener);
        inner.next_listener += 1;
        inner.listeners.push((id, Rc::new(listener)));
        id
    }

    /// Remove a previously registered listener.
    ///
    /// Returns false if the id was already removed (or never issued).
    pub fn unsubscribe(&self, id: ListenerId) -> bool {
        let mut inner = self.inner.borrow_mut();
        let before = inner.listeners.len();
        inner.listeners.retain(|(lid, _)| *lid != id);
        inner.listeners.len() != before
    }

    /// Number of currently registered listeners.
    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }

    /// Create a weak handle to the same set.
    pub fn downgrade(&self) -> WeakSet<E> {
        WeakSet {
            inner: Rc::downgrade(&self.inner),
        }
    }

    /// Whether two handles alias the same underlying set.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    fn notify(&self) {
        let listeners: Vec<Rc<dyn Fn()>> = self
            .inner
            .borrow()
            .listeners
            .iter()
            .map(|(_, f)| Rc::clone(f))
            .collect();
        for listener in listeners {
            listener();
        }
    }
}

impl<E: Eq + Hash> SharedSet<E> {
    /// Insert an element. Notifies listeners iff the element was absent.
    pub fn insert(&self, value: E) -> bool {
        let inserted = self.inner.borrow_mut().items.insert(value);
        if inserted {
            self.notify();
        }
        inserted
    }

    /// Remove an element. Notifies listeners iff the element was present.
    pub fn remove(&self, value: &E) -> bool {
        let removed = self.inner.borrow_mut().items.remove(value);
        if removed {
            self.notify();
        }
        removed
    }

    /// Remove every element. Notifies listeners iff the set was non-empty.
    pub fn clear(&self) {
        let changed = {
            let mut inner = self.inner.borrow_mut();
            let was_empty = inner.items.is_empty();
            inner.items.clear();
            !was_empty
        };
        if changed {
            self.notify();
        }
    }

    /// Batch insert. Listeners are notified once at the end, and only if
    /// at least one element was new. Returns the number inserted.
    pub fn extend(&self, values: impl IntoIterator<Item = E>) -> usize {
        let added = {
            let mut inner = self.inner.borrow_mut();
            let mut added = 0;
            for value in values {
                if inner.items.insert(value) {
                    added += 1;
                }
            }
            added
        };
        if added > 0 {
            self.notify();
        }
        added
    }

    /// Batch remove: keep only elements satisfying `keep`. Listeners are
    /// notified once at the end, and only if something was removed.
    /// Returns the number removed.
    ///
    /// The predicate runs while the set is borrowed, so it must not read
    /// or mutate this set (other sets are fine).
    pub fn retain(&self, mut keep: impl FnMut(&E) -> bool) -> usize {
        let removed = {
            let mut inner = self.inner.borrow_mut();
            let before = inner.items.len();
            inner.items.retain(|e| keep(e));
            before - inner.items.len()
        };
        if removed > 0 {
            self.notify();
        }
        removed
    }

    /// Membership test.
    pub fn contains(&self, value: &E) -> bool {
        self.inner.borrow().items.contains(value)
    }
}

impl<E: Eq + Hash + Clone> SharedSet<E> {
    /// Copy out the current contents.
    pub fn snapshot(&self) -> HashSet<E> {
        self.inner.borrow().items.clone()
    }
}

impl<E: Eq + Hash> FromIterator<E> for SharedSet<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                items: iter.into_iter().collect(),
                listeners: Vec::new(),
                next_listener: 0,
            })),
        }
    }
}

/// Weak handle to a [`SharedSet`].
pub struct WeakSet<E> {
    inner: Weak<RefCell<Inner<E>>>,
}

impl<E> Clone for WeakSet<E> {
    fn clone(&self) -> Self {
        Self {
            inner: Weak::clone(&self.inner),
        }
    }
}

impl<E> WeakSet<E> {
    /// Recover a strong handle, if the set is still alive.
    pub fn upgrade(&self) -> Option<SharedSet<E>> {
        self.inner.upgrade().map(|inner| SharedSet { inner })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn counter(set: &SharedSet<i32>) -> (Rc<Cell<usize>>, ListenerId) {
        let fired = Rc::new(Cell::new(0));
        let count = Rc::clone(&fired);
        let id = set.subscribe(move || count.set(count.get() + 1));
        (fired, id)
    }

    #[test]
    fn test_notifies_only_on_change() {
        let set = SharedSet::new();
        let (fired, _) = counter(&set);

        assert!(set.insert(1));
        assert!(!set.insert(1));
        assert_eq!(fired.get(), 1);

        assert!(set.remove(&1));
        assert!(!set.remove(&1));
        assert_eq!(fired.get(), 2);

        set.clear(); // already empty: silent
        assert_eq!(fired.get(), 2);
    }

    #[test]
    fn test_batch_operations_notify_once() {
        let set = SharedSet::new();
        let (fired, _) = counter(&set);

        assert_eq!(set.extend([1, 2, 3, 3]), 3);
        assert_eq!(fired.get(), 1);

        assert_eq!(set.retain(|&e| e == 1), 2);
        assert_eq!(fired.get(), 2);
        assert_eq!(set.len(), 1);

        assert_eq!(set.retain(|_| true), 0); // nothing removed: silent
        assert_eq!(fired.get(), 2);
    }

    #[test]
    fn test_unsubscribe() {
        let set = SharedSet::new();
        let (fired, id) = counter(&set);

        set.insert(1);
        assert!(set.unsubscribe(id));
        assert!(!set.unsubscribe(id));
        set.insert(2);
        assert_eq!(fired.get(), 1);
        assert_eq!(set.listener_count(), 0);
    }

    #[test]
    fn test_listener_may_reread_the_set() {
        let set: SharedSet<i32> = SharedSet::new();
        let seen = Rc::new(Cell::new(0));

        let weak = set.downgrade();
        let len = Rc::clone(&seen);
        set.subscribe(move || {
            if let Some(set) = weak.upgrade() {
                len.set(set.len());
            }
        });

        set.extend([1, 2, 3]);
        assert_eq!(seen.get(), 3);
    }

    #[test]
    fn test_handles_alias() {
        let a: SharedSet<i32> = SharedSet::new();
        let b = a.clone();
        assert!(a.ptr_eq(&b));

        b.insert(7);
        assert!(a.contains(&7));
        assert_eq!(a.snapshot(), [7].into_iter().collect());
    }

    #[test]
    fn test_weak_does_not_keep_alive() {
        let weak = {
            let set: SharedSet<i32> = SharedSet::new();
            set.downgrade()
        };
        assert!(weak.upgrade().is_none());
    }
}
