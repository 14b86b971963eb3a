// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Selection view: a mutable set constrained to the union of the base sets.
//!
//! The selection is the model's mutable tier. It holds whatever elements
//! the user has highlighted, subject to one invariant: after any base-set
//! mutation has completed, every selected element is still in the union of
//! the (possibly changed) base sets.
//!
//! The invariant is maintained by purging, never by re-adding: the view
//! registers one listener per base set and, on every change notification,
//! drops the selected elements no longer present in any source. Union
//! membership is re-read live from the sources on each purge; the immutable
//! [`SetFamily`](crate::SetFamily) is not consulted and never rebuilt.
//!
//! Purges run per notification. A batch of mutations across several base
//! sets purges once per constituent change; each purge is individually
//! correct against the union at that instant, so intermediate states are
//! merely redundant, never inconsistent.

use crate::error::{ModelError, Result};
use crate::observable::{ListenerId, SharedSet, WeakSet};
use log::debug;
use std::collections::HashSet;
use std::hash::Hash;

/// A union-constrained, observable selection over N live base sets.
///
/// Dropping the view unregisters its listeners from every base set.
pub struct SelectionView<E> {
    selected: SharedSet<E>,
    sources: Vec<SharedSet<E>>,
    subscriptions: Vec<ListenerId>,
}

impl<E> std::fmt::Debug for SelectionView<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectionView")
            .field("sources", &self.sources.len())
            .field("subscriptions", &self.subscriptions)
            .finish()
    }
}

impl<E: Eq + Hash + Clone + 'static> SelectionView<E> {
    /// Bind a new, empty selection to the given base sets.
    ///
    /// Registers exactly one change listener per source. The listeners hold
    /// only weak handles back to the sources, so the view never extends a
    /// source's lifetime through its own subscriptions.
    ///
    /// # Errors
    ///
    /// [`ModelError::EmptyFamily`] for zero sources.
    pub fn new(sources: Vec<SharedSet<E>>) -> Result<Self> {
        if sources.is_empty() {
            return Err(ModelError::EmptyFamily);
        }

        let selected = SharedSet::new();
        let weak_sources: Vec<WeakSet<E>> =
            sources.iter().map(SharedSet::downgrade).collect();

        let mut subscriptions = Vec::with_capacity(sources.len());
        for source in &sources {
            let selected = selected.clone();
            let weak_sources = weak_sources.clone();
            subscriptions.push(source.subscribe(move || {
                purge_stale(&selected, &weak_sources);
            }));
        }

        Ok(Self {
            selected,
            sources,
            subscriptions,
        })
    }

    /// Select an element.
    ///
    /// Returns whether the element was newly selected. A failed add leaves
    /// the selection unmodified.
    ///
    /// # Errors
    ///
    /// [`ModelError::NotInUnion`] if no base set currently contains the
    /// element.
    pub fn add(&self, element: E) -> Result<bool> {
        if !self.sources.iter().any(|s| s.contains(&element)) {
            return Err(ModelError::NotInUnion);
        }
        Ok(self.selected.insert(element))
    }

    /// Deselect an element. Returns whether it was selected.
    pub fn remove(&self, element: &E) -> bool {
        self.selected.remove(element)
    }

    /// Deselect everything.
    pub fn clear(&self) {
        self.selected.clear();
    }

    /// Whether an element is currently selected.
    pub fn contains(&self, element: &E) -> bool {
        self.selected.contains(element)
    }

    /// Number of selected elements.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Copy out the current selection.
    pub fn snapshot(&self) -> HashSet<E> {
        self.selected.snapshot()
    }

    /// Drop every selected element no longer present in any base set.
    ///
    /// Runs automatically on every base-set change; exposed for callers
    /// that swap base-set contents through channels the sets cannot see.
    /// Returns the number of elements dropped.
    pub fn purge(&self) -> usize {
        let removed = self
            .selected
            .retain(|e| self.sources.iter().any(|s| s.contains(e)));
        if removed > 0 {
            debug!("selection purge dropped {} stale elements", removed);
        }
        removed
    }

    /// Observe the selection itself. Same contract as
    /// [`SharedSet::subscribe`]: zero-payload, fires only on change.
    pub fn subscribe(&self, listener: impl Fn() + 'static) -> ListenerId {
        self.selected.subscribe(listener)
    }

    /// Remove a listener registered with [`SelectionView::subscribe`].
    pub fn unsubscribe(&self, id: ListenerId) -> bool {
        self.selected.unsubscribe(id)
    }
}

impl<E> Drop for SelectionView<E> {
    fn drop(&mut self) {
        for (source, id) in self.sources.iter().zip(self.subscriptions.drain(..)) {
            source.unsubscribe(id);
        }
    }
}

/// The listener body: purge against the union as of this instant.
///
/// Free function rather than a method so the subscription closures capture
/// only the handles they need. A source that has been dropped contributes
/// nothing to the union.
fn purge_stale<E: Eq + Hash>(selected: &SharedSet<E>, sources: &[WeakSet<E>]) {
    let removed = selected.retain(|e| {
        sources
            .iter()
            .filter_map(WeakSet::upgrade)
            .any(|s| s.contains(e))
    });
    if removed > 0 {
        debug!("selection purge dropped {} stale elements", removed);
    }
}
