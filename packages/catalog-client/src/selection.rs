//! Filter Selection State
//!
//! An ordered, duplicate-free set of selected ids. Every change publishes a
//! fresh `Arc<[T]>` snapshot; the previous snapshot is never touched, so
//! observers can compare by pointer. Toggles that change nothing keep the
//! current snapshot and wake nobody.
//!
//! The same primitive backs the catalog filter chips and topic tagging.

use std::sync::Arc;

use tokio::sync::watch;

pub struct SelectionState<T> {
    tx: watch::Sender<Arc<[T]>>,
}

impl<T: Clone + PartialEq> Default for SelectionState<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + PartialEq> SelectionState<T> {
    pub fn new() -> Self {
        Self::with_selected(Vec::new())
    }

    /// Start from an initial selection; duplicates are dropped, first wins.
    pub fn with_selected(initial: impl IntoIterator<Item = T>) -> Self {
        let mut unique: Vec<T> = Vec::new();
        for id in initial {
            if !unique.contains(&id) {
                unique.push(id);
            }
        }
        let (tx, _) = watch::channel(Arc::from(unique));
        Self { tx }
    }

    /// Add (`selected = true`) or remove (`selected = false`) `id`.
    ///
    /// Returns the snapshot after the toggle. Adding a present id or
    /// removing an absent one returns the current snapshot unchanged.
    pub fn toggle(&self, id: T, selected: bool) -> Arc<[T]> {
        self.tx.send_if_modified(|current| {
            let present = current.contains(&id);
            let next: Vec<T> = match (selected, present) {
                (true, false) => current.iter().cloned().chain(Some(id.clone())).collect(),
                (false, true) => current.iter().filter(|x| **x != id).cloned().collect(),
                _ => return false,
            };
            *current = Arc::from(next);
            true
        });
        self.snapshot()
    }

    /// Current selection, in the order ids were added.
    pub fn snapshot(&self) -> Arc<[T]> {
        self.tx.borrow().clone()
    }

    pub fn is_selected(&self, id: &T) -> bool {
        self.tx.borrow().contains(id)
    }

    /// Observe selection changes.
    pub fn subscribe(&self) -> watch::Receiver<Arc<[T]>> {
        self.tx.subscribe()
    }
}
