//! Ordered, de-duplicating handle list.

use crate::core::Callback;

/// Insertion-ordered list that holds each handle at most once.
///
/// Backs the per-state enter/exit lists and the registry-wide subscriber
/// list. Membership is handle identity (see [`Callback`]).
pub(crate) struct ListenerList<F: ?Sized> {
    entries: Vec<Callback<F>>,
}

impl<F: ?Sized> ListenerList<F> {
    pub(crate) fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append `handle` unless present. Returns whether it was added.
    pub(crate) fn add(&mut self, handle: &Callback<F>) -> bool {
        if self.contains(handle) {
            return false;
        }
        self.entries.push(handle.clone());
        true
    }

    /// Remove `handle` if present. Returns whether it was removed.
    pub(crate) fn remove(&mut self, handle: &Callback<F>) -> bool {
        match self.entries.iter().position(|h| h == handle) {
            Some(index) => {
                self.entries.remove(index);
                true
            }
            None => false,
        }
    }

    pub(crate) fn contains(&self, handle: &Callback<F>) -> bool {
        self.entries.iter().any(|h| h == handle)
    }

    /// Copy of the current entries, taken before a notification phase.
    pub(crate) fn snapshot(&self) -> Vec<Callback<F>> {
        self.entries.clone()
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

impl<F: ?Sized> Default for ListenerList<F> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Listener;

    #[test]
    fn add_preserves_insertion_order() {
        let a = Listener::new(|| {});
        let b = Listener::new(|| {});
        let c = Listener::new(|| {});
        let mut list = ListenerList::new();

        list.add(&a);
        list.add(&b);
        list.add(&c);

        assert_eq!(list.snapshot(), vec![a, b, c]);
    }

    #[test]
    fn duplicate_add_is_noop() {
        let a = Listener::new(|| {});
        let mut list = ListenerList::new();

        assert!(list.add(&a));
        assert!(!list.add(&a.clone()));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn remove_only_removes_present_handle() {
        let a = Listener::new(|| {});
        let b = Listener::new(|| {});
        let mut list = ListenerList::new();
        list.add(&a);

        assert!(!list.remove(&b));
        assert!(list.remove(&a));
        assert!(!list.contains(&a));
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn snapshot_is_detached_from_list() {
        let a = Listener::new(|| {});
        let b = Listener::new(|| {});
        let mut list = ListenerList::new();
        list.add(&a);

        let snapshot = list.snapshot();
        list.add(&b);
        list.remove(&a);

        assert_eq!(snapshot, vec![a]);
        assert_eq!(list.snapshot(), vec![b]);
    }
}
