//! Identity-comparable callable handles.
//!
//! Listeners and change subscribers are stored by reference so the same
//! handle can be found again for de-duplication and removal. Two handles are
//! equal when they share one allocation: clones of a handle are equal, two
//! handles built from separate closures are not, whatever the closures do.

use super::state::StateId;
use std::fmt;
use std::rc::Rc;

/// Reference-counted callable compared by pointer identity.
///
/// Use the [`Listener`] and [`ChangeSubscriber`] aliases rather than this
/// type directly.
pub struct Callback<F: ?Sized> {
    inner: Rc<F>,
}

/// Zero-argument callable fired when a state is entered or exited.
///
/// # Example
///
/// ```rust
/// use statehost::core::Listener;
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// let hits = Rc::new(Cell::new(0));
/// let counter = Rc::clone(&hits);
/// let listener = Listener::new(move || counter.set(counter.get() + 1));
///
/// let same = listener.clone();
/// same.call();
/// listener.call();
///
/// assert_eq!(hits.get(), 2);
/// assert_eq!(listener, same);
/// assert_ne!(listener, Listener::new(|| {}));
/// ```
pub type Listener = Callback<dyn Fn()>;

/// Callable fired on every transition with `(old, new)`.
pub type ChangeSubscriber = Callback<dyn Fn(&StateId, &StateId)>;

impl Callback<dyn Fn()> {
    /// Wrap a closure in a new listener handle.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn() + 'static,
    {
        Self { inner: Rc::new(f) }
    }

    /// Invoke the listener.
    pub fn call(&self) {
        (self.inner)()
    }
}

impl Callback<dyn Fn(&StateId, &StateId)> {
    /// Wrap a closure in a new subscriber handle.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&StateId, &StateId) + 'static,
    {
        Self { inner: Rc::new(f) }
    }

    /// Invoke the subscriber with the old and new state.
    pub fn call(&self, old: &StateId, new: &StateId) {
        (self.inner)(old, new)
    }
}

impl<F: ?Sized> Callback<F> {
    // Compare data pointers only; vtable addresses are not unique.
    fn addr(&self) -> *const () {
        Rc::as_ptr(&self.inner) as *const ()
    }
}

impl<F: ?Sized> Clone for Callback<F> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<F: ?Sized> PartialEq for Callback<F> {
    fn eq(&self, other: &Self) -> bool {
        self.addr() == other.addr()
    }
}

impl<F: ?Sized> Eq for Callback<F> {}

impl<F: ?Sized> fmt::Debug for Callback<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Callback").field(&self.addr()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn clones_share_identity() {
        let listener = Listener::new(|| {});
        let cloned = listener.clone();

        assert_eq!(listener, cloned);
    }

    #[test]
    fn identical_closures_are_distinct() {
        let a = Listener::new(|| {});
        let b = Listener::new(|| {});

        assert_ne!(a, b);
    }

    #[test]
    fn listener_call_runs_closure() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        let listener = Listener::new(move || sink.borrow_mut().push("called"));

        listener.call();

        assert_eq!(*log.borrow(), vec!["called"]);
    }

    #[test]
    fn subscriber_receives_both_states() {
        let seen = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&seen);
        let subscriber = ChangeSubscriber::new(move |old, new| {
            *sink.borrow_mut() = Some((old.clone(), new.clone()));
        });

        subscriber.call(&StateId::NONE, &StateId::from("Run"));

        assert_eq!(
            *seen.borrow(),
            Some((StateId::NONE, StateId::from("Run")))
        );
    }
}
