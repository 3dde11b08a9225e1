//! The state registry.
//!
//! `StateRegistry` owns the declared states, their update actions, the
//! per-state enter/exit listener lists, the change subscribers and the active
//! state. A host declares states during setup, calls
//! [`transition`](StateRegistry::transition) in response to its own events
//! and [`dispatch_tick`](StateRegistry::dispatch_tick) once per frame.
//!
//! # Ordering
//!
//! A transition runs in a fixed sequence:
//!
//! 1. exit listeners of the old state, in insertion order
//! 2. the active state is set (and recorded in history)
//! 3. change subscribers, in insertion order, with `(old, new)`
//! 4. enter listeners of the new state, in insertion order
//!
//! Exit listeners therefore still observe the old state through
//! [`get_state`](StateRegistry::get_state), enter listeners the new one.
//!
//! # Re-entrancy
//!
//! All operations take `&self`. No internal borrow is held while a listener,
//! subscriber or update action runs, and each notification phase iterates a
//! snapshot of its list, so callables holding an `Rc<StateRegistry>` may
//! query it, change listener lists or transition again.

mod error;
mod listeners;

pub use error::RegistryError;

use crate::config::RegistryConfig;
use crate::core::{ChangeSubscriber, Listener, State, StateHistory, StateId, StateTransition};
use chrono::Utc;
use listeners::ListenerList;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use tracing::{debug, trace};

/// Which listener list of a state an operation targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Edge {
    Enter,
    Exit,
}

struct Inner {
    updates: HashMap<StateId, Listener>,
    enter: HashMap<StateId, ListenerList<dyn Fn()>>,
    exit: HashMap<StateId, ListenerList<dyn Fn()>>,
    subscribers: ListenerList<dyn Fn(&StateId, &StateId)>,
    active: StateId,
    history: StateHistory,
    sequence: u64,
}

impl Inner {
    fn edge(&self, edge: Edge) -> &HashMap<StateId, ListenerList<dyn Fn()>> {
        match edge {
            Edge::Enter => &self.enter,
            Edge::Exit => &self.exit,
        }
    }

    fn edge_mut(&mut self, edge: Edge) -> &mut HashMap<StateId, ListenerList<dyn Fn()>> {
        match edge {
            Edge::Enter => &mut self.enter,
            Edge::Exit => &mut self.exit,
        }
    }
}

/// Named-state registry with per-state update dispatch.
///
/// Single-threaded: the registry is neither `Send` nor `Sync`.
///
/// # Example
///
/// ```rust
/// use statehost::core::Listener;
/// use statehost::StateRegistry;
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// let registry = StateRegistry::new();
/// let ticks = Rc::new(Cell::new(0));
///
/// let counter = Rc::clone(&ticks);
/// registry.declare("Run", move || counter.set(counter.get() + 1)).unwrap();
/// registry.declare("Idle", || {}).unwrap();
///
/// registry.add_enter_listener("Run", &Listener::new(|| println!("running"))).unwrap();
///
/// assert!(registry.is_in_state(""));
/// registry.transition("Run").unwrap();
/// registry.dispatch_tick();
/// registry.dispatch_tick();
///
/// assert!(registry.is_in_state("Run"));
/// assert_eq!(ticks.get(), 2);
/// assert!(registry.transition("Walk").is_err());
/// ```
pub struct StateRegistry {
    config: RegistryConfig,
    inner: RefCell<Inner>,
}

impl StateRegistry {
    /// Create an empty registry with no active state.
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    /// Create an empty registry using `config`.
    pub fn with_config(config: RegistryConfig) -> Self {
        let inner = Inner {
            updates: HashMap::new(),
            enter: HashMap::new(),
            exit: HashMap::new(),
            subscribers: ListenerList::new(),
            active: StateId::NONE,
            history: StateHistory::with_capacity(config.history_limit),
            sequence: 0,
        };
        Self {
            config,
            inner: RefCell::new(inner),
        }
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Declare a state and bind its update action.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::InvalidArgument`] if the label is empty
    /// - [`RegistryError::DuplicateState`] if the label is already declared
    pub fn declare<S, F>(&self, state: &S, update: F) -> Result<(), RegistryError>
    where
        S: State + ?Sized,
        F: Fn() + 'static,
    {
        self.declare_action(state.id(), Listener::new(update))
    }

    pub(crate) fn declare_action(&self, id: StateId, update: Listener) -> Result<(), RegistryError> {
        if id.is_none() {
            return Err(RegistryError::empty_state());
        }
        let mut inner = self.inner.borrow_mut();
        if inner.updates.contains_key(&id) {
            return Err(RegistryError::DuplicateState { state: id });
        }
        debug!(state = %id, "declared state");
        inner.updates.insert(id, update);
        Ok(())
    }

    /// Make `target` the active state, notifying listeners and subscribers.
    ///
    /// The empty label is always a valid target and leaves the registry with
    /// no active state; no enter listeners fire for it. Transitioning to the
    /// current state runs the full sequence (exit, change, enter).
    ///
    /// # Errors
    ///
    /// [`RegistryError::UnknownState`] if `target` is non-empty and not
    /// declared. Nothing is notified or changed in that case.
    pub fn transition<S: State + ?Sized>(&self, target: &S) -> Result<(), RegistryError> {
        let target = target.id();
        if !target.is_none() && !self.is_declared(&target) {
            return Err(RegistryError::UnknownState { state: target });
        }

        let (old, exiting) = {
            let inner = self.inner.borrow();
            let exiting = inner
                .exit
                .get(&inner.active)
                .map(ListenerList::snapshot)
                .unwrap_or_default();
            (inner.active.clone(), exiting)
        };
        debug!(from = %old, to = %target, "transition");

        for listener in exiting {
            listener.call();
        }

        let subscribers = {
            let mut inner = self.inner.borrow_mut();
            inner.active = target.clone();
            inner.sequence += 1;
            let record = StateTransition {
                from: old.clone(),
                to: target.clone(),
                timestamp: Utc::now(),
                sequence: inner.sequence,
            };
            inner.history.record(record);
            inner.subscribers.snapshot()
        };

        for subscriber in subscribers {
            subscriber.call(&old, &target);
        }

        if !target.is_none() {
            let entering = self.snapshot(Edge::Enter, &target);
            for listener in entering {
                listener.call();
            }
        }
        Ok(())
    }

    /// Run the active state's update action once.
    ///
    /// Returns `false` without doing anything when no state is active.
    /// A panic in the update action propagates to the caller.
    pub fn dispatch_tick(&self) -> bool {
        let update = {
            let inner = self.inner.borrow();
            if inner.active.is_none() {
                return false;
            }
            trace!(state = %inner.active, "dispatching update");
            inner.updates.get(&inner.active).cloned()
        };
        match update {
            Some(update) => {
                update.call();
                true
            }
            None => false,
        }
    }

    /// Register `listener` to fire when `state` becomes active.
    ///
    /// Adding a listener that is already registered for `state` is a no-op.
    ///
    /// # Errors
    ///
    /// [`RegistryError::InvalidArgument`] for an empty label,
    /// [`RegistryError::UnknownState`] for an undeclared one.
    pub fn add_enter_listener<S: State + ?Sized>(
        &self,
        state: &S,
        listener: &Listener,
    ) -> Result<(), RegistryError> {
        self.add_listener(Edge::Enter, state, listener)
    }

    /// Register `listener` to fire when `state` stops being active.
    ///
    /// Same de-duplication and errors as [`add_enter_listener`](Self::add_enter_listener).
    pub fn add_exit_listener<S: State + ?Sized>(
        &self,
        state: &S,
        listener: &Listener,
    ) -> Result<(), RegistryError> {
        self.add_listener(Edge::Exit, state, listener)
    }

    /// Unregister an enter listener. Removing an absent listener is a no-op.
    pub fn remove_enter_listener<S: State + ?Sized>(
        &self,
        state: &S,
        listener: &Listener,
    ) -> Result<(), RegistryError> {
        self.remove_listener(Edge::Enter, state, listener)
    }

    /// Unregister an exit listener. Removing an absent listener is a no-op.
    pub fn remove_exit_listener<S: State + ?Sized>(
        &self,
        state: &S,
        listener: &Listener,
    ) -> Result<(), RegistryError> {
        self.remove_listener(Edge::Exit, state, listener)
    }

    /// Subscribe to every transition. Subscribing twice is a no-op.
    pub fn subscribe(&self, subscriber: &ChangeSubscriber) {
        if self.inner.borrow_mut().subscribers.add(subscriber) {
            trace!("added change subscriber");
        }
    }

    /// Unsubscribe from transitions. Returns whether the subscriber was present.
    pub fn unsubscribe(&self, subscriber: &ChangeSubscriber) -> bool {
        self.inner.borrow_mut().subscribers.remove(subscriber)
    }

    /// Get the active state; [`StateId::NONE`] when none is active.
    pub fn get_state(&self) -> StateId {
        self.inner.borrow().active.clone()
    }

    /// Check the active state by exact label equality, empty included.
    pub fn is_in_state<S: State + ?Sized>(&self, state: &S) -> bool {
        self.inner.borrow().active.as_str() == state.name()
    }

    /// Check whether `state` has been declared.
    pub fn is_declared<S: State + ?Sized>(&self, state: &S) -> bool {
        self.inner.borrow().updates.contains_key(state.name())
    }

    /// Number of declared states.
    pub fn state_count(&self) -> usize {
        self.inner.borrow().updates.len()
    }

    pub fn enter_listener_count<S: State + ?Sized>(&self, state: &S) -> usize {
        self.listener_count(Edge::Enter, state)
    }

    pub fn exit_listener_count<S: State + ?Sized>(&self, state: &S) -> usize {
        self.listener_count(Edge::Exit, state)
    }

    /// Copy of the recorded transition history.
    pub fn history(&self) -> StateHistory {
        self.inner.borrow().history.clone()
    }

    fn validate<S: State + ?Sized>(&self, state: &S) -> Result<StateId, RegistryError> {
        if state.name().is_empty() {
            return Err(RegistryError::empty_state());
        }
        if !self.is_declared(state) {
            return Err(RegistryError::UnknownState { state: state.id() });
        }
        Ok(state.id())
    }

    fn add_listener<S: State + ?Sized>(
        &self,
        edge: Edge,
        state: &S,
        listener: &Listener,
    ) -> Result<(), RegistryError> {
        let id = self.validate(state)?;
        let mut inner = self.inner.borrow_mut();
        let list = inner.edge_mut(edge).entry(id).or_default();
        if list.add(listener) {
            trace!(state = %state.name(), ?edge, "added listener");
        }
        Ok(())
    }

    fn remove_listener<S: State + ?Sized>(
        &self,
        edge: Edge,
        state: &S,
        listener: &Listener,
    ) -> Result<(), RegistryError> {
        let id = self.validate(state)?;
        let mut inner = self.inner.borrow_mut();
        if let Some(list) = inner.edge_mut(edge).get_mut(&id) {
            if list.remove(listener) {
                trace!(state = %id, ?edge, "removed listener");
            }
        }
        Ok(())
    }

    fn listener_count<S: State + ?Sized>(&self, edge: Edge, state: &S) -> usize {
        self.inner
            .borrow()
            .edge(edge)
            .get(state.name())
            .map_or(0, ListenerList::len)
    }

    fn snapshot(&self, edge: Edge, state: &StateId) -> Vec<Listener> {
        self.inner
            .borrow()
            .edge(edge)
            .get(state)
            .map(ListenerList::snapshot)
            .unwrap_or_default()
    }
}

impl Default for StateRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for StateRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("StateRegistry")
            .field("active", &inner.active)
            .field("states", &inner.updates.len())
            .field("subscribers", &inner.subscribers.len())
            .field("config", &self.config)
            .finish()
    }
}
