//! Builder for constructing registries.

use crate::config::RegistryConfig;
use crate::core::{ChangeSubscriber, Listener, State, StateId};
use crate::registry::{RegistryError, StateRegistry};

/// Builder for constructing a [`StateRegistry`] with a fluent API.
///
/// Everything is applied through the registry's own operations in
/// declaration order, so `build` reports the same errors they would.
///
/// # Example
///
/// ```rust
/// use statehost::builder::RegistryBuilder;
/// use statehost::core::Listener;
///
/// let registry = RegistryBuilder::new()
///     .state("Idle", || {})
///     .state("Run", || {})
///     .on_enter("Run", Listener::new(|| println!("go")))
///     .initial("Idle")
///     .build()
///     .unwrap();
///
/// assert!(registry.is_in_state("Idle"));
/// ```
pub struct RegistryBuilder {
    config: RegistryConfig,
    states: Vec<(StateId, Listener)>,
    listeners: Vec<(Edge, StateId, Listener)>,
    subscribers: Vec<ChangeSubscriber>,
    initial: Option<StateId>,
}

#[derive(Clone, Copy)]
enum Edge {
    Enter,
    Exit,
}

impl RegistryBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            config: RegistryConfig::default(),
            states: Vec::new(),
            listeners: Vec::new(),
            subscribers: Vec::new(),
            initial: None,
        }
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: RegistryConfig) -> Self {
        self.config = config;
        self
    }

    /// Set how many transitions the history keeps.
    pub fn history_limit(mut self, limit: usize) -> Self {
        self.config.history_limit = limit;
        self
    }

    /// Declare a state with its update action.
    pub fn state<S, F>(mut self, state: &S, update: F) -> Self
    where
        S: State + ?Sized,
        F: Fn() + 'static,
    {
        self.states.push((state.id(), Listener::new(update)));
        self
    }

    /// Attach an enter listener.
    pub fn on_enter<S: State + ?Sized>(mut self, state: &S, listener: Listener) -> Self {
        self.listeners.push((Edge::Enter, state.id(), listener));
        self
    }

    /// Attach an exit listener.
    pub fn on_exit<S: State + ?Sized>(mut self, state: &S, listener: Listener) -> Self {
        self.listeners.push((Edge::Exit, state.id(), listener));
        self
    }

    /// Subscribe to every transition.
    pub fn on_change(mut self, subscriber: ChangeSubscriber) -> Self {
        self.subscribers.push(subscriber);
        self
    }

    /// Transition into `state` once everything else is registered.
    pub fn initial<S: State + ?Sized>(mut self, state: &S) -> Self {
        self.initial = Some(state.id());
        self
    }

    /// Build the registry.
    /// Returns the first error raised while applying the declarations.
    pub fn build(self) -> Result<StateRegistry, RegistryError> {
        let registry = StateRegistry::with_config(self.config);

        for (id, update) in self.states {
            registry.declare_action(id, update)?;
        }
        for (edge, id, listener) in &self.listeners {
            match edge {
                Edge::Enter => registry.add_enter_listener(id, listener)?,
                Edge::Exit => registry.add_exit_listener(id, listener)?,
            }
        }
        for subscriber in &self.subscribers {
            registry.subscribe(subscriber);
        }
        if let Some(initial) = self.initial {
            registry.transition(&initial)?;
        }

        Ok(registry)
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn empty_builder_builds_empty_registry() {
        let registry = RegistryBuilder::new().build().unwrap();

        assert_eq!(registry.state_count(), 0);
        assert_eq!(registry.get_state(), StateId::NONE);
    }

    #[test]
    fn builder_rejects_duplicate_state() {
        let result = RegistryBuilder::new()
            .state("Idle", || {})
            .state("Idle", || {})
            .build();

        assert!(matches!(result, Err(RegistryError::DuplicateState { .. })));
    }

    #[test]
    fn builder_rejects_listener_on_unknown_state() {
        let result = RegistryBuilder::new()
            .state("Idle", || {})
            .on_exit("Run", Listener::new(|| {}))
            .build();

        assert!(matches!(result, Err(RegistryError::UnknownState { .. })));
    }

    #[test]
    fn builder_rejects_unknown_initial_state() {
        let result = RegistryBuilder::new().state("Idle", || {}).initial("Run").build();

        assert!(matches!(result, Err(RegistryError::UnknownState { .. })));
    }

    #[test]
    fn initial_transition_notifies_registered_callbacks() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let enter_log = Rc::clone(&log);
        let change_log = Rc::clone(&log);

        let registry = RegistryBuilder::new()
            .history_limit(4)
            .state("Idle", || {})
            .on_enter("Idle", Listener::new(move || enter_log.borrow_mut().push("enter")))
            .on_change(ChangeSubscriber::new(move |_, _| {
                change_log.borrow_mut().push("change")
            }))
            .initial("Idle")
            .build()
            .unwrap();

        assert_eq!(*log.borrow(), vec!["change", "enter"]);
        assert!(registry.is_in_state("Idle"));
        assert_eq!(registry.config().history_limit, 4);
        assert_eq!(registry.history().len(), 1);
    }
}
