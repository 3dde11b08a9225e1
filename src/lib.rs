//! Statehost: a named-state registry for host-driven state machines
//!
//! A host application declares named states, each with an update action,
//! then drives the machine itself: it calls `transition` in response to its
//! own events and `dispatch_tick` once per frame. The registry validates
//! transitions and keeps enter/exit listeners and change subscribers in
//! insertion order. It never schedules, persists or guards anything.
//!
//! # Core Concepts
//!
//! - **State**: a non-empty label (`StateId`); the empty label means "no state"
//! - **Update action**: runs once per tick while its state is active
//! - **Listeners**: fire on entering or exiting a particular state
//! - **Change subscribers**: fire on every transition with `(old, new)`
//! - **History**: bounded record of recent transitions
//!
//! # Example
//!
//! ```rust
//! use statehost::core::{ChangeSubscriber, Listener};
//! use statehost::{state_enum, StateRegistry};
//!
//! state_enum! {
//!     enum Player {
//!         Idle,
//!         Run,
//!     }
//! }
//!
//! let registry = StateRegistry::new();
//! registry.declare(&Player::Idle, || {}).unwrap();
//! registry.declare(&Player::Run, || println!("running")).unwrap();
//!
//! registry
//!     .add_exit_listener(&Player::Idle, &Listener::new(|| println!("leaving idle")))
//!     .unwrap();
//! registry.subscribe(&ChangeSubscriber::new(|old, new| {
//!     println!("{old:?} -> {new:?}");
//! }));
//!
//! registry.transition(&Player::Idle).unwrap();
//! registry.transition(&Player::Run).unwrap();
//! registry.dispatch_tick();
//!
//! assert!(registry.is_in_state(&Player::Run));
//! assert_eq!(registry.history().len(), 2);
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod registry;

// Re-export commonly used types
pub use crate::config::RegistryConfig;
pub use crate::core::{ChangeSubscriber, Listener, State, StateHistory, StateId, StateTransition};
pub use crate::registry::{RegistryError, StateRegistry};
