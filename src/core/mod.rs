//! Core value types shared by the registry.
//!
//! - State naming via `StateId` and the `State` trait
//! - Identity-comparable callable handles for listeners and subscribers
//! - Bounded transition history

mod callback;
mod history;
mod state;

pub use callback::{Callback, ChangeSubscriber, Listener};
pub use history::{StateHistory, StateTransition};
pub use state::{State, StateId};
