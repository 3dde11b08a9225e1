//! Transition history tracking.
//!
//! The registry records every completed transition into a bounded history so
//! hosts can inspect the recent path of the machine without subscribing to
//! change notifications themselves.

use super::state::StateId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single transition.
///
/// # Example
///
/// ```rust
/// use statehost::core::{StateId, StateTransition};
/// use chrono::Utc;
///
/// let transition = StateTransition {
///     from: StateId::NONE,
///     to: StateId::from("Run"),
///     timestamp: Utc::now(),
///     sequence: 1,
/// };
/// assert!(transition.from.is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StateTransition {
    /// The state that was active before the transition
    pub from: StateId,
    /// The state that became active
    pub to: StateId,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
    /// Position of this transition among all transitions of the registry,
    /// starting at 1. Keeps counting when old records are evicted.
    pub sequence: u64,
}

/// Ordered, bounded history of transitions.
///
/// Once `capacity` records are held, recording a new transition evicts the
/// oldest one. A capacity of zero disables recording.
///
/// # Example
///
/// ```rust
/// use statehost::core::{StateHistory, StateId, StateTransition};
/// use chrono::Utc;
///
/// let mut history = StateHistory::with_capacity(8);
///
/// history.record(StateTransition {
///     from: StateId::NONE,
///     to: StateId::from("Idle"),
///     timestamp: Utc::now(),
///     sequence: 1,
/// });
/// history.record(StateTransition {
///     from: StateId::from("Idle"),
///     to: StateId::from("Run"),
///     timestamp: Utc::now(),
///     sequence: 2,
/// });
///
/// let path = history.get_path();
/// assert_eq!(path.len(), 3); // "" -> Idle -> Run
/// assert_eq!(path[2].as_str(), "Run");
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StateHistory {
    capacity: usize,
    transitions: Vec<StateTransition>,
}

impl StateHistory {
    /// Create an empty history that keeps at most `capacity` records.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            transitions: Vec::new(),
        }
    }

    /// Append a transition, evicting the oldest records beyond capacity.
    pub fn record(&mut self, transition: StateTransition) {
        if self.capacity == 0 {
            return;
        }
        self.transitions.push(transition);
        if self.transitions.len() > self.capacity {
            let excess = self.transitions.len() - self.capacity;
            self.transitions.drain(..excess);
        }
    }

    /// Get the path of states traversed.
    ///
    /// Returns the `from` state of the oldest retained record, then the `to`
    /// state of every record in order.
    pub fn get_path(&self) -> Vec<&StateId> {
        let mut path = Vec::with_capacity(self.transitions.len() + 1);
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Calculate the time between the oldest and newest retained records.
    ///
    /// Returns `None` if nothing has been recorded.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Get the most recent transition.
    pub fn last(&self) -> Option<&StateTransition> {
        self.transitions.last()
    }

    /// Get all retained transitions, oldest first.
    pub fn transitions(&self) -> &[StateTransition] {
        &self.transitions
    }

    /// Maximum number of retained records.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}
