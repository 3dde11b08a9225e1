//! State identifiers and the naming trait.
//!
//! A registry knows states only by label. `StateId` is the owned label; the
//! `State` trait lets strings, identifiers and enums all name a state.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Label of a declared state.
///
/// The empty label is reserved: it is [`StateId::NONE`], the value of a
/// registry that has no active state.
///
/// # Example
///
/// ```rust
/// use statehost::core::StateId;
///
/// let run = StateId::from("Run");
/// assert_eq!(run.as_str(), "Run");
/// assert!(!run.is_none());
/// assert!(StateId::NONE.is_none());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateId(String);

impl StateId {
    /// The reserved "no active state" value.
    pub const NONE: StateId = StateId(String::new());

    /// Create an identifier from any label. An empty label yields `NONE`.
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// Get the label.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check if this is the reserved empty value.
    pub fn is_none(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StateId({:?})", self.0)
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for StateId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for StateId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for StateId {
    fn from(label: &str) -> Self {
        Self(label.to_owned())
    }
}

impl From<String> for StateId {
    fn from(label: String) -> Self {
        Self(label)
    }
}

impl PartialEq<str> for StateId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for StateId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Anything that names a state.
///
/// Registry operations accept `&impl State`, so a plain string, a
/// [`StateId`] or an enum generated by [`state_enum!`](crate::state_enum)
/// can be used interchangeably.
///
/// # Example
///
/// ```rust
/// use statehost::core::State;
///
/// enum Mode {
///     Idle,
///     Run,
/// }
///
/// impl State for Mode {
///     fn name(&self) -> &str {
///         match self {
///             Self::Idle => "Idle",
///             Self::Run => "Run",
///         }
///     }
/// }
///
/// assert_eq!(Mode::Run.name(), "Run");
/// assert_eq!("Idle".name(), Mode::Idle.name());
/// ```
pub trait State {
    /// Get the label this state is registered under.
    fn name(&self) -> &str;

    /// Get an owned identifier for this state.
    fn id(&self) -> StateId {
        StateId::from(self.name())
    }
}

impl State for str {
    fn name(&self) -> &str {
        self
    }
}

impl State for String {
    fn name(&self) -> &str {
        self
    }
}

impl State for StateId {
    fn name(&self) -> &str {
        self.as_str()
    }

    fn id(&self) -> StateId {
        self.clone()
    }
}

impl<T: State + ?Sized> State for &T {
    fn name(&self) -> &str {
        (**self).name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug)]
    enum TestState {
        Idle,
        Run,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Idle => "Idle",
                Self::Run => "Run",
            }
        }
    }

    #[test]
    fn none_is_empty_label() {
        assert!(StateId::NONE.is_none());
        assert_eq!(StateId::NONE.as_str(), "");
        assert_eq!(StateId::default(), StateId::NONE);
        assert_eq!(StateId::new(""), StateId::NONE);
    }

    #[test]
    fn ids_compare_by_label() {
        assert_eq!(StateId::from("Run"), StateId::new(String::from("Run")));
        assert_ne!(StateId::from("Run"), StateId::from("run"));
        assert_eq!(StateId::from("Run"), "Run");
    }

    #[test]
    fn enum_state_names_resolve_to_ids() {
        assert_eq!(TestState::Idle.id(), StateId::from("Idle"));
        assert_eq!(TestState::Run.name(), "Run");
    }

    #[test]
    fn strings_and_ids_are_states() {
        let owned = String::from("Walk");
        assert_eq!(owned.name(), "Walk");
        assert_eq!("Walk".id(), StateId::from("Walk"));
        assert_eq!(StateId::from("Walk").id().name(), "Walk");
    }

    #[test]
    fn id_displays_as_label() {
        assert_eq!(StateId::from("Run").to_string(), "Run");
        assert_eq!(format!("{:?}", StateId::NONE), "StateId(\"\")");
    }

    #[test]
    fn id_serializes_as_plain_string() {
        let json = serde_json::to_string(&StateId::from("Idle")).unwrap();
        assert_eq!(json, "\"Idle\"");
        let back: StateId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, StateId::from("Idle"));
    }
}
