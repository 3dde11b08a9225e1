//! Registry errors.

use crate::core::StateId;
use thiserror::Error;

/// Contract violations reported by [`StateRegistry`](super::StateRegistry).
///
/// Every error is raised before the registry mutates anything or notifies
/// anyone, so a failed call leaves the registry exactly as it was.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Invalid argument: {reason}")]
    InvalidArgument { reason: String },

    #[error("Cannot declare state '{state}' because it already exists")]
    DuplicateState { state: StateId },

    #[error("State '{state}' does not exist")]
    UnknownState { state: StateId },
}

impl RegistryError {
    pub(crate) fn empty_state() -> Self {
        Self::InvalidArgument {
            reason: "state identifier cannot be empty".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_state() {
        let err = RegistryError::UnknownState {
            state: StateId::from("Walk"),
        };
        assert_eq!(err.to_string(), "State 'Walk' does not exist");

        let err = RegistryError::DuplicateState {
            state: StateId::from("Idle"),
        };
        assert!(err.to_string().contains("'Idle'"));
    }

    #[test]
    fn empty_state_is_invalid_argument() {
        assert!(matches!(
            RegistryError::empty_state(),
            RegistryError::InvalidArgument { .. }
        ));
    }
}
