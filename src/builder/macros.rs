//! Macros for naming states with enums.

/// Generate a plain enum and its [`State`](crate::core::State) implementation.
///
/// Each variant is registered under its own name.
///
/// # Example
///
/// ```
/// use statehost::state_enum;
/// use statehost::StateRegistry;
///
/// state_enum! {
///     pub enum Player {
///         Idle,
///         Run,
///         Jump,
///     }
/// }
///
/// let registry = StateRegistry::new();
/// registry.declare(&Player::Idle, || {}).unwrap();
/// registry.transition(&Player::Idle).unwrap();
/// assert!(registry.is_in_state("Idle"));
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $name {
            /// Every variant, in declaration order.
            #[allow(dead_code)]
            pub const ALL: &'static [$name] = &[$(Self::$variant),*];
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{State, StateId};

    state_enum! {
        enum TestState {
            Idle,
            Run,
            Jump,
        }
    }

    #[test]
    fn state_enum_macro_generates_trait() {
        assert_eq!(TestState::Idle.name(), "Idle");
        assert_eq!(TestState::Jump.id(), StateId::from("Jump"));
    }

    #[test]
    fn state_enum_lists_all_variants() {
        let names: Vec<&str> = TestState::ALL.iter().map(|s| s.name()).collect();
        assert_eq!(names, vec!["Idle", "Run", "Jump"]);
    }

    #[test]
    fn state_enum_supports_visibility() {
        state_enum! {
            /// Documented enum.
            pub enum PublicState {
                A,
                B,
            }
        }

        assert_eq!(PublicState::B.name(), "B");
    }
}
