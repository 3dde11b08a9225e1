//! Builder API for ergonomic registry construction.
//!
//! This module provides a fluent builder for setting up a registry in one
//! expression and a macro for naming states with enums.

pub mod macros;
pub mod registry;

pub use registry::RegistryBuilder;
