//! Traits which, typically, may be imported without concern: `use argbind::prelude::*`.

/// Behaviour for converting between a command line token and a destination type.
// Needs to be imported in order to implement `Convertible` for a custom type.
pub use crate::api::Convertible;
