//! Utilities for error handling of actors and their components.

use thiserror::Error;

use crate::ComponentId;

/// Result of any operation which can return an error.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Component of the same type was already created on the actor.
    #[error("component `{type_name}` with id {id} already exists on this actor")]
    AlreadyExists {
        id: ComponentId,
        type_name: &'static str,
    },

    /// Two different component types share the same identifier.
    #[error("component id {id} is claimed by both `{registered}` and `{requested}`")]
    IdConflict {
        id: ComponentId,
        registered: &'static str,
        requested: &'static str,
    },
}
