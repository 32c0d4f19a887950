//! Process-wide registry of component identifiers.
//!
//! Each [`ComponentId`] may be claimed by exactly one component type.
//! [`Actor::create_component`](crate::Actor::create_component) registers the
//! type being created, so two types sharing an identifier are rejected the
//! first time the second of them is created.
//!
//! The registry is shared by the whole process, not kept per actor: two
//! types with the same identifier conflict even if no actor holds both.

use std::any::{type_name, TypeId};
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::{Component, ComponentId, Error, Result};

struct Registered {
    type_id: TypeId,
    type_name: &'static str,
}

type Registry = HashMap<ComponentId, Registered>;

lazy_static::lazy_static! {
    static ref REGISTRY: RwLock<Registry> = RwLock::new(HashMap::new());
}

/// Claims identifier of component type `T` for this type.
///
/// Registering the same type again is a no-op.
///
/// # Errors
///
/// Returns [`Error::IdConflict`] if the identifier was already claimed by another type.
///
pub fn register<T>() -> Result<()>
where
    T: Component,
{
    {
        let registry = read();
        if let Some(registered) = registry.get(&T::ID) {
            return check::<T>(registered);
        }
    }

    let mut registry = write();
    let registered = registry.entry(T::ID).or_insert_with(|| {
        log::trace!(
            target: "actor_bag::registry",
            "component id {} registered for `{}`",
            T::ID,
            type_name::<T>(),
        );
        Registered {
            type_id: TypeId::of::<T>(),
            type_name: type_name::<T>(),
        }
    });
    check::<T>(registered)
}

/// Returns name of the type which claimed the identifier, if any.
pub fn registered(id: ComponentId) -> Option<&'static str> {
    read().get(&id).map(|registered| registered.type_name)
}

fn check<T>(registered: &Registered) -> Result<()>
where
    T: Component,
{
    if registered.type_id == TypeId::of::<T>() {
        return Ok(());
    }
    let error = Error::IdConflict {
        id: T::ID,
        registered: registered.type_name,
        requested: type_name::<T>(),
    };
    log::warn!(target: "actor_bag::registry", "{}", error);
    Err(error)
}

// The map stays consistent even if a holder panicked.
fn read() -> RwLockReadGuard<'static, Registry> {
    REGISTRY.read().unwrap_or_else(PoisonError::into_inner)
}

fn write() -> RwLockWriteGuard<'static, Registry> {
    REGISTRY.write().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(crate::Component)]
    #[component(id = 201)]
    struct Mana;

    #[derive(crate::Component)]
    #[component(id = 201)]
    struct Stamina;

    #[derive(crate::Component)]
    #[component(id = 202)]
    struct Gold;

    #[test]
    fn test_register_twice() {
        assert_eq!(register::<Gold>(), Ok(()));
        assert_eq!(register::<Gold>(), Ok(()));
        assert_eq!(registered(Gold::ID), Some(type_name::<Gold>()));
    }

    #[test]
    fn test_conflict() {
        assert_eq!(register::<Mana>(), Ok(()));
        assert_eq!(
            register::<Stamina>(),
            Err(Error::IdConflict {
                id: 201,
                registered: type_name::<Mana>(),
                requested: type_name::<Stamina>(),
            }),
        );
        assert_eq!(registered(201), Some(type_name::<Mana>()));
    }

    #[test]
    fn test_unregistered() {
        assert_eq!(registered(299), None);
    }
}
