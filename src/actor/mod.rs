//! Utilities for *actors*: bags of components.

use std::any::type_name;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::{registry, AnyComponent, Component, ComponentId, Error, Result};

mod tests;

/// Map with identifiers of component types and their instances.
type ComponentMap = HashMap<ComponentId, Rc<dyn AnyComponent>>;

/// Bag of components, optionally named by an identifier string.
///
/// Holds at most one component of each type. Components are shared with
/// callers, so they may outlive the actor which created them.
///
#[derive(Default)]
pub struct Actor {
    id: String,
    components: ComponentMap,
}

impl Actor {
    /// Creates an empty actor with given identifier.
    pub fn new<S>(id: S) -> Self
    where
        S: Into<String>,
    {
        Self {
            id: id.into(),
            components: HashMap::new(),
        }
    }

    /// Returns identifier of this actor.
    ///
    /// Identifiers are not required to be unique.
    ///
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns `true` if identifier of this actor is exactly equal to `id`.
    pub fn id_matches(&self, id: &str) -> bool {
        self.id == id
    }

    /// Returns `true` if this actor holds component with identifier of type `T`.
    pub fn has_component<T>(&self) -> bool
    where
        T: Component,
    {
        self.components.contains_key(&T::ID)
    }

    /// Retrieves shared component of type `T`.
    ///
    /// Returns `None` if there is no such component or if component stored
    /// under identifier of `T` has another type.
    ///
    pub fn get_component<T>(&self) -> Option<Rc<T>>
    where
        T: Component,
    {
        let component = self.components.get(&T::ID)?;
        Rc::clone(component).into_any().downcast().ok()
    }

    /// Creates default component of type `T` and attaches it to this actor.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AlreadyExists`] if component of type `T` was already created,
    /// or [`Error::IdConflict`] if identifier of `T` belongs to another type.
    ///
    pub fn create_component<T>(&mut self) -> Result<Rc<T>>
    where
        T: Component + Default,
    {
        self.create_component_with(T::default)
    }

    /// Creates component of type `T` from the closure and attaches it to this actor.
    ///
    /// The closure is not called if creation fails.
    ///
    /// # Errors
    ///
    /// Same as [`create_component`](Self::create_component).
    ///
    pub fn create_component_with<T, F>(&mut self, f: F) -> Result<Rc<T>>
    where
        T: Component,
        F: FnOnce() -> T,
    {
        registry::register::<T>()?;
        if self.components.contains_key(&T::ID) {
            let error = Error::AlreadyExists {
                id: T::ID,
                type_name: type_name::<T>(),
            };
            log::warn!(target: "actor_bag::actor", "actor {:?}: {}", self.id, error);
            return Err(error);
        }

        let component = Rc::new(f());
        self.components
            .insert(T::ID, Rc::clone(&component) as Rc<dyn AnyComponent>);
        log::debug!(
            target: "actor_bag::actor",
            "actor {:?}: created component `{}` with id {}",
            self.id,
            type_name::<T>(),
            T::ID,
        );
        Ok(component)
    }

    /// Returns count of components attached to this actor.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Returns `true` if there are no components attached to this actor.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Returns identifiers of all attached components in ascending order.
    pub fn component_ids(&self) -> Vec<ComponentId> {
        let mut ids: Vec<_> = self.components.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Returns iterator over all attached components in arbitrary order.
    pub fn components(&self) -> impl Iterator<Item = &dyn AnyComponent> {
        self.components.values().map(|component| &**component)
    }
}

impl fmt::Debug for Actor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Actor")
            .field("id", &self.id)
            .field("components", &self.component_ids())
            .finish()
    }
}
