//! Utilities for *components* of actors.

use std::any::{type_name, Any};
use std::rc::Rc;


/// Numeric identifier of the *component* type.
pub type ComponentId = u32;

/// Objects of this trait represent *component* of an actor.
///
/// Every component type owns an identifier which must be unique among all
/// component types used together. Uniqueness is checked by the
/// [registry](crate::registry) when a component is created.
///
/// Usually implemented by `#[derive(Component)]`:
///
/// ```
/// use actor_bag::Component;
///
/// #[derive(Default, Component)]
/// #[component(id = 7)]
/// struct Armor {
///     rating: u32,
/// }
///
/// assert_eq!(Armor::ID, 7);
/// ```
///
/// The identifier is mandatory, unique and integer:
///
/// ```compile_fail
/// #[derive(actor_bag::Component)]
/// struct Untagged;
/// ```
///
/// ```compile_fail
/// #[derive(actor_bag::Component)]
/// #[component(id = 1)]
/// #[component(id = 2)]
/// struct Twice;
/// ```
///
/// ```compile_fail
/// #[derive(actor_bag::Component)]
/// #[component(id = "x")]
/// struct Named;
/// ```
///
/// Types without this trait are rejected by typed operations of the actor:
///
/// ```compile_fail
/// let actor = actor_bag::Actor::default();
/// let _name = actor.get_component::<String>();
/// ```
///
pub trait Component: Any {
    /// Identifier shared by all instances of this type.
    const ID: ComponentId;
}

/// Object safe view of a stored *component*.
///
/// Implemented for every [`Component`], so the identifier of an instance
/// always equals the identifier of its type.
///
pub trait AnyComponent: Any {
    /// Returns identifier of the concrete component type.
    fn id(&self) -> ComponentId;

    /// Returns name of the concrete component type.
    fn type_name(&self) -> &'static str;

    fn as_any(&self) -> &dyn Any;

    fn into_any(self: Rc<Self>) -> Rc<dyn Any>;
}

impl<T> AnyComponent for T
where
    T: Component,
{
    fn id(&self) -> ComponentId {
        T::ID
    }

    fn type_name(&self) -> &'static str {
        type_name::<T>()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Rc<Self>) -> Rc<dyn Any> {
        self
    }
}
