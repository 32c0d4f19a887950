//! Actors as typed bags of shared components.
//!
//! An [`Actor`] stores at most one component of every [`Component`] type,
//! keyed by the numeric identifier of that type. Components are shared with
//! callers through [`Rc`](std::rc::Rc).
//!
//! ```
//! use actor_bag::{Actor, Component};
//!
//! #[derive(Default, Component)]
//! #[component(id = 1)]
//! struct Health(u32);
//!
//! let mut actor = Actor::new("player1");
//! let health = actor.create_component::<Health>().unwrap();
//! assert!(actor.has_component::<Health>());
//! assert_eq!(health.0, 0);
//! ```

extern crate self as actor_bag;

pub use actor_bag_derive::Component;

pub use actor::Actor;
pub use component::{AnyComponent, Component, ComponentId};
pub use error::{Error, Result};
pub use stage::{ActorKey, Stage};

pub mod config;
pub mod error;
pub mod registry;

mod actor;
mod component;
mod stage;
