//! Storage for *actors*.

use std::ops::{Index, IndexMut};

use slotmap::{new_key_type, SlotMap};

use crate::Actor;

new_key_type! {
    /// Unique key of the *actor* inside of the [`Stage`].
    pub struct ActorKey;
}

/// Storage for all actors of the application.
///
/// Actors are looked up either by key or by their identifier string.
///
#[derive(Default)]
pub struct Stage {
    actors: SlotMap<ActorKey, Actor>,
}

impl Stage {
    /// Creates an empty stage.
    pub fn new() -> Self {
        Self {
            actors: SlotMap::with_key(),
        }
    }

    /// Moves actor into this stage and returns its key.
    pub fn spawn(&mut self, actor: Actor) -> ActorKey {
        let key = self.actors.insert(actor);
        log::debug!(
            target: "actor_bag::stage",
            "spawned actor {:?} as {:?}",
            self.actors[key].id(),
            key,
        );
        key
    }

    /// Removes actor from this stage.
    ///
    /// Returns removed actor, if any.
    ///
    pub fn despawn(&mut self, key: ActorKey) -> Option<Actor> {
        self.actors.remove(key)
    }

    pub fn get(&self, key: ActorKey) -> Option<&Actor> {
        self.actors.get(key)
    }

    pub fn get_mut(&mut self, key: ActorKey) -> Option<&mut Actor> {
        self.actors.get_mut(key)
    }

    /// Finds the first actor which identifier matches `id`.
    pub fn find(&self, id: &str) -> Option<(ActorKey, &Actor)> {
        self.actors.iter().find(|(_, actor)| actor.id_matches(id))
    }

    /// Returns iterator over all actors which identifier matches `id`.
    pub fn find_all<'a, 'b>(
        &'a self,
        id: &'b str,
    ) -> impl Iterator<Item = (ActorKey, &'a Actor)> + 'b
    where
        'a: 'b,
    {
        self.actors
            .iter()
            .filter(move |(_, actor)| actor.id_matches(id))
    }

    /// Returns iterator over all actors with their keys.
    pub fn iter(&self) -> impl Iterator<Item = (ActorKey, &Actor)> {
        self.actors.iter()
    }

    pub fn len(&self) -> usize {
        self.actors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actors.is_empty()
    }
}

impl Index<ActorKey> for Stage {
    type Output = Actor;

    fn index(&self, key: ActorKey) -> &Self::Output {
        self.get(key).expect("there is no actor with the key")
    }
}

impl IndexMut<ActorKey> for Stage {
    fn index_mut(&mut self, key: ActorKey) -> &mut Self::Output {
        self.get_mut(key).expect("there is no actor with the key")
    }
}
