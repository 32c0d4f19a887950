#![cfg(test)]

use super::*;

#[derive(Debug, Default, PartialEq, crate::Component)]
#[component(id = 101)]
struct Health {
    current: u32,
    max: u32,
}

#[derive(Debug, Default, PartialEq, crate::Component)]
#[component(id = 102)]
struct Position {
    x: f32,
    y: f32,
}

#[derive(Default, crate::Component)]
#[component(id = 103)]
struct Armor;

/// Shares identifier with `Health`.
#[derive(Debug, Default, crate::Component)]
#[component(id = 101)]
struct Shield;

#[test]
fn test_id_matches() {
    let actor = Actor::new("player1");
    assert_eq!(actor.id(), "player1");
    assert!(actor.id_matches("player1"));
    assert!(!actor.id_matches("Player1"));
    assert!(!actor.id_matches(" player1"));
    assert!(!actor.id_matches(""));

    let actor = Actor::default();
    assert!(actor.id_matches(""));
    assert!(!actor.id_matches(" "));
}

#[test]
fn test_missing_component() {
    let actor = Actor::new("empty");

    assert!(!actor.has_component::<Health>());
    assert!(actor.get_component::<Health>().is_none());
    assert!(actor.is_empty());
    assert_eq!(actor.len(), 0);
}

#[test]
fn test_creation() {
    let mut actor = Actor::default();

    let health = actor.create_component::<Health>().unwrap();
    assert_eq!(*health, Health::default());
    assert!(actor.has_component::<Health>());

    let fetched = actor.get_component::<Health>().unwrap();
    assert!(Rc::ptr_eq(&health, &fetched));
    assert_eq!(actor.component_ids(), vec![Health::ID]);
}

#[test]
fn test_creation_with() {
    let mut actor = Actor::default();

    let position = actor
        .create_component_with(|| Position { x: 1.5, y: -2.0 })
        .unwrap();
    assert_eq!(*position, Position { x: 1.5, y: -2.0 });
    assert_eq!(
        actor.get_component::<Position>().as_deref(),
        Some(&Position { x: 1.5, y: -2.0 }),
    );
}

#[test]
fn test_duplicate_creation() {
    let mut actor = Actor::new("player1");
    let first = actor
        .create_component_with(|| Health { current: 7, max: 10 })
        .unwrap();

    let error = actor.create_component::<Health>().unwrap_err();
    assert_eq!(
        error,
        Error::AlreadyExists {
            id: Health::ID,
            type_name: type_name::<Health>(),
        },
    );

    let mut called = false;
    let result = actor.create_component_with(|| {
        called = true;
        Health::default()
    });
    assert!(result.is_err());
    assert!(!called);

    assert_eq!(actor.len(), 1);
    let stored = actor.get_component::<Health>().unwrap();
    assert!(Rc::ptr_eq(&first, &stored));
    assert_eq!(*stored, Health { current: 7, max: 10 });
}

#[test]
fn test_distinct_types() {
    let mut actor = Actor::default();
    let health = actor.create_component::<Health>().unwrap();
    let position = actor.create_component::<Position>().unwrap();

    assert!(Rc::ptr_eq(&health, &actor.get_component().unwrap()));
    assert!(Rc::ptr_eq(&position, &actor.get_component().unwrap()));
    assert!(actor.get_component::<Armor>().is_none());
    assert!(!actor.has_component::<Armor>());
    assert_eq!(actor.component_ids(), vec![Health::ID, Position::ID]);

    for component in actor.components() {
        let any = component.as_any();
        assert_eq!(any.is::<Health>(), component.id() == Health::ID);
        assert_eq!(any.is::<Position>(), component.id() == Position::ID);
        assert!(!any.is::<Armor>());
    }
}

#[test]
fn test_id_conflict() {
    let mut actor = Actor::default();
    actor.create_component::<Health>().unwrap();

    let error = actor.create_component::<Shield>().unwrap_err();
    assert_eq!(
        error,
        Error::IdConflict {
            id: Shield::ID,
            registered: type_name::<Health>(),
            requested: type_name::<Shield>(),
        },
    );

    // The slot of `Shield` is occupied by `Health`, which cannot be cast to `Shield`.
    assert!(actor.has_component::<Shield>());
    assert!(actor.get_component::<Shield>().is_none());

    let mut other = Actor::default();
    assert!(other.create_component::<Shield>().is_err());
    assert!(other.is_empty());
}

#[test]
fn test_shared_ownership() {
    let mut actor = Actor::default();
    let health = actor.create_component::<Health>().unwrap();
    assert_eq!(Rc::strong_count(&health), 2);

    drop(actor);
    assert_eq!(Rc::strong_count(&health), 1);
    assert_eq!(*health, Health::default());
}

#[test]
fn test_debug() {
    let mut actor = Actor::new("npc");
    actor.create_component::<Armor>().unwrap();
    assert_eq!(
        format!("{:?}", actor),
        format!("Actor {{ id: \"npc\", components: [{}] }}", Armor::ID),
    );
}
