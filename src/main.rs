//! Demo of actors carrying components.

use std::error::Error;

use actor_bag::config::Config;
use actor_bag::{Actor, Component, Stage};

mod logger;

#[derive(Debug, Default, Component)]
#[component(id = 1)]
struct Health {
    current: u32,
    max: u32,
}

#[derive(Debug, Default, Component)]
#[component(id = 2)]
struct Position {
    x: f32,
    y: f32,
}

#[derive(Debug, Default, Component)]
#[component(id = 3)]
struct Armor {
    rating: u32,
}

/// Entry point of the demo
fn main() -> Result<(), Box<dyn Error>> {
    let config = Config::default();
    let _handle = logger::init(&config)?;
    log::info!("{} version {} started", config.name(), config.version());

    let mut stage = Stage::new();
    let player = stage.spawn(Actor::new("player1"));
    let goblin = stage.spawn(Actor::new("goblin"));

    let actor = stage.get_mut(player).ok_or("player was despawned")?;
    let health = actor.create_component_with(|| Health {
        current: 80,
        max: 100,
    })?;
    let position = actor.create_component::<Position>()?;
    if let Err(error) = actor.create_component::<Health>() {
        log::warn!("second health was rejected: {}", error);
    }

    let actor = stage.get_mut(goblin).ok_or("goblin was despawned")?;
    actor.create_component_with(|| Armor { rating: 5 })?;

    match stage.find("player1") {
        Some((key, actor)) => {
            log::info!("found {:?} at {:?}", actor, key);
            log::info!("player has armor: {}", actor.has_component::<Armor>());
        }
        None => log::error!("player1 is not on the stage"),
    }
    log::info!(
        "health {}/{} at ({}, {})",
        health.current,
        health.max,
        position.x,
        position.y,
    );
    for (key, actor) in stage.iter() {
        if let Some(armor) = actor.get_component::<Armor>() {
            log::info!("{:?} {:?} wears armor {}", key, actor.id(), armor.rating);
        }
    }
    Ok(())
}
