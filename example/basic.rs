//! Example: basic scene usage
//!
//! Creates entities, attaches components, queries them and shows how a
//! destroyed handle is rejected once its slot is reused.

use steering_ecs::prelude::*;

#[derive(Debug)]
struct Position {
    x: f32,
    y: f32,
}

#[derive(Debug)]
struct Velocity {
    x: f32,
    y: f32,
}

#[derive(Debug)]
struct Health(u32);

fn main() -> Result<()> {
    let mut scene = Scene::builder()
        .max_entities(1_024)
        .with_component::<Position>()
        .with_component::<Velocity>()
        .build()?;

    println!("Creating entities...");

    let entity1 = scene.create_entity()?;
    scene.add_component(entity1, Position { x: 0.0, y: 0.0 })?;
    scene.add_component(entity1, Velocity { x: 1.0, y: 0.5 })?;
    println!("Created {entity1}");

    let entity2 = scene.create_entity()?;
    scene.add_component(entity2, Position { x: 10.0, y: 20.0 })?;
    scene.add_component(entity2, Velocity { x: -1.0, y: 2.0 })?;
    scene.add_component(entity2, Health(100))?;
    println!("Created {entity2}");

    let entity3 = scene.create_entity()?;
    scene.add_component(entity3, Position { x: 5.0, y: 5.0 })?;
    println!("Created {entity3}");

    // integrate one step for everything that moves
    let movers = QueryState::<(Position, Velocity)>::new(&scene);
    let mut cursor = movers.cursor();
    while let Some(id) = cursor.advance(&scene) {
        let (vx, vy) = {
            let velocity = scene.get_component::<Velocity>(id)?;
            (velocity.x, velocity.y)
        };
        let position = scene.get_component_mut::<Position>(id)?;
        position.x += vx;
        position.y += vy;
        println!("{id} moved to ({}, {})", position.x, position.y);
    }

    println!("Destroying {entity2}...");
    scene.destroy_entity(entity2)?;

    let entity4 = scene.create_entity()?;
    println!("Created {entity4} in the freed slot");

    match scene.get_component::<Health>(entity2) {
        Err(err) => println!("Old handle rejected: {err}"),
        Ok(health) => println!("Unexpected: {health:?}"),
    }

    println!(
        "{} live entities, {} with a position",
        scene.entity_count(),
        scene.query::<(Position,)>().count()
    );
    Ok(())
}
