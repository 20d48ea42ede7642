use steering_ecs::prelude::*;

#[derive(Debug, Clone, PartialEq)]
struct Position {
    x: f32,
    y: f32,
}

#[derive(Debug, Clone, PartialEq)]
struct Health(u32);

#[derive(Debug, Clone, PartialEq)]
struct Frozen;

#[test]
fn test_destroy_invalidates_handle_and_components() -> Result<()> {
    let mut scene = Scene::new();
    let entity = scene.create_entity()?;
    scene.add_component(entity, Position { x: 1.0, y: 2.0 })?;
    scene.add_component(entity, Health(10))?;

    scene.destroy_entity(entity)?;

    assert!(!scene.is_alive(entity));
    assert!(!scene.has_component::<Position>(entity));
    assert_eq!(
        scene.get_component::<Position>(entity),
        Err(EcsError::StaleHandle(entity))
    );
    assert_eq!(scene.destroy_entity(entity), Err(EcsError::StaleHandle(entity)));
    assert_eq!(scene.query::<(Position,)>().count(), 0);
    Ok(())
}

#[test]
fn test_reused_slot_starts_empty() -> Result<()> {
    let mut scene = Scene::new();
    let first = scene.create_entity()?;
    scene.add_component(first, Health(3))?;
    scene.destroy_entity(first)?;

    let second = scene.create_entity()?;
    assert_eq!(second.index(), first.index());
    assert!(second.version() > first.version());
    assert!(!scene.has_component::<Health>(second));
    assert!(scene.get_component::<Health>(second).is_err());

    // the old handle must not reach the new occupant
    assert_eq!(
        scene.add_component(first, Health(1)),
        Err(EcsError::StaleHandle(first))
    );
    Ok(())
}

#[test]
fn test_add_has_remove() -> Result<()> {
    let mut scene = Scene::new();
    let entity = scene.create_entity()?;

    assert!(!scene.has_component::<Health>(entity));
    scene.add_component(entity, Health(5))?.0 += 1;
    assert!(scene.has_component::<Health>(entity));
    assert_eq!(scene.get_component::<Health>(entity)?, &Health(6));

    // re-adding replaces the value in place
    scene.add_component(entity, Health(9))?;
    assert_eq!(scene.get_component::<Health>(entity)?, &Health(9));

    assert_eq!(scene.remove_component::<Health>(entity)?, Health(9));
    assert!(!scene.has_component::<Health>(entity));
    assert!(matches!(
        scene.remove_component::<Health>(entity),
        Err(EcsError::MissingComponent { .. })
    ));
    Ok(())
}

#[test]
fn test_invalid_entity_rejected() {
    let mut scene = Scene::new();
    assert_eq!(
        scene.add_component(EntityId::INVALID, Frozen).err(),
        Some(EcsError::InvalidEntity(EntityId::INVALID))
    );
    let never_created = EntityId::new(7, 0);
    assert_eq!(
        scene.get_component::<Frozen>(never_created).err(),
        Some(EcsError::InvalidEntity(never_created))
    );
}

#[test]
fn test_query_superset_in_index_order() -> Result<()> {
    let mut scene = Scene::new();
    let mut expected = Vec::new();
    for i in 0..10u32 {
        let entity = scene.create_entity()?;
        scene.add_component(entity, Position { x: i as f32, y: 0.0 })?;
        if i % 2 == 0 {
            scene.add_component(entity, Health(i))?;
            expected.push(entity);
        }
        if i % 3 == 0 {
            scene.add_component(entity, Frozen)?;
        }
    }

    let found: Vec<EntityId> = scene.query::<(Position, Health)>().iter().collect();
    assert_eq!(found, expected);

    let all_three = scene.query::<(Position, Health, Frozen)>().count();
    assert_eq!(all_three, 2); // 0 and 6
    Ok(())
}

#[test]
fn test_query_for_unregistered_type_is_empty() -> Result<()> {
    let mut scene = Scene::new();
    let entity = scene.create_entity()?;
    scene.add_component(entity, Health(1))?;

    assert!(scene.query::<(Health, Position)>().is_empty());
    Ok(())
}

#[test]
fn test_capacity_exceeded() -> Result<()> {
    let mut scene = Scene::builder().max_entities(2).build()?;
    let a = scene.create_entity()?;
    scene.create_entity()?;
    assert_eq!(
        scene.create_entity(),
        Err(EcsError::CapacityExceeded(CapacityError::Entities { capacity: 2 }))
    );

    scene.destroy_entity(a)?;
    assert!(scene.create_entity().is_ok());
    Ok(())
}

#[test]
fn test_builder_registers_components_up_front() -> Result<()> {
    let scene = Scene::builder()
        .max_entities(16)
        .with_component::<Position>()
        .with_component::<Health>()
        .build()?;

    assert_eq!(scene.registry().len(), 2);
    assert!(scene.component_id::<Position>().is_some());
    assert!(scene.component_id::<Frozen>().is_none());
    Ok(())
}
