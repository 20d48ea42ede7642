use proptest::prelude::*;
use std::collections::HashMap;
use steering_ecs::prelude::*;

#[derive(Debug, Clone, Copy)]
enum Op {
    Create,
    Destroy(usize),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        2 => Just(Op::Create),
        1 => any::<usize>().prop_map(Op::Destroy),
    ]
}

proptest! {
    #[test]
    fn destroyed_handles_stay_dead(ops in prop::collection::vec(op(), 1..200)) {
        let mut scene = Scene::builder().max_entities(32).build().unwrap();
        let mut live: Vec<EntityId> = Vec::new();
        let mut dead: Vec<EntityId> = Vec::new();
        let mut last_version: HashMap<u32, u32> = HashMap::new();

        for op in ops {
            match op {
                Op::Create => {
                    let Ok(id) = scene.create_entity() else {
                        prop_assert_eq!(live.len(), 32);
                        continue;
                    };
                    prop_assert!(id.is_valid());
                    if let Some(&previous) = last_version.get(&id.index()) {
                        prop_assert!(id.version() > previous);
                    }
                    last_version.insert(id.index(), id.version());
                    live.push(id);
                }
                Op::Destroy(pick) => {
                    if live.is_empty() {
                        continue;
                    }
                    let id = live.swap_remove(pick % live.len());
                    prop_assert!(scene.destroy_entity(id).is_ok());
                    dead.push(id);
                }
            }

            for id in &dead {
                prop_assert!(!scene.is_alive(*id));
            }
            for id in &live {
                prop_assert!(scene.is_alive(*id));
            }
            prop_assert_eq!(scene.entity_count(), live.len());
        }
    }

    #[test]
    fn component_follows_its_entity(values in prop::collection::vec(any::<u32>(), 1..64)) {
        let mut scene = Scene::new();
        let ids: Vec<EntityId> = values
            .iter()
            .map(|&value| {
                let id = scene.create_entity().unwrap();
                scene.add_component(id, value).unwrap();
                id
            })
            .collect();

        for (id, value) in ids.iter().zip(&values) {
            prop_assert_eq!(scene.get_component::<u32>(*id).unwrap(), value);
        }
        prop_assert_eq!(scene.query::<(u32,)>().count(), values.len());
    }
}
