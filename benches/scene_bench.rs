use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use steering_ecs::prelude::*;

#[derive(Debug, Clone)]
#[allow(dead_code)]
struct Position(f32, f32);

#[derive(Debug, Clone)]
#[allow(dead_code)]
struct Health(u32);

const COUNT: usize = 10_000;

fn scene() -> Scene {
    Scene::builder()
        .max_entities(COUNT)
        .with_component::<Position>()
        .with_component::<Health>()
        .build()
        .unwrap()
}

fn create_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("create");

    group.bench_function("create_entity_2_components", |b| {
        b.iter_batched(
            scene,
            |mut scene| {
                for _ in 0..COUNT {
                    let id = scene.create_entity().unwrap();
                    scene.add_component(id, Position(1.0, 2.0)).unwrap();
                    scene.add_component(id, Health(100)).unwrap();
                }
                scene
            },
            BatchSize::LargeInput,
        )
    });

    group.bench_function("destroy_and_reuse", |b| {
        b.iter_batched(
            || {
                let mut scene = scene();
                let ids: Vec<_> = (0..COUNT)
                    .map(|_| {
                        let id = scene.create_entity().unwrap();
                        scene.add_component(id, Health(1)).unwrap();
                        id
                    })
                    .collect();
                (scene, ids)
            },
            |(mut scene, ids)| {
                for id in ids {
                    scene.destroy_entity(id).unwrap();
                }
                for _ in 0..COUNT {
                    scene.create_entity().unwrap();
                }
                scene
            },
            BatchSize::LargeInput,
        )
    });

    group.finish();
}

fn query_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("query");

    let mut populated = scene();
    for i in 0..COUNT {
        let id = populated.create_entity().unwrap();
        populated.add_component(id, Position(i as f32, 0.0)).unwrap();
        if i % 2 == 0 {
            populated.add_component(id, Health(i as u32)).unwrap();
        }
    }

    group.bench_function("iterate_half_matching", |b| {
        b.iter(|| black_box(populated.query::<(Position, Health)>().count()))
    });

    group.bench_function("get_component", |b| {
        let ids: Vec<_> = populated.query::<(Position,)>().iter().collect();
        b.iter(|| {
            let mut sum = 0.0;
            for id in &ids {
                sum += populated.get_component::<Position>(*id).unwrap().0;
            }
            black_box(sum)
        })
    });

    group.finish();
}

criterion_group!(benches, create_benchmark, query_benchmark);
criterion_main!(benches);
