use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use steering_ecs::prelude::*;
use steering_ecs::steering;

const AGENTS: usize = 5_000;
const DT: f32 = 0.016;

fn flock(seed: u64) -> Scene {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut scene = Scene::builder().max_entities(AGENTS).build().unwrap();
    let mut previous = EntityId::INVALID;
    for i in 0..AGENTS {
        let id = scene.create_entity().unwrap();
        let position = Vec2::new(rng.gen_range(0.0..500.0), rng.gen_range(0.0..500.0));
        scene
            .add_component(id, Transform::from_position(position))
            .unwrap();
        scene.add_component(id, Move::default()).unwrap();
        match i % 4 {
            0 => {
                scene.add_component(id, Seek).unwrap();
            }
            1 => {
                scene.add_component(id, Wander::default()).unwrap();
            }
            2 => {
                scene.add_component(id, Pursuit::new(previous)).unwrap();
            }
            _ => {
                scene.add_component(id, Evade::new(previous, 100.0)).unwrap();
            }
        }
        previous = id;
    }
    scene
}

fn behavior_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("steering");
    let target = Vec2::new(250.0, 250.0);

    group.bench_function("seek", |b| {
        b.iter_batched(
            || flock(1),
            |mut scene| {
                steering::seek(target, &mut scene, DT);
                scene
            },
            BatchSize::LargeInput,
        )
    });

    group.bench_function("pursuit_evade", |b| {
        b.iter_batched(
            || flock(2),
            |mut scene| {
                steering::pursuit(&mut scene, DT);
                steering::evade(&mut scene, DT);
                scene
            },
            BatchSize::LargeInput,
        )
    });

    group.bench_function("wander", |b| {
        let mut rng = StdRng::seed_from_u64(3);
        b.iter_batched(
            || flock(3),
            |mut scene| {
                steering::wander(&mut scene, &mut rng, DT);
                scene
            },
            BatchSize::LargeInput,
        )
    });

    group.finish();
}

fn app_benchmark(c: &mut Criterion) {
    c.bench_function("app_tick_default_systems", |b| {
        let mut app = App::from_config(AppConfig {
            scene: SceneConfig::with_max_entities(AGENTS),
            bounds: Some(Vec2::splat(500.0)),
            ..AppConfig::default()
        })
        .unwrap()
        .with_default_systems();
        app.scene = flock(4);
        b.iter(|| app.update(DT, Vec2::new(250.0, 250.0)).unwrap())
    });
}

criterion_group!(benches, behavior_benchmark, app_benchmark);
criterion_main!(benches);
