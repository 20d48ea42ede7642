//! Example: a single wandering agent
//!
//! Sets up the reference scene (a red triangle agent with a crosshair
//! marking its wander target and a circle marking the wander circle) and
//! runs the default systems headless, printing the agent's pose.
//!
//! Pass a JSON config path as the first argument to override the defaults.

use steering_ecs::prelude::*;

const SCREEN: f32 = 500.0;

fn main() -> Result<()> {
    let config = match std::env::args().nth(1) {
        Some(path) => AppConfig::from_json_file(path)?,
        None => AppConfig {
            seed: 42,
            bounds: Some(Vec2::splat(SCREEN)),
            ..AppConfig::default()
        },
    };
    let mut app = App::from_config(config)?.with_default_systems();

    let target = app.scene.create_entity()?;
    app.scene.add_component(target, Transform::default())?;
    app.scene.add_component(target, Crosshair::new(5.0))?;
    app.scene.add_component(target, Color::BLACK)?;

    let forward = app.scene.create_entity()?;
    app.scene.add_component(forward, Transform::default())?;
    app.scene.add_component(forward, Circle::default())?;
    app.scene.add_component(forward, Color::BLACK)?;

    let agent = app.scene.create_entity()?;
    app.scene.add_component(
        agent,
        Transform::new(
            Vec2::new(125.0, 125.0),
            Vec2::new(0.0, -1.0),
            Vec2::new(0.75, 1.0),
        ),
    )?;
    app.scene.add_component(agent, Move::default())?;
    app.scene.add_component(agent, Triangle::new(10.0))?;
    app.scene.add_component(agent, Color::RED)?;
    app.scene
        .add_component(agent, Wander::new(target, forward, 25.0, 100.0, 5.0))?;

    // wander runs after follow_target, so the crosshair ends each tick on
    // the wander target rather than the mouse
    let mouse = Vec2::new(-1.0, -1.0);
    for frame in 0..600 {
        app.update(1.0 / 60.0, mouse)?;
        if frame % 60 == 0 {
            let transform = app.scene.get_component::<Transform>(agent)?;
            let wander_target = app.scene.get_component::<Transform>(target)?.position;
            println!(
                "t={:>5.2}s pos=({:>6.1}, {:>6.1}) heading=({:>5.2}, {:>5.2}) target=({:>6.1}, {:>6.1})",
                frame as f32 / 60.0,
                transform.position.x,
                transform.position.y,
                transform.heading.x,
                transform.heading.y,
                wander_target.x,
                wander_target.y,
            );
        }
    }
    Ok(())
}
