// Copyright 2024 Saptak Santra
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Steering behaviors
//!
//! Each behavior runs one simulation step over every entity carrying its
//! parameter component plus [`Transform`] and [`Move`]. The shared step is:
//! clamp the steering force to `max_force`, integrate velocity through the
//! mass, clamp velocity to `max_speed`, then move and re-face along the new
//! velocity unless the agent has (nearly) stopped.
//!
//! Degenerate geometry never aborts a batch: the affected entity is skipped
//! for this tick and the scan continues.

use glam::Vec2;
use rand::Rng;
use tracing::debug;

#[cfg(feature = "profiling")]
use tracing::info_span;

use super::components::{Arrive, Circle, Evade, Flee, Move, Pursuit, Seek, Transform, Wander};
use super::math::{jitter_point, to_world, truncate, unit_or};
use super::{ARRIVE_STOP_SPEED, EPSILON, PURSUIT_ALIGNMENT, TURNAROUND_COEFFICIENT};
use crate::entity::EntityId;
use crate::query::QueryState;
use crate::scene::Scene;

/// What the integration step did to an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Position advanced and heading follows velocity
    Moved,
    /// Velocity integrated but too slow to move or turn this tick
    Stopped,
    /// State left untouched (non-positive mass)
    Skipped,
}

/// Apply `force` to one agent for `dt` seconds.
///
/// Speeds at or below `stop_speed` leave position and heading as they were.
pub fn steer(
    motion: &mut Move,
    transform: &mut Transform,
    force: Vec2,
    dt: f32,
    stop_speed: f32,
) -> Step {
    if motion.mass <= EPSILON {
        return Step::Skipped;
    }

    let force = truncate(force, motion.max_force);
    let acceleration = force / motion.mass;
    motion.velocity = truncate(motion.velocity + acceleration * dt, motion.max_speed);

    let speed = motion.velocity.length();
    if speed <= stop_speed {
        return Step::Stopped;
    }
    transform.position += motion.velocity * dt;
    transform.heading = motion.velocity / speed;
    Step::Moved
}

/// Force that turns the current velocity into full speed toward `target`.
/// `None` when already on top of the target.
pub fn seek_force(position: Vec2, target: Vec2, motion: &Move) -> Option<Vec2> {
    let to_target = target - position;
    let distance = to_target.length();
    if distance < EPSILON {
        return None;
    }
    Some(to_target / distance * motion.max_speed - motion.velocity)
}

/// Force that drives away from `target`; zero once the target is farther
/// than `radius`.
pub fn flee_force(position: Vec2, target: Vec2, radius: f32, motion: &Move) -> Option<Vec2> {
    let away = position - target;
    let distance = away.length();
    if distance < EPSILON {
        return None;
    }
    if distance > radius {
        return Some(Vec2::ZERO);
    }
    Some(away / distance * motion.max_speed - motion.velocity)
}

/// Seek whose desired speed falls off linearly with distance.
pub fn arrive_force(position: Vec2, target: Vec2, deceleration: f32, motion: &Move) -> Vec2 {
    let to_target = target - position;
    let distance = to_target.length();
    if distance < EPSILON {
        return Vec2::ZERO;
    }
    let speed = if deceleration > EPSILON {
        (distance / deceleration).min(motion.max_speed)
    } else {
        motion.max_speed
    };
    to_target / distance * speed - motion.velocity
}

/// Where a pursuer should aim to intercept the evader.
///
/// Heads straight for the evader when it is ahead and moving the same way;
/// otherwise leads it by the time needed to close the gap plus a turnaround
/// penalty that grows as the pursuer faces away.
pub fn pursuit_target(
    pursuer: &Transform,
    pursuer_motion: &Move,
    evader: &Transform,
    evader_motion: &Move,
) -> Option<Vec2> {
    let to_evader = evader.position - pursuer.position;
    let distance = to_evader.length();
    if distance < EPSILON {
        return None;
    }

    let ahead = pursuer.heading.dot(to_evader / distance);
    let aligned = pursuer.heading.dot(evader.heading);
    if ahead >= 0.0 && aligned >= PURSUIT_ALIGNMENT {
        return Some(evader.position);
    }

    let turnaround = (ahead - 1.0) * TURNAROUND_COEFFICIENT;
    let lookahead = closing_time(distance, pursuer_motion, evader_motion) + turnaround;
    Some(evader.position + evader_motion.velocity * lookahead)
}

/// Predicted pursuer position an evader should flee from.
pub fn evade_target(
    evader: &Transform,
    evader_motion: &Move,
    pursuer: &Transform,
    pursuer_motion: &Move,
) -> Vec2 {
    let distance = (pursuer.position - evader.position).length();
    let lookahead = closing_time(distance, evader_motion, pursuer_motion);
    pursuer.position + pursuer_motion.velocity * lookahead
}

fn closing_time(distance: f32, a: &Move, b: &Move) -> f32 {
    let speed = a.max_speed + b.max_speed;
    if speed > EPSILON {
        distance / speed
    } else {
        0.0
    }
}

fn kinematics(scene: &Scene, id: EntityId) -> Option<(Transform, Move)> {
    let transform = *scene.get_component::<Transform>(id).ok()?;
    let motion = *scene.get_component::<Move>(id).ok()?;
    Some((transform, motion))
}

fn commit(scene: &mut Scene, id: EntityId, transform: Transform, motion: Move) {
    if let Ok(slot) = scene.get_component_mut::<Transform>(id) {
        *slot = transform;
    }
    if let Ok(slot) = scene.get_component_mut::<Move>(id) {
        *slot = motion;
    }
}

/// Steer every `Seek` agent toward `target`.
pub fn seek(target: Vec2, scene: &mut Scene, dt: f32) {
    #[cfg(feature = "profiling")]
    let _span = info_span!("steering.seek").entered();

    let mut cursor = QueryState::<(Seek, Transform, Move)>::new(scene).cursor();
    while let Some(id) = cursor.advance(scene) {
        let Some((mut transform, mut motion)) = kinematics(scene, id) else {
            continue;
        };
        let Some(force) = seek_force(transform.position, target, &motion) else {
            continue;
        };
        steer(&mut motion, &mut transform, force, dt, EPSILON);
        commit(scene, id, transform, motion);
    }
}

/// Steer every `Flee` agent away from `target` while it is within the
/// agent's radius.
pub fn flee(target: Vec2, scene: &mut Scene, dt: f32) {
    #[cfg(feature = "profiling")]
    let _span = info_span!("steering.flee").entered();

    let mut cursor = QueryState::<(Flee, Transform, Move)>::new(scene).cursor();
    while let Some(id) = cursor.advance(scene) {
        let Ok(&Flee { radius }) = scene.get_component::<Flee>(id) else {
            continue;
        };
        let Some((mut transform, mut motion)) = kinematics(scene, id) else {
            continue;
        };
        let Some(force) = flee_force(transform.position, target, radius, &motion) else {
            continue;
        };
        steer(&mut motion, &mut transform, force, dt, EPSILON);
        commit(scene, id, transform, motion);
    }
}

/// Steer every `Arrive` agent to come to rest on `target`.
pub fn arrive(target: Vec2, scene: &mut Scene, dt: f32) {
    #[cfg(feature = "profiling")]
    let _span = info_span!("steering.arrive").entered();

    let mut cursor = QueryState::<(Arrive, Transform, Move)>::new(scene).cursor();
    while let Some(id) = cursor.advance(scene) {
        let Ok(&Arrive { deceleration }) = scene.get_component::<Arrive>(id) else {
            continue;
        };
        let Some((mut transform, mut motion)) = kinematics(scene, id) else {
            continue;
        };
        let force = arrive_force(transform.position, target, deceleration, &motion);
        steer(&mut motion, &mut transform, force, dt, ARRIVE_STOP_SPEED);
        commit(scene, id, transform, motion);
    }
}

/// Steer every `Pursuit` agent to intercept its evader.
pub fn pursuit(scene: &mut Scene, dt: f32) {
    #[cfg(feature = "profiling")]
    let _span = info_span!("steering.pursuit").entered();

    let mut cursor = QueryState::<(Pursuit, Transform, Move)>::new(scene).cursor();
    while let Some(id) = cursor.advance(scene) {
        let Ok(&Pursuit { evader }) = scene.get_component::<Pursuit>(id) else {
            continue;
        };
        if !evader.is_valid() {
            continue;
        }
        let Some((evader_transform, evader_motion)) = kinematics(scene, evader) else {
            debug!(pursuer = %id, evader = %evader, "evader gone or not steerable, skipping");
            continue;
        };
        let Some((mut transform, mut motion)) = kinematics(scene, id) else {
            continue;
        };
        let Some(target) = pursuit_target(&transform, &motion, &evader_transform, &evader_motion)
        else {
            continue;
        };
        let Some(force) = seek_force(transform.position, target, &motion) else {
            continue;
        };
        steer(&mut motion, &mut transform, force, dt, EPSILON);
        commit(scene, id, transform, motion);
    }
}

/// Steer every `Evade` agent away from its pursuer's predicted position.
pub fn evade(scene: &mut Scene, dt: f32) {
    #[cfg(feature = "profiling")]
    let _span = info_span!("steering.evade").entered();

    let mut cursor = QueryState::<(Evade, Transform, Move)>::new(scene).cursor();
    while let Some(id) = cursor.advance(scene) {
        let Ok(&Evade { pursuer, radius }) = scene.get_component::<Evade>(id) else {
            continue;
        };
        if !pursuer.is_valid() {
            continue;
        }
        let Some((pursuer_transform, pursuer_motion)) = kinematics(scene, pursuer) else {
            debug!(evader = %id, pursuer = %pursuer, "pursuer gone or not steerable, skipping");
            continue;
        };
        let Some((mut transform, mut motion)) = kinematics(scene, id) else {
            continue;
        };
        let target = evade_target(&transform, &motion, &pursuer_transform, &pursuer_motion);
        let Some(force) = flee_force(transform.position, target, radius, &motion) else {
            continue;
        };
        steer(&mut motion, &mut transform, force, dt, EPSILON);
        commit(scene, id, transform, motion);
    }
}

/// Advance every `Wander` agent: jitter its circle point, seek the projected
/// target and move its display companions.
pub fn wander<R: Rng + ?Sized>(scene: &mut Scene, rng: &mut R, dt: f32) {
    #[cfg(feature = "profiling")]
    let _span = info_span!("steering.wander").entered();

    let mut cursor = QueryState::<(Wander, Transform, Move)>::new(scene).cursor();
    while let Some(id) = cursor.advance(scene) {
        let Ok(&wander) = scene.get_component::<Wander>(id) else {
            continue;
        };
        let Some((mut transform, mut motion)) = kinematics(scene, id) else {
            continue;
        };

        let point = jitter_point(wander.point, wander.radius, wander.jitter * dt, rng);
        if let Ok(slot) = scene.get_component_mut::<Wander>(id) {
            slot.point = point;
        }

        let heading = unit_or(transform.heading, Vec2::X);
        let local = point + Vec2::new(wander.distance, 0.0);
        let target = to_world(local, transform.position, heading, Vec2::ONE);
        let centre = transform.position + heading * wander.distance;

        if let Some(force) = seek_force(transform.position, target, &motion) {
            steer(&mut motion, &mut transform, force, dt, EPSILON);
            commit(scene, id, transform, motion);
        }

        place_companion(scene, wander.forward, centre, Some(wander.radius));
        place_companion(scene, wander.target, target, None);
    }
}

fn place_companion(scene: &mut Scene, companion: EntityId, position: Vec2, radius: Option<f32>) {
    if !companion.is_valid() {
        return;
    }
    match scene.get_component_mut::<Transform>(companion) {
        Ok(transform) => transform.position = position,
        Err(err) => {
            debug!(companion = %companion, %err, "wander companion not placed");
            return;
        }
    }
    if let (Some(radius), Ok(circle)) = (radius, scene.get_component_mut::<Circle>(companion)) {
        circle.radius = radius;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn agent() -> (Transform, Move) {
        (
            Transform::new(Vec2::ZERO, Vec2::X, Vec2::ONE),
            Move::new(Vec2::ZERO, 1.0, 150.0, 85.0),
        )
    }

    #[test]
    fn test_steer_clamps_force() {
        let (mut transform, mut motion) = agent();
        let step = steer(&mut motion, &mut transform, Vec2::new(150.0, 0.0), 0.016, EPSILON);
        assert_eq!(step, Step::Moved);
        assert!((motion.velocity.x - 1.36).abs() < 1e-5);
        assert!((transform.position.x - 0.02176).abs() < 1e-6);
        assert_eq!(transform.heading, Vec2::X);
    }

    #[test]
    fn test_steer_clamps_speed() {
        let (mut transform, mut motion) = agent();
        motion.velocity = Vec2::new(0.0, 149.0);
        steer(&mut motion, &mut transform, Vec2::new(0.0, 85.0), 1.0, EPSILON);
        assert!((motion.velocity.length() - 150.0).abs() < 1e-3);
    }

    #[test]
    fn test_steer_near_stop_keeps_pose() {
        let (mut transform, mut motion) = agent();
        transform.heading = Vec2::Y;
        let step = steer(&mut motion, &mut transform, Vec2::ZERO, 0.016, EPSILON);
        assert_eq!(step, Step::Stopped);
        assert_eq!(transform.position, Vec2::ZERO);
        assert_eq!(transform.heading, Vec2::Y);
    }

    #[test]
    fn test_steer_zero_mass_skipped() {
        let (mut transform, mut motion) = agent();
        motion.mass = 0.0;
        let before = (transform, motion);
        assert_eq!(
            steer(&mut motion, &mut transform, Vec2::X, 0.016, EPSILON),
            Step::Skipped
        );
        assert_eq!((transform, motion), before);
    }

    #[test]
    fn test_flee_force_cutoff() {
        let (_, motion) = agent();
        assert_eq!(
            flee_force(Vec2::ZERO, Vec2::new(200.0, 0.0), 100.0, &motion),
            Some(Vec2::ZERO)
        );
        let force = flee_force(Vec2::ZERO, Vec2::new(50.0, 0.0), 100.0, &motion).unwrap();
        assert_eq!(force, Vec2::new(-150.0, 0.0));
        assert!(flee_force(Vec2::ZERO, Vec2::ZERO, 100.0, &motion).is_none());
    }

    #[test]
    fn test_arrive_force_slows_near_target() {
        let (_, motion) = agent();
        let far = arrive_force(Vec2::ZERO, Vec2::new(1000.0, 0.0), 2.0, &motion);
        assert_eq!(far, Vec2::new(150.0, 0.0));
        let near = arrive_force(Vec2::ZERO, Vec2::new(10.0, 0.0), 2.0, &motion);
        assert_eq!(near, Vec2::new(5.0, 0.0));
        assert_eq!(arrive_force(Vec2::ZERO, Vec2::ZERO, 2.0, &motion), Vec2::ZERO);
    }

    #[test]
    fn test_pursuit_target_direct_when_aligned_ahead() {
        let (pursuer, pursuer_motion) = agent();
        let evader = Transform::new(Vec2::new(100.0, 0.0), Vec2::X, Vec2::ONE);
        let evader_motion = Move::new(Vec2::new(50.0, 0.0), 1.0, 100.0, 50.0);
        assert_eq!(
            pursuit_target(&pursuer, &pursuer_motion, &evader, &evader_motion),
            Some(evader.position)
        );
    }

    #[test]
    fn test_pursuit_target_predicts_when_crossing() {
        let (pursuer, pursuer_motion) = agent();
        // evader ahead but moving perpendicular
        let evader = Transform::new(Vec2::new(100.0, 0.0), Vec2::Y, Vec2::ONE);
        let evader_motion = Move::new(Vec2::new(0.0, 50.0), 1.0, 100.0, 50.0);
        let target = pursuit_target(&pursuer, &pursuer_motion, &evader, &evader_motion).unwrap();
        // ahead = 1 so no turnaround; lookahead = 100 / 250
        assert!((target - Vec2::new(100.0, 20.0)).length() < 1e-4);
    }

    #[test]
    fn test_pursuit_target_turnaround_penalty() {
        let (mut pursuer, pursuer_motion) = agent();
        pursuer.heading = Vec2::NEG_X;
        let evader = Transform::new(Vec2::new(100.0, 0.0), Vec2::Y, Vec2::ONE);
        let evader_motion = Move::new(Vec2::new(0.0, 50.0), 1.0, 100.0, 50.0);
        let target = pursuit_target(&pursuer, &pursuer_motion, &evader, &evader_motion).unwrap();
        // ahead = -1: turnaround = (-1 - 1) * -0.5 = 1, lookahead = 0.4 + 1
        assert!((target - Vec2::new(100.0, 70.0)).length() < 1e-4);
    }

    #[test]
    fn test_evade_target_has_no_turnaround() {
        let (evader, evader_motion) = agent();
        let pursuer = Transform::new(Vec2::new(0.0, 250.0), Vec2::NEG_Y, Vec2::ONE);
        let pursuer_motion = Move::new(Vec2::new(0.0, -100.0), 1.0, 100.0, 50.0);
        let target = evade_target(&evader, &evader_motion, &pursuer, &pursuer_motion);
        // lookahead = 250 / 250
        assert!((target - Vec2::new(0.0, 150.0)).length() < 1e-4);
    }
}
