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

//! Vector helpers shared by the behaviors.

use glam::Vec2;
use rand::Rng;

use super::EPSILON;

/// Rescale `v` to exactly `max` if it is longer, keeping its direction.
#[inline]
pub fn truncate(v: Vec2, max: f32) -> Vec2 {
    v.clamp_length_max(max.max(0.0))
}

/// Map a point from an entity's local frame into world space: scale, rotate
/// by the heading angle, then translate by the position.
pub fn to_world(local: Vec2, position: Vec2, heading: Vec2, scale: Vec2) -> Vec2 {
    let heading = unit_or(heading, Vec2::X);
    position + heading.rotate(local * scale)
}

/// `v` normalized, or `fallback` when `v` is too short to divide by.
#[inline]
pub fn unit_or(v: Vec2, fallback: Vec2) -> Vec2 {
    let length = v.length();
    if length > EPSILON {
        v / length
    } else {
        fallback
    }
}

/// Perturb `point` on each axis by up to `amount` and project it back onto
/// the circle of `radius`.
pub fn jitter_point<R: Rng + ?Sized>(point: Vec2, radius: f32, amount: f32, rng: &mut R) -> Vec2 {
    let jittered = point
        + Vec2::new(
            rng.gen_range(-1.0f32..=1.0) * amount,
            rng.gen_range(-1.0f32..=1.0) * amount,
        );
    let previous = unit_or(point, Vec2::X);
    unit_or(jittered, previous) * radius
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn assert_near(actual: Vec2, expected: Vec2) {
        assert!(
            (actual - expected).length() < 1e-4,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate(Vec2::new(150.0, 0.0), 85.0), Vec2::new(85.0, 0.0));
        assert_eq!(truncate(Vec2::new(3.0, 4.0), 10.0), Vec2::new(3.0, 4.0));
        let clamped = truncate(Vec2::new(3.0, 4.0), 1.0);
        assert!((clamped.length() - 1.0).abs() < 1e-6);
        assert_near(clamped, Vec2::new(0.6, 0.8));
    }

    #[test]
    fn test_to_world_identity() {
        let local = Vec2::new(10.0, 20.0);
        assert_near(to_world(local, Vec2::ZERO, Vec2::X, Vec2::ONE), local);
    }

    #[test]
    fn test_to_world_translation() {
        let local = Vec2::new(10.0, 20.0);
        let position = Vec2::new(100.0, 200.0);
        assert_near(
            to_world(local, position, Vec2::X, Vec2::ONE),
            local + position,
        );
    }

    #[test]
    fn test_to_world_scale() {
        let local = Vec2::new(10.0, 20.0);
        let scale = Vec2::splat(2.0);
        assert_near(to_world(local, Vec2::ZERO, Vec2::X, scale), local * scale);
    }

    #[test]
    fn test_to_world_rotation() {
        // heading +Y is a quarter turn counter-clockwise
        assert_near(
            to_world(Vec2::X, Vec2::ZERO, Vec2::Y, Vec2::ONE),
            Vec2::Y,
        );
    }

    #[test]
    fn test_to_world_combined() {
        let local = Vec2::new(10.0, 20.0);
        let position = Vec2::new(100.0, 200.0);
        let scale = Vec2::splat(2.0);
        let expected = position + scale * Vec2::new(-local.y, local.x);
        assert_near(to_world(local, position, Vec2::Y, scale), expected);
    }

    #[test]
    fn test_jitter_stays_on_circle() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut point = Vec2::new(25.0, 0.0);
        for _ in 0..1000 {
            point = jitter_point(point, 25.0, 5.0 * 0.016, &mut rng);
            assert!((point.length() - 25.0).abs() < 1e-3);
        }
    }

    #[test]
    fn test_jitter_from_origin_falls_back() {
        let mut rng = StdRng::seed_from_u64(1);
        let point = jitter_point(Vec2::ZERO, 10.0, 0.0, &mut rng);
        assert_near(point, Vec2::new(10.0, 0.0));
    }
}
