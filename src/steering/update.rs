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

//! Non-steering per-tick updates.

use glam::Vec2;

use super::components::{Crosshair, Transform};
use crate::query::QueryState;
use crate::scene::Scene;

/// Move every crosshair to `target`.
pub fn follow_target(target: Vec2, scene: &mut Scene) {
    let mut cursor = QueryState::<(Crosshair, Transform)>::new(scene).cursor();
    while let Some(id) = cursor.advance(scene) {
        if let Ok(transform) = scene.get_component_mut::<Transform>(id) {
            transform.position = target;
        }
    }
}

/// Wrap every transform back into `[0, bounds]` on each axis: past the far
/// edge restarts at 0, below 0 restarts at the far edge.
pub fn wraparound(bounds: Vec2, scene: &mut Scene) {
    let mut cursor = QueryState::<(Transform,)>::new(scene).cursor();
    while let Some(id) = cursor.advance(scene) {
        if let Ok(transform) = scene.get_component_mut::<Transform>(id) {
            transform.position.x = wrap(transform.position.x, bounds.x);
            transform.position.y = wrap(transform.position.y, bounds.y);
        }
    }
}

fn wrap(value: f32, max: f32) -> f32 {
    if value > max {
        0.0
    } else if value < 0.0 {
        max
    } else {
        value
    }
}
