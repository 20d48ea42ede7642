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

//! Steering behaviors and the components they operate on.

pub mod behaviors;
pub mod components;
pub mod math;
pub mod update;

pub use behaviors::{arrive, evade, flee, pursuit, seek, steer, wander, Step};
pub use components::{
    Arrive, Circle, Color, Crosshair, Evade, Flee, Move, Pursuit, Seek, Transform, Triangle,
    Wander,
};
pub use math::{to_world, truncate};
pub use update::{follow_target, wraparound};

/// Lengths below this are treated as zero.
pub const EPSILON: f32 = f32::EPSILON;

/// Speed below which an arriving agent counts as at rest.
pub const ARRIVE_STOP_SPEED: f32 = 0.1;

/// Heading dot product above which a pursuer seeks the evader directly.
pub const PURSUIT_ALIGNMENT: f32 = 0.95;

/// Scales the pursuit lookahead penalty for facing away from the evader.
pub const TURNAROUND_COEFFICIENT: f32 = -0.5;
