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

//! Motion, presentation and behavior-parameter components.

use glam::Vec2;

use crate::entity::EntityId;

/// Placement of an entity in the plane.
///
/// `heading` is both the facing direction and the rotation of the local
/// frame; behaviors keep it unit length.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub position: Vec2,
    pub heading: Vec2,
    pub scale: Vec2,
}

impl Transform {
    pub fn new(position: Vec2, heading: Vec2, scale: Vec2) -> Self {
        Self {
            position,
            heading,
            scale,
        }
    }

    pub fn from_position(position: Vec2) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            heading: Vec2::X,
            scale: Vec2::ONE,
        }
    }
}

/// Point-mass motion state with per-tick ceilings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Move {
    pub velocity: Vec2,
    pub mass: f32,
    /// Ceiling on velocity magnitude
    pub max_speed: f32,
    /// Ceiling on steering force magnitude
    pub max_force: f32,
}

impl Move {
    pub fn new(velocity: Vec2, mass: f32, max_speed: f32, max_force: f32) -> Self {
        Self {
            velocity,
            mass,
            max_speed,
            max_force,
        }
    }
}

impl Default for Move {
    fn default() -> Self {
        Self {
            velocity: Vec2::ZERO,
            mass: 1.0,
            max_speed: 150.0,
            max_force: 85.0,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0, 255);
    pub const RED: Color = Color::new(255, 0, 0, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

macro_rules! shape_component {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq)]
        pub struct $name {
            pub radius: f32,
        }

        impl $name {
            pub fn new(radius: f32) -> Self {
                Self { radius }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self { radius: 1.0 }
            }
        }
    };
}

shape_component!(
    /// Agent outline pointing along the heading.
    Triangle
);
shape_component!(
    /// Target marker.
    Crosshair
);
shape_component!(Circle);

/// Marker: steer toward the tick's target point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Seek;

/// Steer away from the tick's target point while it is within `radius`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Flee {
    pub radius: f32,
}

impl Flee {
    pub fn new(radius: f32) -> Self {
        Self { radius }
    }
}

impl Default for Flee {
    fn default() -> Self {
        Self { radius: 100.0 }
    }
}

/// Seek that slows down on approach; larger `deceleration` arrives gentler.
///
/// The approach only closes monotonically once `deceleration >= 4 * mass`.
/// Below that (including the default of 2 for a unit mass) the agent
/// overshoots slightly and oscillates before it settles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Arrive {
    pub deceleration: f32,
}

impl Arrive {
    pub fn new(deceleration: f32) -> Self {
        Self { deceleration }
    }
}

impl Default for Arrive {
    fn default() -> Self {
        Self { deceleration: 2.0 }
    }
}

/// Intercept the entity `evader`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Pursuit {
    pub evader: EntityId,
}

impl Pursuit {
    pub fn new(evader: EntityId) -> Self {
        Self { evader }
    }
}

/// Flee from where `pursuer` is predicted to be.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Evade {
    pub pursuer: EntityId,
    pub radius: f32,
}

impl Evade {
    pub fn new(pursuer: EntityId, radius: f32) -> Self {
        Self { pursuer, radius }
    }
}

impl Default for Evade {
    fn default() -> Self {
        Self {
            pursuer: EntityId::INVALID,
            radius: 100.0,
        }
    }
}

/// Random drift driven by a point on a circle projected ahead of the agent.
///
/// `target` and `forward` name companion entities that only mirror the
/// wander target and circle centre for display.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Wander {
    pub target: EntityId,
    pub forward: EntityId,
    /// Point on the wander circle, in the circle's local frame
    pub point: Vec2,
    pub radius: f32,
    pub distance: f32,
    pub jitter: f32,
}

impl Wander {
    pub fn new(target: EntityId, forward: EntityId, radius: f32, distance: f32, jitter: f32) -> Self {
        Self {
            target,
            forward,
            point: Vec2::new(radius, 0.0),
            radius,
            distance,
            jitter,
        }
    }
}

impl Default for Wander {
    fn default() -> Self {
        Self::new(EntityId::INVALID, EntityId::INVALID, 25.0, 100.0, 5.0)
    }
}
