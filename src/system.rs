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

//! System trait and the built-in steering systems

use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::Result;
use crate::scene::Scene;
use crate::steering;

/// Per-tick inputs handed to every system.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickContext {
    /// Elapsed time in seconds, already bounded by the driver
    pub dt: f32,
    /// Point that seek/flee/arrive steer relative to
    pub target: Vec2,
}

impl TickContext {
    pub fn new(dt: f32, target: Vec2) -> Self {
        Self { dt, target }
    }
}

/// System trait
pub trait System: Send {
    /// Get system name
    fn name(&self) -> &'static str;

    /// Run one tick against the scene
    fn run(&mut self, scene: &mut Scene, tick: &TickContext) -> Result<()>;
}

/// Boxed system
pub type BoxedSystem = Box<dyn System>;

macro_rules! targeted_system {
    ($(#[$meta:meta])* $name:ident, $label:literal, $behavior:path) => {
        $(#[$meta])*
        #[derive(Debug, Default, Clone, Copy)]
        pub struct $name;

        impl System for $name {
            fn name(&self) -> &'static str {
                $label
            }

            fn run(&mut self, scene: &mut Scene, tick: &TickContext) -> Result<()> {
                $behavior(tick.target, scene, tick.dt);
                Ok(())
            }
        }
    };
}

targeted_system!(
    /// Runs [`steering::seek`] toward the tick target.
    SeekSystem,
    "seek",
    steering::seek
);
targeted_system!(
    /// Runs [`steering::flee`] from the tick target.
    FleeSystem,
    "flee",
    steering::flee
);
targeted_system!(
    /// Runs [`steering::arrive`] at the tick target.
    ArriveSystem,
    "arrive",
    steering::arrive
);

#[derive(Debug, Default, Clone, Copy)]
pub struct PursuitSystem;

impl System for PursuitSystem {
    fn name(&self) -> &'static str {
        "pursuit"
    }

    fn run(&mut self, scene: &mut Scene, tick: &TickContext) -> Result<()> {
        steering::pursuit(scene, tick.dt);
        Ok(())
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct EvadeSystem;

impl System for EvadeSystem {
    fn name(&self) -> &'static str {
        "evade"
    }

    fn run(&mut self, scene: &mut Scene, tick: &TickContext) -> Result<()> {
        steering::evade(scene, tick.dt);
        Ok(())
    }
}

/// Runs [`steering::wander`] with its own seeded RNG so runs are repeatable.
pub struct WanderSystem {
    rng: StdRng,
}

impl WanderSystem {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl System for WanderSystem {
    fn name(&self) -> &'static str {
        "wander"
    }

    fn run(&mut self, scene: &mut Scene, tick: &TickContext) -> Result<()> {
        steering::wander(scene, &mut self.rng, tick.dt);
        Ok(())
    }
}

/// Keeps crosshairs on the tick target.
#[derive(Debug, Default, Clone, Copy)]
pub struct FollowTargetSystem;

impl System for FollowTargetSystem {
    fn name(&self) -> &'static str {
        "follow_target"
    }

    fn run(&mut self, scene: &mut Scene, tick: &TickContext) -> Result<()> {
        steering::follow_target(tick.target, scene);
        Ok(())
    }
}

/// Wraps positions into a fixed area.
#[derive(Debug, Clone, Copy)]
pub struct WraparoundSystem {
    pub bounds: Vec2,
}

impl WraparoundSystem {
    pub fn new(bounds: Vec2) -> Self {
        Self { bounds }
    }
}

impl System for WraparoundSystem {
    fn name(&self) -> &'static str {
        "wraparound"
    }

    fn run(&mut self, scene: &mut Scene, _tick: &TickContext) -> Result<()> {
        steering::wraparound(self.bounds, scene);
        Ok(())
    }
}
