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

use glam::Vec2;
use tracing::warn;

use crate::config::AppConfig;
use crate::error::Result;
use crate::scene::Scene;
use crate::schedule::Schedule;
use crate::system::{
    ArriveSystem, BoxedSystem, EvadeSystem, FleeSystem, FollowTargetSystem, PursuitSystem,
    SeekSystem, TickContext, WanderSystem, WraparoundSystem,
};

/// Main application entry point: one scene, one schedule, bounded ticks.
pub struct App {
    pub scene: Scene,
    pub schedule: Schedule,
    config: AppConfig,
    ticks: u64,
}

impl App {
    /// Create new application
    pub fn new() -> Self {
        Self {
            scene: Scene::new(),
            schedule: Schedule::new(),
            config: AppConfig::default(),
            ticks: 0,
        }
    }

    pub fn from_config(config: AppConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            scene: Scene::with_config(config.scene)?,
            schedule: Schedule::new(),
            config,
            ticks: 0,
        })
    }

    /// Add a system
    pub fn add_system(&mut self, system: BoxedSystem) -> &mut Self {
        self.schedule.add_system(system);
        self
    }

    /// Install the stock tick: crosshair follow, optional wraparound, then
    /// seek, flee, arrive, pursuit, evade and wander.
    pub fn with_default_systems(mut self) -> Self {
        let seed = self.config.seed;
        self.add_system(Box::new(FollowTargetSystem));
        if let Some(bounds) = self.config.bounds {
            self.add_system(Box::new(WraparoundSystem::new(bounds)));
        }
        self.add_system(Box::new(SeekSystem))
            .add_system(Box::new(FleeSystem))
            .add_system(Box::new(ArriveSystem))
            .add_system(Box::new(PursuitSystem))
            .add_system(Box::new(EvadeSystem))
            .add_system(Box::new(WanderSystem::new(seed)));
        self
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Number of completed ticks.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Run one tick with `dt` bounded to `[0, max_dt]`.
    pub fn update(&mut self, dt: f32, target: Vec2) -> Result<()> {
        let dt = self.bound_dt(dt);
        self.schedule
            .run(&mut self.scene, &TickContext::new(dt, target))?;
        self.ticks += 1;
        Ok(())
    }

    fn bound_dt(&self, dt: f32) -> f32 {
        if !dt.is_finite() || dt < 0.0 {
            warn!(dt, "non-finite or negative dt, running a zero-length tick");
            return 0.0;
        }
        if dt > self.config.max_dt {
            warn!(dt, max_dt = self.config.max_dt, "dt exceeds bound, clamping");
            return self.config.max_dt;
        }
        dt
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
