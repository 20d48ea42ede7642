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

//! Ordered system schedule
//!
//! Systems run sequentially in insertion order; one call to
//! [`Schedule::run`] is one tick.

#[cfg(feature = "profiling")]
use tracing::info_span;

use crate::error::Result;
use crate::scene::Scene;
use crate::system::{BoxedSystem, TickContext};

#[derive(Default)]
pub struct Schedule {
    systems: Vec<BoxedSystem>,
}

impl Schedule {
    /// Create an empty schedule
    pub fn new() -> Self {
        Self::default()
    }

    /// Convenience constructor for chaining
    pub fn with_system(mut self, system: BoxedSystem) -> Self {
        self.add_system(system);
        self
    }

    pub fn add_system(&mut self, system: BoxedSystem) {
        self.systems.push(system);
    }

    pub fn len(&self) -> usize {
        self.systems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.systems.is_empty()
    }

    /// System names in execution order.
    pub fn system_names(&self) -> Vec<&'static str> {
        self.systems.iter().map(|system| system.name()).collect()
    }

    /// Run every system once. Stops at the first error.
    pub fn run(&mut self, scene: &mut Scene, tick: &TickContext) -> Result<()> {
        for system in &mut self.systems {
            #[cfg(feature = "profiling")]
            let _span = info_span!("system.run", name = system.name(), dt = tick.dt).entered();

            system.run(scene, tick)?;
        }
        Ok(())
    }
}
