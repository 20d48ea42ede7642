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


//! Steering ECS - generational entity store with steering behaviors
//!
//! A fixed-capacity scene of versioned entity handles, per-type component
//! pools selected by bitmask queries, and the classic autonomous-agent
//! behaviors (seek, flee, arrive, pursuit, evade, wander) run as systems.

pub mod app;
pub mod bitset;
pub mod component;
pub mod config;
pub mod entity;
pub mod error;
pub mod prelude;
pub mod profiling;
pub mod query;
pub mod scene;
pub mod schedule;
pub mod steering;
pub mod storage;
pub mod system;

pub use app::*;
pub use bitset::*;
pub use component::*;
pub use config::*;
pub use entity::*;
pub use error::*;
pub use query::*;
pub use scene::*;
pub use schedule::*;
pub use storage::*;
pub use system::*;

pub use glam::Vec2;
