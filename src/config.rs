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

//! Scene and application configuration
//!
//! Both structs deserialize from JSON with every field optional; missing
//! fields fall back to [`Default`].

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::entity::INVALID_INDEX;
use crate::error::{EcsError, Result};

/// Default entity ceiling
pub const DEFAULT_MAX_ENTITIES: usize = 1_000_000;

/// Default upper bound on a single tick's elapsed time, in seconds
pub const DEFAULT_MAX_DT: f32 = 0.05;

/// Bounds baked into a scene at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub max_entities: usize,
}

impl SceneConfig {
    pub fn with_max_entities(max_entities: usize) -> Self {
        Self { max_entities }
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_entities == 0 {
            return Err(EcsError::ConfigError(
                "max_entities must be at least 1".to_string(),
            ));
        }
        // the sentinel index must stay unaddressable
        if self.max_entities > INVALID_INDEX as usize {
            return Err(EcsError::ConfigError(format!(
                "max_entities {} exceeds the addressable limit {}",
                self.max_entities, INVALID_INDEX
            )));
        }
        Ok(())
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            max_entities: DEFAULT_MAX_ENTITIES,
        }
    }
}

/// Driver settings: scene bounds, dt ceiling, RNG seed and optional
/// wraparound area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub scene: SceneConfig,
    pub max_dt: f32,
    pub seed: u64,
    pub bounds: Option<Vec2>,
}

impl AppConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: AppConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            EcsError::ConfigError(format!("Failed to read {}: {e}", path.display()))
        })?;
        Self::from_json_str(&text)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        self.scene.validate()?;
        if !self.max_dt.is_finite() || self.max_dt <= 0.0 {
            return Err(EcsError::ConfigError(format!(
                "max_dt must be positive and finite, got {}",
                self.max_dt
            )));
        }
        if let Some(bounds) = self.bounds {
            if !bounds.is_finite() || bounds.x <= 0.0 || bounds.y <= 0.0 {
                return Err(EcsError::ConfigError(format!(
                    "bounds must be positive, got {bounds}"
                )));
            }
        }
        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            scene: SceneConfig::default(),
            max_dt: DEFAULT_MAX_DT,
            seed: 0,
            bounds: None,
        }
    }
}
