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

//! Error types

use std::fmt;

use crate::entity::EntityId;

/// ECS error type
#[derive(Debug, Clone, PartialEq)]
pub enum EcsError {
    /// A fixed capacity bound would be exceeded
    CapacityExceeded(CapacityError),

    /// Handle's version no longer matches the slot's current occupant
    StaleHandle(EntityId),

    /// Handle carries the sentinel index or addresses no slot
    InvalidEntity(EntityId),

    /// Entity does not carry the requested component type
    MissingComponent {
        entity: EntityId,
        component: &'static str,
    },

    /// Configuration could not be loaded or is out of range
    ConfigError(String),
}

/// Which fixed bound was hit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapacityError {
    /// Entity table is full
    Entities { capacity: usize },
    /// Capability mask has no free bit for another component type
    ComponentTypes { capacity: usize },
}

impl fmt::Display for CapacityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CapacityError::Entities { capacity } => {
                write!(f, "entity capacity exhausted (max {capacity})")
            }
            CapacityError::ComponentTypes { capacity } => {
                write!(f, "component type capacity exhausted (max {capacity})")
            }
        }
    }
}

impl fmt::Display for EcsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EcsError::CapacityExceeded(err) => write!(f, "Capacity exceeded: {err}"),
            EcsError::StaleHandle(id) => write!(f, "Stale entity handle {id}"),
            EcsError::InvalidEntity(id) => write!(f, "Invalid entity ID {id}"),
            EcsError::MissingComponent { entity, component } => {
                write!(f, "Entity {entity} has no {component} component")
            }
            EcsError::ConfigError(msg) => write!(f, "Config error: {msg}"),
        }
    }
}

impl std::error::Error for EcsError {}

impl From<CapacityError> for EcsError {
    fn from(err: CapacityError) -> Self {
        EcsError::CapacityExceeded(err)
    }
}

impl From<serde_json::Error> for EcsError {
    fn from(err: serde_json::Error) -> Self {
        EcsError::ConfigError(err.to_string())
    }
}

impl From<std::io::Error> for EcsError {
    fn from(err: std::io::Error) -> Self {
        EcsError::ConfigError(err.to_string())
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, EcsError>;
