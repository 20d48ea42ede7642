//! Convenient re-exports of commonly used types.
//!
//! The prelude can be imported with:
//! ```
//! use steering_ecs::prelude::*;
//! ```

pub use crate::app::App;
pub use crate::component::Component;
pub use crate::config::{AppConfig, SceneConfig};
pub use crate::entity::EntityId;
pub use crate::error::{CapacityError, EcsError, Result};
pub use crate::query::{Query, QueryCursor, QueryState};
pub use crate::scene::{Scene, SceneBuilder};
pub use crate::schedule::Schedule;
pub use crate::steering::{
    Arrive, Circle, Color, Crosshair, Evade, Flee, Move, Pursuit, Seek, Transform, Triangle,
    Wander,
};
pub use crate::system::{BoxedSystem, System, TickContext};
pub use glam::Vec2;
