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


//! # Profiling Guide
//!
//! Every behavior and every scheduled system opens an `info_span!` when the
//! `profiling` feature is enabled:
//!
//! ```toml
//! [dependencies]
//! steering_ecs = { version = "0.1", features = ["profiling"] }
//! ```
//!
//! Install a subscriber before the first tick:
//!
//! ```ignore
//! use steering_ecs::profiling;
//!
//! profiling::init_profiling("steering_ecs=debug")?;
//! // or write JSON lines to daily files under ./logs; keep the guard
//! // alive until exit
//! let _guard = profiling::init_profiling_to_file("logs", "steering.json")?;
//! ```
//!
//! ## Performance Tips
//!
//! 1. Profile in release mode for accurate metrics
//! 2. Use `RUST_LOG=steering_ecs=trace` to see component registration
//! 3. Stale pursuit/evade partners are reported at `debug`

#[cfg(feature = "profiling")]
pub use enabled::*;

#[cfg(feature = "profiling")]
mod enabled {
    use std::path::Path;

    use tracing_appender::non_blocking::WorkerGuard;
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    use crate::error::{EcsError, Result};

    fn filter(default: &str) -> EnvFilter {
        EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(default))
            .unwrap_or_else(|_| EnvFilter::new("info"))
    }

    /// Log spans and events to stderr. `RUST_LOG` overrides `default_filter`.
    pub fn init_profiling(default_filter: &str) -> Result<()> {
        tracing_subscriber::registry()
            .with(filter(default_filter))
            .with(fmt::layer().with_target(true))
            .try_init()
            .map_err(|e| EcsError::ConfigError(format!("tracing subscriber: {e}")))
    }

    /// Write JSON span/event lines to a daily-rolling file `dir/prefix.DATE`
    /// through a background writer.
    ///
    /// Dropping the returned guard flushes the writer.
    pub fn init_profiling_to_file(dir: impl AsRef<Path>, prefix: &str) -> Result<WorkerGuard> {
        std::fs::create_dir_all(dir.as_ref())?;
        let appender = tracing_appender::rolling::daily(dir, prefix);
        let (writer, guard) = tracing_appender::non_blocking(appender);
        tracing_subscriber::registry()
            .with(filter("trace"))
            .with(fmt::layer().json().with_ansi(false).with_writer(writer))
            .try_init()
            .map_err(|e| EcsError::ConfigError(format!("tracing subscriber: {e}")))?;
        Ok(guard)
    }
}
