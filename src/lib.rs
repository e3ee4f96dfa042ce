// Copyright 2025 dentsusoken
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

//! Tagged, leveled logging facade.
//!
//! ```no_run
//! let mut log = taglog::create(Some("worker"));
//! log.set_level("debug");
//! log.debug("connected");
//! assert!(log.trace("not shown").is_empty());
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod level;
pub mod logger;
pub mod logging;
pub mod surface;

pub use level::{LevelInput, Severity, resolve_level};
pub use logger::LevelLogger;
pub use surface::{PrintSurface, Sink};

/// Creates a console logger for `tag` at the default Info threshold.
pub fn create(tag: Option<&str>) -> LevelLogger {
    LevelLogger::new(tag)
}
