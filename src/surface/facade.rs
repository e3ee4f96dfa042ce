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

use crate::surface::{PrintSurface, Sink, render_args};
use log::Level;
use serde_json::Value;

/// Kept apart from the crate's own diagnostics, which log under `taglog`'s
/// module paths.
pub const DEFAULT_TARGET: &str = "taglog::out";

/// Forwards every write to the `log` crate, so the host's logger
/// (env_logger in the `taglog` binary) decides the final output.
pub struct LogFacadeSurface {
    target: String,
}

impl LogFacadeSurface {
    pub fn new() -> Self {
        Self::with_target(DEFAULT_TARGET)
    }

    pub fn with_target(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
        }
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    /// `log` has no fatal level; fatal records are emitted as errors.
    pub fn level_for(sink: Sink) -> Level {
        match sink {
            Sink::Fatal | Sink::Error => Level::Error,
            Sink::Info | Sink::Generic => Level::Info,
            Sink::Debug => Level::Debug,
            Sink::Trace => Level::Trace,
        }
    }
}

impl Default for LogFacadeSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl PrintSurface for LogFacadeSurface {
    fn supports(&self, _sink: Sink) -> bool {
        true
    }

    fn write(&self, sink: Sink, args: &[Value]) {
        let line = render_args(args);
        log::log!(target: self.target.as_str(), Self::level_for(sink), "{line}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_mapping() {
        assert_eq!(LogFacadeSurface::level_for(Sink::Fatal), Level::Error);
        assert_eq!(LogFacadeSurface::level_for(Sink::Error), Level::Error);
        assert_eq!(LogFacadeSurface::level_for(Sink::Info), Level::Info);
        assert_eq!(LogFacadeSurface::level_for(Sink::Generic), Level::Info);
        assert_eq!(LogFacadeSurface::level_for(Sink::Debug), Level::Debug);
        assert_eq!(LogFacadeSurface::level_for(Sink::Trace), Level::Trace);
    }

    #[test]
    fn test_target() {
        assert_eq!(LogFacadeSurface::new().target(), "taglog::out");
        assert_eq!(LogFacadeSurface::with_target("app::db").target(), "app::db");
    }

    #[test]
    fn test_write_without_logger_installed() {
        // No global logger in unit tests; the write must still be harmless
        let surface = LogFacadeSurface::default();
        surface.write(Sink::Fatal, &[Value::from("hdr"), Value::from("msg")]);
    }
}
