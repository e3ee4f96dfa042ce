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

//! Print surfaces the logger writes to
//!
//! A surface exposes a set of sinks. Only [`Sink::Generic`] is mandatory;
//! the others are checked with [`PrintSurface::supports`] and the logger
//! falls back along a fixed chain when a sink is missing.

pub mod console;
pub mod facade;
pub mod factory;
pub mod memory;
pub mod silent;
pub mod types;

pub use console::ConsoleSurface;
pub use facade::LogFacadeSurface;
pub use factory::SurfaceFactory;
pub use memory::{MemorySurface, Record};
pub use silent::SilentSurface;
pub use types::{Sink, SurfaceKind};

use serde_json::Value;

/// Core trait for print surface implementations
///
/// Implementations include:
/// - `ConsoleSurface` - stdout/stderr, optionally coloured
/// - `LogFacadeSurface` - forwards to the `log` crate
/// - `MemorySurface` - records every write for later inspection
/// - `SilentSurface` - discards everything (Null Object pattern)
pub trait PrintSurface: Send + Sync {
    /// Whether this surface has the sink. The generic sink must always be
    /// supported.
    fn supports(&self, sink: Sink) -> bool {
        sink == Sink::Generic
    }

    /// Writes one call's positional arguments to the given sink.
    ///
    /// Callers only pass sinks for which `supports` returned true, or
    /// `Sink::Generic`.
    fn write(&self, sink: Sink, args: &[Value]);
}

/// Joins arguments with single spaces. Strings are written raw, everything
/// else as compact JSON.
pub fn render_args(args: &[Value]) -> String {
    args.iter()
        .map(|arg| match arg {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::Mutex;

    /// Surface that only implements the mandatory sink
    struct GenericOnly {
        lines: Mutex<Vec<String>>,
    }

    impl PrintSurface for GenericOnly {
        fn write(&self, sink: Sink, args: &[Value]) {
            self.lines
                .lock()
                .unwrap()
                .push(format!("{sink}: {}", render_args(args)));
        }
    }

    #[test]
    fn test_default_supports_only_generic() {
        let surface = GenericOnly {
            lines: Mutex::new(Vec::new()),
        };
        assert!(surface.supports(Sink::Generic));
        for sink in [Sink::Fatal, Sink::Error, Sink::Info, Sink::Debug, Sink::Trace] {
            assert!(!surface.supports(sink));
        }
    }

    #[test]
    fn test_write_through_trait_object() {
        let surface = GenericOnly {
            lines: Mutex::new(Vec::new()),
        };

        let dyn_surface: &dyn PrintSurface = &surface;
        let sink = Sink::ALL
            .into_iter()
            .find(|sink| dyn_surface.supports(*sink))
            .unwrap();
        dyn_surface.write(sink, &[json!("header"), json!("body")]);

        assert_eq!(
            *surface.lines.lock().unwrap(),
            vec!["generic: header body".to_string()]
        );
    }

    #[test]
    fn test_render_args() {
        let args = vec![
            json!("2026-01-01T00:00:00.000Z - (app)[I]"),
            json!("started"),
            json!(42),
            json!({"port": 8080}),
            json!(null),
        ];
        assert_eq!(
            render_args(&args),
            r#"2026-01-01T00:00:00.000Z - (app)[I] started 42 {"port":8080} null"#
        );
        assert_eq!(render_args(&[]), "");
    }
}
