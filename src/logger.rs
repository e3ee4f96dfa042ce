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

use crate::config::TaglogConfig;
use crate::level::{LevelInput, Severity, resolve_level};
use crate::surface::{ConsoleSurface, PrintSurface, Sink, SurfaceFactory};
use chrono::{SecondsFormat, Utc};
use log::{debug, trace};
use serde_json::Value;

/// How a normalized level code is routed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Route {
    /// Emits regardless of the threshold.
    Fatal,
    /// Emits only when the threshold reaches the level.
    Gated(Severity),
    /// Any other code. Emits regardless of the threshold.
    Unknown,
}

impl Route {
    fn for_code(code: Option<char>) -> Self {
        match code.and_then(Severity::from_code) {
            Some(Severity::Fatal) => Route::Fatal,
            Some(severity) => Route::Gated(severity),
            None => Route::Unknown,
        }
    }

    /// Sinks to try, first supported wins.
    fn sinks(self) -> &'static [Sink] {
        match self {
            Route::Fatal => &[Sink::Fatal, Sink::Error, Sink::Generic],
            Route::Gated(Severity::Fatal | Severity::Error | Severity::Warning) => {
                &[Sink::Error, Sink::Generic]
            }
            Route::Gated(Severity::Info) => &[Sink::Info, Sink::Generic],
            Route::Gated(Severity::Debug) => &[Sink::Debug, Sink::Generic],
            Route::Gated(Severity::Trace) => &[Sink::Trace, Sink::Generic],
            Route::Unknown => &[Sink::Generic],
        }
    }
}

/// Tagged logger with a severity threshold
///
/// Messages at or above the threshold's severity are written to the print
/// surface with a `"<timestamp> - (<tag>)[<CODE>]"` header. Every call
/// returns the arguments it wrote, or an empty vector when the threshold
/// suppressed it.
pub struct LevelLogger {
    tag: Option<String>,
    threshold: Severity,
    surface: Box<dyn PrintSurface>,
}

impl LevelLogger {
    /// Logger writing to the console with coloured headers.
    pub fn new(tag: Option<&str>) -> Self {
        Self::with_surface(tag, Box::new(ConsoleSurface::default()))
    }

    pub fn with_surface(tag: Option<&str>, surface: Box<dyn PrintSurface>) -> Self {
        Self {
            tag: tag.map(str::to_string),
            threshold: Severity::default(),
            surface,
        }
    }

    pub fn from_config(config: &TaglogConfig) -> Self {
        let surface = SurfaceFactory::create(config.surface, config.color);
        let mut logger = Self::with_surface(config.tag.as_deref(), surface);
        if let Some(level) = &config.level {
            logger.set_level(level.clone());
        }
        logger
    }

    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    /// Resolves `value` leniently (see [`resolve_level`]) and stores it as
    /// the threshold. Returns the stored level.
    pub fn set_level(&mut self, value: impl Into<LevelInput>) -> u8 {
        let input = value.into();
        self.threshold = resolve_level(input.clone());
        debug!(
            "Threshold for ({}) set to {} from {input:?}",
            self.tag().unwrap_or_default(),
            self.threshold
        );
        self.threshold.as_u8()
    }

    pub fn level(&self) -> u8 {
        self.threshold.as_u8()
    }

    pub fn severity(&self) -> Severity {
        self.threshold
    }

    pub fn level_code(&self) -> char {
        self.threshold.code()
    }

    /// Whether a call with `code` would write anything.
    pub fn enabled(&self, code: &str) -> bool {
        match Route::for_code(normalize_code(code)) {
            Route::Gated(severity) => self.threshold >= severity,
            Route::Fatal | Route::Unknown => true,
        }
    }

    /// Logs `message` under `code`. Only the first character of `code`
    /// counts, case-insensitively; unrecognised codes always emit through the
    /// generic sink.
    pub fn log(&self, message: impl Into<Value>, code: &str) -> Vec<Value> {
        let code = normalize_code(code);
        let route = Route::for_code(code);
        let mut args = build_args(self.tag(), code, message.into());

        if let Route::Gated(severity) = route
            && self.threshold < severity
        {
            trace!("Suppressed {severity} message below threshold {}", self.threshold);
            args.clear();
            return args;
        }

        let sink = route
            .sinks()
            .iter()
            .copied()
            .find(|sink| self.surface.supports(*sink))
            .unwrap_or(Sink::Generic);
        self.surface.write(sink, &args);
        args
    }

    /// Logs at Info.
    pub fn log_default(&self, message: impl Into<Value>) -> Vec<Value> {
        self.log(message, "i")
    }

    pub fn fatal(&self, message: impl Into<Value>) -> Vec<Value> {
        self.f(message)
    }

    pub fn error(&self, message: impl Into<Value>) -> Vec<Value> {
        self.e(message)
    }

    pub fn warn(&self, message: impl Into<Value>) -> Vec<Value> {
        self.w(message)
    }

    pub fn info(&self, message: impl Into<Value>) -> Vec<Value> {
        self.i(message)
    }

    pub fn debug(&self, message: impl Into<Value>) -> Vec<Value> {
        self.d(message)
    }

    pub fn trace(&self, message: impl Into<Value>) -> Vec<Value> {
        self.v(message)
    }

    pub fn f(&self, message: impl Into<Value>) -> Vec<Value> {
        self.log(message, "f")
    }

    pub fn e(&self, message: impl Into<Value>) -> Vec<Value> {
        self.log(message, "e")
    }

    pub fn w(&self, message: impl Into<Value>) -> Vec<Value> {
        self.log(message, "w")
    }

    pub fn i(&self, message: impl Into<Value>) -> Vec<Value> {
        self.log(message, "i")
    }

    pub fn d(&self, message: impl Into<Value>) -> Vec<Value> {
        self.log(message, "d")
    }

    pub fn v(&self, message: impl Into<Value>) -> Vec<Value> {
        self.log(message, "v")
    }
}

impl std::fmt::Debug for LevelLogger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LevelLogger")
            .field("tag", &self.tag)
            .field("threshold", &self.threshold)
            .finish_non_exhaustive()
    }
}

fn normalize_code(code: &str) -> Option<char> {
    code.chars()
        .next()
        .map(|c| c.to_lowercase().next().unwrap_or(c))
}

/// Header first, then the message. Arrays are spread one level.
fn build_args(tag: Option<&str>, code: Option<char>, message: Value) -> Vec<Value> {
    let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
    let tag = tag.unwrap_or_default();
    let letter = code
        .map(|c| c.to_uppercase().collect::<String>())
        .unwrap_or_default();

    let mut args = vec![Value::String(format!("{timestamp} - ({tag})[{letter}]"))];
    match message {
        Value::Array(items) => args.extend(items),
        other => args.push(other),
    }
    args
}
