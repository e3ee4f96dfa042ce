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
use colored::Colorize;
use serde_json::Value;
use std::io::{self, Write};

/// Writes to the process console. Fatal and error output goes to stderr,
/// everything else to stdout.
pub struct ConsoleSurface {
    color: bool,
}

impl ConsoleSurface {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn is_stderr(sink: Sink) -> bool {
        matches!(sink, Sink::Fatal | Sink::Error)
    }

    /// Renders one line, colouring the header when enabled.
    pub fn format_line(&self, sink: Sink, args: &[Value]) -> String {
        if !self.color {
            return render_args(args);
        }

        let Some((Value::String(header), rest)) = args.split_first() else {
            return render_args(args);
        };

        let header = match sink {
            Sink::Fatal => header.as_str().red().bold(),
            Sink::Error => header.as_str().red(),
            Sink::Info => header.as_str().green(),
            Sink::Debug => header.as_str().blue(),
            Sink::Trace => header.as_str().bright_black(),
            Sink::Generic => header.as_str().normal(),
        };

        if rest.is_empty() {
            header.to_string()
        } else {
            format!("{header} {}", render_args(rest))
        }
    }
}

impl Default for ConsoleSurface {
    fn default() -> Self {
        Self::new(true)
    }
}

impl PrintSurface for ConsoleSurface {
    fn supports(&self, _sink: Sink) -> bool {
        true
    }

    fn write(&self, sink: Sink, args: &[Value]) {
        let line = self.format_line(sink, args);
        // A closed pipe must not take the caller down with it
        let _ = if Self::is_stderr(sink) {
            writeln!(io::stderr().lock(), "{line}")
        } else {
            writeln!(io::stdout().lock(), "{line}")
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use serial_test::serial;

    #[test]
    fn test_supports_every_sink() {
        let surface = ConsoleSurface::default();
        for sink in Sink::ALL {
            assert!(surface.supports(sink));
        }
    }

    #[test]
    fn test_stream_selection() {
        assert!(ConsoleSurface::is_stderr(Sink::Fatal));
        assert!(ConsoleSurface::is_stderr(Sink::Error));
        assert!(!ConsoleSurface::is_stderr(Sink::Info));
        assert!(!ConsoleSurface::is_stderr(Sink::Trace));
        assert!(!ConsoleSurface::is_stderr(Sink::Generic));
    }

    #[test]
    fn test_plain_line() {
        let surface = ConsoleSurface::new(false);
        let line = surface.format_line(Sink::Info, &[json!("hdr"), json!("msg"), json!(1)]);
        assert_eq!(line, "hdr msg 1");
    }

    #[test]
    #[serial]
    fn test_colored_line_keeps_message_uncolored() {
        colored::control::set_override(true);
        let surface = ConsoleSurface::new(true);
        let line = surface.format_line(Sink::Error, &[json!("hdr"), json!("msg")]);
        colored::control::unset_override();

        assert!(line.contains("\x1b["));
        assert!(line.ends_with(" msg"));
    }

    #[test]
    fn test_header_only_line() {
        let surface = ConsoleSurface::new(false);
        assert_eq!(surface.format_line(Sink::Generic, &[json!("hdr")]), "hdr");
    }
}
