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

use taglog::LevelLogger;
use taglog::surface::{MemorySurface, Sink};

/// Logger backed by a memory surface, plus a handle to inspect its writes.
///
/// `sinks` limits the capabilities the surface reports; `None` supports all.
pub fn capture_logger(tag: &str, sinks: Option<&[Sink]>) -> (LevelLogger, MemorySurface) {
    let surface = match sinks {
        Some(sinks) => MemorySurface::with_sinks(sinks),
        None => MemorySurface::new(),
    };
    let logger = LevelLogger::with_surface(Some(tag), Box::new(surface.clone()));
    (logger, surface)
}
