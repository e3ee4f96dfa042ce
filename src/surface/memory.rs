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

use crate::surface::{PrintSurface, Sink};
use serde_json::Value;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// One captured write
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub sink: Sink,
    pub args: Vec<Value>,
}

/// Surface that keeps every write in memory
///
/// Clones share the same buffer, so a handle kept by the caller sees what
/// the logger wrote after the surface was boxed away.
#[derive(Clone)]
pub struct MemorySurface {
    sinks: Vec<Sink>,
    records: Arc<Mutex<Vec<Record>>>,
}

impl MemorySurface {
    /// Supports every sink.
    pub fn new() -> Self {
        Self::with_sinks(&Sink::ALL)
    }

    /// Supports only the given sinks plus the mandatory generic one.
    pub fn with_sinks(sinks: &[Sink]) -> Self {
        let mut supported = sinks.to_vec();
        if !supported.contains(&Sink::Generic) {
            supported.push(Sink::Generic);
        }
        Self {
            sinks: supported,
            records: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Record>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn records(&self) -> Vec<Record> {
        self.lock().clone()
    }

    pub fn last(&self) -> Option<Record> {
        self.lock().last().cloned()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }
}

impl Default for MemorySurface {
    fn default() -> Self {
        Self::new()
    }
}

impl PrintSurface for MemorySurface {
    fn supports(&self, sink: Sink) -> bool {
        self.sinks.contains(&sink)
    }

    fn write(&self, sink: Sink, args: &[Value]) {
        self.lock().push(Record {
            sink,
            args: args.to_vec(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_generic_always_supported() {
        let surface = MemorySurface::with_sinks(&[Sink::Error]);
        assert!(surface.supports(Sink::Generic));
        assert!(surface.supports(Sink::Error));
        assert!(!surface.supports(Sink::Fatal));
        assert!(!surface.supports(Sink::Info));
    }

    #[test]
    fn test_clones_share_records() {
        let surface = MemorySurface::new();
        let handle = surface.clone();

        surface.write(Sink::Info, &[json!("hdr"), json!("one")]);
        surface.write(Sink::Debug, &[json!("hdr"), json!("two")]);

        assert_eq!(handle.len(), 2);
        let last = handle.last().unwrap();
        assert_eq!(last.sink, Sink::Debug);
        assert_eq!(last.args[1], "two");

        handle.clear();
        assert!(surface.is_empty());
    }

    #[test]
    fn test_records_preserve_order() {
        let surface = MemorySurface::new();
        for sink in [Sink::Trace, Sink::Fatal, Sink::Generic] {
            surface.write(sink, &[json!(sink.to_string())]);
        }
        let sinks: Vec<Sink> = surface.records().iter().map(|r| r.sink).collect();
        assert_eq!(sinks, vec![Sink::Trace, Sink::Fatal, Sink::Generic]);
    }
}
