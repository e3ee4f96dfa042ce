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

pub struct SilentSurface;

impl SilentSurface {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SilentSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl PrintSurface for SilentSurface {
    fn write(&self, _sink: Sink, _args: &[Value]) {
        // No output
    }
}
