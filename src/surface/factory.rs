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

use crate::surface::{
    ConsoleSurface, LogFacadeSurface, PrintSurface, SilentSurface, SurfaceKind,
};

pub struct SurfaceFactory;

impl SurfaceFactory {
    pub fn create(kind: SurfaceKind, color: bool) -> Box<dyn PrintSurface> {
        match kind {
            SurfaceKind::Console => Box::new(ConsoleSurface::new(color)),
            SurfaceKind::Log => Box::new(LogFacadeSurface::new()),
            SurfaceKind::Silent => Box::new(SilentSurface),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::Sink;

    #[test]
    fn test_console_and_log_support_all_sinks() {
        for kind in [SurfaceKind::Console, SurfaceKind::Log] {
            let surface = SurfaceFactory::create(kind, false);
            for sink in Sink::ALL {
                assert!(surface.supports(sink), "{kind} should support {sink}");
            }
        }
    }

    #[test]
    fn test_silent_supports_only_generic() {
        let surface = SurfaceFactory::create(SurfaceKind::Silent, true);
        assert!(surface.supports(Sink::Generic));
        assert!(!surface.supports(Sink::Error));
    }
}
