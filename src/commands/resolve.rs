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

use crate::error::Result;
use crate::level::{Severity, resolve_level};

pub struct ResolveCommand;

impl ResolveCommand {
    pub fn new() -> Result<Self> {
        Ok(Self)
    }

    /// Resolves `level` and prints `<number> <code> <name>`.
    ///
    /// With `strict`, only exact level names, codes and digits are accepted.
    pub fn execute(&self, level: &str, strict: bool) -> Result<Severity> {
        let severity = Self::resolve(level, strict)?;
        println!("{}", Self::describe(severity));
        Ok(severity)
    }

    pub fn resolve(level: &str, strict: bool) -> Result<Severity> {
        if strict {
            level.parse()
        } else {
            Ok(resolve_level(level))
        }
    }

    pub fn describe(severity: Severity) -> String {
        format!("{} {} {}", severity.as_u8(), severity.code(), severity.name())
    }
}
