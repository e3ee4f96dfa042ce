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
use crate::error::Result;
use crate::logger::LevelLogger;
use log::debug;
use serde_json::Value;

pub struct EmitCommand {
    logger: LevelLogger,
}

impl EmitCommand {
    pub fn new(config: &TaglogConfig) -> Result<Self> {
        let logger = LevelLogger::from_config(config);
        debug!("Emitting through {logger:?} on the {} surface", config.surface);
        Ok(Self { logger })
    }

    pub fn logger(&self) -> &LevelLogger {
        &self.logger
    }

    /// Logs the words as one call. A single word is a scalar message,
    /// several are passed as separate arguments. Returns the number of
    /// arguments written, zero when the threshold suppressed the call.
    pub fn execute(&self, code: &str, words: &[String]) -> Result<usize> {
        let message = match words {
            [single] => Value::String(single.clone()),
            many => Value::Array(many.iter().cloned().map(Value::String).collect()),
        };

        let written = self.logger.log(message, code);
        if written.is_empty() {
            debug!(
                "Message with code {code:?} suppressed at threshold {}",
                self.logger.level()
            );
        }
        Ok(written.len())
    }
}
