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

use crate::error::TaglogError;
use std::fmt;

pub struct ErrorContext<'a> {
    pub error: &'a TaglogError,
    pub suggestion: Option<String>,
    pub details: Option<String>,
}

impl<'a> ErrorContext<'a> {
    pub fn new(error: &'a TaglogError) -> Self {
        let (suggestion, details) = match error {
            TaglogError::InvalidLevel(_) => (
                Some(
                    "Use a level name (fatal, error, warning, info, debug, trace), its code \
                     (f, e, w, i, d, v) or a number from 0 to 5."
                        .to_string(),
                ),
                None,
            ),
            TaglogError::InvalidSurface(_) => (
                Some("Valid surfaces are 'console', 'log' and 'silent'.".to_string()),
                None,
            ),
            TaglogError::ConfigError(msg) => (
                Some(
                    "Check config.toml in the taglog configuration directory or unset the \
                     TAGLOG_* environment variables."
                        .to_string(),
                ),
                Some(msg.clone()),
            ),
            TaglogError::Io(e) => (None, Some(format!("I/O error: {e}"))),
        };

        Self {
            error,
            suggestion,
            details,
        }
    }
}

impl fmt::Display for ErrorContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error: {}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\n\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\n\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}
