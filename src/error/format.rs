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

use crate::error::{ErrorContext, TaglogError};
use colored::{Color, Colorize};

pub fn format_error_chain(error: &TaglogError) -> String {
    let context = ErrorContext::new(error);
    context.to_string()
}

/// Format error for display to user, with coloured labels when `use_color` is set
pub fn format_error_with_color(error: &TaglogError, use_color: bool) -> String {
    let label = |text: &str, color: Color| {
        if use_color {
            text.color(color).bold().to_string()
        } else {
            text.to_string()
        }
    };

    let context = ErrorContext::new(error);
    let mut output = format!("{} {error}\n", label("Error:", Color::Red));

    if let Some(details) = &context.details {
        output.push_str(&format!("\n{details}\n"));
    }

    if let Some(suggestion) = &context.suggestion {
        output.push_str(&format!(
            "\n{} {suggestion}\n",
            label("Suggestion:", Color::Yellow)
        ));
    }

    output
}
