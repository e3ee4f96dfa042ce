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

//! Severity levels and the lenient resolution of level names, letters and
//! numbers onto the 0-5 scale.

use crate::error::{Result, TaglogError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity of a log call. Lower values are more severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
pub enum Severity {
    Fatal = 0,
    Error = 1,
    Warning = 2,
    #[default]
    Info = 3,
    Debug = 4,
    Trace = 5,
}

/// Level names in declaration order. Prefix matching walks this table top to
/// bottom, so "e" resolves to Emergency rather than Error.
const ALIASES: [(&str, Severity); 11] = [
    ("Emergency", Severity::Fatal),
    ("Critical", Severity::Fatal),
    ("Fatal", Severity::Fatal),
    ("Alert", Severity::Error),
    ("Error", Severity::Error),
    ("Warning", Severity::Warning),
    ("Notice", Severity::Info),
    ("Info", Severity::Info),
    ("Debug", Severity::Debug),
    ("Trace", Severity::Trace),
    ("Verbose", Severity::Trace),
];

const LEVEL_CODES: [(char, Severity); 6] = [
    ('f', Severity::Fatal),
    ('e', Severity::Error),
    ('w', Severity::Warning),
    ('i', Severity::Info),
    ('d', Severity::Debug),
    ('v', Severity::Trace),
];

impl Severity {
    pub const ALL: [Severity; 6] = [
        Severity::Fatal,
        Severity::Error,
        Severity::Warning,
        Severity::Info,
        Severity::Debug,
        Severity::Trace,
    ];

    pub const MAX: u8 = 5;

    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Maps any integer onto the scale, clamping to [0, 5].
    pub fn from_clamped(value: i64) -> Self {
        Self::ALL[value.clamp(0, Self::MAX as i64) as usize]
    }

    /// Single-letter code used in headers and by the shorthand methods.
    pub fn code(self) -> char {
        LEVEL_CODES[self as usize].0
    }

    pub fn from_code(code: char) -> Option<Self> {
        LEVEL_CODES
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, severity)| *severity)
    }

    pub fn name(self) -> &'static str {
        match self {
            Severity::Fatal => "Fatal",
            Severity::Error => "Error",
            Severity::Warning => "Warning",
            Severity::Info => "Info",
            Severity::Debug => "Debug",
            Severity::Trace => "Trace",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl From<Severity> for u8 {
    fn from(severity: Severity) -> Self {
        severity.as_u8()
    }
}

/// Strict parsing: exact alias names, "warn", level codes and the digits
/// 0-5. Anything else is an error, unlike [`resolve_level`].
impl FromStr for Severity {
    type Err = TaglogError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();

        if let Some((_, severity)) = ALIASES
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(trimmed))
        {
            return Ok(*severity);
        }

        if trimmed.eq_ignore_ascii_case("warn") {
            return Ok(Severity::Warning);
        }

        let mut chars = trimmed.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if let Some(severity) = Severity::from_code(c.to_ascii_lowercase()) {
                return Ok(severity);
            }
            if let Some(digit) = c.to_digit(10)
                && digit <= Self::MAX as u32
            {
                return Ok(Self::ALL[digit as usize]);
            }
        }

        Err(TaglogError::InvalidLevel(s.to_string()))
    }
}

/// A requested threshold, either numeric or textual.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LevelInput {
    Number(f64),
    Text(String),
}

macro_rules! impl_numeric_input {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for LevelInput {
                fn from(value: $ty) -> Self {
                    LevelInput::Number(value as f64)
                }
            }
        )*
    };
}

impl_numeric_input!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl From<&str> for LevelInput {
    fn from(value: &str) -> Self {
        LevelInput::Text(value.to_string())
    }
}

impl From<String> for LevelInput {
    fn from(value: String) -> Self {
        LevelInput::Text(value)
    }
}

impl From<&String> for LevelInput {
    fn from(value: &String) -> Self {
        LevelInput::Text(value.clone())
    }
}

impl From<Severity> for LevelInput {
    fn from(value: Severity) -> Self {
        LevelInput::Number(value.as_u8() as f64)
    }
}

/// Resolves a requested threshold onto the scale. Never fails.
///
/// * Numbers (and strings that parse as numbers) are rounded and clamped;
///   NaN and infinities fall back to Info.
/// * Other strings are prefix-matched, case-insensitively, against the alias
///   table in declaration order.
/// * Strings that match no alias use their character count as the level,
///   so "xyz" becomes Info and "" becomes Fatal.
pub fn resolve_level(input: impl Into<LevelInput>) -> Severity {
    match input.into() {
        LevelInput::Number(value) => resolve_number(value),
        LevelInput::Text(text) => resolve_text(&text),
    }
}

fn resolve_number(value: f64) -> Severity {
    if !value.is_finite() {
        return Severity::default();
    }
    Severity::from_clamped(value.round().clamp(i64::MIN as f64, i64::MAX as f64) as i64)
}

fn resolve_text(text: &str) -> Severity {
    if let Some(value) = parse_numeric(text) {
        return resolve_number(value);
    }

    if let Some(severity) = seek_alias(text) {
        return severity;
    }

    let length = text.chars().count();
    log::trace!("No level alias matches {text:?}, using its length {length}");
    Severity::from_clamped(length.min(Severity::MAX as usize) as i64)
}

/// Only plain decimal notation counts as numeric; `f64::from_str` would also
/// accept words such as "inf" and "nan".
fn parse_numeric(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty()
        || !trimmed
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'))
    {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

fn seek_alias(text: &str) -> Option<Severity> {
    if text.is_empty() {
        return None;
    }
    let needle = text.to_lowercase();
    ALIASES
        .iter()
        .find(|(name, _)| name.to_lowercase().starts_with(&needle))
        .map(|(_, severity)| *severity)
}
