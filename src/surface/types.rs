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

use crate::error::{Result, TaglogError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Output channel of a print surface.
///
/// Warnings share the error sink, so there is no separate warn channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sink {
    Fatal,
    Error,
    Info,
    Debug,
    Trace,
    Generic,
}

impl Sink {
    pub const ALL: [Sink; 6] = [
        Sink::Fatal,
        Sink::Error,
        Sink::Info,
        Sink::Debug,
        Sink::Trace,
        Sink::Generic,
    ];
}

impl fmt::Display for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fatal => write!(f, "fatal"),
            Self::Error => write!(f, "error"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
            Self::Generic => write!(f, "generic"),
        }
    }
}

/// Which surface a configured logger writes to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SurfaceKind {
    #[default]
    Console,
    Log,
    Silent,
}

impl fmt::Display for SurfaceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Console => write!(f, "console"),
            Self::Log => write!(f, "log"),
            Self::Silent => write!(f, "silent"),
        }
    }
}

impl FromStr for SurfaceKind {
    type Err = TaglogError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "console" => Ok(Self::Console),
            "log" => Ok(Self::Log),
            "silent" | "none" => Ok(Self::Silent),
            _ => Err(TaglogError::InvalidSurface(s.to_string())),
        }
    }
}
