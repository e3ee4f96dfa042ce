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
use crate::level::LevelInput;
use crate::surface::SurfaceKind;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE_NAME: &str = "config.toml";
const CONFIG_DIR_NAME: &str = "taglog";

pub const ENV_TAG: &str = "TAGLOG_TAG";
pub const ENV_LEVEL: &str = "TAGLOG_LEVEL";
pub const ENV_SURFACE: &str = "TAGLOG_SURFACE";
pub const ENV_NO_COLOR: &str = "NO_COLOR";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaglogConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,

    /// Threshold, as a number or a level name. Resolved leniently.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<LevelInput>,

    #[serde(default)]
    pub surface: SurfaceKind,

    #[serde(default = "default_color")]
    pub color: bool,
}

impl Default for TaglogConfig {
    fn default() -> Self {
        Self {
            tag: None,
            level: None,
            surface: SurfaceKind::default(),
            color: default_color(),
        }
    }
}

fn default_color() -> bool {
    true
}

/// `$XDG_CONFIG_HOME/taglog` or the platform equivalent.
pub fn default_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME))
}

/// Loads the configuration from the default directory, then applies the
/// environment overrides.
pub fn new_taglog_config() -> Result<TaglogConfig> {
    let mut config = match default_config_dir() {
        Some(dir) => TaglogConfig::load(&dir)?,
        None => {
            log::debug!("No configuration directory on this platform, using defaults");
            TaglogConfig::default()
        }
    };
    config.apply_env()?;
    Ok(config)
}

impl TaglogConfig {
    pub fn load(config_dir: &Path) -> Result<Self> {
        let config_path = config_dir.join(CONFIG_FILE_NAME);

        if !config_path.exists() {
            log::debug!("Config file not found at {config_path:?}, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&config_path)?;
        let config: TaglogConfig = toml::from_str(&contents)
            .map_err(|e| TaglogError::ConfigError(format!("Failed to parse config.toml: {e}")))?;

        log::debug!("Loaded config from {config_path:?}");
        Ok(config)
    }

    pub fn save(&self, config_dir: &Path) -> Result<()> {
        let config_path = config_dir.join(CONFIG_FILE_NAME);

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| TaglogError::ConfigError(format!("Failed to serialize config: {e}")))?;

        fs::write(&config_path, contents)?;
        log::debug!("Saved config to {config_path:?}");
        Ok(())
    }

    /// Overrides fields from `TAGLOG_TAG`, `TAGLOG_LEVEL`, `TAGLOG_SURFACE`
    /// and `NO_COLOR`. Empty values are ignored.
    pub fn apply_env(&mut self) -> Result<()> {
        if let Some(tag) = env_value(ENV_TAG) {
            self.tag = Some(tag);
        }

        if let Some(level) = env_value(ENV_LEVEL) {
            self.level = Some(LevelInput::Text(level));
        }

        if let Some(surface) = env_value(ENV_SURFACE) {
            self.surface = surface.parse()?;
        }

        // https://no-color.org/ - presence disables colour whatever the value
        if env::var_os(ENV_NO_COLOR).is_some() {
            self.color = false;
        }

        Ok(())
    }
}

fn env_value(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}
