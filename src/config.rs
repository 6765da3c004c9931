//! Tunable game settings.
//!
//! Every field has a default, so a config file only needs the keys it changes.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Logical canvas width in pixels
    pub width: f32,
    /// Logical canvas height in pixels
    pub height: f32,
    /// Frames per second requested from the frame driver
    pub fps: u32,
    /// Ticks between enemy spawn attempts
    pub spawn_threshold: u32,
    /// Background scroll in pixels per tick
    pub scroll_speed: f32,
    pub star_count: usize,
    pub cloud_count: usize,
    pub planet_count: usize,
    /// Lives at game start and after every restart
    pub starting_lives: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            fps: 60,
            spawn_threshold: 80,
            scroll_speed: 0.5,
            star_count: 100,
            cloud_count: 5,
            planet_count: 0,
            starting_lives: 3,
        }
    }
}

impl GameConfig {
    /// Read a JSON config file. The result is validated.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: GameConfig =
            serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.width > 0.0 && self.height > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "canvas must be non-empty, got {}x{}",
                self.width, self.height
            )));
        }
        if self.fps == 0 {
            return Err(ConfigError::Invalid("fps must be at least 1".into()));
        }
        if self.spawn_threshold == 0 {
            return Err(ConfigError::Invalid(
                "spawn_threshold must be at least 1".into(),
            ));
        }
        if self.starting_lives == 0 {
            return Err(ConfigError::Invalid(
                "starting_lives must be at least 1".into(),
            ));
        }
        if self.scroll_speed < 0.0 {
            return Err(ConfigError::Invalid(
                "scroll_speed must not be negative".into(),
            ));
        }
        Ok(())
    }
}
