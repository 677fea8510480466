//! Game tuning, loadable from JSON.
//!
//! Every field falls back to the defaults in the types crate, so a config file
//! only needs the values it overrides:
//!
//! ```
//! use space_garbage_core::GameConfig;
//!
//! let config = GameConfig::from_json_str(r#"{ "weapon_unlock_year": 1957 }"#).unwrap();
//! assert_eq!(config.weapon_unlock_year, 1957);
//! assert_eq!(config.start_year, 1957);
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::scenario::ScenarioTable;
use crate::types::{
    AxisLimits, ACCELERATION, CRAFT_FRAME_REPEAT, EXPLOSION_FRAME_TICKS, MAX_STAR_DENSITY,
    MIN_STAR_DENSITY, OBSTACLE_SPEED, PROJECTILE_ROW_SPEED, START_YEAR, STAR_GLYPHS,
    TICKS_PER_YEAR, TICK_MS, TWINKLE_BRIGHT_TICKS, TWINKLE_DIM_TICKS, TWINKLE_NORMAL_TICKS,
    VARIANT_OBSTACLE_YEAR, WEAPON_UNLOCK_YEAR,
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Hold times of the four twinkle phases, in ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TwinkleTiming {
    pub dim: u32,
    pub normal: u32,
    pub bright: u32,
}

impl Default for TwinkleTiming {
    fn default() -> Self {
        Self {
            dim: TWINKLE_DIM_TICKS,
            normal: TWINKLE_NORMAL_TICKS,
            bright: TWINKLE_BRIGHT_TICKS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub tick_ms: u64,
    pub ticks_per_year: u32,
    pub start_year: u32,
    pub weapon_unlock_year: u32,
    pub variant_obstacle_year: u32,
    pub acceleration: f64,
    pub speed_limits: AxisLimits,
    pub projectile_row_speed: f64,
    pub projectile_column_speed: f64,
    pub obstacle_speed: f64,
    pub min_star_density: f64,
    pub max_star_density: f64,
    pub star_glyphs: String,
    pub twinkle: TwinkleTiming,
    pub explosion_frame_ticks: u32,
    pub craft_frame_repeat: u32,
    pub scenario: ScenarioTable,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tick_ms: TICK_MS,
            ticks_per_year: TICKS_PER_YEAR,
            start_year: START_YEAR,
            weapon_unlock_year: WEAPON_UNLOCK_YEAR,
            variant_obstacle_year: VARIANT_OBSTACLE_YEAR,
            acceleration: ACCELERATION,
            speed_limits: AxisLimits::default(),
            projectile_row_speed: PROJECTILE_ROW_SPEED,
            projectile_column_speed: 0.0,
            obstacle_speed: OBSTACLE_SPEED,
            min_star_density: MIN_STAR_DENSITY,
            max_star_density: MAX_STAR_DENSITY,
            star_glyphs: STAR_GLYPHS.to_string(),
            twinkle: TwinkleTiming::default(),
            explosion_frame_ticks: EXPLOSION_FRAME_TICKS,
            craft_frame_repeat: CRAFT_FRAME_REPEAT,
            scenario: ScenarioTable::default(),
        }
    }
}

impl GameConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: &str| Err(ConfigError::Invalid(msg.to_string()));

        if self.tick_ms == 0 {
            return invalid("tick_ms must be positive");
        }
        if self.ticks_per_year == 0 {
            return invalid("ticks_per_year must be positive");
        }
        if !(self.acceleration > 0.0) {
            return invalid("acceleration must be positive");
        }
        if !(self.speed_limits.rows > 0.0 && self.speed_limits.columns > 0.0) {
            return invalid("speed limits must be positive");
        }
        if self.projectile_row_speed == 0.0 && self.projectile_column_speed == 0.0 {
            return invalid("projectile must move");
        }
        if !(self.obstacle_speed > 0.0) {
            return invalid("obstacle_speed must be positive");
        }
        if !(0.0..=1.0).contains(&self.min_star_density)
            || !(0.0..=1.0).contains(&self.max_star_density)
            || self.min_star_density > self.max_star_density
        {
            return invalid("star density must satisfy 0 <= min <= max <= 1");
        }
        if self.star_glyphs.is_empty() {
            return invalid("star_glyphs must not be empty");
        }
        if self.twinkle.dim == 0 {
            return invalid("twinkle.dim must be positive");
        }
        if self.explosion_frame_ticks == 0 || self.craft_frame_repeat == 0 {
            return invalid("frame hold times must be positive");
        }
        Ok(())
    }
}
