use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::defaults::{
    DEFAULT_CELL_BORDER_PX, DEFAULT_CELL_SIZE_PX, DEFAULT_FOOD_ASSET_URL, DEFAULT_GRID_COUNT,
    DEFAULT_INITIAL_SNAKE_LENGTH, DEFAULT_TICK_INTERVAL, MAX_GRID_COUNT, MIN_GRID_COUNT,
};

pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

/// Recognized game options. The `cell_size_px`, `cell_border_px` and
/// `food_asset_url` fields exist for rendering adapters and are ignored by
/// the core engine.
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct GameConfig {
    pub grid_count: u32,
    pub initial_snake_length: u32,
    pub tick_interval_ms: u32,
    pub cell_size_px: f32,
    pub cell_border_px: f32,
    pub food_asset_url: String,
    pub seed: Option<u64>,
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        if self.grid_count < MIN_GRID_COUNT {
            return Err(format!("grid_count must be at least {}", MIN_GRID_COUNT));
        }
        if self.grid_count > MAX_GRID_COUNT {
            return Err(format!("grid_count must not exceed {}", MAX_GRID_COUNT));
        }
        if self.initial_snake_length == 0 {
            return Err("initial_snake_length must be greater than 0".to_string());
        }
        if self.initial_snake_length > self.grid_count {
            return Err("initial_snake_length must not exceed grid_count".to_string());
        }
        if self.tick_interval_ms == 0 {
            return Err("tick_interval_ms must be greater than 0".to_string());
        }
        if self.cell_border_px < 0.0 || self.cell_size_px <= self.cell_border_px {
            return Err("cell_size_px must be greater than cell_border_px".to_string());
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_count: DEFAULT_GRID_COUNT,
            initial_snake_length: DEFAULT_INITIAL_SNAKE_LENGTH,
            tick_interval_ms: DEFAULT_TICK_INTERVAL.as_millis() as u32,
            cell_size_px: DEFAULT_CELL_SIZE_PX,
            cell_border_px: DEFAULT_CELL_BORDER_PX,
            food_asset_url: DEFAULT_FOOD_ASSET_URL.to_string(),
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn from_yaml_str(content: &str) -> Result<Self, String> {
        let config: GameConfig = serde_yaml_ng::from_str(content)
            .map_err(|e| format!("failed to parse config: {}", e))?;
        config
            .validate()
            .map_err(|e| format!("config validation error: {}", e))?;
        Ok(config)
    }

    pub fn to_yaml_string(&self) -> Result<String, String> {
        serde_yaml_ng::to_string(self).map_err(|e| format!("failed to serialize config: {}", e))
    }

    /// A missing file is not an error: defaults are returned so a front end
    /// can run without any config on disk.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("failed to read {}: {}", path.display(), e))?;
        Self::from_yaml_str(&content)
    }
}
