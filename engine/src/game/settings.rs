use std::time::Duration;

use crate::config::GameConfig;
use crate::defaults::{
    DEFAULT_GRID_COUNT, DEFAULT_INITIAL_SNAKE_LENGTH, DEFAULT_TICK_INTERVAL, MAX_GRID_COUNT,
    MIN_GRID_COUNT,
};

/// Runtime settings for one game session, stripped of rendering-only
/// options.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionSettings {
    pub grid_count: i32,
    pub initial_snake_length: usize,
    pub tick_interval: Duration,
    pub seed: Option<u64>,
}

impl SessionSettings {
    pub fn validate(&self) -> Result<(), String> {
        if self.grid_count < MIN_GRID_COUNT as i32 {
            return Err(format!("grid count must be at least {}", MIN_GRID_COUNT));
        }
        if self.grid_count > MAX_GRID_COUNT as i32 {
            return Err(format!("grid count must not exceed {}", MAX_GRID_COUNT));
        }
        if self.initial_snake_length == 0 {
            return Err("initial snake length must be greater than 0".to_string());
        }
        if self.initial_snake_length > self.grid_count as usize {
            return Err("initial snake length must not exceed the grid count".to_string());
        }
        if self.tick_interval.is_zero() {
            return Err("tick interval must be greater than 0".to_string());
        }
        Ok(())
    }
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            grid_count: DEFAULT_GRID_COUNT as i32,
            initial_snake_length: DEFAULT_INITIAL_SNAKE_LENGTH as usize,
            tick_interval: DEFAULT_TICK_INTERVAL,
            seed: None,
        }
    }
}

impl From<&GameConfig> for SessionSettings {
    fn from(config: &GameConfig) -> Self {
        Self {
            grid_count: config.grid_count as i32,
            initial_snake_length: config.initial_snake_length as usize,
            tick_interval: Duration::from_millis(config.tick_interval_ms as u64),
            seed: config.seed,
        }
    }
}
