use std::time::Duration;

pub const DEFAULT_GRID_COUNT: u32 = 13;
pub const DEFAULT_INITIAL_SNAKE_LENGTH: u32 = 5;
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(500);

pub const DEFAULT_CELL_SIZE_PX: f32 = 32.0;
pub const DEFAULT_CELL_BORDER_PX: f32 = 2.0;
pub const DEFAULT_FOOD_ASSET_URL: &str = "./img/apple.png";

pub const MIN_GRID_COUNT: u32 = 2;
pub const MAX_GRID_COUNT: u32 = 100;
