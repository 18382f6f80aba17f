mod board;
mod engine;
mod session_rng;
mod settings;
mod snake;
mod types;

pub use board::Board;
pub use engine::GameEngine;
pub use session_rng::SessionRng;
pub use settings::SessionSettings;
pub use snake::Snake;
pub use types::{Direction, GameEvent, GamePhase, Point, TickOutcome};
