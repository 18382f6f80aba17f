pub mod config;
pub mod defaults;
pub mod error;
pub mod game;
pub mod logger;
pub mod session;

pub use config::{GameConfig, Validate};
pub use error::{GameError, GameResult};
pub use game::{
    Board, Direction, GameEngine, GameEvent, GamePhase, Point, SessionRng, SessionSettings, Snake,
    TickOutcome,
};
pub use session::{EventSink, GameSession, SessionCommand, SessionHandle};
