use std::fmt;

use crate::game::GamePhase;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// An operation was called in a phase that does not permit it.
    InvalidStateTransition {
        operation: &'static str,
        phase: GamePhase,
    },
    /// Settings rejected before any game state was touched.
    InvalidConfiguration(String),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::InvalidStateTransition { operation, phase } => {
                write!(f, "{} is not allowed while the game is {:?}", operation, phase)
            }
            GameError::InvalidConfiguration(reason) => {
                write!(f, "invalid configuration: {}", reason)
            }
        }
    }
}

impl std::error::Error for GameError {}

pub type GameResult<T> = Result<T, GameError>;
