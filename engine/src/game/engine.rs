use crate::error::{GameError, GameResult};
use crate::log;

use super::board::Board;
use super::session_rng::SessionRng;
use super::settings::SessionSettings;
use super::snake::Snake;
use super::types::{Direction, GameEvent, GamePhase, Point, TickOutcome};

/// One game session: snake, food, score, direction and phase. A new
/// `start()` replaces all of them atomically; instances are independent of
/// each other.
pub struct GameEngine {
    board: Board,
    settings: SessionSettings,
    rng: SessionRng,
    snake: Option<Snake>,
    food: Option<Point>,
    score: u32,
    phase: GamePhase,
    pending_events: Vec<GameEvent>,
}

impl GameEngine {
    pub fn new(settings: SessionSettings) -> GameResult<Self> {
        settings
            .validate()
            .map_err(GameError::InvalidConfiguration)?;

        let rng = match settings.seed {
            Some(seed) => SessionRng::from_seed(seed),
            None => SessionRng::from_entropy(),
        };

        Ok(Self {
            board: Board::new(settings.grid_count),
            settings,
            rng,
            snake: None,
            food: None,
            score: 0,
            phase: GamePhase::Idle,
            pending_events: Vec::new(),
        })
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn food(&self) -> Option<Point> {
        self.food
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    pub fn direction(&self) -> Option<Direction> {
        self.snake.as_ref().map(Snake::direction)
    }

    pub fn snake_snapshot(&self) -> Vec<Point> {
        self.snake.as_ref().map(Snake::snapshot).unwrap_or_default()
    }

    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.pending_events)
    }

    pub fn start(&mut self) -> GameResult<()> {
        if self.phase == GamePhase::Running {
            return Err(GameError::InvalidStateTransition {
                operation: "start",
                phase: self.phase,
            });
        }

        self.snake = Some(Snake::new(
            self.board.center(),
            self.settings.initial_snake_length,
            Direction::Left,
            self.board.grid_count(),
        ));
        self.score = 0;
        self.phase = GamePhase::Running;
        self.place_food();

        log!(
            "game started: grid {}, snake length {}, seed {}",
            self.board.grid_count(),
            self.settings.initial_snake_length,
            self.rng.seed()
        );
        Ok(())
    }

    /// A turn request that exactly reverses the current direction is a
    /// defined no-op, not an error. Requests land in a pending slot sampled
    /// once at the start of the next tick; the last accepted request wins.
    pub fn set_direction(&mut self, direction: Direction) -> GameResult<()> {
        if self.phase != GamePhase::Running {
            return Err(GameError::InvalidStateTransition {
                operation: "set_direction",
                phase: self.phase,
            });
        }

        let snake = self.snake.as_mut().expect("running game always has a snake");
        if direction.is_opposite(snake.direction()) {
            return Ok(());
        }
        snake.queue_turn(direction);
        Ok(())
    }

    /// Advances the game by one cell. Rejected outright before any mutation
    /// when the game is not running.
    pub fn tick(&mut self) -> GameResult<TickOutcome> {
        if self.phase != GamePhase::Running {
            return Err(GameError::InvalidStateTransition {
                operation: "tick",
                phase: self.phase,
            });
        }

        let (new_head, ate_food) = {
            let snake = self.snake.as_mut().expect("running game always has a snake");
            snake.apply_pending_turn();

            let raw_head = snake.head().offset_by(snake.direction());
            let new_head = self.board.wrap(raw_head);
            snake.advance(new_head);

            let ate_food = self.food == Some(new_head);
            if !ate_food {
                snake.drop_tail();
            }
            (new_head, ate_food)
        };

        if ate_food {
            self.score += 1;
            log!(
                "food eaten at ({}, {}), score {}",
                new_head.col,
                new_head.row,
                self.score
            );
            self.place_food();
        }

        // checked against the post-move body, so a tail cell vacated this
        // tick never counts as a hit
        let snake = self.snake.as_ref().expect("running game always has a snake");
        let collided = snake.has_self_collision();

        self.pending_events.push(GameEvent::Moved {
            snake: snake.snapshot(),
            score: self.score,
            ate_food,
        });

        if collided {
            log!(
                "self-collision at ({}, {}), final score {}",
                new_head.col,
                new_head.row,
                self.score
            );
            self.phase = GamePhase::Ended;
            self.pending_events.push(GameEvent::GameOver {
                final_score: self.score,
            });
        }

        Ok(TickOutcome {
            new_head,
            ate_food,
            collided,
        })
    }

    /// Re-rolls until the sample misses every snake segment. Resampling is
    /// memoryless: a nearly full board can take many attempts, with no fixed
    /// upper bound, but terminates with probability 1.
    fn place_food(&mut self) {
        let snake = self.snake.as_ref().expect("food is only placed for an active snake");
        loop {
            let candidate = self.board.random_point(&mut self.rng);
            if snake.occupies(candidate) {
                continue;
            }
            self.food = Some(candidate);
            self.pending_events
                .push(GameEvent::FoodPlaced { position: candidate });
            log!("food placed at ({}, {})", candidate.col, candidate.row);
            break;
        }
    }

    /// Explicit end. Unlike a collision end, the score is zeroed
    /// immediately as part of the transition.
    pub fn stop(&mut self) -> GameResult<()> {
        if self.phase != GamePhase::Running {
            return Err(GameError::InvalidStateTransition {
                operation: "stop",
                phase: self.phase,
            });
        }

        self.phase = GamePhase::Ended;
        self.pending_events.push(GameEvent::GameOver {
            final_score: self.score,
        });
        self.score = 0;
        log!("game stopped");
        Ok(())
    }

    /// Acknowledges a finished game so a fresh `start()` begins from a
    /// clean board.
    pub fn reset(&mut self) -> GameResult<()> {
        if self.phase != GamePhase::Ended {
            return Err(GameError::InvalidStateTransition {
                operation: "reset",
                phase: self.phase,
            });
        }

        self.phase = GamePhase::Idle;
        self.snake = None;
        self.food = None;
        self.score = 0;
        Ok(())
    }

    #[cfg(test)]
    fn place_food_at(&mut self, position: Point) {
        self.food = Some(position);
    }
}
