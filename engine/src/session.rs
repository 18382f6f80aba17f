use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::sync::mpsc;
use tokio::time::interval;

use crate::game::{Direction, GameEngine, GameEvent, GamePhase};
use crate::error::GameResult;
use crate::log;

/// Receives the event batches drained from the engine after each tick. Any
/// renderer (terminal, canvas, test collector) subscribes by implementing
/// this.
pub trait EventSink: Send + Sync + Clone + 'static {
    fn handle_events(&self, events: Vec<GameEvent>) -> impl Future<Output = ()> + Send;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionCommand {
    Turn(Direction),
    Stop,
}

/// Input side of a running session. Commands are queued and applied
/// atomically at the start of the next tick.
#[derive(Clone)]
pub struct SessionHandle {
    commands: mpsc::UnboundedSender<SessionCommand>,
}

impl SessionHandle {
    pub fn turn(&self, direction: Direction) {
        let _ = self.commands.send(SessionCommand::Turn(direction));
    }

    pub fn stop(&self) {
        let _ = self.commands.send(SessionCommand::Stop);
    }
}

/// Owns the tick timer for one game: the engine defines what a tick does,
/// the session decides when it happens.
pub struct GameSession {
    engine: Arc<Mutex<GameEngine>>,
    tick_interval: Duration,
    commands: mpsc::UnboundedReceiver<SessionCommand>,
}

impl GameSession {
    pub fn new(engine: Arc<Mutex<GameEngine>>, tick_interval: Duration) -> (Self, SessionHandle) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            Self {
                engine,
                tick_interval,
                commands: rx,
            },
            SessionHandle { commands: tx },
        )
    }

    /// Runs one game from `start()` until the phase leaves `Running`. Ticks
    /// execute strictly sequentially; once the loop observes the end of the
    /// game no further tick runs.
    pub async fn run<S: EventSink>(mut self, sink: S) -> GameResult<()> {
        let initial_events = {
            let mut engine = self.engine.lock().await;
            engine.start()?;
            engine.take_events()
        };
        sink.handle_events(initial_events).await;

        let mut timer = interval(self.tick_interval);
        loop {
            timer.tick().await;

            let mut engine = self.engine.lock().await;
            while let Ok(command) = self.commands.try_recv() {
                match command {
                    SessionCommand::Turn(direction) => {
                        if let Err(error) = engine.set_direction(direction) {
                            log!("turn ignored: {}", error);
                        }
                    }
                    SessionCommand::Stop => {
                        if engine.phase() == GamePhase::Running {
                            engine.stop()?;
                        }
                    }
                }
            }

            if engine.phase() == GamePhase::Running {
                engine.tick()?;
            }

            let events = engine.take_events();
            let keep_running = engine.phase() == GamePhase::Running;
            drop(engine);

            if !events.is_empty() {
                sink.handle_events(events).await;
            }
            if !keep_running {
                return Ok(());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::SessionSettings;

    #[derive(Clone)]
    struct CollectingSink {
        events: Arc<std::sync::Mutex<Vec<GameEvent>>>,
    }

    impl CollectingSink {
        fn new() -> Self {
            Self {
                events: Arc::new(std::sync::Mutex::new(Vec::new())),
            }
        }

        fn collected(&self) -> Vec<GameEvent> {
            self.events.lock().unwrap().clone()
        }
    }

    impl EventSink for CollectingSink {
        fn handle_events(&self, events: Vec<GameEvent>) -> impl Future<Output = ()> + Send {
            let collected = Arc::clone(&self.events);
            async move {
                collected.lock().unwrap().extend(events);
            }
        }
    }

    fn test_engine() -> Arc<Mutex<GameEngine>> {
        let settings = SessionSettings {
            seed: Some(4242),
            tick_interval: Duration::from_millis(1),
            ..SessionSettings::default()
        };
        Arc::new(Mutex::new(GameEngine::new(settings).unwrap()))
    }

    #[tokio::test(start_paused = true)]
    async fn test_session_ticks_until_stopped() {
        let engine = test_engine();
        let (session, handle) = GameSession::new(engine.clone(), Duration::from_millis(1));
        let sink = CollectingSink::new();

        let game = tokio::spawn(session.run(sink.clone()));
        tokio::time::sleep(Duration::from_millis(10)).await;
        handle.stop();
        game.await.unwrap().unwrap();

        let events = sink.collected();
        assert!(matches!(events.first(), Some(GameEvent::FoodPlaced { .. })));
        assert!(events.iter().any(|e| matches!(e, GameEvent::Moved { .. })));
        assert!(matches!(events.last(), Some(GameEvent::GameOver { .. })));
        assert_eq!(engine.lock().await.phase(), GamePhase::Ended);
    }

    #[tokio::test(start_paused = true)]
    async fn test_turns_are_applied_on_tick_boundaries() {
        let engine = test_engine();
        let (session, handle) = GameSession::new(engine.clone(), Duration::from_millis(1));
        let sink = CollectingSink::new();

        let game = tokio::spawn(session.run(sink.clone()));
        handle.turn(Direction::Down);
        tokio::time::sleep(Duration::from_millis(5)).await;
        handle.stop();
        game.await.unwrap().unwrap();

        let moved_down = sink.collected().iter().any(|e| match e {
            GameEvent::Moved { snake, .. } => snake[0].row > 6,
            _ => false,
        });
        assert!(moved_down);
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_ticks_after_stop() {
        let engine = test_engine();
        let (session, handle) = GameSession::new(engine.clone(), Duration::from_millis(1));
        let sink = CollectingSink::new();

        let game = tokio::spawn(session.run(sink.clone()));
        handle.stop();
        game.await.unwrap().unwrap();

        let events_at_exit = sink.collected().len();
        tokio::time::sleep(Duration::from_millis(20)).await;

        assert_eq!(sink.collected().len(), events_at_exit);
        assert_eq!(engine.lock().await.phase(), GamePhase::Ended);
        assert_eq!(engine.lock().await.score(), 0);
    }
}
