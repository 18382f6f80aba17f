mod input;
mod renderer;

use std::error::Error;
use std::future::Future;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tokio::sync::{Mutex, mpsc};

use input::{InputAction, spawn_input_thread};
use renderer::GridRenderer;
use snake_engine::{
    EventSink, GameConfig, GameEngine, GameEvent, GameSession, SessionSettings, Validate, logger,
};

#[derive(Parser)]
#[command(name = "snake_terminal_client")]
struct Args {
    /// YAML config file; defaults are used when absent
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    grid_count: Option<u32>,

    #[arg(long)]
    initial_snake_length: Option<u32>,

    #[arg(long)]
    tick_interval_ms: Option<u32>,

    /// Fixed RNG seed for a reproducible game
    #[arg(long)]
    seed: Option<u64>,

    /// Log engine diagnostics to stderr (redirect it to keep the grid clean)
    #[arg(long)]
    verbose: bool,
}

#[derive(Clone)]
struct RenderSink {
    frames: mpsc::UnboundedSender<Vec<GameEvent>>,
}

impl EventSink for RenderSink {
    fn handle_events(&self, events: Vec<GameEvent>) -> impl Future<Output = ()> + Send {
        let frames = self.frames.clone();
        async move {
            let _ = frames.send(events);
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    if args.verbose {
        logger::init_logger(Some("snake".to_string()));
    }

    let mut config = match &args.config {
        Some(path) => GameConfig::load_from_file(path)?,
        None => GameConfig::default(),
    };
    if let Some(grid_count) = args.grid_count {
        config.grid_count = grid_count;
    }
    if let Some(length) = args.initial_snake_length {
        config.initial_snake_length = length;
    }
    if let Some(interval) = args.tick_interval_ms {
        config.tick_interval_ms = interval;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    config.validate()?;

    let settings = SessionSettings::from(&config);
    let engine = Arc::new(Mutex::new(GameEngine::new(settings.clone())?));

    let (frame_tx, frame_rx) = mpsc::unbounded_channel();
    let (action_tx, action_rx) = mpsc::unbounded_channel();

    let grid_renderer = GridRenderer::setup(settings.grid_count)?;
    spawn_input_thread(action_tx);
    let render_task = tokio::spawn(render_loop(grid_renderer, frame_rx));

    let play_result = play(
        engine,
        settings.tick_interval,
        RenderSink { frames: frame_tx },
        action_rx,
    )
    .await;

    // the sink is gone, so the render loop drains and hands the terminal back
    match render_task.await? {
        Ok(mut grid_renderer) => grid_renderer.restore()?,
        Err(error) => {
            renderer::emergency_restore();
            return Err(error.into());
        }
    }

    play_result
}

/// Runs games back to back until the player quits. Each game is one
/// `GameSession`; between games the engine sits in `Ended` until the player
/// restarts (reset + new session) or quits.
async fn play(
    engine: Arc<Mutex<GameEngine>>,
    tick_interval: Duration,
    sink: RenderSink,
    mut actions: mpsc::UnboundedReceiver<InputAction>,
) -> Result<(), Box<dyn Error>> {
    loop {
        let (session, handle) = GameSession::new(engine.clone(), tick_interval);
        let mut game = tokio::spawn(session.run(sink.clone()));

        let mut quit_requested = false;
        let mut input_closed = false;
        loop {
            tokio::select! {
                finished = &mut game => {
                    finished??;
                    break;
                }
                action = actions.recv(), if !input_closed => match action {
                    Some(InputAction::Turn(direction)) => handle.turn(direction),
                    Some(InputAction::EndGame) => handle.stop(),
                    Some(InputAction::Restart) => {}
                    Some(InputAction::Quit) => {
                        quit_requested = true;
                        handle.stop();
                    }
                    None => {
                        quit_requested = true;
                        input_closed = true;
                        handle.stop();
                    }
                }
            }
        }
        if quit_requested {
            return Ok(());
        }

        // game-over banner is on screen; wait for the player's choice
        loop {
            match actions.recv().await {
                Some(InputAction::Restart) => {
                    engine.lock().await.reset()?;
                    break;
                }
                Some(InputAction::Quit) | None => return Ok(()),
                _ => {}
            }
        }
    }
}

async fn render_loop(
    mut grid_renderer: GridRenderer,
    mut frames: mpsc::UnboundedReceiver<Vec<GameEvent>>,
) -> std::io::Result<GridRenderer> {
    while let Some(batch) = frames.recv().await {
        for event in &batch {
            grid_renderer.handle_event(event)?;
        }
    }
    Ok(grid_renderer)
}
