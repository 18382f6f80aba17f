use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc::UnboundedSender;

use snake_engine::Direction;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputAction {
    Turn(Direction),
    EndGame,
    Restart,
    Quit,
}

/// Blocking keyboard reader on its own thread; the channel closing or a
/// quit key ends it.
pub fn spawn_input_thread(actions: UnboundedSender<InputAction>) {
    std::thread::spawn(move || {
        loop {
            let key = match event::read() {
                Ok(Event::Key(key)) if key.kind != KeyEventKind::Release => key,
                Ok(_) => continue,
                Err(_) => break,
            };
            let Some(action) = map_key(key) else {
                continue;
            };
            let quit = action == InputAction::Quit;
            if actions.send(action).is_err() || quit {
                break;
            }
        }
    });
}

fn map_key(key: KeyEvent) -> Option<InputAction> {
    // raw mode swallows the usual interrupt, so map it explicitly
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(InputAction::Quit);
    }

    match key.code {
        KeyCode::Left | KeyCode::Char('a') => Some(InputAction::Turn(Direction::Left)),
        KeyCode::Right | KeyCode::Char('d') => Some(InputAction::Turn(Direction::Right)),
        KeyCode::Up | KeyCode::Char('w') => Some(InputAction::Turn(Direction::Up)),
        KeyCode::Down | KeyCode::Char('s') => Some(InputAction::Turn(Direction::Down)),
        KeyCode::Esc => Some(InputAction::EndGame),
        KeyCode::Char('q') => Some(InputAction::Quit),
        KeyCode::Char('r') => Some(InputAction::Restart),
        _ => None,
    }
}
