use std::io::{self, Stdout, Write, stdout};

use crossterm::style::Print;
use crossterm::terminal::{self, ClearType};
use crossterm::{cursor, execute, queue};

use snake_engine::{GameEvent, Point};

const HEAD_GLYPH: &str = "██";
const BODY_GLYPH: &str = "▒▒";
const FOOD_GLYPH: &str = "()";

/// Draws the game grid in an alternate screen. Each cell is two columns
/// wide so the board looks roughly square.
pub struct GridRenderer {
    out: Stdout,
    grid_count: u16,
    food: Option<Point>,
}

impl GridRenderer {
    pub fn setup(grid_count: i32) -> io::Result<Self> {
        let out = stdout();
        terminal::enable_raw_mode()?;
        let mut renderer = Self {
            out,
            grid_count: grid_count as u16,
            food: None,
        };
        execute!(renderer.out, terminal::EnterAlternateScreen, cursor::Hide)?;
        renderer.draw_border()?;
        Ok(renderer)
    }

    pub fn handle_event(&mut self, event: &GameEvent) -> io::Result<()> {
        match event {
            GameEvent::FoodPlaced { position } => {
                self.food = Some(*position);
                self.draw_cell(*position, FOOD_GLYPH)?;
                self.out.flush()
            }
            GameEvent::Moved {
                snake,
                score,
                ate_food: _,
            } => self.draw_frame(snake, *score),
            GameEvent::GameOver { final_score } => self.draw_game_over(*final_score),
        }
    }

    pub fn restore(&mut self) -> io::Result<()> {
        execute!(self.out, terminal::LeaveAlternateScreen, cursor::Show)?;
        terminal::disable_raw_mode()
    }

    fn draw_border(&mut self) -> io::Result<()> {
        let inner = self.grid_count * 2;
        let horizontal = "─".repeat(inner as usize);

        queue!(self.out, terminal::Clear(ClearType::All))?;
        queue!(
            self.out,
            cursor::MoveTo(0, 0),
            Print(format!("┌{}┐", horizontal))
        )?;
        for row in 0..self.grid_count {
            queue!(
                self.out,
                cursor::MoveTo(0, row + 1),
                Print("│"),
                cursor::MoveTo(inner + 1, row + 1),
                Print("│")
            )?;
        }
        queue!(
            self.out,
            cursor::MoveTo(0, self.grid_count + 1),
            Print(format!("└{}┘", horizontal))
        )?;
        queue!(
            self.out,
            cursor::MoveTo(0, self.grid_count + 3),
            Print("arrows or wasd to steer, esc to end, q to quit")
        )?;
        self.draw_score(0)?;
        self.out.flush()
    }

    fn draw_frame(&mut self, snake: &[Point], score: u32) -> io::Result<()> {
        self.clear_interior()?;
        if let Some(food) = self.food {
            self.draw_cell(food, FOOD_GLYPH)?;
        }
        for (index, segment) in snake.iter().enumerate() {
            let glyph = if index == 0 { HEAD_GLYPH } else { BODY_GLYPH };
            self.draw_cell(*segment, glyph)?;
        }
        self.draw_score(score)?;
        self.out.flush()
    }

    fn draw_game_over(&mut self, final_score: u32) -> io::Result<()> {
        let message = format!(" game over, score {} ", final_score);
        let hint = " r restarts, q quits ";
        let middle = self.grid_count / 2;
        self.draw_centered(middle, &message)?;
        self.draw_centered(middle + 1, hint)?;
        self.out.flush()
    }

    fn draw_centered(&mut self, grid_row: u16, text: &str) -> io::Result<()> {
        let inner = self.grid_count * 2;
        let width = text.chars().count() as u16;
        let x = 1 + inner.saturating_sub(width) / 2;
        queue!(self.out, cursor::MoveTo(x, grid_row + 1), Print(text))
    }

    fn clear_interior(&mut self) -> io::Result<()> {
        let blank = "  ".repeat(self.grid_count as usize);
        for row in 0..self.grid_count {
            queue!(self.out, cursor::MoveTo(1, row + 1), Print(&blank))?;
        }
        Ok(())
    }

    fn draw_cell(&mut self, point: Point, glyph: &str) -> io::Result<()> {
        let x = 1 + (point.col as u16) * 2;
        let y = 1 + point.row as u16;
        queue!(self.out, cursor::MoveTo(x, y), Print(glyph))
    }

    fn draw_score(&mut self, score: u32) -> io::Result<()> {
        queue!(
            self.out,
            cursor::MoveTo(0, self.grid_count + 2),
            Print(format!("Score: {}   ", score))
        )
    }
}

/// Best-effort terminal cleanup for error paths where the renderer itself
/// is gone.
pub fn emergency_restore() {
    let _ = terminal::disable_raw_mode();
    let _ = execute!(stdout(), terminal::LeaveAlternateScreen, cursor::Show);
}
