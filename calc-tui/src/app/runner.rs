//! Terminal setup and the event loop
//!
//! The App wires keyboard events into model updates: characters map to button
//! presses directly, arrow keys move the grid cursor, and space presses the
//! highlighted button. The model itself never sees a key event.

use super::model::{button_for_char, Button, Model, BUTTON_GRID};
use super::ui;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::prelude::{CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

/// Application state: the calculator model plus UI-only state
pub struct App {
    pub model: Model,
    /// Grid cursor as (row, column) into [BUTTON_GRID]
    pub cursor: (usize, usize),
    should_quit: bool,
}

impl App {
    pub fn new() -> Self {
        App {
            model: Model::new(),
            cursor: (0, 0),
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Apply one keyboard event to the application state
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => self.should_quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Enter => self.model.press(Button::Equals),
            KeyCode::Esc => self.model.press(Button::Clear),
            KeyCode::Backspace => self.model.press(Button::Backspace),
            KeyCode::Char(' ') => {
                let (row, col) = self.cursor;
                self.model.press(BUTTON_GRID[row][col]);
            }
            KeyCode::Up => self.move_cursor(-1, 0),
            KeyCode::Down => self.move_cursor(1, 0),
            KeyCode::Left => self.move_cursor(0, -1),
            KeyCode::Right => self.move_cursor(0, 1),
            KeyCode::Char(c) => {
                if let Some(button) = button_for_char(c) {
                    self.model.press(button);
                }
            }
            _ => {}
        }
    }

    fn move_cursor(&mut self, d_row: isize, d_col: isize) {
        let rows = BUTTON_GRID.len() as isize;
        let cols = BUTTON_GRID[0].len() as isize;
        let row = (self.cursor.0 as isize + d_row).rem_euclid(rows);
        let col = (self.cursor.1 as isize + d_col).rem_euclid(cols);
        self.cursor = (row as usize, col as usize);
    }
}

impl Default for App {
    fn default() -> Self {
        App::new()
    }
}

/// Run the calculator until the user quits
pub fn run() -> io::Result<()> {
    let mut app = App::new();

    enable_raw_mode()?;
    let stdout = io::stdout();
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    terminal.clear()?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        terminal.draw(|frame| {
            ui::render(frame, app);
        })?;

        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => {
                    app.handle_key(key);
                    if app.should_quit() {
                        return Ok(());
                    }
                }
                // On resize the next draw() call uses the new dimensions
                Event::Resize(_, _) => {}
                _ => {}
            }
        }
    }
}
