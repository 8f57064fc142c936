//! UI rendering logic
//!
//! Handles layout and rendering of the calculator using Ratatui.
//! Layout structure:
//! - Title bar (1 line, fixed)
//! - Display (4 lines: expression line and result line inside a border)
//! - Button grid (6 rows of 4 buttons)
//! - Status line (1 line, fixed)

use super::model::BUTTON_GRID;
use super::runner::App;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

/// Minimum terminal width required for the UI
const MIN_TERMINAL_WIDTH: u16 = 28;
/// Height of the bordered display area
const DISPLAY_HEIGHT: u16 = 4;
/// Height of one button row (content plus border)
const BUTTON_ROW_HEIGHT: u16 = 3;
/// Height of the status line
const STATUS_LINE_HEIGHT: u16 = 1;

/// Render the entire UI
pub fn render(frame: &mut Frame, app: &App) {
    let size = frame.area();

    if size.width < MIN_TERMINAL_WIDTH {
        render_error_too_narrow(frame, size);
        return;
    }

    let mut constraints = vec![
        Constraint::Length(1),              // Title bar
        Constraint::Length(DISPLAY_HEIGHT), // Display
    ];
    constraints.extend([Constraint::Length(BUTTON_ROW_HEIGHT)].repeat(BUTTON_GRID.len()));
    constraints.push(Constraint::Min(0)); // Filler
    constraints.push(Constraint::Length(STATUS_LINE_HEIGHT));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(size);

    render_title_bar(frame, chunks[0], app);
    render_display(frame, chunks[1], app);
    for (row, row_buttons) in BUTTON_GRID.iter().enumerate() {
        render_button_row(frame, chunks[2 + row], app, row, row_buttons.len());
    }
    render_status_line(frame, chunks[chunks.len() - 1]);
}

fn render_error_too_narrow(frame: &mut Frame, area: Rect) {
    let msg = format!(
        "Terminal too narrow: {} < {} chars",
        area.width, MIN_TERMINAL_WIDTH
    );
    let paragraph =
        Paragraph::new(msg).style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD));
    frame.render_widget(paragraph, area);
}

fn render_title_bar(frame: &mut Frame, area: Rect, app: &App) {
    let memory_indicator = if app.model.memory_active() { " [M]" } else { "" };
    let title = format!("calc::{}", memory_indicator);
    let paragraph = Paragraph::new(title).style(
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );
    frame.render_widget(paragraph, area);
}

fn render_display(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default().borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let result_style = if app.model.has_error() {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };

    let lines = vec![
        Line::styled(
            app.model.expression().to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Line::styled(app.model.result().to_string(), result_style),
    ];
    frame.render_widget(
        Paragraph::new(lines).alignment(ratatui::layout::Alignment::Right),
        inner,
    );
}

fn render_button_row(frame: &mut Frame, area: Rect, app: &App, row: usize, columns: usize) {
    let constraints = vec![Constraint::Ratio(1, columns as u32); columns];
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (col, button) in BUTTON_GRID[row].iter().enumerate() {
        let selected = app.cursor == (row, col);
        let style = if selected {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        let block = Block::default().borders(Borders::ALL).style(style);
        let inner = block.inner(cells[col]);
        frame.render_widget(block, cells[col]);
        frame.render_widget(
            Paragraph::new(button.label()).alignment(ratatui::layout::Alignment::Center),
            inner,
        );
    }
}

fn render_status_line(frame: &mut Frame, area: Rect) {
    let paragraph =
        Paragraph::new("arrows: move | space: press | enter: = | esc: clear | q: quit")
            .style(Style::default().bg(Color::Black).fg(Color::White));
    frame.render_widget(paragraph, area);
}
