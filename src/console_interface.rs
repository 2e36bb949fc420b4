use crate::core::{Direction, GameError, GameOutcome, Grid, UserAction};
use crate::models::GameRenderState;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};
use std::io;

pub const HELP_MOVES: &str = "(W)Up (S)Down (A)Left (D)Right";
pub const HELP_CONTROLS: &str = "(R)Restart (Q)Exit";
pub const WIN_MESSAGE: &str = "YOU WIN!";
pub const GAME_OVER_MESSAGE: &str = "GAME OVER";

const CELL_WIDTH: usize = 6;

/// Reads a whitespace separated board, `.` or `0` for empty cells.
pub fn parse_grid(s: &str) -> Result<Grid, GameError> {
    let mut rows = Vec::new();
    for line in s.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let row = line
            .split_whitespace()
            .map(|token| match token {
                "." => Ok(0),
                _ => token
                    .parse::<u32>()
                    .map_err(|_| GameError::malformed(format!("'{}' is not a tile value", token))),
            })
            .collect::<Result<Vec<u32>, GameError>>()?;
        rows.push(row);
    }
    Grid::from_rows(rows)
}

/// Inverse of `parse_grid`, one row per line.
pub fn format_grid(grid: &Grid) -> String {
    let mut result = String::new();
    for row in grid.rows() {
        let line = row
            .iter()
            .map(|&v| if v == 0 { ".".to_string() } else { v.to_string() })
            .collect::<Vec<_>>()
            .join(" ");
        result.push_str(&line);
        result.push('\n');
    }
    result
}

pub fn render_board_to_string(grid: &Grid) -> String {
    let separator = format!("+{}", format!("{}+", "-".repeat(CELL_WIDTH)).repeat(grid.width()));
    let mut result = String::new();
    for row in grid.rows() {
        result.push_str(&separator);
        result.push('\n');
        for &v in row {
            if v == 0 {
                result.push('|');
                result.push_str(&" ".repeat(CELL_WIDTH));
            } else {
                result.push_str(&format!("|{: ^width$} ", v, width = CELL_WIDTH - 1));
            }
        }
        result.push_str("|\n");
    }
    result.push_str(&separator);
    result.push('\n');
    result
}

pub fn render_game_to_string(state: &GameRenderState) -> String {
    let mut result = format!("SCORE: {}\n", state.score);
    if state.high_score != 0 {
        result.push_str(&format!("HIGHSCORE: {}\n", state.high_score));
    }
    result.push_str(&render_board_to_string(&state.grid));
    result
}

pub fn status_line(state: &GameRenderState) -> String {
    let status = match state.outcome {
        GameOutcome::Win => WIN_MESSAGE,
        GameOutcome::GameOver => GAME_OVER_MESSAGE,
        GameOutcome::InProgress => HELP_MOVES,
    };
    let status = format!("{} | {}", status, HELP_CONTROLS);
    if let Some(err) = &state.error {
        format!("{} | Error: {}", status, err)
    } else {
        status
    }
}

pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, Box<dyn std::error::Error>>
{
    crossterm::terminal::enable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

pub fn cleanup_terminal() -> Result<(), Box<dyn std::error::Error>> {
    crossterm::terminal::disable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::LeaveAlternateScreen)?;
    Ok(())
}

pub fn render_game(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &GameRenderState,
) -> Result<(), Box<dyn std::error::Error>> {
    terminal.draw(|f| {
        let chunks = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3)])
            .split(f.area());

        let board_color = match state.outcome {
            GameOutcome::Win => Color::Green,
            GameOutcome::GameOver => Color::Red,
            GameOutcome::InProgress => Color::White,
        };
        let game_paragraph = Paragraph::new(render_game_to_string(state))
            .block(Block::default().borders(Borders::ALL).title("2048"))
            .style(Style::default().fg(board_color))
            .alignment(Alignment::Center);
        f.render_widget(game_paragraph, chunks[0]);

        let instruction_paragraph = Paragraph::new(status_line(state))
            .block(Block::default().borders(Borders::ALL).title("Instructions"))
            .style(Style::default().fg(Color::Cyan))
            .alignment(Alignment::Center);
        f.render_widget(instruction_paragraph, chunks[1]);
    })?;
    Ok(())
}

pub enum ConsoleInput {
    UserAction(UserAction),
    Timeout,
    Unknown,
}

pub fn decode_key(code: KeyCode) -> Option<UserAction> {
    match code {
        KeyCode::Char(c) => UserAction::from_key(c),
        KeyCode::Up => Some(UserAction::Move(Direction::Up)),
        KeyCode::Down => Some(UserAction::Move(Direction::Down)),
        KeyCode::Left => Some(UserAction::Move(Direction::Left)),
        KeyCode::Right => Some(UserAction::Move(Direction::Right)),
        KeyCode::Esc => Some(UserAction::Exit),
        _ => None,
    }
}

pub fn handle_input() -> Result<ConsoleInput, Box<dyn std::error::Error>> {
    if event::poll(std::time::Duration::from_millis(50))? {
        if let Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) = event::read()?
        {
            return Ok(match decode_key(code) {
                Some(action) => ConsoleInput::UserAction(action),
                None => ConsoleInput::Unknown,
            });
        }
    }
    Ok(ConsoleInput::Timeout)
}
