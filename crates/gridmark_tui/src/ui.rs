//! Stateless rendering of a game snapshot.

use gridmark_engine::{Cell, GameState, Player};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

const CELL_WIDTH: u16 = 7;
const CELL_HEIGHT: u16 = 3;

/// Renders the title, board, and status line.
pub fn draw(frame: &mut Frame, state: &GameState, cursor: (usize, usize), status: &str) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(9),
            Constraint::Length(3),
        ])
        .split(area);

    let title = Paragraph::new("Gridmark")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_board(frame, chunks[1], state, cursor);

    let status_text = Paragraph::new(status)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status_text, chunks[2]);
}

fn draw_board(frame: &mut Frame, area: Rect, state: &GameState, cursor: (usize, usize)) {
    let size = state.board().size();
    if size == 0 {
        return;
    }
    let n = size as u16;

    // Cells interleaved with one-line separators.
    let width = n * CELL_WIDTH + (n - 1);
    let height = n * CELL_HEIGHT + (n - 1);
    let board_area = center_rect(area, width, height);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(interleaved(size, CELL_HEIGHT))
        .split(board_area);

    for row in 0..size {
        if row > 0 {
            draw_separator(frame, rows[2 * row - 1], width);
        }
        draw_row(frame, rows[2 * row], state, cursor, row);
    }
}

fn draw_row(frame: &mut Frame, area: Rect, state: &GameState, cursor: (usize, usize), row: usize) {
    let size = state.board().size();

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(interleaved(size, CELL_WIDTH))
        .split(area);

    for col in 0..size {
        if col > 0 {
            draw_separator_vertical(frame, cols[2 * col - 1]);
        }
        draw_cell(frame, cols[2 * col], state, cursor, row, col);
    }
}

fn draw_cell(
    frame: &mut Frame,
    area: Rect,
    state: &GameState,
    cursor: (usize, usize),
    row: usize,
    col: usize,
) {
    let (symbol, base_style) = match state.board().get(row, col) {
        Some(Cell::Occupied(Player::X)) => (
            " X ",
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Some(Cell::Occupied(Player::O)) => (
            " O ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        _ => ("   ", Style::default().fg(Color::DarkGray)),
    };

    let style = if (row, col) == cursor {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    let paragraph = Paragraph::new(Line::from(Span::styled(symbol, style)))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect, width: u16) {
    let sep = Paragraph::new("─".repeat(width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let bar = vec!["│"; CELL_HEIGHT as usize].join("\n");
    let sep = Paragraph::new(bar).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

/// `n` cell tracks interleaved with one-line separators.
fn interleaved(n: usize, cell: u16) -> Vec<Constraint> {
    let mut constraints = Vec::with_capacity(2 * n - 1);
    for i in 0..n {
        if i > 0 {
            constraints.push(Constraint::Length(1));
        }
        constraints.push(Constraint::Length(cell));
    }
    constraints
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Length(area.height.saturating_sub(height) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Length(area.width.saturating_sub(width) / 2),
        ])
        .split(vert[1])[1]
}
