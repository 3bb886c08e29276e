//! Stateless rendering for the game screen.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::app::App;
use crate::game::{Outcome, Player, Square};

/// Renders the whole screen: title, board, scores, status, and key help.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Title
            Constraint::Min(11),   // Board
            Constraint::Length(1), // Scores
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(area);

    let title = Paragraph::new("Tic-Tac-Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_board(frame, chunks[1], app);

    let snapshot = app.snapshot();
    let scores = Paragraph::new(format!(
        "X: {}   O: {}   |   {}",
        snapshot.scores.wins(Player::X),
        snapshot.scores.wins(Player::O),
        snapshot.mode.name(),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(scores, chunks[2]);

    let status = Paragraph::new(app.status())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[3]);

    let help = Paragraph::new("1-9 place | arrows+Enter place | m mode | r new round | s reset scores | q quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[4]);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let board_area = center_rect(area, 40, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    draw_row(frame, rows[0], app, [0, 1, 2]);
    draw_separator(frame, rows[1]);
    draw_row(frame, rows[2], app, [3, 4, 5]);
    draw_separator(frame, rows[3]);
    draw_row(frame, rows[4], app, [6, 7, 8]);
}

fn draw_row(frame: &mut Frame, area: Rect, app: &App, cells: [usize; 3]) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    draw_cell(frame, cols[0], app, cells[0]);
    draw_separator_vertical(frame, cols[1]);
    draw_cell(frame, cols[2], app, cells[1]);
    draw_separator_vertical(frame, cols[3]);
    draw_cell(frame, cols[4], app, cells[2]);
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, index: usize) {
    let snapshot = app.snapshot();

    let (symbol, base_style) = match snapshot.board.get(index) {
        Some(Square::Occupied(Player::X)) => (
            " X ",
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Some(Square::Occupied(Player::O)) => (
            " O ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        _ => ("   ", Style::default().fg(Color::DarkGray)),
    };

    let style = if on_winning_line(snapshot.outcome, index) {
        base_style.bg(Color::Green).fg(Color::Black)
    } else if index == app.cursor() && snapshot.running {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    let paragraph =
        Paragraph::new(Line::from(Span::styled(symbol, style))).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn on_winning_line(outcome: Option<Outcome>, index: usize) -> bool {
    matches!(outcome, Some(Outcome::Won { line, .. }) if line.contains(&index))
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─────────────────────────────────────────")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│").style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
