//! Stateless UI rendering for tic-tac-toe.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use tictactoe_engine::{Board, GameState, Position, Square, Symbol};

use super::app::{App, Screen};

/// Renders the current screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(9),    // Body
            Constraint::Length(4), // Status
        ])
        .split(area);

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let state = app.state();
    match app.screen() {
        Screen::Setup => draw_setup(frame, chunks[1], app),
        Screen::Board => draw_game(frame, chunks[1], &state, app.cursor()),
    }

    let mut lines = vec![Line::from(status_line(app, &state))];
    if let Some(message) = app.message() {
        lines.push(Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(Color::Red),
        )));
    }
    let status = Paragraph::new(lines)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);
}

fn status_line(app: &App, state: &GameState) -> String {
    match app.screen() {
        Screen::Setup => "o/x: pick symbol   c: toggle CPU   Enter: start   q: quit".to_string(),
        Screen::Board => match state.outcome() {
            Some(outcome) => format!("{}!   r: play again   s: setup   q: quit", outcome),
            None if state.cpu_moving() => format!("{} is thinking...", state.turn()),
            None => format!("{} to move   arrows + space or 1-9   q: quit", state.turn()),
        },
    }
}

fn draw_setup(frame: &mut Frame, area: Rect, app: &App) {
    let option = |symbol: Symbol| {
        let style = if app.choice() == symbol {
            Style::default().bg(Color::White).fg(Color::Black)
        } else {
            Style::default()
        };
        Span::styled(format!(" {} ", symbol), style)
    };
    let cpu = if app.cpu() { "[x]" } else { "[ ]" };

    let form = Paragraph::new(vec![
        Line::from(vec![
            Span::raw("Your symbol: "),
            option(Symbol::O),
            Span::raw(" "),
            option(Symbol::X),
        ]),
        Line::from(""),
        Line::from(format!("Play against CPU: {}", cpu)),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().title("Setup").borders(Borders::ALL));

    frame.render_widget(form, center_rect(area, 40, 7));
}

fn draw_game(frame: &mut Frame, area: Rect, state: &GameState, cursor: Position) {
    if !state.is_over() {
        draw_board(frame, area, state.board(), Some(cursor));
        return;
    }

    // History is only shown once the game has ended.
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(area);

    draw_board(frame, cols[0], state.board(), None);

    let items: Vec<ListItem> = state
        .history()
        .iter()
        .enumerate()
        .map(|(i, outcome)| ListItem::new(format!("{}. {}", i + 1, outcome)))
        .collect();
    let history = List::new(items).block(Block::default().title("History").borders(Borders::ALL));
    frame.render_widget(history, cols[1]);
}

fn draw_board(frame: &mut Frame, area: Rect, board: &Board, cursor: Option<Position>) {
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

    for (row, chunk) in [0, 2, 4].into_iter().enumerate() {
        let positions = [
            Position::ALL[row * 3],
            Position::ALL[row * 3 + 1],
            Position::ALL[row * 3 + 2],
        ];
        draw_row(frame, rows[chunk], board, cursor, &positions);
    }
    draw_separator(frame, rows[1]);
    draw_separator(frame, rows[3]);
}

fn draw_row(
    frame: &mut Frame,
    area: Rect,
    board: &Board,
    cursor: Option<Position>,
    positions: &[Position; 3],
) {
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

    draw_cell(frame, cols[0], board, cursor, positions[0]);
    draw_separator_vertical(frame, cols[1]);
    draw_cell(frame, cols[2], board, cursor, positions[1]);
    draw_separator_vertical(frame, cols[3]);
    draw_cell(frame, cols[4], board, cursor, positions[2]);
}

fn draw_cell(
    frame: &mut Frame,
    area: Rect,
    board: &Board,
    cursor: Option<Position>,
    pos: Position,
) {
    let (symbol, base_style) = match board.get(pos) {
        Square::Empty => (
            format!(" {} ", pos.to_index() + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(Symbol::X) => (
            " X ".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Symbol::O) => (
            " O ".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let style = if cursor == Some(pos) {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    let paragraph =
        Paragraph::new(Line::from(Span::styled(symbol, style))).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(38)).style(Style::default().fg(Color::DarkGray));
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
