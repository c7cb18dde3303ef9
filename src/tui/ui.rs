//! Stateless UI rendering for tic-tac-toe.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};
use tiktaktoe_core::{Alert, Board, Cell, Player, Position};

use super::app::App;

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(11),   // Board
            Constraint::Length(3), // Status
            Constraint::Length(3), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    let enabled = app.session().is_board_interaction_enabled();
    draw_board(frame, chunks[1], app.board(), app.cursor(), enabled);

    let status = Paragraph::new(app.status_message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new("Arrows/hjkl: move | Enter/1-9: play | R: restart | Q: quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, chunks[3]);

    if let Some(alert) = app.alert() {
        draw_alert(frame, alert);
    }
}

fn draw_board(frame: &mut Frame, area: Rect, board: &Board, cursor: Position, enabled: bool) {
    let board_area = center_rect(area, 29, 11);

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

    for row in 0..3 {
        draw_row(frame, rows[row * 2], board, row, enabled.then_some(cursor));
        if row < 2 {
            let sep = Paragraph::new("─────────┼─────────┼─────────")
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(sep, rows[row * 2 + 1]);
        }
    }
}

fn draw_row(frame: &mut Frame, area: Rect, board: &Board, row: usize, cursor: Option<Position>) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(9),
            Constraint::Length(1),
            Constraint::Length(9),
            Constraint::Length(1),
            Constraint::Length(9),
        ])
        .split(area);

    for col in 0..3 {
        if let Some(pos) = Position::from_row_col(row, col) {
            draw_cell(frame, cols[col * 2], board, pos, cursor == Some(pos));
        }
        if col < 2 {
            let sep = Paragraph::new("│\n│\n│").style(Style::default().fg(Color::DarkGray));
            frame.render_widget(sep, cols[col * 2 + 1]);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, board: &Board, pos: Position, selected: bool) {
    let index = pos.to_index();
    let (symbol, base_style) = match board.get(index).unwrap_or_default() {
        Cell::Empty => ((index + 1).to_string(), Style::default().fg(Color::DarkGray)),
        Cell::Occupied(player @ Player::Human) => (
            player.mark().to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Cell::Occupied(player @ Player::Computer) => (
            player.mark().to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
    };

    let style = if selected {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(format!("   {}   ", symbol), style)),
        Line::from(""),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn draw_alert(frame: &mut Frame, alert: Alert) {
    let area = center_rect(frame.area(), 40, 7);
    frame.render_widget(Clear, area);

    let text = vec![
        Line::from(alert.message),
        Line::from(""),
        Line::from(Span::styled(
            format!("[Enter] {}", alert.button),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )),
    ];
    let popup = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(alert.title)
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(popup, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
