//! Stateless UI rendering.

use super::app::App;
use morpion_engine::{Cell, GameMode, Phase, Position, Side, winning_line};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use strum::IntoEnumIterator;

const BOARD_WIDTH: u16 = 38;
const BOARD_HEIGHT: u16 = 11;

/// Renders the menu or the board, depending on the round phase.
pub fn draw(frame: &mut Frame, app: &App) {
    match app.game().phase() {
        Phase::Menu => draw_menu(frame, app),
        Phase::InProgress | Phase::Won(_) | Phase::Drawn => draw_game(frame, app),
    }
}

/// Screen areas: title, board, status, help.
fn screen_layout(area: Rect) -> [Rect; 4] {
    Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(BOARD_HEIGHT),
        Constraint::Length(3),
        Constraint::Length(1),
    ])
    .areas(area)
}

/// Areas of the nine cells, in row-major order, for a frame of size `area`.
///
/// Rendering and pointer hit-testing both go through this function so a
/// click always lands on the cell that was drawn there.
pub fn cell_areas(area: Rect) -> [Rect; 9] {
    let [_, board_area, _, _] = screen_layout(area);
    let board_area = center_rect(board_area, BOARD_WIDTH, BOARD_HEIGHT);

    let rows = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(3),
    ])
    .split(board_area);

    let mut cells = [Rect::default(); 9];
    for (r, row_area) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
        let cols = Layout::horizontal([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(row_area);
        for (c, col_area) in [cols[0], cols[2], cols[4]].into_iter().enumerate() {
            cells[r * 3 + c] = col_area;
        }
    }
    cells
}

fn draw_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new("Morpion - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, area);
}

fn draw_menu(frame: &mut Frame, app: &App) {
    let [title_area, body_area, status_area, help_area] = screen_layout(frame.area());
    draw_title(frame, title_area);

    let mut lines = vec![Line::from("Choose a mode:"), Line::from("")];
    for (i, mode) in GameMode::iter().enumerate() {
        let selected = mode == app.menu_mode();
        let style = if selected {
            Style::default().fg(Color::Black).bg(Color::White)
        } else {
            Style::default()
        };
        let marker = if selected { ">" } else { " " };
        lines.push(Line::from(Span::styled(
            format!("{} {}. {}", marker, i + 1, mode.label()),
            style,
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(format!(
        "Moves first against the computer: {}",
        app.first_player().label()
    )));

    let menu = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(menu, center_rect(body_area, 50, 9));

    draw_status(frame, status_area, app.status_message());
    draw_help(frame, help_area, "↑/↓ or 1/2: mode   f: who starts   Enter: play   q: quit");
}

fn draw_game(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let [title_area, _, status_area, help_area] = screen_layout(area);
    draw_title(frame, title_area);

    let cells = cell_areas(area);
    let highlight = winning_line(app.game().board()).map(|(_, line)| line);
    for pos in Position::ALL {
        let winning = highlight.is_some_and(|line| line.contains(&pos));
        draw_cell(frame, cells[pos.index()], app, pos, winning);
    }
    draw_grid_lines(frame, &cells);

    draw_status(frame, status_area, app.status_message());
    draw_help(
        frame,
        help_area,
        "arrows + Enter, 1-9 or click: play   r: restart   m: menu   q: quit",
    );
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, pos: Position, winning: bool) {
    let (symbol, base_style) = match app.game().board().get(pos) {
        Cell::Empty => (
            (pos.index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Cell::Occupied(Side::First) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Cell::Occupied(Side::Second) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let style = if winning {
        base_style.bg(Color::Green).fg(Color::Black)
    } else if pos == app.cursor() && app.game().phase() == Phase::InProgress {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    let paragraph = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(format!("  {}  ", symbol), style)),
        Line::from(""),
    ])
    .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

fn draw_grid_lines(frame: &mut Frame, cells: &[Rect; 9]) {
    let style = Style::default().fg(Color::DarkGray);
    let top = cells[0];
    let width = (cells[2].x + cells[2].width).saturating_sub(top.x);
    let height = (cells[6].y + cells[6].height).saturating_sub(top.y);

    // Horizontal separators sit on the row just below rows 0 and 1.
    for r in [0, 3] {
        let y = cells[r].y + cells[r].height;
        let sep = Paragraph::new("─".repeat(width as usize)).style(style);
        frame.render_widget(sep, Rect::new(top.x, y, width, 1));
    }

    // Vertical separators sit on the column just right of cols 0 and 1.
    for c in [0, 1] {
        let x = cells[c].x + cells[c].width;
        let sep = Paragraph::new(vec![Line::from("│"); height as usize]).style(style);
        frame.render_widget(sep, Rect::new(x, top.y, 1, height));
    }
}

fn draw_status(frame: &mut Frame, area: Rect, status: &str) {
    let status_text = Paragraph::new(status)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status_text, area);
}

fn draw_help(frame: &mut Frame, area: Rect, help: &str) {
    let help = Paragraph::new(help)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let [_, middle, _] = Layout::vertical([
        Constraint::Length((area.height.saturating_sub(height)) / 2),
        Constraint::Length(height.min(area.height)),
        Constraint::Min(0),
    ])
    .areas(area);

    let [_, center, _] = Layout::horizontal([
        Constraint::Length((area.width.saturating_sub(width)) / 2),
        Constraint::Length(width.min(area.width)),
        Constraint::Min(0),
    ])
    .areas(middle);
    center
}
