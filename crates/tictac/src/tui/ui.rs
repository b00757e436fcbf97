//! Stateless UI rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tictac_core::{Board, BoardSize, GameStatus, Player, PreferenceStore, Square, Theme};

use super::app::App;

const CELL_WIDTH: u16 = 7;
const CELL_HEIGHT: u16 = 3;

/// Colours for one theme.
struct Palette {
    base: Style,
    accent: Style,
    muted: Style,
    x: Style,
    o: Style,
    cursor_bg: Color,
}

impl Palette {
    fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                base: Style::default().fg(Color::Black).bg(Color::White),
                accent: Style::default().fg(Color::Magenta).bg(Color::White),
                muted: Style::default().fg(Color::Gray).bg(Color::White),
                x: Style::default().fg(Color::Blue).bg(Color::White),
                o: Style::default().fg(Color::Red).bg(Color::White),
                cursor_bg: Color::Yellow,
            },
            Theme::Dark => Self {
                base: Style::default().fg(Color::White).bg(Color::Black),
                accent: Style::default().fg(Color::Cyan).bg(Color::Black),
                muted: Style::default().fg(Color::DarkGray).bg(Color::Black),
                x: Style::default().fg(Color::LightBlue).bg(Color::Black),
                o: Style::default().fg(Color::LightRed).bg(Color::Black),
                cursor_bg: Color::DarkGray,
            },
        }
    }
}

/// Renders the whole screen.
pub fn draw<S: PreferenceStore>(frame: &mut Frame, app: &App<S>) {
    let palette = Palette::for_theme(app.theme());
    let area = frame.area();
    frame.render_widget(Block::default().style(palette.base), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title + size selector
            Constraint::Length(3), // Status
            Constraint::Min(5),    // Board
            Constraint::Length(3), // Help
        ])
        .split(area);

    draw_header(frame, chunks[0], app.game().size(), &palette);
    draw_status(frame, chunks[1], app, &palette);
    draw_board(frame, chunks[2], app.game().board(), app.cursor(), &palette);
    draw_help(frame, chunks[3], app.theme(), &palette);
}

fn draw_header(frame: &mut Frame, area: Rect, current: BoardSize, palette: &Palette) {
    let mut spans = vec![Span::styled(
        "Tic Tac Toe   ",
        palette.accent.add_modifier(Modifier::BOLD),
    )];
    for (i, size) in BoardSize::ALL.into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" ", palette.base));
        }
        let style = if size == current {
            palette.accent.add_modifier(Modifier::REVERSED | Modifier::BOLD)
        } else {
            palette.muted
        };
        spans.push(Span::styled(format!("[{}] {}", size.side(), size), style));
    }

    let header = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM).style(palette.base));
    frame.render_widget(header, area);
}

fn draw_status<S: PreferenceStore>(frame: &mut Frame, area: Rect, app: &App<S>, palette: &Palette) {
    let style = match app.game().status() {
        GameStatus::InProgress => palette.base,
        GameStatus::Won(Player::X) => palette.x.add_modifier(Modifier::BOLD),
        GameStatus::Won(Player::O) => palette.o.add_modifier(Modifier::BOLD),
        GameStatus::Tie => palette.accent.add_modifier(Modifier::BOLD),
    };
    let status = Paragraph::new(app.game().status_message())
        .style(style)
        .alignment(Alignment::Center);
    frame.render_widget(status, area);
}

fn draw_board(frame: &mut Frame, area: Rect, board: &Board, cursor: usize, palette: &Palette) {
    let side = board.side() as u16;
    let width = side * CELL_WIDTH + side.saturating_sub(1);
    let height = side * CELL_HEIGHT + side.saturating_sub(1);
    let board_area = center_rect(area, width, height);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(interleave(side, CELL_HEIGHT))
        .split(board_area);

    for (row, squares) in board.rows().enumerate() {
        let row_area = rows[row * 2];
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(interleave(side, CELL_WIDTH))
            .split(row_area);

        for (col, square) in squares.iter().enumerate() {
            let selected = board.index(row, col) == Some(cursor);
            draw_cell(frame, cols[col * 2], *square, selected, palette);
            if col + 1 < squares.len() {
                draw_separator_vertical(frame, cols[col * 2 + 1], palette);
            }
        }

        if row + 1 < board.side() {
            draw_separator(frame, rows[row * 2 + 1], palette);
        }
    }
}

/// Constraints for `count` cells of `size` with one-line separators between.
fn interleave(count: u16, size: u16) -> Vec<Constraint> {
    (0..count)
        .flat_map(|i| {
            let cell = std::iter::once(Constraint::Length(size));
            let sep = (i + 1 < count).then_some(Constraint::Length(1));
            cell.chain(sep)
        })
        .collect()
}

fn draw_cell(frame: &mut Frame, area: Rect, square: Square, selected: bool, palette: &Palette) {
    let (symbol, base_style) = match square {
        Square::Empty => (" ", palette.muted),
        Square::Occupied(Player::X) => ("X", palette.x.add_modifier(Modifier::BOLD)),
        Square::Occupied(Player::O) => ("O", palette.o.add_modifier(Modifier::BOLD)),
    };

    let style = if selected {
        base_style.bg(palette.cursor_bg)
    } else {
        base_style
    };

    // Vertically centre the mark inside the cell.
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(symbol, style)),
        Line::from(""),
    ];
    let paragraph = Paragraph::new(lines)
        .style(style)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect, palette: &Palette) {
    let sep = Paragraph::new("─".repeat(area.width as usize)).style(palette.muted);
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect, palette: &Palette) {
    let sep = Paragraph::new(vec![Line::from("│"); area.height as usize]).style(palette.muted);
    frame.render_widget(sep, area);
}

fn draw_help(frame: &mut Frame, area: Rect, theme: Theme, palette: &Palette) {
    let help = format!(
        "arrows/hjkl move  enter/space play  3/4/5 size  r restart  t {}  q quit",
        theme.toggle_label()
    );
    let paragraph = Paragraph::new(help)
        .style(palette.muted)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::TOP).style(palette.base));
    frame.render_widget(paragraph, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
