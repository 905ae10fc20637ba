use crate::game::{Grid, PieceColor};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

fn piece_color(color: PieceColor) -> Color {
    match color {
        PieceColor::Red => Color::Red,
        PieceColor::Yellow => Color::Yellow,
    }
}

pub fn render(
    frame: &mut Frame,
    grid: &Grid,
    m: usize,
    selected_column: usize,
    status: &str,
    status_color: Option<PieceColor>,
    message: &Option<String>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(board_height(grid)), // Board
            Constraint::Length(3), // Message
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    render_header(frame, status, status_color, m, chunks[0]);
    render_board(frame, grid, selected_column, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);
}

/// Rows needed for the board: one per grid row plus the frame, the column
/// numbers and the selection indicator.
fn board_height(grid: &Grid) -> u16 {
    u16::try_from(grid.rows())
        .unwrap_or(u16::MAX)
        .saturating_add(4)
}

fn render_header(
    frame: &mut Frame,
    status: &str,
    status_color: Option<PieceColor>,
    m: usize,
    area: Rect,
) {
    let color = status_color.map_or(Color::White, piece_color);
    let header = Paragraph::new(status.to_string())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Connect-{m}")),
        );

    frame.render_widget(header, area);
}

/// Board lines, top row first. Each cell is three characters wide.
fn board_lines(grid: &Grid, selected_column: usize) -> Vec<Line<'static>> {
    let cols = grid.cols();
    let inner = "═".repeat(3 * cols + 1);
    let mut lines = Vec::with_capacity(grid.rows() + 4);

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")]; // Padding (3 chars to match "  ║")
    for col in 0..cols {
        let label = format!("{:^3}", col + 1);
        if col == selected_column {
            col_line.push(Span::styled(
                label,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(label));
        }
    }
    col_line.push(Span::raw("  ")); // Suffix padding to match " ║"
    lines.push(Line::from(col_line));

    lines.push(Line::from(format!("  ╔{inner}╗")));

    for row in (0..grid.rows()).rev() {
        let mut row_spans = vec![Span::raw("  ║")];
        for col in 0..cols {
            let (symbol, color) = match grid.get(row, col) {
                None => (" . ", Color::DarkGray),
                Some(piece) => (" ● ", piece_color(piece)),
            };
            row_spans.push(Span::styled(symbol, Style::default().fg(color)));
        }
        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from(format!("  ╚{inner}╝")));

    let mut indicator_line = vec![Span::raw("   ")];
    for col in 0..cols {
        if col == selected_column {
            indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    indicator_line.push(Span::raw("  "));
    lines.push(Line::from(indicator_line));

    lines
}

fn render_board(frame: &mut Frame, grid: &Grid, selected_column: usize, area: Rect) {
    let board_widget =
        Paragraph::new(board_lines(grid, selected_column)).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text.to_string())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let controls = Paragraph::new(Line::from(
        "←/→: Move  |  Enter/1-9: Drop  |  R: Restart  |  Q: Quit",
    ))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}
