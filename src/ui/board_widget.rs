use crate::game::{Cell, Player};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Span,
};

/// Terminal columns taken by one board cell.
pub const CELL_WIDTH: u16 = 3;

/// Left padding before the first cell, `"  ║"`.
const LEFT_PAD: u16 = 3;

/// Right padding after the last cell, `" ║"`.
const RIGHT_PAD: u16 = 2;

pub fn player_color(player: Player) -> Color {
    match player {
        Player::Red => Color::Red,
        Player::Yellow => Color::Yellow,
    }
}

pub fn cell_span(cell: Cell) -> Span<'static> {
    match cell {
        Cell::Empty => Span::styled(" . ", Style::default().fg(Color::DarkGray)),
        Cell::Occupied(player) => {
            Span::styled(" \u{25cf} ", Style::default().fg(player_color(player)))
        }
    }
}

/// Width of every line of the framed board for `cols` columns.
pub fn board_line_width(cols: usize) -> u16 {
    LEFT_PAD + CELL_WIDTH * cols as u16 + RIGHT_PAD
}

/// Map a pointer position to the board column under it.
///
/// `area` is the region the board is rendered into (lines centered). Any row of
/// the area counts; clicks left or right of the cells map to nothing.
pub fn column_at(area: Rect, cols: usize, x: u16, y: u16) -> Option<usize> {
    if y < area.y || y >= area.y.saturating_add(area.height) {
        return None;
    }

    // Same rounding ratatui uses for centered lines.
    let offset = (area.width / 2).saturating_sub(board_line_width(cols) / 2);
    let first_cell = area.x + offset + LEFT_PAD;
    if x < first_cell {
        return None;
    }

    let col = usize::from((x - first_cell) / CELL_WIDTH);
    (col < cols).then_some(col)
}
