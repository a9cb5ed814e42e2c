use super::Player;
use crate::error::MoveError;

pub const DEFAULT_ROWS: usize = 6;
pub const DEFAULT_COLS: usize = 7;

/// Number of aligned pieces needed to win.
pub const CONNECT: usize = 4;

/// Horizontal, vertical, and the two diagonals. Each axis is walked in both senses.
const AXES: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Player),
}

impl Cell {
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// A grid coordinate. Row 0 is the top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Position { row, col }
    }

    /// Step by `(dr, dc)`, or `None` if either coordinate would go negative.
    fn offset(self, dr: isize, dc: isize) -> Option<Position> {
        Some(Position {
            row: self.row.checked_add_signed(dr)?,
            col: self.col.checked_add_signed(dc)?,
        })
    }
}

/// Fixed-size grid stored row-major in a flat buffer.
///
/// Occupied cells in each column always form a contiguous run ending at the
/// bottom row, and an occupied cell is never cleared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board with the standard 6x7 dimensions
    pub fn new() -> Self {
        Self::with_size(DEFAULT_ROWS, DEFAULT_COLS)
    }

    /// Create a new empty board with the given dimensions
    pub fn with_size(rows: usize, cols: usize) -> Self {
        Board {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get the cell at a specific position.
    /// Row 0 is the top, row `rows - 1` is the bottom.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        assert!(
            row < self.rows && col < self.cols,
            "cell ({row}, {col}) outside {}x{} board",
            self.rows,
            self.cols
        );
        self.cells[row * self.cols + col]
    }

    /// Non-panicking lookup; `None` outside the grid.
    pub fn cell(&self, pos: Position) -> Option<Cell> {
        if pos.row < self.rows && pos.col < self.cols {
            Some(self.cells[pos.row * self.cols + pos.col])
        } else {
            None
        }
    }

    /// A column is playable iff its top cell is empty. Out-of-range columns
    /// are never playable.
    pub fn is_column_playable(&self, col: usize) -> bool {
        matches!(self.cell(Position::new(0, col)), Some(Cell::Empty))
    }

    /// Drop a piece in a column, returns the position where it landed
    pub fn drop_piece(&mut self, col: usize, player: Player) -> Result<Position, MoveError> {
        if col >= self.cols {
            return Err(MoveError::InvalidColumn {
                col,
                cols: self.cols,
            });
        }

        if !self.is_column_playable(col) {
            return Err(MoveError::ColumnFull(col));
        }

        // Lowest empty row. One exists because the top cell is empty.
        let row = (0..self.rows)
            .rev()
            .find(|&row| self.get(row, col).is_empty())
            .ok_or(MoveError::ColumnFull(col))?;

        self.cells[row * self.cols + col] = Cell::Occupied(player);
        Ok(Position::new(row, col))
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..self.cols).all(|col| !self.is_column_playable(col))
    }

    /// Check whether the piece at `pos` sits on a line of at least
    /// [`CONNECT`] same-owner cells. Empty or out-of-range cells never win.
    pub fn check_win(&self, pos: Position) -> bool {
        let Some(Cell::Occupied(player)) = self.cell(pos) else {
            return false;
        };

        AXES.iter().any(|&(dr, dc)| {
            let count = 1
                + self.run_length(pos, dr, dc, player)
                + self.run_length(pos, -dr, -dc, player);
            count >= CONNECT
        })
    }

    /// Count consecutive `player` cells starting one step away from `pos`.
    fn run_length(&self, pos: Position, dr: isize, dc: isize, player: Player) -> usize {
        let mut count = 0;
        let mut next = pos.offset(dr, dc);
        while let Some(p) = next {
            if self.cell(p) != Some(Cell::Occupied(player)) {
                break;
            }
            count += 1;
            next = p.offset(dr, dc);
        }
        count
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
