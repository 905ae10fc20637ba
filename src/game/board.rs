use std::fmt;

use tracing::{debug, trace};

use crate::error::BoardError;

use super::{ConnectM, Grid, PieceColor};

/// Opposite direction pairs (row delta, col delta) scanned around a piece:
/// horizontal, vertical, and the two diagonals.
const DIRECTION_PAIRS: [((isize, isize), (isize, isize)); 4] = [
    ((0, -1), (0, 1)),
    ((-1, 0), (1, 0)),
    ((-1, -1), (1, 1)),
    ((-1, 1), (1, -1)),
];

/// Reject dimensions that can never hold a run of `m`.
pub(crate) fn check_dimensions(rows: usize, cols: usize, m: usize) -> Result<(), BoardError> {
    if m == 0 || rows < m || cols < m {
        return Err(BoardError::InvalidDimensions { rows, cols, m });
    }
    Ok(())
}

/// Board dimensions, loadable from the `[board]` config section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub rows: usize,
    pub cols: usize,
    pub m: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            rows: 6,
            cols: 7,
            m: 4,
        }
    }
}

impl BoardConfig {
    pub fn validate(&self) -> Result<(), BoardError> {
        check_dimensions(self.rows, self.cols, self.m)
    }

    /// Build an empty board with these dimensions
    pub fn build(&self) -> Result<Board, BoardError> {
        Board::new(self.rows, self.cols, self.m)
    }
}

/// A Connect-M board: `rows` x `cols` cells, `m` in a row to win.
///
/// Cells are stored row-major with row 0 at the bottom; `heights[col]` is the
/// number of pieces in a column and therefore the row the next piece lands in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    m: usize,
    cells: Vec<Option<PieceColor>>,
    heights: Vec<usize>,
    winner: Option<PieceColor>,
}

impl Board {
    /// Create a new empty board
    pub fn new(rows: usize, cols: usize, m: usize) -> Result<Self, BoardError> {
        check_dimensions(rows, cols, m)?;
        Ok(Board {
            rows,
            cols,
            m,
            cells: vec![None; rows * cols],
            heights: vec![0; cols],
            winner: None,
        })
    }

    /// Standard 6x7 Connect Four
    pub fn connect_four() -> Self {
        Board {
            rows: 6,
            cols: 7,
            m: 4,
            cells: vec![None; 6 * 7],
            heights: vec![0; 7],
            winner: None,
        }
    }

    /// Get the piece at (row, col), row 0 being the bottom
    pub fn get(&self, row: usize, col: usize) -> Option<PieceColor> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.cells[row * self.cols + col]
    }

    /// Number of pieces in a column (0 for out-of-range columns)
    pub fn column_height(&self, col: usize) -> usize {
        self.heights.get(col).copied().unwrap_or(0)
    }

    /// Total number of pieces on the board
    pub fn move_count(&self) -> usize {
        self.heights.iter().sum()
    }

    /// Signed lookup; anything off the board never matches a color.
    fn cell_at(&self, row: isize, col: isize) -> Option<PieceColor> {
        if row < 0 || col < 0 {
            return None;
        }
        self.get(row as usize, col as usize)
    }

    /// Count consecutive `color` pieces stepping away from (row, col),
    /// excluding the origin, capped at `m - 1`.
    fn run_length(
        &self,
        row: usize,
        col: usize,
        (dr, dc): (isize, isize),
        color: PieceColor,
    ) -> usize {
        let (mut r, mut c) = (row as isize, col as isize);
        let mut count = 0;
        while count < self.m - 1 {
            r += dr;
            c += dc;
            if self.cell_at(r, c) != Some(color) {
                break;
            }
            count += 1;
        }
        count
    }

    /// Check whether a `color` piece at (row, col) sits on a run of `m`.
    ///
    /// The scan only reads cells strictly away from the origin, so the origin
    /// itself may be empty: this is what lets `would_win` evaluate a
    /// hypothetical drop without writing to the grid.
    fn wins_at(&self, row: usize, col: usize, color: PieceColor) -> bool {
        DIRECTION_PAIRS.iter().any(|&(forward, backward)| {
            let ahead = self.run_length(row, col, forward, color);
            let behind = self.run_length(row, col, backward, color);
            ahead + 1 + behind >= self.m
        })
    }
}

impl ConnectM for Board {
    fn can_drop(&self, col: usize) -> bool {
        col < self.cols && self.heights[col] < self.rows
    }

    fn would_win(&self, col: usize, color: PieceColor) -> bool {
        if !self.can_drop(col) {
            return false;
        }
        self.wins_at(self.heights[col], col, color)
    }

    fn drop_piece(&mut self, col: usize, color: PieceColor) -> Result<(), BoardError> {
        if !self.can_drop(col) {
            return Err(BoardError::IllegalMove { col });
        }

        let row = self.heights[col];
        self.cells[row * self.cols + col] = Some(color);
        self.heights[col] += 1;
        trace!(row, col, color = color.name(), "dropped piece");

        // The first winner sticks, even if play continues afterwards.
        if self.winner.is_none() && self.wins_at(row, col, color) {
            debug!(row, col, color = color.name(), "winning run completed");
            self.winner = Some(color);
        }
        Ok(())
    }

    fn reset(&mut self) {
        self.cells.fill(None);
        self.heights.fill(0);
        self.winner = None;
    }

    fn is_done(&self) -> bool {
        self.winner.is_some() || self.heights.iter().all(|&h| h == self.rows)
    }

    fn winner(&self) -> Option<PieceColor> {
        self.winner
    }

    fn grid(&self) -> Grid {
        Grid::from_cells(self.rows, self.cols, self.cells.clone())
    }

    fn num_rows(&self) -> usize {
        self.rows
    }

    fn num_cols(&self) -> usize {
        self.cols
    }

    fn m(&self) -> usize {
        self.m
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::connect_four()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.grid(), f)
    }
}
