use std::fmt;

use super::PieceColor;

/// Owned snapshot of every cell on a board.
///
/// Row 0 is the bottom of the stack (the row a piece lands in first).
/// Front-ends that draw top-down must iterate rows in reverse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Option<PieceColor>>,
}

impl Grid {
    /// Create a grid with every cell empty
    pub fn empty(rows: usize, cols: usize) -> Self {
        Grid {
            rows,
            cols,
            cells: vec![None; rows * cols],
        }
    }

    pub(crate) fn from_cells(rows: usize, cols: usize, cells: Vec<Option<PieceColor>>) -> Self {
        debug_assert_eq!(cells.len(), rows * cols);
        Grid { rows, cols, cells }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get the piece at (row, col). Out-of-range coordinates read as empty.
    pub fn get(&self, row: usize, col: usize) -> Option<PieceColor> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.cells[row * self.cols + col]
    }

    /// Check whether no cell holds a piece
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    /// Count the pieces of one color
    pub fn count(&self, color: PieceColor) -> usize {
        self.cells.iter().filter(|&&c| c == Some(color)).count()
    }
}

impl fmt::Display for Grid {
    /// Top row first, `R`/`Y` for pieces, framed by a dashed line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "-".repeat(self.cols);
        writeln!(f, "{rule}")?;
        for row in (0..self.rows).rev() {
            for col in 0..self.cols {
                let glyph = self.get(row, col).map_or(' ', PieceColor::glyph);
                write!(f, "{glyph}")?;
            }
            writeln!(f)?;
        }
        write!(f, "{rule}")
    }
}
