//! Stand-in implementations of [`ConnectM`].
//!
//! - [`ConnectMStub`]: every in-range column is droppable, nothing ever happens.
//! - [`ConnectMMock`]: plays out on the bottom row only and ends after `m`
//!   moves with a fixed winner.
//! - [`ScriptedBoard`]: answers `can_drop` / `would_win` from tables, for
//!   exercising policies.

use crate::error::BoardError;

use super::{check_dimensions, ConnectM, Grid, PieceColor};

/// A board that accepts every in-range move and never changes.
#[derive(Debug, Clone)]
pub struct ConnectMStub {
    rows: usize,
    cols: usize,
    m: usize,
}

impl ConnectMStub {
    pub fn new(rows: usize, cols: usize, m: usize) -> Result<Self, BoardError> {
        check_dimensions(rows, cols, m)?;
        Ok(ConnectMStub { rows, cols, m })
    }
}

impl ConnectM for ConnectMStub {
    fn can_drop(&self, col: usize) -> bool {
        col < self.cols
    }

    fn would_win(&self, _col: usize, _color: PieceColor) -> bool {
        false
    }

    fn drop_piece(&mut self, col: usize, _color: PieceColor) -> Result<(), BoardError> {
        if !self.can_drop(col) {
            return Err(BoardError::IllegalMove { col });
        }
        Ok(())
    }

    fn reset(&mut self) {}

    fn is_done(&self) -> bool {
        false
    }

    fn winner(&self) -> Option<PieceColor> {
        None
    }

    fn grid(&self) -> Grid {
        Grid::empty(self.rows, self.cols)
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

/// A board whose outcome is fixed in advance.
///
/// Pieces only ever land on the bottom row. After `m` moves the game is over:
/// Red wins when `m` is even, Yellow when it is odd.
#[derive(Debug, Clone)]
pub struct ConnectMMock {
    rows: usize,
    cols: usize,
    m: usize,
    bottom: Vec<Option<PieceColor>>,
    num_moves: usize,
}

impl ConnectMMock {
    pub fn new(rows: usize, cols: usize, m: usize) -> Result<Self, BoardError> {
        check_dimensions(rows, cols, m)?;
        Ok(ConnectMMock {
            rows,
            cols,
            m,
            bottom: vec![None; cols],
            num_moves: 0,
        })
    }

    /// The color that wins once `m` moves have been played.
    pub fn scripted_winner(&self) -> PieceColor {
        if self.m % 2 == 0 {
            PieceColor::Red
        } else {
            PieceColor::Yellow
        }
    }

    pub fn num_moves(&self) -> usize {
        self.num_moves
    }
}

impl ConnectM for ConnectMMock {
    fn can_drop(&self, col: usize) -> bool {
        !self.is_done() && col < self.cols && self.bottom[col].is_none()
    }

    fn would_win(&self, col: usize, color: PieceColor) -> bool {
        self.can_drop(col) && self.num_moves + 1 == self.m && color == self.scripted_winner()
    }

    fn drop_piece(&mut self, col: usize, color: PieceColor) -> Result<(), BoardError> {
        if !self.can_drop(col) {
            return Err(BoardError::IllegalMove { col });
        }
        self.bottom[col] = Some(color);
        self.num_moves += 1;
        Ok(())
    }

    fn reset(&mut self) {
        self.bottom.fill(None);
        self.num_moves = 0;
    }

    fn is_done(&self) -> bool {
        self.num_moves >= self.m
    }

    fn winner(&self) -> Option<PieceColor> {
        self.is_done().then(|| self.scripted_winner())
    }

    fn grid(&self) -> Grid {
        let mut cells = vec![None; self.rows * self.cols];
        cells[..self.cols].copy_from_slice(&self.bottom);
        Grid::from_cells(self.rows, self.cols, cells)
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

/// A board that only answers the two questions a policy asks.
///
/// `can_drop` and `would_win` read from per-column tables; every other method
/// is inert.
#[derive(Debug, Clone)]
pub struct ScriptedBoard {
    rows: usize,
    cols: usize,
    m: usize,
    droppable: Vec<bool>,
    winners: Vec<Option<PieceColor>>,
}

impl ScriptedBoard {
    /// All columns droppable, none winning.
    pub fn new(rows: usize, cols: usize, m: usize) -> Result<Self, BoardError> {
        check_dimensions(rows, cols, m)?;
        Ok(ScriptedBoard {
            rows,
            cols,
            m,
            droppable: vec![true; cols],
            winners: vec![None; cols],
        })
    }

    /// Replace the droppable table. Missing entries are not droppable.
    pub fn set_droppable(&mut self, droppable: &[bool]) {
        for (col, slot) in self.droppable.iter_mut().enumerate() {
            *slot = droppable.get(col).copied().unwrap_or(false);
        }
    }

    /// Replace the winner table: `winners[col]` is the color that wins by
    /// dropping there. Missing entries win for nobody.
    pub fn set_winners(&mut self, winners: &[Option<PieceColor>]) {
        for (col, slot) in self.winners.iter_mut().enumerate() {
            *slot = winners.get(col).copied().flatten();
        }
    }
}

impl ConnectM for ScriptedBoard {
    fn can_drop(&self, col: usize) -> bool {
        self.droppable.get(col).copied().unwrap_or(false)
    }

    fn would_win(&self, col: usize, color: PieceColor) -> bool {
        self.can_drop(col) && self.winners[col] == Some(color)
    }

    fn drop_piece(&mut self, col: usize, _color: PieceColor) -> Result<(), BoardError> {
        if !self.can_drop(col) {
            return Err(BoardError::IllegalMove { col });
        }
        Ok(())
    }

    fn reset(&mut self) {}

    fn is_done(&self) -> bool {
        false
    }

    fn winner(&self) -> Option<PieceColor> {
        None
    }

    fn grid(&self) -> Grid {
        Grid::empty(self.rows, self.cols)
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stub_accepts_everything() {
        let mut stub = ConnectMStub::new(6, 7, 4).unwrap();
        for col in 0..7 {
            assert!(stub.can_drop(col));
            assert!(!stub.would_win(col, PieceColor::Red));
            stub.drop_piece(col, PieceColor::Red).unwrap();
        }
        assert!(!stub.can_drop(7));
        assert!(!stub.is_done());
        assert!(stub.grid().is_empty());
    }

    #[test]
    fn test_stub_rejects_out_of_range_column() {
        let mut stub = ConnectMStub::new(6, 7, 4).unwrap();
        assert_eq!(
            stub.drop_piece(7, PieceColor::Yellow),
            Err(BoardError::IllegalMove { col: 7 })
        );
        assert_eq!(
            stub.drop_piece(usize::MAX, PieceColor::Red),
            Err(BoardError::IllegalMove { col: usize::MAX })
        );
        assert!(stub.grid().is_empty());
    }

    #[test]
    fn test_mock_ends_after_m_moves() {
        let mut mock = ConnectMMock::new(6, 7, 4).unwrap();
        let mut color = PieceColor::Yellow;
        for col in 0..3 {
            assert!(!mock.is_done());
            mock.drop_piece(col, color).unwrap();
            color = color.other();
        }
        assert!(mock.would_win(3, PieceColor::Red));
        assert!(!mock.would_win(3, PieceColor::Yellow));

        mock.drop_piece(3, color).unwrap();
        assert!(mock.is_done());
        assert_eq!(mock.winner(), Some(PieceColor::Red));
        assert_eq!(mock.grid().get(0, 3), Some(PieceColor::Red));
        assert_eq!(mock.grid().get(1, 3), None);
    }

    #[test]
    fn test_mock_odd_m_yellow_wins() {
        let mut mock = ConnectMMock::new(5, 5, 3).unwrap();
        for col in 0..3 {
            mock.drop_piece(col, PieceColor::Red).unwrap();
        }
        assert_eq!(mock.winner(), Some(PieceColor::Yellow));
    }

    #[test]
    fn test_mock_rejects_occupied_column_and_resets() {
        let mut mock = ConnectMMock::new(6, 7, 4).unwrap();
        mock.drop_piece(2, PieceColor::Yellow).unwrap();
        assert_eq!(
            mock.drop_piece(2, PieceColor::Red),
            Err(BoardError::IllegalMove { col: 2 })
        );
        mock.reset();
        assert_eq!(mock.num_moves(), 0);
        assert!(mock.can_drop(2));
    }

    #[test]
    fn test_scripted_board_tables() {
        let mut board = ScriptedBoard::new(6, 7, 4).unwrap();
        board.set_droppable(&[true, false, true]);
        board.set_winners(&[Some(PieceColor::Red), Some(PieceColor::Red)]);

        assert!(board.can_drop(0));
        assert!(!board.can_drop(1));
        assert!(!board.can_drop(3));
        assert!(!board.can_drop(99));

        assert!(board.would_win(0, PieceColor::Red));
        assert!(!board.would_win(0, PieceColor::Yellow));
        // Not droppable, so it cannot win either
        assert!(!board.would_win(1, PieceColor::Red));
        assert!(!board.would_win(99, PieceColor::Red));
    }

    #[test]
    fn test_doubles_validate_dimensions() {
        assert!(ConnectMStub::new(3, 7, 4).is_err());
        assert!(ConnectMMock::new(6, 2, 4).is_err());
        assert!(ScriptedBoard::new(6, 7, 0).is_err());
    }
}
