use crate::error::BoardError;

use super::{Grid, PieceColor};

/// Capability set shared by the real board and its test doubles.
///
/// Front-ends and policies only ever see a board through this trait, so any
/// implementation can stand in for [`Board`](super::Board).
pub trait ConnectM {
    /// Check whether a piece can be dropped in `col`.
    /// Out-of-range columns are never droppable.
    fn can_drop(&self, col: usize) -> bool;

    /// Check whether dropping a `color` piece in `col` would complete a run.
    /// Returns `false` when the column is not droppable. Never mutates.
    fn would_win(&self, col: usize, color: PieceColor) -> bool;

    /// Drop a piece in `col`. Fails with [`BoardError::IllegalMove`] and
    /// leaves the board untouched if the column is full or out of range.
    fn drop_piece(&mut self, col: usize, color: PieceColor) -> Result<(), BoardError>;

    /// Remove every piece and clear the winner.
    fn reset(&mut self);

    /// The game is done once there is a winner or no column is droppable.
    fn is_done(&self) -> bool;

    /// The cached winner, if any.
    fn winner(&self) -> Option<PieceColor>;

    /// Snapshot of every cell.
    fn grid(&self) -> Grid;

    fn num_rows(&self) -> usize;

    fn num_cols(&self) -> usize;

    /// Run length needed to win.
    fn m(&self) -> usize;

    /// Columns that can currently take a piece, in ascending order.
    fn droppable_columns(&self) -> Vec<usize> {
        (0..self.num_cols()).filter(|&col| self.can_drop(col)).collect()
    }
}
