//! Collision and merge - placement validity and committing pieces to the board

use crate::board::Board;
use crate::shape::Shape;

/// Whether `shape` anchored at column `x`, row `y` is an invalid placement.
///
/// A filled cell collides when its column is outside `[0, cols)`, its row is
/// at or past the bottom, or it lands on a filled board cell. Cells above
/// row 0 only get the horizontal check, so pieces may spawn or rotate into
/// the hidden area over the board.
pub fn collides(board: &Board, shape: &Shape, x: i8, y: i8) -> bool {
    let cols = board.cols() as i16;
    let rows = board.rows() as i16;

    shape.filled_cells().iter().any(|&(r, c)| {
        let col = x as i16 + c as i16;
        let row = y as i16 + r as i16;
        if col < 0 || col >= cols || row >= rows {
            return true;
        }
        row >= 0 && board.test(row as i8, col as i8)
    })
}

/// Write every filled cell of `shape` at `(x, y)` into the board.
///
/// Cells that fall outside the board (above row 0) are dropped. Returns the
/// number of cells written.
pub fn merge(board: &mut Board, shape: &Shape, x: i8, y: i8) -> usize {
    let mut written = 0;
    for (r, c) in shape.filled_cells() {
        let row = y as i16 + r as i16;
        let col = x as i16 + c as i16;
        if row < 0 || col < 0 || row > i8::MAX as i16 || col > i8::MAX as i16 {
            continue;
        }
        if board.set(row as i8, col as i8) {
            written += 1;
        }
    }
    written
}
