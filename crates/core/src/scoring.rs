//! Scoring module - line clearance reward
//!
//! Every cleared row is worth the same fixed reward, however many rows go in
//! one pass. There are no combo, level or drop bonuses.

use crate::board::Board;

/// Outcome of one line-clearance pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClearResult {
    pub lines: u32,
    pub points: u32,
}

/// Points for `lines` rows cleared in one pass.
pub fn line_clear_points(lines: u32, reward: u32) -> u32 {
    lines.saturating_mul(reward)
}

/// Remove every full row from `board` and price the pass.
pub fn clear_lines(board: &mut Board, reward: u32) -> ClearResult {
    let lines = board.clear_full_rows();
    ClearResult {
        lines,
        points: line_clear_points(lines, reward),
    }
}
