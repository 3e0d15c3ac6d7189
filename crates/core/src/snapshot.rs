//! Snapshot module - read-only copies of game state for renderers and traces

use crate::game_state::ActivePiece;
use crate::shape::Shape;
use crate::types::{PieceKind, Phase};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl From<ActivePiece> for ActiveSnapshot {
    fn from(value: ActivePiece) -> Self {
        Self {
            kind: value.kind,
            shape: value.shape,
            x: value.x,
            y: value.y,
        }
    }
}

impl ActiveSnapshot {
    /// Absolute `(row, col)` of every filled cell, including rows above the
    /// board.
    pub fn cells(&self) -> impl Iterator<Item = (i16, i16)> + '_ {
        self.shape
            .filled_cells()
            .into_iter()
            .map(move |(r, c)| (self.y as i16 + r as i16, self.x as i16 + c as i16))
    }
}

/// Read-only view of a game, handed to renderers and the session trace.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub rows: u8,
    pub cols: u8,
    /// Row-major settled cells, `rows * cols` long.
    pub grid: Vec<bool>,
    pub active: Option<ActiveSnapshot>,
    pub score: u32,
    pub lines: u32,
    pub phase: Phase,
    pub game_over: bool,
    pub auto_tick: bool,
    pub accept_input: bool,
    pub drop_interval_ms: u32,
}

impl GameSnapshot {
    /// Settled cell at (row, col); false outside the grid.
    pub fn cell(&self, row: usize, col: usize) -> bool {
        row < self.rows as usize
            && col < self.cols as usize
            && self.grid[row * self.cols as usize + col]
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            rows: 0,
            cols: 0,
            grid: Vec::new(),
            active: None,
            score: 0,
            lines: 0,
            phase: Phase::Spawning,
            game_over: false,
            auto_tick: false,
            accept_input: true,
            drop_interval_ms: 0,
        }
    }
}
