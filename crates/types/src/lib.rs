//! Shared types and constants for the falling-block game.
//!
//! Everything here is plain data with no dependencies, so the same types can be
//! used by the core rules, the terminal front end and the session driver.
//!
//! # Board Dimensions
//!
//! The default playfield is 10 columns by 18 rows. Dimensions are chosen per
//! session through [`GameConfig`] and stay fixed for the lifetime of that
//! session.
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Driver tick interval (~60 FPS) |
//! | `DEFAULT_DROP_MS` | 650 | Automatic descent interval |
//!
//! # Examples
//!
//! ```
//! use tui_blockfall_types::{GameCommand, GameConfig, PieceKind};
//!
//! let kind = PieceKind::from_str("t").unwrap();
//! assert_eq!(kind, PieceKind::T);
//!
//! let cmd = GameCommand::from_str("hardDrop").unwrap();
//! assert_eq!(cmd, GameCommand::HardDrop);
//!
//! let config = GameConfig::default();
//! assert_eq!((config.rows, config.cols), (18, 10));
//! ```

/// Default board width in cells.
pub const DEFAULT_COLS: u8 = 10;

/// Default board height in cells.
pub const DEFAULT_ROWS: u8 = 18;

/// Smallest accepted board dimension (the I piece is four cells long).
pub const MIN_BOARD_DIM: u8 = 4;

/// Largest accepted board dimension. Keeps every coordinate inside `i8`.
pub const MAX_BOARD_DIM: u8 = 64;

/// Driver tick interval in milliseconds (16ms ≈ 60 FPS).
pub const TICK_MS: u32 = 16;

/// Default automatic descent interval.
pub const DEFAULT_DROP_MS: u32 = 650;

/// Points awarded per cleared row.
pub const DEFAULT_LINE_REWARD: u32 = 10;

/// The seven piece kinds.
///
/// - **I**: four in a row
/// - **O**: 2x2 square
/// - **T**: three with a bump on top
/// - **J**, **L**: three with a raised end (mirrored)
/// - **S**, **Z**: offset pairs (mirrored)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    J,
    L,
    S,
    Z,
}

impl PieceKind {
    /// Every kind, in catalog order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::J,
        PieceKind::L,
        PieceKind::S,
        PieceKind::Z,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("Z"), Some(PieceKind::Z));
    /// assert_eq!(PieceKind::from_str("q"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            _ => None,
        }
    }

    /// Lowercase single-letter name.
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::J => "j",
            PieceKind::L => "l",
            PieceKind::S => "s",
            PieceKind::Z => "z",
        }
    }
}

/// Lifecycle phase of the active-piece controller.
///
/// The cycle is `Spawning → Falling → Locking → Spawning`. `GameOver` is
/// terminal and only left through a reset. Outside of a running command the
/// controller is always `Falling` or `GameOver`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Spawning,
    Falling,
    Locking,
    GameOver,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Spawning => "spawning",
            Phase::Falling => "falling",
            Phase::Locking => "locking",
            Phase::GameOver => "gameOver",
        }
    }
}

/// Commands accepted by the game.
///
/// Key presses map one-to-one onto these; the session driver forwards them
/// unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameCommand {
    /// Replace the active piece with a fresh random one
    Spawn,
    /// Translate the active piece
    Move { dx: i8, dy: i8 },
    /// Rotate the active piece 90° clockwise
    Rotate,
    /// One descent attempt, locking the piece if it is blocked
    Step,
    /// Descend until blocked, then lock
    HardDrop,
    /// Start automatic descent
    Start,
    /// Stop automatic descent
    Pause,
    /// Clear the board and score and spawn a fresh piece
    Reset,
    /// Flip whether manual piece commands are accepted
    ToggleInput,
}

impl GameCommand {
    pub const MOVE_LEFT: GameCommand = GameCommand::Move { dx: -1, dy: 0 };
    pub const MOVE_RIGHT: GameCommand = GameCommand::Move { dx: 1, dy: 0 };
    pub const MOVE_DOWN: GameCommand = GameCommand::Move { dx: 0, dy: 1 };

    /// Parse a command name (case-insensitive).
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_blockfall_types::GameCommand;
    ///
    /// assert_eq!(GameCommand::from_str("moveLeft"), Some(GameCommand::MOVE_LEFT));
    /// assert_eq!(GameCommand::from_str("rotate"), Some(GameCommand::Rotate));
    /// assert_eq!(GameCommand::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "spawn" => Some(GameCommand::Spawn),
            "moveleft" => Some(GameCommand::MOVE_LEFT),
            "moveright" => Some(GameCommand::MOVE_RIGHT),
            "movedown" => Some(GameCommand::MOVE_DOWN),
            "rotate" => Some(GameCommand::Rotate),
            "step" => Some(GameCommand::Step),
            "harddrop" => Some(GameCommand::HardDrop),
            "start" => Some(GameCommand::Start),
            "pause" => Some(GameCommand::Pause),
            "reset" => Some(GameCommand::Reset),
            "toggleinput" => Some(GameCommand::ToggleInput),
            _ => None,
        }
    }

    /// camelCase name, as written to traces.
    pub fn as_str(&self) -> &'static str {
        match self {
            GameCommand::Spawn => "spawn",
            GameCommand::Move { dx: -1, dy: 0 } => "moveLeft",
            GameCommand::Move { dx: 1, dy: 0 } => "moveRight",
            GameCommand::Move { dx: 0, dy: 1 } => "moveDown",
            GameCommand::Move { .. } => "move",
            GameCommand::Rotate => "rotate",
            GameCommand::Step => "step",
            GameCommand::HardDrop => "hardDrop",
            GameCommand::Start => "start",
            GameCommand::Pause => "pause",
            GameCommand::Reset => "reset",
            GameCommand::ToggleInput => "toggleInput",
        }
    }

    /// Whether the command acts on the active piece and is therefore subject
    /// to the manual-input gate and ignored after game over.
    pub fn is_piece_command(&self) -> bool {
        matches!(
            self,
            GameCommand::Spawn
                | GameCommand::Move { .. }
                | GameCommand::Rotate
                | GameCommand::Step
                | GameCommand::HardDrop
        )
    }
}

/// Per-session game parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub rows: u8,
    pub cols: u8,
    pub drop_interval_ms: u32,
    pub line_reward: u32,
    pub seed: u32,
    /// Initial value of the manual-input gate.
    pub accept_input: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            drop_interval_ms: DEFAULT_DROP_MS,
            line_reward: DEFAULT_LINE_REWARD,
            seed: 1,
            accept_input: true,
        }
    }
}

impl GameConfig {
    /// Config for a board of the given size with every other field defaulted.
    pub fn with_size(rows: u8, cols: u8) -> Self {
        Self {
            rows,
            cols,
            ..Self::default()
        }
    }

    /// Whether both dimensions lie in `MIN_BOARD_DIM..=MAX_BOARD_DIM`.
    pub fn has_valid_size(&self) -> bool {
        (MIN_BOARD_DIM..=MAX_BOARD_DIM).contains(&self.rows)
            && (MIN_BOARD_DIM..=MAX_BOARD_DIM).contains(&self.cols)
    }

    /// The same config with both dimensions clamped into
    /// `MIN_BOARD_DIM..=MAX_BOARD_DIM`.
    pub fn clamped(self) -> Self {
        Self {
            rows: self.rows.clamp(MIN_BOARD_DIM, MAX_BOARD_DIM),
            cols: self.cols.clamp(MIN_BOARD_DIM, MAX_BOARD_DIM),
            ..self
        }
    }
}
