//! Core game logic - pure, deterministic and testable
//!
//! This crate holds the rules of the falling-block puzzle and nothing else:
//! no terminal, no async runtime, no wall clock. Time enters only through
//! [`GameState::tick`], which a driver calls with elapsed milliseconds.
//!
//! # Module Structure
//!
//! - [`shape`]: the seven piece matrices and clockwise rotation
//! - [`board`]: occupancy grid, row removal and full-row clearance
//! - [`collision`]: placement validity and merging a piece into the board
//! - [`scoring`]: per-line reward for a clearance pass
//! - [`clock`]: running flag and interval of automatic descent
//! - [`game_state`]: the active piece controller tying it all together
//! - [`rng`]: seeded uniform piece selection
//! - [`snapshot`]: read-only view for renderers
//!
//! # Example
//!
//! ```
//! use tui_blockfall_core::{GameState, StepOutcome};
//! use tui_blockfall_types::{GameCommand, GameConfig};
//!
//! let mut game = GameState::new(GameConfig::default());
//! game.apply_command(GameCommand::MOVE_LEFT);
//! game.apply_command(GameCommand::Rotate);
//! assert!(matches!(game.hard_drop(), StepOutcome::Locked(_)));
//!
//! // Automatic descent only happens once the clock runs.
//! game.start();
//! let y = game.active().unwrap().y;
//! game.tick(700);
//! assert_eq!(game.active().unwrap().y, y + 1);
//! ```

pub mod board;
pub mod clock;
pub mod collision;
pub mod game_state;
pub mod rng;
pub mod scoring;
pub mod shape;
pub mod snapshot;

pub use tui_blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use clock::DropClock;
pub use collision::{collides, merge};
pub use game_state::{ActivePiece, GameState, LockEvent, StepOutcome};
pub use rng::SimpleRng;
pub use scoring::{clear_lines, line_clear_points, ClearResult};
pub use shape::{rotate_cw, shape_of, Shape};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
