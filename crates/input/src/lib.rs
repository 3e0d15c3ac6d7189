//! Terminal input module.
//!
//! Maps `crossterm` key events one-to-one onto [`crate::types::GameCommand`].
//! There is no key-repeat handling: every press is one command, matching the
//! on-screen buttons of the touch version of the game.

pub mod map;

pub use tui_blockfall_types as types;

pub use map::{map_key, should_quit, KEY_HELP};
