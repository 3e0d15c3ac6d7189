//! Terminal front end.
//!
//! Snapshots are drawn into a plain framebuffer by [`BoardView`] (pure, no
//! I/O) and flushed by [`TerminalRenderer`], which only re-sends glyphs that
//! changed since the previous frame.

pub mod board_view;
pub mod fb;
pub mod renderer;

pub use tui_blockfall_core as core;
pub use tui_blockfall_input as input;
pub use tui_blockfall_types as types;

pub use board_view::{BoardView, Viewport};
pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use renderer::{changed_runs, encode_changes, encode_full, TerminalRenderer};
