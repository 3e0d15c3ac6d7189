//! Key mapping from terminal events to game commands.

use crate::types::GameCommand;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Short key reference, one entry per line, for the side panel.
pub const KEY_HELP: [&str; 8] = [
    "←/→  move",
    "↑    rotate",
    "↓    step",
    "spc  drop",
    "n    new piece",
    "ret  start",
    "p    pause",
    "r    reset",
];

/// Map keyboard input to game commands.
pub fn map_key(key: KeyEvent) -> Option<GameCommand> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }
    match key.code {
        // Movement
        KeyCode::Left
        | KeyCode::Char('h')
        | KeyCode::Char('H')
        | KeyCode::Char('a')
        | KeyCode::Char('A') => Some(GameCommand::MOVE_LEFT),
        KeyCode::Right
        | KeyCode::Char('l')
        | KeyCode::Char('L')
        | KeyCode::Char('d')
        | KeyCode::Char('D') => Some(GameCommand::MOVE_RIGHT),
        KeyCode::Down
        | KeyCode::Char('j')
        | KeyCode::Char('J')
        | KeyCode::Char('s')
        | KeyCode::Char('S') => Some(GameCommand::Step),

        // Rotation
        KeyCode::Up
        | KeyCode::Char('k')
        | KeyCode::Char('K')
        | KeyCode::Char('w')
        | KeyCode::Char('W')
        | KeyCode::Char('x')
        | KeyCode::Char('X') => Some(GameCommand::Rotate),

        // Piece actions
        KeyCode::Char(' ') => Some(GameCommand::HardDrop),
        KeyCode::Char('n') | KeyCode::Char('N') => Some(GameCommand::Spawn),

        // Clock and session
        KeyCode::Enter => Some(GameCommand::Start),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(GameCommand::Pause),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameCommand::Reset),
        KeyCode::Char('i') | KeyCode::Char('I') => Some(GameCommand::ToggleInput),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
