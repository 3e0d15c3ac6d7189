//! Terminal view and key mapping tests

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tui_blockfall::core::{Board, GameState};
use tui_blockfall::input::{map_key, should_quit};
use tui_blockfall::term::{changed_runs, BoardView, Viewport};
use tui_blockfall::types::{GameCommand, GameConfig, PieceKind};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[test]
fn test_view_border_follows_board_size() {
    let snap = GameState::new(GameConfig::default()).snapshot();
    let view = BoardView::default();
    // 10 cols at 2 chars each plus border; 18 rows plus border.
    assert_eq!(view.frame_size(&snap), (22, 20));

    let fb = view.render(&snap, Viewport::new(22, 20));
    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 19).unwrap().ch, '└');
    assert_eq!(fb.get(21, 19).unwrap().ch, '┘');
}

#[test]
fn test_view_draws_settled_cells_two_wide() {
    let mut board = Board::new(6, 6);
    board.set(5, 0);
    let mut game = GameState::with_board(GameConfig::default(), board);
    game.spawn_kind(PieceKind::I);
    let snap = game.snapshot();

    let fb = BoardView::default().render(&snap, Viewport::new(14, 8));
    assert_eq!(fb.get(1, 6).unwrap().ch, '█');
    assert_eq!(fb.get(2, 6).unwrap().ch, '█');
    assert_ne!(fb.get(3, 6).unwrap().ch, '█');
    // I spawns at x=1 on six columns.
    assert_eq!(fb.line(1), "│··████████··│");
}

#[test]
fn test_view_tracks_active_piece_between_frames() {
    let mut game = GameState::new(GameConfig::default());
    game.spawn_kind(PieceKind::O);
    let view = BoardView::default();
    let vp = Viewport::new(60, 24);

    let before = view.render(&game.snapshot(), vp);
    game.step();
    let after = view.render(&game.snapshot(), vp);

    assert!(!changed_runs(&before, &after).is_empty());
}

#[test]
fn test_keys_map_to_commands() {
    assert_eq!(map_key(key(KeyCode::Left)), Some(GameCommand::MOVE_LEFT));
    assert_eq!(map_key(key(KeyCode::Right)), Some(GameCommand::MOVE_RIGHT));
    assert_eq!(map_key(key(KeyCode::Up)), Some(GameCommand::Rotate));
    assert_eq!(map_key(key(KeyCode::Down)), Some(GameCommand::Step));
    assert_eq!(map_key(key(KeyCode::Char(' '))), Some(GameCommand::HardDrop));
    assert_eq!(map_key(key(KeyCode::Char('n'))), Some(GameCommand::Spawn));
    assert_eq!(map_key(key(KeyCode::Enter)), Some(GameCommand::Start));
    assert_eq!(map_key(key(KeyCode::Char('p'))), Some(GameCommand::Pause));
    assert_eq!(map_key(key(KeyCode::Char('r'))), Some(GameCommand::Reset));
    assert_eq!(map_key(key(KeyCode::Char('i'))), Some(GameCommand::ToggleInput));
    assert_eq!(map_key(key(KeyCode::Char('z'))), None);
}

#[test]
fn test_quit_keys() {
    assert!(should_quit(key(KeyCode::Char('q'))));
    assert!(should_quit(key(KeyCode::Esc)));
    assert!(should_quit(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
    assert!(!should_quit(key(KeyCode::Char('c'))));
}

#[test]
fn test_paused_manual_play_keeps_piece_visible() {
    let mut game = GameState::new(GameConfig::with_size(6, 6));
    game.spawn_kind(PieceKind::O);
    for _ in 0..3 {
        game.step();
    }
    let snap = game.snapshot();
    assert!(!snap.auto_tick);

    let fb = BoardView::default().render(&snap, Viewport::new(40, 8));
    let all: String = (0..fb.height()).map(|y| fb.line(y)).collect();
    assert!(all.contains("CLOCK  PAUSE"));
    assert!(!all.contains("PAUSED"));
    // O at x=2 covers rows 3..=4; the well starts at x=2 in a 40-wide view.
    let row = |y: u16| fb.line(y).chars().skip(2).take(14).collect::<String>();
    assert_eq!(row(4), "│····████····│");
    assert_eq!(row(5), "│····████····│");
}
