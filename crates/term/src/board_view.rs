//! BoardView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{FrameBuffer, Glyph, Rgb, Style};
use crate::input::KEY_HELP;
use crate::types::PieceKind;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Width of the side panel, gap included.
const PANEL_W: u16 = 22;

const BORDER: Style = Style::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
const WELL: Style = Style::new(Rgb::new(70, 70, 80), Rgb::new(24, 24, 32));
const SETTLED: Style = Style::new(Rgb::new(150, 150, 160), Rgb::new(24, 24, 32));
const LABEL: Style = Style::new(Rgb::new(140, 140, 150), Rgb::new(0, 0, 0));
const VALUE: Style = Style::new(Rgb::new(240, 240, 240), Rgb::new(0, 0, 0)).bold();
const BANNER: Style = Style::new(Rgb::new(255, 255, 255), Rgb::new(150, 30, 30)).bold();

/// Renders the well, the falling piece and a status panel.
pub struct BoardView {
    /// Terminal columns per board cell.
    cell_w: u16,
}

impl Default for BoardView {
    fn default() -> Self {
        // 2x1 roughly squares up terminal glyphs.
        Self { cell_w: 2 }
    }
}

impl BoardView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
        }
    }

    /// Size of the bordered well in terminal cells.
    pub fn frame_size(&self, snap: &GameSnapshot) -> (u16, u16) {
        (
            snap.cols as u16 * self.cell_w + 2,
            snap.rows as u16 + 2,
        )
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.fill(Glyph::default());

        let (frame_w, frame_h) = self.frame_size(snap);
        let start_x = viewport.width.saturating_sub(frame_w + PANEL_W) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        self.draw_border(fb, start_x, start_y, frame_w, frame_h);

        for row in 0..snap.rows as usize {
            for col in 0..snap.cols as usize {
                let glyph = if snap.cell(row, col) {
                    Glyph::new('█', SETTLED)
                } else {
                    Glyph::new('·', WELL)
                };
                self.draw_cell(fb, start_x, start_y, row as u16, col as u16, glyph);
            }
        }

        if let Some(active) = snap.active {
            let glyph = Glyph::new('█', piece_style(active.kind));
            for (row, col) in active.cells() {
                // Rows above the board are hidden.
                if row < 0 || col < 0 {
                    continue;
                }
                self.draw_cell(fb, start_x, start_y, row as u16, col as u16, glyph);
            }
        }

        self.draw_panel(fb, snap, start_x + frame_w + 2, start_y);

        // Only game over covers the well; a stopped clock shows in the panel.
        if snap.game_over {
            let text = " GAME OVER ";
            let w = text.chars().count() as u16;
            let x = start_x + frame_w.saturating_sub(w) / 2;
            let y = start_y + frame_h / 2;
            fb.text(x, y, text, BANNER);
        }
    }

    /// Render into a fresh framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_cell(&self, fb: &mut FrameBuffer, sx: u16, sy: u16, row: u16, col: u16, g: Glyph) {
        let x = sx + 1 + col * self.cell_w;
        let y = sy + 1 + row;
        for dx in 0..self.cell_w {
            fb.set(x + dx, y, g);
        }
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        let right = x + w - 1;
        let bottom = y + h - 1;
        fb.rect(x + 1, y, w - 2, 1, Glyph::new('─', BORDER));
        fb.rect(x + 1, bottom, w - 2, 1, Glyph::new('─', BORDER));
        fb.rect(x, y + 1, 1, h - 2, Glyph::new('│', BORDER));
        fb.rect(right, y + 1, 1, h - 2, Glyph::new('│', BORDER));
        fb.set(x, y, Glyph::new('┌', BORDER));
        fb.set(right, y, Glyph::new('┐', BORDER));
        fb.set(x, bottom, Glyph::new('└', BORDER));
        fb.set(right, bottom, Glyph::new('┘', BORDER));
    }

    fn draw_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, x: u16, y: u16) {
        fb.text(x, y, "SCORE", LABEL);
        fb.number(x + 7, y, snap.score, VALUE);
        fb.text(x, y + 1, "LINES", LABEL);
        fb.number(x + 7, y + 1, snap.lines, VALUE);
        fb.text(x, y + 2, "CLOCK", LABEL);
        fb.text(x + 7, y + 2, if snap.auto_tick { "RUN" } else { "PAUSE" }, VALUE);
        fb.text(x, y + 3, "INPUT", LABEL);
        fb.text(x + 7, y + 3, if snap.accept_input { "ON" } else { "LOCK" }, VALUE);
        fb.text(x, y + 4, "STATE", LABEL);
        fb.text(x + 7, y + 4, snap.phase.as_str(), VALUE);

        for (i, line) in KEY_HELP.iter().enumerate() {
            fb.text(x, y + 6 + i as u16, line, LABEL.dim());
        }
    }
}

fn piece_style(kind: PieceKind) -> Style {
    let fg = match kind {
        PieceKind::I => Rgb::new(0, 220, 220),
        PieceKind::O => Rgb::new(230, 210, 0),
        PieceKind::T => Rgb::new(170, 60, 220),
        PieceKind::J => Rgb::new(50, 90, 230),
        PieceKind::L => Rgb::new(240, 140, 0),
        PieceKind::S => Rgb::new(60, 200, 60),
        PieceKind::Z => Rgb::new(220, 50, 50),
    };
    Style::new(fg, Rgb::new(24, 24, 32)).bold()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ActiveSnapshot, GameState};
    use crate::types::{GameConfig, PieceKind};

    fn small_snapshot() -> GameSnapshot {
        let mut game = GameState::new(GameConfig::with_size(4, 4));
        game.spawn_kind(PieceKind::O);
        game.snapshot()
    }

    #[test]
    fn frame_matches_board_dimensions() {
        let snap = small_snapshot();
        let view = BoardView::default();
        assert_eq!(view.frame_size(&snap), (10, 6));
    }

    #[test]
    fn active_piece_is_drawn_in_the_well() {
        let snap = small_snapshot();
        let fb = BoardView::default().render(&snap, Viewport::new(10 + PANEL_W, 6));
        // Border at x=0; O spawns at cols 1..=2, i.e. terminal columns 3..=6.
        assert_eq!(fb.line(1).chars().take(10).collect::<String>(), "│··████··│");
        assert_eq!(fb.line(2).chars().take(10).collect::<String>(), "│··████··│");
        assert_eq!(fb.line(3).chars().take(10).collect::<String>(), "│········│");
    }

    #[test]
    fn cells_above_the_board_are_not_drawn() {
        let mut snap = small_snapshot();
        snap.active = snap.active.map(|a| ActiveSnapshot { y: -1, ..a });
        let fb = BoardView::default().render(&snap, Viewport::new(10 + PANEL_W, 6));
        assert!(fb.line(0).starts_with("┌────────┐"));
        assert_eq!(fb.line(1).chars().take(10).collect::<String>(), "│··████··│");
        assert_eq!(fb.line(2).chars().take(10).collect::<String>(), "│········│");
    }

    #[test]
    fn panel_shows_score_and_flags() {
        let snap = small_snapshot();
        let fb = BoardView::default().render(&snap, Viewport::new(40, 20));
        let all: String = (0..fb.height()).map(|y| fb.line(y)).collect();
        assert!(all.contains("SCORE  0"));
        assert!(all.contains("CLOCK  PAUSE"));
        assert!(all.contains("INPUT  ON"));
    }

    #[test]
    fn stopped_clock_leaves_the_well_visible() {
        let mut game = GameState::new(GameConfig::with_size(4, 4));
        game.spawn_kind(PieceKind::O);
        game.step();
        game.step();
        let snap = game.snapshot();
        assert!(!snap.auto_tick);

        let fb = BoardView::default().render(&snap, Viewport::new(10 + PANEL_W, 6));
        // O now sits on rows 2..=3, exactly where a centered banner would go.
        assert_eq!(fb.line(3).chars().take(10).collect::<String>(), "│··████··│");
        assert_eq!(fb.line(4).chars().take(10).collect::<String>(), "│··████··│");
        assert!(!fb.line(3).contains("PAUSE"));
    }

    #[test]
    fn game_over_banner_covers_the_well() {
        let mut snap = small_snapshot();
        snap.game_over = true;
        let fb = BoardView::default().render(&snap, Viewport::new(40, 20));
        let all: String = (0..fb.height()).map(|y| fb.line(y)).collect();
        assert!(all.contains("GAME OVER"));
        assert!(all.contains("CLOCK  PAUSE"));
    }
}
