//! Game state module - the active piece controller
//!
//! Ties the board, the shape catalog, collision, line clearance and the drop
//! clock together. Manual commands and clock ticks both end up in the same
//! descent/lock path, so a piece behaves identically whichever triggered it.

use crate::board::Board;
use crate::clock::DropClock;
use crate::collision::{collides, merge};
use crate::rng::SimpleRng;
use crate::scoring::clear_lines;
use crate::shape::{rotate_cw, shape_of, Shape};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{GameCommand, GameConfig, PieceKind, Phase};

/// The falling piece: a shape matrix anchored at column `x`, row `y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl ActivePiece {
    /// Default orientation of `kind`, horizontally centered on row 0.
    pub fn spawn(kind: PieceKind, cols: u8) -> Self {
        let shape = shape_of(kind);
        let x = (cols as i16 - shape.width() as i16).div_euclid(2);
        Self {
            kind,
            shape,
            x: x as i8,
            y: 0,
        }
    }

    pub fn collides(&self, board: &Board) -> bool {
        collides(board, &self.shape, self.x, self.y)
    }

    /// The piece shifted by `(dx, dy)`, or `None` if a coordinate would
    /// leave the `i8` range.
    fn moved(self, dx: i8, dy: i8) -> Option<Self> {
        Some(Self {
            x: self.x.checked_add(dx)?,
            y: self.y.checked_add(dy)?,
            ..self
        })
    }
}

/// What a lock did to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LockEvent {
    pub cells: u32,
    pub lines: u32,
    pub points: u32,
    /// The follow-up spawn collided.
    pub game_over: bool,
}

/// Result of one descent attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Not applied: game over, input disabled, or no active piece.
    Ignored,
    /// The piece moved down one row.
    Moved,
    /// The piece could not descend and was merged into the board.
    Locked(LockEvent),
}

impl StepOutcome {
    pub fn is_applied(&self) -> bool {
        !matches!(self, StepOutcome::Ignored)
    }
}

/// One game session: board, active piece, score and drop clock.
#[derive(Debug, Clone)]
pub struct GameState {
    config: GameConfig,
    board: Board,
    active: Option<ActivePiece>,
    rng: SimpleRng,
    clock: DropClock,
    phase: Phase,
    score: u32,
    lines: u32,
    accept_input: bool,
    pieces_spawned: u32,
    last_lock: Option<LockEvent>,
}

impl GameState {
    /// Create a game with an empty board and a freshly spawned piece.
    /// The drop clock starts stopped.
    ///
    /// Dimensions outside `MIN_BOARD_DIM..=MAX_BOARD_DIM` are clamped.
    pub fn new(config: GameConfig) -> Self {
        let config = config.clamped();
        let board = Board::new(config.rows, config.cols);
        Self::with_board(config, board)
    }

    /// Create a game on a pre-filled board and spawn the first piece.
    ///
    /// The board's dimensions override `config.rows` and `config.cols`. A
    /// board outside `MIN_BOARD_DIM..=MAX_BOARD_DIM` is replaced by an empty
    /// one of the clamped size. A later [`reset`](Self::reset) starts from an
    /// empty board.
    pub fn with_board(config: GameConfig, board: Board) -> Self {
        let sized = GameConfig {
            rows: board.rows(),
            cols: board.cols(),
            ..config
        };
        let (config, board) = if sized.has_valid_size() {
            (sized, board)
        } else {
            let clamped = sized.clamped();
            log::warn!(
                "board {}x{} out of range, using {}x{}",
                sized.rows,
                sized.cols,
                clamped.rows,
                clamped.cols
            );
            (clamped, Board::new(clamped.rows, clamped.cols))
        };
        let mut state = Self {
            config,
            board,
            active: None,
            rng: SimpleRng::new(config.seed),
            clock: DropClock::new(config.drop_interval_ms),
            phase: Phase::Spawning,
            score: 0,
            lines: 0,
            accept_input: config.accept_input,
            pieces_spawned: 0,
            last_lock: None,
        };
        state.spawn_random();
        state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    #[cfg(test)]
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn active(&self) -> Option<ActivePiece> {
        self.active
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// Whether the drop clock is running.
    pub fn auto_tick(&self) -> bool {
        self.clock.is_running()
    }

    pub fn accept_input(&self) -> bool {
        self.accept_input
    }

    pub fn clock(&self) -> &DropClock {
        &self.clock
    }

    pub fn pieces_spawned(&self) -> u32 {
        self.pieces_spawned
    }

    /// Take the most recent lock event, if any.
    pub fn take_last_lock(&mut self) -> Option<LockEvent> {
        self.last_lock.take()
    }

    fn enter(&mut self, phase: Phase) {
        if self.phase != phase {
            log::trace!("phase {} -> {}", self.phase.as_str(), phase.as_str());
            self.phase = phase;
        }
    }

    /// Manual piece commands are applied only while playing with input on.
    fn manual_allowed(&self) -> bool {
        self.accept_input && self.phase != Phase::GameOver
    }

    /// Clear the board, zero the score and spawn a fresh piece.
    ///
    /// Works from any phase, including game over. The clock's running flag is
    /// left as it was.
    pub fn reset(&mut self) {
        self.board = Board::new(self.config.rows, self.config.cols);
        self.active = None;
        self.score = 0;
        self.lines = 0;
        self.pieces_spawned = 0;
        self.last_lock = None;
        self.phase = Phase::Spawning;
        log::debug!("game reset");
        self.spawn_random();
    }

    /// Replace the active piece with a random new one.
    ///
    /// Returns false when ignored or when the new piece collided and ended
    /// the game.
    pub fn spawn(&mut self) -> bool {
        if !self.manual_allowed() {
            return false;
        }
        self.spawn_random()
    }

    fn spawn_random(&mut self) -> bool {
        let kind = self.rng.pick_kind();
        self.spawn_kind(kind)
    }

    /// Spawn a specific kind, replacing any active piece.
    ///
    /// Not subject to the manual-input gate; this is the hook for scripted
    /// setups. Ignored after game over.
    pub fn spawn_kind(&mut self, kind: PieceKind) -> bool {
        if self.phase == Phase::GameOver {
            return false;
        }
        self.enter(Phase::Spawning);

        let piece = ActivePiece::spawn(kind, self.board.cols());
        if piece.collides(&self.board) {
            self.active = None;
            self.clock.pause();
            self.enter(Phase::GameOver);
            log::info!(
                "game over: {} spawn blocked (score {}, lines {})",
                kind.as_str(),
                self.score,
                self.lines
            );
            return false;
        }

        self.active = Some(piece);
        self.pieces_spawned = self.pieces_spawned.wrapping_add(1);
        self.enter(Phase::Falling);
        true
    }

    /// Translate the active piece. Blocked moves are no-ops returning false.
    pub fn move_by(&mut self, dx: i8, dy: i8) -> bool {
        if !self.manual_allowed() {
            return false;
        }
        self.try_move(dx, dy)
    }

    fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        let Some(active) = self.active else {
            return false;
        };

        let Some(next) = active.moved(dx, dy) else {
            return false;
        };
        if next.collides(&self.board) {
            return false;
        }
        self.active = Some(next);
        true
    }

    /// Rotate the active piece 90° clockwise around its anchor.
    /// No wall kicks: a blocked rotation is a no-op returning false.
    pub fn rotate(&mut self) -> bool {
        if !self.manual_allowed() {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        let shape = rotate_cw(&active.shape);
        if collides(&self.board, &shape, active.x, active.y) {
            return false;
        }
        self.active = Some(ActivePiece { shape, ..active });
        true
    }

    /// One descent attempt; a blocked descent locks the piece, clears lines
    /// and spawns the next piece before returning.
    pub fn step(&mut self) -> StepOutcome {
        if !self.manual_allowed() {
            return StepOutcome::Ignored;
        }
        self.descend()
    }

    /// Descend until blocked, then lock exactly like a blocked [`step`](Self::step).
    pub fn hard_drop(&mut self) -> StepOutcome {
        if !self.manual_allowed() || self.active.is_none() {
            return StepOutcome::Ignored;
        }
        while self.try_move(0, 1) {}
        self.descend()
    }

    fn descend(&mut self) -> StepOutcome {
        if self.active.is_none() {
            return StepOutcome::Ignored;
        }
        if self.try_move(0, 1) {
            return StepOutcome::Moved;
        }
        StepOutcome::Locked(self.lock_active())
    }

    fn lock_active(&mut self) -> LockEvent {
        let Some(active) = self.active.take() else {
            return LockEvent::default();
        };
        self.enter(Phase::Locking);

        let cells = merge(&mut self.board, &active.shape, active.x, active.y) as u32;
        let cleared = clear_lines(&mut self.board, self.config.line_reward);
        self.score = self.score.saturating_add(cleared.points);
        self.lines = self.lines.saturating_add(cleared.lines);
        if cleared.lines > 0 {
            log::debug!(
                "cleared {} line(s) for {} points, score {}",
                cleared.lines,
                cleared.points,
                self.score
            );
        }

        let spawned = self.spawn_random();
        let event = LockEvent {
            cells,
            lines: cleared.lines,
            points: cleared.points,
            game_over: !spawned,
        };
        self.last_lock = Some(event);
        event
    }

    /// Start automatic descents. Returns false if already running or the
    /// game is over.
    pub fn start(&mut self) -> bool {
        if self.game_over() {
            return false;
        }
        let started = self.clock.start();
        if started {
            log::debug!("clock started ({}ms)", self.clock.interval_ms());
        }
        started
    }

    /// Stop automatic descents. Board, piece and score are untouched, and
    /// manual commands keep their own gate.
    pub fn pause(&mut self) {
        if self.clock.is_running() {
            log::debug!("clock paused");
        }
        self.clock.pause();
    }

    pub fn set_accept_input(&mut self, accept: bool) {
        self.accept_input = accept;
    }

    /// Feed elapsed wall time to the drop clock and descend when it is due.
    ///
    /// Clock descents ignore the manual-input gate. Returns `None` when no
    /// descent was due.
    pub fn tick(&mut self, elapsed_ms: u32) -> Option<StepOutcome> {
        if self.game_over() || !self.clock.advance(elapsed_ms) {
            return None;
        }
        Some(self.descend())
    }

    /// Apply one command. Returns whether it changed anything.
    ///
    /// Piece commands are dropped up front when manual input is off or the
    /// game is over; clock and lifecycle commands always go through.
    pub fn apply_command(&mut self, command: GameCommand) -> bool {
        if command.is_piece_command() && !self.manual_allowed() {
            log::trace!("{} ignored: manual input closed", command.as_str());
            return false;
        }
        match command {
            GameCommand::Spawn => self.spawn(),
            GameCommand::Move { dx, dy } => self.move_by(dx, dy),
            GameCommand::Rotate => self.rotate(),
            GameCommand::Step => self.step().is_applied(),
            GameCommand::HardDrop => self.hard_drop().is_applied(),
            GameCommand::Start => self.start(),
            GameCommand::Pause => {
                let was_running = self.clock.is_running();
                self.pause();
                was_running
            }
            GameCommand::Reset => {
                self.reset();
                true
            }
            GameCommand::ToggleInput => {
                self.accept_input = !self.accept_input;
                true
            }
        }
    }

    /// Write a snapshot into `out`, reusing its grid allocation.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.rows = self.board.rows();
        out.cols = self.board.cols();
        out.grid.clear();
        out.grid.extend_from_slice(self.board.cells());
        out.active = self.active.map(ActiveSnapshot::from);
        out.score = self.score;
        out.lines = self.lines;
        out.phase = self.phase;
        out.game_over = self.game_over();
        out.auto_tick = self.clock.is_running();
        out.accept_input = self.accept_input;
        out.drop_interval_ms = self.clock.interval_ms();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
