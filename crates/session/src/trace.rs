//! JSON-lines trace of published snapshots.
//!
//! Records are handed to a dedicated writer task over an unbounded channel,
//! so the game loop never waits on the file system.

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::core::{GameSnapshot, LockEvent};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceActive {
    pub kind: String,
    pub x: i8,
    pub y: i8,
    /// Shape rows as `#`/`.` strings.
    pub shape: Vec<String>,
}

/// A piece merged into the board during the traced change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceLock {
    pub cells: u32,
    pub lines: u32,
    pub points: u32,
    pub game_over: bool,
}

impl From<LockEvent> for TraceLock {
    fn from(event: LockEvent) -> Self {
        Self {
            cells: event.cells,
            lines: event.lines,
            points: event.points,
            game_over: event.game_over,
        }
    }
}

/// One line of the trace file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceRecord {
    pub seq: u64,
    pub ts_ms: u64,
    /// What caused the change: a command name, `tick` or `init`.
    pub cause: String,
    pub phase: String,
    pub score: u32,
    pub lines: u32,
    pub game_over: bool,
    pub auto_tick: bool,
    pub accept_input: bool,
    pub active: Option<TraceActive>,
    pub board: Vec<String>,
    /// Set when the change locked a piece.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lock: Option<TraceLock>,
}

impl TraceRecord {
    pub fn from_snapshot(seq: u64, ts_ms: u64, cause: &str, snap: &GameSnapshot) -> Self {
        let cols = snap.cols.max(1) as usize;
        let board = snap
            .grid
            .chunks(cols)
            .map(|row| row.iter().map(|&f| if f { '#' } else { '.' }).collect())
            .collect();

        Self {
            seq,
            ts_ms,
            cause: cause.to_string(),
            phase: snap.phase.as_str().to_string(),
            score: snap.score,
            lines: snap.lines,
            game_over: snap.game_over,
            auto_tick: snap.auto_tick,
            accept_input: snap.accept_input,
            active: snap.active.map(|a| TraceActive {
                kind: a.kind.as_str().to_string(),
                x: a.x,
                y: a.y,
                shape: a.shape.to_strings(),
            }),
            board,
            lock: None,
        }
    }

    pub fn with_lock(self, lock: Option<LockEvent>) -> Self {
        Self {
            lock: lock.map(TraceLock::from),
            ..self
        }
    }
}

/// Handle to a running trace writer task.
pub struct TraceWriter {
    tx: mpsc::UnboundedSender<TraceRecord>,
    task: JoinHandle<()>,
}

impl TraceWriter {
    /// Spawn the writer on the current runtime. The file is opened in append
    /// mode; failures are logged and end tracing without affecting play.
    pub fn spawn(path: String) -> Self {
        let (tx, mut rx) = mpsc::unbounded_channel::<TraceRecord>();
        let task = tokio::spawn(async move {
            use tokio::fs::OpenOptions;
            use tokio::io::AsyncWriteExt;

            let mut file = match OpenOptions::new().create(true).append(true).open(&path).await {
                Ok(f) => f,
                Err(e) => {
                    log::warn!("trace disabled, cannot open {path}: {e}");
                    return;
                }
            };

            let mut buf: Vec<u8> = Vec::with_capacity(4096);
            while let Some(rec) = rx.recv().await {
                buf.clear();
                if let Err(e) = serde_json::to_writer(&mut buf, &rec) {
                    log::warn!("trace record {} not serializable: {e}", rec.seq);
                    continue;
                }
                buf.push(b'\n');
                if let Err(e) = file.write_all(&buf).await {
                    log::warn!("trace write to {path} failed, stopping: {e}");
                    return;
                }
            }

            if let Err(e) = file.flush().await {
                log::warn!("trace flush to {path} failed: {e}");
            }
        });
        Self { tx, task }
    }

    /// Queue a record. Dropped silently once the writer has stopped.
    pub fn record(&self, rec: TraceRecord) {
        let _ = self.tx.send(rec);
    }

    /// Close the channel and wait for queued records to reach the file.
    pub async fn finish(self) {
        drop(self.tx);
        if let Err(e) = self.task.await {
            log::warn!("trace writer task failed: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameState;
    use crate::types::{GameConfig, PieceKind};

    #[test]
    fn record_mirrors_snapshot() {
        let mut game = GameState::new(GameConfig::with_size(4, 4));
        game.spawn_kind(PieceKind::O);
        game.hard_drop();
        game.spawn_kind(PieceKind::T);

        let rec = TraceRecord::from_snapshot(3, 42, "hardDrop", &game.snapshot());
        assert_eq!(rec.seq, 3);
        assert_eq!(rec.phase, "falling");
        assert_eq!(rec.board, vec!["....", "....", ".##.", ".##."]);
        let active = rec.active.unwrap();
        assert_eq!(active.kind, "t");
        assert_eq!((active.x, active.y), (0, 0));
        assert_eq!(active.shape, vec![".#.", "###"]);
        assert_eq!(rec.lock, None);
    }

    #[test]
    fn lock_event_is_carried_into_record() {
        let mut game = GameState::new(GameConfig::with_size(4, 4));
        game.spawn_kind(PieceKind::O);
        game.hard_drop();

        let rec = TraceRecord::from_snapshot(1, 0, "hardDrop", &game.snapshot())
            .with_lock(game.take_last_lock());
        let lock = rec.lock.unwrap();
        assert_eq!((lock.cells, lock.lines, lock.points), (4, 0, 0));
        assert!(!lock.game_over);

        let line = serde_json::to_string(&rec).unwrap();
        assert!(line.contains("\"lock\""));
        let idle = TraceRecord::from_snapshot(2, 0, "tick", &game.snapshot());
        assert!(!serde_json::to_string(&idle).unwrap().contains("\"lock\""));
    }

    #[tokio::test]
    async fn writer_appends_one_json_object_per_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.jsonl");
        let game = GameState::new(GameConfig::default());

        let writer = TraceWriter::spawn(path.to_string_lossy().into_owned());
        writer.record(TraceRecord::from_snapshot(0, 1, "init", &game.snapshot()));
        writer.record(TraceRecord::from_snapshot(1, 2, "tick", &game.snapshot()));
        writer.finish().await;

        let text = std::fs::read_to_string(&path).unwrap();
        let records: Vec<TraceRecord> = text
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].cause, "init");
        assert_eq!(records[1].seq, 1);
        assert_eq!(records[1].board.len(), 18);
    }
}
