//! The async game loop: commands and clock ticks serialized through one task.

use std::time::{SystemTime, UNIX_EPOCH};

use tokio::sync::{mpsc, watch};
use tokio::time::{self, Duration, Instant, MissedTickBehavior};

use crate::config::SessionConfig;
use crate::core::{GameSnapshot, GameState};
use crate::trace::{TraceRecord, TraceWriter};
use crate::types::GameCommand;

/// Publishes snapshots to observers and, optionally, to the trace.
struct Publisher {
    snap_tx: watch::Sender<GameSnapshot>,
    snapshot: GameSnapshot,
    trace: Option<TraceWriter>,
    seq: u64,
}

impl Publisher {
    fn publish(&mut self, game: &mut GameState, cause: &str) {
        let lock = game.take_last_lock();
        if let Some(event) = lock {
            log::debug!(
                "{cause}: locked {} cells, {} line(s), +{}{}",
                event.cells,
                event.lines,
                event.points,
                if event.game_over { ", game over" } else { "" }
            );
        }
        game.snapshot_into(&mut self.snapshot);
        if let Some(trace) = &self.trace {
            let rec =
                TraceRecord::from_snapshot(self.seq, current_timestamp_ms(), cause, &self.snapshot);
            trace.record(rec.with_lock(lock));
        }
        self.seq += 1;
        self.snap_tx.send_replace(self.snapshot.clone());
    }
}

/// Run one game until the command channel closes.
///
/// Every command goes through [`GameState::apply_command`]; a
/// `tokio::time::interval` of `config.tick_ms` feeds elapsed time to
/// [`GameState::tick`]. A snapshot is published once at startup and again
/// after every change.
pub async fn run_session(
    config: SessionConfig,
    mut cmd_rx: mpsc::Receiver<GameCommand>,
    snap_tx: watch::Sender<GameSnapshot>,
) -> anyhow::Result<()> {
    let mut game = GameState::new(config.game);
    let mut publisher = Publisher {
        snap_tx,
        snapshot: GameSnapshot::default(),
        trace: config.trace_path.clone().map(TraceWriter::spawn),
        seq: 0,
    };
    log::info!(
        "session started: {}x{} board, drop {}ms, tick {}ms",
        config.game.rows,
        config.game.cols,
        config.game.drop_interval_ms,
        config.tick_ms
    );
    publisher.publish(&mut game, "init");

    let mut interval = time::interval(Duration::from_millis(config.tick_ms.max(1) as u64));
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut last_tick = Instant::now();

    loop {
        tokio::select! {
            cmd = cmd_rx.recv() => {
                let Some(cmd) = cmd else { break };
                if game.apply_command(cmd) {
                    log::trace!("applied {}", cmd.as_str());
                    publisher.publish(&mut game, cmd.as_str());
                }
            }
            now = interval.tick() => {
                let elapsed = now.saturating_duration_since(last_tick).as_millis();
                last_tick = now;
                let elapsed = u32::try_from(elapsed).unwrap_or(u32::MAX);
                if game.tick(elapsed).is_some() {
                    publisher.publish(&mut game, "tick");
                }
            }
        }
    }

    log::info!(
        "session ended: score {}, lines {}, {} pieces",
        game.score(),
        game.lines(),
        game.pieces_spawned()
    );
    if let Some(trace) = publisher.trace.take() {
        trace.finish().await;
    }
    Ok(())
}

fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}
