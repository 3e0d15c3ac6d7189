//! Session runtime integration.
//!
//! Bridges the synchronous terminal loop with the async game loop.

use anyhow::{Context, Result};
use tokio::runtime::Runtime;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use crate::config::SessionConfig;
use crate::core::GameSnapshot;
use crate::driver::run_session;
use crate::types::GameCommand;

/// Running session: owns the tokio runtime and the game task.
pub struct Session {
    rt: Runtime,
    cmd_tx: mpsc::Sender<GameCommand>,
    snap_rx: watch::Receiver<GameSnapshot>,
    task: JoinHandle<Result<()>>,
}

impl Session {
    /// Create a runtime and spawn the game loop on it.
    pub fn start(config: SessionConfig) -> Result<Self> {
        let rt = Runtime::new().context("create tokio runtime")?;
        let (cmd_tx, cmd_rx) = mpsc::channel::<GameCommand>(config.max_pending_commands.max(1));
        let (snap_tx, snap_rx) = watch::channel(GameSnapshot::default());
        let task = rt.spawn(run_session(config, cmd_rx, snap_tx));

        Ok(Self {
            rt,
            cmd_tx,
            snap_rx,
            task,
        })
    }

    /// Queue a command without blocking. Returns false when the queue is
    /// full or the game loop has stopped.
    pub fn send(&self, cmd: GameCommand) -> bool {
        match self.cmd_tx.try_send(cmd) {
            Ok(()) => true,
            Err(e) => {
                log::debug!("command {} dropped: {e}", cmd.as_str());
                false
            }
        }
    }

    /// Latest published snapshot.
    pub fn snapshot(&self) -> GameSnapshot {
        self.snap_rx.borrow().clone()
    }

    /// The latest snapshot if it changed since the last call.
    pub fn changed_snapshot(&mut self) -> Option<GameSnapshot> {
        match self.snap_rx.has_changed() {
            Ok(true) => Some(self.snap_rx.borrow_and_update().clone()),
            _ => None,
        }
    }

    /// Close the command queue, wait for the game loop to drain it and
    /// return the final snapshot.
    pub fn shutdown(self) -> Result<GameSnapshot> {
        let Session {
            rt,
            cmd_tx,
            snap_rx,
            task,
        } = self;
        drop(cmd_tx);
        rt.block_on(task).context("session task panicked")??;
        let last = snap_rx.borrow().clone();
        Ok(last)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GameConfig;

    #[test]
    fn commands_are_applied_before_shutdown() {
        let config = SessionConfig {
            game: GameConfig::with_size(4, 4),
            ..SessionConfig::default()
        };
        let session = Session::start(config).unwrap();
        assert!(session.send(GameCommand::HardDrop));
        assert!(session.send(GameCommand::Reset));
        assert!(session.send(GameCommand::Start));

        let last = session.shutdown().unwrap();
        assert_eq!((last.rows, last.cols), (4, 4));
        assert!(last.auto_tick);
        assert_eq!(last.score, 0);
        assert!(last.grid.iter().all(|&c| !c));
    }
}
