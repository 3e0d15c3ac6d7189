//! Terminal falling-block puzzle (default binary).
//!
//! Configuration comes from `BLOCKFALL_*` environment variables, logs go to
//! a file because the terminal belongs to the game.

use std::fs::File;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};

use tui_blockfall::input::{map_key, should_quit};
use tui_blockfall::session::{Session, SessionConfig};
use tui_blockfall::term::{BoardView, FrameBuffer, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let config = SessionConfig::from_env().context("read BLOCKFALL_* configuration")?;
    init_logging(&config.log_path)?;
    log::info!("starting blockfall");

    let session = Session::start(config.clone())?;

    let mut term = TerminalRenderer::new();
    let result = term.enter().and_then(|()| run(&mut term, session, &config));

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(e) = &result {
        log::error!("blockfall exited with error: {e:#}");
    }
    result
}

fn init_logging(path: &str) -> Result<()> {
    let file = File::create(path).with_context(|| format!("create log file {path}"))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_module_path(false)
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, mut session: Session, config: &SessionConfig) -> Result<()> {
    let view = BoardView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snapshot = session.snapshot();
    let mut viewport = Viewport::new(0, 0);
    let poll = Duration::from_millis(config.tick_ms as u64);

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let size = Viewport::new(w, h);
        let changed = session.changed_snapshot();
        if changed.is_some() || size != viewport {
            if let Some(next) = changed {
                snapshot = next;
            }
            if size != viewport {
                term.invalidate();
                viewport = size;
            }
            view.render_into(&snapshot, viewport, &mut fb);
            term.present(&fb)?;
        }

        if !event::poll(poll)? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    break;
                }
                if let Some(cmd) = map_key(key) {
                    session.send(cmd);
                }
            }
            Event::Resize(..) => term.invalidate(),
            _ => {}
        }
    }

    let last = session.shutdown()?;
    log::info!("final score {} ({} lines)", last.score, last.lines);
    Ok(())
}
