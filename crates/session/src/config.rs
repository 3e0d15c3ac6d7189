//! Session configuration, read from `BLOCKFALL_*` environment variables.

use std::fmt::Display;
use std::str::FromStr;

use anyhow::{bail, ensure, Context, Result};

use crate::types::{GameConfig, MAX_BOARD_DIM, MIN_BOARD_DIM, TICK_MS};

/// Settings for one terminal session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub game: GameConfig,
    /// Period of the driver's clock ticks.
    pub tick_ms: u32,
    /// JSON-lines trace of every published snapshot.
    pub trace_path: Option<String>,
    /// Where the binary sends `log` output.
    pub log_path: String,
    pub max_pending_commands: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            game: GameConfig::default(),
            tick_ms: TICK_MS,
            trace_path: None,
            log_path: "blockfall.log".to_string(),
            max_pending_commands: 32,
        }
    }
}

impl SessionConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through `lookup`, falling back to defaults for
    /// unset or blank variables.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| {
            lookup(name)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };
        let defaults = Self::default();
        let game_defaults = defaults.game;

        let rows = parse(&var, "BLOCKFALL_ROWS")?.unwrap_or(game_defaults.rows);
        let cols = parse(&var, "BLOCKFALL_COLS")?.unwrap_or(game_defaults.cols);
        let game = GameConfig {
            rows,
            cols,
            drop_interval_ms: parse(&var, "BLOCKFALL_DROP_MS")?
                .unwrap_or(game_defaults.drop_interval_ms),
            line_reward: parse(&var, "BLOCKFALL_LINE_REWARD")?
                .unwrap_or(game_defaults.line_reward),
            seed: parse(&var, "BLOCKFALL_SEED")?.unwrap_or(game_defaults.seed),
            accept_input: match var("BLOCKFALL_ACCEPT_INPUT") {
                Some(s) => parse_flag(&s).context("BLOCKFALL_ACCEPT_INPUT")?,
                None => game_defaults.accept_input,
            },
        };
        ensure!(
            game.has_valid_size(),
            "board must be {MIN_BOARD_DIM}..={MAX_BOARD_DIM} cells per side, got {rows}x{cols}"
        );
        ensure!(game.drop_interval_ms > 0, "BLOCKFALL_DROP_MS must be positive");

        let tick_ms = parse(&var, "BLOCKFALL_TICK_MS")?.unwrap_or(defaults.tick_ms);
        ensure!(tick_ms > 0, "BLOCKFALL_TICK_MS must be positive");

        let max_pending_commands =
            parse(&var, "BLOCKFALL_MAX_PENDING")?.unwrap_or(defaults.max_pending_commands);
        ensure!(max_pending_commands > 0, "BLOCKFALL_MAX_PENDING must be positive");

        Ok(Self {
            game,
            tick_ms,
            trace_path: var("BLOCKFALL_TRACE_PATH"),
            log_path: var("BLOCKFALL_LOG_PATH").unwrap_or(defaults.log_path),
            max_pending_commands,
        })
    }
}

fn parse<T, F>(var: &F, name: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: Display,
    F: Fn(&str) -> Option<String>,
{
    match var(name) {
        Some(raw) => match raw.parse() {
            Ok(v) => Ok(Some(v)),
            Err(e) => bail!("{name}={raw:?}: {e}"),
        },
        None => Ok(None),
    }
}

fn parse_flag(raw: &str) -> Result<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => bail!("expected a boolean, got {raw:?}"),
    }
}
