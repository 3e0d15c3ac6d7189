//! Async session driver.
//!
//! One [`GameState`](crate::core::GameState) lives inside a single tokio task
//! ([`run_session`]). Commands arrive over an `mpsc` channel, clock ticks come
//! from a `tokio::time::interval`, and every change is published as a
//! [`GameSnapshot`](crate::core::GameSnapshot) on a `watch` channel and,
//! when configured, appended to a JSON-lines trace.
//!
//! [`Session`] wraps all of this behind a synchronous handle for the terminal
//! front end.

pub mod config;
pub mod driver;
pub mod runtime;
pub mod trace;

pub use tui_blockfall_core as core;
pub use tui_blockfall_types as types;

pub use config::SessionConfig;
pub use driver::run_session;
pub use runtime::Session;
pub use trace::{TraceActive, TraceLock, TraceRecord, TraceWriter};
