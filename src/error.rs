//! Error type for the pomodoro crate.
//!
//! Nothing reachable from key input fails; errors only come from
//! programmatic configuration and from setting up the terminal program.

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while configuring or running the pomodoro app.
#[derive(Debug, Error)]
pub enum Error {
    /// A session length outside the selectable set was requested.
    #[error("unsupported duration: {0} min (choose one of 5, 10, 15, 20, 25, 30, 45, 60)")]
    UnsupportedDuration(u32),

    /// The log file given on the command line could not be opened.
    #[error("cannot open log file {}: {source}", .path.display())]
    LogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The terminal program failed to start or crashed.
    #[error("terminal program error: {0}")]
    Program(#[from] bubbletea_rs::Error),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;
