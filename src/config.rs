//! Command-line configuration.
//!
//! `bubbletea_rs::Model::init` takes no arguments, so the parsed
//! configuration is installed once into a process-wide cell before the
//! program starts and read back by [`App`](crate::app::App) during init.

use crate::selector::{self, DEFAULT_MINUTES};
use clap::Parser;
use once_cell::sync::OnceCell;
use std::path::PathBuf;

static CONFIG: OnceCell<Config> = OnceCell::new();

/// Options for the `pomodoro` binary.
#[derive(Debug, Clone, Parser)]
#[command(name = "pomodoro")]
#[command(about = "A Pomodoro countdown timer for the terminal")]
#[command(version)]
pub struct Config {
    /// Session length selected at startup (5, 10, 15, 20, 25, 30, 45 or 60)
    #[arg(short, long, default_value_t = DEFAULT_MINUTES, value_parser = selector::parse_minutes)]
    pub minutes: u32,

    /// Write logs to this file (the terminal is taken by the UI)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            minutes: DEFAULT_MINUTES,
            log_file: None,
            verbose: false,
        }
    }
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Log filter directive for the crate
    pub fn log_filter(&self) -> String {
        let level = if self.verbose { "debug" } else { "info" };
        format!("bubbletea_pomodoro={},pomodoro={}", level, level)
    }

    /// Makes this configuration the one returned by [`current`].
    /// Returns `false` if one was already installed.
    pub fn install(self) -> bool {
        CONFIG.set(self).is_ok()
    }
}

/// The installed configuration, or the defaults if none was installed.
pub fn current() -> Config {
    CONFIG.get().cloned().unwrap_or_default()
}
