//! `pomodoro` - a Pomodoro countdown timer for the terminal.

use anyhow::Context;
use bubbletea_pomodoro::config::Config;
use bubbletea_pomodoro::{App, Error};
use bubbletea_rs::Program;
use std::fs::File;
use std::sync::Mutex;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn init_logging(config: &Config) -> anyhow::Result<()> {
    // stdout belongs to the UI; without a log file, events are dropped.
    let Some(path) = &config.log_file else {
        return Ok(());
    };
    let file = File::create(path).map_err(|source| Error::LogFile {
        path: path.clone(),
        source,
    })?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(config.log_filter()))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    init_logging(&config)?;
    info!(minutes = config.minutes, "launching terminal program");
    config.install();

    let program = Program::<App>::builder()
        .alt_screen(true)
        .build()
        .map_err(Error::from)
        .context("failed to set up the terminal")?;
    program
        .run()
        .await
        .map_err(Error::from)
        .context("pomodoro exited with an error")?;

    info!("pomodoro closed");
    Ok(())
}
