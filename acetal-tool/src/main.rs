//! Interactive terminal calendar with per-day hour schedules.

mod app;
mod config;
mod day_view;
mod editor;
mod error;
mod input;
mod logging;
mod picker;
mod shell;
mod text_input;
mod ui;

use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use crate::config::load_config;
use crate::logging::init_logging;

#[derive(Parser)]
#[command(name = "acet")]
#[command(about = "Month calendar with hour-by-hour day schedules", long_about = None)]
struct Cli {
    /// Path to the config file (default: <config dir>/acetal/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log level or filter directive, e.g. debug or acetal_cal=trace
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;
    let level = cli.log_level.as_deref().unwrap_or(&config.log_level);
    init_logging(level, &config.log_path())?;
    info!(log_file = %config.log_path().display(), "starting acet");

    shell::run(config.ui_settings())?;

    Ok(())
}
