use std::fs::File;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, ValueEnum};
use log::info;
use simplelog::{Config as LogConfig, LevelFilter, WriteLogger};

use gridsnake::game::GameConfig;
use gridsnake::modes::{HeadlessMode, HumanMode};

#[derive(Parser)]
#[command(name = "gridsnake")]
#[command(version, about = "Grid-based snake game")]
struct Cli {
    /// Game mode
    #[arg(long, default_value = "human")]
    mode: Mode,

    /// Board side length, in the same units as cell size
    #[arg(long, default_value = "400")]
    extent: i32,

    /// Cell side length
    #[arg(long, default_value = "20")]
    cell: i32,

    /// Milliseconds between simulation ticks
    #[arg(long, default_value = "100")]
    tick_ms: u64,

    /// Log file path
    #[arg(long, default_value = "gridsnake.log")]
    log_file: String,
}

#[derive(Clone, ValueEnum)]
enum Mode {
    /// Play with keyboard controls in the terminal
    Human,
    /// Drive the simulation over stdin/stdout
    Headless,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // File logger keeps the terminal free for the TUI
    WriteLogger::init(
        LevelFilter::Info,
        LogConfig::default(),
        File::create(&cli.log_file)
            .with_context(|| format!("Failed to create log file {}", cli.log_file))?,
    )
    .context("Failed to initialize logger")?;

    let mut config = GameConfig::new(cli.extent, cli.cell);
    config.tick_ms = cli.tick_ms;
    config.validate().map_err(|reason| anyhow!(reason))?;

    info!(
        "starting gridsnake: extent {}, cell {}, tick {}ms",
        config.board_extent, config.cell_size, config.tick_ms
    );

    match cli.mode {
        Mode::Human => {
            let mut human_mode = HumanMode::new(config);
            human_mode.run().await?;
        }
        Mode::Headless => {
            let mut headless_mode = HeadlessMode::new(config);
            headless_mode.run().await?;
        }
    }

    Ok(())
}
