use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use clap::ValueEnum;

use crate::zoom::ZoomLevel;

const DEFAULT_TICK_MS: u64 = 10;

/// What happens after the simulation is paused
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum PauseBehavior {
    /// Drop into a single edit pass. Confirming it resumes the simulation.
    #[default]
    #[value(name = "resume")]
    ResumeAfterEdit,

    /// Stay paused, with editing and zooming available, until the pause key is pressed again
    #[value(name = "hold")]
    Hold,
}

/// Conway's Game of Life on a zoomable 64x128 grid
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Delay between two generations
    #[arg(
        long = "tick-ms",
        value_name = "MILLISECONDS",
        default_value_t = DEFAULT_TICK_MS,
        value_parser = clap::value_parser!(u64).range(0..=60_000)
    )]
    pub tick_ms: u64,

    /// What pausing the simulation does
    #[arg(long, value_enum, default_value_t = PauseBehavior::default())]
    pub pause: PauseBehavior,

    /// Initial zoom level, 0 shows the whole grid
    #[arg(
        long,
        value_name = "LEVEL",
        default_value_t = ZoomLevel::default().index(),
        value_parser = clap::value_parser!(u8).range(0..=4)
    )]
    pub zoom: u8,

    /// Write logs to this file. Filtered with RUST_LOG, `warn` by default.
    #[arg(long, value_name = "PATH")]
    pub log: Option<PathBuf>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Delay between two generations
    pub tick: Duration,

    pub pause: PauseBehavior,

    pub zoom: ZoomLevel,

    /// Where to write logs. Nothing is logged without it.
    pub log: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick: Duration::from_millis(DEFAULT_TICK_MS),
            pause: PauseBehavior::default(),
            zoom: ZoomLevel::default(),
            log: None,
        }
    }
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Self {
            tick: Duration::from_millis(cli.tick_ms),
            pause: cli.pause,
            // clap already rejected anything past the last level
            zoom: ZoomLevel::new(cli.zoom).unwrap_or_default(),
            log: cli.log,
        }
    }
}
