use std::fs::File;
use std::process::ExitCode;
use std::sync::Mutex;

use anyhow::Context;
use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use zoomlife::app::App;
use zoomlife::config::Cli;
use zoomlife::config::Config;
use zoomlife::term::Terminal;
use zoomlife::SURFACE_HEIGHT;
use zoomlife::SURFACE_WIDTH;

/// Log to `config.log`, if set. The terminal itself is busy showing the grid.
fn init_logging(config: &Config) -> anyhow::Result<()> {
    let Some(path) = &config.log else {
        return Ok(());
    };

    let file = File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();

    Ok(())
}

fn run() -> anyhow::Result<u8> {
    let config = Config::from(Cli::parse());
    init_logging(&config)?;

    let terminal = Terminal::new(SURFACE_WIDTH, SURFACE_HEIGHT).context("Failed to set up the terminal")?;

    let mut app = App::new(terminal, &config);
    let outcome = app.run();

    // restores the terminal before anything is printed
    drop(app);

    let outcome = outcome.inspect_err(|e| error!("{e}"))?;

    Ok(outcome.exit_code())
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
