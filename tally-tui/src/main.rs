mod app;
mod cli;
mod config;
mod logging;
mod runtime;
mod time_utils;
mod ui;

use anyhow::{Context, Result};
use app::App;
use clap::Parser;
use cli::{Cli, Commands};
use config::TallyConfig;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use tally_core::seed::demo_ledger;
use tally_core::{Ledger, LocalBackend};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Run { empty: false }) {
        Commands::ConfigPath => {
            let path = TallyConfig::ensure_exists()?;
            println!("{}", path.display());
            Ok(())
        }
        Commands::Run { empty } => run(empty).await,
    }
}

async fn run(empty: bool) -> Result<()> {
    let cfg = TallyConfig::load()?;
    logging::init(&TallyConfig::log_path()?, &cfg.log_level)?;

    let ledger = if cfg.seed_demo_data && !empty {
        demo_ledger()
    } else {
        Ledger::new()
    };
    tracing::info!(
        projects = ledger.projects().len(),
        entries = ledger.time_entries().len(),
        "starting tally"
    );
    let backend = LocalBackend::with_ledger(ledger);

    let mut app = App::new(&cfg, time_utils::local_today());
    runtime::refresh_snapshot(&mut app, &backend)
        .await
        .context("Failed to load initial data")?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let res = runtime::run_app(&mut terminal, &mut app, &backend).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    match &res {
        Ok(()) => tracing::info!("tally exited"),
        Err(e) => tracing::error!(error = %e, "tally exited with error"),
    }
    res
}
