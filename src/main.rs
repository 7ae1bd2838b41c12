use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use connect_four::config::{AppConfig, Interface};
use connect_four::error::SessionError;
use connect_four::logging;
use connect_four::session::Console;
use connect_four::ui::App;

/// Two-player Connect Four in the terminal.
#[derive(Parser)]
#[command(name = "connect-four", about = "Two-player Connect Four in the terminal")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect-four.toml")]
    config: PathBuf,

    /// Use the full-screen view instead of line prompts
    #[arg(long, conflicts_with = "console")]
    tui: bool,

    /// Use line prompts even if the config selects the full-screen view
    #[arg(long)]
    console: bool,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    let config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    let interface = if cli.tui {
        Interface::Tui
    } else if cli.console {
        Interface::Console
    } else {
        config.session.interface
    };

    let log_warnings = logging::init_tracing(&config.log, interface);
    if !cli.config.exists() {
        tracing::info!(path = %cli.config.display(), "config file not found, using defaults");
    }

    match interface {
        Interface::Console => run_console(&config),
        Interface::Tui => {
            let res = run_tui(&config).context("running full-screen view");
            // Nothing was logged while the view owned the terminal.
            for warning in &log_warnings {
                eprintln!("Warning: {warning}");
            }
            res
        }
    }
}

fn run_console(config: &AppConfig) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock(), config.display.clone());

    match console.run(config.session.offer_replay) {
        Ok(games) => {
            tracing::info!(games, "session finished");
            Ok(())
        }
        Err(SessionError::InputClosed) => {
            tracing::info!("input closed, ending session");
            Ok(())
        }
        Err(err) => Err(err).context("running console session"),
    }
}

fn run_tui(config: &AppConfig) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config.session.offer_replay, config.display.clone());
    let res = app.run(&mut terminal);

    // Restore terminal — always runs, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res
}
